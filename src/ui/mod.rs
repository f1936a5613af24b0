pub mod chrome;
pub mod report_printer;
pub mod table_printer;
#[cfg(test)]
mod tests;
mod width_util;
