pub mod choice;
pub mod flows;
pub mod models;
#[allow(clippy::module_inception)]
pub mod prompter;
