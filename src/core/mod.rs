pub mod catalog;
pub mod cli;
pub mod context;
pub mod dataset;
pub mod models;
pub mod types;
