mod common;
mod config;
mod session;
