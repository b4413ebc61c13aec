pub mod analyze;
pub mod api_key;
pub mod app;
pub mod cli;
pub mod config;
pub mod goal;
pub mod paths;
pub mod persistence;
pub mod problems;
pub mod render;
pub mod solution;
pub mod stats;
