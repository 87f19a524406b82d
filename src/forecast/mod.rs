pub mod error;
pub mod models;
pub mod normalizer;
pub mod parameter_table;
pub mod service;
