pub mod client;
pub mod condition_codes;
pub mod csv_parser;
pub mod error;
pub mod link;
pub mod locate_station;
pub mod models;
