pub mod coordinates;
pub mod precipitation;
pub mod weather_data;
pub mod weather_symbol;
