pub mod solar_client;
pub mod wind_client;
