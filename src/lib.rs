mod batch;
mod clients;
mod download;
mod error;
mod ninja;
mod types;
mod url_builder;

#[cfg(test)]
mod mock_api;

pub use error::NinjaError;
pub use ninja::*;

pub use clients::solar_client::*;
pub use clients::wind_client::*;

pub use batch::driver::{BatchDownloader, BatchSummary};
pub use batch::pacing::{FixedPacing, NoPacing, PacingPolicy, Sleeper, TokioSleeper};

pub use types::endpoint::Endpoint;
pub use types::location::{LatLon, Location};
pub use types::parameters::{DateRange, Query, SolarParameters, Tracking, WindParameters};
pub use types::result_table::ResultTable;

pub use url_builder::{query_url, solar_url, wind_url, DEFAULT_BASE_URL};
