use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NinjaError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("No API token provided, set the {0} environment variable")]
    MissingToken(&'static str),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("API rejected the token for {url} with status {status}")]
    Authentication {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("API rate limit reached for {url}")]
    RateLimited { url: String },

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response body for {url} is not valid UTF-8 CSV")]
    BodyDecode {
        url: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write output file '{0}'")]
    FileWrite(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing CSV file '{0}'")]
    CsvWrite(PathBuf, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("Failed to read locations file '{0}'")]
    LocationsRead(PathBuf, #[source] csv::Error),

    #[error("Invalid location row in '{0}'")]
    LocationsParse(PathBuf, #[source] csv::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Batch stopped at item {index} ('{label}')")]
    BatchItem {
        index: usize,
        label: String,
        #[source]
        source: Box<NinjaError>,
    },
}
