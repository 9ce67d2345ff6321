//! This module provides the main entry point for the Renewables.ninja client.
//! It owns the HTTP client, the API token and the base URL, and hands out the
//! wind, solar and batch request builders.

use crate::batch::driver::BatchDownloader;
use crate::batch::pacing::{FixedPacing, TokioSleeper};
use crate::clients::solar_client::SolarClient;
use crate::clients::wind_client::WindClient;
use crate::download::data_loader::SimulationLoader;
use crate::error::NinjaError;
use crate::types::location::LatLon;
use crate::types::parameters::Query;
use crate::types::result_table::ResultTable;
use crate::url_builder::{query_url, DEFAULT_BASE_URL};
use bon::bon;
use log::debug;
use reqwest::Client;
use std::env;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the API token, read by [`NinjaClient::from_env`].
pub const TOKEN_ENV: &str = "NINJA_TOKEN";
/// Optional environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "NINJA_API_URL";

/// The main client struct for downloading Renewables.ninja simulations.
///
/// Create an instance with [`NinjaClient::builder()`] or [`NinjaClient::from_env()`].
///
/// # Examples
///
/// ```rust
/// # use renewables_ninja::{NinjaClient, NinjaError};
/// # fn run() -> Result<(), NinjaError> {
/// let client = NinjaClient::builder().token("your_token_here").build()?;
/// assert_eq!(client.base_url(), "https://www.renewables.ninja/api");
/// # Ok(())
/// # }
/// ```
pub struct NinjaClient {
    loader: SimulationLoader,
    base_url: String,
}

#[bon]
impl NinjaClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.token(impl Into<String>)`: **Required.** Personal API token, sent as `Authorization: Token <token>`.
    /// * `.base_url(impl Into<String>)`: Optional. API root, defaults to [`DEFAULT_BASE_URL`].
    /// * `.timeout(Duration)`: Optional. Whole-request timeout. No timeout by default.
    ///
    /// # Errors
    ///
    /// Returns [`NinjaError::ClientBuild`] if the HTTP client cannot be initialised.
    #[builder]
    pub fn new(
        #[builder(into)] token: String,
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, NinjaError> {
        let mut http = Client::builder();
        if let Some(timeout) = timeout {
            http = http.timeout(timeout);
        }
        let download_client = http.build().map_err(NinjaError::ClientBuild)?;

        Ok(Self {
            loader: SimulationLoader::new(download_client, token),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Creates a client from the `NINJA_TOKEN` and (optional) `NINJA_API_URL`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`NinjaError::MissingToken`] if `NINJA_TOKEN` is unset or not unicode.
    pub fn from_env() -> Result<Self, NinjaError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`NinjaClient::from_env`], reading variables through `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NinjaError> {
        let token = lookup(TOKEN_ENV).ok_or(NinjaError::MissingToken(TOKEN_ENV))?;
        Self::builder()
            .token(token)
            .maybe_base_url(lookup(BASE_URL_ENV))
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Downloads one simulation and writes it to `<output_dir>/ninja_{wind|solar}_{label}.csv`.
    ///
    /// One GET is issued; the output file is overwritten if it exists. The directory
    /// must already exist.
    ///
    /// # Errors
    ///
    /// * [`NinjaError::NetworkRequest`] if the request cannot be sent or the body not read.
    /// * [`NinjaError::Authentication`] for 401/403, [`NinjaError::RateLimited`] for 429,
    ///   [`NinjaError::HttpStatus`] for any other non-success status.
    /// * [`NinjaError::BodyDecode`] if the body is not UTF-8 CSV.
    /// * [`NinjaError::FileWrite`] / [`NinjaError::CsvWrite`] if the file cannot be written.
    pub async fn fetch_and_persist(
        &self,
        coordinate: LatLon,
        query: &Query,
        output_dir: &Path,
        label: &str,
    ) -> Result<ResultTable, NinjaError> {
        let url = query_url(&self.base_url, coordinate, query);
        let output_path = output_dir.join(query.endpoint().file_name(label));
        debug!(
            "Fetching {} simulation for '{}' into {:?}",
            query.endpoint(),
            label,
            output_path
        );
        self.loader.fetch_to_file(&url, label, &output_path).await
    }

    /// Starts a wind download, see [`WindClient`].
    pub fn wind(&self) -> WindClient<'_> {
        WindClient::new(self)
    }

    /// Starts a solar download, see [`SolarClient`].
    pub fn solar(&self) -> SolarClient<'_> {
        SolarClient::new(self)
    }

    /// Creates a sequential batch downloader pacing requests with [`FixedPacing`].
    pub fn batch(&self) -> BatchDownloader<'_, FixedPacing, TokioSleeper> {
        BatchDownloader::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_api::{MockApi, TEST_TOKEN};
    use crate::types::parameters::{SolarParameters, WindParameters};
    use axum::http::StatusCode;
    use tempfile::tempdir;

    fn client_for(api: &MockApi) -> NinjaClient {
        NinjaClient::builder()
            .token(TEST_TOKEN)
            .base_url(api.base_url.clone())
            .build()
            .unwrap()
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .unwrap()
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_default_base_url() -> Result<(), NinjaError> {
        let client = NinjaClient::builder()
            .token("abc")
            .timeout(Duration::from_secs(30))
            .build()?;
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let result = NinjaClient::from_lookup(|_| None);
        assert!(matches!(result, Err(NinjaError::MissingToken(TOKEN_ENV))));
    }

    #[test]
    fn test_from_lookup_reads_token_and_base_url() -> Result<(), NinjaError> {
        let client = NinjaClient::from_lookup(|key| match key {
            TOKEN_ENV => Some("abc".to_string()),
            BASE_URL_ENV => Some("http://localhost:9000/api".to_string()),
            _ => None,
        })?;
        assert_eq!(client.base_url(), "http://localhost:9000/api");
        Ok(())
    }

    #[test]
    fn test_from_lookup_defaults_base_url() -> Result<(), NinjaError> {
        let client =
            NinjaClient::from_lookup(|key| (key == TOKEN_ENV).then(|| "abc".to_string()))?;
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_and_persist_keeps_first_row() -> Result<(), NinjaError> {
        let api = MockApi::serving("a,b\n1,2\n3,4").await;
        let client = client_for(&api);
        let dir = tempdir().unwrap();

        let table = client
            .fetch_and_persist(
                LatLon(-37.23, 143.05),
                &Query::Wind(WindParameters::default()),
                dir.path(),
                "site1",
            )
            .await?;

        let expected = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string(), "4".to_string()],
        ];
        assert_eq!(table.rows()?, expected);
        assert_eq!(read_rows(&dir.path().join("ninja_wind_site1.csv")), expected);
        assert_eq!(api.state.hits(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_sends_token_and_query() -> Result<(), NinjaError> {
        let api = MockApi::serving("x\n").await;
        let client = client_for(&api);
        let dir = tempdir().unwrap();

        client
            .fetch_and_persist(
                LatLon(45.0, 22.0),
                &Query::Solar(SolarParameters::default()),
                dir.path(),
                "pv",
            )
            .await?;

        let requests = api.state.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].authorization.as_deref(),
            Some("Token test-token")
        );
        assert!(requests[0].uri.starts_with("/api/data/pv?&lat=45&lon=22&"));
        assert!(dir.path().join("ninja_solar_pv.csv").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_rerun_overwrites_file() -> Result<(), NinjaError> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ninja_wind_again.csv");
        std::fs::write(&path, "old,content,that,is,longer\nmore,rows\nand,more\n").unwrap();

        let api = MockApi::serving("time,electricity\n2019-01-01 00:00,0.5").await;
        let client = client_for(&api);
        let query = Query::Wind(WindParameters::default());

        client
            .fetch_and_persist(LatLon(1.0, 2.0), &query, dir.path(), "again")
            .await?;
        client
            .fetch_and_persist(LatLon(1.0, 2.0), &query, dir.path(), "again")
            .await?;

        assert_eq!(
            read_rows(&path),
            vec![
                vec!["time".to_string(), "electricity".to_string()],
                vec!["2019-01-01 00:00".to_string(), "0.5".to_string()],
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_unauthorized_is_authentication_error() {
        let api = MockApi::with_status(StatusCode::UNAUTHORIZED).await;
        let client = client_for(&api);
        let dir = tempdir().unwrap();

        let result = client
            .fetch_and_persist(
                LatLon(1.0, 2.0),
                &Query::Wind(WindParameters::default()),
                dir.path(),
                "nope",
            )
            .await;

        assert!(matches!(result, Err(NinjaError::Authentication { .. })));
        assert!(!dir.path().join("ninja_wind_nope.csv").exists());
    }

    #[tokio::test]
    async fn test_too_many_requests_is_rate_limited() {
        let api = MockApi::with_status(StatusCode::TOO_MANY_REQUESTS).await;
        let client = client_for(&api);
        let dir = tempdir().unwrap();

        let result = client
            .fetch_and_persist(
                LatLon(1.0, 2.0),
                &Query::Wind(WindParameters::default()),
                dir.path(),
                "busy",
            )
            .await;

        assert!(matches!(result, Err(NinjaError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn test_server_error_is_http_status() {
        let api = MockApi::with_status(StatusCode::BAD_GATEWAY).await;
        let client = client_for(&api);
        let dir = tempdir().unwrap();

        let result = client
            .fetch_and_persist(
                LatLon(1.0, 2.0),
                &Query::Solar(SolarParameters::default()),
                dir.path(),
                "down",
            )
            .await;

        match result {
            Err(NinjaError::HttpStatus { status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY)
            }
            other => panic!("expected HttpStatus, got {:?}", other.map(|t| t.height())),
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = NinjaClient::builder()
            .token(TEST_TOKEN)
            .base_url("http://127.0.0.1:1/api")
            .build()
            .unwrap();
        let dir = tempdir().unwrap();

        let result = client
            .fetch_and_persist(
                LatLon(1.0, 2.0),
                &Query::Wind(WindParameters::default()),
                dir.path(),
                "offline",
            )
            .await;

        assert!(matches!(result, Err(NinjaError::NetworkRequest(_, _))));
    }

    #[tokio::test]
    async fn test_non_utf8_body_is_decode_error() {
        let api = MockApi::serving_bytes(b"\xff\xfe,1").await;
        let client = client_for(&api);
        let dir = tempdir().unwrap();

        let result = client
            .fetch_and_persist(
                LatLon(1.0, 2.0),
                &Query::Wind(WindParameters::default()),
                dir.path(),
                "garbled",
            )
            .await;

        assert!(matches!(result, Err(NinjaError::BodyDecode { .. })));
        assert_eq!(api.state.hits(), 1);
        assert!(!dir.path().join("ninja_wind_garbled.csv").exists());
    }

    #[tokio::test]
    async fn test_missing_output_dir_is_not_created() {
        let api = MockApi::serving("a,b").await;
        let client = client_for(&api);
        let dir = tempdir().unwrap();
        let missing = dir.path().join("not-there");

        let result = client
            .fetch_and_persist(
                LatLon(1.0, 2.0),
                &Query::Wind(WindParameters::default()),
                &missing,
                "site",
            )
            .await;

        assert!(matches!(result, Err(NinjaError::FileWrite(_, _))));
        assert!(!missing.exists());
    }
}
