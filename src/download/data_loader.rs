use crate::error::NinjaError;
use crate::types::result_table::ResultTable;
use log::{debug, info, warn};
use polars::prelude::*;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use tokio::task;

/// Performs authenticated downloads and persists the resulting tables.
pub struct SimulationLoader {
    download_client: Client,
    token: String,
}

impl SimulationLoader {
    pub fn new(download_client: Client, token: String) -> SimulationLoader {
        SimulationLoader {
            download_client,
            token,
        }
    }

    /// Downloads `url`, parses the body and writes it to `output_path`.
    ///
    /// Exactly one request is made. The file at `output_path` is replaced if present.
    pub async fn fetch_to_file(
        &self,
        url: &str,
        label: &str,
        output_path: &Path,
    ) -> Result<ResultTable, NinjaError> {
        let body = self.download(url).await?;
        let table = Self::csv_to_table(body, url).await?;
        let table = Self::persist(table, output_path).await?;
        info!(
            "Saved {} rows for '{}' to {:?}",
            table.height(),
            label,
            output_path
        );
        Ok(table)
    }

    /// Sends one GET and returns the raw body.
    async fn download(&self, url: &str) -> Result<Vec<u8>, NinjaError> {
        info!("Downloading data from {}", url);

        let response = self
            .download_client
            .get(url)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()
            .await
            .map_err(|e| NinjaError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                let url = url.to_string();
                return Err(match e.status() {
                    Some(status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)) => {
                        NinjaError::Authentication { url, status }
                    }
                    Some(StatusCode::TOO_MANY_REQUESTS) => NinjaError::RateLimited { url },
                    Some(status) => NinjaError::HttpStatus {
                        url,
                        status,
                        source: e,
                    },
                    None => NinjaError::NetworkRequest(url, e),
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| NinjaError::NetworkRequest(url.to_string(), e))?;
        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    /// Parses CSV bytes (without header) into a table using a blocking task.
    ///
    /// Reading is flexible about row width, so on an in-memory body the only failure
    /// left is a field that is not valid UTF-8.
    async fn csv_to_table(body: Vec<u8>, url: &str) -> Result<ResultTable, NinjaError> {
        let url_owned = url.to_string();

        task::spawn_blocking(move || {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(body.as_slice());

            let rows = reader
                .records()
                .map(|record| {
                    record
                        .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                        .map_err(|e| NinjaError::BodyDecode {
                            url: url_owned.clone(),
                            source: e,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            ResultTable::from_rows(&rows)
        })
        .await?
    }

    /// Writes the table as headerless CSV, truncating any existing file.
    async fn persist(table: ResultTable, path: &Path) -> Result<ResultTable, NinjaError> {
        let path_buf: PathBuf = path.to_path_buf();
        task::spawn_blocking(move || {
            let mut df = table.into_frame();
            let mut file = std::fs::File::create(&path_buf)
                .map_err(|e| NinjaError::FileWrite(path_buf.clone(), e))?;
            CsvWriter::new(&mut file)
                .include_header(false)
                .finish(&mut df)
                .map_err(|e| NinjaError::CsvWrite(path_buf, e))?;
            Ok::<ResultTable, NinjaError>(ResultTable::new(df))
        })
        .await?
    }
}
