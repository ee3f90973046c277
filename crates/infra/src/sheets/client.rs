//! `RecordSource` adapter for the `/api/sheets` endpoint
//!
//! One GET per worksheet. The body is decoded row by row: a row that does
//! not fit the record type is logged and skipped so one bad row never hides
//! the rest of the sheet.

use async_trait::async_trait;
use kanban_core::RecordSource;
use kanban_domain::constants::SHEETS_API_PATH;
use kanban_domain::{KanbanError, Result, SheetResponse, SheetsConfig};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::http::HttpClient;

/// Envelope with rows left undecoded until the record type is known
#[derive(Debug, Deserialize)]
struct RawSheetResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Vec<Value>>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the sheets endpoint
#[derive(Clone)]
pub struct SheetsClient {
    http: HttpClient,
    endpoint: Url,
}

impl SheetsClient {
    /// Build a client for `base_url`, which must be an absolute http(s) URL.
    pub fn new(base_url: &str, http: HttpClient) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| KanbanError::Config(format!("Invalid sheets base URL {base_url:?}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(KanbanError::Config(format!(
                "Unsupported sheets URL scheme: {}",
                base.scheme()
            )));
        }

        let endpoint = base
            .join(SHEETS_API_PATH)
            .map_err(|e| KanbanError::Config(format!("Invalid sheets endpoint: {e}")))?;

        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &SheetsConfig) -> Result<Self> {
        Self::new(&config.base_url, HttpClient::for_sheets(config)?)
    }

    /// `GET` target for one worksheet
    pub fn worksheet_url(&self, worksheet: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("worksheet", worksheet);
        url
    }

    /// Fetch and decode every row of `worksheet`.
    ///
    /// A `success: false` body is returned as-is (without rows) rather than
    /// as an error; transport and status failures are errors.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_rows<T: DeserializeOwned>(&self, worksheet: &str) -> Result<SheetResponse<T>> {
        let raw: RawSheetResponse = self.http.get_json(self.worksheet_url(worksheet)).await?;

        if !raw.success {
            debug!(worksheet, error = ?raw.error, "sheet responded with success=false");
            return Ok(SheetResponse { success: false, data: Vec::new(), error: raw.error });
        }

        let rows = raw.data.unwrap_or_default();
        let total = rows.len();
        let data: Vec<T> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value::<T>(row) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(worksheet, index, error = %err, "skipping malformed sheet row");
                    None
                }
            })
            .collect();

        debug!(worksheet, total, decoded = data.len(), "sheet rows decoded");
        Ok(SheetResponse { success: true, data, error: raw.error })
    }
}

#[async_trait]
impl<T> RecordSource<T> for SheetsClient
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self, worksheet: &str) -> Result<SheetResponse<T>> {
        self.fetch_rows(worksheet).await
    }
}
