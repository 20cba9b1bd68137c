use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{BackendError, Book, QueryOutcome};

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// The catalog doubles as the availability probe, so it is bounded much
    /// tighter than answer generation.
    pub catalog_timeout: Duration,
    pub request_timeout: Duration,
}

impl BackendSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
            connect_timeout: Duration::from_secs(5),
            catalog_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// The backend collaborator contract. The core never parses document
/// content; this is the sole channel through which questions are answered.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<Book>, BackendError>;
    async fn select_book(&self, book_id: &str) -> Result<(), BackendError>;
    async fn dispatch_query(
        &self,
        query: &str,
        page_number: Option<&str>,
        image_mode: bool,
    ) -> Result<QueryOutcome, BackendError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    settings: BackendSettings,
}

impl HttpBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::Network(err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogPayload {
    status: String,
    #[serde(default)]
    books: Vec<Book>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AckPayload {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryPayload {
    status: String,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct SelectBookRequest<'a> {
    book_id: &'a str,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    page_number: Option<&'a str>,
    is_image_mode: bool,
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn fetch_catalog(&self) -> Result<Vec<Book>, BackendError> {
        let response = self
            .client
            .get(self.endpoint("/api/books"))
            .timeout(self.settings.catalog_timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let payload: CatalogPayload = read_payload(response).await?;
        if payload.status == "success" {
            Ok(payload.books)
        } else {
            Err(BackendError::Api {
                message: payload
                    .message
                    .unwrap_or_else(|| "catalog unavailable".to_string()),
            })
        }
    }

    async fn select_book(&self, book_id: &str) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.endpoint("/api/select-book"))
            .timeout(self.settings.catalog_timeout)
            .json(&SelectBookRequest { book_id })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let payload: AckPayload = read_payload(response).await?;
        if payload.status == "success" {
            Ok(())
        } else {
            Err(BackendError::Api {
                message: payload
                    .message
                    .unwrap_or_else(|| "book selection failed".to_string()),
            })
        }
    }

    async fn dispatch_query(
        &self,
        query: &str,
        page_number: Option<&str>,
        image_mode: bool,
    ) -> Result<QueryOutcome, BackendError> {
        let response = self
            .client
            .post(self.endpoint("/api/query"))
            .json(&QueryRequest {
                query,
                page_number,
                is_image_mode: image_mode,
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let payload: QueryPayload = read_payload(response).await?;
        match payload.status.as_str() {
            "success" => match payload.response {
                Some(response) => Ok(QueryOutcome::Answered { response }),
                None => Err(BackendError::BadPayload(
                    "success reply without a response field".to_string(),
                )),
            },
            "page_required" => Ok(QueryOutcome::PageRequired),
            "error" => Ok(QueryOutcome::Failed {
                message: payload
                    .message
                    .unwrap_or_else(|| "the backend reported an error".to_string()),
            }),
            other => Err(BackendError::BadPayload(format!(
                "unknown status {other:?}"
            ))),
        }
    }
}

/// Decodes a JSON payload, falling back to the HTTP status for non-JSON
/// error pages. The backend reports failures as JSON bodies on non-2xx
/// statuses too, so the body is always tried first.
async fn read_payload<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    match serde_json::from_slice(&bytes) {
        Ok(payload) => Ok(payload),
        Err(err) if status.is_success() => Err(BackendError::BadPayload(err.to_string())),
        Err(_) => Err(BackendError::HttpStatus(status.as_u16())),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::Timeout;
    }
    BackendError::Network(err.to_string())
}
