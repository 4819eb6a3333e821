//! Storefront HTTP client.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, info};

use crate::csrf::CsrfToken;

/// Errors that can occur when talking to the storefront server.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}: {body}")]
    Status {
        /// Response status
        status: StatusCode,

        /// Response body, for diagnostics
        body: String,
    },
}

impl HttpError {
    /// Status code of the failed response, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(error) => error.status(),
        }
    }
}

/// JSON client for the storefront web application.
///
/// Session cookies are kept between requests, and the configured CSRF token is attached
/// to every request whose method is not safe (POST, PUT, DELETE, ...).
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    base_url: String,
    http: Client,
    csrf: Option<CsrfToken>,
}

impl StorefrontClient {
    /// Create a client for the server at `base_url`, e.g. `"http://localhost:8080"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, HttpError> {
        let http = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            csrf: None,
        })
    }

    /// Use the given CSRF token for mutating requests.
    #[must_use]
    pub fn with_csrf(mut self, csrf: CsrfToken) -> Self {
        self.csrf = Some(csrf);
        self
    }

    /// CSRF token attached to mutating requests, if any.
    pub fn csrf(&self) -> Option<&CsrfToken> {
        self.csrf.as_ref()
    }

    /// Absolute URL for a server path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Load a server-rendered page and take the CSRF token from its metadata.
    ///
    /// Returns `false`, keeping any previous token, when the page carries none.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure.
    pub async fn refresh_csrf(&mut self, page_path: &str) -> Result<bool, HttpError> {
        let response = self.request(Method::GET, page_path).send().await?;
        let html = checked(response).await?.text().await?;

        match CsrfToken::from_page_metadata(&html) {
            Some(csrf) => {
                debug!(page = page_path, header = csrf.header_name(), "loaded csrf token");
                self.csrf = Some(csrf);

                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx response or an unexpected body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, HttpError> {
        debug!(path, "GET");

        let response = self.request(Method::GET, path).query(query).send().await?;

        Ok(checked(response).await?.json().await?)
    }

    /// Send a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx response or an unexpected body.
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        info!(%method, path, "sending request");

        let response = self.request(method, path).json(body).send().await?;

        Ok(checked(response).await?.json().await?)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mutating = !method.is_safe();
        let builder = self.http.request(method, self.url(path));

        match &self.csrf {
            Some(csrf) if mutating => builder.header(csrf.header_name(), csrf.token()),
            _ => builder,
        }
    }
}

async fn checked(response: Response) -> Result<Response, HttpError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(HttpError::Status { status, body })
}
