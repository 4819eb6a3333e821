//! Server Connection Config

use clap::Args;

use crate::csrf::{CsrfToken, DEFAULT_CSRF_HEADER};

/// Server connection settings.
#[derive(Debug, Args)]
pub struct ClientConfig {
    /// Base URL of the storefront web application
    #[arg(
        long,
        env = "STOREFRONT_BASE_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    pub base_url: String,

    /// Header the CSRF token is sent in
    #[arg(long, env = "CSRF_HEADER", default_value = DEFAULT_CSRF_HEADER, global = true)]
    pub csrf_header: String,

    /// CSRF token for mutating requests
    #[arg(long, env = "CSRF_TOKEN", hide_env_values = true, global = true)]
    pub csrf_token: Option<String>,

    /// Page to read the CSRF token from when none is configured
    #[arg(long, env = "CSRF_PAGE", default_value = "/", global = true)]
    pub csrf_page: String,
}

impl ClientConfig {
    /// Configured CSRF token, if any.
    #[must_use]
    pub fn csrf(&self) -> Option<CsrfToken> {
        self.csrf_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .map(|token| CsrfToken::new(self.csrf_header.clone(), token))
    }
}
