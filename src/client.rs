//! The NASA ADS API client.

use crate::error::{Error, Result};
use log::debug;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default ADS API root.
pub const DEFAULT_BASE_URL: &str = "https://api.adsabs.harvard.edu/v1";

const USER_AGENT: &str = concat!("adsbib/", env!("CARGO_PKG_VERSION"));

/// Async client for the ADS API.
///
/// All requests are authenticated with the bearer token the client was built
/// with. Requests are sent one at a time; the client holds no other state.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> adsbib::error::Result<()> {
/// let client = adsbib::AdsClient::from_token_file("ADS_token.txt")?;
/// for library in client.list_libraries().await? {
///     println!("{} ({} documents)", library.name, library.num_documents);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdsClient {
    pub(crate) http: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for AdsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AdsClient {
    /// Create a new client with the given API token.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(Error::AuthRequired);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_token,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client from a credential file whose first line is the token.
    pub fn from_token_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(read_token_file(path)?)
    }

    /// Create a client from the `ADS_API_TOKEN` (or `SCIX_API_TOKEN`) environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("ADS_API_TOKEN")
            .or_else(|_| std::env::var("SCIX_API_TOKEN"))
            .map_err(|_| Error::AuthRequired)?;
        Self::new(token)
    }

    /// Override the base URL (useful for testing).
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Base URL must be http or https: {}",
                url
            )));
        }
        self.base_url = url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an authenticated GET request to the ADS API.
    pub(crate) async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(params)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await?;

        handle_response(response).await
    }
}

/// Read the bearer token from the first line of a credential file.
pub fn read_token_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let token = contents.lines().next().unwrap_or("").trim();
    if token.is_empty() {
        return Err(Error::AuthRequired);
    }
    Ok(token.to_string())
}

/// Handle the HTTP response, mapping status codes to errors.
async fn handle_response(response: reqwest::Response) -> Result<String> {
    let status = response.status().as_u16();

    match status {
        200..=299 => Ok(response.text().await?),
        401 => Err(Error::AuthRequired),
        404 => Err(Error::NotFound(response.url().path().to_string())),
        429 => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            Err(Error::RateLimited { retry_after })
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api {
                status,
                message: body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(AdsClient::new("  "), Err(Error::AuthRequired)));
    }

    #[test]
    fn test_read_token_file_first_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  abc123token  ").unwrap();
        writeln!(file, "ignored").unwrap();
        assert_eq!(read_token_file(file.path()).unwrap(), "abc123token");
    }

    #[test]
    fn test_read_token_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_token_file(dir.path().join("ADS_token.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_token_file_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            read_token_file(file.path()),
            Err(Error::AuthRequired)
        ));
    }

    #[test]
    fn test_with_base_url() {
        let client = AdsClient::new("token")
            .unwrap()
            .with_base_url("http://localhost:8080/v1/")
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");

        let err = AdsClient::new("token")
            .unwrap()
            .with_base_url("not a url")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = AdsClient::new("token")
            .unwrap()
            .with_base_url("ftp://example.org")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = AdsClient::new("secret-token").unwrap();
        let shown = format!("{:?}", client);
        assert!(!shown.contains("secret-token"));
        assert!(shown.contains(DEFAULT_BASE_URL));
    }
}
