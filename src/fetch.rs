//! Birthday page retrieval.
//!
//! Builds the onthisday.com birthdays URL from the month and day parameters
//! and fetches it over a blocking HTTP client. The extraction core never
//! sees this layer; it consumes only the returned body bytes.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Base of the birthdays listing; month and day are appended as path
/// segments.
pub const BASE_URL: &str = "https://www.onthisday.com/birthdays/";

const USER_AGENT: &str = concat!("onthisday-poi/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for page retrieval.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// URL construction failed.
    #[error("invalid URL: {0}")]
    Url(String),

    /// Transport-level failure (connect, timeout, body read).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Status {
        /// HTTP status code of the response.
        status: StatusCode,
        /// URL that was requested.
        url: String,
    },
}

/// Build the birthdays page URL for a month and day.
///
/// The two values are used verbatim as path segments; the `url` crate
/// percent-encodes anything that needs it.
///
/// # Example
///
/// ```rust
/// use onthisday_poi::fetch::birthdays_url;
///
/// let url = birthdays_url("10", "17")?;
/// assert_eq!(url.as_str(), "https://www.onthisday.com/birthdays/10/17");
/// # Ok::<(), onthisday_poi::fetch::FetchError>(())
/// ```
pub fn birthdays_url(month: &str, day: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(BASE_URL).map_err(|e| FetchError::Url(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| FetchError::Url("base URL cannot hold path segments".to_string()))?
        .pop_if_empty()
        .push(month)
        .push(day);
    Ok(url)
}

/// Blocking HTTP fetcher for birthday pages.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with the crate user-agent and a request timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a page and return the raw response body bytes.
    ///
    /// Non-success statuses are surfaced as [`FetchError::Status`]; the body
    /// is returned undecoded so charset handling stays with the caller.
    pub fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        debug!(url = url.as_str(), "fetching birthday page");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes()?;
        debug!(url = url.as_str(), bytes = body.len(), "fetched birthday page");
        Ok(body.to_vec())
    }
}
