use std::time::Duration;

use log::warn;
use reqwest::{Client, ClientBuilder, StatusCode};

use crate::error::{LottoError, Result};
use crate::ratelimit::RateLimiter;

// Both boards serve plain bot user agents an empty shell page.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:133.0) Gecko/20100101 Firefox/133.0";

const TRANSIENT_RETRIES: usize = 2;
const RETRY_BACKOFF: Duration = Duration::from_millis(400);

/// One fetched page: final URL, HTTP status and raw body. The status stays
/// attached because "no such draw" answers can ride on non-2xx statuses, and
/// the parser owns that translation.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl RawPage {
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }
}

pub struct RequestClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RequestClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            // Result queries only answer once the board's cookies are held.
            .cookie_store(true)
            .timeout(timeout)
            // nlb.lk has a history of serving an incomplete certificate chain.
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| LottoError::Network(format!("could not build http client: {e}")))?;
        let rate_limiter = RateLimiter::new();
        Ok(Self {
            client,
            rate_limiter,
        })
    }

    /// GET `url` with `query` appended, retrying transient transport
    /// failures a fixed number of times. HTTP failure statuses are not
    /// retried; the page comes back as-is for the caller to interpret.
    pub async fn fetch(&self, url: &str, query: &[(&'static str, String)]) -> Result<RawPage> {
        let mut attempt = 0;
        loop {
            // Wait (non-blocking) until our self-imposed rate-limiting
            // policy allows another request.
            self.rate_limiter.wait_until_ready().await;

            match self.try_fetch(url, query).await {
                Ok(page) => return Ok(page),
                Err(e) if is_transient(&e) && attempt < TRANSIENT_RETRIES => {
                    attempt += 1;
                    warn!("transient failure fetching {url} (retry {attempt}): {e}");
                    tokio::time::sleep(RETRY_BACKOFF).await;
                }
                Err(e) => return Err(LottoError::Network(format!("GET {url} failed: {e}"))),
            }
        }
    }

    async fn try_fetch(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> reqwest::Result<RawPage> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        let status = response.status();
        let final_url = response.url().to_string();
        let body = response.text().await?;
        Ok(RawPage {
            url: final_url,
            status,
            body,
        })
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}
