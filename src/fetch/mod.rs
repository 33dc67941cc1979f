//! Page fetching.
//!
//! Downloads one document and captures what the analyzers need: the decoded
//! body, the time it took, the response headers and the final URL after
//! redirects. No retries happen here; the client's timeout is the only limit
//! on how long a fetch may take.

mod request;

use std::time::Instant;

use log::{debug, warn};
use url::Url;

use crate::error_handling::FetchError;
use crate::models::{RawInput, ResponseHeaders};
use request::RequestHeaders;

/// Fetches `url` and returns the audit input.
///
/// # Arguments
///
/// * `client` - HTTP client (timeout, user agent and redirect policy are taken from it)
/// * `url` - Page to fetch
/// * `max_body_bytes` - Largest body that will be read
///
/// # Errors
///
/// - `FetchError::Request` if the request fails or the body cannot be read
/// - `FetchError::Status` if the final response is not 2xx
/// - `FetchError::BodyTooLarge` if the body exceeds `max_body_bytes`
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &Url,
    max_body_bytes: usize,
) -> Result<RawInput, FetchError> {
    let request_error = |source: reqwest::Error| FetchError::Request {
        url: url.to_string(),
        source,
    };

    let started = Instant::now();
    let mut response = RequestHeaders::apply_to_request_builder(client.get(url.clone()))
        .send()
        .await
        .map_err(request_error)?;

    let final_url = response.url().clone();
    if final_url != *url {
        debug!("{} redirected to {}", url, final_url);
    }

    let status = response.status();
    if !status.is_success() {
        warn!("{} returned HTTP {}", final_url, status.as_u16());
        return Err(FetchError::Status {
            url: final_url.to_string(),
            status: status.as_u16(),
        });
    }

    let too_large = || FetchError::BodyTooLarge {
        url: final_url.to_string(),
        limit: max_body_bytes,
    };
    if response
        .content_length()
        .is_some_and(|len| len > max_body_bytes as u64)
    {
        return Err(too_large());
    }

    let headers: ResponseHeaders = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    // Content-Length may be absent or wrong, so the limit is enforced while reading
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(request_error)? {
        if body.len() + chunk.len() > max_body_bytes {
            return Err(too_large());
        }
        body.extend_from_slice(&chunk);
    }
    let response_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    debug!(
        "Fetched {} ({} bytes, {} headers) in {}ms",
        final_url,
        body.len(),
        headers.len(),
        response_time_ms
    );

    Ok(RawInput {
        html: String::from_utf8_lossy(&body).into_owned(),
        response_time_ms,
        headers,
        url: final_url,
    })
}
