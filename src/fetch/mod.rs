mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::Url;

/// Issues a GET for `url` and returns the body of a 2xx response.
///
/// Non-2xx statuses are turned into errors so callers see them the same way
/// as a connection failure.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: Url) -> reqwest::Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}
