use async_trait::async_trait;
use reqwest::{Request, Response};

/// Transport seam for the weather client.
///
/// Production code uses [`BasicClient`](super::BasicClient); tests plug in a
/// canned implementation that answers from fixtures.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

#[async_trait]
impl<'a, C: HttpClient + ?Sized> HttpClient for &'a C {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        (**self).execute(req).await
    }
}
