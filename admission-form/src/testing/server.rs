//! Test server wrapper over `axum-test`

use axum::http::{HeaderName, HeaderValue};
use axum::Router;

/// In-process server for handler tests
pub struct TestServer {
    inner: axum_test::TestServer,
}

impl TestServer {
    /// Start a server for `app`
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be started
    pub fn new(app: Router) -> anyhow::Result<Self> {
        let inner = axum_test::TestServer::new(app)?;
        Ok(Self { inner })
    }

    /// Plain GET
    pub fn get(&self, path: &str) -> axum_test::TestRequest {
        self.inner.get(path)
    }

    /// Plain POST
    pub fn post(&self, path: &str) -> axum_test::TestRequest {
        self.inner.post(path)
    }

    /// GET as HTMX sends it
    pub fn htmx_get(&self, path: &str) -> axum_test::TestRequest {
        Self::as_htmx(self.inner.get(path))
    }

    /// POST as HTMX sends it
    pub fn htmx_post(&self, path: &str) -> axum_test::TestRequest {
        Self::as_htmx(self.inner.post(path))
    }

    fn as_htmx(request: axum_test::TestRequest) -> axum_test::TestRequest {
        request.add_header(
            HeaderName::from_static("hx-request"),
            HeaderValue::from_static("true"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use axum_htmx::HxRequest;

    async fn echo(HxRequest(is_htmx): HxRequest) -> &'static str {
        if is_htmx {
            "partial"
        } else {
            "full"
        }
    }

    #[tokio::test]
    async fn test_htmx_header_is_sent() {
        let server = TestServer::new(Router::new().route("/", get(echo))).unwrap();

        server.get("/").await.assert_text("full");
        server.htmx_get("/").await.assert_text("partial");
    }
}
