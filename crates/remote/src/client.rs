use std::time::Duration;

use crate::error::RemoteError;

/// A synchronous request/response exchange with a bounded wait.
///
/// One instance is shared per process; `reqwest::Client` pools
/// connections internally and is cheap to clone.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl RemoteClient {
    /// Creates a client whose calls are each bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout,
        }
    }

    /// Issues a GET and returns the response body on success.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, url: &str) -> Result<String, RemoteError> {
        let request = self.http.get(url).timeout(self.timeout);
        self.execute(request).await
    }

    /// Issues a POST with an optional plain-text body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post(&self, url: &str, body: Option<String>) -> Result<String, RemoteError> {
        let mut request = self.http.post(url).timeout(self.timeout);
        if let Some(body) = body {
            request = request.body(body);
        }
        self.execute(request).await
    }

    /// Issues a POST carrying a JSON payload.
    #[tracing::instrument(skip(self, payload))]
    pub async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<String, RemoteError> {
        let request = self.http.post(url).timeout(self.timeout).json(payload);
        self.execute(request).await
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String, RemoteError> {
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::classify(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "remote call answered non-success");
            return Err(RemoteError::UnexpectedStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| RemoteError::classify(e, self.timeout))
    }
}
