use anyhow::{Context, anyhow, bail};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

pub use reqwest::Method;
use reqwest::Url;

/// A single call against the API, relative to the configured base.
///
/// The path is kept as raw segments; each one is percent-encoded on its own
/// when the URL is built, so a namespace name can never add a query string or
/// another path level.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

fn segments<I, S>(path: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    path.into_iter().map(Into::into).collect()
}

impl ApiRequest {
    pub fn get<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::GET,
            segments: segments(path),
            body: None,
        }
    }

    pub fn post<I, S>(path: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::POST,
            segments: segments(path),
            body: Some(body),
        }
    }

    pub fn delete<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::DELETE,
            segments: segments(path),
            body: None,
        }
    }

    /// Unencoded path, e.g. `/namespaces/bar`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Unclassified response as it came off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue exactly one request. `Err` means no response was received.
    async fn send(&self, request: ApiRequest) -> anyhow::Result<RawResponse>;
}

/// reqwest-backed transport that authenticates every call with a bearer token.
pub struct HttpTransport {
    client: reqwest::Client,
    api_base: Url,
    token: String,
}

impl HttpTransport {
    /// Trailing slashes on `api_base` are ignored.
    pub fn new(api_base: &str, token: &str) -> anyhow::Result<Self> {
        let api_base = Url::parse(api_base.trim_end_matches('/'))
            .with_context(|| format!("invalid API base URL {:?}", api_base))?;
        if api_base.cannot_be_a_base() {
            bail!("invalid API base URL {:?}: not a hierarchical URL", api_base.as_str());
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("k8spin/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            api_base,
            token: token.to_string(),
        })
    }

    /// Append `segments` to the base, percent-encoding each one.
    /// `.`/`..` and empty segments cannot be addressed and are refused.
    pub fn url(&self, segments: &[String]) -> anyhow::Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || s.as_str() == "." || s.as_str() == "..")
        {
            bail!("{:?} cannot be used as a path segment", bad);
        }
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base {} cannot take a path", self.api_base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Token shown in debug output: first 4 chars, rest masked.
fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    format!("{}***", prefix)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> anyhow::Result<RawResponse> {
        let url = self.url(&request.segments)?;
        debug!("Request: {} {}", request.method, url);
        debug!("Request header: Authorization: Bearer {}", redact(&self.token));

        let mut builder = self
            .client
            .request(request.method.clone(), url.clone())
            .bearer_auth(&self.token);
        if let Some(body) = &request.body {
            debug!("Request header: Content-Type: application/json");
            debug!("Request body: {}", body);
            builder = builder.json(body);
        }

        let resp = builder
            .send()
            .await
            .with_context(|| format!("{} {} failed", request.method, url))?;

        let status = resp.status().as_u16();
        let headers: Vec<(String, String)> = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<non-ascii>").to_string(),
                )
            })
            .collect();
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("failed to read response body from {}", url))?
            .to_vec();

        debug!("HTTP Code: {}", status);
        for (name, value) in &headers {
            debug!("Response header: {}: {}", name, value);
        }
        debug!("Response body: {}", String::from_utf8_lossy(&body));

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
