//! Purpose: Provide a blocking HTTP client for the remote key/value endpoint.
//! Exports: `RemoteClient`.
//! Role: Owns URL construction, request headers, and response decoding.
//! Invariants: Requests are built relative to the configured base path (`{url}/a/{key}`, `{url}/modify`).
//! Invariants: The key is appended as written; existing `%XX` escapes and `/` pass through.
//! Invariants: No retries; one call is one request.
//! Invariants: Only ureq's built-in 30s connect timeout applies; no read or overall timeout is set.
//! Invariants: Response statuses are never turned into errors; callers decide what a status means.
#![allow(clippy::result_large_err)]

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;
use url::Url;

use super::auth::BasicAuth;
use crate::core::error::{Error, ErrorKind};

type ApiResult<T> = Result<T, Error>;

#[derive(Clone)]
pub struct RemoteClient {
    inner: Arc<RemoteClientInner>,
}

struct RemoteClientInner {
    base_url: Url,
    auth: Option<BasicAuth>,
    agent: ureq::Agent,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        let agent = ureq::AgentBuilder::new().build();
        Ok(Self {
            inner: Arc::new(RemoteClientInner {
                base_url,
                auth: None,
                agent,
            }),
        })
    }

    pub fn with_basic_auth(mut self, auth: BasicAuth) -> Self {
        if let Some(inner) = Arc::get_mut(&mut self.inner) {
            inner.auth = Some(auth);
        } else {
            self.inner = Arc::new(RemoteClientInner {
                base_url: self.inner.base_url.clone(),
                auth: Some(auth),
                agent: self.inner.agent.clone(),
            });
        }
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// `GET {url}/a/{key}` and decode the body as JSON.
    ///
    /// The status is not checked: an error response with a JSON body is
    /// returned like any other value. A non-JSON body is an `ErrorKind::Json`
    /// error carrying the status.
    pub fn fetch_value(&self, key: &str) -> ApiResult<Value> {
        let url = build_url(&self.inner.base_url, &format!("a/{key}"))?;
        debug!(method = "GET", url = %url, "sending request");
        let response = match self.request("GET", &url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(err)) => return Err(transport_error(&url, err)),
        };
        let status = response.status();
        debug!(status, "received response");
        read_json_response(response).map_err(|err| {
            let err = err.with_status(status);
            if (200..300).contains(&status) {
                err
            } else {
                err.with_hint(format!("The server answered with status {status}."))
            }
        })
    }

    /// `POST {url}/modify` with `payload` as the JSON body; returns the response status.
    pub fn modify(&self, payload: &Value) -> ApiResult<u16> {
        let url = build_url(&self.inner.base_url, "modify")?;
        let body = serde_json::to_string(payload).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to encode request json")
                .with_source(err)
        })?;
        debug!(method = "POST", url = %url, bytes = body.len(), "sending request");
        let response = self
            .request("POST", &url)
            .set("Content-Type", "application/json")
            .send_string(&body);
        let status = match response {
            Ok(resp) => resp.status(),
            Err(ureq::Error::Status(code, _resp)) => code,
            Err(ureq::Error::Transport(err)) => return Err(transport_error(&url, err)),
        };
        debug!(status, "received response");
        Ok(status)
    }

    fn request(&self, method: &str, url: &Url) -> ureq::Request {
        let mut request = self.inner.agent.request(method, url.as_str());
        if let Some(auth) = &self.inner.auth {
            request = request.set("Authorization", &auth.header_value());
        }
        request
    }
}

fn normalize_base_url(raw: String) -> ApiResult<Url> {
    let mut url = Url::parse(&raw).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message(format!("invalid config url: {raw}"))
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("config url must use http or https scheme"));
    }
    if url.cannot_be_a_base() {
        return Err(Error::new(ErrorKind::Usage).with_message("config url cannot be a base"));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

// `set_path` only escapes characters that are invalid in a path, so `%`
// sequences in the key are sent unchanged.
fn build_url(base_url: &Url, tail: &str) -> ApiResult<Url> {
    if base_url.cannot_be_a_base() {
        return Err(Error::new(ErrorKind::Usage).with_message("config url cannot be a base"));
    }
    let mut url = base_url.clone();
    let path = format!("{}/{tail}", base_url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

// Streams the body; `into_string` caps responses at 10 MiB.
fn read_json_response(response: ureq::Response) -> ApiResult<Value> {
    serde_json::from_reader(response.into_reader()).map_err(|err| {
        if err.is_io() {
            Error::new(ErrorKind::Io)
                .with_message("failed to read response body")
                .with_source(err)
        } else {
            Error::new(ErrorKind::Json)
                .with_message("invalid response json")
                .with_source(err)
        }
    })
}

fn transport_error(url: &Url, err: ureq::Transport) -> Error {
    Error::new(ErrorKind::Transport)
        .with_message(format!("request to {url} failed"))
        .with_source(err)
}
