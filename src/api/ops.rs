//! Purpose: The two operations: read one value, write one payload.
//! Exports: `read`, `write`.
//! Role: Glue between a loaded `Config` and `RemoteClient`.
//! Invariants: Every local input is validated before the single network call.
//! Invariants: `write` never inspects the response status.
use serde_json::Value;
use tracing::debug;

use super::auth::BasicAuth;
use super::remote::RemoteClient;
use crate::core::config::Config;
use crate::core::error::Error;

/// `GET {url}/a/{key}` without credentials; returns the decoded body.
pub fn read(config: &Config) -> Result<Value, Error> {
    let key = config.require_key()?;
    let client = RemoteClient::new(config.url.as_str())?;
    client.fetch_value(key)
}

/// `POST {url}/modify` with basic auth and `payload` as the body.
///
/// Succeeds once the server has answered, whatever the status.
pub fn write(config: &Config, payload: &Value) -> Result<(), Error> {
    let auth = BasicAuth::from_credentials(config.require_credentials()?)?;
    let client = RemoteClient::new(config.url.as_str())?.with_basic_auth(auth);
    let status = client.modify(payload)?;
    if !(200..300).contains(&status) {
        debug!(status, "ignoring non-success status from modify");
    }
    Ok(())
}
