//! Purpose: Load the configuration record that addresses the remote service.
//! Exports: `Config`, `Credentials`, `DEFAULT_CONFIG_PATH`.
//! Role: Parsed once per invocation and passed by reference into each operation.
//! Invariants: A loaded `Config` is never mutated.
//! Invariants: Fields an operation needs are checked by that operation, not at load time.
use std::path::Path;

use serde::Deserialize;

use super::error::{Error, ErrorKind};

pub const DEFAULT_CONFIG_PATH: &str = "examples/stg.json";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|err| Error::from_io(err, "failed to read config file", path))?;
        Self::from_json(&text).map_err(|err| err.with_path(path))
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|err| {
            Error::new(ErrorKind::Json)
                .with_message("invalid config json")
                .with_hint(r#"Expected {"url": "...", "key": "...", "credentials": {"user": "...", "pass": "..."}}."#)
                .with_source(err)
        })
    }

    pub fn require_key(&self) -> Result<&str, Error> {
        self.key
            .as_deref()
            .ok_or_else(|| missing_field("key"))
    }

    pub fn require_credentials(&self) -> Result<&Credentials, Error> {
        self.credentials
            .as_ref()
            .ok_or_else(|| missing_field("credentials"))
    }
}

fn missing_field(field: &str) -> Error {
    Error::new(ErrorKind::Usage)
        .with_message(format!("config is missing `{field}`"))
        .with_hint(format!("Add a `{field}` entry to the config file."))
}
