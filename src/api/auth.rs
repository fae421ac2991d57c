//! Purpose: Build HTTP Basic `Authorization` values from configured credentials.
//! Exports: `BasicAuth`.
//! Role: Validates credentials up front so a bad pair fails before any request.
//! Invariants: The user id never contains `:`; neither part contains control characters.
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::config::Credentials;
use crate::core::error::{Error, ErrorKind};

#[derive(Clone)]
pub struct BasicAuth {
    user: String,
    pass: String,
}

impl BasicAuth {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Result<Self, Error> {
        let user = user.into();
        let pass = pass.into();
        // The first colon separates user and password on the receiving side.
        if user.contains(':') {
            return Err(Error::new(ErrorKind::Usage)
                .with_message("credentials user must not contain ':'"));
        }
        if user.chars().any(is_ctl) || pass.chars().any(is_ctl) {
            return Err(Error::new(ErrorKind::Usage)
                .with_message("credentials must not contain control characters"));
        }
        Ok(Self { user, pass })
    }

    pub fn from_credentials(credentials: &Credentials) -> Result<Self, Error> {
        Self::new(credentials.user.as_str(), credentials.pass.as_str())
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn header_value(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.user, self.pass));
        format!("Basic {encoded}")
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

fn is_ctl(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}')
}
