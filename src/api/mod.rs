//! Purpose: Define the public Rust API of `kvctl`.
//! Exports: Config loading, the `read`/`write` operations, and the HTTP client.
//! Role: The only public path to the crate's internals; the CLI uses nothing else.

mod auth;
mod ops;
mod remote;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::config::{Config, Credentials, DEFAULT_CONFIG_PATH};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::payload::{DEFAULT_PAYLOAD_PATH, load_payload, read_payload};
pub use auth::BasicAuth;
pub use ops::{read, write};
pub use remote::RemoteClient;
