//! Purpose: Load the JSON payload document submitted by the writer.
//! Exports: `load_payload`, `read_payload`, `DEFAULT_PAYLOAD_PATH`.
//! Role: No schema is enforced; any single JSON value is accepted.
//! Invariants: The path `-` means stdin.
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;

use super::error::{Error, ErrorKind};

pub const DEFAULT_PAYLOAD_PATH: &str = "examples/post.json";

pub fn load_payload(path: impl AsRef<Path>) -> Result<Value, Error> {
    let path = path.as_ref();
    if path.as_os_str() == "-" {
        return read_payload(io::stdin().lock()).map_err(|err| err.with_path("-"));
    }
    let file = std::fs::File::open(path)
        .map_err(|err| Error::from_io(err, "failed to open payload file", path))?;
    read_payload(file).map_err(|err| err.with_path(path))
}

pub fn read_payload(mut reader: impl Read) -> Result<Value, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read payload")
            .with_source(err)
    })?;
    serde_json::from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Json)
            .with_message("invalid payload json")
            .with_hint("Provide a single JSON value (e.g. '{\"x\":1}').")
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::{load_payload, read_payload};
    use crate::core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn reads_any_json_value() {
        let value = read_payload(&b"[1, \"two\", {\"three\": null}]"[..]).expect("payload");
        assert_eq!(value, json!([1, "two", {"three": null}]));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = read_payload(&b"{\"a\":1} extra"[..]).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Json);
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_payload(temp.path().join("post.json")).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
