//! Purpose: Hold top-level CLI command dispatch for `kvctl`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Local files are loaded before any request is sent.
//! Invariants: Only `read` writes to stdout (plus `completion`).

use super::*;
use clap::CommandFactory;
use kvctl::api::{self, Config};
use std::io::Write;

pub(super) fn dispatch_command(command: Command) -> Result<(), Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "kvctl", &mut io::stdout());
            Ok(())
        }
        Command::Read { config, pretty } => {
            let config = Config::load(&config)?;
            let value = api::read(&config)?;
            emit_value(&value, pretty)
        }
        Command::Write { config, payload } => {
            let config = Config::load(&config)?;
            let payload = api::load_payload(&payload)?;
            api::write(&config, &payload)
        }
    }
}

fn emit_value(value: &Value, pretty: bool) -> Result<(), Error> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode json")
            .with_source(err)
    })?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write to stdout")
            .with_source(err)
    })
}
