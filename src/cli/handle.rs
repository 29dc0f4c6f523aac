//! Handle command.
//!
//! Runs one Lambda proxy event through the handler and prints the proxy
//! response, for exercising the endpoint locally.

use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::response::{handle_event, Event};
use crate::error::Result;

/// Handle an event read from `path`, or stdin when `None`.
pub fn execute(config: &Config, path: Option<&Path>) -> Result<()> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    let event: Event = serde_json::from_str(&raw)?;
    debug!(method = ?event.http_method, "handling event");

    let response = handle_event(&event, |credentials| super::authenticate(config, credentials));
    output::data(&serde_json::to_string_pretty(&response)?);

    Ok(())
}
