//! Events written by `plan`, `classify` and fatal errors
//!
//! Every line carries `event` and `command`, the same envelope the build
//! stream uses, with the payload fields flattened next to them.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Event<'a, B: Serialize> {
    event: &'static str,
    command: &'a str,
    #[serde(flatten)]
    body: B,
}

#[derive(Debug, Clone, Serialize)]
pub struct Started {
    version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Finished {
    success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Failure<'a> {
    code: &'a str,
    message: String,
}

pub fn start(command: &str) -> Event<'_, Started> {
    Event {
        event: "start",
        command,
        body: Started {
            version: env!("CARGO_PKG_VERSION"),
        },
    }
}

/// One result row; `row` must serialize as a map.
pub fn data<B: Serialize>(command: &str, row: B) -> Event<'_, B> {
    Event {
        event: "data",
        command,
        body: row,
    }
}

pub fn complete(command: &str) -> Event<'_, Finished> {
    Event {
        event: "complete",
        command,
        body: Finished { success: true },
    }
}

pub fn error<'a>(
    command: &'a str,
    code: &'a str,
    message: impl Into<String>,
) -> Event<'a, Failure<'a>> {
    Event {
        event: "error",
        command,
        body: Failure {
            code,
            message: message.into(),
        },
    }
}
