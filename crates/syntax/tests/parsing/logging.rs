// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log events emitted while scanning and parsing.

use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use ush_syntax::parse_input;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a TRACE-level subscriber and return what it logged.
fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

#[test]
fn parse_logs_start_and_finish() {
    let (logs, result) = with_tracing(|| parse_input("echo a; echo b"));
    assert!(result.is_ok());
    assert!(logs.contains("parsing input"), "{logs}");
    assert!(logs.contains("parsed input"), "{logs}");
    assert!(logs.contains("statements=2"), "{logs}");
}

#[test]
fn scanner_logs_each_token() {
    let (logs, _) = with_tracing(|| parse_input("ls -l"));
    assert!(logs.contains("kind=raw"), "{logs}");
    assert!(logs.contains("kind=whitespace"), "{logs}");
    assert!(logs.contains("kind=end-of-input"), "{logs}");
}

#[test]
fn failure_logs_error_and_origin() {
    let (logs, result) = with_tracing(|| parse_input("echo ${}"));
    assert!(result.is_err());
    assert!(logs.contains("parse failed"), "{logs}");
    assert!(logs.contains("bad parameter"), "{logs}");
    assert!(logs.contains("braced_parameter at "), "{logs}");
}

#[test]
fn quiet_at_info_level() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(logs.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        assert!(parse_input("echo $(date) | wc").is_ok());
        assert!(parse_input("echo ${}").is_err());
    });
    assert_eq!(logs.contents(), "");
}
