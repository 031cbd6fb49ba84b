//! Shared mock infrastructure for unit tests.
//!
//! In-memory implementations of the application ports with call recording
//! and scripted faults, so each test file doesn't re-define them.

#![allow(clippy::expect_used, dead_code)]

use std::collections::{HashMap, HashSet};
use std::process::Output;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use namesync_cli::application::ports::{
    ChangeNotifier, CommandRunner, Confirmer, FieldStore, ProgressReporter,
};
use namesync_cli::domain::StoreError;
use namesync_common::ChangeRecord;

// ── Field store ───────────────────────────────────────────────────────────────

/// One call made against a `MemoryFieldStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get(String),
    Set(String, String),
}

/// In-memory `FieldStore` with scripted faults.
///
/// Faults are configured with the builder methods before the store is used:
/// - `unreadable(f)`: every `get(f)` fails.
/// - `unreadable_while(f, v)`: `get(f)` fails while `f` holds `v`.
/// - `reject_writes(f)`: every `set(f, _)` fails.
/// - `reject_write_of(f, v)`: `set(f, v)` fails.
/// - `stale(f)`: every `set(f, _)` reports success but changes nothing.
/// - `ignore_write_of(f, v)`: `set(f, v)` reports success but changes nothing.
/// - `partial_write_of(f, v)`: `set(f, v)` changes the value, then fails.
#[derive(Default)]
pub struct MemoryFieldStore {
    values: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<Call>>,
    unreadable: HashSet<String>,
    unreadable_while: HashSet<(String, String)>,
    rejected: HashSet<String>,
    rejected_values: HashSet<(String, String)>,
    stale: HashSet<String>,
    ignored_values: HashSet<(String, String)>,
    partial_values: HashSet<(String, String)>,
}

impl MemoryFieldStore {
    pub fn new(initial: &[(&str, &str)]) -> Self {
        let values = initial
            .iter()
            .map(|(f, v)| ((*f).to_string(), (*v).to_string()))
            .collect();
        Self {
            values: Mutex::new(values),
            ..Self::default()
        }
    }

    pub fn unreadable(mut self, field: &str) -> Self {
        self.unreadable.insert(field.to_string());
        self
    }

    pub fn unreadable_while(mut self, field: &str, value: &str) -> Self {
        self.unreadable_while
            .insert((field.to_string(), value.to_string()));
        self
    }

    pub fn reject_writes(mut self, field: &str) -> Self {
        self.rejected.insert(field.to_string());
        self
    }

    pub fn reject_write_of(mut self, field: &str, value: &str) -> Self {
        self.rejected_values
            .insert((field.to_string(), value.to_string()));
        self
    }

    pub fn stale(mut self, field: &str) -> Self {
        self.stale.insert(field.to_string());
        self
    }

    pub fn ignore_write_of(mut self, field: &str, value: &str) -> Self {
        self.ignored_values
            .insert((field.to_string(), value.to_string()));
        self
    }

    pub fn partial_write_of(mut self, field: &str, value: &str) -> Self {
        self.partial_values
            .insert((field.to_string(), value.to_string()));
        self
    }

    pub fn value(&self, field: &str) -> Option<String> {
        self.values.lock().expect("lock").get(field).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("lock").clone()
    }

    /// `(field, value)` for every `set` call, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Set(f, v) => Some((f, v)),
                Call::Get(_) => None,
            })
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.writes().len()
    }

    fn key(field: &str, value: &str) -> (String, String) {
        (field.to_string(), value.to_string())
    }
}

impl FieldStore for MemoryFieldStore {
    async fn get(&self, field: &str) -> Result<String, StoreError> {
        self.calls
            .lock()
            .expect("lock")
            .push(Call::Get(field.to_string()));
        if self.unreadable.contains(field) {
            return Err(StoreError::Unavailable {
                field: field.to_string(),
                reason: "store unreachable".to_string(),
            });
        }
        let value = self
            .value(field)
            .ok_or_else(|| StoreError::NotFound {
                field: field.to_string(),
            })?;
        if self.unreadable_while.contains(&Self::key(field, &value)) {
            return Err(StoreError::Unavailable {
                field: field.to_string(),
                reason: "read timed out".to_string(),
            });
        }
        Ok(value)
    }

    async fn set(&self, field: &str, value: &str) -> Result<(), StoreError> {
        self.calls
            .lock()
            .expect("lock")
            .push(Call::Set(field.to_string(), value.to_string()));
        if self.rejected.contains(field) || self.rejected_values.contains(&Self::key(field, value))
        {
            return Err(StoreError::WriteFailed {
                field: field.to_string(),
                reason: "permission denied".to_string(),
            });
        }
        if self.partial_values.contains(&Self::key(field, value)) {
            self.values
                .lock()
                .expect("lock")
                .insert(field.to_string(), value.to_string());
            return Err(StoreError::WriteFailed {
                field: field.to_string(),
                reason: "write timed out".to_string(),
            });
        }
        if self.stale.contains(field) || self.ignored_values.contains(&Self::key(field, value)) {
            return Ok(());
        }
        self.values
            .lock()
            .expect("lock")
            .insert(field.to_string(), value.to_string());
        Ok(())
    }
}

// ── Change notifier ───────────────────────────────────────────────────────────

/// Records every notification; optionally fails delivery.
#[derive(Default)]
pub struct RecordingNotifier {
    records: Mutex<Vec<ChangeRecord>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<ChangeRecord> {
        self.records.lock().expect("lock").clone()
    }
}

impl ChangeNotifier for RecordingNotifier {
    async fn notify(&self, record: &ChangeRecord) -> Result<()> {
        self.records.lock().expect("lock").push(record.clone());
        if self.fail {
            anyhow::bail!("webhook returned HTTP 503");
        }
        Ok(())
    }
}

// ── Progress reporter ─────────────────────────────────────────────────────────

pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

/// Collects warnings so tests can assert the operator was told.
#[derive(Default)]
pub struct RecordingReporter {
    pub warnings: Mutex<Vec<String>>,
    pub successes: Mutex<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, _: &str) {}
    fn success(&self, message: &str) {
        self.successes
            .lock()
            .expect("lock")
            .push(message.to_string());
    }
    fn warn(&self, message: &str) {
        self.warnings.lock().expect("lock").push(message.to_string());
    }
}

// ── Confirmer ─────────────────────────────────────────────────────────────────

/// Answers every question with a fixed reply and records the prompts.
pub struct ScriptedConfirmer {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn yes() -> Self {
        Self::answering(true)
    }

    pub fn no() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("lock").clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts.lock().expect("lock").push(prompt.to_string());
        Ok(self.answer)
    }
}

/// A confirmer whose prompt cannot be shown, like dialoguer without a TTY.
pub struct NoTerminal;

impl Confirmer for NoTerminal {
    fn confirm(&self, _: &str) -> Result<bool> {
        anyhow::bail!("IO error: not a terminal")
    }
}

// ── Command runner ────────────────────────────────────────────────────────────

type Responder = Box<dyn Fn(&str, &[&str]) -> Result<Output> + Send + Sync>;

/// `CommandRunner` that answers from a closure and records every call as
/// `program arg1 arg2 ...`.
pub struct CannedRunner {
    respond: Responder,
    calls: Mutex<Vec<String>>,
}

impl CannedRunner {
    pub fn new(respond: impl Fn(&str, &[&str]) -> Result<Output> + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }
}

impl CommandRunner for CannedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.run_with_timeout(program, args, Duration::from_secs(30))
            .await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> Result<Output> {
        let mut line = vec![program];
        line.extend_from_slice(args);
        self.calls.lock().expect("lock").push(line.join(" "));
        (self.respond)(program, args)
    }
}
