//! Identity transaction data model.
//!
//! Pure types only: the snapshot taken before mutation and the outcome
//! produced by `application::services::transaction::apply`.

use crate::domain::error::StoreError;

/// macOS display name shown in Finder and sharing.
pub const COMPUTER_NAME: &str = "ComputerName";
/// Network (DNS) host name.
pub const HOST_NAME: &str = "HostName";
/// Bonjour `.local` name.
pub const LOCAL_HOST_NAME: &str = "LocalHostName";

/// The three name records that together form one machine identity, in the
/// order they are written.
pub const IDENTITY_FIELDS: [&str; 3] = [COMPUTER_NAME, HOST_NAME, LOCAL_HOST_NAME];

/// Values captured before the first write of a transaction.
///
/// Entries keep the order in which fields were read, which is also the
/// order in which they are written.
#[derive(Debug, Default)]
pub struct Snapshot {
    entries: Vec<(String, String)>,
}

impl Snapshot {
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    pub fn record(&mut self, field: &str, value: String) {
        self.entries.push((field.to_string(), value));
    }

    /// Captured value for `field`, if it was part of the backup.
    #[must_use]
    pub fn value_of(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
    }

    /// The first `n` entries in reverse order: the restore plan for a
    /// transaction that touched `n` fields.
    pub fn restore_plan(&self, n: usize) -> impl Iterator<Item = (&str, &str)> {
        self.entries[..n.min(self.entries.len())]
            .iter()
            .rev()
            .map(|(f, v)| (f.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Why a transaction had to roll back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackCause {
    /// Writing the desired value to the failed field returned an error.
    WriteFailed(StoreError),
    /// The field read back something other than the desired value.
    /// `observed` is `None` when the re-read itself failed.
    VerificationFailed { observed: Option<String> },
}

impl std::fmt::Display for RollbackCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WriteFailed(e) => write!(f, "write failed: {e}"),
            Self::VerificationFailed { observed: Some(v) } => {
                write!(f, "verification failed: read back '{v}'")
            }
            Self::VerificationFailed { observed: None } => {
                write!(f, "verification failed: field could not be read back")
            }
        }
    }
}

/// A field that could not be returned to its snapshot value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreFailure {
    pub field: String,
    pub error: StoreError,
}

/// Outcome of one identity transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionResult {
    /// Every field verified equal to the desired value.
    Committed,
    /// The transaction was undone. `restore_failures` is empty when every
    /// touched field is back at its snapshot value.
    RolledBack {
        failed_field: String,
        cause: RollbackCause,
        restore_failures: Vec<RestoreFailure>,
    },
}

impl TransactionResult {
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }

    /// `true` when rollback left at least one field in an unknown state.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::RolledBack { restore_failures, .. } if !restore_failures.is_empty())
    }

    #[must_use]
    pub fn failed_field(&self) -> Option<&str> {
        match self {
            Self::Committed => None,
            Self::RolledBack { failed_field, .. } => Some(failed_field),
        }
    }
}
