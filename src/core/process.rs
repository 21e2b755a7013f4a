//! Process enumeration - snapshots of running process names

use std::collections::HashSet;

use sysinfo::{ProcessesToUpdate, System};
use thiserror::Error;
use tracing::trace;

/// The OS refused or failed to list running processes.
///
/// Never fatal: the detector skips the tick and retries on the next one.
#[derive(Debug, Error)]
#[error("process enumeration failed: {0}")]
pub struct EnumerationError(pub String);

/// Source of process snapshots consumed by the detection loop.
pub trait ProcessLister {
    /// Returns the executable names of all currently running processes.
    ///
    /// No ordering guarantee; duplicate names collapse into the set.
    fn running_processes(&mut self) -> Result<HashSet<String>, EnumerationError>;
}

/// Production lister backed by sysinfo.
pub struct SystemProcessLister {
    system: System,
}

impl SystemProcessLister {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SystemProcessLister {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLister for SystemProcessLister {
    fn running_processes(&mut self) -> Result<HashSet<String>, EnumerationError> {
        self.system.refresh_processes(ProcessesToUpdate::All, true);

        let names: HashSet<String> = self
            .system
            .processes()
            .values()
            .map(|process| process.name().to_string_lossy().into_owned())
            .collect();

        // A live system always has processes; an empty refresh means the
        // enumeration call itself was denied or failed.
        if names.is_empty() {
            return Err(EnumerationError(
                "OS returned an empty process list".to_string(),
            ));
        }

        trace!("Enumerated {} process names", names.len());
        Ok(names)
    }
}
