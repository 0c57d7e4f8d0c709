//! Session context for conversions
//!
//! All session state lives in one explicit object: the capability registry
//! and the report from loading it. A session is constructed once, at the
//! start of an editing session; capabilities are probed exactly once and
//! never re-probed, so availability answers are stable for the session's
//! lifetime.

use crate::capabilities::default_capabilities;
use crate::capability::{Capability, CapabilityRegistry, LoadReport};
use crate::error::ConvertError;
use crate::import::{self, ImportResult};

/// Context object threaded through every import.
pub struct ConvertSession {
    capabilities: CapabilityRegistry,
    report: LoadReport,
}

impl ConvertSession {
    /// Start a session with the default capability set.
    pub fn start() -> Self {
        Self::with_capabilities(default_capabilities())
    }

    /// Start a session with an explicit capability set (e.g. chains built
    /// from configuration).
    pub fn with_capabilities(capabilities: Vec<Capability>) -> Self {
        let (registry, report) = CapabilityRegistry::load(capabilities);
        for outcome in &report.outcomes {
            if outcome.available {
                log::info!(
                    "capability {} loaded via {}",
                    outcome.kind,
                    outcome.source.as_deref().unwrap_or("?")
                );
            } else {
                log::warn!(
                    "capability {} unavailable: {}",
                    outcome.kind,
                    outcome.error.as_deref().unwrap_or("no sources configured")
                );
            }
        }
        ConvertSession {
            capabilities: registry,
            report,
        }
    }

    /// A session with nothing loaded; every import takes its fallback path.
    pub fn without_capabilities() -> Self {
        ConvertSession {
            capabilities: CapabilityRegistry::empty(),
            report: LoadReport::default(),
        }
    }

    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    /// The outcome of the one-time capability load.
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Import a file's bytes under this session's capabilities.
    pub fn import(&self, bytes: &[u8], file_name: &str) -> Result<ImportResult, ConvertError> {
        import::import_file(bytes, file_name, self)
    }
}
