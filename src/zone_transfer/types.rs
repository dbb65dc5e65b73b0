//! Zone transfer probe outcomes.

/// Outcome of probing one nameserver for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneTransferResult {
    /// The nameserver handed over the zone; one zone-file line per record.
    Exposed(Vec<String>),
    /// The transfer was refused, timed out, or otherwise did not happen.
    Protected,
    /// The probe could not be set up (e.g. the nameserver has no address).
    ProbeFailed(String),
}

impl ZoneTransferResult {
    pub fn is_exposed(&self) -> bool {
        matches!(self, ZoneTransferResult::Exposed(_))
    }

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ZoneTransferResult::Exposed(_) => "EXPOSED",
            ZoneTransferResult::Protected => "protected",
            ZoneTransferResult::ProbeFailed(_) => "probe failed",
        }
    }
}
