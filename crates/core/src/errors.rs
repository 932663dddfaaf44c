use thiserror::Error;

/// Unified error type for the finplan-core library.
///
/// The analysis functions themselves are total and never return this;
/// it is produced by validation, parsing, persistence and the facade.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Records ─────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    // ── Storage / File ──────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

/// Covers parsing only. Serialization call sites map their errors
/// to `Serialization` explicitly.
impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
