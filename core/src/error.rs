use thiserror::Error;

/// Failures at the engine's I/O boundary.
///
/// The analytics computations themselves never fail: degenerate input
/// degrades to a documented fallback. Only loading configuration and
/// snapshots can produce an error.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
