use std::path::PathBuf;

use thiserror::Error;

/// Problems with an analysis request. The statistics themselves never fail.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request contains no analyses")]
    Empty,

    #[error("analysis '{label}': x has {x_len} values but y has {y_len}")]
    LengthMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },

    #[error("analysis '{label}': {field} contains a non-finite value")]
    NonFinite { label: String, field: String },
}

pub type Result<T> = std::result::Result<T, RequestError>;
