use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid {label}: '{value}'. Expected a number.")]
    InvalidNumber { label: String, value: String },

    #[error("Invalid {label}: {value} ({reason}).")]
    OutOfRange {
        label: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Missing {0}.")]
    Missing(&'static str),

    #[error("Input ended unexpectedly (EOF).")]
    UnexpectedEof,

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not render plot: {0}")]
    Plot(String),

    #[error("Could not start the viewer at {}: {source}", path.display())]
    Viewer {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

impl SimError {
    pub(crate) fn invalid_number(label: &str, value: &str) -> Self {
        Self::InvalidNumber {
            label: label.to_string(),
            value: value.trim().to_string(),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
