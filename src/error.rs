use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures that stop a session before the first render.
///
/// Malformed fields inside a readable data file are never reported here; the
/// builder degrades them to defaults instead.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("catalogue data file not found: {path}")]
    Missing { path: Utf8PathBuf },

    #[error("failed to read catalogue data file {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalogue data from {origin} is not a JSON array of categories: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SheetError>;
