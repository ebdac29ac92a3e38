use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read theme file \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("\"{0}\" is not a supported color.")]
    InvalidColor(String),
    #[error("\"{0}\" is not a supported length.")]
    InvalidLength(String),
}
