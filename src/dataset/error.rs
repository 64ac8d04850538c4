//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur while fetching the dataset text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Failed to load {url} (status {status})")]
    Status { status: u16, url: String },

    /// Local file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_status() {
        let error = LoadError::Status {
            status: 404,
            url: "https://site.test/dados_grupos.txt".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("dados_grupos.txt"));
    }

    #[test]
    fn test_load_error_io() {
        let error = LoadError::Io {
            path: PathBuf::from("/data/dados_individuais.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("/data/dados_individuais.txt"));
        assert!(error_str.contains("No such file"));
    }
}
