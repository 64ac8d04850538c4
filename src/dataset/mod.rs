mod client;
mod error;

pub use error::LoadError;

use client::Client;
use log::*;
use std::fmt;
use std::path::PathBuf;

/// Location of the dataset text.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    Local(PathBuf),
}

impl Source {
    /// Interpret `http://` and `https://` locations as remote, anything else
    /// as a local file path.
    ///
    pub fn parse(location: &str) -> Source {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Remote(location.to_owned())
        } else {
            Source::Local(PathBuf::from(location))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => f.write_str(url),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Responsible for the single asynchronous read of the dataset text.
///
pub struct Dataset {
    client: Client,
    source: Source,
}

impl Dataset {
    /// Returns a new instance reading from the given source.
    ///
    pub fn new(source: Source) -> Result<Dataset, LoadError> {
        debug!("Initializing dataset reader for '{}'...", source);
        Ok(Dataset {
            client: Client::new()?,
            source,
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Return the full dataset text or the reason it could not be read.
    ///
    pub async fn fetch(&self) -> Result<String, LoadError> {
        match &self.source {
            Source::Remote(url) => self.client.get_text(url).await,
            Source::Local(path) => {
                debug!("Reading dataset file {}...", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| LoadError::Io {
                        path: path.clone(),
                        source: e,
                    })
            }
        }
    }
}
