// File: crates/chart-dashboard/src/source.rs
// Summary: Where data.json comes from: a local file or a single HTTP GET.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::error::LoadError;

/// One-shot fetch of the raw payload bytes.
pub trait DataSource {
    fn describe(&self) -> String;
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

#[derive(Clone, Debug)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String { self.path.display().to_string() }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        debug!(path = %self.path.display(), "reading payload file");
        std::fs::read(&self.path).map_err(|e| LoadError::Transport(format!("{}: {e}", self.path.display())))
    }
}

#[derive(Clone, Debug)]
pub struct HttpSource {
    pub url: String,
    pub timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self { url: url.into(), timeout }
    }
}

impl DataSource for HttpSource {
    fn describe(&self) -> String { self.url.clone() }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        debug!(url = %self.url, "GET payload");
        match ureq::get(&self.url).timeout(self.timeout).call() {
            Ok(resp) => {
                let mut buf = Vec::new();
                resp.into_reader()
                    .read_to_end(&mut buf)
                    .map_err(|e| LoadError::Transport(e.to_string()))?;
                Ok(buf)
            }
            Err(ureq::Error::Status(code, _)) => Err(LoadError::Status(code)),
            Err(ureq::Error::Transport(t)) => Err(LoadError::Transport(t.to_string())),
        }
    }
}

/// HTTP for `http://` and `https://` locations, a file path otherwise.
pub fn source_for(location: &str, timeout: Duration) -> Box<dyn DataSource> {
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpSource::new(location, timeout))
    } else {
        Box::new(FileSource::new(location))
    }
}
