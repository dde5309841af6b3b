//! Document sources for the projects catalog.
//!
//! # Responsibility
//! - Abstract "retrieve the projects document" behind one trait.
//! - Map non-success retrievals into `TransportError`.
//!
//! # Invariants
//! - `fetch` never retries; one call is one retrieval attempt.
//! - HTTP sources treat any non-2xx status as failure.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

const HTTP_USER_AGENT: &str = concat!("portfolio-core/", env!("CARGO_PKG_VERSION"));

/// Retrieval failure: the source did not report success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// File path or URL that was requested.
    pub location: String,
    /// Response status when the transport has one (HTTP).
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    fn new(location: impl Into<String>, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            status,
            message: message.into(),
        }
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "failed to fetch `{}` (status {status}): {}",
                self.location, self.message
            ),
            None => write!(f, "failed to fetch `{}`: {}", self.location, self.message),
        }
    }
}

impl Error for TransportError {}

/// Where the projects document comes from.
pub trait ProjectSource {
    /// Human-readable location used in logs and errors.
    fn location(&self) -> &str;

    /// Retrieves the raw document text.
    fn fetch(&self) -> Result<String, TransportError>;
}

/// Type-erased source used by application shells.
pub type BoxedProjectSource = Box<dyn ProjectSource + Send + Sync>;

impl<S: ProjectSource + ?Sized> ProjectSource for Box<S> {
    fn location(&self) -> &str {
        (**self).location()
    }

    fn fetch(&self) -> Result<String, TransportError> {
        (**self).fetch()
    }
}

/// Reads the document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileProjectSource {
    path: PathBuf,
    location: String,
}

impl FileProjectSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();
        Self { path, location }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectSource for FileProjectSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<String, TransportError> {
        debug!(
            "event=source_fetch module=catalog status=start kind=file location={}",
            self.location
        );
        std::fs::read_to_string(&self.path)
            .map_err(|err| TransportError::new(self.location.clone(), None, err.to_string()))
    }
}

/// Fetches the document with a blocking HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpProjectSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpProjectSource {
    /// Creates an HTTP source for `url`.
    ///
    /// # Errors
    /// - Returns `TransportError` when the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, TransportError> {
        let url = url.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .build()
            .map_err(|err| TransportError::new(url.clone(), None, err.to_string()))?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProjectSource for HttpProjectSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String, TransportError> {
        debug!(
            "event=source_fetch module=catalog status=start kind=http location={}",
            self.url
        );
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|err| TransportError::new(self.url.clone(), None, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                self.url.clone(),
                Some(status.as_u16()),
                "non-success response status",
            ));
        }

        response.text().map_err(|err| {
            TransportError::new(self.url.clone(), Some(status.as_u16()), err.to_string())
        })
    }
}

/// In-memory document, optionally forced to fail with a status.
///
/// Counts fetch attempts so callers can observe caching behavior.
#[derive(Debug)]
pub struct StaticProjectSource {
    location: String,
    document: String,
    failure_status: Option<u16>,
    fetches: AtomicUsize,
}

impl StaticProjectSource {
    /// Source that always succeeds with `document`.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            location: "memory://projects.json".to_string(),
            document: document.into(),
            failure_status: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Source that always fails with the given response status.
    pub fn failing(status: u16) -> Self {
        Self {
            failure_status: Some(status),
            ..Self::new(String::new())
        }
    }

    /// Number of `fetch` calls observed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ProjectSource for StaticProjectSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<String, TransportError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.failure_status {
            Some(status) => Err(TransportError::new(
                self.location.clone(),
                Some(status),
                "non-success response status",
            )),
            None => Ok(self.document.clone()),
        }
    }
}
