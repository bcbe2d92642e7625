use crate::errors::{AppError, AppResult};
use crate::utils::path::{is_remote, local_path};
use reqwest::blocking::Client;
use std::fs;
use std::time::Duration;

/// Fetches the raw bytes behind a source URL.
pub trait Source {
    fn read(&self, url: &str) -> AppResult<Vec<u8>>;
}

/// Blocking HTTP(S) GET; any non-2xx status is an error.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rlogdash/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Source for HttpSource {
    fn read(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// `file://` URLs and plain paths.
#[derive(Clone, Copy, Default)]
pub struct FileSource;

impl Source for FileSource {
    fn read(&self, url: &str) -> AppResult<Vec<u8>> {
        Ok(fs::read(local_path(url))?)
    }
}

/// Routes by scheme: http(s) to [`HttpSource`], everything else to [`FileSource`].
#[derive(Clone)]
pub struct DefaultSource {
    http: HttpSource,
    file: FileSource,
}

impl DefaultSource {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            http: HttpSource::new(timeout)?,
            file: FileSource,
        })
    }
}

impl Source for DefaultSource {
    fn read(&self, url: &str) -> AppResult<Vec<u8>> {
        if is_remote(url) {
            self.http.read(url)
        } else {
            self.file.read(url)
        }
    }
}
