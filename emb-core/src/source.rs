//! `CsvSource` implementations and the helpers they share.

use crate::loader::{CsvSource, LoadError};
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::PathBuf;

/// Query parameter appended to every request so caches never answer it.
pub const CACHE_BUSTER_PARAM: &str = "v";

/// Directory part of a page path, keeping the trailing slash.
///
/// `/embalses/index.html` → `/embalses/`, `/embalses/` → `/embalses/`.
pub fn base_path_of(pathname: &str) -> &str {
    match pathname.rfind('/') {
        Some(idx) => &pathname[..=idx],
        None => "",
    }
}

/// `{base}{resource}?v={stamp}`, or `&v=` when the resource already has a query.
pub fn cache_busted_url(base: &str, resource: &str, stamp: i64) -> String {
    let separator = if resource.contains('?') { '&' } else { '?' };
    format!("{base}{resource}{separator}{CACHE_BUSTER_PARAM}={stamp}")
}

/// Turn a fetched body into text, gunzipping `*.gz` resources.
pub fn decode_body(resource: &str, bytes: Vec<u8>) -> Result<String, LoadError> {
    let bytes = if is_gzip_resource(resource) {
        let mut decoder = GzDecoder::new(bytes.as_slice());
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| LoadError::Decode {
                resource: resource.to_string(),
                message: e.to_string(),
            })?;
        decompressed
    } else {
        bytes
    };
    String::from_utf8(bytes).map_err(|e| LoadError::Decode {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}

fn is_gzip_resource(resource: &str) -> bool {
    resource
        .split('?')
        .next()
        .is_some_and(|path| path.ends_with(".gz"))
}

/// Reads resources relative to a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CsvSource for FileSource {
    async fn fetch_text(&self, resource: &str) -> Result<String, LoadError> {
        let path = self.root.join(resource);
        let bytes = std::fs::read(&path).map_err(|source| LoadError::Io {
            resource: path.display().to_string(),
            source,
        })?;
        decode_body(resource, bytes)
    }
}

/// Fetches resources over HTTP relative to a base URL.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "api")]
impl HttpSource {
    /// `base_url` is the directory of the hosting page, e.g.
    /// `https://example.github.io/embalses/`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }
}

#[cfg(feature = "api")]
impl CsvSource for HttpSource {
    async fn fetch_text(&self, resource: &str) -> Result<String, LoadError> {
        use reqwest::header::{CACHE_CONTROL, PRAGMA};

        let stamp = chrono::Utc::now().timestamp_millis();
        let url = cache_busted_url(&self.base_url, resource, stamp);
        log::debug!("source: GET {}", url);

        let transport = |e: reqwest::Error| LoadError::Transport {
            resource: resource.to_string(),
            message: e.to_string(),
        };
        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(LoadError::Status {
                resource: resource.to_string(),
                status: response.status().as_u16(),
            });
        }
        let bytes = response.bytes().await.map_err(transport)?;
        decode_body(resource, bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_base_path_of() {
        assert_eq!(base_path_of("/embalses/index.html"), "/embalses/");
        assert_eq!(base_path_of("/embalses/"), "/embalses/");
        assert_eq!(base_path_of("/"), "/");
        assert_eq!(base_path_of("index.html"), "");
    }

    #[test]
    fn test_cache_busted_url() {
        assert_eq!(
            cache_busted_url("/embalses/", "BD/embalses_santiago_cuba.csv", 1700000000000),
            "/embalses/BD/embalses_santiago_cuba.csv?v=1700000000000"
        );
        assert_eq!(
            cache_busted_url("", "datos.csv?lang=es", 5),
            "datos.csv?lang=es&v=5"
        );
    }

    #[test]
    fn test_decode_plain_body() {
        let text = decode_body("a.csv", "Nombre\nGota Blanca".as_bytes().to_vec()).unwrap();
        assert_eq!(text, "Nombre\nGota Blanca");
    }

    #[test]
    fn test_decode_gzip_body() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all("Nombre\nParada".as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();
        let text = decode_body("BD/embalses.csv.gz", compressed).unwrap();
        assert_eq!(text, "Nombre\nParada");
    }

    #[test]
    fn test_decode_rejects_corrupt_gzip() {
        let err = decode_body("BD/embalses.csv.gz", b"not gzip".to_vec()).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileSource::new("/nonexistent-embalses-dir");
        let err = source.fetch_text("BD/embalses.csv").await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
