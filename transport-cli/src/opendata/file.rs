//! Reading saved API responses from disk.
//!
//! A response captured earlier (e.g. with `curl`) decodes exactly like a
//! live one, which is handy offline and when debugging the renderer.

use std::path::Path;

use tracing::info;

use crate::domain::Connection;

use super::convert::decode_connections;
use super::error::OpendataError;

/// Load and decode a saved `/v1/connections` response.
pub async fn read_response_file(path: impl AsRef<Path>) -> Result<Vec<Connection>, OpendataError> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading saved response");

    let body = tokio::fs::read(path).await.map_err(|source| OpendataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decode_connections(&body)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn reads_saved_response() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"connections": [{{"from": {{"station": {{"name": "Bern"}}}}, "to": {{"station": {{"name": "Thun"}}}}, "duration": "00d00:17:00"}}]}}"#
        )
        .unwrap();

        let connections = read_response_file(file.path()).await.unwrap();
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].to.station_name(), "Thun");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_response_file(&path).await.unwrap_err();
        assert!(matches!(err, OpendataError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[tokio::test]
    async fn malformed_file_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_response_file(file.path()).await.unwrap_err();
        assert!(matches!(err, OpendataError::Decode(_)));
    }
}
