use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to read profile picture '{path}': {source}")]
pub struct PictureReadError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PictureSource {
    Bytes(Vec<u8>),
    Path(PathBuf),
}

impl PictureSource {
    pub async fn read_bytes(self) -> Result<Vec<u8>, PictureReadError> {
        match self {
            PictureSource::Bytes(bytes) => Ok(bytes),
            PictureSource::Path(path) => {
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| PictureReadError {
                        path: path.display().to_string(),
                        source,
                    })
            }
        }
    }
}

impl From<Vec<u8>> for PictureSource {
    fn from(bytes: Vec<u8>) -> Self {
        PictureSource::Bytes(bytes)
    }
}

impl From<PathBuf> for PictureSource {
    fn from(path: PathBuf) -> Self {
        PictureSource::Path(path)
    }
}
