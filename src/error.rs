use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid schema file extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("failed to read schema file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `at` is the path inside the document where decoding stopped (`.` for the root).
    #[error("failed to parse schema file {} at {at}: {message}", path.display())]
    Parse {
        path: PathBuf,
        at: String,
        message: String,
    },

    #[error("unsupported field type: {0}")]
    UnsupportedFieldType(String),
}
