use std::path::PathBuf;

/// Failures of the neighbor-query interface and of graph construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
    #[error("vertex name `{0}` is reserved")]
    ReservedName(String),
    #[error("vertex name must not be empty")]
    EmptyName,
}

#[derive(Debug, thiserror::Error)]
pub enum RdfLoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported RDF format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to parse {format}: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}
