use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the graph document. Either variant is fatal for
/// the request that triggered the load; no partial result is returned.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph document unavailable at {path}: {source}")]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("graph document at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while computing a focused layout
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("focal node '{0}' is not among the current elements")]
    FocalNodeNotFound(String),
}

/// Failures while rendering the detail panel
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("no node with id '{0}' in the graph document")]
    UnknownNode(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Any failure an interaction can surface
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Detail(#[from] DetailError),
}
