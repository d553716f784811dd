use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::filter::FilterCriteria;
use super::model::{GraphDocument, GraphElement, TopicId};
use crate::error::GraphError;

/// A dropdown entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption<V> {
    pub label: String,
    pub value: V,
}

/// Read-only access to the graph document on disk.
///
/// Nothing is cached: every call re-reads the file, so each query sees the
/// document as it is at that moment.
#[derive(Debug, Clone)]
pub struct GraphStore {
    path: PathBuf,
}

impl GraphStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document
    pub fn document(&self) -> Result<GraphDocument, GraphError> {
        let content = fs::read_to_string(&self.path).map_err(|source| GraphError::DataUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let document: GraphDocument =
            serde_json::from_str(&content).map_err(|source| GraphError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Loaded {} elements from {}",
            document.elements.len(),
            self.path.display()
        );

        Ok(document)
    }

    /// Load the elements that pass `criteria`, in document order
    pub fn load(&self, criteria: &FilterCriteria) -> Result<Vec<GraphElement>, GraphError> {
        let document = self.document()?;
        Ok(filter_elements(document, criteria))
    }

    pub fn legislator_options(&self) -> Result<Vec<SelectOption<String>>, GraphError> {
        let document = self.document()?;
        Ok(document
            .legislators()
            .map(|n| SelectOption {
                label: n.label.clone(),
                value: n.id.clone(),
            })
            .collect())
    }

    pub fn topic_options(&self) -> Result<Vec<SelectOption<TopicId>>, GraphError> {
        let document = self.document()?;
        Ok(document
            .topics()
            .map(|n| SelectOption {
                label: n.label.clone(),
                value: n.id,
            })
            .collect())
    }
}

/// Apply `criteria` to each element on its own.
///
/// Edges are kept by importance alone and nodes by selection alone, so a kept
/// edge may point at a node that was filtered out.
pub fn filter_elements(document: GraphDocument, criteria: &FilterCriteria) -> Vec<GraphElement> {
    document
        .elements
        .into_iter()
        .filter(|element| match element {
            GraphElement::Edge { data } => criteria.importance_range.contains(data.importance),
            GraphElement::Legislator { data, .. } => {
                criteria.selected_legislators.contains(&data.id)
            }
            GraphElement::Topic { data, .. } => criteria.selected_topics.contains(&data.id),
        })
        .collect()
}
