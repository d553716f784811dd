use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

use super::model::{GraphDocument, GraphElement};

/// Summary of a graph document
#[derive(Debug, Clone)]
pub struct GraphStats {
    pub legislator_count: usize,
    pub topic_count: usize,
    pub edge_count: usize,
    /// Edges whose source or target node is not in the document
    pub dangling_edges: usize,
    pub connected_components: usize,
    pub total_tweets: u64,
    pub top_legislators: Vec<(String, usize)>,
    pub top_topics: Vec<(String, usize)>,
}

/// Build an undirected petgraph view of the document.
///
/// Node weights are labels. Edges with a missing endpoint are skipped and
/// counted in the returned total instead.
pub fn to_petgraph(document: &GraphDocument) -> (UnGraph<String, u32>, usize) {
    let mut graph = UnGraph::new_undirected();
    let mut index: HashMap<String, NodeIndex> = HashMap::new();

    for element in &document.elements {
        let (Some(id), label) = (element.node_id(), node_label(element)) else {
            continue;
        };
        let ni = graph.add_node(label);
        index.insert(id, ni);
    }

    let mut dangling = 0;
    for edge in document.edges() {
        let source = index.get(&edge.source);
        let target = index.get(&edge.target.to_string());
        match (source, target) {
            (Some(&s), Some(&t)) => {
                graph.add_edge(s, t, edge.weight);
            }
            _ => dangling += 1,
        }
    }

    (graph, dangling)
}

fn node_label(element: &GraphElement) -> String {
    match element {
        GraphElement::Legislator { data, .. } => data.label.clone(),
        GraphElement::Topic { data, .. } => data.label.clone(),
        GraphElement::Edge { .. } => String::new(),
    }
}

/// Compute document statistics, keeping the `top_n` busiest nodes per kind
pub fn compute_stats(document: &GraphDocument, top_n: usize) -> GraphStats {
    let (graph, dangling_edges) = to_petgraph(document);

    let mut legislator_degree: HashMap<&str, usize> = HashMap::new();
    let mut topic_degree: HashMap<String, usize> = HashMap::new();
    for edge in document.edges() {
        *legislator_degree.entry(edge.source.as_str()).or_insert(0) += 1;
        *topic_degree.entry(edge.target.to_string()).or_insert(0) += 1;
    }

    let mut top_legislators: Vec<(String, usize)> = document
        .legislators()
        .map(|n| {
            let degree = legislator_degree.get(n.id.as_str()).copied().unwrap_or(0);
            (n.label.clone(), degree)
        })
        .collect();
    top_legislators.sort_by(|a, b| b.1.cmp(&a.1));
    top_legislators.truncate(top_n);

    let mut top_topics: Vec<(String, usize)> = document
        .topics()
        .map(|n| {
            let degree = topic_degree.get(&n.id.to_string()).copied().unwrap_or(0);
            (n.label.clone(), degree)
        })
        .collect();
    top_topics.sort_by(|a, b| b.1.cmp(&a.1));
    top_topics.truncate(top_n);

    GraphStats {
        legislator_count: document.legislators().count(),
        topic_count: document.topics().count(),
        edge_count: document.edges().count(),
        dangling_edges,
        connected_components: connected_components(&graph),
        total_tweets: document.edges().map(|e| u64::from(e.weight)).sum(),
        top_legislators,
        top_topics,
    }
}
