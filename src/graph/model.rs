use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Numeric topic identifier.
///
/// Stored documents and tap payloads carry it either as a JSON number or as a
/// numeric string; both parse to the same value. It is always written back out
/// as a string so the canvas sees uniform node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicId(pub u32);

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TopicId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TopicId)
    }
}

impl Serialize for TopicId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TopicId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u32),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(TopicId(n)),
            Repr::Text(s) => s
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid topic id '{}'", s))),
        }
    }
}

/// Canvas coordinates of a node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Payload shared by legislator and topic nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData<Id> {
    pub id: Id,
    pub label: String,
    pub description: String,
    pub size: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A legislator's aggregated stance toward one topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Legislator id
    pub source: String,
    /// Topic id
    pub target: TopicId,
    /// Fraction of the legislator's tweets about this topic
    pub importance: f64,
    /// Tweet count
    pub weight: u32,
    pub color: String,
    pub prob_conservative: f64,
    pub sentiment: f64,
    pub subjectivity: f64,
    /// Tweet id -> tweet metadata, in document order
    #[serde(default)]
    pub tweets: serde_json::Map<String, serde_json::Value>,
}

/// One entry of the graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GraphElement {
    #[serde(rename = "edge")]
    Edge { data: EdgeData },

    #[serde(rename = "s_node")]
    Legislator {
        data: NodeData<String>,
        #[serde(default)]
        position: Position,
    },

    #[serde(rename = "t_node")]
    Topic {
        data: NodeData<TopicId>,
        #[serde(default)]
        position: Position,
    },
}

impl GraphElement {
    /// Node id as the canvas sees it; `None` for edges
    pub fn node_id(&self) -> Option<String> {
        match self {
            GraphElement::Edge { .. } => None,
            GraphElement::Legislator { data, .. } => Some(data.id.clone()),
            GraphElement::Topic { data, .. } => Some(data.id.to_string()),
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            GraphElement::Edge { .. } => None,
            GraphElement::Legislator { position, .. } | GraphElement::Topic { position, .. } => {
                Some(*position)
            }
        }
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, GraphElement::Edge { .. })
    }
}

/// The full, read-only graph as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphDocument {
    pub elements: Vec<GraphElement>,
}

impl GraphDocument {
    pub fn legislators(&self) -> impl Iterator<Item = &NodeData<String>> {
        self.elements.iter().filter_map(|e| match e {
            GraphElement::Legislator { data, .. } => Some(data),
            _ => None,
        })
    }

    pub fn topics(&self) -> impl Iterator<Item = &NodeData<TopicId>> {
        self.elements.iter().filter_map(|e| match e {
            GraphElement::Topic { data, .. } => Some(data),
            _ => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.elements.iter().filter_map(|e| match e {
            GraphElement::Edge { data } => Some(data),
            _ => None,
        })
    }

    pub fn legislator(&self, id: &str) -> Option<&NodeData<String>> {
        self.legislators().find(|n| n.id == id)
    }

    pub fn topic(&self, id: TopicId) -> Option<&NodeData<TopicId>> {
        self.topics().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_accepts_number_and_string() {
        let a: TopicId = serde_json::from_str("7").unwrap();
        let b: TopicId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"7\"");
    }

    #[test]
    fn test_topic_id_rejects_garbage() {
        assert!(serde_json::from_str::<TopicId>("\"abc\"").is_err());
    }

    #[test]
    fn test_element_tagging() {
        let json = r##"[
            {"type": "s_node", "data": {"id": "SenA", "label": "Sen. A", "description": "(D-NY)", "size": 20, "color": "#0000ff"}, "position": {"x": 1, "y": 2}},
            {"type": "t_node", "data": {"id": "3", "label": "Health", "description": "care, bill", "size": 30, "color": "#888", "group": "topic"}},
            {"type": "edge", "data": {"source": "SenA", "target": 3, "importance": 0.25, "weight": 4, "color": "#aaa",
                "prob_conservative": 0.1, "sentiment": 0.3, "subjectivity": 0.5, "tweets": {"99": {}, "12": {}}}}
        ]"##;
        let doc: GraphDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.elements.len(), 3);
        assert_eq!(doc.legislator("SenA").unwrap().label, "Sen. A");
        assert_eq!(doc.topic(TopicId(3)).unwrap().group.as_deref(), Some("topic"));
        assert_eq!(doc.elements[0].position(), Some(Position::new(1.0, 2.0)));
        // missing position falls back to the origin
        assert_eq!(doc.elements[1].position(), Some(Position::default()));

        let edge = doc.edges().next().unwrap();
        let keys: Vec<&str> = edge.tweets.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["99", "12"]);
    }
}
