use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DetailError;
use crate::graph::{EdgeData, GraphStore, TopicId};

/// Group value the canvas reports for topic nodes
pub const TOPIC_GROUP: &str = "topic";

/// What the user clicked on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TapEvent {
    Node {
        id: String,
        #[serde(default)]
        group: Option<String>,
    },
    Edge(EdgeData),
}

impl TapEvent {
    pub fn node(id: impl Into<String>, group: Option<&str>) -> Self {
        TapEvent::Node {
            id: id.into(),
            group: group.map(String::from),
        }
    }
}

/// Detail panel content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Detail {
    Topic { title: String, keywords: String },
    Legislator { title: String },
    Stance(Stance),
}

/// A legislator's stance on a topic, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stance {
    pub heading: String,
    pub tweet_count: String,
    pub lean: String,
    pub sentiment: String,
    pub subjectivity: String,
    /// Embeddable tweet preview URLs, in document order
    pub previews: Vec<String>,
}

impl Detail {
    /// Plain text rendering, one line per heading
    pub fn lines(&self) -> Vec<String> {
        match self {
            Detail::Topic { title, keywords } => {
                vec![title.clone(), format!("Top Keywords: {}", keywords)]
            }
            Detail::Legislator { title } => vec![title.clone()],
            Detail::Stance(stance) => vec![
                stance.heading.clone(),
                stance.tweet_count.clone(),
                stance.lean.clone(),
                stance.sentiment.clone(),
                stance.subjectivity.clone(),
            ],
        }
    }
}

/// Resolve a tap into detail panel content.
///
/// Node records are always looked up in the unfiltered document, so a node
/// hidden by the current filters still renders.
pub fn render(store: &GraphStore, tap: &TapEvent) -> Result<Detail, DetailError> {
    match tap {
        TapEvent::Node { id, group } if group.as_deref() == Some(TOPIC_GROUP) => {
            let topic_id = parse_topic_id(id)?;
            let document = store.document()?;
            let topic = document
                .topic(topic_id)
                .ok_or_else(|| DetailError::UnknownNode(id.clone()))?;
            Ok(Detail::Topic {
                title: topic.label.clone(),
                keywords: topic.description.clone(),
            })
        }
        TapEvent::Node { id, .. } => {
            let document = store.document()?;
            let legislator = document
                .legislator(id)
                .ok_or_else(|| DetailError::UnknownNode(id.clone()))?;
            Ok(Detail::Legislator {
                title: format!("{} {}", legislator.label, legislator.description),
            })
        }
        TapEvent::Edge(edge) => render_stance(store, edge).map(Detail::Stance),
    }
}

pub(crate) fn parse_topic_id(id: &str) -> Result<TopicId, DetailError> {
    id.parse()
        .map_err(|_| DetailError::UnknownNode(id.to_string()))
}

fn render_stance(store: &GraphStore, edge: &EdgeData) -> Result<Stance, DetailError> {
    let document = store.document()?;
    let legislator = document
        .legislator(&edge.source)
        .ok_or_else(|| DetailError::UnknownNode(edge.source.clone()))?;
    let topic = document
        .topic(edge.target)
        .ok_or_else(|| DetailError::UnknownNode(edge.target.to_string()))?;

    let lean = if edge.prob_conservative > 0.5 {
        format!("{}% Conservative", percent(edge.prob_conservative))
    } else {
        format!("{}% Liberal", percent(1.0 - edge.prob_conservative))
    };

    let sentiment = if edge.sentiment > 0.0 {
        format!("{}% Positive", percent(edge.sentiment))
    } else {
        format!("{}% Negative", percent(edge.sentiment.abs()))
    };

    let previews: Vec<String> = edge
        .tweets
        .keys()
        .map(|tweet_id| twitframe_url(&edge.source, tweet_id))
        .collect();
    debug!(
        "Rendering stance {} -> {} with {} previews",
        edge.source,
        edge.target,
        previews.len()
    );

    Ok(Stance {
        heading: format!(
            "{} {} stance on {}:",
            legislator.label, legislator.description, topic.label
        ),
        tweet_count: format!("{} Tweets", edge.weight),
        lean,
        sentiment,
        subjectivity: format!(
            "{}% Subjective",
            (100.0 * edge.subjectivity).round_ties_even()
        ),
        previews,
    })
}

/// `fraction` as a percentage rounded to two decimals, always with a
/// fractional part ("73.0", "12.35"). Ties round to even.
fn percent(fraction: f64) -> String {
    let value = (100.0 * fraction * 100.0).round_ties_even() / 100.0;
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

pub fn tweet_url(legislator_id: &str, tweet_id: &str) -> String {
    format!("https://twitter.com/{}/status/{}", legislator_id, tweet_id)
}

/// Preview URL for one tweet via the twitframe embedding service
pub fn twitframe_url(legislator_id: &str, tweet_id: &str) -> String {
    // slashes stay literal, everything else reserved is escaped
    let encoded = urlencoding::encode(&tweet_url(legislator_id, tweet_id)).replace("%2F", "/");
    format!("https://twitframe.com/show?url={}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::tests::fixture_store;

    fn edge(prob_conservative: f64, sentiment: f64, subjectivity: f64, weight: u32) -> EdgeData {
        EdgeData {
            source: "SenA".to_string(),
            target: TopicId(1),
            importance: 0.1,
            weight,
            color: "#000".to_string(),
            prob_conservative,
            sentiment,
            subjectivity,
            tweets: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(percent(0.73), "73.0");
        assert_eq!(percent(0.2), "20.0");
        assert_eq!(percent(0.12346), "12.35");
        assert_eq!(percent(1.0), "100.0");
        assert_eq!(percent(0.0), "0.0");
    }

    #[test]
    fn test_stance_labels() {
        let (_file, store) = fixture_store();
        let detail = render(&store, &TapEvent::Edge(edge(0.73, -0.2, 0.4, 12))).unwrap();
        let Detail::Stance(stance) = detail else {
            panic!("expected a stance");
        };
        assert_eq!(stance.heading, "Alice (D-NY) stance on Healthcare:");
        assert_eq!(stance.tweet_count, "12 Tweets");
        assert_eq!(stance.lean, "73.0% Conservative");
        assert_eq!(stance.sentiment, "20.0% Negative");
        assert_eq!(stance.subjectivity, "40% Subjective");
    }

    #[test]
    fn test_liberal_and_positive_labels() {
        let (_file, store) = fixture_store();
        let detail = render(&store, &TapEvent::Edge(edge(0.2, 0.35, 0.666, 3))).unwrap();
        let Detail::Stance(stance) = detail else {
            panic!("expected a stance");
        };
        assert_eq!(stance.lean, "80.0% Liberal");
        assert_eq!(stance.sentiment, "35.0% Positive");
        assert_eq!(stance.subjectivity, "67% Subjective");
    }

    #[test]
    fn test_exactly_half_conservative_reads_liberal() {
        let (_file, store) = fixture_store();
        let Detail::Stance(stance) = render(&store, &TapEvent::Edge(edge(0.5, 0.0, 0.1, 1))).unwrap()
        else {
            panic!("expected a stance");
        };
        assert_eq!(stance.lean, "50.0% Liberal");
        assert_eq!(stance.sentiment, "0.0% Negative");
    }

    #[test]
    fn test_halfway_scores_round_to_even() {
        let (_file, store) = fixture_store();
        let Detail::Stance(stance) =
            render(&store, &TapEvent::Edge(edge(0.2, 0.00125, 0.125, 2))).unwrap()
        else {
            panic!("expected a stance");
        };
        assert_eq!(stance.subjectivity, "12% Subjective");
        assert_eq!(stance.sentiment, "0.12% Positive");

        let Detail::Stance(stance) =
            render(&store, &TapEvent::Edge(edge(0.2, 0.3, 0.375, 2))).unwrap()
        else {
            panic!("expected a stance");
        };
        assert_eq!(stance.subjectivity, "38% Subjective");
    }

    #[test]
    fn test_tweet_previews_keep_document_order() {
        let (_file, store) = fixture_store();
        let mut e = edge(0.73, -0.2, 0.4, 12);
        e.tweets.insert("222".to_string(), serde_json::json!({}));
        e.tweets.insert("111".to_string(), serde_json::json!({}));
        let Detail::Stance(stance) = render(&store, &TapEvent::Edge(e)).unwrap() else {
            panic!("expected a stance");
        };
        assert_eq!(
            stance.previews,
            vec![
                "https://twitframe.com/show?url=https%3A//twitter.com/SenA/status/222",
                "https://twitframe.com/show?url=https%3A//twitter.com/SenA/status/111",
            ]
        );
    }

    #[test]
    fn test_topic_node_detail() {
        let (_file, store) = fixture_store();
        let detail = render(&store, &TapEvent::node("2", Some(TOPIC_GROUP))).unwrap();
        assert_eq!(
            detail.lines(),
            vec!["Economy", "Top Keywords: jobs, tax, wages"]
        );
    }

    #[test]
    fn test_legislator_node_detail() {
        let (_file, store) = fixture_store();
        let detail = render(&store, &TapEvent::node("SenB", Some("R"))).unwrap();
        assert_eq!(detail.lines(), vec!["Bob (R-TX)"]);
    }

    #[test]
    fn test_unknown_node_is_reported() {
        let (_file, store) = fixture_store();
        let err = render(&store, &TapEvent::node("Ghost", None)).unwrap_err();
        assert!(matches!(err, DetailError::UnknownNode(id) if id == "Ghost"));

        let err = render(&store, &TapEvent::node("x", Some(TOPIC_GROUP))).unwrap_err();
        assert!(matches!(err, DetailError::UnknownNode(_)));
    }

    #[test]
    fn test_tap_event_json() {
        let tap: TapEvent =
            serde_json::from_str(r#"{"kind": "node", "id": "3", "group": "topic"}"#).unwrap();
        assert_eq!(tap, TapEvent::node("3", Some("topic")));

        let tap: TapEvent = serde_json::from_str(
            r##"{"kind": "edge", "source": "SenA", "target": "1", "importance": 0.1, "weight": 12,
                "color": "#000", "prob_conservative": 0.73, "sentiment": -0.2, "subjectivity": 0.4}"##,
        )
        .unwrap();
        assert!(matches!(tap, TapEvent::Edge(e) if e.target == TopicId(1)));
    }
}
