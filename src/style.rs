use serde::Serialize;
use std::collections::BTreeMap;

/// One selector block of the canvas stylesheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    pub selector: String,
    pub style: BTreeMap<String, String>,
}

impl StyleRule {
    fn new(selector: &str, properties: &[(&str, &str)]) -> Self {
        Self {
            selector: selector.to_string(),
            style: properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

pub type Stylesheet = Vec<StyleRule>;

/// Stylesheet for the canvas. Nodes are filled with their party color only
/// when `color_by_party` is set; edges are always sized and colored from data.
pub fn resolve(color_by_party: bool) -> Stylesheet {
    let edge = StyleRule::new(
        "edge",
        &[
            ("width", "data(weight)"),
            ("color", "data(color)"),
            ("line-color", "data(color)"),
        ],
    );

    let mut node = StyleRule::new(
        "node",
        &[
            ("label", "data(label)"),
            ("width", "data(size)"),
            ("height", "data(size)"),
        ],
    );
    if color_by_party {
        node.style
            .insert("background-color".to_string(), "data(color)".to_string());
    }

    vec![edge, node]
}
