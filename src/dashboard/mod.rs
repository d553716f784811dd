//! Interaction handling for the dashboard.
//!
//! All mutable state lives in [`Session`], which the caller owns and passes in.
//! Each [`Event`] runs one update cycle: inputs are normalized, the affected
//! outputs are recomputed from the graph document, and only those outputs are
//! returned in the [`Update`].

pub mod detail;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{FilterConfig, LayoutConfig, ThemeConfig};
use crate::error::DashboardError;
use crate::graph::{FilterCriteria, GraphElement, GraphStore, Selection, TopicId};
use crate::layout::{self, LayoutSpec};
use crate::style::{self, Stylesheet};

pub use detail::{Detail, TapEvent};

/// Everything one client has chosen so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Importance slider, in percent
    pub threshold: [f64; 2],
    #[serde(default)]
    pub legislators: Selection<String>,
    #[serde(default)]
    pub topics: Selection<TopicId>,
    #[serde(default = "default_color_by_party")]
    pub color_by_party: bool,
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_color_by_party() -> bool {
    true
}

impl Session {
    pub fn new(filter: &FilterConfig) -> Self {
        Self {
            threshold: filter.default_threshold,
            legislators: Selection::All,
            topics: Selection::All,
            color_by_party: default_color_by_party(),
            dark_mode: false,
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_percent(self.threshold, self.legislators.clone(), self.topics.clone())
    }
}

/// A user input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Threshold { value: [f64; 2] },
    Legislators { value: Selection<String> },
    Topics { value: Selection<TopicId> },
    Tap { tap: TapEvent },
    ColorByParty { on: bool },
    DarkMode { on: bool },
}

/// Outputs changed by one event; untouched outputs are `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Update {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<GraphElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<Stylesheet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Detail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legislators: Option<Selection<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Selection<TopicId>>,
}

/// Stateless pipeline from session + event to fresh outputs
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: GraphStore,
    layout: LayoutConfig,
    theme: ThemeConfig,
}

impl Dashboard {
    pub fn new(store: GraphStore, layout: LayoutConfig, theme: ThemeConfig) -> Self {
        Self {
            store,
            layout,
            theme,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Full view for a session, used on first page load
    pub fn render(&self, session: &Session) -> Result<Update, DashboardError> {
        let mut update = Update::default();
        self.refresh_graph(session, &mut update)?;
        update.stylesheet = Some(style::resolve(session.color_by_party));
        update.background = Some(self.background(session.dark_mode));
        Ok(update)
    }

    /// Apply one event to `session` and return what changed
    pub fn handle(&self, session: &mut Session, event: Event) -> Result<Update, DashboardError> {
        debug!("Handling {:?}", event);
        let mut update = Update::default();

        match event {
            Event::Threshold { value } => {
                session.threshold = value;
                self.refresh_graph(session, &mut update)?;
            }
            Event::Legislators { value } => {
                session.legislators = value;
                self.refresh_graph(session, &mut update)?;
            }
            Event::Topics { value } => {
                session.topics = value;
                self.refresh_graph(session, &mut update)?;
            }
            Event::Tap { tap } => {
                if let TapEvent::Node { id, group } = &tap {
                    if group.as_deref() == Some(detail::TOPIC_GROUP) {
                        let topic_id = detail::parse_topic_id(id)?;
                        session.topics = toggle(&session.topics, topic_id);
                        update.topics = Some(session.topics.clone());
                    } else {
                        session.legislators = toggle(&session.legislators, id.clone());
                        update.legislators = Some(session.legislators.clone());
                    }
                    self.refresh_graph(session, &mut update)?;
                }
                update.detail = Some(detail::render(&self.store, &tap)?);
            }
            Event::ColorByParty { on } => {
                session.color_by_party = on;
                update.stylesheet = Some(style::resolve(on));
            }
            Event::DarkMode { on } => {
                session.dark_mode = on;
                update.background = Some(self.background(on));
            }
        }

        Ok(update)
    }

    /// Reload the filtered elements, then lay them out for the current selections
    fn refresh_graph(&self, session: &Session, update: &mut Update) -> Result<(), DashboardError> {
        let elements = self.store.load(&session.criteria())?;
        let layout = layout::compute_layout(
            &elements,
            &session.legislators,
            &session.topics,
            &self.layout,
        )?;
        info!(
            "Showing {} elements with {} layout",
            elements.len(),
            if layout.positions().is_some() {
                "preset"
            } else {
                "concentric"
            }
        );
        update.elements = Some(elements);
        update.layout = Some(layout);
        Ok(())
    }

    fn background(&self, dark_mode: bool) -> String {
        if dark_mode {
            self.theme.dark_background.clone()
        } else {
            self.theme.light_background.clone()
        }
    }
}

/// Tapping the only selected node clears the selection; tapping anything
/// else selects just that node.
pub fn toggle<T: PartialEq + Clone>(current: &Selection<T>, tapped: T) -> Selection<T> {
    if current.single() == Some(&tapped) {
        Selection::All
    } else {
        Selection::Only(vec![tapped])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::tests::fixture_store;
    use crate::layout::LayoutSpec;

    fn dashboard(store: GraphStore) -> Dashboard {
        Dashboard::new(store, LayoutConfig::default(), ThemeConfig::default())
    }

    fn session() -> Session {
        Session::new(&FilterConfig::default())
    }

    #[test]
    fn test_toggle() {
        let all: Selection<String> = Selection::All;
        let once = toggle(&all, "SenA".to_string());
        assert_eq!(once, Selection::Only(vec!["SenA".to_string()]));
        assert_eq!(toggle(&once, "SenA".to_string()), Selection::All);
        assert_eq!(
            toggle(&once, "SenB".to_string()),
            Selection::Only(vec!["SenB".to_string()])
        );

        let multi = Selection::Only(vec!["SenA".to_string(), "SenB".to_string()]);
        assert_eq!(
            toggle(&multi, "SenA".to_string()),
            Selection::Only(vec!["SenA".to_string()])
        );
    }

    #[test]
    fn test_initial_render() {
        let (_file, store) = fixture_store();
        let update = dashboard(store).render(&session()).unwrap();
        // default slider [0, 50] drops the 0.75 edge
        assert_eq!(update.elements.unwrap().len(), 8);
        assert!(matches!(update.layout, Some(LayoutSpec::Concentric { .. })));
        assert_eq!(update.background.as_deref(), Some("#ffffff"));
        assert!(update.stylesheet.is_some());
        assert!(update.detail.is_none());
    }

    #[test]
    fn test_tapping_same_legislator_twice_resets_selection() {
        let (_file, store) = fixture_store();
        let dashboard = dashboard(store);
        let mut session = session();
        let tap = Event::Tap {
            tap: TapEvent::node("SenA", Some("D")),
        };

        let first = dashboard.handle(&mut session, tap.clone()).unwrap();
        assert_eq!(session.legislators, Selection::Only(vec!["SenA".to_string()]));
        assert!(matches!(first.layout, Some(LayoutSpec::Preset { .. })));
        assert_eq!(first.detail.unwrap().lines(), vec!["Alice (D-NY)"]);

        let second = dashboard.handle(&mut session, tap).unwrap();
        assert_eq!(session.legislators, Selection::All);
        assert_eq!(second.legislators, Some(Selection::All));
        assert!(matches!(second.layout, Some(LayoutSpec::Concentric { .. })));
    }

    #[test]
    fn test_topic_tap_coerces_id() {
        let (_file, store) = fixture_store();
        let dashboard = dashboard(store);
        let mut session = session();
        let update = dashboard
            .handle(
                &mut session,
                Event::Tap {
                    tap: TapEvent::node("2", Some("topic")),
                },
            )
            .unwrap();
        assert_eq!(session.topics, Selection::Only(vec![TopicId(2)]));
        assert_eq!(session.legislators, Selection::All);
        assert!(update.legislators.is_none());
        let layout = update.layout.unwrap();
        assert_eq!(layout.positions().unwrap().len(), 4);
    }

    #[test]
    fn test_node_tap_leaves_other_axis_selected() {
        let (_file, store) = fixture_store();
        let dashboard = dashboard(store);
        let mut session = session();
        dashboard
            .handle(
                &mut session,
                Event::Legislators {
                    value: Selection::Only(vec!["SenA".to_string(), "SenB".to_string()]),
                },
            )
            .unwrap();

        let update = dashboard
            .handle(
                &mut session,
                Event::Tap {
                    tap: TapEvent::node("1", Some("topic")),
                },
            )
            .unwrap();
        assert_eq!(session.topics, Selection::Only(vec![TopicId(1)]));
        assert_eq!(
            session.legislators,
            Selection::Only(vec!["SenA".to_string(), "SenB".to_string()])
        );
        assert!(update.legislators.is_none());
        // topic focus rings only the two selected legislators
        assert_eq!(update.layout.unwrap().positions().unwrap().len(), 3);
    }

    #[test]
    fn test_edge_tap_only_renders_detail() {
        let (_file, store) = fixture_store();
        let dashboard = dashboard(store);
        let doc = dashboard.store().document().unwrap();
        let edge = doc.edges().next().unwrap().clone();
        let mut session = session();
        let before = session.clone();

        let update = dashboard
            .handle(
                &mut session,
                Event::Tap {
                    tap: TapEvent::Edge(edge),
                },
            )
            .unwrap();
        assert_eq!(session, before);
        assert!(update.elements.is_none());
        let lines = update.detail.unwrap().lines();
        assert_eq!(lines[1], "12 Tweets");
        assert_eq!(lines[2], "73.0% Conservative");
    }

    #[test]
    fn test_switches() {
        let (_file, store) = fixture_store();
        let dashboard = dashboard(store);
        let mut session = session();

        let update = dashboard
            .handle(&mut session, Event::DarkMode { on: true })
            .unwrap();
        assert_eq!(update.background.as_deref(), Some("#222222"));
        assert!(update.elements.is_none());

        let update = dashboard
            .handle(&mut session, Event::ColorByParty { on: false })
            .unwrap();
        assert!(!session.color_by_party);
        let sheet = update.stylesheet.unwrap();
        assert!(sheet.iter().all(|r| !r.style.contains_key("background-color")));
    }

    #[test]
    fn test_dropdown_unknown_focal_is_an_error() {
        let (_file, store) = fixture_store();
        let dashboard = dashboard(store);
        let mut session = session();
        let err = dashboard
            .handle(
                &mut session,
                Event::Legislators {
                    value: Selection::Only(vec!["Nobody".to_string()]),
                },
            )
            .unwrap_err();
        assert!(matches!(err, DashboardError::Layout(_)));
    }

    #[test]
    fn test_event_json() {
        let event: Event =
            serde_json::from_str(r#"{"type": "legislators", "value": []}"#).unwrap();
        assert_eq!(
            event,
            Event::Legislators {
                value: Selection::All
            }
        );

        let event: Event = serde_json::from_str(
            r#"{"type": "tap", "tap": {"kind": "node", "id": "SenA", "group": "D"}}"#,
        )
        .unwrap();
        assert!(matches!(event, Event::Tap { .. }));
    }
}
