//! Node placement for the dashboard canvas.
//!
//! When exactly one legislator is selected, the visible topics are arranged on
//! a ring around it; when exactly one topic is selected (and the legislator
//! selection is not a single id), the visible legislators ring the topic.
//! Otherwise the canvas falls back to its own concentric layout.

use serde::Serialize;
use std::collections::BTreeMap;
use std::f64::consts::PI;
use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::graph::{GraphElement, Position, Selection, TopicId};

/// Layout instruction understood by the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum LayoutSpec {
    /// Explicit positions keyed by node id
    Preset {
        positions: BTreeMap<String, Position>,
        animate: bool,
        #[serde(rename = "animationDuration")]
        animation_duration: u64,
    },
    /// Let the canvas place everything
    Concentric {
        animate: bool,
        #[serde(rename = "animationDuration")]
        animation_duration: u64,
    },
}

impl LayoutSpec {
    pub fn positions(&self) -> Option<&BTreeMap<String, Position>> {
        match self {
            LayoutSpec::Preset { positions, .. } => Some(positions),
            LayoutSpec::Concentric { .. } => None,
        }
    }
}

/// `n` evenly spaced points on a circle, starting at angle 0
pub fn ring_positions(radius: f64, center: Position, n: usize) -> Vec<Position> {
    if n == 0 {
        return Vec::new();
    }
    let step = 2.0 * PI / n as f64;
    (0..n)
        .map(|i| {
            let theta = step * i as f64;
            Position::new(
                radius * theta.cos() + center.x,
                radius * theta.sin() + center.y,
            )
        })
        .collect()
}

/// Pick a layout for `elements` given the current dropdown selections.
///
/// A single selected legislator always wins over a single selected topic.
pub fn compute_layout(
    elements: &[GraphElement],
    legislators: &Selection<String>,
    topics: &Selection<TopicId>,
    config: &LayoutConfig,
) -> Result<LayoutSpec, LayoutError> {
    if let Some(focal) = legislators.single() {
        let center = focal_position(elements, focal)?;
        let ring: Vec<String> = elements
            .iter()
            .filter_map(|e| match e {
                GraphElement::Topic { data, .. } if topics.contains(&data.id) => {
                    Some(data.id.to_string())
                }
                _ => None,
            })
            .collect();
        debug!("Ringing {} topics around legislator {}", ring.len(), focal);
        return Ok(preset(
            focal.clone(),
            center,
            ring,
            config.legislator_ring_radius,
            config,
        ));
    }

    if let Some(focal) = topics.single() {
        let focal = focal.to_string();
        let center = focal_position(elements, &focal)?;
        let ring: Vec<String> = elements
            .iter()
            .filter_map(|e| match e {
                GraphElement::Legislator { data, .. } if legislators.contains(&data.id) => {
                    Some(data.id.clone())
                }
                _ => None,
            })
            .collect();
        debug!("Ringing {} legislators around topic {}", ring.len(), focal);
        return Ok(preset(
            focal,
            center,
            ring,
            config.topic_ring_radius,
            config,
        ));
    }

    Ok(LayoutSpec::Concentric {
        animate: true,
        animation_duration: config.animation_duration_ms,
    })
}

/// The focal node keeps whatever position it currently has
fn focal_position(elements: &[GraphElement], id: &str) -> Result<Position, LayoutError> {
    elements
        .iter()
        .find(|e| e.node_id().as_deref() == Some(id))
        .and_then(GraphElement::position)
        .ok_or_else(|| LayoutError::FocalNodeNotFound(id.to_string()))
}

fn preset(
    focal: String,
    center: Position,
    ring: Vec<String>,
    radius: f64,
    config: &LayoutConfig,
) -> LayoutSpec {
    let mut positions = BTreeMap::new();
    positions.insert(focal, center);

    let coords = ring_positions(radius, center, ring.len());
    positions.extend(ring.into_iter().zip(coords));

    LayoutSpec::Preset {
        positions,
        animate: true,
        animation_duration: config.animation_duration_ms,
    }
}
