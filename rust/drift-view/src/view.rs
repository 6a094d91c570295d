//! The rendered output structure.
//!
//! A [`DriftView`] is a plain value describing everything on screen: the
//! selection control, the concept description, the summary badge, the lane
//! grid and the detail panel. Front ends only ever draw one of these.

use drift_catalog::{CanonicalDefinition, Severity};
use serde::Serialize;

use crate::NodeRef;

/// Label of the selection control's "no selection" entry.
pub const SELECT_PLACEHOLDER: &str = "Select a concept…";
/// Hint shown in place of a description while nothing is selected.
pub const DESCRIPTION_HINT: &str =
    "Select a concept to see how its meaning and schema evolve across services.";
/// Text of the idle summary badge.
pub const IDLE_SUMMARY: &str = "No concept selected yet.";
/// Placeholder shown instead of a lane grid.
pub const EMPTY_MAP: &str = "Select a concept on the left to render the drift map.";
/// Column headings of the lane grid.
pub const MAP_HEADER: [&str; 2] = ["Service", "Versions over time"];
/// Heading of the detail panel.
pub const DETAILS_HEADING: &str = "Drift Details";
/// Detail prompt while no concept is selected.
pub const IDLE_DETAIL_PROMPT: &str =
    "Click any node in the map to see how that service version interprets the concept.";

pub const LOCAL_MEANING: &str = "Local Meaning";
pub const SCHEMA_CHANGES: &str = "Schema / Field Changes";
pub const LOCAL_INVARIANTS: &str = "Local Invariants";
pub const NOTES: &str = "Notes";

/// A complete snapshot of the drift map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftView {
    pub select: SelectControl,
    /// Description of the selected concept; `None` while idle
    pub description: Option<String>,
    /// Canonical definition of the selected concept; `None` while idle
    pub canonical: Option<CanonicalDefinition>,
    pub summary: Summary,
    pub map: MapView,
    pub details: DetailPanel,
}

/// The concept dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectControl {
    /// The placeholder first, then one entry per concept in catalog order
    pub options: Vec<SelectOption>,
    /// Id of the selected concept, `None` when the placeholder is selected
    pub selected: Option<String>,
}

impl SelectControl {
    /// Index into [`SelectControl::options`] of the selected entry.
    pub fn selected_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| option.value == self.selected)
            .unwrap_or(0)
    }
}

/// One entry of the concept dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Concept id; `None` for the placeholder
    pub value: Option<String>,
    pub label: String,
}

impl SelectOption {
    pub fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }
}

/// The overall drift badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Summary {
    /// No concept selected
    Idle,
    /// Aggregated drift of the selected concept
    Drift {
        /// Label of the selected concept
        concept: String,
        level: Severity,
    },
}

impl Summary {
    pub fn level(&self) -> Option<Severity> {
        match self {
            Summary::Idle => None,
            Summary::Drift { level, .. } => Some(*level),
        }
    }

    /// Visual variant, e.g. `summary-badge-high`.
    pub fn class(&self) -> &'static str {
        match self.level() {
            None => "summary-badge-idle",
            Some(Severity::Low) => "summary-badge-low",
            Some(Severity::Medium) => "summary-badge-medium",
            Some(Severity::High) => "summary-badge-high",
        }
    }

    /// The badge text, e.g. `Overall drift for User Status: High drift`.
    pub fn text(&self) -> String {
        match self {
            Summary::Idle => IDLE_SUMMARY.to_string(),
            Summary::Drift { concept, level } => {
                format!("Overall drift for {concept}: {}", level.label())
            }
        }
    }
}

/// The map region: a placeholder or a lane grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MapView {
    Empty,
    Grid(LaneGrid),
}

impl MapView {
    pub fn grid(&self) -> Option<&LaneGrid> {
        match self {
            MapView::Empty => None,
            MapView::Grid(grid) => Some(grid),
        }
    }
}

/// One lane per service, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneGrid {
    pub concept_id: String,
    pub lanes: Vec<Lane>,
}

impl LaneGrid {
    /// All nodes, lane by lane.
    pub fn nodes(&self) -> impl Iterator<Item = &LaneNode> {
        self.lanes.iter().flat_map(|lane| lane.nodes.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lane {
    pub service: String,
    pub nodes: Vec<LaneNode>,
}

/// An activatable version node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneNode {
    /// Where this node points; pass it back to
    /// [`ViewState::activate_node`](crate::ViewState::activate_node)
    pub node: NodeRef,
    pub version: String,
    pub time: String,
    pub drift: Severity,
    /// Whether the detail panel currently shows this node
    pub active: bool,
}

impl LaneNode {
    /// Visual tier, e.g. `drift-node-medium`.
    pub fn class(&self) -> &'static str {
        match self.drift {
            Severity::Low => "drift-node-low",
            Severity::Medium => "drift-node-medium",
            Severity::High => "drift-node-high",
        }
    }
}

/// The detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DetailPanel {
    /// Instructional placeholder
    Prompt { text: String },
    /// Details of an activated node
    Record(DetailRecord),
}

impl DetailPanel {
    pub fn heading(&self) -> &'static str {
        DETAILS_HEADING
    }

    pub fn record(&self) -> Option<&DetailRecord> {
        match self {
            DetailPanel::Prompt { .. } => None,
            DetailPanel::Record(record) => Some(record),
        }
    }
}

/// Everything known about one version of one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRecord {
    /// `"{concept} · {service} · {version} ({time})"`
    pub meta: String,
    pub level: Severity,
    /// Meaning first, then changes, invariants and notes when present
    pub sections: Vec<DetailSection>,
}

impl DetailRecord {
    /// `Local drift level: <label>`.
    pub fn level_line(&self) -> String {
        format!("Local drift level: {}", self.level.label())
    }

    /// Finds a section by its title.
    pub fn section(&self, title: &str) -> Option<&DetailSection> {
        self.sections.iter().find(|section| section.title == title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionBody {
    Text(String),
    List(Vec<String>),
}
