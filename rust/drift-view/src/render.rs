use drift_catalog::{Catalog, Concept, VersionRecord};

use crate::{
    DetailPanel, DetailRecord, DetailSection, DriftView, IDLE_DETAIL_PROMPT, LOCAL_INVARIANTS,
    LOCAL_MEANING, Lane, LaneGrid, LaneNode, MapView, NOTES, NodeRef, SCHEMA_CHANGES,
    SELECT_PLACEHOLDER, SectionBody, SelectControl, SelectOption, Summary, ViewState,
};

/// Maps a catalog and a selection state to a complete snapshot.
///
/// Pure and deterministic: the same inputs always produce an equal
/// [`DriftView`].
pub fn render(catalog: &Catalog, state: &ViewState) -> DriftView {
    let concept = state.concept(catalog);

    let details = match state.record(catalog) {
        Some((concept, node, record)) => render_details(concept, &node.service, record),
        None => render_detail_prompt(concept),
    };

    DriftView {
        select: render_select(catalog, concept),
        description: concept.map(|concept| concept.description.clone()),
        canonical: concept.map(|concept| concept.canonical.clone()),
        summary: render_summary(concept),
        map: render_map(concept, state.node()),
        details,
    }
}

/// The concept dropdown: the placeholder, then every concept in catalog order.
pub fn render_select(catalog: &Catalog, selected: Option<&Concept>) -> SelectControl {
    let placeholder = SelectOption {
        value: None,
        label: SELECT_PLACEHOLDER.to_string(),
    };

    let options = std::iter::once(placeholder)
        .chain(catalog.concepts().map(|concept| SelectOption {
            value: Some(concept.id.clone()),
            label: concept.label.clone(),
        }))
        .collect();

    SelectControl {
        options,
        selected: selected.map(|concept| concept.id.clone()),
    }
}

/// The overall drift badge.
pub fn render_summary(concept: Option<&Concept>) -> Summary {
    match concept {
        None => Summary::Idle,
        Some(concept) => Summary::Drift {
            concept: concept.label.clone(),
            level: concept.overall_drift(),
        },
    }
}

/// The lane grid, marking `active` as the node shown in the detail panel.
pub fn render_map(concept: Option<&Concept>, active: Option<&NodeRef>) -> MapView {
    let Some(concept) = concept else {
        return MapView::Empty;
    };

    let lanes = concept
        .services
        .iter()
        .map(|(service, versions)| Lane {
            service: service.clone(),
            nodes: versions
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let node = NodeRef::new(service.clone(), index);
                    LaneNode {
                        active: active == Some(&node),
                        node,
                        version: record.version.clone(),
                        time: record.time.clone(),
                        drift: record.drift,
                    }
                })
                .collect(),
        })
        .collect();

    MapView::Grid(LaneGrid {
        concept_id: concept.id.clone(),
        lanes,
    })
}

/// The instructional placeholder of the detail panel.
pub fn render_detail_prompt(concept: Option<&Concept>) -> DetailPanel {
    let text = match concept {
        None => IDLE_DETAIL_PROMPT.to_string(),
        Some(concept) => format!(
            "Click any node in the map to see how {} is interpreted in that service/version.",
            concept.label
        ),
    };

    DetailPanel::Prompt { text }
}

/// The detail panel for one version of one service.
///
/// Empty change and invariant lists, and missing notes, omit their section.
pub fn render_details(concept: &Concept, service: &str, record: &VersionRecord) -> DetailPanel {
    let mut sections = vec![DetailSection {
        title: LOCAL_MEANING.to_string(),
        body: SectionBody::Text(record.meaning.clone()),
    }];

    if !record.changes.is_empty() {
        sections.push(DetailSection {
            title: SCHEMA_CHANGES.to_string(),
            body: SectionBody::List(record.changes.clone()),
        });
    }

    if !record.invariants.is_empty() {
        sections.push(DetailSection {
            title: LOCAL_INVARIANTS.to_string(),
            body: SectionBody::List(record.invariants.clone()),
        });
    }

    if let Some(notes) = record.notes() {
        sections.push(DetailSection {
            title: NOTES.to_string(),
            body: SectionBody::Text(notes.to_string()),
        });
    }

    DetailPanel::Record(DetailRecord {
        meta: format!(
            "{} · {} · {} ({})",
            concept.label, service, record.version, record.time
        ),
        level: record.drift,
        sections,
    })
}

#[cfg(test)]
mod tests {
    use drift_catalog::{CanonicalDefinition, Severity, ValueSchema};

    use super::*;
    use crate::{DESCRIPTION_HINT, EMPTY_MAP, IDLE_SUMMARY, InitialSelection};
    use pretty_assertions::assert_eq;

    fn sparse_concept() -> Concept {
        Concept::new(
            "sparse",
            "Sparse",
            "A concept with little to say",
            CanonicalDefinition {
                field_name: "sparse".into(),
                meaning: "Nothing much".into(),
                schema: ValueSchema::allowed_values("string", ["A"]),
            },
        )
        .with_service(
            "Quiet Service",
            [VersionRecord::new("v7", "2026 Q2", Severity::Medium, "Quiet")],
        )
    }

    #[test]
    fn it_renders_the_idle_view() {
        let catalog = Catalog::builtin();
        let view = render(catalog, &ViewState::idle());

        assert_eq!(view.description, None);
        assert_eq!(view.canonical, None);
        assert_eq!(view.summary, Summary::Idle);
        assert_eq!(view.summary.text(), IDLE_SUMMARY);
        assert_eq!(view.summary.class(), "summary-badge-idle");
        assert_eq!(view.map, MapView::Empty);
        assert_eq!(
            view.details,
            DetailPanel::Prompt {
                text: IDLE_DETAIL_PROMPT.to_string()
            }
        );
        assert_eq!(view.select.selected, None);
        assert_eq!(view.select.selected_index(), 0);

        // The hint is presentation only, never part of the description.
        assert_ne!(view.description.as_deref(), Some(DESCRIPTION_HINT));
        assert!(EMPTY_MAP.contains("drift map"));
    }

    #[test]
    fn it_lists_the_placeholder_before_every_concept() {
        let catalog = Catalog::builtin();
        let select = render_select(catalog, catalog.get("login_event"));

        let labels: Vec<&str> = select.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                SELECT_PLACEHOLDER,
                "User Status",
                "Subscription Tier",
                "Login Event"
            ]
        );
        assert!(select.options[0].is_placeholder());
        assert_eq!(select.selected.as_deref(), Some("login_event"));
        assert_eq!(select.selected_index(), 3);
    }

    #[test]
    fn it_renders_the_selected_concept() {
        let catalog = Catalog::builtin();
        let state = ViewState::initial(catalog, InitialSelection::First);
        let view = render(catalog, &state);

        assert_eq!(
            view.description.as_deref(),
            Some("Represents whether a user is active, suspended, or closed across different services.")
        );
        assert_eq!(
            view.summary.text(),
            "Overall drift for User Status: High drift"
        );
        assert_eq!(view.summary.class(), "summary-badge-high");
        assert_eq!(
            view.details,
            DetailPanel::Prompt {
                text: "Click any node in the map to see how User Status is interpreted in that service/version."
                    .to_string()
            }
        );
    }

    #[test]
    fn it_lays_out_one_lane_per_service() {
        let catalog = Catalog::builtin();
        let map = render_map(catalog.get("user_status"), None);
        let grid = map.grid().expect("grid is rendered");

        let lanes: Vec<(&str, Vec<&str>)> = grid
            .lanes
            .iter()
            .map(|lane| {
                (
                    lane.service.as_str(),
                    lane.nodes.iter().map(|node| node.version.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            lanes,
            vec![
                ("Service A", vec!["v1", "v2"]),
                ("Service B", vec!["v1", "v2"]),
                ("Service C", vec!["v1"]),
            ]
        );

        let classes: Vec<&str> = grid.nodes().map(LaneNode::class).collect();
        assert_eq!(
            classes,
            vec![
                "drift-node-low",
                "drift-node-medium",
                "drift-node-medium",
                "drift-node-high",
                "drift-node-medium",
            ]
        );
        assert!(grid.nodes().all(|node| !node.active));
        assert_eq!(grid.concept_id, "user_status");
    }

    #[test]
    fn it_marks_the_active_node() {
        let catalog = Catalog::builtin();
        let active = NodeRef::new("Service B", 1);
        let map = render_map(catalog.get("user_status"), Some(&active));

        let marked: Vec<&NodeRef> = map
            .grid()
            .expect("grid is rendered")
            .nodes()
            .filter(|node| node.active)
            .map(|node| &node.node)
            .collect();

        assert_eq!(marked, vec![&active]);
    }

    #[test]
    fn it_renders_every_detail_section() {
        let catalog = Catalog::builtin();
        let concept = catalog.get("subscription_tier").expect("concept");
        let record = concept.version("Marketing Service", 0).expect("record");

        let panel = render_details(concept, "Marketing Service", record);
        let record = panel.record().expect("record panel");

        assert_eq!(
            record.meta,
            "Subscription Tier · Marketing Service · v1 (2024 Q2)"
        );
        assert_eq!(record.level_line(), "Local drift level: High drift");

        let titles: Vec<&str> = record.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![LOCAL_MEANING, SCHEMA_CHANGES, LOCAL_INVARIANTS, NOTES]
        );
        assert_eq!(
            record.section(SCHEMA_CHANGES).map(|s| &s.body),
            Some(&SectionBody::List(vec![
                "Field name: value_segment.".to_string(),
                "Values: FREE, GROWTH, STRATEGIC.".to_string(),
                "Not directly tied to contractual tier.".to_string(),
            ]))
        );
    }

    #[test]
    fn it_omits_empty_detail_sections() {
        let concept = sparse_concept();
        let record = concept.version("Quiet Service", 0).expect("record");

        let panel = render_details(&concept, "Quiet Service", record);

        assert_eq!(
            panel,
            DetailPanel::Record(DetailRecord {
                meta: "Sparse · Quiet Service · v7 (2026 Q2)".to_string(),
                level: Severity::Medium,
                sections: vec![DetailSection {
                    title: LOCAL_MEANING.to_string(),
                    body: SectionBody::Text("Quiet".to_string()),
                }],
            })
        );
    }

    #[test]
    fn it_omits_blank_notes() {
        let concept = sparse_concept();
        let record = VersionRecord::new("v8", "2026 Q3", Severity::Low, "Quieter")
            .with_invariants(["One"])
            .with_notes("");

        let panel = render_details(&concept, "Quiet Service", &record);
        let titles: Vec<String> = panel
            .record()
            .map(|r| r.sections.iter().map(|s| s.title.clone()).collect())
            .unwrap_or_default();

        assert_eq!(titles, vec![LOCAL_MEANING, LOCAL_INVARIANTS]);
    }
}
