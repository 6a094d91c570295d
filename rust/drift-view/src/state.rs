use drift_catalog::{Catalog, Concept, VersionRecord};
use serde::{Deserialize, Serialize};

use crate::{DriftView, DriftViewError, render};

/// Identifies a version node: the `index`-th version of `service` within the
/// selected concept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub service: String,
    pub index: usize,
}

impl NodeRef {
    /// The `index`-th version (0-based) of `service`.
    pub fn new(service: impl Into<String>, index: usize) -> Self {
        Self {
            service: service.into(),
            index,
        }
    }
}

/// What is selected when a front end starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialSelection {
    /// Pre-select the first concept of the catalog
    #[default]
    First,
    /// Start idle
    Nothing,
}

/// The transient selection state of a drift map.
///
/// Holds at most one selected concept and, within it, at most one activated
/// node. Handlers replace state wholesale; nothing else is mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    concept: Option<String>,
    node: Option<NodeRef>,
}

impl ViewState {
    /// Nothing selected.
    pub fn idle() -> Self {
        Self::default()
    }

    /// The state a front end starts in.
    pub fn initial(catalog: &Catalog, selection: InitialSelection) -> Self {
        let mut state = Self::idle();

        if let (InitialSelection::First, Some(first)) = (selection, catalog.first()) {
            state.select_concept(catalog, Some(first.id.as_str()));
        }

        state
    }

    /// Id of the selected concept.
    pub fn concept_id(&self) -> Option<&str> {
        self.concept.as_deref()
    }

    /// The selected concept, resolved against `catalog`.
    pub fn concept<'a>(&self, catalog: &'a Catalog) -> Option<&'a Concept> {
        self.concept.as_deref().and_then(|id| catalog.get(id))
    }

    /// The activated node, if any.
    pub fn node(&self) -> Option<&NodeRef> {
        self.node.as_ref()
    }

    /// The activated version record, resolved against `catalog`.
    pub fn record<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Option<(&'a Concept, &NodeRef, &'a VersionRecord)> {
        let concept = self.concept(catalog)?;
        let node = self.node.as_ref()?;
        let record = concept.version(&node.service, node.index)?;

        Some((concept, node, record))
    }

    /// Handles a concept change.
    ///
    /// `None`, an empty id and an unknown id all reset to the idle state. A
    /// known id selects that concept. Ids are matched exactly, so padding
    /// makes an id unknown. Either way any activated node is dropped.
    pub fn select_concept(&mut self, catalog: &Catalog, id: Option<&str>) {
        let id = id.filter(|id| !id.is_empty());

        self.node = None;
        self.concept = match id {
            Some(id) if catalog.get(id).is_some() => Some(id.to_string()),
            Some(id) => {
                tracing::warn!(concept = id, "Unknown concept selected; resetting view");
                None
            }
            None => None,
        };

        tracing::debug!(concept = ?self.concept, "Concept selection changed");
    }

    /// Handles a node activation.
    ///
    /// The node must exist in the selected concept. On error the state is
    /// left untouched.
    pub fn activate_node(
        &mut self,
        catalog: &Catalog,
        node: NodeRef,
    ) -> Result<(), DriftViewError> {
        let Some(concept) = self.concept(catalog) else {
            return Err(DriftViewError::NoConceptSelected {
                service: node.service,
                index: node.index,
            });
        };

        if concept.version(&node.service, node.index).is_none() {
            return Err(DriftViewError::UnknownNode {
                concept: concept.id.clone(),
                service: node.service,
                index: node.index,
            });
        }

        tracing::debug!(
            concept = %concept.id,
            service = %node.service,
            index = node.index,
            "Node activated"
        );

        self.node = Some(node);
        Ok(())
    }

    /// Renders this state; see [`render`].
    pub fn view(&self, catalog: &Catalog) -> DriftView {
        render(catalog, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_preselects_the_first_concept() {
        let catalog = Catalog::builtin();

        let state = ViewState::initial(catalog, InitialSelection::First);
        assert_eq!(state.concept_id(), Some("user_status"));
        assert_eq!(state.node(), None);

        let state = ViewState::initial(catalog, InitialSelection::Nothing);
        assert_eq!(state, ViewState::idle());
    }

    #[test]
    fn it_starts_idle_with_an_empty_catalog() {
        let catalog = Catalog::default();
        assert_eq!(
            ViewState::initial(&catalog, InitialSelection::First),
            ViewState::idle()
        );
    }

    #[test]
    fn it_treats_empty_and_unknown_ids_as_no_selection() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::initial(catalog, InitialSelection::First);

        state.select_concept(catalog, Some(""));
        assert_eq!(state, ViewState::idle());

        state.select_concept(catalog, Some("login_event"));
        state.select_concept(catalog, Some("no_such_concept"));
        assert_eq!(state, ViewState::idle());

        state.select_concept(catalog, Some("login_event"));
        state.select_concept(catalog, None);
        assert_eq!(state, ViewState::idle());
    }

    #[test]
    fn it_matches_concept_ids_exactly() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::initial(catalog, InitialSelection::First);

        state.select_concept(catalog, Some(" user_status "));
        assert_eq!(state, ViewState::idle());

        state.select_concept(catalog, Some("   "));
        assert_eq!(state, ViewState::idle());
    }

    #[test]
    fn it_selects_concepts_whose_ids_carry_whitespace() -> anyhow::Result<()> {
        let padded = Catalog::builtin()
            .first()
            .cloned()
            .map(|mut concept| {
                concept.id = " padded".into();
                concept
            })
            .ok_or_else(|| anyhow::anyhow!("builtin catalog is empty"))?;
        let catalog = Catalog::new([padded])?;

        let mut state = ViewState::initial(&catalog, InitialSelection::First);
        assert_eq!(state.concept_id(), Some(" padded"));

        state.select_concept(&catalog, None);
        state.select_concept(&catalog, Some(" padded"));
        assert_eq!(state.concept_id(), Some(" padded"));

        state.select_concept(&catalog, Some("padded"));
        assert_eq!(state, ViewState::idle());
        Ok(())
    }

    #[test]
    fn it_drops_the_active_node_on_concept_change() -> anyhow::Result<()> {
        let catalog = Catalog::builtin();
        let mut state = ViewState::initial(catalog, InitialSelection::First);

        state.activate_node(catalog, NodeRef::new("Service B", 1))?;
        assert_eq!(state.node(), Some(&NodeRef::new("Service B", 1)));

        state.select_concept(catalog, Some("user_status"));
        assert_eq!(state.node(), None);
        Ok(())
    }

    #[test]
    fn it_rejects_nodes_outside_the_selected_concept() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::initial(catalog, InitialSelection::First);
        let before = state.clone();

        assert_eq!(
            state.activate_node(catalog, NodeRef::new("Marketing Service", 0)),
            Err(DriftViewError::UnknownNode {
                concept: "user_status".into(),
                service: "Marketing Service".into(),
                index: 0,
            })
        );
        assert_eq!(
            state.activate_node(catalog, NodeRef::new("Service C", 1)),
            Err(DriftViewError::UnknownNode {
                concept: "user_status".into(),
                service: "Service C".into(),
                index: 1,
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn it_rejects_nodes_while_idle() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::idle();

        assert_eq!(
            state.activate_node(catalog, NodeRef::new("Service A", 0)),
            Err(DriftViewError::NoConceptSelected {
                service: "Service A".into(),
                index: 0,
            })
        );
    }

    #[test]
    fn it_resolves_the_active_record() -> anyhow::Result<()> {
        let catalog = Catalog::builtin();
        let mut state = ViewState::initial(catalog, InitialSelection::First);
        assert!(state.record(catalog).is_none());

        state.activate_node(catalog, NodeRef::new("Service A", 1))?;
        let (concept, node, record) = state.record(catalog).expect("record is active");

        assert_eq!(concept.id, "user_status");
        assert_eq!(node.service, "Service A");
        assert_eq!(record.version, "v2");
        Ok(())
    }
}
