use thiserror::Error;

/// Errors raised by selection handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriftViewError {
    /// A node was activated while no concept is selected
    #[error("Cannot activate node {service}#{index}: no concept is selected")]
    NoConceptSelected {
        /// Service lane of the node
        service: String,
        /// Position of the node within its lane
        index: usize,
    },

    /// A node does not exist in the selected concept
    #[error("Concept '{concept}' has no version at {service}#{index}")]
    UnknownNode {
        /// Id of the selected concept
        concept: String,
        /// Service lane of the node
        service: String,
        /// Position of the node within its lane
        index: usize,
    },
}
