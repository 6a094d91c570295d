//! # drift-view
//!
//! The view controller of the Truth Drift Map. It owns no UI toolkit: it maps
//! a [`Catalog`](drift_catalog::Catalog) plus the current [`ViewState`] to a
//! complete [`DriftView`] snapshot, which front ends then draw.
//!
//! ```text
//! selection event ──▸ ViewState ──▸ render(catalog, state) ──▸ DriftView
//!                                                               ├── SelectControl
//!                                                               ├── description / canonical
//!                                                               ├── Summary
//!                                                               ├── MapView (lane grid)
//!                                                               └── DetailPanel
//! ```
//!
//! Every render is a full replacement. Nothing from a previous snapshot leaks
//! into the next one, so tests (and front ends) can compare whole snapshots.
//!
//! Two renderers ship with the crate: [`HtmlFragment`] / [`HtmlPage`] for
//! markup and [`TextReport`] for terminals.
//!
//! ```
//! use drift_catalog::{Catalog, Severity};
//! use drift_view::{InitialSelection, Summary, ViewState};
//!
//! let catalog = Catalog::builtin();
//! let state = ViewState::initial(catalog, InitialSelection::First);
//! let view = state.view(catalog);
//!
//! assert_eq!(view.summary.level(), Some(Severity::High));
//! ```

mod error;
pub use error::*;

mod html;
pub use html::*;

mod render;
pub use render::*;

mod state;
pub use state::*;

mod text;
pub use text::*;

mod view;
pub use view::*;
