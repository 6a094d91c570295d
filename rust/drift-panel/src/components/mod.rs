//! Leptos UI components for the drift map panel.
//!
//! The component tree is:
//!
//! ```text
//! DriftMapApp
//! ├── sidebar
//! │   ├── ConceptSelect       (placeholder + one option per concept)
//! │   └── ConceptDescription  (description, canonical definition)
//! └── main
//!     ├── SummaryBadge        (overall drift)
//!     ├── LaneGrid            (one lane per service, node buttons)
//!     └── DetailCard          (activated node)
//! ```

mod details;
mod map;
mod sidebar;

pub use details::*;
pub use map::*;
pub use sidebar::*;

use drift_catalog::Catalog;
use drift_view::{DriftView, InitialSelection, NodeRef, STYLESHEET, ViewState};
use leptos::prelude::*;

/// Root component for the drift map panel.
///
/// Holds the selection in a signal and derives one [`DriftView`] snapshot
/// from it; every region reads its part of that snapshot.
#[component]
pub fn DriftMapApp() -> impl IntoView {
    let catalog = Catalog::builtin();
    let state = RwSignal::new(ViewState::initial(catalog, InitialSelection::First));
    let snapshot: Memo<DriftView> = Memo::new(move |_| state.with(|state| state.view(catalog)));

    let on_concept = move |id: Option<String>| {
        state.update(|state| state.select_concept(catalog, id.as_deref()));
    };

    let on_node = move |node: NodeRef| {
        state.update(|state| {
            if let Err(error) = state.activate_node(catalog, node) {
                tracing::warn!("{error}");
            }
        });
    };

    view! {
        <style>{STYLESHEET}</style>
        <div class="drift-map">
            <aside class="sidebar">
                <h2>"Truth Drift Map"</h2>
                <ConceptSelect snapshot=snapshot on_change=on_concept />
                <ConceptDescription snapshot=snapshot />
            </aside>
            <main class="main">
                <SummaryBadge snapshot=snapshot />
                <LaneGrid snapshot=snapshot on_activate=on_node />
                <DetailCard snapshot=snapshot />
            </main>
        </div>
    }
}
