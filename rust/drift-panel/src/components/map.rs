//! Summary badge and lane grid.

use drift_view::{DriftView, EMPTY_MAP, LaneNode, MAP_HEADER, MapView, NodeRef, Summary};
use leptos::prelude::*;

/// CSS classes of a node button.
pub fn node_classes(node: &LaneNode) -> String {
    if node.active {
        format!("drift-node {} drift-node-active", node.class())
    } else {
        format!("drift-node {}", node.class())
    }
}

/// The overall drift badge.
#[component]
pub fn SummaryBadge(
    /// Current snapshot
    snapshot: Memo<DriftView>,
) -> impl IntoView {
    view! {
        <div id="summary">
            {move || {
                let summary = snapshot.with(|view| view.summary.clone());
                let class = format!("summary-badge {}", summary.class());
                let text = summary.text();
                match summary {
                    Summary::Idle => view! { <div class=class>{text}</div> }.into_any(),
                    Summary::Drift { concept, level } => view! {
                        <div class=class>
                            "Overall drift for " <strong>{concept}</strong> ": "
                            <span class="count">{level.label()}</span>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

/// One lane per service with a button per version.
///
/// Clicking a button calls `on_activate` with the node it stands for.
#[component]
pub fn LaneGrid(
    /// Current snapshot
    snapshot: Memo<DriftView>,
    /// Callback invoked when a node is clicked.
    on_activate: impl Fn(NodeRef) + Send + Sync + 'static + Clone,
) -> impl IntoView {
    view! {
        <div id="map-container">
            {move || match snapshot.with(|view| view.map.clone()) {
                MapView::Empty => view! { <p class="map-empty">{EMPTY_MAP}</p> }.into_any(),
                MapView::Grid(grid) => {
                    let on_activate = on_activate.clone();
                    view! {
                        <div class="map-grid">
                            <div class="map-header-row">
                                <span>{MAP_HEADER[0]}</span>
                                <span>{MAP_HEADER[1]}</span>
                            </div>
                            {grid
                                .lanes
                                .into_iter()
                                .map(|lane| {
                                    let on_activate = on_activate.clone();
                                    view! {
                                        <div class="map-lane">
                                            <div class="map-lane-label">{lane.service}</div>
                                            <div class="map-lane-cells">
                                                {lane
                                                    .nodes
                                                    .into_iter()
                                                    .map(|node| {
                                                        let on_activate = on_activate.clone();
                                                        let class = node_classes(&node);
                                                        let target = node.node;
                                                        view! {
                                                            <button
                                                                type="button"
                                                                class=class
                                                                on:click=move |_| on_activate(target.clone())
                                                            >
                                                                <span class="drift-node-label-main">{node.version}</span>
                                                                <span class="drift-node-label-sub">{node.time}</span>
                                                            </button>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
