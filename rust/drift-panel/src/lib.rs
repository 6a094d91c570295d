//! Browser panel for the Truth Drift Map.
//!
//! `drift-panel` renders the snapshots produced by [`drift_view`] as a
//! reactive Leptos (CSR) interface. The browser owns nothing but a
//! [`ViewState`](drift_view::ViewState) signal: the concept `<select>` and
//! the node buttons feed the selection handlers, and every region is derived
//! from the resulting [`DriftView`](drift_view::DriftView).
//!
//! # Entry points
//!
//! - **`panel`** binary: compiled to WASM via Trunk and mounted to the DOM
//!   body.

pub mod components;
