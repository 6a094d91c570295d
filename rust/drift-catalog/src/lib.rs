//! # drift-catalog
//!
//! The read-only dataset behind the Truth Drift Map, and the aggregation that
//! turns it into a single drift signal per concept.
//!
//! A [`Catalog`] is an ordered set of [`Concept`]s. Each concept carries a
//! [`CanonicalDefinition`] (what the concept is supposed to mean) and, per
//! service, an ordered list of [`VersionRecord`]s describing how that service
//! actually interpreted it over time. Every record is graded with a
//! [`Severity`].
//!
//! ```text
//! Catalog
//! └── Concept (id, label, description, canonical)
//!     └── service name ──▸ [VersionRecord, VersionRecord, ...]
//! ```
//!
//! Catalogs are immutable once built. The built-in catalog is available via
//! [`Catalog::builtin`]; other catalogs can be loaded from JSON documents via
//! [`Catalog::from_json_str`] or [`Catalog::load`].
//!
//! ## Aggregation
//!
//! [`overall_drift`] takes the *maximum* severity weight over every record of a
//! concept. A single high-drift interpretation anywhere dominates:
//!
//! ```
//! use drift_catalog::{Catalog, Severity};
//!
//! let catalog = Catalog::builtin();
//! let concept = catalog.get("user_status").unwrap();
//!
//! assert_eq!(concept.overall_drift(), Severity::High);
//! ```

mod builtin;

mod catalog;
pub use catalog::*;

mod concept;
pub use concept::*;

mod error;
pub use error::*;

mod severity;
pub use severity::*;
