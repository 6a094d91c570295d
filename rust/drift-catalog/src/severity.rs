use std::fmt;

use serde::{Deserialize, Serialize};

use crate::VersionRecord;

/// How far a service's interpretation has drifted from the canonical
/// definition of a concept.
///
/// Tiers are ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Close to the canonical meaning
    Low,
    /// Noticeable divergence
    Medium,
    /// The concept means something else here
    High,
}

impl Severity {
    /// All tiers, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// The aggregation weight of this tier (`1`, `2` or `3`).
    pub fn weight(self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }

    /// Maps an aggregated weight back to a tier.
    ///
    /// Anything at or below `1` is [`Severity::Low`] (including the `0` an empty
    /// record set aggregates to), `2` is [`Severity::Medium`] and anything at or
    /// above `3` is [`Severity::High`].
    pub fn from_weight(weight: u8) -> Self {
        match weight {
            0 | 1 => Severity::Low,
            2 => Severity::Medium,
            _ => Severity::High,
        }
    }

    /// Lowercase key, as used in catalog documents and CSS class names.
    pub fn key(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Human-readable label, e.g. `"High drift"`.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low drift",
            Severity::Medium => "Medium drift",
            Severity::High => "High drift",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Computes the overall drift of a set of version records.
///
/// Severity is not averaged: the highest weight among `records` wins. An empty
/// set aggregates to [`Severity::Low`].
pub fn overall_drift<'a, I>(records: I) -> Severity
where
    I: IntoIterator<Item = &'a VersionRecord>,
{
    let max_weight = records
        .into_iter()
        .map(|record| record.drift.weight())
        .max()
        .unwrap_or(0);

    Severity::from_weight(max_weight)
}
