use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, MapAccess, Visitor},
};

use crate::{Severity, overall_drift};

/// The authoritative meaning a concept is supposed to have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalDefinition {
    /// Canonical field (or event) name, e.g. `user_status`
    pub field_name: String,
    /// Semantic meaning in prose
    pub meaning: String,
    /// Shape of the values the field may hold
    pub schema: ValueSchema,
}

/// A value type plus the constraint that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSchema {
    /// The value type, e.g. `string` or `event`
    #[serde(rename = "type")]
    pub value_type: String,
    /// Either the allowed values or the required fields
    #[serde(flatten)]
    pub constraint: SchemaConstraint,
}

impl ValueSchema {
    /// A schema restricted to a closed set of values.
    pub fn allowed_values<T, I, S>(value_type: T, values: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value_type: value_type.into(),
            constraint: SchemaConstraint::AllowedValues {
                allowed_values: values.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// A structured schema that must carry the given fields.
    pub fn required_fields<T, I, S>(value_type: T, fields: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value_type: value_type.into(),
            constraint: SchemaConstraint::RequiredFields {
                required_fields: fields.into_iter().map(Into::into).collect(),
            },
        }
    }
}

/// The constraint half of a [`ValueSchema`].
///
/// A schema carries exactly one of `allowedValues` and `requiredFields`;
/// a schema naming both is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaConstraint {
    /// The field holds one of a closed set of values
    AllowedValues {
        /// Permitted values, in declaration order
        #[serde(rename = "allowedValues")]
        allowed_values: Vec<String>,
    },
    /// The field is a record that must carry these fields
    RequiredFields {
        /// Mandatory field names, in declaration order
        #[serde(rename = "requiredFields")]
        required_fields: Vec<String>,
    },
}

impl SchemaConstraint {
    /// Heading for the constraint's items, e.g. `"Allowed values"`.
    pub fn title(&self) -> &'static str {
        match self {
            SchemaConstraint::AllowedValues { .. } => "Allowed values",
            SchemaConstraint::RequiredFields { .. } => "Required fields",
        }
    }

    /// The constrained values or fields.
    pub fn items(&self) -> &[String] {
        match self {
            SchemaConstraint::AllowedValues { allowed_values } => allowed_values,
            SchemaConstraint::RequiredFields { required_fields } => required_fields,
        }
    }
}

/// How one service interpreted a concept at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Version label, e.g. `v2`
    pub version: String,
    /// Time period label, e.g. `2024 Q3`
    pub time: String,
    /// Drift of this interpretation from the canonical definition
    pub drift: Severity,
    /// What the concept means locally
    pub meaning: String,
    /// Schema or field changes, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<String>,
    /// Local invariants, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invariants: Vec<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VersionRecord {
    /// A record with no changes, invariants or notes.
    pub fn new(
        version: impl Into<String>,
        time: impl Into<String>,
        drift: Severity,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            time: time.into(),
            drift,
            meaning: meaning.into(),
            changes: Vec::new(),
            invariants: Vec::new(),
            notes: None,
        }
    }

    /// Replaces the schema or field changes.
    pub fn with_changes<I, S>(mut self, changes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.changes = changes.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the local invariants.
    pub fn with_invariants<I, S>(mut self, invariants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invariants = invariants.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the free-text notes. Blank notes read as absent through
    /// [`VersionRecord::notes`].
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Notes, treating empty or whitespace-only text the same as no notes at
    /// all. The stored [`VersionRecord::notes`] field keeps the raw text, so
    /// exports round-trip it unchanged.
    pub fn notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .filter(|notes| !notes.trim().is_empty())
    }
}

/// A named real-world idea whose meaning drifts across services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Unique identifier within a catalog, e.g. `user_status`
    pub id: String,
    /// Display label, e.g. `User Status`
    pub label: String,
    /// One-line description of the concept
    pub description: String,
    /// What the concept is supposed to mean
    pub canonical: CanonicalDefinition,
    /// Service name to its versions, oldest first. Map order is display order.
    #[serde(default, deserialize_with = "unique_services")]
    pub services: IndexMap<String, Vec<VersionRecord>>,
}

impl Concept {
    /// A concept with no service lanes yet; add them with
    /// [`Concept::with_service`].
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        canonical: CanonicalDefinition,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            canonical,
            services: IndexMap::new(),
        }
    }

    /// Appends a service lane. Re-using a service name replaces its versions but
    /// keeps its original position.
    pub fn with_service<I>(mut self, service: impl Into<String>, versions: I) -> Self
    where
        I: IntoIterator<Item = VersionRecord>,
    {
        self.services
            .insert(service.into(), versions.into_iter().collect());
        self
    }

    /// Every version record, service by service in display order.
    pub fn records(&self) -> impl Iterator<Item = &VersionRecord> {
        self.services.values().flatten()
    }

    /// Looks up the `index`-th version of `service`.
    pub fn version(&self, service: &str, index: usize) -> Option<&VersionRecord> {
        self.services
            .get(service)
            .and_then(|versions| versions.get(index))
    }

    /// The worst drift across all services; see [`overall_drift`].
    pub fn overall_drift(&self) -> Severity {
        overall_drift(self.records())
    }
}

/// Reads the service map, rejecting a service name that appears twice.
fn unique_services<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, Vec<VersionRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ServicesVisitor;

    impl<'de> Visitor<'de> for ServicesVisitor {
        type Value = IndexMap<String, Vec<VersionRecord>>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of service names to version lists")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut services = IndexMap::with_capacity(map.size_hint().unwrap_or_default());

            while let Some(service) = map.next_key::<String>()? {
                if services.contains_key(&service) {
                    return Err(de::Error::custom(format_args!(
                        "service '{service}' is declared more than once"
                    )));
                }
                let versions: Vec<VersionRecord> = map.next_value()?;
                services.insert(service, versions);
            }

            Ok(services)
        }
    }

    deserializer.deserialize_map(ServicesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn concept() -> Concept {
        Concept::new(
            "order_state",
            "Order State",
            "Where an order is in its lifecycle.",
            CanonicalDefinition {
                field_name: "order_state".into(),
                meaning: "PLACED, SHIPPED or DELIVERED.".into(),
                schema: ValueSchema::allowed_values("string", ["PLACED", "SHIPPED", "DELIVERED"]),
            },
        )
    }

    #[test]
    fn it_keeps_services_in_insertion_order() {
        let concept = concept()
            .with_service("Zeta", [VersionRecord::new("v1", "2024 Q1", Severity::Low, "a")])
            .with_service("Alpha", [VersionRecord::new("v1", "2024 Q2", Severity::Low, "b")])
            .with_service("Mid", [VersionRecord::new("v1", "2024 Q3", Severity::Low, "c")]);

        let names: Vec<&str> = concept.services.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn it_aggregates_across_all_services() {
        let concept = concept()
            .with_service(
                "Warehouse",
                [
                    VersionRecord::new("v1", "2024 Q1", Severity::Low, "a"),
                    VersionRecord::new("v2", "2024 Q2", Severity::Medium, "b"),
                ],
            )
            .with_service("Storefront", [VersionRecord::new("v1", "2024 Q1", Severity::Low, "c")]);

        assert_eq!(concept.records().count(), 3);
        assert_eq!(concept.overall_drift(), Severity::Medium);
    }

    #[test]
    fn it_treats_a_concept_without_versions_as_low_drift() {
        assert_eq!(concept().overall_drift(), Severity::Low);
        assert_eq!(
            concept()
                .with_service("Empty", Vec::<VersionRecord>::new())
                .overall_drift(),
            Severity::Low
        );
    }

    #[test]
    fn it_looks_up_versions_by_service_and_index() {
        let concept = concept().with_service(
            "Warehouse",
            [
                VersionRecord::new("v1", "2024 Q1", Severity::Low, "a"),
                VersionRecord::new("v2", "2024 Q2", Severity::High, "b"),
            ],
        );

        assert_eq!(
            concept.version("Warehouse", 1).map(|v| v.version.as_str()),
            Some("v2")
        );
        assert_eq!(concept.version("Warehouse", 2), None);
        assert_eq!(concept.version("Storefront", 0), None);
    }

    #[test]
    fn it_treats_blank_notes_as_absent() {
        let record = VersionRecord::new("v1", "2024 Q1", Severity::Low, "a");
        assert_eq!(record.notes(), None);
        assert_eq!(record.clone().with_notes("").notes(), None);
        assert_eq!(record.clone().with_notes("  ").notes(), None);
        assert_eq!(record.clone().with_notes("  ").notes.as_deref(), Some("  "));
        assert_eq!(record.with_notes("kept").notes(), Some("kept"));
    }

    #[test]
    fn it_reads_either_schema_constraint() -> anyhow::Result<()> {
        let allowed: ValueSchema =
            serde_json::from_str(r#"{ "type": "string", "allowedValues": ["A", "B"] }"#)?;
        assert_eq!(allowed, ValueSchema::allowed_values("string", ["A", "B"]));
        assert_eq!(allowed.constraint.title(), "Allowed values");

        let required: ValueSchema =
            serde_json::from_str(r#"{ "type": "event", "requiredFields": ["user_id"] }"#)?;
        assert_eq!(required, ValueSchema::required_fields("event", ["user_id"]));
        assert_eq!(required.constraint.items(), ["user_id".to_string()]);

        assert!(serde_json::from_str::<ValueSchema>(r#"{ "type": "string" }"#).is_err());
        Ok(())
    }

    #[test]
    fn it_rejects_a_schema_with_both_constraints() {
        let both = serde_json::from_str::<ValueSchema>(
            r#"{ "type": "string", "allowedValues": ["A"], "requiredFields": ["id"] }"#,
        );
        assert!(both.is_err());

        let reversed = serde_json::from_str::<ValueSchema>(
            r#"{ "requiredFields": ["id"], "type": "event", "allowedValues": ["A"] }"#,
        );
        assert!(reversed.is_err());
    }

    #[test]
    fn it_rejects_a_service_declared_twice() {
        let error = serde_json::from_str::<Concept>(
            r#"{
                "id": "order_state",
                "label": "Order State",
                "description": "d",
                "canonical": {
                    "fieldName": "order_state",
                    "meaning": "m",
                    "schema": { "type": "string", "allowedValues": ["PLACED"] }
                },
                "services": {
                    "S": [{ "version": "v1", "time": "2024 Q1", "drift": "high", "meaning": "a" }],
                    "S": [{ "version": "v2", "time": "2024 Q2", "drift": "low", "meaning": "b" }]
                }
            }"#,
        )
        .expect_err("a repeated service name must not load")
        .to_string();

        assert!(error.contains("service 'S' is declared more than once"), "{error}");
    }

    #[test]
    fn it_defaults_missing_services_to_none() -> anyhow::Result<()> {
        let parsed: Concept = serde_json::from_str(
            r#"{
                "id": "order_state",
                "label": "Order State",
                "description": "Where an order is in its lifecycle.",
                "canonical": {
                    "fieldName": "order_state",
                    "meaning": "PLACED, SHIPPED or DELIVERED.",
                    "schema": { "type": "string", "allowedValues": ["PLACED", "SHIPPED", "DELIVERED"] }
                }
            }"#,
        )?;

        assert_eq!(parsed, concept());
        Ok(())
    }

    #[test]
    fn it_defaults_optional_record_fields() -> anyhow::Result<()> {
        let record: VersionRecord = serde_json::from_str(
            r#"{ "version": "v1", "time": "2024 Q1", "drift": "medium", "meaning": "m" }"#,
        )?;

        assert_eq!(
            record,
            VersionRecord::new("v1", "2024 Q1", Severity::Medium, "m")
        );
        Ok(())
    }
}
