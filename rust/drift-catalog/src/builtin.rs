//! The reference dataset: three concepts and how nine services drifted
//! away from them.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::{
    CanonicalDefinition, Catalog, Concept,
    Severity::{High, Low, Medium},
    ValueSchema, VersionRecord,
};

pub(crate) static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let concepts: IndexMap<String, Concept> = [user_status(), subscription_tier(), login_event()]
        .into_iter()
        .map(|concept| (concept.id.clone(), concept))
        .collect();

    Catalog { concepts }
});

fn user_status() -> Concept {
    Concept::new(
        "user_status",
        "User Status",
        "Represents whether a user is active, suspended, or closed across different services.",
        CanonicalDefinition {
            field_name: "user_status".into(),
            meaning: "Lifecycle state of a user account: ACTIVE, SUSPENDED, or CLOSED.".into(),
            schema: ValueSchema::allowed_values("string", ["ACTIVE", "SUSPENDED", "CLOSED"]),
        },
    )
    .with_service(
        "Service A",
        [
            VersionRecord::new(
                "v1",
                "2024 Q1",
                Low,
                "User lifecycle state used for authentication and UI display.",
            )
            .with_changes([
                "Canonical field name user_status.",
                "Values: ACTIVE, SUSPENDED, CLOSED.",
            ])
            .with_invariants([
                "Only one status per user at a time.",
                "Status drives access control.",
            ])
            .with_notes("Closest to the original concept; acts as source of truth."),
            VersionRecord::new(
                "v2",
                "2024 Q3",
                Medium,
                "Lifecycle state plus marketing opt-out encoded in the same field.",
            )
            .with_changes([
                "New value: DORMANT for long-inactive users.",
                "Marketing opt-out represented as SUSPENDED in some flows.",
            ])
            .with_invariants([
                "Still a single string field.",
                "Downstream services assume ACTIVE = contactable.",
            ])
            .with_notes("Marketing concerns started to leak into lifecycle semantics."),
        ],
    )
    .with_service(
        "Service B",
        [
            VersionRecord::new(
                "v1",
                "2024 Q2",
                Medium,
                "Billing state of the account, loosely mapped from user_status.",
            )
            .with_changes([
                "Field name: account_status.",
                "Values: ACTIVE, PAST_DUE, CANCELED.",
            ])
            .with_invariants(["Used for invoicing and dunning logic."])
            .with_notes("Reuses the idea of status but repurposes it entirely for billing."),
            VersionRecord::new(
                "v2",
                "2025 Q1",
                High,
                "Composite risk & billing health indicator, overloaded into a single status field.",
            )
            .with_changes([
                "Values now include FRAUD_REVIEW and CHARGEBACK.",
                "Some ACTIVE users can have non-ACTIVE account_status.",
            ])
            .with_invariants(["Downstream analytics treat account_status as user truth."])
            .with_notes("Strong semantic drift: status is now financial risk, not lifecycle."),
        ],
    )
    .with_service(
        "Service C",
        [VersionRecord::new(
            "v1",
            "2024 Q4",
            Medium,
            "Engagement segment derived from status and activity.",
        )
        .with_changes(["Field name: user_segment.", "Values: ACTIVE, AT_RISK, CHURNED."])
        .with_invariants(["Used to target win-back campaigns."])
        .with_notes("Shares names with user_status values but represents a behavioral model.")],
    )
}

fn subscription_tier() -> Concept {
    Concept::new(
        "subscription_tier",
        "Subscription Tier",
        "Represents a customer\u{2019}s entitlement level across billing, features, and marketing experiences.",
        CanonicalDefinition {
            field_name: "subscription_tier".into(),
            meaning: "Contractual tier of the customer: FREE, STANDARD, or PREMIUM.".into(),
            schema: ValueSchema::allowed_values("string", ["FREE", "STANDARD", "PREMIUM"]),
        },
    )
    .with_service(
        "Billing Service",
        [
            VersionRecord::new(
                "v1",
                "2023 Q4",
                Low,
                "Contract-level tier driving invoicing and entitlements.",
            )
            .with_changes([
                "Field name: subscription_tier.",
                "Values match canonical set.",
            ])
            .with_invariants([
                "Tier must match product catalog.",
                "Single tier per billing account.",
            ])
            .with_notes("Acts as contractual source of truth."),
            VersionRecord::new(
                "v2",
                "2024 Q3",
                Medium,
                "Introduced BUSINESS tier, mapped internally to PREMIUM pricing.",
            )
            .with_changes([
                "New external value: BUSINESS.",
                "Internally treated as PREMIUM for some flows.",
            ])
            .with_invariants(["Legacy systems still expect PREMIUM only."])
            .with_notes(
                "Subtle drift: analytics that group by tier may double-count or misgroup BUSINESS.",
            ),
        ],
    )
    .with_service(
        "Feature Flag Service",
        [VersionRecord::new(
            "v1",
            "2024 Q1",
            Medium,
            "Set of boolean feature flags inferred from subscription tier.",
        )
        .with_changes([
            "Tier collapsed into three flag buckets: CORE, PRO, LABS.",
            "Mapping from subscription_tier is not stored, only implied.",
        ])
        .with_invariants(["Flags, not tier, drive access checks."])
        .with_notes(
            "Drift from explicit tier to derived flags; difficult to reconstruct original meaning.",
        )],
    )
    .with_service(
        "Marketing Service",
        [VersionRecord::new(
            "v1",
            "2024 Q2",
            High,
            "Customer value segment based on spend and engagement, named similarly to tiers.",
        )
        .with_changes([
            "Field name: value_segment.",
            "Values: FREE, GROWTH, STRATEGIC.",
            "Not directly tied to contractual tier.",
        ])
        .with_invariants(["Used for targeting and discount rules."])
        .with_notes("Semantic collision: names overlap with tier but represent a different axis.")],
    )
}

fn login_event() -> Concept {
    Concept::new(
        "login_event",
        "Login Event",
        "Represents user login behaviour across auth, security, and analytics pipelines.",
        CanonicalDefinition {
            field_name: "user.login".into(),
            meaning: "User successfully authenticated via any channel.".into(),
            schema: ValueSchema::required_fields("event", ["user_id", "timestamp", "auth_method"]),
        },
    )
    .with_service(
        "Auth Service",
        [VersionRecord::new(
            "v1",
            "2023 Q3",
            Low,
            "Single canonical login event emitted after successful authentication.",
        )
        .with_changes([
            "Event name: user.login.",
            "Includes auth_method and device_id.",
        ])
        .with_invariants([
            "One event per successful login.",
            "Failed logins use user.login.failed.",
        ])
        .with_notes("Baseline definition of login.")],
    )
    .with_service(
        "Security Service",
        [VersionRecord::new(
            "v1",
            "2024 Q1",
            Medium,
            "Security-focused login events including suspicious or anomalous activity.",
        )
        .with_changes([
            "Event name: security.login.",
            "Includes risk_score and geo_anomaly flag.",
        ])
        .with_invariants(["Some anomalous logins are recorded even if auth fails."])
        .with_notes("Adds a risk lens; not all events correspond to successful sessions.")],
    )
    .with_service(
        "Analytics Service",
        [VersionRecord::new(
            "v1",
            "2024 Q2",
            High,
            "Any session start, including auto-login, token refresh, or page-view-based session detection.",
        )
        .with_changes([
            "Event name: session.start.",
            "user_id sometimes missing for anonymous sessions.",
            "Multiple session.start events per underlying login.",
        ])
        .with_invariants(["Used for DAU/MAU metrics."])
        .with_notes(
            "High semantic drift: counts and meaning differ significantly from the canonical login event.",
        )],
    )
}
