//! Concept selection and description.

use drift_view::{DESCRIPTION_HINT, DriftView};
use leptos::prelude::*;

/// Maps a `<select>` value to a concept id; the placeholder's empty value
/// clears the selection. Other values pass through untouched.
pub fn selection_from_value(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// The concept dropdown.
///
/// Changing it calls `on_change` with the chosen id, or `None` for the
/// placeholder.
#[component]
pub fn ConceptSelect(
    /// Current snapshot
    snapshot: Memo<DriftView>,
    /// Callback invoked when the selection changes.
    on_change: impl Fn(Option<String>) + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <label for="concept-select">"Concept"</label>
        <select
            id="concept-select"
            on:change=move |event| on_change(selection_from_value(event_target_value(&event)))
        >
            {move || {
                snapshot.with(|view| {
                    let selected = view.select.selected_index();
                    view.select
                        .options
                        .iter()
                        .enumerate()
                        .map(|(index, option)| {
                            view! {
                                <option
                                    value={option.value.clone().unwrap_or_default()}
                                    selected={index == selected}
                                >
                                    {option.label.clone()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </select>
    }
}

/// Description and canonical definition of the selected concept.
#[component]
pub fn ConceptDescription(
    /// Current snapshot
    snapshot: Memo<DriftView>,
) -> impl IntoView {
    move || {
        snapshot.with(|view| {
            let description = match &view.description {
                Some(description) => view! {
                    <p id="concept-description" class="concept-description">
                        {description.clone()}
                    </p>
                }
                .into_any(),
                None => view! {
                    <p id="concept-description" class="concept-description concept-description-hint">
                        {DESCRIPTION_HINT}
                    </p>
                }
                .into_any(),
            };

            let canonical = view.canonical.clone().map(|canonical| {
                view! {
                    <dl id="canonical" class="canonical">
                        <dt>"Canonical field"</dt>
                        <dd>
                            <code>{canonical.field_name}</code>
                            " (" {canonical.schema.value_type} ")"
                        </dd>
                        <dt>"Meaning"</dt>
                        <dd>{canonical.meaning}</dd>
                        <dt>{canonical.schema.constraint.title()}</dt>
                        <dd>{canonical.schema.constraint.items().join(", ")}</dd>
                    </dl>
                }
            });

            view! {
                {description}
                {canonical}
            }
        })
    }
}
