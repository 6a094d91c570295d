use drift_view::{DetailPanel, DriftView, SectionBody};
use leptos::prelude::*;

/// The detail card for the activated node.
#[component]
pub fn DetailCard(
    /// Current snapshot
    snapshot: Memo<DriftView>,
) -> impl IntoView {
    view! {
        <div id="details-card" class="details-card">
            {move || {
                let details = snapshot.with(|view| view.details.clone());
                let heading = details.heading();
                let body = match details {
                    DetailPanel::Prompt { text } => {
                        view! { <p class="details-empty">{text}</p> }.into_any()
                    }
                    DetailPanel::Record(record) => {
                        let level_line = record.level_line();
                        view! {
                            <p class="details-meta">{record.meta}</p>
                            <p class="details-meta">{level_line}</p>
                            {record
                                .sections
                                .into_iter()
                                .map(|section| {
                                    let body = match section.body {
                                        SectionBody::Text(text) => view! { <p>{text}</p> }.into_any(),
                                        SectionBody::List(items) => view! {
                                            <ul>
                                                {items
                                                    .into_iter()
                                                    .map(|item| view! { <li>{item}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                        .into_any(),
                                    };
                                    view! {
                                        <div class="details-section">
                                            <h4>{section.title}</h4>
                                            {body}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        }
                        .into_any()
                    }
                };

                view! {
                    <h3>{heading}</h3>
                    {body}
                }
            }}
        </div>
    }
}
