//! HTML rendering of a [`DriftView`].
//!
//! Element ids and class names follow the classic drift map page
//! (`concept-select`, `summary`, `map-container`, `details-card`, ...), so a
//! rendered fragment can be dropped into an existing stylesheet. All catalog
//! text is escaped.

use std::fmt;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::{
    DESCRIPTION_HINT, DetailPanel, DriftView, EMPTY_MAP, MAP_HEADER, MapView, SectionBody,
    Summary,
};

/// Stylesheet used by [`HtmlPage`].
pub const STYLESHEET: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;background:#0f1117;color:#d8dae5}
.drift-map{display:grid;grid-template-columns:280px 1fr;min-height:100vh}
.sidebar{padding:20px;border-right:1px solid #262a36;background:#151823}
.sidebar select{width:100%;padding:6px;margin:8px 0 12px}
.concept-description{font-size:13px;line-height:1.5}
.concept-description-hint{color:#7c8196}
.canonical{margin-top:16px;font-size:12px}
.canonical dt{color:#7c8196;text-transform:uppercase;letter-spacing:.06em;margin-top:8px}
.canonical dd{margin:2px 0 0}
.main{padding:20px;display:flex;flex-direction:column;gap:18px}
.summary-badge{display:inline-block;padding:6px 12px;border-radius:999px;font-size:13px}
.summary-badge-idle{background:#262a36;color:#7c8196}
.summary-badge-low{background:#143d2b;color:#7ee2a8}
.summary-badge-medium{background:#4a3a12;color:#f3c969}
.summary-badge-high{background:#4d1820;color:#ff8f9c}
.map-empty{color:#7c8196}
.map-grid{display:flex;flex-direction:column;gap:8px}
.map-header-row,.map-lane{display:grid;grid-template-columns:180px 1fr;gap:12px;align-items:center}
.map-header-row{font-size:11px;color:#7c8196;text-transform:uppercase;letter-spacing:.06em}
.map-lane-cells{display:flex;gap:8px;flex-wrap:wrap}
.drift-node{display:flex;flex-direction:column;padding:6px 10px;border-radius:8px;border:1px solid transparent;color:inherit;cursor:pointer}
.drift-node-low{background:#143d2b}
.drift-node-medium{background:#4a3a12}
.drift-node-high{background:#4d1820}
.drift-node-active{border-color:#d8dae5}
.drift-node-label-main{font-weight:600}
.drift-node-label-sub{font-size:11px;opacity:.8}
.details-card{padding:16px;border-radius:12px;background:#151823}
.details-meta{color:#7c8196;font-size:12px}
.details-empty{color:#7c8196}
.details-section h4{margin:14px 0 4px}
"#;

/// The drift map as an HTML fragment.
pub struct HtmlFragment<'a>(pub &'a DriftView);

impl fmt::Display for HtmlFragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, r#"<div class="drift-map">"#)?;
        writeln!(f, r#"<aside class="sidebar">"#)?;
        write_select(f, view)?;
        write_description(f, view)?;
        write_canonical(f, view)?;
        writeln!(f, "</aside>")?;

        writeln!(f, r#"<main class="main">"#)?;
        write_summary(f, &view.summary)?;
        write_map(f, &view.map)?;
        write_details(f, &view.details)?;
        writeln!(f, "</main>")?;
        writeln!(f, "</div>")
    }
}

/// A standalone HTML document wrapping an [`HtmlFragment`].
pub struct HtmlPage<'a> {
    pub view: &'a DriftView,
    pub title: &'a str,
}

impl fmt::Display for HtmlPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(f, "<title>{}</title>", text(self.title))?;
        writeln!(f, "<style>{STYLESHEET}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        write!(f, "{}", HtmlFragment(self.view))?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_select(f: &mut fmt::Formatter<'_>, view: &DriftView) -> fmt::Result {
    writeln!(f, r#"<label for="concept-select">Concept</label>"#)?;
    writeln!(f, r#"<select id="concept-select">"#)?;

    let selected = view.select.selected_index();
    for (index, option) in view.select.options.iter().enumerate() {
        writeln!(
            f,
            r#"<option value="{}"{}>{}</option>"#,
            attr(option.value.as_deref().unwrap_or_default()),
            if index == selected { " selected" } else { "" },
            text(&option.label)
        )?;
    }

    writeln!(f, "</select>")
}

fn write_description(f: &mut fmt::Formatter<'_>, view: &DriftView) -> fmt::Result {
    match &view.description {
        Some(description) => writeln!(
            f,
            r#"<p id="concept-description" class="concept-description">{}</p>"#,
            text(description)
        ),
        None => writeln!(
            f,
            r#"<p id="concept-description" class="concept-description concept-description-hint">{}</p>"#,
            text(DESCRIPTION_HINT)
        ),
    }
}

fn write_canonical(f: &mut fmt::Formatter<'_>, view: &DriftView) -> fmt::Result {
    let Some(canonical) = &view.canonical else {
        return Ok(());
    };

    writeln!(f, r#"<dl id="canonical" class="canonical">"#)?;
    writeln!(
        f,
        "<dt>Canonical field</dt><dd><code>{}</code> ({})</dd>",
        text(&canonical.field_name),
        text(&canonical.schema.value_type)
    )?;
    writeln!(f, "<dt>Meaning</dt><dd>{}</dd>", text(&canonical.meaning))?;
    writeln!(
        f,
        "<dt>{}</dt><dd>{}</dd>",
        canonical.schema.constraint.title(),
        text(&canonical.schema.constraint.items().join(", "))
    )?;
    writeln!(f, "</dl>")
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &Summary) -> fmt::Result {
    writeln!(f, r#"<div id="summary">"#)?;
    match summary {
        Summary::Idle => writeln!(
            f,
            r#"<div class="summary-badge {}">{}</div>"#,
            summary.class(),
            text(&summary.text())
        )?,
        Summary::Drift { concept, level } => writeln!(
            f,
            r#"<div class="summary-badge {}">Overall drift for <strong>{}</strong>: <span class="count">{}</span></div>"#,
            summary.class(),
            text(concept),
            level.label()
        )?,
    }
    writeln!(f, "</div>")
}

fn write_map(f: &mut fmt::Formatter<'_>, map: &MapView) -> fmt::Result {
    writeln!(f, r#"<div id="map-container">"#)?;

    match map {
        MapView::Empty => writeln!(f, r#"<p class="map-empty">{}</p>"#, text(EMPTY_MAP))?,
        MapView::Grid(grid) => {
            writeln!(f, r#"<div class="map-grid">"#)?;
            writeln!(
                f,
                r#"<div class="map-header-row"><span>{}</span><span>{}</span></div>"#,
                MAP_HEADER[0], MAP_HEADER[1]
            )?;

            for lane in &grid.lanes {
                writeln!(f, r#"<div class="map-lane">"#)?;
                writeln!(
                    f,
                    r#"<div class="map-lane-label">{}</div>"#,
                    text(&lane.service)
                )?;
                writeln!(f, r#"<div class="map-lane-cells">"#)?;

                for node in &lane.nodes {
                    writeln!(
                        f,
                        r#"<button type="button" class="drift-node {}{}" data-concept-id="{}" data-service="{}" data-index="{}"><span class="drift-node-label-main">{}</span><span class="drift-node-label-sub">{}</span></button>"#,
                        node.class(),
                        if node.active { " drift-node-active" } else { "" },
                        attr(&grid.concept_id),
                        attr(&node.node.service),
                        node.node.index,
                        text(&node.version),
                        text(&node.time)
                    )?;
                }

                writeln!(f, "</div>")?;
                writeln!(f, "</div>")?;
            }

            writeln!(f, "</div>")?;
        }
    }

    writeln!(f, "</div>")
}

fn write_details(f: &mut fmt::Formatter<'_>, details: &DetailPanel) -> fmt::Result {
    writeln!(f, r#"<div id="details-card" class="details-card">"#)?;
    writeln!(f, "<h3>{}</h3>", details.heading())?;

    match details {
        DetailPanel::Prompt { text: prompt } => {
            writeln!(f, r#"<p class="details-empty">{}</p>"#, text(prompt))?;
        }
        DetailPanel::Record(record) => {
            writeln!(f, r#"<p class="details-meta">{}</p>"#, text(&record.meta))?;
            writeln!(f, r#"<p class="details-meta">{}</p>"#, record.level_line())?;

            for section in &record.sections {
                writeln!(f, r#"<div class="details-section">"#)?;
                writeln!(f, "<h4>{}</h4>", text(&section.title))?;
                match &section.body {
                    SectionBody::Text(body) => writeln!(f, "<p>{}</p>", text(body))?,
                    SectionBody::List(items) => {
                        writeln!(f, "<ul>")?;
                        for item in items {
                            writeln!(f, "<li>{}</li>", text(item))?;
                        }
                        writeln!(f, "</ul>")?;
                    }
                }
                writeln!(f, "</div>")?;
            }
        }
    }

    writeln!(f, "</div>")
}
