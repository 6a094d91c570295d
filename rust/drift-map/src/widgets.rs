//! UI widgets for the drift map browser.
//!
//! Every widget draws one region of a [`drift_view::DriftView`] snapshot; the
//! top-level [`DriftMapApp`] takes the snapshot and lays the regions out.

use drift_catalog::Severity;
use ratatui::style::Color;

mod app;
pub use app::*;

mod concepts;
pub use concepts::*;

mod details;
pub use details::*;

mod lanes;
pub use lanes::*;

mod summary;
pub use summary::*;

/// Terminal colour of a drift tier.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Green,
        Severity::Medium => Color::Yellow,
        Severity::High => Color::Red,
    }
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    buf.content
        .chunks(buf.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}
