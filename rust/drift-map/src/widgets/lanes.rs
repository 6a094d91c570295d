use drift_view::{EMPTY_MAP, LaneNode, MAP_HEADER, MapView};
use ratatui::{
    prelude::*,
    widgets::{Block, Cell, Paragraph, Row, Table, Wrap},
};

use crate::{NodeCursor, severity_color};

/// One row per service lane, versions left to right.
pub struct LaneGrid<'a> {
    /// Map region from the snapshot
    pub map: &'a MapView,
    /// Keyboard cursor; drawn reversed
    pub cursor: Option<NodeCursor>,
}

impl Widget for LaneGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Drift Map");

        let grid = match self.map {
            MapView::Empty => {
                Paragraph::new(EMPTY_MAP)
                    .dim()
                    .wrap(Wrap { trim: true })
                    .block(block)
                    .render(area, buf);
                return;
            }
            MapView::Grid(grid) => grid,
        };

        let width = grid
            .lanes
            .iter()
            .map(|lane| lane.service.chars().count())
            .chain([MAP_HEADER[0].len()])
            .max()
            .unwrap_or_default();

        let header = MAP_HEADER
            .into_iter()
            .map(Cell::from)
            .collect::<Row>()
            .style(Style::new().bold());

        let rows = grid.lanes.iter().enumerate().map(|(lane_index, lane)| {
            let mut spans = Vec::with_capacity(lane.nodes.len() * 2);
            for (index, node) in lane.nodes.iter().enumerate() {
                if index > 0 {
                    spans.push(Span::raw(" "));
                }
                let under_cursor = self.cursor
                    == Some(NodeCursor {
                        lane: lane_index,
                        index,
                    });
                spans.push(node_span(node, under_cursor));
            }

            Row::new([
                Cell::from(lane.service.as_str()),
                Cell::from(Line::from(spans)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX)),
                Constraint::Min(0),
            ],
        )
        .header(header)
        .block(block);

        Widget::render(table, area, buf);
    }
}

fn node_span(node: &LaneNode, under_cursor: bool) -> Span<'static> {
    let color = severity_color(node.drift);
    let style = if node.active {
        Style::new().fg(Color::Black).bg(color).bold()
    } else {
        Style::new().fg(color)
    };
    let style = if under_cursor {
        style.reversed()
    } else {
        style
    };

    Span::styled(format!("[{} {}]", node.version, node.time), style)
}
