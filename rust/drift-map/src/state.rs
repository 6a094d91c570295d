use anyhow::Result;
use drift_catalog::Catalog;
use drift_view::{DriftView, InitialSelection, NodeRef, ViewState};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
};

use crate::DriftMapApp;

/// Position of the lane cursor: a service lane and a version within it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCursor {
    /// Lane index in catalog order
    pub lane: usize,
    /// Version index within the lane
    pub index: usize,
}

/// Everything the interactive browser needs between frames.
pub struct DriftMapState {
    /// The loaded catalog
    pub catalog: Catalog,
    /// Selection handed to the view layer
    pub view: ViewState,
    /// Version under the keyboard cursor
    pub cursor: NodeCursor,
    exit: bool,
}

impl DriftMapState {
    /// Starts browsing `catalog`, selecting `concept` when given and falling
    /// back to `initial` otherwise.
    pub fn new(catalog: Catalog, initial: InitialSelection, concept: Option<&str>) -> Self {
        let view = match concept {
            Some(id) => {
                let mut view = ViewState::idle();
                view.select_concept(&catalog, Some(id));
                view
            }
            None => ViewState::initial(&catalog, initial),
        };

        Self {
            catalog,
            view,
            cursor: NodeCursor::default(),
            exit: false,
        }
    }

    /// Snapshot of the current selection.
    pub fn snapshot(&self) -> DriftView {
        self.view.view(&self.catalog)
    }

    /// Whether the user asked to quit.
    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Draws frames and handles key presses until the user quits.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let app = DriftMapApp {};
        terminal.clear()?;

        while !self.exit {
            terminal.draw(|frame| frame.render_stateful_widget(&app, frame.area(), &mut self))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        match event::read()? {
            // crossterm also emits key release and repeat events on Windows
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => (),
        };
        Ok(())
    }

    /// Applies a single key press.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_concept(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_concept(),
            KeyCode::Tab => self.select_next_lane(),
            KeyCode::BackTab => self.select_previous_lane(),
            KeyCode::Left | KeyCode::Char('h') => self.select_previous_node(),
            KeyCode::Right | KeyCode::Char('l') => self.select_next_node(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cursor(),
            _ => (),
        }
    }

    /// Index of the selected dropdown entry; `0` is the placeholder.
    pub fn option_index(&self) -> usize {
        self.view
            .concept_id()
            .and_then(|id| self.catalog.position(id))
            .map(|position| position + 1)
            .unwrap_or(0)
    }

    /// Selects the dropdown entry at `index`, clamped to the list.
    pub fn select_option(&mut self, index: usize) {
        let index = index.min(self.catalog.len());
        let id = match index {
            0 => None,
            index => self
                .catalog
                .get_index(index - 1)
                .map(|concept| concept.id.clone()),
        };

        self.view.select_concept(&self.catalog, id.as_deref());
        self.cursor = NodeCursor::default();
    }

    /// Moves the dropdown selection up one entry.
    pub fn select_previous_concept(&mut self) {
        self.select_option(self.option_index().saturating_sub(1));
    }

    /// Moves the dropdown selection down one entry.
    pub fn select_next_concept(&mut self) {
        self.select_option(self.option_index() + 1);
    }

    /// Moves the cursor to the lane above.
    pub fn select_previous_lane(&mut self) {
        self.move_to_lane(self.cursor.lane.saturating_sub(1));
    }

    /// Moves the cursor to the lane below.
    pub fn select_next_lane(&mut self) {
        self.move_to_lane(self.cursor.lane + 1);
    }

    /// Moves the cursor to the earlier version in its lane.
    pub fn select_previous_node(&mut self) {
        self.cursor.index = self.cursor.index.saturating_sub(1);
    }

    /// Moves the cursor to the later version in its lane.
    pub fn select_next_node(&mut self) {
        let len = self.lane_len(self.cursor.lane);
        if self.cursor.index + 1 < len {
            self.cursor.index += 1;
        }
    }

    /// The version under the cursor, when the cursor rests on one.
    pub fn cursor_node(&self) -> Option<NodeRef> {
        let concept = self.view.concept(&self.catalog)?;
        let (service, versions) = concept.services.get_index(self.cursor.lane)?;

        (self.cursor.index < versions.len()).then(|| NodeRef::new(service, self.cursor.index))
    }

    /// Shows the details of the version under the cursor.
    pub fn activate_cursor(&mut self) {
        let Some(node) = self.cursor_node() else {
            return;
        };

        if let Err(error) = self.view.activate_node(&self.catalog, node) {
            tracing::warn!("{error}");
        }
    }

    fn move_to_lane(&mut self, lane: usize) {
        let lanes = self
            .view
            .concept(&self.catalog)
            .map(|concept| concept.services.len())
            .unwrap_or_default();

        if lanes == 0 {
            return;
        }

        self.cursor.lane = lane.min(lanes - 1);
        self.cursor.index = self
            .cursor
            .index
            .min(self.lane_len(self.cursor.lane).saturating_sub(1));
    }

    fn lane_len(&self, lane: usize) -> usize {
        self.view
            .concept(&self.catalog)
            .and_then(|concept| concept.services.get_index(lane))
            .map(|(_, versions)| versions.len())
            .unwrap_or_default()
    }
}
