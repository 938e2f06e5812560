//! Graph selection control.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::domain::entities::GraphRecord;

/// Index of the "select" placeholder.
pub const PLACEHOLDER_INDEX: usize = 0;
/// Index of the "create new" sentinel.
pub const CREATE_NEW_INDEX: usize = 1;
/// Index of the disabled separator.
pub const SEPARATOR_INDEX: usize = 2;

const PLACEHOLDER_LABEL: &str = "Select a graph";
const CREATE_NEW_LABEL: &str = "+ Create new graph";
const SEPARATOR_LABEL: &str = "────────────────";
const LIST_TITLE: &str = " Graphs ";

/// One row of the selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEntry {
    /// Shown while no graph is chosen.
    Placeholder,
    /// Opens the creation modal.
    CreateNew,
    /// Disabled divider.
    Separator,
    /// A registered graph.
    Graph(GraphRecord),
}

impl SelectEntry {
    /// Text shown for the row.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Placeholder => PLACEHOLDER_LABEL,
            Self::CreateNew => CREATE_NEW_LABEL,
            Self::Separator => SEPARATOR_LABEL,
            Self::Graph(graph) => &graph.name,
        }
    }

    /// Returns the graph path carried by the entry.
    #[must_use]
    pub fn value(&self) -> Option<&Path> {
        match self {
            Self::Graph(graph) => Some(graph.path()),
            _ => None,
        }
    }

    /// Disabled rows are skipped by the cursor and cannot be activated.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Separator)
    }

    fn header() -> Vec<Self> {
        vec![Self::Placeholder, Self::CreateNew, Self::Separator]
    }
}

/// Result of activating an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSelectAction {
    /// Nothing happened.
    None,
    /// The "create new" sentinel was chosen.
    OpenCreateModal,
    /// A graph became active.
    GraphSelected(GraphRecord),
}

/// Entries, committed selection and cursor of the selection control.
#[derive(Debug, Clone)]
pub struct GraphSelectState {
    entries: Vec<SelectEntry>,
    active: usize,
    list_state: ListState,
}

impl GraphSelectState {
    /// Header rows only, with the placeholder active.
    #[must_use]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(PLACEHOLDER_INDEX));
        Self {
            entries: SelectEntry::header(),
            active: PLACEHOLDER_INDEX,
            list_state,
        }
    }

    /// All rows, header first.
    #[must_use]
    pub fn entries(&self) -> &[SelectEntry] {
        &self.entries
    }

    /// Returns the committed selection index.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// The committed graph, if a graph row is active.
    #[must_use]
    pub fn active_graph(&self) -> Option<&GraphRecord> {
        match self.entries.get(self.active) {
            Some(SelectEntry::Graph(graph)) => Some(graph),
            _ => None,
        }
    }

    /// Returns the highlighted row.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(PLACEHOLDER_INDEX)
    }

    /// Number of graph rows.
    #[must_use]
    pub fn graph_count(&self) -> usize {
        self.entries.len() - SelectEntry::header().len()
    }

    /// Replaces all entries with the header rows followed by `graphs`, in
    /// the given order.
    ///
    /// The active graph stays selected if its path is still listed.
    pub fn rebuild(&mut self, graphs: Vec<GraphRecord>) {
        let active_path = self.active_graph().map(|g| g.path.clone());

        self.entries = SelectEntry::header();
        self.entries
            .extend(graphs.into_iter().map(SelectEntry::Graph));

        self.active = active_path
            .and_then(|path| self.position_of(&path))
            .unwrap_or(PLACEHOLDER_INDEX);
        self.list_state.select(Some(self.active));
    }

    /// Makes the graph at `path` the active selection without activating it.
    pub fn select_path(&mut self, path: &Path) -> bool {
        match self.position_of(path) {
            Some(index) => {
                self.active = index;
                self.list_state.select(Some(index));
                true
            }
            None => false,
        }
    }

    fn position_of(&self, path: &Path) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.value() == Some(path))
    }

    /// Commits the entry at `index`.
    ///
    /// The sentinel never stays selected: the control returns to the
    /// placeholder and asks for the creation modal.
    pub fn activate(&mut self, index: usize) -> GraphSelectAction {
        let Some(entry) = self.entries.get(index) else {
            return GraphSelectAction::None;
        };

        match entry {
            SelectEntry::Separator => GraphSelectAction::None,
            SelectEntry::Placeholder => {
                self.active = PLACEHOLDER_INDEX;
                GraphSelectAction::None
            }
            SelectEntry::CreateNew => {
                self.active = PLACEHOLDER_INDEX;
                self.list_state.select(Some(PLACEHOLDER_INDEX));
                GraphSelectAction::OpenCreateModal
            }
            SelectEntry::Graph(graph) => {
                let graph = graph.clone();
                self.active = index;
                GraphSelectAction::GraphSelected(graph)
            }
        }
    }

    /// Moves the cursor down, wrapping and skipping disabled rows.
    pub fn next(&mut self) {
        self.step(|i, len| (i + 1) % len);
    }

    /// Moves the cursor up, wrapping and skipping disabled rows.
    pub fn previous(&mut self) {
        self.step(|i, len| (i + len - 1) % len);
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        let len = self.entries.len();
        let mut index = advance(self.cursor(), len);
        while self.entries[index].is_disabled() {
            index = advance(index, len);
        }
        self.list_state.select(Some(index));
    }
}

impl Default for GraphSelectState {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a timestamp in local time, falling back to RFC 3339 when the
/// format string is invalid.
#[must_use]
pub fn format_timestamp(at: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.with_timezone(&Local).format(format)).is_err() {
        return at.to_rfc3339();
    }
    out
}

/// Style configuration for the selection control.
pub struct GraphSelectStyle {
    /// Block border.
    pub border_style: Style,
    /// Block title.
    pub title_style: Style,
    /// Row under the cursor.
    pub highlight_style: Style,
    /// Placeholder row.
    pub placeholder_style: Style,
    /// "Create new" row.
    pub create_new_style: Style,
    /// Separator row.
    pub separator_style: Style,
    /// Graph rows.
    pub graph_style: Style,
    /// The active graph row.
    pub active_graph_style: Style,
    /// Last-opened suffix.
    pub timestamp_style: Style,
}

impl Default for GraphSelectStyle {
    fn default() -> Self {
        Self {
            border_style: Style::default().fg(Color::Cyan),
            title_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            highlight_style: Style::default().bg(Color::DarkGray).fg(Color::White),
            placeholder_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            create_new_style: Style::default().fg(Color::Green),
            separator_style: Style::default().fg(Color::DarkGray),
            graph_style: Style::default().fg(Color::White),
            active_graph_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            timestamp_style: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Widget rendering a [`GraphSelectState`].
pub struct GraphSelect<'a> {
    style: GraphSelectStyle,
    timestamp_format: Option<&'a str>,
}

impl<'a> GraphSelect<'a> {
    /// Default styles, no timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: GraphSelectStyle::default(),
            timestamp_format: None,
        }
    }

    /// Shows last-opened times using the given chrono format.
    #[must_use]
    pub const fn timestamp_format(mut self, format: Option<&'a str>) -> Self {
        self.timestamp_format = format;
        self
    }

    fn item(&self, entry: &SelectEntry, active: bool) -> ListItem<'static> {
        let line = match entry {
            SelectEntry::Placeholder => {
                Line::from(Span::styled(PLACEHOLDER_LABEL, self.style.placeholder_style))
            }
            SelectEntry::CreateNew => {
                Line::from(Span::styled(CREATE_NEW_LABEL, self.style.create_new_style))
            }
            SelectEntry::Separator => {
                Line::from(Span::styled(SEPARATOR_LABEL, self.style.separator_style))
            }
            SelectEntry::Graph(graph) => {
                let style = if active {
                    self.style.active_graph_style
                } else {
                    self.style.graph_style
                };
                let mut spans = vec![Span::styled(graph.name.clone(), style)];
                if let Some(format) = self.timestamp_format {
                    spans.push(Span::styled(
                        format!("  {}", format_timestamp(&graph.last_opened, format)),
                        self.style.timestamp_style,
                    ));
                }
                Line::from(spans)
            }
        };
        ListItem::new(line)
    }
}

impl Default for GraphSelect<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for GraphSelect<'_> {
    type State = GraphSelectState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border_style)
            .title(Span::styled(
                LIST_TITLE,
                self.style.title_style,
            ));

        let items: Vec<ListItem> = state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| self.item(entry, i == state.active))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.style.highlight_style)
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ratatui::{Terminal, backend::TestBackend};
    use test_case::test_case;

    fn graph(name: &str) -> GraphRecord {
        GraphRecord::new(
            name,
            format!("/graphs/{name}"),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn state_with(names: &[&str]) -> GraphSelectState {
        let mut state = GraphSelectState::new();
        state.rebuild(names.iter().map(|n| graph(n)).collect());
        state
    }

    #[test]
    fn test_header_entries_come_first() {
        let state = state_with(&["B", "A"]);
        let labels: Vec<&str> = state.entries().iter().map(SelectEntry::label).collect();

        assert_eq!(
            labels,
            [PLACEHOLDER_LABEL, CREATE_NEW_LABEL, SEPARATOR_LABEL, "B", "A"]
        );
        assert!(state.entries()[SEPARATOR_INDEX].is_disabled());
        assert_eq!(
            state.entries()[3].value(),
            Some(Path::new("/graphs/B"))
        );
    }

    #[test]
    fn test_sentinel_reverts_to_placeholder() {
        let mut state = state_with(&["A"]);
        state.activate(3);

        let action = state.activate(CREATE_NEW_INDEX);

        assert_eq!(action, GraphSelectAction::OpenCreateModal);
        assert_eq!(state.active_index(), PLACEHOLDER_INDEX);
        assert_eq!(state.cursor(), PLACEHOLDER_INDEX);
    }

    #[test]
    fn test_separator_cannot_be_selected() {
        let mut state = state_with(&["A"]);
        state.activate(3);

        assert_eq!(state.activate(SEPARATOR_INDEX), GraphSelectAction::None);
        assert_eq!(state.active_index(), 3);
    }

    #[test]
    fn test_graph_selection() {
        let mut state = state_with(&["A", "B"]);

        let action = state.activate(4);

        assert_eq!(action, GraphSelectAction::GraphSelected(graph("B")));
        assert_eq!(state.active_graph().map(|g| g.name.as_str()), Some("B"));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut state = state_with(&[]);
        assert_eq!(state.activate(9), GraphSelectAction::None);
    }

    #[test]
    fn test_rebuild_keeps_active_graph() {
        let mut state = state_with(&["A", "B"]);
        state.activate(4);

        state.rebuild(vec![graph("B"), graph("C"), graph("A")]);

        assert_eq!(state.active_index(), 3);
        assert_eq!(state.active_graph().map(|g| g.name.as_str()), Some("B"));
    }

    #[test]
    fn test_rebuild_drops_vanished_graph() {
        let mut state = state_with(&["A"]);
        state.activate(3);

        state.rebuild(vec![graph("C")]);

        assert_eq!(state.active_index(), PLACEHOLDER_INDEX);
        assert!(state.active_graph().is_none());
    }

    #[test]
    fn test_select_path() {
        let mut state = state_with(&["A", "B"]);
        assert!(state.select_path(Path::new("/graphs/B")));
        assert_eq!(state.active_index(), 4);
        assert!(!state.select_path(Path::new("/graphs/Z")));
    }

    #[test_case(0, 1 ; "placeholder_to_create")]
    #[test_case(1, 3 ; "create_skips_separator")]
    #[test_case(4, 0 ; "wraps_to_top")]
    fn test_next(start: usize, expected: usize) {
        let mut state = state_with(&["A", "B"]);
        state.list_state.select(Some(start));
        state.next();
        assert_eq!(state.cursor(), expected);
    }

    #[test_case(3, 1 ; "skips_separator_upwards")]
    #[test_case(0, 4 ; "wraps_to_bottom")]
    fn test_previous(start: usize, expected: usize) {
        let mut state = state_with(&["A", "B"]);
        state.list_state.select(Some(start));
        state.previous();
        assert_eq!(state.cursor(), expected);
    }

    #[test]
    fn test_format_timestamp_invalid_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&at, "%Q"), at.to_rfc3339());
    }

    #[test]
    fn test_render_lists_graph_names() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = state_with(&["Research"]);

        terminal
            .draw(|frame| {
                frame.render_stateful_widget(GraphSelect::new(), frame.area(), &mut state);
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Graphs"));
        assert!(content.contains("Create new graph"));
        assert!(content.contains("Research"));
    }
}
