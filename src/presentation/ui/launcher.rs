//! Launcher controller: owns the graph list, the creation modal and alerts.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info, warn};

use crate::application::dto::CreateGraphRequest;
use crate::application::use_cases::{CreateGraphUseCase, ListGraphsUseCase, PickDirectoryUseCase};
use crate::domain::errors::GraphError;
use crate::domain::ports::HostBridgePort;
use crate::domain::{Alert, GraphRecord};
use crate::infrastructure::config::StateConfig;
use crate::presentation::events::EventHandler;
use crate::presentation::ui::{CreateGraphModal, CreateGraphModalAction};
use crate::presentation::widgets::{GraphSelectAction, GraphSelectState};

/// Work requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherCommand {
    /// Nothing to do.
    None,
    /// Leave the launcher.
    Quit,
    /// Eager directory pick from the modal.
    PickDirectory,
    /// Submit the creation form.
    Submit,
    /// Reload the graph list.
    Refresh,
    /// Activate the entry at this index.
    Activate(usize),
}

impl LauncherCommand {
    /// Returns whether the command awaits the host.
    #[must_use]
    pub const fn is_async(self) -> bool {
        matches!(
            self,
            Self::PickDirectory | Self::Submit | Self::Refresh | Self::Activate(_)
        )
    }
}

/// Graph list, creation modal and alert queue behind one host bridge.
pub struct LauncherController {
    create_graph: CreateGraphUseCase,
    list_graphs: ListGraphsUseCase,
    pick_directory: PickDirectoryUseCase,
    select: GraphSelectState,
    modal: CreateGraphModal,
    alerts: VecDeque<Alert>,
    state: StateConfig,
    mounted: bool,
}

impl LauncherController {
    /// Builds an unmounted launcher. `picker_title` titles the directory dialog.
    #[must_use]
    pub fn new(bridge: Arc<dyn HostBridgePort>, picker_title: impl Into<String>) -> Self {
        let pick_directory = PickDirectoryUseCase::new(bridge.clone(), picker_title);
        Self {
            create_graph: CreateGraphUseCase::new(bridge.clone(), pick_directory.clone()),
            list_graphs: ListGraphsUseCase::new(bridge),
            pick_directory,
            select: GraphSelectState::new(),
            modal: CreateGraphModal::new(),
            alerts: VecDeque::new(),
            state: StateConfig::default(),
            mounted: false,
        }
    }

    /// Restores the state of a previous session on the next mount.
    #[must_use]
    pub fn with_state(mut self, state: StateConfig) -> Self {
        self.state = state;
        self
    }

    /// Loads the graph list and restores the previous session.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if let Some(dir) = self.state.last_base_dir.clone() {
            self.modal.set_directory(dir);
        }

        self.refresh().await;

        if let Some(path) = self.state.last_graph_path.clone()
            && !self.select.select_path(&path)
        {
            debug!(path = %path.display(), "Last graph is no longer registered");
        }
        info!(graphs = self.select.graph_count(), "Launcher mounted");
    }

    /// Closes the modal and returns the state to persist.
    pub fn unmount(&mut self) -> StateConfig {
        self.modal.close();
        self.mounted = false;
        self.state_snapshot()
    }

    /// Whether `mount` ran without a matching `unmount`.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Session state with the active graph filled in.
    #[must_use]
    pub fn state_snapshot(&self) -> StateConfig {
        let mut state = self.state.clone();
        if let Some(graph) = self.select.active_graph() {
            state.last_graph_path = Some(graph.path.clone());
        }
        state
    }

    /// Opens the creation modal.
    pub fn open_modal(&mut self) {
        debug!("Opening create graph modal");
        self.modal.open();
    }

    /// Closes the modal without clearing the form.
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Whether the creation modal is open.
    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal.is_visible()
    }

    /// The creation modal.
    #[must_use]
    pub const fn modal(&self) -> &CreateGraphModal {
        &self.modal
    }

    /// Mutable access to the creation modal.
    pub fn modal_mut(&mut self) -> &mut CreateGraphModal {
        &mut self.modal
    }

    /// The graph list state.
    #[must_use]
    pub const fn select_state(&self) -> &GraphSelectState {
        &self.select
    }

    /// Mutable graph list state, needed for stateful rendering.
    pub fn select_state_mut(&mut self) -> &mut GraphSelectState {
        &mut self.select
    }

    /// The alert at the front of the queue.
    #[must_use]
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    /// Drops the current alert, showing the next one if any.
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    fn push_alert(&mut self, alert: Alert) {
        debug!(level = ?alert.level, message = %alert.message, "Alert raised");
        self.alerts.push_back(alert);
    }

    /// Opens the directory picker ahead of submission.
    pub async fn pick_directory(&mut self) {
        match self.pick_directory.execute().await {
            Ok(Some(dir)) => {
                self.state.last_base_dir = Some(dir.clone());
                self.modal.set_directory(dir);
            }
            Ok(None) => self.modal.set_not_selected(),
            Err(e) => {
                self.modal.set_pick_failed();
                self.push_alert(Alert::error(
                    "Directory Picker",
                    format!("Failed to select directory: {e}"),
                ));
            }
        }
    }

    /// Creates a graph from the modal form.
    pub async fn submit(&mut self) {
        let request = CreateGraphRequest::new(self.modal.graph_name())
            .with_base_path(self.modal.directory().map(Path::to_path_buf));

        self.modal.set_busy(true);
        let result = self.create_graph.execute(request).await;
        self.modal.set_busy(false);

        match result {
            Ok(response) => {
                self.state.last_base_dir = Some(response.base_path);
                self.push_alert(Alert::info("Graph Created", response.message));
                self.modal.reset();
                self.modal.close();
                self.refresh().await;
            }
            Err(failure) => {
                if let Some(dir) = failure.picked_directory {
                    self.state.last_base_dir = Some(dir.clone());
                    self.modal.set_directory(dir);
                }

                let e = failure.error;
                match &e {
                    GraphError::NoDirectorySelected => self.modal.set_not_selected(),
                    GraphError::PickerFailed { .. } => self.modal.set_pick_failed(),
                    _ => {}
                }

                let alert = if e.is_validation() {
                    Alert::error("Create Graph", capitalize(&e.to_string()))
                } else {
                    Alert::error("Create Graph", format!("Failed to create graph: {e}"))
                };
                self.push_alert(alert);
            }
        }
    }

    /// Reloads the graph list. On failure the list keeps its entries.
    pub async fn refresh(&mut self) {
        match self.list_graphs.execute().await {
            Ok(graphs) => self.select.rebuild(graphs),
            Err(e) => {
                warn!(error = %e, "Graph list left unchanged");
                self.push_alert(Alert::error(
                    "Graph List",
                    format!("Failed to load graphs: {e}"),
                ));
            }
        }
    }

    /// Commits the selection entry at `index`.
    pub async fn activate(&mut self, index: usize) {
        match self.select.activate(index) {
            GraphSelectAction::None => {}
            GraphSelectAction::OpenCreateModal => self.open_modal(),
            GraphSelectAction::GraphSelected(graph) => self.open_graph(&graph).await,
        }
    }

    async fn open_graph(&mut self, graph: &GraphRecord) {
        info!(name = %graph.name, path = %graph.path.display(), "Graph selected");
        self.state.last_graph_path = Some(graph.path.clone());

        match self.list_graphs.mark_opened(&graph.path).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.push_alert(Alert::error(
                "Open Graph",
                format!("Failed to open graph: {e}"),
            )),
        }
    }

    /// Handles key event, returns the command to run.
    pub fn handle_key(&mut self, key: KeyEvent) -> LauncherCommand {
        if self.current_alert().is_some() {
            if EventHandler::is_submit_event(&key) || EventHandler::is_cancel_event(&key) {
                self.dismiss_alert();
            }
            return LauncherCommand::None;
        }

        if self.modal.is_visible() {
            return match self.modal.handle_key(key) {
                CreateGraphModalAction::None => LauncherCommand::None,
                CreateGraphModalAction::Close => {
                    self.close_modal();
                    LauncherCommand::None
                }
                CreateGraphModalAction::PickDirectory => LauncherCommand::PickDirectory,
                CreateGraphModalAction::Submit => {
                    self.modal.set_busy(true);
                    LauncherCommand::Submit
                }
            };
        }

        if EventHandler::is_quit_event(&key) {
            return LauncherCommand::Quit;
        }
        if EventHandler::is_refresh_event(&key) {
            return LauncherCommand::Refresh;
        }
        if EventHandler::is_submit_event(&key) {
            return LauncherCommand::Activate(self.select.cursor());
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select.next(),
            KeyCode::Char('n') => self.open_modal(),
            _ => {}
        }
        LauncherCommand::None
    }

    /// Runs a command returned by [`Self::handle_key`].
    pub async fn execute(&mut self, command: LauncherCommand) {
        match command {
            LauncherCommand::None | LauncherCommand::Quit => {}
            LauncherCommand::PickDirectory => self.pick_directory().await,
            LauncherCommand::Submit => self.submit().await,
            LauncherCommand::Refresh => self.refresh().await,
            LauncherCommand::Activate(index) => self.activate(index).await,
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockHostBridgePort;
    use crate::presentation::widgets::{CREATE_NEW_INDEX, PLACEHOLDER_INDEX, SelectEntry};
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;
    use std::path::PathBuf;
    use test_case::test_case;

    fn graph(name: &str, month: u32) -> GraphRecord {
        GraphRecord::new(
            name,
            format!("/graphs/{name}"),
            Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap(),
        )
    }

    fn controller(bridge: MockHostBridgePort) -> LauncherController {
        LauncherController::new(Arc::new(bridge), "Select a directory for the new graph")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn graph_labels(launcher: &LauncherController) -> Vec<String> {
        launcher
            .select_state()
            .entries()
            .iter()
            .filter(|e| matches!(e, SelectEntry::Graph(_)))
            .map(|e| e.label().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_mount_lists_newest_first() {
        let mut bridge = MockHostBridgePort::new();
        bridge
            .expect_list_graphs()
            .times(1)
            .returning(|| Ok(vec![graph("A", 1), graph("B", 3)]));

        let mut launcher = controller(bridge);
        launcher.mount().await;
        launcher.mount().await;

        assert!(launcher.is_mounted());
        assert_eq!(graph_labels(&launcher), ["B", "A"]);
        assert!(launcher.select_state().entries()[..3]
            .iter()
            .map(SelectEntry::label)
            .eq(["Select a graph", "+ Create new graph", "────────────────"]));
    }

    #[tokio::test]
    async fn test_mount_restores_session() {
        let mut bridge = MockHostBridgePort::new();
        bridge
            .expect_list_graphs()
            .returning(|| Ok(vec![graph("A", 1), graph("B", 3)]));

        let mut launcher = controller(bridge).with_state(StateConfig {
            last_graph_path: Some(PathBuf::from("/graphs/A")),
            last_base_dir: Some(PathBuf::from("/graphs")),
        });
        launcher.mount().await;

        assert_eq!(
            launcher.select_state().active_graph().map(|g| g.name.as_str()),
            Some("A")
        );
        assert_eq!(launcher.modal().directory(), Some(Path::new("/graphs")));
    }

    #[tokio::test]
    async fn test_successful_creation_refreshes_once() {
        let mut bridge = MockHostBridgePort::new();
        bridge.expect_list_graphs().times(2).returning(|| Ok(vec![]));
        bridge.expect_pick_directory().never();
        bridge
            .expect_create_graph()
            .withf(|base, name| base == Path::new("/graphs") && name.as_str() == "Research")
            .times(1)
            .returning(|_, _| Ok("Graph created successfully at /graphs/Research".to_string()));

        let mut launcher = controller(bridge);
        launcher.mount().await;
        launcher.open_modal();
        launcher.modal_mut().set_graph_name("  Research ");
        launcher.modal_mut().set_directory(PathBuf::from("/graphs"));

        launcher.submit().await;

        assert!(!launcher.is_modal_open());
        assert!(launcher.modal().graph_name().is_empty());
        let alert = launcher.current_alert().unwrap();
        assert!(!alert.is_error());
        assert!(alert.message.contains("Graph created successfully"));
        assert_eq!(
            launcher.state_snapshot().last_base_dir,
            Some(PathBuf::from("/graphs"))
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "spaces")]
    #[test_case("\t\n" ; "whitespace")]
    #[tokio::test]
    async fn test_blank_name_never_creates(name: &str) {
        let mut bridge = MockHostBridgePort::new();
        bridge.expect_create_graph().never();
        bridge.expect_pick_directory().never();
        bridge.expect_list_graphs().never();

        let mut launcher = controller(bridge);
        launcher.open_modal();
        launcher.modal_mut().set_graph_name(name);
        launcher.modal_mut().set_directory(PathBuf::from("/graphs"));

        launcher.submit().await;

        assert!(launcher.is_modal_open());
        let alert = launcher.current_alert().unwrap();
        assert!(alert.is_error());
        assert_eq!(alert.message, "Please enter a graph name");
    }

    #[tokio::test]
    async fn test_rejection_keeps_modal_open() {
        let mut bridge = MockHostBridgePort::new();
        bridge.expect_list_graphs().never();
        bridge
            .expect_create_graph()
            .times(1)
            .returning(|_, _| Err(GraphError::rejected("disk full")));

        let mut launcher = controller(bridge);
        launcher.open_modal();
        launcher.modal_mut().set_graph_name("Research");
        launcher.modal_mut().set_directory(PathBuf::from("/graphs"));

        launcher.submit().await;

        assert!(launcher.is_modal_open());
        assert!(!launcher.modal().is_busy());
        assert_eq!(launcher.modal().graph_name(), "Research");
        assert_eq!(
            launcher.current_alert().map(|a| a.message.as_str()),
            Some("Failed to create graph: disk full")
        );
    }

    #[tokio::test]
    async fn test_rejected_lazy_pick_is_kept_for_retry() {
        let mut bridge = MockHostBridgePort::new();
        bridge
            .expect_pick_directory()
            .times(1)
            .returning(|_| Ok(Some(PathBuf::from("/srv/graphs"))));
        let mut attempts = 0;
        bridge
            .expect_create_graph()
            .withf(|base, _| base == Path::new("/srv/graphs"))
            .times(2)
            .returning(move |_, _| {
                attempts += 1;
                if attempts == 1 {
                    Err(GraphError::rejected("disk full"))
                } else {
                    Ok("Graph created successfully at /srv/graphs/Research".to_string())
                }
            });
        bridge.expect_list_graphs().times(1).returning(|| Ok(vec![]));

        let mut launcher = controller(bridge);
        launcher.open_modal();
        launcher.modal_mut().set_graph_name("Research");

        launcher.submit().await;
        assert!(launcher.is_modal_open());
        assert_eq!(launcher.modal().directory(), Some(Path::new("/srv/graphs")));
        assert_eq!(
            launcher.modal().status().text().as_deref(),
            Some("Selected Directory: /srv/graphs")
        );
        launcher.dismiss_alert();

        launcher.submit().await;
        assert!(!launcher.is_modal_open());
    }

    #[tokio::test]
    async fn test_shared_paths_keep_active_graph_after_refresh() {
        let mut bridge = MockHostBridgePort::new();
        bridge.expect_list_graphs().times(2).returning(|| {
            Ok(vec![
                GraphRecord::new("A", "/home/u/graphs", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
                GraphRecord::new("B", "/home/u/graphs", Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            ])
        });
        bridge
            .expect_mark_opened()
            .withf(|path| path == Path::new("/home/u/graphs"))
            .times(1)
            .returning(|_| Ok(()));

        let mut launcher = controller(bridge);
        launcher.mount().await;
        assert_eq!(graph_labels(&launcher), ["B"]);

        launcher.activate(3).await;

        assert_eq!(
            launcher.select_state().active_graph().map(|g| g.name.as_str()),
            Some("B")
        );
    }

    #[tokio::test]
    async fn test_cancelled_lazy_pick_makes_no_creation_call() {
        let mut bridge = MockHostBridgePort::new();
        bridge.expect_pick_directory().times(1).returning(|_| Ok(None));
        bridge.expect_create_graph().never();

        let mut launcher = controller(bridge);
        launcher.open_modal();
        launcher.modal_mut().set_graph_name("Research");

        launcher.submit().await;

        assert!(launcher.is_modal_open());
        assert_eq!(
            launcher.modal().status().text().as_deref(),
            Some("No directory selected")
        );
        assert_eq!(
            launcher.current_alert().map(|a| a.message.as_str()),
            Some("Please select a directory for the new graph")
        );
    }

    #[tokio::test]
    async fn test_eager_pick_caches_directory() {
        let mut bridge = MockHostBridgePort::new();
        bridge
            .expect_pick_directory()
            .withf(|options| options.directory && !options.multiple)
            .times(1)
            .returning(|_| Ok(Some(PathBuf::from("/home/me/graphs"))));

        let mut launcher = controller(bridge);
        launcher.open_modal();
        launcher.pick_directory().await;

        assert_eq!(
            launcher.modal().status().text().as_deref(),
            Some("Selected Directory: /home/me/graphs")
        );
        assert_eq!(
            launcher.modal().directory(),
            Some(Path::new("/home/me/graphs"))
        );
        assert!(launcher.current_alert().is_none());
    }

    #[tokio::test]
    async fn test_picker_failure_is_alerted() {
        let mut bridge = MockHostBridgePort::new();
        bridge
            .expect_pick_directory()
            .returning(|_| Err(GraphError::picker_failed("no portal")));

        let mut launcher = controller(bridge);
        launcher.open_modal();
        launcher.pick_directory().await;

        assert_eq!(
            launcher.modal().status().text().as_deref(),
            Some("Failed to select directory")
        );
        assert!(launcher.current_alert().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_entries() {
        let mut bridge = MockHostBridgePort::new();
        let mut calls = 0;
        bridge.expect_list_graphs().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![graph("A", 1)])
            } else {
                Err(GraphError::list_unavailable("registry unreadable"))
            }
        });

        let mut launcher = controller(bridge);
        launcher.mount().await;
        launcher.refresh().await;

        assert_eq!(graph_labels(&launcher), ["A"]);
        assert!(
            launcher
                .current_alert()
                .unwrap()
                .message
                .contains("registry unreadable")
        );
    }

    #[tokio::test]
    async fn test_sentinel_opens_modal() {
        let mut bridge = MockHostBridgePort::new();
        bridge
            .expect_list_graphs()
            .returning(|| Ok(vec![graph("A", 1)]));

        let mut launcher = controller(bridge);
        launcher.mount().await;
        launcher.activate(CREATE_NEW_INDEX).await;

        assert!(launcher.is_modal_open());
        assert_eq!(launcher.select_state().active_index(), PLACEHOLDER_INDEX);
    }

    #[tokio::test]
    async fn test_activating_graph_marks_it_opened() {
        let mut bridge = MockHostBridgePort::new();
        bridge
            .expect_list_graphs()
            .times(2)
            .returning(|| Ok(vec![graph("A", 1), graph("B", 3)]));
        bridge
            .expect_mark_opened()
            .withf(|path| path == Path::new("/graphs/A"))
            .times(1)
            .returning(|_| Ok(()));

        let mut launcher = controller(bridge);
        launcher.mount().await;
        launcher.activate(4).await;

        assert_eq!(
            launcher.unmount().last_graph_path,
            Some(PathBuf::from("/graphs/A"))
        );
        assert!(!launcher.is_mounted());
    }

    #[tokio::test]
    async fn test_alert_blocks_keys_until_dismissed() {
        let mut bridge = MockHostBridgePort::new();
        bridge.expect_create_graph().never();

        let mut launcher = controller(bridge);
        launcher.open_modal();
        launcher.submit().await;
        assert!(launcher.current_alert().is_some());

        assert_eq!(
            launcher.handle_key(key(KeyCode::Char('x'))),
            LauncherCommand::None
        );
        assert!(launcher.modal().graph_name().is_empty());

        launcher.handle_key(key(KeyCode::Enter));
        assert!(launcher.current_alert().is_none());
    }

    #[test]
    fn test_key_routing() {
        let mut launcher = controller(MockHostBridgePort::new());

        assert_eq!(
            launcher.handle_key(key(KeyCode::Char('q'))),
            LauncherCommand::Quit
        );
        assert_eq!(
            launcher.handle_key(key(KeyCode::Enter)),
            LauncherCommand::Activate(PLACEHOLDER_INDEX)
        );

        launcher.handle_key(key(KeyCode::Char('n')));
        assert!(launcher.is_modal_open());
        assert_eq!(
            launcher.handle_key(key(KeyCode::Char('q'))),
            LauncherCommand::None
        );
        assert_eq!(launcher.modal().graph_name(), "q");

        let submit = launcher.handle_key(key(KeyCode::Enter));
        assert_eq!(submit, LauncherCommand::Submit);
        assert!(submit.is_async());
        assert!(launcher.modal().is_busy());
    }

    #[test]
    fn test_escape_closes_modal() {
        let mut launcher = controller(MockHostBridgePort::new());
        launcher.open_modal();

        launcher.handle_key(key(KeyCode::Esc));

        assert!(!launcher.is_modal_open());
    }
}
