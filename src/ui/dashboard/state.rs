//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::connector::{ConnectorRecord, reconcile};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dispatch::CommandDispatcher;
use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, FetchGeneration};
use crate::notifications::SharedNotificationQueue;
use crate::ui::app::UIConfig;
use crate::view::{CardView, DashboardWidget, GridCell, WidgetInputs, WidgetLayout, present};

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

/// Dashboard state: catalog snapshot, selection and activity log.
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Where the catalog is fetched from, for the header.
    pub catalog_source: String,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    widget: DashboardWidget,
    dispatcher: CommandDispatcher,
    notifications: SharedNotificationQueue,
    /// Connectors from the last accepted catalog fetch.
    remote: Vec<ConnectorRecord>,
    is_loading: bool,
    /// Latest fetch generation the dashboard asked for.
    requested_generation: FetchGeneration,
    /// Connector ids whose logo failed during this mount.
    failed_images: HashSet<String>,
    /// Index of the selected grid cell.
    selected: usize,
    /// Grid columns of the last frame, used for vertical movement.
    columns: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        environment: Environment,
        start_time: Instant,
        widget: DashboardWidget,
        dispatcher: CommandDispatcher,
        notifications: SharedNotificationQueue,
        catalog_source: String,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            environment,
            start_time,
            catalog_source,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            widget,
            dispatcher,
            notifications,
            remote: Vec::new(),
            is_loading: true,
            requested_generation: FetchGeneration::default(),
            failed_images: HashSet::new(),
            selected: 0,
            columns: 1,
        }
    }

    /// Current grid, reconciled from the latest catalog and store snapshots.
    pub fn layout(&self) -> WidgetLayout {
        let store = self.dispatcher.store();
        let pinned_ids = store.pinned_ids();
        self.widget
            .render(WidgetInputs {
                pinned_ids: &pinned_ids,
                remote: &self.remote,
                custom: store.custom_connectors(),
                is_loading: self.is_loading,
            })
            .with_failed_images(&self.failed_images)
    }

    /// The card for connector `id`, whether or not it fits in the grid.
    pub fn find_card(&self, id: &str) -> Option<CardView> {
        let store = self.dispatcher.store();
        let pinned_ids = store.pinned_ids();
        let entries = reconcile(
            &self.remote,
            &pinned_ids,
            store.custom_connectors(),
            false,
            usize::MAX,
        );
        let entry = entries.iter().find(|entry| entry.id() == id)?;
        let view = present(entry, pinned_ids.contains(id), self.widget.routes());
        Some(if self.failed_images.contains(id) {
            view.image_failed()
        } else {
            view
        })
    }

    /// The cell under the selection cursor.
    pub fn selected_cell(&self) -> Option<GridCell> {
        self.layout().cells.into_iter().nth(self.selected)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, selected: usize) {
        self.selected = selected;
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn requested_generation(&self) -> FetchGeneration {
        self.requested_generation
    }

    pub fn widget(&self) -> &DashboardWidget {
        &self.widget
    }

    pub fn clipboard_contents(&self) -> Option<String> {
        self.dispatcher.clipboard_contents()
    }

    pub fn failed_images(&self) -> &HashSet<String> {
        &self.failed_images
    }

    // Accessors for updaters
    pub(super) fn dispatcher_mut(&mut self) -> &mut CommandDispatcher {
        &mut self.dispatcher
    }

    pub(super) fn notifications(&self) -> &SharedNotificationQueue {
        &self.notifications
    }

    pub(super) fn set_remote(&mut self, remote: Vec<ConnectorRecord>) {
        self.remote = remote;
    }

    pub(super) fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub(super) fn set_requested_generation(&mut self, generation: FetchGeneration) {
        self.requested_generation = generation;
    }

    pub(super) fn mark_image_failed(&mut self, id: &str) {
        self.failed_images.insert(id.to_string());
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}

impl std::fmt::Debug for DashboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardState")
            .field("environment", &self.environment)
            .field("catalog_source", &self.catalog_source)
            .field("remote", &self.remote.len())
            .field("is_loading", &self.is_loading)
            .field("requested_generation", &self.requested_generation)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
