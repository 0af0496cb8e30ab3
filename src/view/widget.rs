//! Connectors dashboard widget
//!
//! Lays out a fixed number of grid cells: connector cards followed by one
//! "explore" cell, or only skeletons while the catalog is loading.

use super::card::{CardView, present};
use crate::connector::{ConnectorRecord, reconcile};
use crate::consts::cli_consts::{SCREEN_MD_COLS, SCREEN_SM_COLS};
use crate::routes::SessionRoutes;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    Skeleton,
    Card(CardView),
    Explore { link: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetLayout {
    pub cells: Vec<GridCell>,
}

/// Inputs for one widget render, all borrowed snapshots.
#[derive(Debug, Clone, Copy)]
pub struct WidgetInputs<'a> {
    pub pinned_ids: &'a HashSet<String>,
    pub remote: &'a [ConnectorRecord],
    pub custom: &'a [ConnectorRecord],
    pub is_loading: bool,
}

#[derive(Debug, Clone)]
pub struct DashboardWidget {
    size: usize,
    routes: SessionRoutes,
}

impl DashboardWidget {
    /// A widget with `size` cells. Size is at least one, the explore cell.
    pub fn new(size: usize, routes: SessionRoutes) -> Self {
        Self {
            size: size.max(1),
            routes,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn routes(&self) -> &SessionRoutes {
        &self.routes
    }

    /// Builds the grid. The explore cell takes one of the `size` slots.
    pub fn render(&self, inputs: WidgetInputs<'_>) -> WidgetLayout {
        if inputs.is_loading {
            return WidgetLayout {
                cells: vec![GridCell::Skeleton; self.size],
            };
        }

        let entries = reconcile(
            inputs.remote,
            inputs.pinned_ids,
            inputs.custom,
            false,
            self.size - 1,
        );
        let mut cells: Vec<GridCell> = entries
            .iter()
            .map(|entry| {
                let pinned = inputs.pinned_ids.contains(entry.id());
                GridCell::Card(present(entry, pinned, &self.routes))
            })
            .collect();
        cells.push(GridCell::Explore {
            link: self.routes.explore_link().to_string(),
        });
        WidgetLayout { cells }
    }
}

impl WidgetLayout {
    /// Marks the logos of the given connector ids as failed.
    pub fn with_failed_images(self, failed: &HashSet<String>) -> Self {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| match cell {
                GridCell::Card(view) if failed.contains(view.id()) => {
                    GridCell::Card(view.image_failed())
                }
                other => other,
            })
            .collect();
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Grid columns for a terminal `width`, mirroring the web breakpoints.
pub fn grid_columns(width: u16) -> usize {
    if width < SCREEN_SM_COLS {
        1
    } else if width < SCREEN_MD_COLS {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::GENERIC_CONNECTORS_ROUTE;

    fn routes() -> SessionRoutes {
        SessionRoutes::new("eth", "0xSafe", "https://app.example", "1")
    }

    fn record(id: &str) -> ConnectorRecord {
        ConnectorRecord::new(id, id)
            .unwrap()
            .with_image("https://img.example/logo.png")
            .with_connect_url(format!("https://{}.example", id))
    }

    fn card_ids(layout: &WidgetLayout) -> Vec<&str> {
        layout
            .cells
            .iter()
            .filter_map(|cell| match cell {
                GridCell::Card(view) => Some(view.id()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_loading_renders_only_skeletons() {
        let widget = DashboardWidget::new(6, routes());
        let remote = vec![record("a")];
        let layout = widget.render(WidgetInputs {
            pinned_ids: &HashSet::new(),
            remote: &remote,
            custom: &[],
            is_loading: true,
        });
        assert_eq!(layout.cells, vec![GridCell::Skeleton; 6]);
    }

    #[test]
    fn test_explore_cell_takes_last_slot() {
        let widget = DashboardWidget::new(3, routes());
        let remote = vec![record("a"), record("b"), record("c")];
        let pinned = HashSet::from(["c".to_string()]);
        let layout = widget.render(WidgetInputs {
            pinned_ids: &pinned,
            remote: &remote,
            custom: &[],
            is_loading: false,
        });

        assert_eq!(layout.len(), 3);
        assert_eq!(card_ids(&layout), vec!["c", "a"]);
        assert_eq!(
            layout.cells.last(),
            Some(&GridCell::Explore {
                link: GENERIC_CONNECTORS_ROUTE.to_string()
            })
        );
    }

    #[test]
    fn test_size_one_shows_explore_only() {
        let widget = DashboardWidget::new(0, routes());
        assert_eq!(widget.size(), 1);
        let remote = vec![record("a")];
        let layout = widget.render(WidgetInputs {
            pinned_ids: &HashSet::new(),
            remote: &remote,
            custom: &[],
            is_loading: false,
        });
        assert_eq!(layout.len(), 1);
        assert!(matches!(layout.cells[0], GridCell::Explore { .. }));
    }

    #[test]
    fn test_cards_know_their_pin_state() {
        let widget = DashboardWidget::new(6, routes());
        let remote = vec![record("a"), record("b")];
        let pinned = HashSet::from(["b".to_string()]);
        let custom = vec![record("c").with_custom(true)];
        let layout = widget.render(WidgetInputs {
            pinned_ids: &pinned,
            remote: &remote,
            custom: &custom,
            is_loading: false,
        });

        assert_eq!(card_ids(&layout), vec!["b", "a", "c"]);
        let pinned_flags: Vec<bool> = layout
            .cells
            .iter()
            .filter_map(|cell| match cell {
                GridCell::Card(view) => view.card().map(|card| card.pinned),
                _ => None,
            })
            .collect();
        assert_eq!(pinned_flags, vec![true, false, false]);
    }

    #[test]
    fn test_failed_images_switch_cards_to_fallback() {
        let widget = DashboardWidget::new(6, routes());
        let remote = vec![record("a"), record("b")];
        let failed = HashSet::from(["b".to_string()]);
        let layout = widget
            .render(WidgetInputs {
                pinned_ids: &HashSet::new(),
                remote: &remote,
                custom: &[],
                is_loading: false,
            })
            .with_failed_images(&failed);

        assert!(matches!(layout.cells[0], GridCell::Card(CardView::Loaded(_))));
        assert!(matches!(layout.cells[1], GridCell::Card(CardView::Fallback(_))));
    }

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(60), 1);
        assert_eq!(grid_columns(100), 2);
        assert_eq!(grid_columns(160), 3);
    }
}
