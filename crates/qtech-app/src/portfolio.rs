//! Portfolio view state: the selected project and the list cursor

use qtech_core::{find_project, ProjectRecord, CATALOG};

/// Selection state for the portfolio view.
///
/// Created fresh on every mount, so the selection resets to the first
/// catalog entry after navigating away and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioState {
    catalog: &'static [ProjectRecord],
    selected_id: Option<&'static str>,
    cursor: usize,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioState {
    pub fn new() -> Self {
        Self::with_catalog(CATALOG)
    }

    /// State over an arbitrary catalog. An empty catalog has no selection.
    pub fn with_catalog(catalog: &'static [ProjectRecord]) -> Self {
        Self {
            catalog,
            selected_id: catalog.first().map(|project| project.id),
            cursor: 0,
        }
    }

    pub fn catalog(&self) -> &'static [ProjectRecord] {
        self.catalog
    }

    pub fn selected_id(&self) -> Option<&'static str> {
        self.selected_id
    }

    /// The record shown in the detail panel
    pub fn selected(&self) -> Option<&'static ProjectRecord> {
        self.selected_id.and_then(|id| find_project(self.catalog, id))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Select a project by id. Returns `true` when the selection changed.
    ///
    /// Re-selecting the current project and unknown ids are no-ops.
    pub fn select_project(&mut self, id: &str) -> bool {
        let Some(index) = self.catalog.iter().position(|p| p.id == id) else {
            return false;
        };

        self.cursor = index;
        if self.selected_id == Some(self.catalog[index].id) {
            return false;
        }

        self.selected_id = Some(self.catalog[index].id);
        true
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
        }
    }

    pub fn project_at_cursor(&self) -> Option<&'static ProjectRecord> {
        self.catalog.get(self.cursor)
    }

    pub fn is_selected(&self, project: &ProjectRecord) -> bool {
        self.selected_id == Some(project.id)
    }
}
