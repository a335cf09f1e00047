// TUI application state and event handling
use ratatui::widgets::ListState;
use repodash_core::{Dashboard, Repo};

use crate::view::{view_model, DashboardView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating repos
    Searching, // Typing in search box
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub account: String,
    pub selected_index: usize,
    pub list_state: ListState,
    dashboard: Dashboard,
}

impl App {
    pub fn new(dashboard: Dashboard, account: impl Into<String>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            account: account.into(),
            selected_index: 0,
            list_state,
            dashboard,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Hand the dashboard back, e.g. to tear it down
    pub fn into_dashboard(self) -> Dashboard {
        self.dashboard
    }

    /// Called once per frame - picks up the fetch result when it lands
    pub fn tick(&mut self) {
        if self.dashboard.poll() {
            self.reset_selection();
        }
    }

    pub fn view(&self) -> DashboardView {
        view_model(&self.dashboard, &self.account)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.dashboard.search_term().to_string();
        term.push(c);
        self.update_search(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.dashboard.search_term().to_string();
        if term.pop().is_some() {
            self.update_search(term);
        }
    }

    pub fn clear_search(&mut self) {
        if !self.dashboard.search_term().is_empty() {
            self.update_search(String::new());
        }
    }

    fn update_search(&mut self, term: String) {
        self.dashboard.set_search_term(term);
        // The list under the cursor just changed shape
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn next_repo(&mut self) {
        let count = self.dashboard.repo_count();
        if count > 0 {
            self.selected_index = (self.selected_index + 1).min(count - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_repo(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_repo(&self) -> Option<&Repo> {
        self.dashboard.filtered().get(self.selected_index).copied()
    }
}
