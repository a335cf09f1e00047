// Terminal UI implementation using ratatui
// The pretty face of repodash

pub mod app;
pub mod runner;
pub mod ui;
pub mod view;

pub use app::{App, InputMode};
pub use runner::run_tui;
pub use view::{view_model, DashboardView, RepoCard};
