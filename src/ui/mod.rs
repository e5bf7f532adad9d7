//! Ratatui front-end: the shell that owns the terminal, routes keys to the
//! controller and draws the form, search box, table and popups.

mod app;
mod forms;
mod helpers;
mod logo;
mod terminal;

pub use app::App;
pub use logo::Logo;
pub use terminal::run_app;
