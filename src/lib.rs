//! Core library surface for the Car Information Manager TUI application.
//!
//! Records flow from the form through the `Controller` into a
//! `CarRepository`, and back out through the table presenter. The `bin`
//! target wires the SQLite repository, settings and logger together.
pub mod catalog;
pub mod config;
pub mod controller;
pub mod db;
pub mod export;
pub mod form;
pub mod format;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod repository;
pub mod theme;
pub mod ui;

/// Persistence entry points used during startup and by tests.
pub use db::{open_database, open_in_memory};

pub use controller::Controller;
pub use models::{Car, NewCar};
pub use repository::{CarRepository, MemoryCarRepository, SqliteCarRepository};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
