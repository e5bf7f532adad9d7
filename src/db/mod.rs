//! Persistence module split across logical submodules.

mod cars;
mod connection;

pub use cars::{fetch_cars, insert_car, search_cars};
pub use connection::{ensure_schema, open_database, open_in_memory};
