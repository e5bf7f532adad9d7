//! The seam between the controller and persistence. The shell only ever talks
//! to a `CarRepository`, so tests can swap SQLite for the in-memory fake.

use anyhow::Result;
use rusqlite::Connection;

use crate::db::{fetch_cars, insert_car, search_cars};
use crate::models::{Car, NewCar};

/// Storage operations the tool needs. There is no update or delete: records
/// are permanent once inserted.
pub trait CarRepository {
    /// Persist one listing and return it with its assigned id.
    fn insert(&mut self, car: &NewCar) -> Result<Car>;

    /// Every listing in storage order.
    fn list_all(&self) -> Result<Vec<Car>>;

    /// Listings whose make, model or year contains `keyword`, ignoring ASCII
    /// case. An empty keyword returns everything.
    fn search(&self, keyword: &str) -> Result<Vec<Car>>;
}

/// Repository backed by the process-wide SQLite connection.
pub struct SqliteCarRepository {
    conn: Connection,
}

impl SqliteCarRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl CarRepository for SqliteCarRepository {
    fn insert(&mut self, car: &NewCar) -> Result<Car> {
        insert_car(&self.conn, car)
    }

    fn list_all(&self) -> Result<Vec<Car>> {
        fetch_cars(&self.conn)
    }

    fn search(&self, keyword: &str) -> Result<Vec<Car>> {
        search_cars(&self.conn, keyword)
    }
}

/// Vec-backed repository with the same matching rules as the SQLite one.
#[derive(Debug, Default)]
pub struct MemoryCarRepository {
    cars: Vec<Car>,
    next_id: i64,
}

impl MemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarRepository for MemoryCarRepository {
    fn insert(&mut self, car: &NewCar) -> Result<Car> {
        self.next_id += 1;
        let stored = car.with_id(self.next_id);
        self.cars.push(stored.clone());
        Ok(stored)
    }

    fn list_all(&self) -> Result<Vec<Car>> {
        Ok(self.cars.clone())
    }

    fn search(&self, keyword: &str) -> Result<Vec<Car>> {
        let needle = keyword.to_ascii_lowercase();
        Ok(self
            .cars
            .iter()
            .filter(|car| {
                car.make.to_ascii_lowercase().contains(&needle)
                    || car.model.to_ascii_lowercase().contains(&needle)
                    || car.year.to_string().contains(&needle)
            })
            .cloned()
            .collect())
    }
}
