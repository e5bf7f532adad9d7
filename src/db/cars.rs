use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::{Car, NewCar};

const SELECT_CARS: &str = "SELECT id, make, model, year, price FROM cars";

/// The text columns are nullable and only the form keeps them filled, so a
/// NULL written by another program reads back as an empty string.
fn car_from_row(row: &Row<'_>) -> rusqlite::Result<Car> {
    let make: Option<String> = row.get(1)?;
    let model: Option<String> = row.get(2)?;
    Ok(Car {
        id: row.get(0)?,
        make: make.unwrap_or_default(),
        model: model.unwrap_or_default(),
        year: row.get(3)?,
        price: row.get(4)?,
    })
}

/// Insert one listing. The statement runs outside any explicit transaction,
/// so SQLite commits it on its own before we return.
pub fn insert_car(conn: &Connection, car: &NewCar) -> Result<Car> {
    conn.execute(
        "INSERT INTO cars (make, model, year, price) VALUES (?1, ?2, ?3, ?4)",
        params![car.make, car.model, car.year, car.price],
    )
    .context("failed to insert car")?;

    Ok(car.with_id(conn.last_insert_rowid()))
}

/// Every listing in the table's natural scan order (insertion order in
/// practice). No ORDER BY on purpose: the table shows rows as stored.
pub fn fetch_cars(conn: &Connection) -> Result<Vec<Car>> {
    let mut stmt = conn
        .prepare(SELECT_CARS)
        .context("failed to prepare car query")?;

    let cars = stmt
        .query_map([], car_from_row)
        .context("failed to load cars")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect cars")?;

    Ok(cars)
}

/// Listings whose make, model or year contains `keyword`. `LIKE` keeps the
/// ASCII case-insensitive matching SQLite applies by default, and the keyword
/// is escaped so `%` and `_` are matched literally.
pub fn search_cars(conn: &Connection, keyword: &str) -> Result<Vec<Car>> {
    let mut stmt = conn
        .prepare(&format!(
            "{SELECT_CARS}
             WHERE make LIKE ?1 ESCAPE '\\'
                OR model LIKE ?1 ESCAPE '\\'
                OR year LIKE ?1 ESCAPE '\\'"
        ))
        .context("failed to prepare car search")?;

    let pattern = format!("%{}%", escape_like(keyword));
    let cars = stmt
        .query_map([pattern], car_from_row)
        .context("failed to search cars")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect search results")?;

    Ok(cars)
}

fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
