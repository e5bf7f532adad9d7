//! Display grid state. Rows are rebuilt wholesale from whatever the last query
//! returned; the export reads these rows, not the repository.

use crate::format::format_price_display;
use crate::models::Car;

/// Column headings, shared by the on-screen table and the export header.
pub const COLUMNS: [&str; 5] = ["ID", "Make", "Model", "Year", "Price"];

/// One rendered table row. `price` is already grouped text.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub price: String,
}

impl DisplayRow {
    pub fn from_car(car: &Car) -> Self {
        Self {
            id: car.id,
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year,
            price: format_price_display(car.price),
        }
    }

    /// Cell text in column order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.make.clone(),
            self.model.clone(),
            self.year.to_string(),
            self.price.clone(),
        ]
    }
}

#[derive(Debug, Default)]
pub struct TableView {
    rows: Vec<DisplayRow>,
    selected: usize,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every displayed row and repopulate from `cars`.
    pub fn refresh(&mut self, cars: &[Car]) {
        self.rows = cars.iter().map(DisplayRow::from_car).collect();
        self.ensure_in_bounds();
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current_row(&self) -> Option<&DisplayRow> {
        self.rows.get(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.rows.len() - 1;
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, last as isize) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    fn ensure_in_bounds(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}
