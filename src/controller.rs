//! Application context: one controller owns the repository, the form, the
//! search box and the display grid, and every UI handler goes through it.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::export::{export_rows, normalize_export_path};
use crate::form::{CarForm, FormError};
use crate::models::Car;
use crate::presenter::TableView;
use crate::repository::CarRepository;

pub struct Controller<R> {
    repo: R,
    form: CarForm,
    table: TableView,
    search: String,
}

impl<R: CarRepository> Controller<R> {
    /// Build the context and load every record into the table.
    pub fn new(repo: R) -> Result<Self> {
        let mut controller = Self {
            repo,
            form: CarForm::new(),
            table: TableView::new(),
            search: String::new(),
        };
        controller.show_all()?;
        Ok(controller)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn form(&self) -> &CarForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CarForm {
        &mut self.form
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableView {
        &mut self.table
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn push_search_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.search.push(ch);
        true
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Validate and store the form contents. On success the grid is reloaded
    /// from the full listing (any search filter is dropped) and the form is
    /// reset; on failure the form keeps what the user typed.
    pub fn add_car(&mut self) -> Result<Car, FormError> {
        let car = self.form.parse_inputs()?;
        let stored = self.repo.insert(&car)?;
        log::info!("added car #{}: {}", stored.id, stored);
        self.show_all()?;
        self.form.clear();
        Ok(stored)
    }

    /// Reload every record into the grid.
    pub fn show_all(&mut self) -> Result<usize> {
        let cars = self.repo.list_all()?;
        self.table.refresh(&cars);
        Ok(cars.len())
    }

    /// Filter the grid by the current search text. The keyword is used as
    /// typed; an empty box matches every record.
    pub fn search(&mut self) -> Result<usize> {
        let cars = self.repo.search(&self.search)?;
        log::info!("search {:?} matched {} cars", self.search, cars.len());
        self.table.refresh(&cars);
        Ok(cars.len())
    }

    /// Export the rows currently in the grid to the path typed by the user.
    /// `Ok(None)` means the prompt was left blank and nothing was written.
    pub fn export(&self, destination: &str) -> Result<Option<PathBuf>> {
        let Some(path) = normalize_export_path(destination) else {
            return Ok(None);
        };
        if path.is_dir() {
            return Err(anyhow!("{} is a directory", path.display()));
        }
        export_rows(self.table.rows(), &path)?;
        Ok(Some(path))
    }
}
