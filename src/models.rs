//! Domain models that mirror the `cars` table. These stay plain data holders;
//! formatting lives in the presenter and coercion lives in the form.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// A stored car listing. Records are never edited after insertion, so the
/// struct is only ever built from a fresh insert or a query row.
pub struct Car {
    /// Primary key assigned by storage.
    pub id: i64,
    pub make: String,
    pub model: String,
    /// Model year. The form only offers 2000-2025 but storage accepts any
    /// integer.
    pub year: i64,
    /// Listing price as stored (REAL). Display code truncates it.
    pub price: f64,
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.make, self.model, self.year)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The four user-supplied fields of a listing before storage assigns an id.
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i64,
    pub price: f64,
}

impl NewCar {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i64, price: f64) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            price,
        }
    }

    /// Attach the storage-assigned id.
    pub fn with_id(&self, id: i64) -> Car {
        Car {
            id,
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            price: self.price,
        }
    }
}
