//! State behind the add-car form: three selectors constrained by the catalog
//! and a free-text price field with live thousands formatting.

use std::num::ParseIntError;

use thiserror::Error;

use crate::catalog::{brands, models_for, year_options};
use crate::format::{format_price_input, strip_separators};
use crate::models::NewCar;

/// Why a submit did not produce a stored record.
#[derive(Debug, Error)]
pub enum FormError {
    /// At least one of the four fields is blank. Nothing is saved.
    #[error("Please fill all fields.")]
    MissingFields,
    #[error("invalid literal for year {input:?}: {source}")]
    InvalidYear {
        input: String,
        source: ParseIntError,
    },
    #[error("could not convert price {input:?} to a number: {reason}")]
    InvalidPrice { input: String, reason: String },
    /// The repository rejected the insert or the refresh afterwards.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl FormError {
    /// Missing input is a warning; everything else is reported as an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, FormError::MissingFields)
    }
}

/// Fields of the form in focus order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Brand,
    Model,
    Year,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Brand,
        FormField::Model,
        FormField::Year,
        FormField::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Brand => "Brand",
            FormField::Model => "Model",
            FormField::Year => "Year",
            FormField::Price => "Price",
        }
    }

    pub fn is_selector(self) -> bool {
        !matches!(self, FormField::Price)
    }
}

#[derive(Debug, Clone)]
pub struct CarForm {
    make: String,
    model: String,
    year: String,
    price: String,
    brand_options: Vec<&'static str>,
    model_options: &'static [&'static str],
    year_options: Vec<String>,
}

impl Default for CarForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CarForm {
    /// Empty form. Brand and year choices are computed once here.
    pub fn new() -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            year: String::new(),
            price: String::new(),
            brand_options: brands(),
            model_options: &[],
            year_options: year_options(),
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Brand => &self.make,
            FormField::Model => &self.model,
            FormField::Year => &self.year,
            FormField::Price => &self.price,
        }
    }

    pub fn brand_options(&self) -> &[&'static str] {
        &self.brand_options
    }

    /// Models offered for the currently selected brand.
    pub fn model_options(&self) -> &[&'static str] {
        self.model_options
    }

    pub fn year_options(&self) -> &[String] {
        &self.year_options
    }

    /// True while no field holds a value.
    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| self.value(*field).is_empty())
    }

    /// Choose a brand. The model list is rebuilt and the model selection is
    /// always discarded, even if the old model would still be valid.
    pub fn select_brand(&mut self, make: &str) {
        self.make = make.to_string();
        self.model_options = models_for(make);
        self.model.clear();
    }

    /// Choose a model from the current brand's list. Returns `false` and
    /// leaves the form alone when the model is not offered.
    pub fn select_model(&mut self, model: &str) -> bool {
        if self.model_options.iter().any(|option| *option == model) {
            self.model = model.to_string();
            true
        } else {
            false
        }
    }

    /// Choose a year from the offered range.
    pub fn select_year(&mut self, year: &str) -> bool {
        if self.year_options.iter().any(|option| option == year) {
            self.year = year.to_string();
            true
        } else {
            false
        }
    }

    /// Step a selector forward or backward through its options. An empty
    /// selector starts from the first (or last) option.
    pub fn cycle(&mut self, field: FormField, step: isize) {
        match field {
            FormField::Brand => {
                if let Some(next) = step_option(&self.brand_options, &self.make, step) {
                    let next = next.to_string();
                    self.select_brand(&next);
                }
            }
            FormField::Model => {
                if let Some(next) = step_option(self.model_options, &self.model, step) {
                    self.model = next.to_string();
                }
            }
            FormField::Year => {
                if let Some(next) = step_option(&self.year_options, &self.year, step) {
                    self.year = next.to_string();
                }
            }
            FormField::Price => {}
        }
    }

    /// Type one character into the price field, then reformat it.
    pub fn push_price_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.price.push(ch);
        self.reformat_price();
        true
    }

    /// Delete the last price character, then reformat what is left.
    pub fn pop_price_char(&mut self) {
        self.price.pop();
        self.reformat_price();
    }

    /// Replace the whole price text (paste), with the same live formatting.
    pub fn set_price(&mut self, text: &str) {
        self.price = text.to_string();
        self.reformat_price();
    }

    /// Digit-only content is regrouped; anything else is kept verbatim and
    /// only rejected at submit time.
    fn reformat_price(&mut self) {
        if let Some(formatted) = format_price_input(&self.price) {
            self.price = formatted;
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.make.clear();
        self.model.clear();
        self.year.clear();
        self.price.clear();
        self.model_options = &[];
    }

    /// Check presence of all fields and coerce year and price.
    pub fn parse_inputs(&self) -> Result<NewCar, FormError> {
        let price_raw = strip_separators(&self.price);
        if self.make.is_empty()
            || self.model.is_empty()
            || self.year.is_empty()
            || price_raw.is_empty()
        {
            return Err(FormError::MissingFields);
        }

        let year = self
            .year
            .trim()
            .parse::<i64>()
            .map_err(|source| FormError::InvalidYear {
                input: self.year.clone(),
                source,
            })?;
        let price = price_raw
            .trim()
            .parse::<f64>()
            .map_err(|source| FormError::InvalidPrice {
                input: price_raw.clone(),
                reason: source.to_string(),
            })?;
        if !price.is_finite() {
            return Err(FormError::InvalidPrice {
                input: price_raw,
                reason: "value is not a finite number".to_string(),
            });
        }

        Ok(NewCar::new(self.make.clone(), self.model.clone(), year, price))
    }
}

fn step_option<'a, S: AsRef<str>>(options: &'a [S], current: &str, step: isize) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let len = options.len() as isize;
    let index = match options.iter().position(|option| option.as_ref() == current) {
        Some(position) => (position as isize + step).rem_euclid(len),
        None if step < 0 => len - 1,
        None => 0,
    };
    options.get(index as usize).map(|option| option.as_ref())
}
