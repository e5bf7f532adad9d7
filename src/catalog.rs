//! Static reference data that constrains what the form offers. Nothing here
//! is enforced by storage.

use std::ops::RangeInclusive;

/// Brand to model mapping, in the order the brand selector cycles through.
const CAR_MODELS: &[(&str, &[&str])] = &[
    ("Toyota", &["Corolla", "Camry", "Innova", "Fortuner", "Etios"]),
    ("Honda", &["City", "Civic", "Amaze", "Jazz", "WR-V"]),
    ("Hyundai", &["i10", "i20", "Creta", "Verna", "Tucson"]),
    ("Tata", &["Nexon", "Harrier", "Punch", "Tiago", "Safari"]),
    ("Mahindra", &["XUV700", "Thar", "Scorpio", "Bolero", "XUV300"]),
    ("Maruti Suzuki", &["Swift", "Baleno", "WagonR", "Ertiga", "Dzire"]),
    ("Ford", &["Figo", "EcoSport", "Endeavour", "Freestyle"]),
    ("BMW", &["X1", "X3", "X5", "3 Series", "5 Series"]),
    ("Mercedes", &["A-Class", "C-Class", "E-Class", "GLA", "GLE"]),
    ("Kia", &["Seltos", "Sonet", "Carens"]),
    ("MG", &["Hector", "Astor", "Gloster"]),
    ("Volkswagen", &["Polo", "Vento", "Taigun"]),
    ("Skoda", &["Rapid", "Octavia", "Kushaq"]),
    ("Nissan", &["Magnite", "Kicks"]),
    ("Renault", &["Kwid", "Triber", "Duster"]),
];

/// Model years offered by the year selector.
pub const YEAR_RANGE: RangeInclusive<i64> = 2000..=2025;

/// Every known brand, in selector order.
pub fn brands() -> Vec<&'static str> {
    CAR_MODELS.iter().map(|(brand, _)| *brand).collect()
}

/// Models for `make`, or an empty slice when the brand is unknown.
pub fn models_for(make: &str) -> &'static [&'static str] {
    CAR_MODELS
        .iter()
        .find(|(brand, _)| *brand == make)
        .map(|(_, models)| *models)
        .unwrap_or(&[])
}

/// Year choices as the strings the selector displays.
pub fn year_options() -> Vec<String> {
    YEAR_RANGE.map(|year| year.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toyota_models_in_order() {
        assert_eq!(
            models_for("Toyota"),
            ["Corolla", "Camry", "Innova", "Fortuner", "Etios"]
        );
    }

    #[test]
    fn unknown_brand_has_no_models() {
        assert!(models_for("Tesla").is_empty());
        assert!(models_for("toyota").is_empty());
        assert!(models_for("").is_empty());
    }

    #[test]
    fn brand_list_is_complete() {
        let brands = brands();
        assert_eq!(brands.len(), 15);
        assert_eq!(brands.first(), Some(&"Toyota"));
        assert_eq!(brands.last(), Some(&"Renault"));
        assert!(brands.iter().all(|brand| !models_for(brand).is_empty()));
    }

    #[test]
    fn years_cover_the_inclusive_range() {
        let years = year_options();
        assert_eq!(years.len(), 26);
        assert_eq!(years.first().map(String::as_str), Some("2000"));
        assert_eq!(years.last().map(String::as_str), Some("2025"));
    }
}
