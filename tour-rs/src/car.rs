//! A record type with behaviour: three fields and a formatting method.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub year: u16,
}

impl Car {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: u16) -> Self {
        Self { brand: brand.into(), model: model.into(), year }
    }

    /// `<year> <brand> <model>`, e.g. `2020 Tesla Model S`.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.brand, self.model)
    }
}

/// Body of the "Classes" section.
pub fn car_lines() -> Vec<String> {
    let my_car = Car::new("Tesla", "Model S", 2020);
    vec![format!("Car Description: {}", my_car.description())]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
