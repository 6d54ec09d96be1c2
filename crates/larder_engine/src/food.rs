//! Calorie intake tracking.
//!
//! The calories mode is a much simpler sibling of the grocery catalog: an
//! append-only log of foods eaten today and a running total.

use larder_foundation::{Error, ErrorKind, Result};

/// One thing eaten.
#[derive(Clone, Debug, PartialEq)]
pub struct Food {
    /// What was eaten.
    pub name: String,
    /// Calories it carried.
    pub calories: f64,
}

/// Everything eaten today, in order.
#[derive(Debug, Default)]
pub struct FoodLog {
    foods: Vec<Food>,
}

impl FoodLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records eating something.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for a blank name, `InvalidCalories` for negative
    /// calories.
    pub fn eat(&mut self, name: &str, calories: f64) -> Result<&Food> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::empty_input("food"));
        }
        if calories < 0.0 || !calories.is_finite() {
            return Err(Error::new(ErrorKind::InvalidCalories));
        }

        self.foods.push(Food {
            name: name.to_string(),
            calories,
        });
        tracing::info!(food = name, calories, "ate");
        Ok(self.foods.last().expect("just pushed"))
    }

    /// Everything eaten, in insertion order.
    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// Total calories consumed.
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.foods.iter().map(|f| f.calories).sum()
    }
}
