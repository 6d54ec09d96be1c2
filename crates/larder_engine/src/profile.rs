//! User profile management.
//!
//! Stores the prompted profile fields. The shell reads and parses each field
//! interactively; this module only validates and holds them.

use larder_foundation::{Error, Result};

/// The user's profile, empty until the first update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserProfile {
    /// The user's name.
    pub name: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimeters.
    pub height: f64,
    /// Age in years.
    pub age: u32,
    /// Free-text gender.
    pub gender: String,
    /// Free-text activity level.
    pub activeness: String,
    /// Free-text aim (e.g. "lose", "maintain", "gain").
    pub aim: String,
}

impl UserProfile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the profile has been filled in at least once.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.name.is_empty()
    }

    /// Replaces every profile field at once.
    ///
    /// Numeric fields arrive already parsed by the shell's prompts; this
    /// only enforces that the name is present.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for a blank name.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: &str,
        weight: f64,
        height: f64,
        age: u32,
        gender: &str,
        activeness: &str,
        aim: &str,
    ) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::empty_input("name"));
        }

        self.name = name.to_string();
        self.weight = weight;
        self.height = height;
        self.age = age;
        self.gender = gender.trim().to_string();
        self.activeness = activeness.trim().to_string();
        self.aim = aim.trim().to_string();
        tracing::info!(name = %self.name, "profile updated");
        Ok(())
    }
}
