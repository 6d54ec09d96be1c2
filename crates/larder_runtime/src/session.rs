//! Session state for the shell.
//!
//! An explicit context object holding the catalog, the supplemental
//! trackers, and the dispatcher's mode state. Nothing here is process-wide;
//! tests build as many isolated sessions as they like.

use larder_engine::{FoodLog, GroceryCatalog, SaveSink, UserProfile};
use larder_parser::Mode;

/// Everything one interactive session mutates.
pub struct Session<S: SaveSink> {
    catalog: GroceryCatalog<S>,
    foods: FoodLog,
    profile: UserProfile,
    mode: Mode,
    running: bool,
}

impl<S: SaveSink> Session<S> {
    /// Creates a session around a catalog, starting in grocery mode.
    pub fn new(catalog: GroceryCatalog<S>) -> Self {
        Self {
            catalog,
            foods: FoodLog::new(),
            profile: UserProfile::new(),
            mode: Mode::Grocery,
            running: true,
        }
    }

    /// The grocery catalog.
    #[must_use]
    pub const fn catalog(&self) -> &GroceryCatalog<S> {
        &self.catalog
    }

    /// Mutable access to the grocery catalog.
    pub fn catalog_mut(&mut self) -> &mut GroceryCatalog<S> {
        &mut self.catalog
    }

    /// The calorie log.
    #[must_use]
    pub const fn foods(&self) -> &FoodLog {
        &self.foods
    }

    /// Mutable access to the calorie log.
    pub fn foods_mut(&mut self) -> &mut FoodLog {
        &mut self.foods
    }

    /// The user profile.
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Mutable access to the user profile.
    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    /// The active interpretation mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches the active interpretation mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Whether the session is still accepting commands.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Marks the session as finished. The only terminal transition.
    pub fn stop(&mut self) {
        self.running = false;
    }
}
