//! The grocery catalog.
//!
//! Holds every tracked grocery in insertion order, dispatches field edits
//! parsed from detail strings, maintains the location registry alongside the
//! records, and produces the query and sort reports. Every successful
//! mutation pushes the full collection into the persistence sink; a sink
//! failure is kept as a warning and never rolls back in-memory state.

use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;

use larder_foundation::{Error, ErrorKind, Grocery, LocationRegistry, Result};
use larder_parser::split_details;

use crate::event::{Event, ListingKind, StockSignal};
use crate::sink::SaveSink;

/// How many days ahead the expiring report looks, inclusive.
pub const EXPIRING_WINDOW_DAYS: u64 = 3;

/// Date format accepted for expiration dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The ordered collection of all tracked groceries.
pub struct GroceryCatalog<S: SaveSink> {
    groceries: Vec<Grocery>,
    locations: LocationRegistry,
    sink: S,
    save_warning: Option<String>,
}

impl<S: SaveSink> GroceryCatalog<S> {
    /// Creates an empty catalog writing to the given sink.
    pub fn new(sink: S) -> Self {
        Self {
            groceries: Vec::new(),
            locations: LocationRegistry::new(),
            sink,
            save_warning: None,
        }
    }

    /// Reconstructs a catalog from previously persisted state.
    pub fn from_parts(groceries: Vec<Grocery>, locations: LocationRegistry, sink: S) -> Self {
        Self {
            groceries,
            locations,
            sink,
            save_warning: None,
        }
    }

    /// The records, in collection order.
    #[must_use]
    pub fn groceries(&self) -> &[Grocery] {
        &self.groceries
    }

    /// The location registry.
    #[must_use]
    pub const fn locations(&self) -> &LocationRegistry {
        &self.locations
    }

    /// Whether a grocery with this name is tracked (case-insensitive).
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.groceries.iter().any(|g| g.matches(name))
    }

    /// Looks up a grocery by name.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchGrocery` if no record matches.
    pub fn get(&self, name: &str) -> Result<&Grocery> {
        self.groceries
            .iter()
            .find(|g| g.matches(name))
            .ok_or_else(|| Error::no_such_grocery(name))
    }

    /// Takes the warning left by the last failed persist, if any.
    pub fn take_save_warning(&mut self) -> Option<String> {
        self.save_warning.take()
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.groceries
            .iter()
            .position(|g| g.matches(name))
            .ok_or_else(|| Error::no_such_grocery(name))
    }

    /// Persists the collection, swallowing failures into the warning slot.
    /// In-memory and on-disk state may diverge after an I/O failure; with a
    /// single synchronous user that is accepted and reported, not fatal.
    fn flush(&mut self) {
        if let Err(e) = self.sink.save(&self.groceries, &self.locations) {
            tracing::warn!(error = %e, "failed to persist catalog");
            self.save_warning = Some(e.to_string());
        }
    }

    fn check_details(&self, details: &str, command: &str, marker: &str) -> Result<(String, String)> {
        split_details(details, command, marker, |name| self.exists(name))
    }

    /// Starts tracking a grocery with default attributes.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for a blank name, `DuplicateGrocery` if the name is
    /// already tracked (case-insensitive).
    pub fn add(&mut self, name: &str) -> Result<Event> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::empty_input("grocery"));
        }
        if self.exists(name) {
            return Err(Error::duplicate_grocery(name));
        }

        let grocery = Grocery::new(name);
        tracing::info!(grocery = %grocery, "added");
        self.groceries.push(grocery.clone());
        self.flush();
        Ok(Event::Added(grocery))
    }

    /// Stops tracking a grocery and severs its location membership.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for a blank name, `NoSuchGrocery` if absent.
    pub fn remove(&mut self, name: &str) -> Result<Event> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::empty_input("grocery"));
        }

        let index = self.position(name)?;
        let grocery = self.groceries.remove(index);
        if let Some(location_key) = &grocery.location {
            self.locations.detach(location_key, &grocery.key());
        }
        tracing::info!(grocery = %grocery, "removed");
        self.flush();
        Ok(Event::Removed {
            remaining: self.groceries.len(),
            grocery,
        })
    }

    /// Sets the expiration date from a `NAME d/YYYY-MM-DD` detail string.
    ///
    /// # Errors
    ///
    /// Detail-parse errors, `DateFormat` for an unparsable date, and
    /// `PastExpiration` for a date strictly before today. Validation
    /// precedes mutation: a past date leaves the record untouched.
    pub fn set_expiration(&mut self, details: &str) -> Result<Event> {
        let (name, payload) = self.check_details(details, "exp", "d/")?;
        let date = NaiveDate::parse_from_str(&payload, DATE_FORMAT)
            .map_err(|_| Error::new(ErrorKind::DateFormat))?;
        if date < today() {
            return Err(Error::past_expiration(date));
        }

        let index = self.position(&name)?;
        self.groceries[index].expiration = Some(date);
        let grocery = self.groceries[index].clone();
        self.flush();
        Ok(Event::ExpirationSet(grocery))
    }

    /// Sets the category from a `NAME c/CATEGORY` detail string. Categories
    /// are normalized to upper case before storage.
    ///
    /// # Errors
    ///
    /// Detail-parse errors.
    pub fn set_category(&mut self, details: &str) -> Result<Event> {
        let (name, payload) = self.check_details(details, "cat", "c/")?;
        let index = self.position(&name)?;
        self.groceries[index].category = payload.to_uppercase();
        let grocery = self.groceries[index].clone();
        self.flush();
        Ok(Event::CategorySet(grocery))
    }

    /// Sets or consumes the stocked amount from a `NAME a/AMOUNT` detail
    /// string.
    ///
    /// With `is_use`, the parsed amount is subtracted (saturating at zero)
    /// and consuming from an empty stock is `CannotUse`. Without, the parsed
    /// amount replaces the current one outright.
    ///
    /// # Errors
    ///
    /// Detail-parse errors, `InvalidAmount` unless the payload is a whole
    /// number greater than zero, `CannotUse` as above.
    pub fn set_amount(&mut self, details: &str, is_use: bool) -> Result<Event> {
        let command = if is_use { "use" } else { "amt" };
        let (name, payload) = self.check_details(details, command, "a/")?;
        let parsed = check_amount(&payload)?;

        let index = self.position(&name)?;
        let current = self.groceries[index].amount;
        if is_use && current == 0 {
            return Err(Error::new(ErrorKind::CannotUse));
        }
        let amount = if is_use {
            current.saturating_sub(parsed)
        } else {
            parsed
        };

        self.groceries[index].amount = amount;
        let grocery = self.groceries[index].clone();
        self.flush();

        let signal = if grocery.is_depleted() {
            StockSignal::Depleted
        } else if grocery.is_low() {
            StockSignal::LowStock
        } else {
            StockSignal::Updated
        };
        Ok(Event::AmountSet { grocery, signal })
    }

    /// Sets the low-stock threshold from a `NAME a/AMOUNT` detail string.
    ///
    /// # Errors
    ///
    /// Detail-parse errors, `InvalidAmount` unless the payload is a
    /// non-negative whole number.
    pub fn set_threshold(&mut self, details: &str) -> Result<Event> {
        let (name, payload) = self.check_details(details, "th", "a/")?;
        let threshold: u32 = payload
            .parse()
            .map_err(|_| Error::new(ErrorKind::InvalidAmount))?;

        let index = self.position(&name)?;
        self.groceries[index].threshold = threshold;
        let grocery = self.groceries[index].clone();
        self.flush();
        Ok(Event::ThresholdSet(grocery))
    }

    /// Sets the cost from a `NAME $PRICE` detail string.
    ///
    /// # Errors
    ///
    /// Detail-parse errors, `InvalidCost` if the payload is not a
    /// non-negative number.
    pub fn set_cost(&mut self, details: &str) -> Result<Event> {
        let (name, payload) = self.check_details(details, "cost", "$")?;
        let cost: Decimal = payload
            .parse()
            .map_err(|_| Error::new(ErrorKind::InvalidCost))?;
        if cost < Decimal::ZERO {
            return Err(Error::new(ErrorKind::InvalidCost));
        }

        let index = self.position(&name)?;
        self.groceries[index].cost = cost;
        let grocery = self.groceries[index].clone();
        self.flush();
        Ok(Event::CostSet(grocery))
    }

    /// Sets the remark from a `NAME r/TEXT` detail string. The detail parser
    /// already rejects blank payloads, so the field only ever receives a
    /// non-empty remark.
    ///
    /// # Errors
    ///
    /// Detail-parse errors.
    pub fn set_remark(&mut self, details: &str) -> Result<Event> {
        let (name, payload) = self.check_details(details, "remark", "r/")?;
        let index = self.position(&name)?;
        self.groceries[index].remark = payload;
        let grocery = self.groceries[index].clone();
        self.flush();
        Ok(Event::RemarkSet(grocery))
    }

    /// Assigns a storage location from a `NAME l/LOCATION` detail string.
    ///
    /// The location is created lazily if this is the first time its name is
    /// used. Moves detach the record from its old location's member set and
    /// attach it to the new one in the same operation, so the record and the
    /// registry can never disagree.
    ///
    /// # Errors
    ///
    /// Detail-parse errors, `SameLocation` if the grocery is already stored
    /// there (in which case nothing changes, including the registry).
    pub fn assign_location(&mut self, details: &str) -> Result<Event> {
        let (name, payload) = self.check_details(details, "store", "l/")?;
        let index = self.position(&name)?;

        // Same-location check must precede lazy creation's side effects
        // being observable: resolving an existing key creates nothing.
        let new_key = payload.to_lowercase();
        if self.groceries[index].location.as_deref() == Some(new_key.as_str()) {
            let display = self
                .locations
                .get(&new_key)
                .map_or(payload.clone(), |l| l.name.clone());
            return Err(Error::same_location(&self.groceries[index].name, display));
        }

        let (new_key, created) = self.locations.resolve_or_create(&payload);
        let grocery_key = self.groceries[index].key();
        if let Some(old_key) = self.groceries[index].location.take() {
            self.locations.detach(&old_key, &grocery_key);
        }
        self.locations.attach(&new_key, &grocery_key);
        self.groceries[index].location = Some(new_key.clone());

        let grocery = self.groceries[index].clone();
        let location = self
            .locations
            .get(&new_key)
            .map_or(payload, |l| l.name.clone());
        self.flush();
        Ok(Event::LocationSet {
            grocery,
            location,
            created,
        })
    }

    /// Sets the rating (1 to 5) and review of a grocery. Both values arrive
    /// already read from the user by the shell.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for a blank name, `NoSuchGrocery` if absent,
    /// `InvalidRating` outside 1 to 5.
    pub fn set_rating(&mut self, name: &str, rating: u8, review: &str) -> Result<Event> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::empty_input("grocery"));
        }
        if !(1..=5).contains(&rating) {
            return Err(Error::new(ErrorKind::InvalidRating));
        }

        let index = self.position(name)?;
        self.groceries[index].rating = Some(rating);
        let review = review.trim();
        self.groceries[index].review = if review.is_empty() {
            None
        } else {
            Some(review.to_string())
        };
        let grocery = self.groceries[index].clone();
        self.flush();
        Ok(Event::RatingSet(grocery))
    }

    /// Searches names by case-insensitive substring, preserving collection
    /// order.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for a blank keyword.
    pub fn find(&self, keyword: &str) -> Result<Event> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(Error::empty_input("keyword"));
        }

        let lowered = keyword.to_lowercase();
        let matches = self
            .groceries
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&lowered))
            .cloned()
            .collect();
        Ok(Event::Found {
            keyword: keyword.to_string(),
            matches,
        })
    }

    /// Shows one grocery by exact case-insensitive name match. An unknown
    /// name is reported as [`Event::NotFound`] rather than an error.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for a blank name.
    pub fn view(&self, name: &str) -> Result<Event> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::empty_input("grocery"));
        }

        Ok(self
            .groceries
            .iter()
            .find(|g| g.matches(name))
            .map_or(Event::NotFound, |g| Event::Viewed(g.clone())))
    }

    /// Lists every grocery in collection order.
    #[must_use]
    pub fn list_all(&self) -> Event {
        Event::Listing {
            kind: ListingKind::All,
            groceries: self.groceries.clone(),
        }
    }

    /// Lists groceries that are low in stock, preserving order.
    #[must_use]
    pub fn list_low_stock(&self) -> Event {
        Event::Listing {
            kind: ListingKind::LowStock,
            groceries: self.groceries.iter().filter(|g| g.is_low()).cloned().collect(),
        }
    }

    /// Sorts the collection in place by ascending expiration date. Records
    /// without a date sort after all dated records and compare equal to each
    /// other.
    pub fn sort_by_expiration(&mut self) -> Event {
        self.groceries.sort_by(|a, b| match (a.expiration, b.expiration) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
            (Some(x), Some(y)) => x.cmp(&y),
        });
        Event::Listing {
            kind: ListingKind::ByExpiration,
            groceries: self.groceries.clone(),
        }
    }

    /// Sorts the collection in place by descending cost. The sort is stable,
    /// so ties keep their original relative order.
    pub fn sort_by_cost(&mut self) -> Event {
        self.groceries.sort_by(|a, b| b.cost.cmp(&a.cost));
        Event::Listing {
            kind: ListingKind::ByCost,
            groceries: self.groceries.clone(),
        }
    }

    /// Sorts the collection in place by ascending category.
    pub fn sort_by_category(&mut self) -> Event {
        self.groceries.sort_by(|a, b| a.category.cmp(&b.category));
        Event::Listing {
            kind: ListingKind::ByCategory,
            groceries: self.groceries.clone(),
        }
    }

    /// Reports groceries whose expiration date falls within
    /// `[today, today + days]` inclusive. Records with no expiration date
    /// are excluded.
    #[must_use]
    pub fn expiring_within_days(&self, days: u64) -> Event {
        let start = today();
        let end = start + Days::new(days);
        let groceries = self
            .groceries
            .iter()
            .filter(|g| {
                g.expiration
                    .is_some_and(|date| date >= start && date <= end)
            })
            .cloned()
            .collect();
        Event::Listing {
            kind: ListingKind::Expiring,
            groceries,
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn check_amount(payload: &str) -> Result<u32> {
    let amount: u32 = payload
        .parse()
        .map_err(|_| Error::new(ErrorKind::InvalidAmount))?;
    if amount == 0 {
        return Err(Error::new(ErrorKind::InvalidAmount));
    }
    Ok(amount)
}
