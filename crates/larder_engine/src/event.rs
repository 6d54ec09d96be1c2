//! Structured results handed to the presentation layer.
//!
//! The engine never formats multi-line output itself; every operation
//! returns an [`Event`] carrying cloned record snapshots, and the runtime
//! decides how to render them.

use larder_foundation::Grocery;

/// What a stock-changing edit should tell the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockSignal {
    /// The amount reached zero.
    Depleted,
    /// The amount is at or below the threshold (and above zero).
    LowStock,
    /// Plain confirmation.
    Updated,
}

/// Which report a listing came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingKind {
    /// Every grocery, in collection order.
    All,
    /// Collection sorted by category.
    ByCategory,
    /// Collection sorted by descending cost.
    ByCost,
    /// Collection sorted by expiration date.
    ByExpiration,
    /// Groceries expiring within the report window.
    Expiring,
    /// Groceries low in stock.
    LowStock,
}

/// The structured result of one catalog operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A grocery was added to the catalog.
    Added(Grocery),
    /// A grocery was removed; `remaining` is the new catalog size.
    Removed {
        /// The record that was removed.
        grocery: Grocery,
        /// How many groceries are still tracked.
        remaining: usize,
    },
    /// The expiration date was set.
    ExpirationSet(Grocery),
    /// The category was set.
    CategorySet(Grocery),
    /// The amount changed, with the signal to raise.
    AmountSet {
        /// The record after the change.
        grocery: Grocery,
        /// Depleted, low stock, or plain confirmation.
        signal: StockSignal,
    },
    /// The low-stock threshold was set.
    ThresholdSet(Grocery),
    /// The cost was set.
    CostSet(Grocery),
    /// The remark was set.
    RemarkSet(Grocery),
    /// The grocery was assigned to a location.
    LocationSet {
        /// The record after the move.
        grocery: Grocery,
        /// Display name of the new location.
        location: String,
        /// Whether the location was created by this command.
        created: bool,
    },
    /// The rating and review were set.
    RatingSet(Grocery),
    /// Result of a keyword search.
    Found {
        /// The keyword searched for.
        keyword: String,
        /// Matching records in collection order.
        matches: Vec<Grocery>,
    },
    /// A single grocery shown in full.
    Viewed(Grocery),
    /// The named grocery does not exist (view only; not an error).
    NotFound,
    /// A list report.
    Listing {
        /// Which report this is.
        kind: ListingKind,
        /// The records, in report order.
        groceries: Vec<Grocery>,
    },
}
