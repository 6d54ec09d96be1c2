//! Command vocabulary.
//!
//! A closed enumeration per interpretation mode, mapping verb tokens to
//! semantic operations. Grocery verbs carry an explicit [`CommandKind`]
//! classification instead of relying on declaration order, so reordering the
//! vocabulary can never change how a verb is dispatched.

use std::fmt;

/// Interpretation modes the shell can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Grocery tracking (the default mode).
    Grocery,
    /// Calorie intake tracking.
    Calories,
    /// User profile management.
    Profile,
}

impl Mode {
    /// Parses a mode name, case-insensitively.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "grocery" => Some(Self::Grocery),
            "calories" => Some(Self::Calories),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grocery => write!(f, "grocery"),
            Self::Calories => write!(f, "calories"),
            Self::Profile => write!(f, "profile"),
        }
    }
}

/// Verbs available in every mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommonCommand {
    /// Switch to another interpretation mode.
    Switch,
    /// Show help for the active mode.
    Help,
    /// End the session. The only terminal transition.
    Exit,
}

impl CommonCommand {
    /// Parses a mode-independent verb.
    #[must_use]
    pub fn parse(verb: &str) -> Option<Self> {
        match verb {
            "switch" => Some(Self::Switch),
            "help" => Some(Self::Help),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Three-way classification of grocery verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// Creates or deletes a record.
    Entry,
    /// Edits a field of an existing record.
    Edit,
    /// Produces a view or report without naming a field.
    Report,
}

/// Verbs understood in grocery mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroceryCommand {
    /// `add NAME` - start tracking a grocery.
    Add,
    /// `del NAME` - stop tracking a grocery.
    Del,
    /// `exp NAME d/DATE` - set the expiration date.
    Exp,
    /// `cat NAME c/CATEGORY` - set the category.
    Cat,
    /// `amt NAME a/AMOUNT` - replace the stocked amount.
    Amt,
    /// `use NAME a/AMOUNT` - consume some of the stocked amount.
    Use,
    /// `th NAME a/AMOUNT` - set the low-stock threshold.
    Th,
    /// `cost NAME $PRICE` - set the cost.
    Cost,
    /// `remark NAME r/TEXT` - set the remark.
    Remark,
    /// `store NAME l/LOCATION` - assign a storage location.
    Store,
    /// `rate NAME` - rate and review (prompted).
    Rate,
    /// `find KEYWORD` - search names by substring.
    Find,
    /// `view NAME` - show one grocery in full.
    View,
    /// `list` - show all groceries.
    List,
    /// `listcat` - sort by category, then show all.
    ListCat,
    /// `listcost` - sort by descending cost, then show all.
    ListCost,
    /// `listexp` - sort by expiration date, then show all.
    ListExp,
    /// `expiring` - show groceries expiring in the next few days.
    Expiring,
    /// `low` - show groceries that are low in stock.
    Low,
}

impl GroceryCommand {
    /// Parses a grocery-mode verb.
    #[must_use]
    pub fn parse(verb: &str) -> Option<Self> {
        match verb {
            "add" => Some(Self::Add),
            "del" => Some(Self::Del),
            "exp" => Some(Self::Exp),
            "cat" => Some(Self::Cat),
            "amt" => Some(Self::Amt),
            "use" => Some(Self::Use),
            "th" => Some(Self::Th),
            "cost" => Some(Self::Cost),
            "remark" => Some(Self::Remark),
            "store" => Some(Self::Store),
            "rate" => Some(Self::Rate),
            "find" => Some(Self::Find),
            "view" => Some(Self::View),
            "list" => Some(Self::List),
            "listcat" => Some(Self::ListCat),
            "listcost" => Some(Self::ListCost),
            "listexp" => Some(Self::ListExp),
            "expiring" => Some(Self::Expiring),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Explicit classification, independent of declaration order.
    #[must_use]
    pub const fn kind(self) -> CommandKind {
        match self {
            Self::Add | Self::Del => CommandKind::Entry,
            Self::Exp
            | Self::Cat
            | Self::Amt
            | Self::Use
            | Self::Th
            | Self::Cost
            | Self::Remark
            | Self::Store
            | Self::Rate => CommandKind::Edit,
            Self::Find
            | Self::View
            | Self::List
            | Self::ListCat
            | Self::ListCost
            | Self::ListExp
            | Self::Expiring
            | Self::Low => CommandKind::Report,
        }
    }

    /// The delimiter marker this verb's detail string uses, if any.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Exp => Some("d/"),
            Self::Cat => Some("c/"),
            Self::Amt | Self::Use | Self::Th => Some("a/"),
            Self::Cost => Some("$"),
            Self::Remark => Some("r/"),
            Self::Store => Some("l/"),
            _ => None,
        }
    }

    /// The verb token, for error messages.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Del => "del",
            Self::Exp => "exp",
            Self::Cat => "cat",
            Self::Amt => "amt",
            Self::Use => "use",
            Self::Th => "th",
            Self::Cost => "cost",
            Self::Remark => "remark",
            Self::Store => "store",
            Self::Rate => "rate",
            Self::Find => "find",
            Self::View => "view",
            Self::List => "list",
            Self::ListCat => "listcat",
            Self::ListCost => "listcost",
            Self::ListExp => "listexp",
            Self::Expiring => "expiring",
            Self::Low => "low",
        }
    }

    /// All grocery verbs, for completion and help.
    pub const ALL: [Self; 19] = [
        Self::Add,
        Self::Del,
        Self::Exp,
        Self::Cat,
        Self::Amt,
        Self::Use,
        Self::Th,
        Self::Cost,
        Self::Remark,
        Self::Store,
        Self::Rate,
        Self::Find,
        Self::View,
        Self::List,
        Self::ListCat,
        Self::ListCost,
        Self::ListExp,
        Self::Expiring,
        Self::Low,
    ];
}

/// Verbs understood in calories mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalCommand {
    /// `eat FOOD` - record eating something (calories prompted).
    Eat,
    /// `view` - show everything eaten today and the total.
    View,
}

impl CalCommand {
    /// Parses a calories-mode verb.
    #[must_use]
    pub fn parse(verb: &str) -> Option<Self> {
        match verb {
            "eat" => Some(Self::Eat),
            "view" => Some(Self::View),
            _ => None,
        }
    }
}

/// Verbs understood in profile mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileCommand {
    /// `update` - update the profile (fields prompted).
    Update,
    /// `view` - show the profile.
    View,
}

impl ProfileCommand {
    /// Parses a profile-mode verb.
    #[must_use]
    pub fn parse(verb: &str) -> Option<Self> {
        match verb {
            "update" => Some(Self::Update),
            "view" => Some(Self::View),
            _ => None,
        }
    }
}
