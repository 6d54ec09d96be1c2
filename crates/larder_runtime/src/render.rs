//! Console rendering of engine results.
//!
//! The engine hands back structured [`Event`]s; everything about how they
//! look on screen lives here.

use std::fmt::Write as _;

use larder_engine::{Event, Food, ListingKind, StockSignal, UserProfile};
use larder_foundation::Grocery;
use larder_parser::{GroceryCommand, Mode};

/// Renders one engine event as display text.
#[must_use]
pub fn render_event(event: &Event) -> String {
    match event {
        Event::Added(grocery) => format!(
            "{} is now on the list. Use the edit commands to fill in its details.",
            grocery.name
        ),
        Event::Removed { grocery, remaining } => format!(
            "{} removed. You are tracking {remaining} {}.",
            grocery.name,
            plural(*remaining, "grocery", "groceries")
        ),
        Event::ExpirationSet(grocery) => match grocery.expiration {
            Some(date) => format!("{} will expire on {date}.", grocery.name),
            None => format!("{} has no expiration date.", grocery.name),
        },
        Event::CategorySet(grocery) => {
            format!("{} is in the {} category.", grocery.name, grocery.category)
        }
        Event::AmountSet { grocery, signal } => match signal {
            StockSignal::Depleted => format!("{} is now out of stock!", grocery.name),
            StockSignal::LowStock => format!(
                "Low stock alert: only {} of {} left (threshold {}).",
                grocery.amount, grocery.name, grocery.threshold
            ),
            StockSignal::Updated => {
                format!("{}: amount set to {}.", grocery.name, grocery.amount)
            }
        },
        Event::ThresholdSet(grocery) => format!(
            "{} will raise a low stock alert at {} left.",
            grocery.name, grocery.threshold
        ),
        Event::CostSet(grocery) => format!("{} costs ${}.", grocery.name, grocery.cost),
        Event::RemarkSet(grocery) => {
            format!("Remark for {}: {}", grocery.name, grocery.remark)
        }
        Event::LocationSet {
            grocery,
            location,
            created,
        } => {
            let mut out = String::new();
            if *created {
                let _ = writeln!(out, "New location added: {location}");
            }
            let _ = write!(out, "{} is now stored in {location}.", grocery.name);
            out
        }
        Event::RatingSet(grocery) => match (grocery.rating, &grocery.review) {
            (Some(rating), Some(review)) => format!(
                "{}: rated {rating}/5 - \"{review}\"",
                grocery.name
            ),
            (Some(rating), None) => format!("{}: rated {rating}/5.", grocery.name),
            _ => format!("{} is unrated.", grocery.name),
        },
        Event::Found { keyword, matches } => {
            if matches.is_empty() {
                format!("Nothing on your list matches \"{keyword}\".")
            } else {
                let mut out = format!("Groceries matching \"{keyword}\":\n");
                push_list(&mut out, matches);
                out
            }
        }
        Event::Viewed(grocery) => render_detail(grocery),
        Event::NotFound => "That grocery is not on your list.".to_string(),
        Event::Listing { kind, groceries } => {
            if groceries.is_empty() {
                return empty_listing_text(*kind).to_string();
            }
            let mut out = format!("{}\n", listing_header(*kind));
            push_list(&mut out, groceries);
            out
        }
    }
}

fn listing_header(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::All => "Here are your groceries:",
        ListingKind::ByCategory => "Here are your groceries, by category:",
        ListingKind::ByCost => "Here are your groceries, most expensive first:",
        ListingKind::ByExpiration => "Here are your groceries, soonest to expire first:",
        ListingKind::Expiring => "Here are the groceries expiring in the next few days:",
        ListingKind::LowStock => "These groceries are running low:",
    }
}

fn empty_listing_text(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::Expiring => "Nothing expires in the next few days.",
        ListingKind::LowStock => "Nothing is running low.",
        _ => "Your grocery list is empty. Add something with: add GROCERY",
    }
}

fn push_list(out: &mut String, groceries: &[Grocery]) {
    for (i, grocery) in groceries.iter().enumerate() {
        let _ = writeln!(out, " {}. {grocery}", i + 1);
    }
    // Drop the trailing newline so callers can println! the whole thing.
    out.pop();
}

fn render_detail(grocery: &Grocery) -> String {
    let mut out = format!("{}\n", grocery.name);
    let _ = writeln!(out, "  amount: {}", grocery.amount);
    match grocery.expiration {
        Some(date) => {
            let _ = writeln!(out, "  expiration: {date}");
        }
        None => {
            let _ = writeln!(out, "  expiration: not set");
        }
    }
    let _ = writeln!(out, "  category: {}", grocery.category);
    let _ = writeln!(out, "  cost: ${}", grocery.cost);
    let _ = writeln!(out, "  threshold: {}", grocery.threshold);
    if !grocery.remark.is_empty() {
        let _ = writeln!(out, "  remark: {}", grocery.remark);
    }
    if let Some(location) = &grocery.location {
        let _ = writeln!(out, "  location: {location}");
    }
    if let Some(rating) = grocery.rating {
        let _ = writeln!(out, "  rating: {rating}/5");
    }
    if let Some(review) = &grocery.review {
        let _ = writeln!(out, "  review: {review}");
    }
    out.pop();
    out
}

/// Renders the food log and its calorie total.
#[must_use]
pub fn render_foods(foods: &[Food], total: f64) -> String {
    let mut out = String::new();
    if foods.is_empty() {
        out.push_str("You have not eaten anything today.");
        return out;
    }

    out.push_str("Here is what you have eaten today:\n");
    for (i, food) in foods.iter().enumerate() {
        let _ = writeln!(out, " {}. {} ({} cal)", i + 1, food.name, food.calories);
    }
    let _ = write!(out, "You have consumed {total} calories today.");
    out
}

/// Renders the user profile.
#[must_use]
pub fn render_profile(profile: &UserProfile) -> String {
    if !profile.is_set() {
        return "Your profile is not set up yet. Run 'update' first.".to_string();
    }

    let mut out = format!("Profile for {}:\n", profile.name);
    let _ = writeln!(out, "  weight: {} kg", profile.weight);
    let _ = writeln!(out, "  height: {} cm", profile.height);
    let _ = writeln!(out, "  age: {}", profile.age);
    let _ = writeln!(out, "  gender: {}", profile.gender);
    let _ = writeln!(out, "  activeness: {}", profile.activeness);
    let _ = write!(out, "  aim: {}", profile.aim);
    out
}

/// Help text for the active mode.
#[must_use]
pub fn help_text(mode: Mode) -> String {
    let mut out = String::new();
    match mode {
        Mode::Grocery => {
            out.push_str("Grocery commands:\n");
            out.push_str("  add GROCERY             track a new grocery\n");
            out.push_str("  del GROCERY             stop tracking a grocery\n");
            out.push_str("  exp GROCERY d/DATE      set expiration (YYYY-MM-DD)\n");
            out.push_str("  cat GROCERY c/CATEGORY  set category\n");
            out.push_str("  amt GROCERY a/AMOUNT    set amount\n");
            out.push_str("  use GROCERY a/AMOUNT    use up some amount\n");
            out.push_str("  th GROCERY a/AMOUNT     set low-stock threshold\n");
            out.push_str("  cost GROCERY $PRICE     set cost\n");
            out.push_str("  remark GROCERY r/TEXT   set a remark\n");
            out.push_str("  store GROCERY l/PLACE   assign a storage location\n");
            out.push_str("  rate GROCERY            rate and review\n");
            out.push_str("  find KEYWORD            search by name\n");
            out.push_str("  view GROCERY            show one grocery in full\n");
            out.push_str("  list                    show all groceries\n");
            out.push_str("  listcat                 sort by category and show\n");
            out.push_str("  listcost                sort by cost and show\n");
            out.push_str("  listexp                 sort by expiration and show\n");
            out.push_str("  expiring                show groceries expiring soon\n");
            out.push_str("  low                     show groceries running low\n");
        }
        Mode::Calories => {
            out.push_str("Calories commands:\n");
            out.push_str("  eat FOOD                record eating something\n");
            out.push_str("  view                    show today's intake\n");
        }
        Mode::Profile => {
            out.push_str("Profile commands:\n");
            out.push_str("  update                  update your profile\n");
            out.push_str("  view                    show your profile\n");
        }
    }
    out.push_str("In every mode:\n");
    out.push_str("  switch [MODE]           change mode (grocery/calories/profile)\n");
    out.push_str("  help                    show this help\n");
    out.push_str("  exit                    leave Larder");
    out
}

/// The verbs tab completion should offer in a mode.
#[must_use]
pub fn completion_keywords(mode: Mode) -> Vec<String> {
    let mut keywords: Vec<String> = match mode {
        Mode::Grocery => GroceryCommand::ALL
            .iter()
            .map(|c| c.verb().to_string())
            .collect(),
        Mode::Calories => vec!["eat".to_string(), "view".to_string()],
        Mode::Profile => vec!["update".to_string(), "view".to_string()],
    };
    keywords.extend(["switch".to_string(), "help".to_string(), "exit".to_string()]);
    keywords
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
