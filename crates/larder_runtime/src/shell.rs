//! The interactive shell.
//!
//! Reads one command line at a time, resolves the verb against the active
//! mode's vocabulary, routes it to the right engine call, and renders the
//! structured result. Every error is caught at this boundary and shown as a
//! message; only `exit` (or end of input) ends the session.

use larder_engine::{EXPIRING_WINDOW_DAYS, Event, GroceryCatalog, SaveSink};
use larder_foundation::{Error, ErrorKind, Result};
use larder_parser::{
    CalCommand, CommandKind, CommonCommand, GroceryCommand, Mode, ProfileCommand, split_verb,
};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render;
use crate::session::Session;

/// The interactive shell.
pub struct Shell<E: LineEditor, S: SaveSink> {
    /// The line editor for input.
    editor: E,

    /// Session state (catalog, trackers, mode).
    session: Session<S>,

    /// Whether to show the welcome banner.
    show_banner: bool,
}

impl<S: SaveSink> Shell<RustylineEditor, S> {
    /// Creates a shell with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(catalog: GroceryCatalog<S>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, Session::new(catalog)))
    }
}

impl<E: LineEditor, S: SaveSink> Shell<E, S> {
    /// Creates a shell with the given editor and session.
    pub fn with_editor(editor: E, session: Session<S>) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session<S> {
        &mut self.session
    }

    /// Runs the read-dispatch-render loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input fails fatally; command errors
    /// are rendered and swallowed.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }
        self.editor
            .set_keywords(render::completion_keywords(self.session.mode()));

        while self.session.is_running() {
            let prompt = format!("{}> ", self.session.mode());
            match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);
                    if let Err(e) = self.dispatch(trimmed) {
                        print_error(&e);
                    }
                }
                ReadResult::Interrupted => println!(),
                ReadResult::Eof => break,
            }
        }

        println!("bye bye!");
        Ok(())
    }

    /// Runs one command line against the session.
    ///
    /// # Errors
    ///
    /// Returns the user-input validation error the command produced, if any.
    pub fn dispatch(&mut self, line: &str) -> Result<()> {
        let (verb, rest) = split_verb(line);
        if verb.is_empty() {
            return Ok(());
        }

        if let Some(command) = CommonCommand::parse(&verb) {
            return self.common_command(command, &rest);
        }

        match self.session.mode() {
            Mode::Grocery => self.grocery_command(&verb, &rest),
            Mode::Calories => self.calories_command(&verb, &rest),
            Mode::Profile => self.profile_command(&verb, &rest),
        }
    }

    fn common_command(&mut self, command: CommonCommand, rest: &str) -> Result<()> {
        match command {
            CommonCommand::Switch => self.switch_mode(rest),
            CommonCommand::Help => {
                println!("{}", render::help_text(self.session.mode()));
                Ok(())
            }
            CommonCommand::Exit => {
                self.session.stop();
                Ok(())
            }
        }
    }

    fn switch_mode(&mut self, rest: &str) -> Result<()> {
        let target = if rest.is_empty() {
            self.prompt("Switch to which mode? (grocery/calories/profile): ")?
        } else {
            rest.to_string()
        };

        let Some(mode) = Mode::parse(&target) else {
            return Err(Error::new(ErrorKind::InvalidCommand));
        };
        self.session.set_mode(mode);
        self.editor.set_keywords(render::completion_keywords(mode));
        println!("You are now in {mode} mode.");
        Ok(())
    }

    fn grocery_command(&mut self, verb: &str, rest: &str) -> Result<()> {
        let Some(command) = GroceryCommand::parse(verb) else {
            return Err(Error::new(ErrorKind::InvalidCommand));
        };

        let event = match command.kind() {
            CommandKind::Entry => self.entry_command(command, rest)?,
            CommandKind::Edit => self.edit_command(command, rest)?,
            CommandKind::Report => self.report_command(command, rest)?,
        };
        println!("{}", render::render_event(&event));

        if let Some(warning) = self.session.catalog_mut().take_save_warning() {
            eprintln!("\x1b[33mWarning: your changes could not be saved: {warning}\x1b[0m");
        }
        Ok(())
    }

    fn entry_command(&mut self, command: GroceryCommand, rest: &str) -> Result<Event> {
        let catalog = self.session.catalog_mut();
        match command {
            GroceryCommand::Add => catalog.add(rest),
            GroceryCommand::Del => catalog.remove(rest),
            _ => Err(Error::new(ErrorKind::InvalidCommand)),
        }
    }

    fn edit_command(&mut self, command: GroceryCommand, rest: &str) -> Result<Event> {
        match command {
            GroceryCommand::Exp => self.session.catalog_mut().set_expiration(rest),
            GroceryCommand::Cat => self.session.catalog_mut().set_category(rest),
            GroceryCommand::Amt => self.session.catalog_mut().set_amount(rest, false),
            GroceryCommand::Use => self.session.catalog_mut().set_amount(rest, true),
            GroceryCommand::Th => self.session.catalog_mut().set_threshold(rest),
            GroceryCommand::Cost => self.session.catalog_mut().set_cost(rest),
            GroceryCommand::Remark => self.session.catalog_mut().set_remark(rest),
            GroceryCommand::Store => self.session.catalog_mut().assign_location(rest),
            GroceryCommand::Rate => self.rate_command(rest),
            _ => Err(Error::new(ErrorKind::InvalidCommand)),
        }
    }

    fn rate_command(&mut self, name: &str) -> Result<Event> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(Error::empty_input("grocery"));
        }
        // Look the grocery up before prompting, so typos fail fast.
        self.session.catalog().get(&name)?;

        let answer = self.prompt(&format!("Rate {name} out of 5: "))?;
        let rating: u8 = answer
            .parse()
            .map_err(|_| Error::new(ErrorKind::InvalidRating))?;
        let review = self.prompt("Any review? (leave blank for none): ")?;

        self.session.catalog_mut().set_rating(&name, rating, &review)
    }

    fn report_command(&mut self, command: GroceryCommand, rest: &str) -> Result<Event> {
        let catalog = self.session.catalog_mut();
        match command {
            GroceryCommand::Find => catalog.find(rest),
            GroceryCommand::View => catalog.view(rest),
            GroceryCommand::List => Ok(catalog.list_all()),
            GroceryCommand::ListCat => Ok(catalog.sort_by_category()),
            GroceryCommand::ListCost => Ok(catalog.sort_by_cost()),
            GroceryCommand::ListExp => Ok(catalog.sort_by_expiration()),
            GroceryCommand::Expiring => Ok(catalog.expiring_within_days(EXPIRING_WINDOW_DAYS)),
            GroceryCommand::Low => Ok(catalog.list_low_stock()),
            _ => Err(Error::new(ErrorKind::InvalidCommand)),
        }
    }

    fn calories_command(&mut self, verb: &str, rest: &str) -> Result<()> {
        let Some(command) = CalCommand::parse(verb) else {
            return Err(Error::new(ErrorKind::InvalidCommand));
        };

        match command {
            CalCommand::Eat => {
                let name = rest.trim().to_string();
                if name.is_empty() {
                    return Err(Error::empty_input("food"));
                }
                let answer = self.prompt("How many calories was that? ")?;
                let calories: f64 = answer
                    .parse()
                    .map_err(|_| Error::new(ErrorKind::InvalidCalories))?;
                let food = self.session.foods_mut().eat(&name, calories)?;
                println!("Added {} ({} cal) to today's intake.", food.name, food.calories);
            }
            CalCommand::View => {
                let foods = self.session.foods();
                println!("{}", render::render_foods(foods.foods(), foods.total_calories()));
            }
        }
        Ok(())
    }

    fn profile_command(&mut self, verb: &str, _rest: &str) -> Result<()> {
        let Some(command) = ProfileCommand::parse(verb) else {
            return Err(Error::new(ErrorKind::InvalidCommand));
        };

        match command {
            ProfileCommand::Update => {
                let name = self.prompt("What is your name? ")?;
                let weight = self.prompt_number("What is your weight (kg)? ", "weight")?;
                let height = self.prompt_number("What is your height (cm)? ", "height")?;
                let age_answer = self.prompt("How old are you? ")?;
                let age: u32 = age_answer
                    .parse()
                    .map_err(|_| Error::new(ErrorKind::InvalidNumber("age".to_string())))?;
                let gender = self.prompt("What is your gender? ")?;
                let activeness = self.prompt("How active are you? ")?;
                let aim = self.prompt("What is your aim? ")?;

                self.session
                    .profile_mut()
                    .update(&name, weight, height, age, &gender, &activeness, &aim)?;
                println!("Profile updated.");
            }
            ProfileCommand::View => {
                println!("{}", render::render_profile(self.session.profile()));
            }
        }
        Ok(())
    }

    /// Reads one answer to a follow-up prompt. Ctrl+C and Ctrl+D both come
    /// back as an empty answer for the validation to catch.
    fn prompt(&mut self, text: &str) -> Result<String> {
        match self.editor.read_line(text)? {
            ReadResult::Line(line) => Ok(line.trim().to_string()),
            ReadResult::Interrupted | ReadResult::Eof => Ok(String::new()),
        }
    }

    fn prompt_number(&mut self, text: &str, what: &str) -> Result<f64> {
        let answer = self.prompt(text)?;
        let value: f64 = answer
            .parse()
            .map_err(|_| Error::new(ErrorKind::InvalidNumber(what.to_string())))?;
        if value <= 0.0 || !value.is_finite() {
            return Err(Error::new(ErrorKind::InvalidNumber(what.to_string())));
        }
        Ok(value)
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

/// Prints the welcome banner.
fn print_banner() {
    println!("\x1b[1;36m");
    println!("  _                   _           ");
    println!(" | |    __ _ _ __ __| | ___ _ __ ");
    println!(" | |   / _` | '__/ _` |/ _ \\ '__|");
    println!(" | |__| (_| | | | (_| |  __/ |   ");
    println!(" |_____\\__,_|_|  \\__,_|\\___|_|   ");
    println!("\x1b[0m");
    println!("Welcome to Larder v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' to see what you can do. Use 'exit' or Ctrl+D to leave.\n");
}
