//! Line-oriented shell over [`AppState`].
//!
//! Each input line parses into one [`Command`]; commands that change state are
//! translated into an [`Intent`] and dispatched.

use core::str::FromStr;

use thiserror::Error;
use tracing::warn;

use stockroom_core::{DomainError, ItemId};
use stockroom_inventory::{CategoryFilter, FormField};

use crate::intent::{FormEvent, Intent, Outcome, TableIntent};
use crate::render::TableRow;
use crate::state::AppState;

pub const HELP: &str = "\
commands:
  add                         open the form for a new item
  edit <row|id>               open the form on an existing item
  set <field> <value...>      set name, category, quantity or price
  submit                      save the form
  cancel                      close the form without saving
  delete <row|id>             remove an item
  sort                        toggle quantity sort direction
  filter [category]           show one category (no argument: all)
  list                        show the table
  categories                  show known categories
  form                        show the open form
  json                        print the current view as JSON
  help                        show this text
  quit                        leave
";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("no item at row {0}")]
    NoSuchRow(usize),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to encode view: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Reference to a record: a row of the current view or a full id.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Row(usize),
    Id(ItemId),
}

impl FromStr for ItemRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('#');
        match s.parse::<usize>() {
            Ok(row) => Ok(ItemRef::Row(row)),
            Err(_) => s.parse().map(ItemRef::Id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit(ItemRef),
    Set(FormField, String),
    Submit,
    Cancel,
    Delete(ItemRef),
    Sort,
    Filter(CategoryFilter),
    List,
    Categories,
    Form,
    Json,
    Help,
    Quit,
}

impl Command {
    /// `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(required(rest, "row or id")?.parse()?),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (required(rest, "field")?, ""),
                };
                Command::Set(field.parse()?, value.to_string())
            }
            "submit" | "save" => Command::Submit,
            "cancel" => Command::Cancel,
            "delete" | "rm" => Command::Delete(required(rest, "row or id")?.parse()?),
            "sort" => Command::Sort,
            "filter" => Command::Filter(CategoryFilter::only(rest)),
            "list" | "ls" => Command::List,
            "categories" => Command::Categories,
            "form" => Command::Form,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required<'a>(arg: &'a str, what: &'static str) -> Result<&'a str, ShellError> {
    if arg.is_empty() {
        Err(ShellError::MissingArgument(what))
    } else {
        Ok(arg)
    }
}

/// What the caller should print, and whether to stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub output: String,
    pub quit: bool,
}

impl Response {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// Shell session owning the orchestrator.
#[derive(Debug, Default)]
pub struct Shell {
    state: AppState,
}

impl Shell {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Parse and run one line. Errors leave the state unchanged except where
    /// the orchestrator documents otherwise.
    pub fn handle_line(&mut self, line: &str) -> Result<Response, ShellError> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Response::default()),
        }
    }

    /// Like [`Shell::handle_line`], but errors become printable output.
    pub fn run_line(&mut self, line: &str) -> Response {
        self.handle_line(line).unwrap_or_else(|err| {
            warn!(input = line.trim(), error = %err, "command rejected");
            Response::print(format!("error: {err}\n"))
        })
    }

    pub fn execute(&mut self, command: Command) -> Result<Response, ShellError> {
        let intent = match command {
            Command::Add => Intent::AddNew,
            Command::Edit(item) => TableIntent::Edit(self.resolve(item)?).into(),
            Command::Set(field, value) => FormEvent::SetField { field, value }.into(),
            Command::Submit => FormEvent::Submit.into(),
            Command::Cancel => FormEvent::Cancel.into(),
            Command::Delete(item) => TableIntent::Delete(self.resolve(item)?).into(),
            Command::Sort => TableIntent::ToggleSort.into(),
            Command::Filter(filter) => Intent::SelectCategory(filter),
            Command::List => return Ok(Response::print(self.state.table_view().render_text())),
            Command::Categories => {
                return Ok(Response::print(self.state.category_options().render_text()));
            }
            Command::Form => {
                let text = match self.state.form_view() {
                    Some(form) => form.render_text(),
                    None => "no form is open\n".to_string(),
                };
                return Ok(Response::print(text));
            }
            Command::Json => {
                let rows: Vec<TableRow> = self.state.table_view().rows;
                let mut text = serde_json::to_string_pretty(&rows)?;
                text.push('\n');
                return Ok(Response::print(text));
            }
            Command::Help => return Ok(Response::print(HELP)),
            Command::Quit => {
                return Ok(Response {
                    output: String::new(),
                    quit: true,
                });
            }
        };

        let outcome = self.state.dispatch(intent)?;
        Ok(Response::print(self.describe(&outcome)))
    }

    fn resolve(&self, item: ItemRef) -> Result<ItemId, ShellError> {
        match item {
            ItemRef::Id(id) => Ok(id),
            ItemRef::Row(row) => self.state.row_id(row).ok_or(ShellError::NoSuchRow(row)),
        }
    }

    fn describe(&self, outcome: &Outcome) -> String {
        let mut out = match outcome {
            Outcome::Created(id) => format!("created {id}\n"),
            Outcome::Updated(id) => format!("updated {id}\n"),
            Outcome::Deleted(id) => format!("deleted {id}\n"),
            Outcome::NothingDeleted(id) => format!("no item {id}\n"),
            Outcome::FormOpened => self
                .state
                .form_view()
                .map(|form| form.render_text())
                .unwrap_or_default(),
            Outcome::FormEdited => String::new(),
            Outcome::FormClosed => "form closed\n".to_string(),
            Outcome::Sorted(direction) => format!("sorted by quantity ({direction})\n"),
            Outcome::Filtered(filter) => match filter.category() {
                Some(category) => format!("showing category {category}\n"),
                None => "showing all categories\n".to_string(),
            },
        };
        if outcome.mutated_store() || matches!(outcome, Outcome::Sorted(_) | Outcome::Filtered(_)) {
            out.push_str(&self.state.table_view().render_text());
            if !out.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("  ").unwrap(), None);
        assert_eq!(Command::parse("# note").unwrap(), None);
        assert_eq!(Command::parse("ADD").unwrap(), Some(Command::Add));
        assert_eq!(Command::parse("edit 2").unwrap(), Some(Command::Edit(ItemRef::Row(2))));
        assert_eq!(Command::parse("delete #3").unwrap(), Some(Command::Delete(ItemRef::Row(3))));
        assert_eq!(
            Command::parse("set name Socket  set").unwrap(),
            Some(Command::Set(FormField::Name, "Socket  set".to_string()))
        );
        assert_eq!(
            Command::parse("set price").unwrap(),
            Some(Command::Set(FormField::Price, String::new()))
        );
        assert_eq!(Command::parse("filter").unwrap(), Some(Command::Filter(CategoryFilter::all())));
        assert_eq!(
            Command::parse("filter Hand Tools").unwrap(),
            Some(Command::Filter(CategoryFilter::only("Hand Tools")))
        );
    }

    #[test]
    fn parses_item_ids() {
        let id = ItemId::new();
        assert_eq!(format!("{id}").parse::<ItemRef>().unwrap(), ItemRef::Id(id));
        assert!("nope".parse::<ItemRef>().is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Command::parse("frobnicate"), Err(ShellError::UnknownCommand(_))));
        assert!(matches!(Command::parse("edit"), Err(ShellError::MissingArgument(_))));
        assert!(matches!(Command::parse("set colour red"), Err(ShellError::Domain(_))));
    }

    #[test]
    fn unknown_row_is_reported() {
        let mut shell = Shell::default();
        let err = shell.handle_line("delete 1").unwrap_err();
        assert!(matches!(err, ShellError::NoSuchRow(1)));
        assert!(shell.run_line("delete 1").output.starts_with("error: no item at row 1"));
    }

    #[test]
    fn quit_stops() {
        let mut shell = Shell::default();
        assert!(shell.run_line("quit").quit);
        assert!(!shell.run_line("help").quit);
    }
}
