//! Interactive table-rotation browser for the terminal.
//!
//! One table is shown at a time; `next`/`prev` rotate through the three
//! tables in a fixed order. The view re-renders on a short polling timer
//! between blocking prompts. Bad input is reported and the loop continues;
//! storage errors propagate out of the offending operation.

use std::time::{Duration, Instant};

use console::Term;

use crate::record::TableKind;
use crate::storage::RecordStore;
use crate::ui::{self, table};
use crate::{Error, Result};

/// How long a rendered view stays fresh before the loop redraws it
const REFRESH_AFTER: Duration = Duration::from_secs(5);

const COMMAND_HINT: &str =
    "Commands: edit | delete | next | prev | refresh | switch <table> | exit";

/// A parsed browser command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Next,
    Prev,
    Switch(TableKind),
    Edit,
    Delete,
    Exit,
}

impl Command {
    /// Parse one prompt line. The error is the message to show the user.
    pub fn parse(line: &str) -> std::result::Result<Command, String> {
        let lowered = line.trim().to_lowercase();
        let parts: Vec<&str> = lowered.split_whitespace().collect();

        match parts.as_slice() {
            ["refresh"] => Ok(Command::Refresh),
            ["next"] => Ok(Command::Next),
            ["prev"] => Ok(Command::Prev),
            ["edit"] => Ok(Command::Edit),
            ["delete"] => Ok(Command::Delete),
            ["exit"] => Ok(Command::Exit),
            ["switch", name] => name
                .parse::<TableKind>()
                .map(Command::Switch)
                .map_err(|_| "Invalid table name!".to_string()),
            ["switch", ..] => Err("Usage: switch <table>".to_string()),
            _ => Err("Unknown command. Try 'refresh'.".to_string()),
        }
    }
}

/// Terminal browser over the record store
pub struct Browser {
    store: RecordStore,
    term: Term,
    current: TableKind,
}

impl Browser {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            term: Term::stdout(),
            current: TableKind::Clients,
        }
    }

    /// Run the command loop until `exit`
    pub fn run(&mut self) -> Result<()> {
        self.render()?;
        let mut last_render = Instant::now();

        loop {
            if last_render.elapsed() > REFRESH_AFTER {
                self.render()?;
                last_render = Instant::now();
            }

            self.term.write_str("\n> ")?;
            let line = self.term.read_line()?;

            let redraw = match Command::parse(&line) {
                Ok(Command::Exit) => break,
                Ok(Command::Refresh) => true,
                Ok(Command::Next) => {
                    self.current = self.current.next();
                    true
                }
                Ok(Command::Prev) => {
                    self.current = self.current.prev();
                    true
                }
                Ok(Command::Switch(table)) => {
                    self.current = table;
                    true
                }
                Ok(Command::Edit) => {
                    self.edit()?;
                    true
                }
                Ok(Command::Delete) => {
                    self.delete()?;
                    true
                }
                Err(message) => {
                    ui::error(&message);
                    false
                }
            };

            if redraw {
                self.render()?;
                last_render = Instant::now();
            }
        }

        ui::success("Leaving the record browser");
        Ok(())
    }

    fn render(&self) -> Result<()> {
        let data = self.store.list(self.current)?;
        self.term.clear_screen()?;
        ui::rule(&self.current.as_str().to_uppercase());
        println!("{}", table::render(&data));
        ui::hint(COMMAND_HINT);
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        let table = self.current;
        let Some(id) = self.prompt_id("Enter ID of record to edit")? else {
            return Ok(());
        };

        ui::info("Available columns", &table.editable_columns().join(", "));
        let column = self.prompt("Enter column to edit")?;
        let value = self.prompt("Enter new value")?;

        match self.store.update(table, id, &column, &value) {
            Ok(()) => ui::success(&format!("{} record {} updated", table, id)),
            Err(Error::UnknownColumn { .. }) => ui::error("Invalid column name!"),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let table = self.current;
        let Some(id) = self.prompt_id("Enter ID of record to delete")? else {
            return Ok(());
        };

        // Zero rows affected is indistinguishable from a real delete here,
        // matching the store contract
        self.store.delete(table, id)?;
        ui::success(&format!("{} record {} deleted", table, id));
        Ok(())
    }

    fn prompt(&self, label: &str) -> Result<String> {
        self.term.write_str(&format!("{}: ", label))?;
        Ok(self.term.read_line()?.trim().to_string())
    }

    /// Prompt for a record id; bad input is reported and `None` returned
    fn prompt_id(&self, label: &str) -> Result<Option<i64>> {
        let raw = self.prompt(label)?;
        match raw.parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                ui::error(&format!("Invalid record id '{}'", raw));
                Ok(None)
            }
        }
    }
}
