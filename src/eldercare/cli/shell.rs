//! # Interactive Menu
//!
//! The numbered menu loop. It reads one line per choice, prompts field by
//! field and hands everything to [`CareApi`]. Operation failures are printed
//! and the loop carries on; only I/O errors on the shell's own input/output
//! end it early.
//!
//! The shell is generic over its reader and writer so tests can drive it
//! with a byte buffer.

use super::render::{render_error, render_messages, render_records};
use eldercare::api::{CareApi, CmdResult};
use eldercare::config::SaveOnExit;
use eldercare::error::Result;
use eldercare::model::{parse_age, parse_id, NewRecord, RecordPatch};
use eldercare::store::Storage;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    DisplayAll,
    SearchById,
    SearchByName,
    Edit,
    Delete,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::DisplayAll),
            3 => Some(MenuChoice::SearchById),
            4 => Some(MenuChoice::SearchByName),
            5 => Some(MenuChoice::Edit),
            6 => Some(MenuChoice::Delete),
            7 => Some(MenuChoice::Save),
            8 => Some(MenuChoice::Load),
            9 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Reads the leading integer of a line ("3", " 3 ", "3abc" all mean 3).
fn parse_choice(line: &str) -> Option<MenuChoice> {
    let digits: String = line
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().and_then(MenuChoice::from_number)
}

const MENU: &str = "\n====== Elderly Helping System ======\n\
1. Add new elderly record\n\
2. Display all records\n\
3. Search by ID\n\
4. Search by name\n\
5. Edit a record\n\
6. Delete a record\n\
7. Save to file\n\
8. Load from file\n\
9. Exit\n";

pub struct Shell<'a, S: Storage, R: BufRead, W: Write> {
    api: &'a mut CareApi<S>,
    save_on_exit: SaveOnExit,
    input: R,
    out: W,
}

impl<'a, S: Storage, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(api: &'a mut CareApi<S>, save_on_exit: SaveOnExit, input: R, out: W) -> Self {
        Self {
            api,
            save_on_exit,
            input,
            out,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "{}", MENU)?;
            let Some(line) = self.read_line("Choose an option (1-9): ")? else {
                writeln!(self.out, "\nInput error. Exiting.")?;
                return Ok(());
            };

            match parse_choice(&line) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::DisplayAll) => self.display_all()?,
                Some(MenuChoice::SearchById) => self.search_by_id()?,
                Some(MenuChoice::SearchByName) => self.search_by_name()?,
                Some(MenuChoice::Edit) => self.edit()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::Save) => {
                    let outcome = self.api.save();
                    self.report(outcome)?;
                }
                Some(MenuChoice::Load) => {
                    let outcome = self.api.load();
                    self.report(outcome)?;
                }
                Some(MenuChoice::Exit) => {
                    if self.exit()? {
                        return Ok(());
                    }
                }
                None => writeln!(self.out, "Invalid option. Please choose 1..9")?,
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Add New Elderly Record ---")?;
        let name = self.prompt("Name: ")?;
        let age = self.prompt("Age: ")?;
        let address = self.prompt("Address: ")?;
        let need = self.prompt("Need / Remarks: ")?;
        let contact = self.prompt("Contact (phone): ")?;

        let outcome = parse_age(&age)
            .and_then(|age| self.api.add_record(NewRecord::new(name, age, address, need, contact)));
        self.report(outcome)
    }

    fn display_all(&mut self) -> Result<()> {
        let outcome = self.api.list_records();
        if let Ok(result) = &outcome {
            if !result.listed_records.is_empty() {
                writeln!(self.out, "\n--- All Elderly Records ---")?;
            }
        }
        self.report(outcome)
    }

    fn search_by_id(&mut self) -> Result<()> {
        let input = self.prompt("\nEnter ID to search: ")?;
        let outcome = parse_id(&input).and_then(|id| self.api.view_record(id));
        if outcome.is_ok() {
            writeln!(self.out, "\nRecord found:")?;
        }
        self.report(outcome)
    }

    fn search_by_name(&mut self) -> Result<()> {
        let query = self.prompt("\nEnter name (or part of it) to search: ")?;
        let outcome = self.api.search_records(&query);
        if outcome.is_ok() {
            writeln!(self.out, "\nSearch results:")?;
        }
        self.report(outcome)
    }

    fn edit(&mut self) -> Result<()> {
        let input = self.prompt("\nEnter ID to edit: ")?;
        let current = match parse_id(&input).and_then(|id| self.api.view_record(id)) {
            Ok(result) => match result.listed_records.into_iter().next() {
                Some(record) => record,
                None => return Ok(()),
            },
            Err(e) => return self.report(Err(e)),
        };

        writeln!(
            self.out,
            "\nEditing record (leave blank to keep current value)"
        )?;
        writeln!(self.out, "Current name: {}", current.name)?;
        let name = self.prompt("New name: ")?;
        writeln!(self.out, "Current age: {}", current.age)?;
        let age = self.prompt("New age: ")?;
        writeln!(self.out, "Current address: {}", current.address)?;
        let address = self.prompt("New address: ")?;
        writeln!(self.out, "Current need: {}", current.need)?;
        let need = self.prompt("New need: ")?;
        writeln!(self.out, "Current contact: {}", current.contact)?;
        let contact = self.prompt("New contact: ")?;

        let age = if age.trim().is_empty() {
            Ok(None)
        } else {
            parse_age(&age).map(Some)
        };
        let outcome = age.and_then(|age| {
            let patch = RecordPatch {
                name: Some(name),
                age,
                address: Some(address),
                need: Some(need),
                contact: Some(contact),
            };
            self.api.update_record(current.id, &patch)
        });
        self.report(outcome)
    }

    fn delete(&mut self) -> Result<()> {
        let input = self.prompt("\nEnter ID to delete: ")?;
        let outcome = parse_id(&input).and_then(|id| self.api.delete_record(id));
        self.report(outcome)
    }

    /// Returns false when the save on exit failed and the menu should resume.
    fn exit(&mut self) -> Result<bool> {
        let save = match self.save_on_exit {
            SaveOnExit::Always => true,
            SaveOnExit::Never => false,
            SaveOnExit::Ask if !self.api.is_dirty() => false,
            SaveOnExit::Ask => {
                let answer = self.prompt("Do you want to save before exit? (y/n): ")?;
                answer.trim_start().starts_with(['y', 'Y'])
            }
        };
        if save {
            let outcome = self.api.save();
            let failed = outcome.is_err();
            self.report(outcome)?;
            if failed {
                writeln!(self.out, "Records were not saved. Returning to the menu.")?;
                return Ok(false);
            }
        }
        writeln!(self.out, "Goodbye!")?;
        Ok(true)
    }

    /// Prints records and messages on success, the error text on failure.
    fn report(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => {
                write!(self.out, "{}", render_records(&result.listed_records))?;
                write!(self.out, "{}", render_messages(&result.messages))?;
            }
            Err(e) => write!(self.out, "{}", render_error(&e))?,
        }
        Ok(())
    }

    /// Like `read_line`, but end of input reads as an empty answer.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        Ok(self.read_line(prompt)?.unwrap_or_default())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
