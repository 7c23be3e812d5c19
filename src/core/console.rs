//! Interactive console loop: ask for hours, record them, show totals.

use crate::core::policy::HoursPolicy;
use crate::core::store::RecordStore;
use crate::db::backend::RecordBackend;
use crate::errors::AppResult;
use crate::models::timestamp::{format_for_db, now_local};
use crate::ui::messages::{Level, render};
use crate::utils::formatting::{hours_label, records_table};
use std::io::{BufRead, Write};

const HOURS_PROMPT: &str = "Enter today's working hours and press enter: ";
const TABLE_PROMPT: &str = "Do you want to see the working hours table? (yes/no): ";
const CONTINUE_PROMPT: &str = "Do you want to continue? (yes/no): ";

pub struct ConsoleSession<'a, B: RecordBackend, R: BufRead, W: Write> {
    store: &'a RecordStore<B>,
    policy: HoursPolicy,
    date_format: String,
    separator: char,
    input: R,
    output: W,
}

/// What happened during a session.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    pub recorded: usize,
    pub failed: usize,
}

impl<'a, B: RecordBackend, R: BufRead, W: Write> ConsoleSession<'a, B, R, W> {
    pub fn new(store: &'a RecordStore<B>, policy: HoursPolicy, input: R, output: W) -> Self {
        Self {
            store,
            policy,
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            separator: '-',
            input,
            output,
        }
    }

    pub fn with_table_style(mut self, date_format: &str, separator: char) -> Self {
        self.date_format = date_format.to_string();
        self.separator = separator;
        self
    }

    /// Run until the user declines to continue or input ends.
    pub fn run(&mut self) -> AppResult<SessionOutcome> {
        let mut outcome = SessionOutcome::default();

        loop {
            let Some(hours) = self.read_hours()? else {
                break;
            };

            let now = now_local();
            if self.store.insert(now, hours) {
                outcome.recorded += 1;
                writeln!(
                    self.output,
                    "Recorded {} at {}",
                    hours_label(hours),
                    format_for_db(&now)
                )?;
            } else {
                outcome.failed += 1;
                writeln!(
                    self.output,
                    "{}",
                    render(Level::Error, "Failed to add record, please try again")
                )?;
            }

            let records = self.store.list_all();
            let summary = self.store.aggregate();
            writeln!(
                self.output,
                "Your total records are {} and total hours are {}",
                records.len(),
                summary.total
            )?;

            match self.ask(TABLE_PROMPT)? {
                Some(a) if a == "yes" => {
                    if records.is_empty() {
                        writeln!(self.output, "No records found.")?;
                    } else {
                        let table = records_table(&records, &self.date_format, self.separator);
                        write!(self.output, "{}", table)?;
                    }
                }
                Some(_) => {}
                None => break,
            }

            match self.ask(CONTINUE_PROMPT)? {
                Some(a) if a == "yes" => continue,
                _ => break,
            }
        }

        Ok(outcome)
    }

    /// Prompt until a valid value is entered. `None` at end of input.
    fn read_hours(&mut self) -> AppResult<Option<i64>> {
        loop {
            let Some(line) = self.ask(HOURS_PROMPT)? else {
                return Ok(None);
            };

            match self.policy.parse_and_check(&line) {
                Ok(h) => return Ok(Some(h)),
                Err(e) => {
                    writeln!(self.output, "{}", render(Level::Warning, e))?;
                }
            }
        }
    }

    /// Print `prompt`, read one line, lowercase and trim it.
    fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}
