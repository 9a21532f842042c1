use chrono::{Local, NaiveDate};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::book::AddressBook;
use crate::error::AbookError;

pub struct CLIContext {
    pub book: AddressBook,
    pub path: PathBuf,
}

impl CLIContext {
    pub fn new(book: AddressBook, path: PathBuf) -> Self {
        Self { book, path }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Render a date the way the report reads aloud, e.g. "Monday, June 17".
    pub fn format_date(date: NaiveDate) -> String {
        date.format("%A, %B %d").to_string()
    }

    /// Print an error.
    pub fn print_error(&self, e: &AbookError) {
        println!("Error: {}", e);
    }
}
