//! Interactive menu loop
//!
//! Reads a numbered choice, prompts for the arguments of that operation and
//! prints the outcome. Non-fatal errors are shown to the operator and the
//! loop continues; storage failures end the session.

pub mod choice;
pub mod render;

use std::io::{BufRead, Write};

pub use choice::MenuChoice;

use crate::{
    error::{AppError, AppResult},
    models::{CreateBook, Listing, TransactionAction},
    services::Library,
};

/// Whether the loop should keep going after an entry was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu over any line source and output sink
#[derive(Debug)]
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the operator exits or input ends
    pub fn run(&mut self, library: &mut Library) -> AppResult<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.prompt("Enter choice: ")? else {
                tracing::debug!("Input closed, leaving menu");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(choice) => {
                    tracing::debug!("Menu choice: {}", choice);
                    self.dispatch(choice, library)?
                }
                None => {
                    writeln!(self.output, "Invalid choice!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n=== Library Menu ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, library: &mut Library) -> AppResult<Flow> {
        match choice {
            MenuChoice::AddUser => self.add_user(library),
            MenuChoice::AddBook => self.add_book(library),
            MenuChoice::ShowBooks => self.show_books(library),
            MenuChoice::BorrowBook => self.borrow_book(library),
            MenuChoice::ReturnBook => self.return_book(library),
            MenuChoice::ShowTransactions => self.show_transactions(library),
            MenuChoice::Exit => {
                writeln!(self.output, "Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add_user(&mut self, library: &mut Library) -> AppResult<Flow> {
        let Some(user_id) = self.prompt("Enter User ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.prompt("Enter User Name: ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = library
            .register_user(&user_id, &name)
            .map(|user| format!("User '{}' added successfully.", user.name));
        self.report(outcome)
    }

    fn add_book(&mut self, library: &mut Library) -> AppResult<Flow> {
        let mut fields = Vec::with_capacity(5);
        for label in [
            "Enter Book Title: ",
            "Enter Author Name: ",
            "Enter Subject: ",
            "Enter ISBN: ",
            "Enter Quantity: ",
        ] {
            match self.prompt(label)? {
                Some(value) => fields.push(value),
                None => return Ok(Flow::Exit),
            }
        }
        let mut fields = fields.into_iter();
        let request = CreateBook {
            title: fields.next().unwrap_or_default(),
            author: fields.next().unwrap_or_default(),
            subject: fields.next().unwrap_or_default(),
            isbn: fields.next().unwrap_or_default(),
            quantity: fields.next().unwrap_or_default(),
        };

        let outcome = library
            .add_book(request)
            .map(|book| format!("Book '{}' added successfully.", book.title));
        self.report(outcome)
    }

    fn show_books(&mut self, library: &Library) -> AppResult<Flow> {
        match library.list_books() {
            Listing::Empty => writeln!(self.output, "No books available.")?,
            Listing::Rows(books) => {
                writeln!(self.output, "\nAvailable Books:")?;
                for book in books {
                    writeln!(self.output, "{}", render::book_line(book))?;
                }
                writeln!(self.output)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn borrow_book(&mut self, library: &mut Library) -> AppResult<Flow> {
        let Some(title) = self.prompt("Enter Book Title to Borrow: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(user_id) = self.prompt("Enter Your User ID: ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = library
            .borrow_book(&title, &user_id)
            .map(|receipt| render::receipt_line(&receipt, TransactionAction::Borrowed));
        self.report(outcome)
    }

    fn return_book(&mut self, library: &mut Library) -> AppResult<Flow> {
        let Some(title) = self.prompt("Enter Book Title to Return: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(user_id) = self.prompt("Enter Your User ID: ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = library
            .return_book(&title, &user_id)
            .map(|receipt| render::receipt_line(&receipt, TransactionAction::Returned));
        self.report(outcome)
    }

    fn show_transactions(&mut self, library: &Library) -> AppResult<Flow> {
        match library.list_transactions() {
            Listing::Empty => writeln!(self.output, "No transactions yet.")?,
            Listing::Rows(entries) => {
                writeln!(self.output, "\nTransaction History:")?;
                for entry in entries {
                    writeln!(self.output, "{}", render::transaction_line(entry))?;
                }
                writeln!(self.output)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Print the success line or the operator message; fatal errors bubble up
    fn report(&mut self, outcome: AppResult<String>) -> AppResult<Flow> {
        match outcome {
            Ok(message) => writeln!(self.output, "{}", message)?,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::debug!("Operation refused: {} (code {:?})", e, e.code());
                writeln!(self.output, "{}", e.operator_message())?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Show `label` and read one line without its line ending.
    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(AppError::Io)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
