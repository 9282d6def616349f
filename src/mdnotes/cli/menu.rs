//! The interactive menu started when no subcommand is given.
//!
//! Reads from any `BufRead` and writes to any `Write`, so the whole loop can
//! be driven from a byte buffer. End of input behaves like choosing Exit.
//! Errors from a single action are printed and the loop goes on.

use super::commands::{edit_with_editor, write_result, AppContext};
use super::print::{print_error, print_notes};
use super::styles::{PROMPT, TITLE};
use mdnotes::api::ViewFormat;
use mdnotes::error::{NoteError, Result};
use mdnotes::search::SearchMode;
use std::io::{BufRead, Write};

/// Line that ends multi-line content input.
const END_MARKER: &str = "END";

pub struct Menu<'a, R: BufRead, W: Write> {
    ctx: &'a mut AppContext,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(ctx: &'a mut AppContext, input: R, out: W) -> Self {
        Self { ctx, input, out }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            self.print_main_menu()?;
            let Some(choice) = self.prompt("\nSelect an option (1-6): ")? else {
                writeln!(self.out)?;
                return Ok(());
            };

            let outcome = match choice.as_str() {
                "1" => self.create(),
                "2" => self.view(),
                "3" => self.edit(),
                "4" => self.list(),
                "5" => self.search(),
                "6" => {
                    writeln!(self.out, "Exiting")?;
                    return Ok(());
                }
                _ => {
                    writeln!(
                        self.out,
                        "Invalid choice. Please select a valid option (1-6)."
                    )?;
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                print_error(&mut self.out, &e)?;
            }
        }
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", TITLE.apply_to("Markdown Note Manager"))?;
        writeln!(self.out, "=====================")?;
        writeln!(self.out, "1. Create a new note")?;
        writeln!(self.out, "2. View a note")?;
        writeln!(self.out, "3. Edit a note")?;
        writeln!(self.out, "4. List all notes")?;
        writeln!(self.out, "5. Search notes")?;
        writeln!(self.out, "6. Exit")?;
        Ok(())
    }

    fn create(&mut self) -> Result<()> {
        let title = loop {
            let Some(title) = self.prompt("Enter note title: ")? else {
                return Ok(());
            };
            if !title.is_empty() {
                break title;
            }
            print_error(&mut self.out, &NoteError::EmptyTitle)?;
        };

        let content =
            self.read_content("Enter note content (type 'END' on a new line to finish):")?;
        let result = self.ctx.api.create_note(&title, &content)?;
        write_result(&mut self.out, &result)?;
        Ok(())
    }

    fn view(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter note title to read: ")? else {
            return Ok(());
        };
        let result = self.ctx.api.view_note(&title, ViewFormat::Raw)?;
        write_result(&mut self.out, &result)?;
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        writeln!(self.out, "1. Edit note inline")?;
        writeln!(self.out, "2. Edit note with editor")?;
        let Some(choice) = self.prompt("\nSelect an option (1-2): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(title) = self.prompt("Enter note title to edit inline: ")? else {
                    return Ok(());
                };
                let current = self.ctx.api.note_body(&title)?;
                writeln!(self.out, "Current Content:")?;
                writeln!(self.out, "{}", current)?;

                let content = self.read_content(
                    "Enter new content for the note (type 'END' on a new line to finish):",
                )?;
                let result = self.ctx.api.edit_note(&title, &content)?;
                write_result(&mut self.out, &result)?;
            }
            "2" => {
                let Some(title) = self.prompt("Enter note title to edit with editor: ")? else {
                    return Ok(());
                };
                let result = edit_with_editor(self.ctx, &title)?;
                write_result(&mut self.out, &result)?;
            }
            _ => writeln!(
                self.out,
                "Invalid choice. Please select a valid option (1-2)."
            )?,
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let result = self.ctx.api.list_notes()?;
        if !result.listed_notes.is_empty() {
            writeln!(self.out, "\nYour Notes:")?;
        }
        print_notes(&mut self.out, &result.listed_notes)?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.out, "1. Search for note title")?;
        writeln!(self.out, "2. Search for note content")?;
        let Some(choice) = self.prompt("\nSelect an option (1-2): ")? else {
            return Ok(());
        };

        let (mode, question) = match choice.as_str() {
            "1" => (SearchMode::Title, "Enter note title to search: "),
            "2" => (SearchMode::Content, "Enter note content to search: "),
            _ => {
                writeln!(
                    self.out,
                    "Invalid choice. Please select a valid option (1-2)."
                )?;
                return Ok(());
            }
        };
        let Some(query) = self.prompt(question)? else {
            return Ok(());
        };

        writeln!(
            self.out,
            "Searching for notes with {} containing '{}':",
            mode, query
        )?;
        let result = self.ctx.api.search_notes(mode, &query)?;
        write_result(&mut self.out, &result)?;
        Ok(())
    }

    /// Prints `question` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.out, "{}", PROMPT.apply_to(question))?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads lines up to a line reading `END` (or end of input). Lines are
    /// kept verbatim, line endings included.
    fn read_content(&mut self, header: &str) -> Result<String> {
        writeln!(self.out, "{}", header)?;
        self.out.flush()?;

        let mut content = String::new();
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim() == END_MARKER {
                break;
            }
            content.push_str(&line);
        }
        Ok(content)
    }
}
