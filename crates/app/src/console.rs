//! Line-oriented operator loop over an interview session.

use std::io::{self, BufRead, Write};

use interview_core::model::Category;
use services::{InterviewSession, SessionError, format_batch, format_counts, format_heading};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Draw(String),
    Reset(String),
    Counts,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(head, rest)| (head, rest.trim()));

        let command = match head.to_lowercase().as_str() {
            "e" => Command::Draw("easy".into()),
            "m" => Command::Draw("medium".into()),
            "h" => Command::Draw("hard".into()),
            "reset-e" => Command::Reset("easy".into()),
            "reset-m" => Command::Reset("medium".into()),
            "reset-h" => Command::Reset("hard".into()),
            "reset" => Command::Reset(rest.to_string()),
            "counts" => Command::Counts,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Draw(line.to_string()),
        };
        Some(command)
    }
}

/// Reads commands from `input` until it ends or the operator quits.
pub struct Console<'a> {
    session: &'a mut InterviewSession,
}

impl<'a> Console<'a> {
    #[must_use]
    pub fn new(session: &'a mut InterviewSession) -> Self {
        Self { session }
    }

    /// Run the loop.
    ///
    /// Session errors are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `input` or `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        self.print_help(&mut output)?;
        self.print_counts(&mut output)?;

        for line in input.lines() {
            let Some(command) = Command::parse(&line?) else {
                continue;
            };
            let result = match command {
                Command::Draw(label) => self.draw(&label, &mut output)?,
                Command::Reset(label) => self.reset(&label, &mut output)?,
                Command::Counts => {
                    self.print_counts(&mut output)?;
                    Ok(())
                }
                Command::Help => {
                    self.print_help(&mut output)?;
                    Ok(())
                }
                Command::Quit => break,
            };
            if let Err(err) = result {
                tracing::warn!(%err, "command failed");
                writeln!(output, "error: {err}")?;
            }
            output.flush()?;
        }
        Ok(())
    }

    fn draw(&mut self, label: &str, output: &mut impl Write) -> io::Result<Result<(), SessionError>> {
        let batch = match self.session.draw_label(label) {
            Ok(batch) => batch,
            Err(err) => return Ok(Err(err)),
        };

        writeln!(output, "{}", format_heading(batch.category))?;
        writeln!(output)?;
        if batch.is_empty() {
            writeln!(output, "No questions in this category.")?;
            writeln!(output)?;
        } else {
            write!(output, "{}", format_batch(&batch))?;
        }
        if !batch.consumed && !batch.is_empty() {
            writeln!(
                output,
                "Fewer than {} questions left; these stay available until you reset.",
                self.session.batch_size()
            )?;
        }
        self.print_counts(output)?;
        Ok(Ok(()))
    }

    fn reset(&mut self, label: &str, output: &mut impl Write) -> io::Result<Result<(), SessionError>> {
        if let Err(err) = self.session.reset_label(label) {
            return Ok(Err(err));
        }
        writeln!(output, "Reset {}.", label.trim().to_lowercase())?;
        self.print_counts(output)?;
        Ok(Ok(()))
    }

    fn print_counts(&self, output: &mut impl Write) -> io::Result<()> {
        let lines: Vec<String> = self
            .session
            .categories()
            .filter_map(|category| {
                self.session
                    .counts(category)
                    .ok()
                    .map(|counts| format_counts(category, counts))
            })
            .collect();
        writeln!(output, "{}", lines.join("   "))
    }

    fn print_help(&self, output: &mut impl Write) -> io::Result<()> {
        let names: Vec<&str> = self.session.categories().map(Category::as_str).collect();
        writeln!(output, "Commands:")?;
        writeln!(output, "  <category>        draw questions ({})", names.join(", "))?;
        writeln!(output, "  e | m | h         shortcuts for easy, medium, hard")?;
        writeln!(output, "  reset <category>  make a category's questions available again")?;
        writeln!(output, "  counts            show remaining/total per category")?;
        writeln!(output, "  help | quit")
    }
}
