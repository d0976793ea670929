//! Terminal prompting with per-prompt retry policies.
//!
//! [`Prompter`] is the session's I/O context. It owns the input and output
//! streams, so tests can swap the terminal for in-memory buffers.

use std::io::{BufRead, Write};

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::input::{is_port, parse_confirmation, parse_key_value, parse_path_pair, split_list};

/// Reads answers from `R` and writes prompts to `W`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use composegen::Prompter;
///
/// let mut prompter = Prompter::new(Cursor::new("\nweb\n"), Vec::new());
/// assert_eq!(prompter.required_text("Service name:").unwrap(), "web");
/// ```
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Writes an error line. Used for rejected answers before asking again.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    pub fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "Error: {message}")?;
        Ok(())
    }

    /// Shows `prompt` and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Asks until a non-empty answer is given.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal fails.
    pub fn required_text(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.complain("this field is required, please try again")?;
        }
    }

    /// Asks once; a blank answer means "not set".
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal fails.
    pub fn optional_text(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.ask(prompt)?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    /// Asks for a comma-separated list. A blank answer is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal fails.
    pub fn list(&mut self, prompt: &str) -> Result<Vec<String>> {
        let answer = self.ask(prompt)?;
        Ok(split_list(&answer))
    }

    /// Asks for a port number. A blank answer returns `None`.
    ///
    /// Anything other than blank or digits is rejected and asked again.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal fails.
    pub fn port(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }
            if is_port(&answer) {
                return Ok(Some(answer));
            }
            self.complain("please enter a valid port number")?;
        }
    }

    /// Asks a yes/no question until it gets `y`, `yes`, `n` or `no`.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal fails.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let prompt = format!("{prompt} [y/n]:");
        loop {
            let answer = self.ask(&prompt)?;
            if let Some(yes) = parse_confirmation(&answer) {
                return Ok(yes);
            }
            self.complain("please enter y or n")?;
        }
    }

    /// Reads `KEY=VALUE` lines until a blank line.
    ///
    /// Later duplicates overwrite earlier ones but keep the first position.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal fails.
    pub fn key_value_pairs(&mut self, intro: &str) -> Result<IndexMap<String, String>> {
        self.say(intro)?;

        let mut pairs = IndexMap::new();
        loop {
            let line = self.ask("  >")?;
            if line.is_empty() {
                return Ok(pairs);
            }
            match parse_key_value(&line) {
                Ok((key, value)) => {
                    pairs.insert(key, value);
                }
                Err(e) => self.complain(&e.to_string())?,
            }
        }
    }

    /// Reads `host:container` lines until a blank line, keeping them verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or the terminal fails.
    pub fn path_pairs(&mut self, intro: &str) -> Result<Vec<String>> {
        self.say(intro)?;

        let mut pairs = Vec::new();
        loop {
            let line = self.ask("  >")?;
            if line.is_empty() {
                return Ok(pairs);
            }
            match parse_path_pair(&line) {
                Ok(pair) => pairs.push(pair),
                Err(e) => self.complain(&e.to_string())?,
            }
        }
    }
}
