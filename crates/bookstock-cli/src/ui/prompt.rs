//! Line input for the interactive menu.
//!
//! A terminal gets dialoguer prompts; anything else (pipes, tests) is read
//! line by line so a scripted session behaves the same as a typed one.

use std::io::{self, BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// Source of answers for the menu.
///
/// `Ok(None)` means input is exhausted and the session should end.
pub trait Prompter {
    /// Ask for one line of text. The answer is returned untrimmed.
    fn ask(&mut self, label: &str) -> anyhow::Result<Option<String>>;

    /// Ask a yes/no question. Anything but an explicit yes is a no.
    fn confirm(&mut self, label: &str) -> anyhow::Result<Option<bool>>;
}

/// Dialoguer-backed prompts for an interactive terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e)) if is_end_of_input(&e) => Ok(None),
            Err(e) => Err(anyhow::anyhow!("Failed to read input: {}", e)),
        }
    }

    fn confirm(&mut self, label: &str) -> anyhow::Result<Option<bool>> {
        Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(false)
            .interact_opt()
            .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
    }
}

fn is_end_of_input(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}

/// Plain line-based prompts over any reader/writer pair.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        self.read_line(label)
    }

    fn confirm(&mut self, label: &str) -> anyhow::Result<Option<bool>> {
        let answer = self.read_line(&format!("{} [y/N]", label))?;
        Ok(answer.map(|value| is_yes(&value)))
    }
}

/// Accepts English and Spanish affirmatives.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> LinePrompter<&[u8], Vec<u8>> {
        LinePrompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_ask_reads_lines_in_order() {
        let mut p = prompter("1\r\nEmma\n");
        assert_eq!(p.ask("ID").unwrap().as_deref(), Some("1"));
        assert_eq!(p.ask("Title").unwrap().as_deref(), Some("Emma"));
        assert_eq!(p.ask("Author").unwrap(), None);
        let written = String::from_utf8(p.output).unwrap();
        assert!(written.starts_with("ID: Title: Author: "));
    }

    #[test]
    fn test_ask_keeps_inner_whitespace() {
        let mut p = prompter("  padded  \n");
        assert_eq!(p.ask("Term").unwrap().as_deref(), Some("  padded  "));
    }

    #[test]
    fn test_confirm_answers() {
        let mut p = prompter("y\nno\n\nSí\n");
        assert_eq!(p.confirm("Remove?").unwrap(), Some(true));
        assert_eq!(p.confirm("Remove?").unwrap(), Some(false));
        assert_eq!(p.confirm("Remove?").unwrap(), Some(false));
        assert_eq!(p.confirm("Remove?").unwrap(), Some(true));
        assert_eq!(p.confirm("Remove?").unwrap(), None);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes(" YES "));
        assert!(is_yes("s"));
        assert!(!is_yes("maybe"));
    }
}
