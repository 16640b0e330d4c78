//! Line-oriented prompts and output.

use dialoguer::{Input, theme::SimpleTheme};
use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::Result;

/// Where menus are shown and answers are read from.
pub trait Terminal {
    /// Shows `text` followed by `": "` and reads one line.
    fn prompt(&mut self, text: &str) -> Result<String>;

    /// Prints a block of text followed by a newline.
    fn say(&mut self, text: &str);
}

/// Stdin/stdout terminal.
#[derive(Debug, Default)]
pub struct ConsoleTerminal;

impl Terminal for ConsoleTerminal {
    fn prompt(&mut self, text: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            let line = Input::<String>::with_theme(&SimpleTheme)
                .with_prompt(text)
                .allow_empty(true)
                .report(false)
                .interact_text()
                .map_err(io::Error::other)?;
            return Ok(line);
        }

        // Piped input: no line editing, just read what is there.
        let mut stdout = io::stdout();
        write!(stdout, "{}: ", text)?;
        stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }
}
