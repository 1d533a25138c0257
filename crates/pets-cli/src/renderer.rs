//! Terminal output for the pets CLI
//!
//! Markdown produced by the core display types is rendered through termimad
//! when colors are enabled, printed as-is otherwise. `--json` bypasses the
//! markdown entirely and prints the underlying data.

use std::fmt::Display;

use anyhow::Result;
use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

/// How command results reach stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Rich,
    Plain,
    Json,
}

impl OutputFormat {
    /// `--json` wins over `--no-color`.
    pub fn from_flags(no_color: bool, json: bool) -> Self {
        match (json, no_color) {
            (true, _) => OutputFormat::Json,
            (false, true) => OutputFormat::Plain,
            (false, false) => OutputFormat::Rich,
        }
    }
}

pub struct TerminalRenderer {
    format: OutputFormat,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(format: OutputFormat) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { format, skin }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Prints `markdown`, or `data` as JSON when JSON output was requested.
    pub fn emit<D, S>(&self, markdown: &D, data: &S) -> Result<()>
    where
        D: Display + ?Sized,
        S: Serialize + ?Sized,
    {
        match self.format {
            OutputFormat::Json => println!("{}", to_json(data)?),
            OutputFormat::Plain => print!("{markdown}"),
            OutputFormat::Rich => self.render_markdown(&markdown.to_string()),
        }
        Ok(())
    }

    fn render_markdown(&self, markdown: &str) {
        // Headers keep their hash marks so ids stay visible.
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }
}

fn to_json<S: Serialize + ?Sized>(data: &S) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
