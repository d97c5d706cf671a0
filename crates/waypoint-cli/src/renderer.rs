//! Terminal rendering of Markdown output.
//!
//! Rich mode styles inline Markdown with termimad and colors headings;
//! plain mode prints the Markdown unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADING_COLOR: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes visible so day headings stay recognizable
                println!("{HEADING_COLOR}{line}{RESET}");
            } else if line == "---" {
                println!("{}", "─".repeat(40));
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
