//! Markdown rendering for the terminal.
//!
//! Rich output goes through a termimad skin picked from the stored theme;
//! `--no-color` prints the markdown source unchanged.

use anyhow::Result;
use kinetic_core::theme::Theme;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool, theme: Theme) -> Self {
        let skin = match theme {
            Theme::Light => {
                let mut skin = MadSkin::default_light();
                skin.set_headers_fg(Color::DarkBlue);
                skin.bold.set_fg(Color::DarkMagenta);
                skin
            }
            Theme::Dark => {
                let mut skin = MadSkin::default_dark();
                skin.set_headers_fg(Color::Cyan);
                skin.bold.set_fg(Color::Yellow);
                skin
            }
        };

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Renders a single line, e.g. a carousel update.
    pub fn render_line(&self, line: &str) {
        if self.rich_enabled {
            self.skin.print_inline(line);
            println!();
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false, Theme::Dark);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Saved plans\n").is_ok());
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true, Theme::Light);
        assert!(renderer.rich_enabled);
    }
}
