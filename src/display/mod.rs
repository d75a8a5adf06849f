//! Terminal display module
//!
//! Prints Markdown listings with termimad styling on a terminal, plain
//! otherwise.

use std::io::IsTerminal;

use termimad::crossterm::style::{Attribute, Color};
use termimad::MadSkin;

/// Styled output unless NO_COLOR is set or stdout is redirected
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Print markdown to the terminal
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

fn skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.headers[1].set_fg(Color::Magenta);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.headers[2].set_fg(Color::Cyan);
    skin.bold.set_fg(Color::Yellow);
    skin.quote_mark.set_fg(Color::DarkGrey);
    skin.code_block.set_fg(Color::Green);
    skin.bullet.set_fg(Color::Cyan);

    skin
}
