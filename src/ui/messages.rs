//! User-facing status lines.
//!
//! Colours are dropped when `NO_COLOR` is set so output stays greppable.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn colours_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn paint(colour: Colour, icon: &str) -> String {
    if colours_enabled() {
        Style::new().bold().fg(colour).paint(icon).to_string()
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", paint(Colour::Red, ICON_ERR), msg);
}

/// Section header, e.g. `=== September 2025 ===`
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("=== {} ===", msg);
    if colours_enabled() {
        println!("\n{}", Colour::Cyan.bold().paint(line));
    } else {
        println!("\n{}", line);
    }
}
