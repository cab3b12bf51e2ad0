use std::fmt;

use anstyle::{AnsiColor, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Error => "ERROR",
        }
    }

    fn style(self) -> Style {
        let color = match self {
            Level::Info => AnsiColor::BrightBlue,
            Level::Success => AnsiColor::BrightGreen,
            Level::Error => AnsiColor::BrightRed,
        };
        Style::new().fg_color(Some(color.into()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a single `LEVEL: message` line, wrapped in the level's color when `color` is set.
pub fn format_line(level: Level, message: &str, color: bool) -> String {
    if !color {
        return format!("{level}: {message}");
    }
    let style = level.style();
    format!("{}{level}: {message}{}", style.render(), style.render_reset())
}

/// Leveled console writer. Errors go to stderr, everything else to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn log(&self, level: Level, message: &str) {
        let line = format_line(level, message, self.color);
        match level {
            Level::Error => eprintln!("{line}"),
            Level::Info | Level::Success => println!("{line}"),
        }
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.log(Level::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}
