// Styled demo output and the two label languages.
use crate::config::DemoConfig;
use crate::error::{ConfigError, DemoError};
use colored::Colorize;
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "ko", alias = "korean")]
    Korean,
}

impl Locale {
    /// Maps a POSIX locale name such as `ko_KR.UTF-8` to a label language.
    pub fn from_system(name: &str) -> Self {
        if name.to_ascii_lowercase().starts_with("ko") {
            Locale::Korean
        } else {
            Locale::English
        }
    }

    /// Picks the label for this locale.
    pub fn pick<'a>(self, english: &'a str, korean: &'a str) -> &'a str {
        match self {
            Locale::English => english,
            Locale::Korean => korean,
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ko" | "korean" => Ok(Locale::Korean),
            other => Err(ConfigError::invalid_value(
                "locale",
                format!("unknown locale '{other}', expected 'en' or 'ko'"),
            )),
        }
    }
}

/// Formats a captured address the way `%p` does.
pub fn address(addr: usize) -> String {
    format!("{addr:#x}")
}

pub struct Console<W: Write> {
    out: W,
    locale: Locale,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, config: &DemoConfig) -> Self {
        Console {
            out,
            locale: config.locale,
            color: config.color,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        let banner = format!("=== {title} ===");
        if self.color {
            writeln!(self.out, "{}", banner.bold().cyan())
        } else {
            writeln!(self.out, "{banner}")
        }
    }

    pub fn line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        writeln!(self.out, "{args}")
    }

    /// A dimmed side remark, e.g. which addresses must not be dereferenced.
    pub fn note(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.dimmed())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Writes the failure diagnostic the binaries print before exiting with status 1.
pub fn report_failure<E: Write>(err: &mut E, error: &DemoError, color: bool) -> io::Result<()> {
    let message = format!("error: {error}");
    if color {
        writeln!(err, "{}", message.red().bold())
    } else {
        writeln!(err, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(locale: Locale) -> DemoConfig {
        DemoConfig {
            locale,
            color: false,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn test_locale_from_system() {
        assert_eq!(Locale::from_system("ko_KR.UTF-8"), Locale::Korean);
        assert_eq!(Locale::from_system("KO"), Locale::Korean);
        assert_eq!(Locale::from_system("en_US.UTF-8"), Locale::English);
        assert_eq!(Locale::from_system("C"), Locale::English);
        assert_eq!(Locale::from_system(""), Locale::English);
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("ko".parse::<Locale>().unwrap(), Locale::Korean);
        assert_eq!(" English ".parse::<Locale>().unwrap(), Locale::English);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_pick() {
        assert_eq!(Locale::English.pick("address", "주소"), "address");
        assert_eq!(Locale::Korean.pick("address", "주소"), "주소");
    }

    #[test]
    fn test_address_format() {
        assert_eq!(address(0x7ffe_1234), "0x7ffe1234");
        assert_eq!(address(0), "0x0");
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let mut console = Console::new(Vec::new(), &plain(Locale::English));
        console.heading("Title").unwrap();
        console.line(format_args!("value = {}", 42)).unwrap();
        console.note("remark").unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, "=== Title ===\nvalue = 42\nremark\n");
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_console_reports_locale() {
        let console = Console::new(Vec::new(), &plain(Locale::Korean));
        assert_eq!(console.locale(), Locale::Korean);
    }

    #[test]
    fn test_report_failure_plain() {
        let mut err = Vec::new();
        report_failure(&mut err, &DemoError::ResourceExhausted { elements: 5 }, false).unwrap();
        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("error: memory allocation failed"));
    }
}
