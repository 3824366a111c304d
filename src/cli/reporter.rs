//! Renders comparison results and compatibility reports for the terminal
//!
//! Results which are the whole point of a command (an ordering, a sorted
//! list) are always printed. Commentary around them is dropped when quiet,
//! and compatibility reports can be emitted as JSON for scripts.
use std::cmp::Ordering;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use vercmp::models::{CompatCheck, CompatReport, Version, VersionRange};

/// Sets the noise level for a reporter
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq)]
pub enum Verbosity {
    Quiet,
    Default,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Log filter used when RUST_LOG isn't set
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Default => "warn",
            Verbosity::Verbose => "debug",
            Verbosity::Debug => "trace",
        }
    }
}

/// Output handle which keeps track of indentation for nested lines
#[derive(Clone)]
struct Out {
    idt: usize,
}

impl Out {
    fn new(idt: usize) -> Self {
        Self { idt }
    }

    fn indent(&mut self) {
        self.idt += 2
    }

    fn ln(&self, s: &str) {
        println!("{:indent$}{}", "", s, indent = self.idt);
    }
}

pub struct Reporter {
    v: Verbosity,
    out: Out,
}

impl Reporter {
    pub fn new(v: Verbosity) -> Self {
        Self { v, out: Out::new(0) }
    }

    pub fn comparison(&self, a: &str, b: &str, ordering: Ordering, explain: bool) {
        if explain {
            self.out.ln(&explain_ordering(a, b, ordering));
        } else {
            self.out.ln(&(ordering as i32).to_string());
        }
    }

    pub fn sorted(&self, versions: &[Version]) {
        for version in versions {
            self.out.ln(version.as_str());
        }
    }

    pub fn within(&self, version: &Version, range: &VersionRange, contained: bool) {
        if self.v == Verbosity::Quiet {
            return;
        }

        let verdict = if contained { "within".green().bold() } else { "outside".red().bold() };
        self.out.ln(&format!("{} is {} {}", version, verdict, range));
    }

    pub fn compat(&self, check: &CompatCheck, report: &CompatReport) {
        if self.v == Verbosity::Quiet {
            return;
        }

        let mut out = self.out.clone();
        out.ln(&format!("[ {} {} ]", check.app.pretty_name(), check.app_version));
        out.indent();

        if report.compatible {
            out.ln(&format!("{}", "Compatible".green().bold()));
        } else {
            out.ln(&format!("{}", "Not compatible".red().bold()));
        }

        if let Some(range) = &check.range {
            if report.older_app {
                out.ln(&format!("Add-on requires at least {}", range.min));
            }
            if report.newer_app {
                out.ln(&format!("Add-on was only tested up to {}", range.max));
            }
        } else {
            out.ln(&format!("Add-on does not support {}", check.app.pretty_name()));
        }

        if self.v >= Verbosity::Verbose {
            out.ln(&format!("Default-to-compatible: {}", bool_label(report.is_d2c)));
        }

        for reason in &report.reasons {
            out.ln(&format!("- {}", reason.describe(check.app).yellow()));
        }
    }

    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        self.out.ln(&serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

fn explain_ordering(a: &str, b: &str, ordering: Ordering) -> String {
    let (symbol, word) = match ordering {
        Ordering::Less => ("<", "older than".yellow()),
        Ordering::Equal => ("=", "equal to".green()),
        Ordering::Greater => (">", "newer than".cyan()),
    };

    format!("{} {} {}  ({} is {} {})", a.bold(), symbol, b.bold(), a, word, b)
}

fn bool_label(b: bool) -> ColoredString {
    if b {
        "yes".green()
    } else {
        "no".normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_ordering() {
        colored::control::set_override(false);

        assert_eq!(
            explain_ordering("2.0b1", "2.0", Ordering::Less),
            "2.0b1 < 2.0  (2.0b1 is older than 2.0)"
        );
        assert_eq!(
            explain_ordering("1.0+", "1.1pre", Ordering::Equal),
            "1.0+ = 1.1pre  (1.0+ is equal to 1.1pre)"
        );
    }

    #[test]
    fn test_verbosity_order() {
        assert!(Verbosity::Quiet < Verbosity::Default);
        assert!(Verbosity::Debug > Verbosity::Verbose);
        assert_eq!(Verbosity::Default.log_directive(), "warn");
    }
}
