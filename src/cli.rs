//! Provides parsing and validation of command line arguments, and runs the
//! requested comparison or compatibility check

use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches, Command};
use itertools::Itertools;
use tracing::{event, Level};

use vercmp::{
    compare,
    compat::{self, parse_overrides},
    models::{Application, CompatCheck, Version, VersionRange},
};

mod reporter;

pub use reporter::{Reporter, Verbosity};

/// Fallback for `check --app-version`
const APP_VERSION_ENV: &str = "VERCMP_APP_VERSION";

pub struct CLI {
    matches: ArgMatches,
}

impl CLI {
    pub fn init() -> Result<CLI> {
        let matches = get_cli_definition().get_matches();
        let cli = CLI { matches };

        Ok(cli)
    }

    pub fn get_verbosity_level(&self) -> Result<Verbosity> {
        let debug = self.matches.get_flag("debug");
        let verbose = self.matches.get_flag("verbose");
        let quiet = self.matches.get_flag("quiet");

        if (debug as usize + verbose as usize + quiet as usize) > 1 {
            return Err(anyhow!(
                "Only one of --debug, --verbose, or --quiet can be used at a time"
            ));
        }

        if debug {
            Ok(Verbosity::Debug)
        } else if verbose {
            Ok(Verbosity::Verbose)
        } else if quiet {
            Ok(Verbosity::Quiet)
        } else {
            Ok(Verbosity::Default)
        }
    }

    pub fn run(&self) -> Result<ExitCode> {
        let reporter = Reporter::new(self.get_verbosity_level()?);

        match self.matches.subcommand() {
            Some(("compare", m)) => {
                let a = required(m, "a")?;
                let b = required(m, "b")?;
                reporter.comparison(a, b, compare(a, b), m.get_flag("explain"));
                Ok(ExitCode::SUCCESS)
            }
            Some(("sort", m)) => {
                reporter.sorted(&get_sorted(m));
                Ok(ExitCode::SUCCESS)
            }
            Some(("within", m)) => {
                let version = Version::new(required(m, "version")?);
                let range = VersionRange::new(required(m, "min")?, required(m, "max")?);
                let contained = range.contains(&version);
                reporter.within(&version, &range, contained);
                Ok(exit_code(contained))
            }
            Some(("check", m)) => {
                let check = get_compat_check(m)?;
                let report = compat::check(&check);
                if m.get_flag("json") {
                    reporter.json(&report)?;
                } else {
                    reporter.compat(&check, &report);
                }
                Ok(exit_code(report.compatible))
            }
            Some((name, _)) => Err(anyhow!("Unknown command: {}", name)),
            None => Err(anyhow!("No command given")),
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("Missing argument: {}", id))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Equal versions keep their input order, in either direction
fn get_sorted(matches: &ArgMatches) -> Vec<Version> {
    let versions = matches
        .get_many::<String>("versions")
        .into_iter()
        .flatten()
        .map(|v| Version::new(v));

    if matches.get_flag("reverse") {
        versions.sorted_by(|a, b| b.cmp(a)).collect()
    } else {
        versions.sorted().collect()
    }
}

fn get_compat_check(matches: &ArgMatches) -> Result<CompatCheck> {
    let app = match matches.get_one::<String>("app") {
        Some(name) => name
            .parse::<Application>()
            .map_err(|_| anyhow!("Unknown application: {}", name))?,
        None => Application::Firefox,
    };

    let app_version = match matches.get_one::<String>("app_version") {
        Some(v) => v.clone(),
        None => match std::env::var(APP_VERSION_ENV) {
            Ok(v) => v,
            Err(_) => {
                return Err(anyhow!(
                    "No --app-version provided and no {} environment variable set",
                    APP_VERSION_ENV
                ));
            }
        },
    };

    let range = match (matches.get_one::<String>("min"), matches.get_one::<String>("max")) {
        (Some(min), Some(max)) => Some(VersionRange::new(min.as_str(), max.as_str())),
        (None, None) => None,
        _ => return Err(anyhow!("--min and --max must be given together")),
    };

    let overrides = match matches.get_one::<String>("overrides") {
        Some(json) => parse_overrides(json)?,
        None => Vec::new(),
    };

    event!(Level::DEBUG, "Checking {} {} against {:?}", app, app_version, range);

    Ok(CompatCheck {
        app,
        app_version: app_version.into(),
        range,
        compatible_by_default: matches.get_flag("compatible_by_default"),
        compatible_app: matches.get_flag("compatible_app"),
        overrides,
        d2c_enabled: !matches.get_flag("no_d2c"),
    })
}

fn get_cli_definition() -> Command {
    Command::new("vercmp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compares Mozilla toolkit version strings and checks add-on compatibility")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue)
                .short('v')
                .long("verbose"),
        )
        .arg(
            Arg::new("quiet")
                .help("Suppress diagnostic output")
                .action(clap::ArgAction::SetTrue)
                .short('q')
                .long("quiet"),
        )
        .arg(
            Arg::new("debug")
                .help("Enable debug output")
                .action(clap::ArgAction::SetTrue)
                .short('d')
                .long("debug"),
        )
        .subcommand(
            Command::new("compare")
                .about("Prints -1, 0 or 1 as A is older than, equal to or newer than B")
                .arg(Arg::new("a").required(true).index(1))
                .arg(Arg::new("b").required(true).index(2))
                .arg(
                    Arg::new("explain")
                        .help("Print the relation instead of a number")
                        .action(clap::ArgAction::SetTrue)
                        .short('e')
                        .long("explain"),
                ),
        )
        .subcommand(
            Command::new("sort")
                .about("Prints versions oldest first")
                .arg(
                    Arg::new("versions")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(
                    Arg::new("reverse")
                        .help("Newest first")
                        .action(clap::ArgAction::SetTrue)
                        .short('r')
                        .long("reverse"),
                ),
        )
        .subcommand(
            Command::new("within")
                .about("Checks that a version lies in an inclusive range, exits 1 if not")
                .arg(Arg::new("version").required(true).index(1))
                .arg(Arg::new("min").required(true).index(2))
                .arg(Arg::new("max").required(true).index(3)),
        )
        .subcommand(
            Command::new("check")
                .about("Decides whether an add-on can be installed, exits 1 if not")
                .arg(
                    Arg::new("app")
                        .help("The application the add-on is installed into")
                        .long("app")
                        .value_parser(["firefox", "mobile", "seamonkey", "thunderbird"])
                        .default_value("firefox"),
                )
                .arg(
                    Arg::new("app_version")
                        .help("Version of the application, defaults to $VERCMP_APP_VERSION")
                        .long("app-version")
                        .value_name("VERSION")
                        .num_args(1),
                )
                .arg(
                    Arg::new("min")
                        .help("Lowest application version the add-on supports")
                        .long("min")
                        .value_name("VERSION")
                        .num_args(1),
                )
                .arg(
                    Arg::new("max")
                        .help("Highest application version the add-on supports")
                        .long("max")
                        .value_name("VERSION")
                        .num_args(1),
                )
                .arg(
                    Arg::new("compatible_by_default")
                        .help("The add-on is compatible by default")
                        .action(clap::ArgAction::SetTrue)
                        .long("compatible-by-default"),
                )
                .arg(
                    Arg::new("compatible_app")
                        .help("The add-on has been updated for default-to-compatible")
                        .action(clap::ArgAction::SetTrue)
                        .long("compatible-app"),
                )
                .arg(
                    Arg::new("overrides")
                        .help("Version ranges marked incompatible, as JSON")
                        .long("overrides")
                        .value_name("[[MIN, MAX], ...]")
                        .num_args(1),
                )
                .arg(
                    Arg::new("no_d2c")
                        .help("Ignore default-to-compatible")
                        .action(clap::ArgAction::SetTrue)
                        .long("no-d2c"),
                )
                .arg(
                    Arg::new("json")
                        .help("Print the report as JSON")
                        .action(clap::ArgAction::SetTrue)
                        .long("json"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        get_cli_definition().try_get_matches_from(args).unwrap()
    }

    fn sub<'a>(matches: &'a ArgMatches, name: &str) -> &'a ArgMatches {
        matches.subcommand_matches(name).unwrap()
    }

    #[test]
    fn test_verbosity_conflict() {
        let cli = CLI { matches: matches(&["vercmp", "-v", "-q", "compare", "1", "2"]) };
        assert!(cli.get_verbosity_level().is_err());

        let cli = CLI { matches: matches(&["vercmp", "-d", "compare", "1", "2"]) };
        assert_eq!(cli.get_verbosity_level().unwrap(), Verbosity::Debug);
    }

    #[test]
    fn test_sorted() {
        let m = matches(&["vercmp", "sort", "2.0", "1.0+", "2.0b1", "1.0", "*", "1.0.0"]);
        let sorted: Vec<String> = get_sorted(sub(&m, "sort")).iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, vec!["1.0", "1.0.0", "1.0+", "2.0b1", "2.0", "*"]);

        let m = matches(&["vercmp", "sort", "-r", "1.0", "2.0", "1"]);
        let sorted: Vec<String> = get_sorted(sub(&m, "sort")).iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, vec!["2.0", "1.0", "1"]);
    }

    #[test]
    fn test_compat_check_options() {
        let m = matches(&[
            "vercmp", "check",
            "--app", "thunderbird",
            "--app-version", "12.0",
            "--min", "5.0",
            "--max", "13.*",
            "--compatible-by-default",
            "--overrides", r#"[["11.0", "11.*"]]"#,
        ]);
        let check = get_compat_check(sub(&m, "check")).unwrap();

        assert_eq!(check.app, Application::Thunderbird);
        assert_eq!(check.app_version.as_str(), "12.0");
        assert_eq!(check.range, Some(VersionRange::new("5.0", "13.*")));
        assert!(check.compatible_by_default);
        assert!(!check.compatible_app);
        assert!(check.d2c_enabled);
        assert_eq!(check.overrides, vec![VersionRange::new("11.0", "11.*")]);
    }

    #[test]
    fn test_compat_check_rejects_half_range() {
        let m = matches(&["vercmp", "check", "--app-version", "12.0", "--min", "5.0"]);
        assert!(get_compat_check(sub(&m, "check")).is_err());
    }

    #[test]
    fn test_compat_check_rejects_bad_overrides() {
        let m = matches(&["vercmp", "check", "--app-version", "12.0", "--overrides", "[1, 2]"]);
        assert!(get_compat_check(sub(&m, "check")).is_err());
    }

    #[test]
    fn test_unknown_app_rejected_by_parser() {
        let result = get_cli_definition().try_get_matches_from(["vercmp", "check", "--app", "netscape"]);
        assert!(result.is_err());
    }
}
