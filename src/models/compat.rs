//! Inputs and outcome of an add-on compatibility check
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Version, VersionRange};

/// Applications add-ons can target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    Firefox,
    Mobile,
    SeaMonkey,
    Thunderbird,
}

impl Application {
    pub const ALL: [Application; 4] = [
        Application::Firefox,
        Application::Mobile,
        Application::SeaMonkey,
        Application::Thunderbird,
    ];

    /// The lowest maxVersion an add-on must declare before the
    /// application will treat it as compatible by default.
    pub fn d2c_max_version(&self) -> Version {
        Version::new(match self {
            Self::Firefox => "4.0",
            Self::Mobile => "11.0",
            Self::SeaMonkey => "2.1",
            Self::Thunderbird => "5.0",
        })
    }

    pub fn pretty_name(&self) -> &'static str {
        match self {
            Self::Firefox => "Firefox",
            Self::Mobile => "Firefox for Android",
            Self::SeaMonkey => "SeaMonkey",
            Self::Thunderbird => "Thunderbird",
        }
    }
}

impl FromStr for Application {
    type Err = ();

    fn from_str(input: &str) -> Result<Application, Self::Err> {
        match input {
            "firefox" => Ok(Self::Firefox),
            "mobile" | "android" => Ok(Self::Mobile),
            "seamonkey" => Ok(Self::SeaMonkey),
            "thunderbird" => Ok(Self::Thunderbird),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Firefox => write!(f, "firefox"),
            Self::Mobile => write!(f, "mobile"),
            Self::SeaMonkey => write!(f, "seamonkey"),
            Self::Thunderbird => write!(f, "thunderbird"),
        }
    }
}

/// Everything known about an add-on version and the user's application
/// when deciding whether the add-on can be installed.
#[derive(Clone, Debug)]
pub struct CompatCheck {
    pub app: Application,
    pub app_version: Version,
    /// Declared min/max app version, only present when the add-on
    /// supports `app` at all
    pub range: Option<VersionRange>,
    pub compatible_by_default: bool,
    /// Whether the add-on has been updated for default-to-compatible
    pub compatible_app: bool,
    pub overrides: Vec<VersionRange>,
    pub d2c_enabled: bool,
}

impl CompatCheck {
    pub fn new(app: Application, app_version: impl Into<Version>) -> Self {
        Self {
            app,
            app_version: app_version.into(),
            range: None,
            compatible_by_default: false,
            compatible_app: false,
            overrides: Vec::new(),
            d2c_enabled: true,
        }
    }
}

/// Why a default-to-compatible add-on was still ruled out
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum IncompatReason {
    NotUpdatedForD2c,
    AppTooOld { minimum: Version },
    Overridden { range: VersionRange },
}

impl IncompatReason {
    pub fn describe(&self, app: Application) -> String {
        match self {
            Self::NotUpdatedForD2c => {
                "Add-on has not been updated to support default-to-compatible.".to_string()
            }
            Self::AppTooOld { minimum } => {
                format!("You need to be using {} {} or higher.", app.pretty_name(), minimum)
            }
            Self::Overridden { range } => format!(
                "Mozilla has marked this version as incompatible with your {} version ({}).",
                app.pretty_name(),
                range
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompatReport {
    pub is_d2c: bool,
    pub older_app: bool,
    pub newer_app: bool,
    pub compatible: bool,
    pub reasons: Vec<IncompatReason>,
}
