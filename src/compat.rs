//! Decides whether an add-on version can be installed into the user's
//! application.
//!
//! An add-on declares the range of application versions it supports. Newer
//! applications also accept add-ons "by default" (d2c) once the add-on's
//! declared maxVersion is recent enough, unless the add-on was never updated
//! for it, the application predates d2c, or an override marks the
//! application version as broken.

use anyhow::{Context, Result};
use tracing::{event, instrument, Level};

use crate::models::{CompatCheck, CompatReport, IncompatReason, Version, VersionRange};

/// Applications older than this never treat add-ons as compatible by default
pub const D2C_MIN_APP_VERSION: &str = "10.0";

#[instrument(level = "debug", skip(check), fields(app = %check.app, version = %check.app_version))]
pub fn check(check: &CompatCheck) -> CompatReport {
    let app_version = &check.app_version;
    let mut compatible = check.compatible_by_default;
    let mut older_app = false;
    let mut newer_app = false;
    let mut reasons = Vec::new();

    let is_d2c = match &check.range {
        Some(range) => range.max >= check.app.d2c_max_version(),
        None => false,
    };

    if let Some(range) = &check.range {
        older_app = app_version < &range.min;
        newer_app = app_version > &range.max;
        if older_app {
            compatible = false;
        }
    }

    if check.d2c_enabled && is_d2c && compatible {
        if !check.compatible_app {
            reasons.push(IncompatReason::NotUpdatedForD2c);
            compatible = false;
        }

        let minimum = Version::new(D2C_MIN_APP_VERSION);
        if !app_version.is_unknown() && app_version < &minimum {
            reasons.push(IncompatReason::AppTooOld { minimum });
            compatible = false;
        }

        if compatible {
            if let Some(range) = check.overrides.iter().find(|r| r.contains(app_version)) {
                event!(Level::DEBUG, "{} is overridden by {}", app_version, range);
                reasons.push(IncompatReason::Overridden { range: range.clone() });
                compatible = false;
            }
        }
    } else {
        compatible = false;
    }

    event!(Level::DEBUG, "d2c: {}, older: {}, newer: {}, compatible: {}", is_d2c, older_app, newer_app, compatible);

    CompatReport { is_d2c, older_app, newer_app, compatible, reasons }
}

/// Reads compatibility overrides in the `[["min", "max"], ...]` form they
/// are published in
pub fn parse_overrides(json: &str) -> Result<Vec<VersionRange>> {
    serde_json::from_str(json).context(format!("Invalid compatibility overrides: {}", json))
}
