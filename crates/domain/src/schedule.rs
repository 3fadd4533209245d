// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule mode decision for the time-of-day presentation switch.
//!
//! The mode is active inside the window `[activation_time, 09:00)`,
//! evaluated as wall-clock time in the config's declared timezone. When
//! the activation time is later than 09:00 the window spans midnight.
//!
//! ## Invariants
//!
//! - This is a pure decision function; the caller applies the switch and
//!   re-evaluates at least once per minute.
//! - A manual override newer than the start of the current window
//!   occurrence wins: no automatic change is applied in either direction.
//! - A disabled config is always inactive.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// The fixed wall-clock time at which the mode deactivates.
pub const DEACTIVATION_TIME: &str = "09:00";

/// Configuration for the schedule mode switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleModeConfig {
    /// Whether automatic switching is enabled at all.
    pub enabled: bool,
    /// The wall-clock activation time (`HH:MM`).
    pub activation_time: String,
    /// The IANA timezone the wall-clock times are declared in.
    pub timezone: String,
}

/// Decides whether the schedule mode should currently be active.
///
/// # Arguments
///
/// * `config` - The schedule mode configuration
/// * `override_marker` - The instant of the last manual toggle, if any
/// * `now` - The current instant (UTC)
/// * `currently_active` - Whether the mode is active right now
///
/// # Returns
///
/// The state the mode should be in. When a manual override is newer than
/// the start of the current window occurrence, the current state is
/// returned unchanged.
///
/// # Errors
///
/// Returns an error if the activation time or timezone fails to parse.
pub fn should_mode_be_active(
    config: &ScheduleModeConfig,
    override_marker: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    currently_active: bool,
) -> Result<bool, DomainError> {
    if !config.enabled {
        return Ok(false);
    }

    let activation: NaiveTime = parse_time_of_day(&config.activation_time)?;
    let deactivation: NaiveTime = parse_time_of_day(DEACTIVATION_TIME)?;
    let tz: Tz = config
        .timezone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(config.timezone.clone()))?;

    let local: NaiveDateTime = now.with_timezone(&tz).naive_local();
    let wall: NaiveTime = local.time();

    // The window wraps midnight when activation is later than 09:00.
    let in_window: bool = if activation > deactivation {
        wall >= activation || wall < deactivation
    } else {
        wall >= activation && wall < deactivation
    };

    // Start of the current window occurrence: today's activation instant
    // once the wall clock has passed it, otherwise yesterday's. Past
    // midnight inside a wrapped window this lands on "yesterday".
    let start_date = if wall >= activation {
        local.date()
    } else {
        local.date().pred_opt().unwrap_or_else(|| local.date())
    };
    let window_start: NaiveDateTime = NaiveDateTime::new(start_date, activation);

    if let Some(marker) = override_marker {
        let marker_local: NaiveDateTime = marker.with_timezone(&tz).naive_local();
        if marker_local > window_start {
            // The manual choice wins until the next window occurrence.
            return Ok(currently_active);
        }
    }

    Ok(in_window)
}

/// Parses a wall-clock `HH:MM` string.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeOfDay` if the string does not parse.
fn parse_time_of_day(value: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| DomainError::InvalidTimeOfDay(value.to_string()))
}
