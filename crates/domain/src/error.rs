// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Campaign title is empty or invalid.
    InvalidTitle(String),
    /// Campaign status string is not recognized.
    InvalidStatus(String),
    /// Urgency string is not recognized.
    InvalidUrgency(String),
    /// Difficulty string is not recognized.
    InvalidDifficulty(String),
    /// Actor identifier is empty or invalid.
    InvalidActor(String),
    /// A time-of-day string did not parse as `HH:MM`.
    InvalidTimeOfDay(String),
    /// The declared timezone is not a valid IANA identifier.
    InvalidTimezone(String),
    /// A month key did not parse as `YYYY-MM`.
    InvalidMonthKey(String),
    /// A campaign's status disagrees with its transition log.
    HistoryDiverged {
        /// The campaign identifier.
        campaign_id: String,
        /// The status stored on the record.
        recorded_status: String,
        /// The status implied by the last transition entry.
        derived_status: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidStatus(msg) => write!(f, "Invalid campaign status: {msg}"),
            Self::InvalidUrgency(msg) => write!(f, "Invalid urgency: {msg}"),
            Self::InvalidDifficulty(msg) => write!(f, "Invalid difficulty: {msg}"),
            Self::InvalidActor(msg) => write!(f, "Invalid actor: {msg}"),
            Self::InvalidTimeOfDay(msg) => {
                write!(f, "Invalid time of day '{msg}': expected HH:MM")
            }
            Self::InvalidTimezone(msg) => write!(f, "Invalid timezone: {msg}"),
            Self::InvalidMonthKey(msg) => {
                write!(f, "Invalid month key '{msg}': expected YYYY-MM")
            }
            Self::HistoryDiverged {
                campaign_id,
                recorded_status,
                derived_status,
            } => {
                write!(
                    f,
                    "Campaign '{campaign_id}' status '{recorded_status}' disagrees with its transition log (last entry implies '{derived_status}')"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
