// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use cadence_audit::History;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a campaign.
///
/// The state machine is fully connected: every state may transition to
/// every other state. Completed and Cancelled campaigns can be revived
/// back to Planned; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CampaignStatus {
    /// Initial state after creation. The campaign is on the calendar.
    #[default]
    Planned,
    /// The campaign was carried out.
    Completed,
    /// The campaign was called off.
    Cancelled,
}

impl FromStr for CampaignStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planned" => Ok(Self::Planned),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CampaignStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Represents the urgency of a campaign.
///
/// Urgency is one of four ordinal levels. `Critical` is the highest and
/// is the only level that marks outbound assignment mail as urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Urgency {
    /// Lowest level.
    Low,
    /// Routine work.
    #[default]
    Medium,
    /// Time-sensitive work.
    High,
    /// Highest level. Drives the urgent marker on assignment mail.
    Critical,
}

impl FromStr for Urgency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidUrgency(s.to_string())),
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Urgency {
    /// Converts this urgency to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Returns whether this is the highest urgency level.
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

/// Represents the difficulty of a campaign.
///
/// Difficulty is one of five ordinal levels and is optional on a
/// campaign. The two hardest levels feed the difficulty leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Lowest level.
    Trivial,
    /// Straightforward work.
    Easy,
    /// Ordinary work.
    Moderate,
    /// Demanding work. Counts toward the difficulty leaderboard.
    Hard,
    /// Highest level. Counts toward the difficulty leaderboard.
    Severe,
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Trivial" => Ok(Self::Trivial),
            "Easy" => Ok(Self::Easy),
            "Moderate" => Ok(Self::Moderate),
            "Hard" => Ok(Self::Hard),
            "Severe" => Ok(Self::Severe),
            _ => Err(DomainError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Difficulty {
    /// Converts this difficulty to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trivial => "Trivial",
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
            Self::Severe => "Severe",
        }
    }

    /// Returns whether this is one of the two hardest levels.
    #[must_use]
    pub const fn is_hard(&self) -> bool {
        matches!(self, Self::Hard | Self::Severe)
    }
}

/// Represents a campaign identifier.
///
/// Identifiers are opaque strings assigned by the store adapter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CampaignId {
    value: String,
}

impl CampaignId {
    /// Creates a new `CampaignId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Derives the short human-facing reference code for this campaign.
    ///
    /// The code is the first six alphanumeric characters of the id,
    /// uppercased, with a `CMP-` prefix. It appears in assignment mail so
    /// recipients can quote a stable handle without the full id.
    #[must_use]
    pub fn reference_code(&self) -> String {
        let short: String = self
            .value
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(6)
            .collect::<String>()
            .to_uppercase();
        format!("CMP-{short}")
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a person identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId {
    value: String,
}

impl PersonId {
    /// Creates a new `PersonId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents an assignable staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The canonical identifier.
    pub person_id: PersonId,
    /// The person's display name.
    pub display_name: String,
    /// Contact email address.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional avatar glyph shown in listings.
    pub avatar_glyph: Option<String>,
}

impl Person {
    /// Creates a new `Person`.
    ///
    /// # Arguments
    ///
    /// * `person_id` - The canonical identifier
    /// * `display_name` - The person's display name
    /// * `email` - Contact email address
    /// * `phone` - Optional phone number
    /// * `avatar_glyph` - Optional avatar glyph
    #[must_use]
    pub const fn new(
        person_id: PersonId,
        display_name: String,
        email: String,
        phone: Option<String>,
        avatar_glyph: Option<String>,
    ) -> Self {
        Self {
            person_id,
            display_name,
            email,
            phone,
            avatar_glyph,
        }
    }
}

/// Represents a department reference.
///
/// Department identifiers are normalized to uppercase so membership
/// comparison is case-insensitive. The identifier doubles as the display
/// name in outbound mail.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepartmentId {
    value: String,
}

impl DepartmentId {
    /// Creates a new `DepartmentId`.
    ///
    /// The value is normalized to uppercase.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Returns the department identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The central schedulable work record.
///
/// A campaign carries its own transition log. The log is append-only and
/// the record's `status` must always agree with the last entry; the
/// lifecycle layer checks this on entry to every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// The canonical identifier assigned by the store.
    pub campaign_id: CampaignId,
    /// The campaign title.
    pub title: String,
    /// The scheduled date and time.
    pub scheduled_for: DateTime<Utc>,
    /// The original scheduled date, present only when the campaign was
    /// re-dated after reassignment. Preferred as the duration base point.
    pub original_scheduled_for: Option<DateTime<Utc>>,
    /// The urgency level.
    pub urgency: Urgency,
    /// The difficulty level, if rated.
    pub difficulty: Option<Difficulty>,
    /// The assigned person, if any.
    pub assignee: Option<PersonId>,
    /// The owning department, if any.
    pub department: Option<DepartmentId>,
    /// The lifecycle state.
    pub status: CampaignStatus,
    /// Free-text note.
    pub note: Option<String>,
    /// Whether a completion report is required.
    pub requires_report: bool,
    /// When the completion report is due, if one is required.
    pub report_due: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,
    /// The append-only transition log.
    pub history: History<CampaignStatus>,
}

impl Campaign {
    /// Returns the status implied by the transition log.
    ///
    /// This is the `new_status` of the last entry, or `Planned` when the
    /// log is empty.
    #[must_use]
    pub fn derived_status(&self) -> CampaignStatus {
        self.history
            .last()
            .map_or(CampaignStatus::Planned, |entry| entry.new_status)
    }

    /// Returns when the campaign most recently entered `status`.
    #[must_use]
    pub fn entered_status_at(&self, status: CampaignStatus) -> Option<DateTime<Utc>> {
        self.history.entered_at(&status)
    }

    /// Validates that the stored status agrees with the transition log.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::HistoryDiverged` when the stored status does
    /// not equal the `new_status` of the last log entry (or `Planned` for
    /// an empty log).
    pub fn validate_history_consistent(&self) -> Result<(), DomainError> {
        let derived: CampaignStatus = self.derived_status();
        if self.status == derived {
            Ok(())
        } else {
            Err(DomainError::HistoryDiverged {
                campaign_id: self.campaign_id.value().to_string(),
                recorded_status: self.status.as_str().to_string(),
                derived_status: derived.as_str().to_string(),
            })
        }
    }
}

/// A work submission from a business-unit department member.
///
/// Plain department members never create campaigns directly; the
/// request-work capability produces one of these instead, for an operator
/// or owner to triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRequest {
    /// The request identifier assigned by the store.
    pub request_id: String,
    /// The proposed campaign title.
    pub title: String,
    /// The proposed date and time.
    pub scheduled_for: DateTime<Utc>,
    /// The requesting member's home department, if any.
    pub department: Option<DepartmentId>,
    /// The actor who submitted the request.
    pub requested_by: String,
    /// Free-text note.
    pub note: Option<String>,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
}
