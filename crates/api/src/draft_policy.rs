// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draft intake policy.
//!
//! Shape-level checks on create submissions, rejected before any store
//! write. Domain validation (title length, enum values) happens later
//! in the lifecycle layer; this policy covers the cross-field rules a
//! single domain value cannot see.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Draft intake policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftPolicyError {
    /// The title is missing or blank.
    #[error("A title is required")]
    TitleRequired,

    /// A report was required without a due date.
    #[error("A report due date is required when a report is required")]
    ReportDueRequired,

    /// The report due date precedes the scheduled date.
    #[error("The report due date must not precede the scheduled date")]
    ReportDueBeforeSchedule,

    /// The note exceeds the configured maximum length.
    #[error("Note must be at most {max_length} characters long")]
    NoteTooLong { max_length: usize },
}

/// Draft intake policy configuration.
pub struct DraftPolicy {
    /// Maximum note length in characters.
    pub max_note_length: usize,
}

impl Default for DraftPolicy {
    fn default() -> Self {
        Self {
            max_note_length: 2000,
        }
    }
}

impl DraftPolicy {
    /// Validates a create submission against the policy.
    ///
    /// # Arguments
    ///
    /// * `title` - The proposed title
    /// * `scheduled_for` - The proposed date and time
    /// * `note` - The proposed note, if any
    /// * `requires_report` - Whether a completion report is required
    /// * `report_due` - When the report is due, if given
    ///
    /// # Errors
    ///
    /// Returns a `DraftPolicyError` if the submission does not meet
    /// policy requirements.
    pub fn validate(
        &self,
        title: &str,
        scheduled_for: DateTime<Utc>,
        note: Option<&str>,
        requires_report: bool,
        report_due: Option<DateTime<Utc>>,
    ) -> Result<(), DraftPolicyError> {
        if title.trim().is_empty() {
            return Err(DraftPolicyError::TitleRequired);
        }

        if let Some(note) = note
            && note.chars().count() > self.max_note_length
        {
            return Err(DraftPolicyError::NoteTooLong {
                max_length: self.max_note_length,
            });
        }

        if requires_report {
            match report_due {
                None => return Err(DraftPolicyError::ReportDueRequired),
                Some(due) if due < scheduled_for => {
                    return Err(DraftPolicyError::ReportDueBeforeSchedule);
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
