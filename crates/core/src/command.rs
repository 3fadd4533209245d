// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cadence_domain::{CampaignStatus, DepartmentId, Difficulty, Person, Urgency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fields a caller supplies when creating a campaign.
///
/// Everything the store assigns (identifier, timestamps, history) is
/// absent here; the draft carries only caller intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDraft {
    /// The campaign title.
    pub title: String,
    /// The scheduled date and time.
    pub scheduled_for: DateTime<Utc>,
    /// The urgency level.
    pub urgency: Urgency,
    /// The difficulty level, if rated.
    pub difficulty: Option<Difficulty>,
    /// The initially assigned person, if any.
    pub assignee: Option<Person>,
    /// The owning department, if any.
    pub department: Option<DepartmentId>,
    /// Free-text note.
    pub note: Option<String>,
    /// Whether a completion report is required.
    pub requires_report: bool,
    /// When the completion report is due, if one is required.
    pub report_due: Option<DateTime<Utc>>,
}

/// Commands that drive the campaign lifecycle.
///
/// Commands are pure data. `CreateCampaign` is handled by
/// [`crate::apply_create`]; every other variant goes through
/// [`crate::apply`] against an existing campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new campaign from a draft.
    CreateCampaign {
        /// The caller-supplied fields.
        draft: CampaignDraft,
    },
    /// Move the campaign to a new lifecycle state.
    ChangeStatus {
        /// The state to move to.
        new_status: CampaignStatus,
    },
    /// Hand the campaign to a different person.
    Reassign {
        /// The person taking over.
        replacement: Person,
        /// The person handing off, when known.
        previous: Option<Person>,
    },
    /// Set or replace the free-text note.
    SetNote {
        /// The new note text.
        text: String,
    },
    /// Remove the free-text note.
    ClearNote,
    /// Remove the campaign from the tracker.
    DeleteCampaign {
        /// The display name of the assignee at deletion time, for the
        /// deletion notice. May be stale; it is informational only.
        assignee_name: Option<String>,
    },
}
