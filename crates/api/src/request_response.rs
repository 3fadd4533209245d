// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! Responses are projections: [`CampaignView::project`] applies the
//! resolved capability set, so a blurred record never carries title,
//! note, or assignee across the boundary.

use crate::session::SessionClaims;
use cadence::AssignmentEmail;
use cadence_domain::{Campaign, CapabilitySet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A create-campaign submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    /// The caller's session claims.
    pub claims: SessionClaims,
    /// The actor display name for the audit trail.
    pub actor: String,
    /// The campaign title.
    pub title: String,
    /// The scheduled date and time.
    pub scheduled_for: DateTime<Utc>,
    /// The urgency level name.
    pub urgency: String,
    /// The difficulty level name, if rated.
    pub difficulty: Option<String>,
    /// The initially assigned person's identifier, if any.
    pub assignee_id: Option<String>,
    /// The owning department, if any.
    pub department: Option<String>,
    /// Free-text note.
    pub note: Option<String>,
    /// Whether a completion report is required.
    pub requires_report: bool,
    /// When the completion report is due, if required.
    pub report_due: Option<DateTime<Utc>>,
}

/// A status transition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The caller's session claims.
    pub claims: SessionClaims,
    /// The actor display name for the audit trail.
    pub actor: String,
    /// The status name to move to.
    pub new_status: String,
}

/// A reassignment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignRequest {
    /// The caller's session claims.
    pub claims: SessionClaims,
    /// The actor display name for the audit trail.
    pub actor: String,
    /// The identifier of the person taking over.
    pub replacement_id: String,
}

/// A set-note request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetNoteRequest {
    /// The caller's session claims.
    pub claims: SessionClaims,
    /// The actor display name for the audit trail.
    pub actor: String,
    /// The new note text.
    pub text: String,
}

/// A work-request submission from a business-unit member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRequestSubmission {
    /// The caller's session claims.
    pub claims: SessionClaims,
    /// The submitting actor's display name.
    pub requested_by: String,
    /// The proposed title.
    pub title: String,
    /// The proposed date and time.
    pub scheduled_for: DateTime<Utc>,
    /// Free-text note.
    pub note: Option<String>,
}

/// A person registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPersonRequest {
    /// The caller's session claims.
    pub claims: SessionClaims,
    /// The canonical identifier.
    pub person_id: String,
    /// The display name.
    pub display_name: String,
    /// Contact email address.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional avatar glyph.
    pub avatar_glyph: Option<String>,
}

/// A schedule mode configuration update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfigRequest {
    /// The caller's session claims.
    pub claims: SessionClaims,
    /// Whether automatic switching is enabled.
    pub enabled: bool,
    /// The activation time as `HH:MM`.
    pub activation_time: String,
    /// The IANA timezone name the window is evaluated in.
    pub timezone: String,
}

/// A submissions-toggle update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionsToggleRequest {
    /// The caller's session claims.
    pub claims: SessionClaims,
    /// Whether business-unit work submissions are enabled.
    pub enabled: bool,
}

/// A campaign as seen by a particular session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignView {
    /// The campaign identifier.
    pub campaign_id: String,
    /// The short human-facing reference code.
    pub reference_code: String,
    /// The title. Absent on blurred views.
    pub title: Option<String>,
    /// The scheduled date and time.
    pub scheduled_for: DateTime<Utc>,
    /// The urgency level name.
    pub urgency: String,
    /// The difficulty level name, if rated.
    pub difficulty: Option<String>,
    /// The assignee identifier. Absent on blurred views.
    pub assignee: Option<String>,
    /// The owning department, if any.
    pub department: Option<String>,
    /// The lifecycle state name.
    pub status: String,
    /// The note. Absent on blurred views.
    pub note: Option<String>,
    /// Whether a completion report is required.
    pub requires_report: bool,
    /// When the completion report is due, if required.
    pub report_due: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,
    /// Whether content fields were withheld.
    pub blurred: bool,
    /// What the viewing session may do with this campaign.
    pub capabilities: CapabilitySet,
}

impl CampaignView {
    /// Projects a campaign through a resolved capability set.
    ///
    /// Sessions without clear-read capability get scheduling metadata
    /// only; title, note, and assignee are withheld.
    #[must_use]
    pub fn project(campaign: &Campaign, capabilities: CapabilitySet) -> Self {
        let clear: bool = capabilities.can_read_clear;
        Self {
            campaign_id: campaign.campaign_id.value().to_string(),
            reference_code: campaign.campaign_id.reference_code(),
            title: clear.then(|| campaign.title.clone()),
            scheduled_for: campaign.scheduled_for,
            urgency: campaign.urgency.as_str().to_string(),
            difficulty: campaign
                .difficulty
                .map(|difficulty| difficulty.as_str().to_string()),
            assignee: if clear {
                campaign.assignee.as_ref().map(ToString::to_string)
            } else {
                None
            },
            department: campaign.department.as_ref().map(ToString::to_string),
            status: campaign.status.as_str().to_string(),
            note: if clear { campaign.note.clone() } else { None },
            requires_report: campaign.requires_report,
            report_due: campaign.report_due,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
            blurred: !clear,
            capabilities,
        }
    }
}

/// The result of a mutating campaign operation.
///
/// Notifications are recorded in the store before this is returned;
/// outbound mail is the caller's to dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// The campaign after the operation, projected for the caller.
    pub campaign: CampaignView,
    /// Assignment mail awaiting dispatch.
    pub emails: Vec<AssignmentEmail>,
}
