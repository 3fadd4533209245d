// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{CampaignDraft, Command};
use crate::effects::{AssignmentEmail, NotificationKind, NotificationRequest, SideEffect};
use crate::error::CoreError;
use crate::outcome::LifecycleOutcome;
use cadence_audit::TransitionEntry;
use cadence_domain::{
    Campaign, CampaignId, CampaignStatus, Person, validate_actor, validate_title,
};
use chrono::{DateTime, Utc};

/// Creates a new campaign from a draft.
///
/// The campaign starts in `Planned` with a single `Created` entry in its
/// transition log. Creation requests no side effects; assignment mail is
/// reserved for explicit reassignment.
///
/// # Arguments
///
/// * `campaign_id` - The identifier assigned by the store
/// * `draft` - The caller-supplied fields
/// * `actor` - The actor performing the creation
/// * `now` - The current time
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` when the title or actor fails
/// validation.
pub fn apply_create(
    campaign_id: CampaignId,
    draft: CampaignDraft,
    actor: &str,
    now: DateTime<Utc>,
) -> Result<LifecycleOutcome, CoreError> {
    validate_title(&draft.title)?;
    validate_actor(actor)?;

    let mut campaign = Campaign {
        campaign_id,
        title: draft.title.trim().to_string(),
        scheduled_for: draft.scheduled_for,
        original_scheduled_for: None,
        urgency: draft.urgency,
        difficulty: draft.difficulty,
        assignee: draft.assignee.map(|person| person.person_id),
        department: draft.department,
        status: CampaignStatus::Planned,
        note: draft.note,
        requires_report: draft.requires_report,
        report_due: draft.report_due,
        created_at: now,
        updated_at: now,
        history: cadence_audit::History::new(),
    };
    campaign.history.record(TransitionEntry::created(
        CampaignStatus::Planned,
        actor.to_string(),
        now,
    ));

    Ok(LifecycleOutcome::unchanged(campaign))
}

/// Applies a lifecycle command to an existing campaign.
///
/// Every command first revalidates the actor and the consistency of the
/// campaign's transition log. Commands that change nothing return the
/// campaign untouched with no side effects, including an unchanged
/// `updated_at`.
///
/// # Arguments
///
/// * `campaign` - The campaign as currently persisted
/// * `command` - The command to apply
/// * `actor` - The actor performing the operation
/// * `now` - The current time
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` when the actor fails validation
/// or the campaign's stored status disagrees with its transition log.
///
/// # Panics
///
/// Panics if called with `Command::CreateCampaign`; creation goes
/// through [`apply_create`].
pub fn apply(
    campaign: Campaign,
    command: Command,
    actor: &str,
    now: DateTime<Utc>,
) -> Result<LifecycleOutcome, CoreError> {
    validate_actor(actor)?;
    campaign.validate_history_consistent()?;

    match command {
        Command::CreateCampaign { .. } => {
            unreachable!("CreateCampaign must go through apply_create")
        }
        Command::ChangeStatus { new_status } => change_status(campaign, new_status, actor, now),
        Command::Reassign {
            replacement,
            previous,
        } => reassign(campaign, replacement, previous, now),
        Command::SetNote { text } => {
            let mut campaign = campaign;
            campaign.note = Some(text);
            campaign.updated_at = now;
            Ok(LifecycleOutcome::unchanged(campaign))
        }
        Command::ClearNote => {
            let mut campaign = campaign;
            campaign.note = None;
            campaign.updated_at = now;
            Ok(LifecycleOutcome::unchanged(campaign))
        }
        Command::DeleteCampaign { assignee_name } => Ok(delete(campaign, assignee_name)),
    }
}

fn change_status(
    mut campaign: Campaign,
    new_status: CampaignStatus,
    actor: &str,
    now: DateTime<Utc>,
) -> Result<LifecycleOutcome, CoreError> {
    let old_status: CampaignStatus = campaign.status;
    if old_status == new_status {
        // Strict no-op: no log entry, no timestamp bump, no effects.
        return Ok(LifecycleOutcome::unchanged(campaign));
    }

    campaign.history.record(TransitionEntry::status_changed(
        old_status,
        new_status,
        actor.to_string(),
        now,
    ));
    campaign.status = new_status;
    campaign.updated_at = now;

    let (headline, kind) = match new_status {
        CampaignStatus::Completed => ("Campaign completed", NotificationKind::Success),
        CampaignStatus::Cancelled => ("Campaign cancelled", NotificationKind::Alert),
        CampaignStatus::Planned => ("Campaign reopened", NotificationKind::Warning),
    };
    let notification = NotificationRequest {
        title: headline.to_string(),
        message: format!(
            "'{}' moved from {} to {} by {}",
            campaign.title, old_status, new_status, actor
        ),
        kind,
        recipient: campaign.assignee.clone(),
    };

    Ok(LifecycleOutcome::with_effects(
        campaign,
        vec![SideEffect::Notification(notification)],
    ))
}

fn reassign(
    mut campaign: Campaign,
    replacement: Person,
    previous: Option<Person>,
    now: DateTime<Utc>,
) -> Result<LifecycleOutcome, CoreError> {
    if campaign.assignee.as_ref() == Some(&replacement.person_id) {
        return Ok(LifecycleOutcome::unchanged(campaign));
    }

    campaign.assignee = Some(replacement.person_id.clone());
    campaign.updated_at = now;

    let urgency_marker: &str = if campaign.urgency.is_critical() {
        "[URGENT] "
    } else {
        ""
    };
    let email = AssignmentEmail {
        subject: format!(
            "{}Campaign assigned: {} ({})",
            urgency_marker,
            campaign.title,
            campaign.campaign_id.reference_code()
        ),
        recipient_email: replacement.email.clone(),
        recipient_name: replacement.display_name.clone(),
        campaign_title: campaign.title.clone(),
        previous_assignee: previous.map(|person| person.display_name),
        urgency_label: campaign.urgency.as_str().to_string(),
        difficulty_label: campaign
            .difficulty
            .map(|difficulty| difficulty.as_str().to_string()),
        description: campaign.note.clone(),
        department_name: campaign
            .department
            .as_ref()
            .map(|department| department.value().to_string()),
        reference_code: campaign.campaign_id.reference_code(),
    };
    let notification = NotificationRequest {
        title: "Campaign assigned to you".to_string(),
        message: format!(
            "'{}' is now assigned to {}",
            campaign.title, replacement.display_name
        ),
        kind: NotificationKind::Info,
        recipient: Some(replacement.person_id),
    };

    Ok(LifecycleOutcome::with_effects(
        campaign,
        vec![
            SideEffect::Notification(notification),
            SideEffect::Email(email),
        ],
    ))
}

fn delete(campaign: Campaign, assignee_name: Option<String>) -> LifecycleOutcome {
    // The record itself is removed by the store; this only describes the
    // notice. The assignee name is whatever the caller last saw and may
    // be stale, which is acceptable for a deletion notice.
    let message: String = assignee_name.map_or_else(
        || format!("'{}' was removed from the tracker", campaign.title),
        |name| {
            format!(
                "'{}' (assigned to {name}) was removed from the tracker",
                campaign.title
            )
        },
    );
    let notification = NotificationRequest {
        title: "Campaign deleted".to_string(),
        message,
        kind: NotificationKind::Alert,
        recipient: campaign.assignee.clone(),
    };

    LifecycleOutcome::with_effects(campaign, vec![SideEffect::Notification(notification)])
}
