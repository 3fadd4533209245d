// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers.
//!
//! Each handler resolves the session, enforces the capability the
//! operation needs, runs the lifecycle layer, and persists the result
//! as one atomic document write. Notification effects are recorded in
//! the store here; assignment mail is returned for the caller to
//! dispatch.

use crate::draft_policy::DraftPolicy;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CampaignView, CreateCampaignRequest, MutationResponse, RegisterPersonRequest, ReassignRequest,
    ScheduleConfigRequest, SetNoteRequest, SubmissionsToggleRequest, TransitionRequest,
    WorkRequestSubmission,
};
use crate::session::{SessionClaims, resolve_session};
use cadence::{
    AssignmentEmail, CampaignDraft, Command, LifecycleOutcome, SideEffect, apply, apply_create,
};
use cadence_domain::{
    Campaign, CampaignId, CampaignStatus, CapabilitySet, DepartmentId, Difficulty, Person,
    PersonId, ScheduleModeConfig, Session, Urgency, WorkRequest, resolve_capabilities,
    should_mode_be_active,
};
use cadence_persistence::{CampaignStore, NotificationRecord};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use tracing::{debug, info};

fn require(granted: bool, action: &str, required_capability: &str) -> Result<(), ApiError> {
    if granted {
        Ok(())
    } else {
        Err(ApiError::Unauthorized {
            action: action.to_string(),
            required_capability: required_capability.to_string(),
        })
    }
}

/// Records notification effects in the store and splits out mail.
fn dispatch_effects<S: CampaignStore>(
    store: &mut S,
    effects: Vec<SideEffect>,
    now: DateTime<Utc>,
) -> Vec<AssignmentEmail> {
    let mut emails: Vec<AssignmentEmail> = Vec::new();
    for effect in effects {
        match effect {
            SideEffect::Notification(notification) => {
                debug!(title = %notification.title, "recording notification");
                store.record_notification(NotificationRecord {
                    notification,
                    recorded_at: now,
                });
            }
            SideEffect::Email(email) => emails.push(email),
        }
    }
    emails
}

fn view_for<S: CampaignStore>(store: &S, session: &Session, campaign: &Campaign) -> CampaignView {
    let capabilities: CapabilitySet =
        resolve_capabilities(session, campaign, store.submissions_enabled());
    CampaignView::project(campaign, capabilities)
}

/// Creates a campaign.
///
/// # Errors
///
/// Returns an `ApiError` if the session may not create campaigns, the
/// draft violates the intake policy, a field fails domain validation,
/// the assignee does not exist, or the store write fails.
pub fn create_campaign<S: CampaignStore>(
    store: &mut S,
    request: CreateCampaignRequest,
    now: DateTime<Utc>,
) -> Result<MutationResponse, ApiError> {
    let session: Session = resolve_session(&request.claims)?;

    // Direct creation is an owner/operator capability; business-unit
    // members go through submit_work_request instead.
    let can_create: bool = matches!(
        session,
        Session::Owner | Session::DepartmentMember { operator: true, .. }
    );
    require(can_create, "create campaign", "can_create")?;

    // Intake policy runs before anything touches the store.
    DraftPolicy::default().validate(
        &request.title,
        request.scheduled_for,
        request.note.as_deref(),
        request.requires_report,
        request.report_due,
    )?;

    let urgency: Urgency = Urgency::from_str(&request.urgency).map_err(translate_domain_error)?;
    let difficulty: Option<Difficulty> = match request.difficulty.as_deref() {
        Some(name) => Some(Difficulty::from_str(name).map_err(translate_domain_error)?),
        None => None,
    };
    let assignee: Option<Person> = match request.assignee_id.as_deref() {
        Some(id) => Some(store.get_person(&PersonId::new(id))?),
        None => None,
    };

    let draft = CampaignDraft {
        title: request.title,
        scheduled_for: request.scheduled_for,
        urgency,
        difficulty,
        assignee,
        department: request.department.as_deref().map(DepartmentId::new),
        note: request.note,
        requires_report: request.requires_report,
        report_due: request.report_due,
    };

    let campaign_id: CampaignId = store.allocate_campaign_id();
    let outcome: LifecycleOutcome =
        apply_create(campaign_id, draft, &request.actor, now).map_err(translate_core_error)?;

    store.insert_campaign(outcome.campaign.clone())?;
    info!(campaign_id = %outcome.campaign.campaign_id, "campaign created");

    let emails: Vec<AssignmentEmail> = dispatch_effects(store, outcome.effects, now);
    Ok(MutationResponse {
        campaign: view_for(store, &session, &outcome.campaign),
        emails,
    })
}

/// Retrieves a single campaign, projected for the caller.
///
/// Sessions without clear-read capability still get a result; it is
/// blurred, never an authorization error.
///
/// # Errors
///
/// Returns an `ApiError` if the session cannot be resolved or the
/// campaign does not exist.
pub fn get_campaign<S: CampaignStore>(
    store: &S,
    claims: &SessionClaims,
    campaign_id: &str,
) -> Result<CampaignView, ApiError> {
    let session: Session = resolve_session(claims)?;
    let campaign: Campaign = store.get_campaign(&CampaignId::new(campaign_id))?;
    Ok(view_for(store, &session, &campaign))
}

/// Lists all campaigns, each projected for the caller.
///
/// # Errors
///
/// Returns an `ApiError` if the session cannot be resolved.
pub fn list_campaigns<S: CampaignStore>(
    store: &S,
    claims: &SessionClaims,
) -> Result<Vec<CampaignView>, ApiError> {
    let session: Session = resolve_session(claims)?;
    Ok(store
        .all_campaigns()
        .iter()
        .map(|campaign| view_for(store, &session, campaign))
        .collect())
}

/// Moves a campaign to a new lifecycle status.
///
/// # Errors
///
/// Returns an `ApiError` if the session lacks the change-status
/// capability on this campaign, the status name is unknown, or the
/// store write fails.
pub fn transition_campaign<S: CampaignStore>(
    store: &mut S,
    campaign_id: &str,
    request: TransitionRequest,
    now: DateTime<Utc>,
) -> Result<MutationResponse, ApiError> {
    let session: Session = resolve_session(&request.claims)?;
    let campaign: Campaign = store.get_campaign(&CampaignId::new(campaign_id))?;

    let capabilities: CapabilitySet =
        resolve_capabilities(&session, &campaign, store.submissions_enabled());
    require(
        capabilities.can_change_status,
        "change status",
        "can_change_status",
    )?;

    let new_status: CampaignStatus =
        CampaignStatus::from_str(&request.new_status).map_err(translate_domain_error)?;

    let outcome: LifecycleOutcome = apply(
        campaign,
        Command::ChangeStatus { new_status },
        &request.actor,
        now,
    )
    .map_err(translate_core_error)?;

    store.replace_campaign(outcome.campaign.clone())?;
    info!(campaign_id, status = %new_status, "campaign transitioned");

    let emails: Vec<AssignmentEmail> = dispatch_effects(store, outcome.effects, now);
    Ok(MutationResponse {
        campaign: view_for(store, &session, &outcome.campaign),
        emails,
    })
}

/// Hands a campaign to a different person.
///
/// # Errors
///
/// Returns an `ApiError` if the session lacks the edit capability on
/// this campaign, the replacement does not exist, or the store write
/// fails.
pub fn reassign_campaign<S: CampaignStore>(
    store: &mut S,
    campaign_id: &str,
    request: ReassignRequest,
    now: DateTime<Utc>,
) -> Result<MutationResponse, ApiError> {
    let session: Session = resolve_session(&request.claims)?;
    let campaign: Campaign = store.get_campaign(&CampaignId::new(campaign_id))?;

    let capabilities: CapabilitySet =
        resolve_capabilities(&session, &campaign, store.submissions_enabled());
    require(capabilities.can_edit, "reassign campaign", "can_edit")?;

    let replacement: Person = store.get_person(&PersonId::new(&request.replacement_id))?;
    // The outgoing assignee may have been deregistered; the handoff
    // still proceeds, the mail just omits the previous name.
    let previous: Option<Person> = campaign
        .assignee
        .as_ref()
        .and_then(|id| store.get_person(id).ok());

    let outcome: LifecycleOutcome = apply(
        campaign,
        Command::Reassign {
            replacement,
            previous,
        },
        &request.actor,
        now,
    )
    .map_err(translate_core_error)?;

    store.replace_campaign(outcome.campaign.clone())?;
    info!(campaign_id, assignee = %request.replacement_id, "campaign reassigned");

    let emails: Vec<AssignmentEmail> = dispatch_effects(store, outcome.effects, now);
    Ok(MutationResponse {
        campaign: view_for(store, &session, &outcome.campaign),
        emails,
    })
}

/// Sets the free-text note on a campaign.
///
/// # Errors
///
/// Returns an `ApiError` if the session lacks the edit capability on
/// this campaign or the store write fails.
pub fn set_note<S: CampaignStore>(
    store: &mut S,
    campaign_id: &str,
    request: SetNoteRequest,
    now: DateTime<Utc>,
) -> Result<MutationResponse, ApiError> {
    let session: Session = resolve_session(&request.claims)?;
    let campaign: Campaign = store.get_campaign(&CampaignId::new(campaign_id))?;

    let capabilities: CapabilitySet =
        resolve_capabilities(&session, &campaign, store.submissions_enabled());
    require(capabilities.can_edit, "set note", "can_edit")?;

    let outcome: LifecycleOutcome = apply(
        campaign,
        Command::SetNote { text: request.text },
        &request.actor,
        now,
    )
    .map_err(translate_core_error)?;

    store.replace_campaign(outcome.campaign.clone())?;

    let emails: Vec<AssignmentEmail> = dispatch_effects(store, outcome.effects, now);
    Ok(MutationResponse {
        campaign: view_for(store, &session, &outcome.campaign),
        emails,
    })
}

/// Removes the free-text note from a campaign.
///
/// # Errors
///
/// Returns an `ApiError` if the session lacks the edit capability on
/// this campaign or the store write fails.
pub fn clear_note<S: CampaignStore>(
    store: &mut S,
    campaign_id: &str,
    claims: &SessionClaims,
    actor: &str,
    now: DateTime<Utc>,
) -> Result<MutationResponse, ApiError> {
    let session: Session = resolve_session(claims)?;
    let campaign: Campaign = store.get_campaign(&CampaignId::new(campaign_id))?;

    let capabilities: CapabilitySet =
        resolve_capabilities(&session, &campaign, store.submissions_enabled());
    require(capabilities.can_edit, "clear note", "can_edit")?;

    let outcome: LifecycleOutcome =
        apply(campaign, Command::ClearNote, actor, now).map_err(translate_core_error)?;

    store.replace_campaign(outcome.campaign.clone())?;

    let emails: Vec<AssignmentEmail> = dispatch_effects(store, outcome.effects, now);
    Ok(MutationResponse {
        campaign: view_for(store, &session, &outcome.campaign),
        emails,
    })
}

/// Removes a campaign from the tracker.
///
/// # Errors
///
/// Returns an `ApiError` if the session lacks the delete capability on
/// this campaign or the campaign does not exist.
pub fn delete_campaign<S: CampaignStore>(
    store: &mut S,
    campaign_id: &str,
    claims: &SessionClaims,
    actor: &str,
    now: DateTime<Utc>,
) -> Result<(), ApiError> {
    let session: Session = resolve_session(claims)?;
    let campaign: Campaign = store.get_campaign(&CampaignId::new(campaign_id))?;

    let capabilities: CapabilitySet =
        resolve_capabilities(&session, &campaign, store.submissions_enabled());
    require(capabilities.can_delete, "delete campaign", "can_delete")?;

    let assignee_name: Option<String> = campaign
        .assignee
        .as_ref()
        .and_then(|id| store.get_person(id).ok())
        .map(|person| person.display_name);

    // The deletion notice is computed before the record is removed.
    let outcome: LifecycleOutcome = apply(
        campaign,
        Command::DeleteCampaign { assignee_name },
        actor,
        now,
    )
    .map_err(translate_core_error)?;

    store.delete_campaign(&CampaignId::new(campaign_id))?;
    info!(campaign_id, "campaign deleted");

    dispatch_effects(store, outcome.effects, now);
    Ok(())
}

/// Submits a work request for owner/operator triage.
///
/// # Errors
///
/// Returns an `ApiError` if the session lacks the request-work
/// capability (business-unit flag plus the global submissions toggle)
/// or the store write fails.
pub fn submit_work_request<S: CampaignStore>(
    store: &mut S,
    submission: WorkRequestSubmission,
    now: DateTime<Utc>,
) -> Result<WorkRequest, ApiError> {
    let session: Session = resolve_session(&submission.claims)?;

    let (can_request_work, home_department) = match &session {
        Session::DepartmentMember {
            home_department,
            business_unit,
            ..
        } => (
            *business_unit && store.submissions_enabled(),
            home_department.clone(),
        ),
        Session::Owner | Session::Guest => (false, None),
    };
    require(can_request_work, "submit work request", "can_request_work")?;

    DraftPolicy::default().validate(
        &submission.title,
        submission.scheduled_for,
        submission.note.as_deref(),
        false,
        None,
    )?;

    let request = WorkRequest {
        request_id: store.allocate_request_id(),
        title: submission.title,
        scheduled_for: submission.scheduled_for,
        department: home_department,
        requested_by: submission.requested_by,
        note: submission.note,
        created_at: now,
    };
    store.append_work_request(request.clone())?;
    info!(request_id = %request.request_id, "work request submitted");

    Ok(request)
}

/// Lists pending work requests for triage.
///
/// # Errors
///
/// Returns an `ApiError` if the session is not owner or operator.
pub fn list_work_requests<S: CampaignStore>(
    store: &S,
    claims: &SessionClaims,
) -> Result<Vec<WorkRequest>, ApiError> {
    let session: Session = resolve_session(claims)?;
    let can_triage: bool = matches!(
        session,
        Session::Owner | Session::DepartmentMember { operator: true, .. }
    );
    require(can_triage, "list work requests", "can_create")?;

    Ok(store.list_work_requests())
}

/// Registers or updates a person record.
///
/// # Errors
///
/// Returns an `ApiError` if the session is not owner or operator.
pub fn register_person<S: CampaignStore>(
    store: &mut S,
    request: RegisterPersonRequest,
) -> Result<Person, ApiError> {
    let session: Session = resolve_session(&request.claims)?;
    let can_manage: bool = matches!(
        session,
        Session::Owner | Session::DepartmentMember { operator: true, .. }
    );
    require(can_manage, "register person", "can_create")?;

    let person = Person::new(
        PersonId::new(&request.person_id),
        request.display_name,
        request.email,
        request.phone,
        request.avatar_glyph,
    );
    store.upsert_person(person.clone());
    Ok(person)
}

/// Lists all registered people.
///
/// # Errors
///
/// Returns an `ApiError` if the session cannot be resolved.
pub fn list_people<S: CampaignStore>(
    store: &S,
    claims: &SessionClaims,
) -> Result<Vec<Person>, ApiError> {
    resolve_session(claims)?;
    Ok(store.list_people())
}

/// Sets the global work-submission toggle. Owner only.
///
/// # Errors
///
/// Returns an `ApiError` if the session is not the owner.
pub fn set_submissions_enabled<S: CampaignStore>(
    store: &mut S,
    request: SubmissionsToggleRequest,
) -> Result<(), ApiError> {
    let session: Session = resolve_session(&request.claims)?;
    require(
        matches!(session, Session::Owner),
        "toggle submissions",
        "owner session",
    )?;

    store.set_submissions_enabled(request.enabled);
    info!(enabled = request.enabled, "submissions toggle updated");
    Ok(())
}

/// Stores the schedule mode configuration. Owner only.
///
/// The activation time and timezone are checked by evaluating the
/// window once, so a malformed config is rejected before it lands.
///
/// # Errors
///
/// Returns an `ApiError` if the session is not the owner, the config
/// does not parse, or the store write fails.
pub fn set_schedule_config<S: CampaignStore>(
    store: &mut S,
    request: ScheduleConfigRequest,
    now: DateTime<Utc>,
) -> Result<(), ApiError> {
    let session: Session = resolve_session(&request.claims)?;
    require(
        matches!(session, Session::Owner),
        "configure schedule mode",
        "owner session",
    )?;

    let config = ScheduleModeConfig {
        enabled: request.enabled,
        activation_time: request.activation_time,
        timezone: request.timezone,
    };
    should_mode_be_active(&config, None, now, false).map_err(translate_domain_error)?;

    store.set_schedule_config(&config)?;
    info!(enabled = config.enabled, "schedule config updated");
    Ok(())
}

/// Retrieves the stored schedule mode configuration, if any.
///
/// # Errors
///
/// Returns an `ApiError` if the stored document cannot be decoded.
pub fn get_schedule_config<S: CampaignStore>(
    store: &S,
) -> Result<Option<ScheduleModeConfig>, ApiError> {
    Ok(store.schedule_config()?)
}

/// Decides whether the presentation mode should currently be active.
///
/// With no stored configuration the mode is inactive.
///
/// # Errors
///
/// Returns an `ApiError` if the stored configuration does not parse.
pub fn schedule_mode_active<S: CampaignStore>(
    store: &S,
    override_marker: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    currently_active: bool,
) -> Result<bool, ApiError> {
    let Some(config) = store.schedule_config()? else {
        return Ok(false);
    };
    should_mode_be_active(&config, override_marker, now, currently_active)
        .map_err(translate_domain_error)
}
