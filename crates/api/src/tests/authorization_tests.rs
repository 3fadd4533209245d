// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_request, march, member_claims, store_with_people};
use crate::error::ApiError;
use crate::handlers::{
    create_campaign, delete_campaign, get_campaign, set_submissions_enabled, submit_work_request,
    transition_campaign,
};
use crate::request_response::{
    CampaignView, CreateCampaignRequest, SubmissionsToggleRequest, TransitionRequest,
    WorkRequestSubmission,
};
use crate::session::SessionClaims;
use cadence_domain::WorkRequest;
use cadence_persistence::MemoryStore;

fn marketing_campaign(store: &mut MemoryStore) -> String {
    let mut request: CreateCampaignRequest = create_request("Spring launch", march(15, 10));
    request.department = Some(String::from("marketing"));
    create_campaign(store, request, march(1, 8))
        .unwrap()
        .campaign
        .campaign_id
}

// ============================================================================
// Session Resolution
// ============================================================================

#[test]
fn test_unknown_role_fails_authentication() {
    let mut store = MemoryStore::new();
    let mut request: CreateCampaignRequest = create_request("Spring launch", march(15, 10));
    request.claims.role = String::from("superuser");

    let result = create_campaign(&mut store, request, march(1, 8));

    assert!(matches!(
        result,
        Err(ApiError::AuthenticationFailed { .. })
    ));
}

// ============================================================================
// Creation Capability
// ============================================================================

#[test]
fn test_guest_cannot_create() {
    let mut store = MemoryStore::new();
    let mut request: CreateCampaignRequest = create_request("Spring launch", march(15, 10));
    request.claims = SessionClaims::guest();

    let result = create_campaign(&mut store, request, march(1, 8));

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_plain_member_cannot_create() {
    let mut store = MemoryStore::new();
    let mut request: CreateCampaignRequest = create_request("Spring launch", march(15, 10));
    request.claims = member_claims(Some("marketing"), false, true);

    let result = create_campaign(&mut store, request, march(1, 8));

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_operator_can_create() {
    let mut store = MemoryStore::new();
    let mut request: CreateCampaignRequest = create_request("Spring launch", march(15, 10));
    request.claims = member_claims(None, true, false);

    assert!(create_campaign(&mut store, request, march(1, 8)).is_ok());
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_owner_sees_clear_view() {
    let mut store = MemoryStore::new();
    let campaign_id: String = marketing_campaign(&mut store);

    let view: CampaignView =
        get_campaign(&store, &SessionClaims::owner(), &campaign_id).unwrap();

    assert!(!view.blurred);
    assert_eq!(view.title.as_deref(), Some("Spring launch"));
    assert!(view.capabilities.can_delete);
}

#[test]
fn test_foreign_department_member_sees_blurred_view() {
    let mut store = MemoryStore::new();
    let campaign_id: String = marketing_campaign(&mut store);

    let view: CampaignView = get_campaign(
        &store,
        &member_claims(Some("sales"), false, false),
        &campaign_id,
    )
    .unwrap();

    assert!(view.blurred);
    assert_eq!(view.title, None);
    assert_eq!(view.note, None);
    assert_eq!(view.assignee, None);
    // Scheduling metadata survives blurring.
    assert_eq!(view.scheduled_for, march(15, 10));
    assert_eq!(view.status, "Planned");
}

#[test]
fn test_home_department_member_sees_clear_read_only_view() {
    let mut store = MemoryStore::new();
    let campaign_id: String = marketing_campaign(&mut store);

    let view: CampaignView = get_campaign(
        &store,
        &member_claims(Some("Marketing"), false, false),
        &campaign_id,
    )
    .unwrap();

    assert!(!view.blurred);
    assert_eq!(view.title.as_deref(), Some("Spring launch"));
    assert!(!view.capabilities.can_change_status);
    assert!(!view.capabilities.can_edit);
}

#[test]
fn test_guest_sees_blurred_view() {
    let mut store = MemoryStore::new();
    let campaign_id: String = marketing_campaign(&mut store);

    let view: CampaignView =
        get_campaign(&store, &SessionClaims::guest(), &campaign_id).unwrap();

    assert!(view.blurred);
    assert!(!view.capabilities.can_request_work);
}

// ============================================================================
// Mutation Capability
// ============================================================================

#[test]
fn test_home_member_cannot_transition() {
    let mut store = MemoryStore::new();
    let campaign_id: String = marketing_campaign(&mut store);

    let result = transition_campaign(
        &mut store,
        &campaign_id,
        TransitionRequest {
            claims: member_claims(Some("marketing"), false, false),
            actor: String::from("Member"),
            new_status: String::from("Completed"),
        },
        march(20, 9),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_operator_can_transition_any_campaign() {
    let mut store = MemoryStore::new();
    let campaign_id: String = marketing_campaign(&mut store);

    let result = transition_campaign(
        &mut store,
        &campaign_id,
        TransitionRequest {
            claims: member_claims(Some("sales"), true, false),
            actor: String::from("Operator"),
            new_status: String::from("Completed"),
        },
        march(20, 9),
    );

    assert!(result.is_ok());
}

#[test]
fn test_operator_cannot_delete() {
    let mut store = MemoryStore::new();
    let campaign_id: String = marketing_campaign(&mut store);

    let result = delete_campaign(
        &mut store,
        &campaign_id,
        &member_claims(None, true, false),
        "Operator",
        march(25, 9),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

// ============================================================================
// Work Requests
// ============================================================================

fn submission(claims: SessionClaims) -> WorkRequestSubmission {
    WorkRequestSubmission {
        claims,
        requested_by: String::from("Member"),
        title: String::from("Pop-up booth"),
        scheduled_for: march(20, 10),
        note: None,
    }
}

#[test]
fn test_business_unit_member_can_submit_when_enabled() {
    let mut store = store_with_people(&[]);
    set_submissions_enabled(
        &mut store,
        SubmissionsToggleRequest {
            claims: SessionClaims::owner(),
            enabled: true,
        },
    )
    .unwrap();

    let request: WorkRequest = submit_work_request(
        &mut store,
        submission(member_claims(Some("marketing"), false, true)),
        march(10, 9),
    )
    .unwrap();

    assert_eq!(request.title, "Pop-up booth");
    assert_eq!(
        request.department.as_ref().map(ToString::to_string),
        Some(String::from("MARKETING"))
    );
}

#[test]
fn test_submission_blocked_when_toggle_disabled() {
    let mut store = MemoryStore::new();

    let result = submit_work_request(
        &mut store,
        submission(member_claims(Some("marketing"), false, true)),
        march(10, 9),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_submission_requires_business_unit_flag() {
    let mut store = MemoryStore::new();
    set_submissions_enabled(
        &mut store,
        SubmissionsToggleRequest {
            claims: SessionClaims::owner(),
            enabled: true,
        },
    )
    .unwrap();

    let result = submit_work_request(
        &mut store,
        submission(member_claims(Some("marketing"), false, false)),
        march(10, 9),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_submissions_toggle_is_owner_only() {
    let mut store = MemoryStore::new();

    let result = set_submissions_enabled(
        &mut store,
        SubmissionsToggleRequest {
            claims: member_claims(None, true, false),
            enabled: true,
        },
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
