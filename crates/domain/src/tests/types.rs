// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{completed_campaign, march, planned_campaign};
use crate::error::DomainError;
use crate::types::{Campaign, CampaignId, CampaignStatus, DepartmentId, Difficulty, Urgency};
use cadence_audit::TransitionEntry;
use std::str::FromStr;

// ============================================================================
// Status Parsing and Display
// ============================================================================

#[test]
fn test_status_round_trips_through_strings() {
    for status in [
        CampaignStatus::Planned,
        CampaignStatus::Completed,
        CampaignStatus::Cancelled,
    ] {
        let parsed = CampaignStatus::from_str(status.as_str()).unwrap();
        assert_eq!(parsed, status);
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn test_status_rejects_unknown_string() {
    let result = CampaignStatus::from_str("Archived");

    assert!(matches!(result, Err(DomainError::InvalidStatus(_))));
}

#[test]
fn test_status_defaults_to_planned() {
    assert_eq!(CampaignStatus::default(), CampaignStatus::Planned);
}

// ============================================================================
// Urgency and Difficulty
// ============================================================================

#[test]
fn test_urgency_only_critical_is_highest() {
    assert!(Urgency::Critical.is_critical());
    assert!(!Urgency::High.is_critical());
    assert!(!Urgency::Medium.is_critical());
    assert!(!Urgency::Low.is_critical());
}

#[test]
fn test_urgency_orders_by_severity() {
    assert!(Urgency::Low < Urgency::Medium);
    assert!(Urgency::Medium < Urgency::High);
    assert!(Urgency::High < Urgency::Critical);
}

#[test]
fn test_urgency_rejects_unknown_string() {
    let result = Urgency::from_str("Extreme");

    assert!(matches!(result, Err(DomainError::InvalidUrgency(_))));
}

#[test]
fn test_difficulty_two_hardest_levels_are_hard() {
    assert!(Difficulty::Hard.is_hard());
    assert!(Difficulty::Severe.is_hard());
    assert!(!Difficulty::Moderate.is_hard());
    assert!(!Difficulty::Easy.is_hard());
    assert!(!Difficulty::Trivial.is_hard());
}

#[test]
fn test_difficulty_rejects_unknown_string() {
    let result = Difficulty::from_str("Impossible");

    assert!(matches!(result, Err(DomainError::InvalidDifficulty(_))));
}

// ============================================================================
// Identifiers
// ============================================================================

#[test]
fn test_reference_code_uses_first_six_alphanumerics() {
    let id = CampaignId::new("cmp-4f9a2b7c1d");

    assert_eq!(id.reference_code(), "CMP-CMP4F9");
}

#[test]
fn test_reference_code_handles_short_ids() {
    let id = CampaignId::new("a1");

    assert_eq!(id.reference_code(), "CMP-A1");
}

#[test]
fn test_department_id_normalizes_to_uppercase() {
    let dept = DepartmentId::new("marketing");

    assert_eq!(dept.value(), "MARKETING");
    assert_eq!(dept, DepartmentId::new("Marketing"));
}

// ============================================================================
// History Consistency Invariant
// ============================================================================

#[test]
fn test_status_agrees_with_history_on_fresh_campaign() {
    let campaign: Campaign = planned_campaign("c1");

    assert_eq!(campaign.derived_status(), CampaignStatus::Planned);
    assert!(campaign.validate_history_consistent().is_ok());
}

#[test]
fn test_status_agrees_with_history_after_completion() {
    let campaign: Campaign = completed_campaign("c1", "ada", 1, 3);

    assert_eq!(campaign.derived_status(), CampaignStatus::Completed);
    assert!(campaign.validate_history_consistent().is_ok());
}

#[test]
fn test_diverged_status_is_detected() {
    let mut campaign: Campaign = planned_campaign("c1");
    campaign.status = CampaignStatus::Completed;

    let result = campaign.validate_history_consistent();

    assert!(matches!(
        result,
        Err(DomainError::HistoryDiverged { .. })
    ));
}

#[test]
fn test_entered_status_at_uses_most_recent_visit() {
    let mut campaign: Campaign = completed_campaign("c1", "ada", 1, 3);
    campaign.history.record(TransitionEntry::status_changed(
        CampaignStatus::Completed,
        CampaignStatus::Planned,
        String::from("ada"),
        march(5, 8),
    ));
    campaign.status = CampaignStatus::Planned;

    assert_eq!(
        campaign.entered_status_at(CampaignStatus::Planned),
        Some(march(5, 8))
    );
    assert_eq!(
        campaign.entered_status_at(CampaignStatus::Completed),
        Some(march(3, 8))
    );
    assert!(campaign.validate_history_consistent().is_ok());
}
