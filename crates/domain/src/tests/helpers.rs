// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared constructors for domain tests.

use crate::types::{Campaign, CampaignId, CampaignStatus, DepartmentId, PersonId, Urgency};
use cadence_audit::{History, TransitionEntry};
use chrono::{DateTime, TimeZone, Utc};

/// A UTC instant within March 2026.
pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

/// Creates a planned campaign with a consistent single-entry history.
pub fn planned_campaign(id: &str) -> Campaign {
    let created: DateTime<Utc> = march(1, 8);
    let mut history: History<CampaignStatus> = History::new();
    history.record(TransitionEntry::created(
        CampaignStatus::Planned,
        String::from("System"),
        created,
    ));

    Campaign {
        campaign_id: CampaignId::new(id),
        title: format!("Campaign {id}"),
        scheduled_for: march(10, 9),
        original_scheduled_for: None,
        urgency: Urgency::Medium,
        difficulty: None,
        assignee: None,
        department: None,
        status: CampaignStatus::Planned,
        note: None,
        requires_report: false,
        report_due: None,
        created_at: created,
        updated_at: created,
        history,
    }
}

/// Creates a campaign completed by `assignee`, created on `created_day`
/// and completed on `completed_day`, scheduled inside March 2026.
pub fn completed_campaign(
    id: &str,
    assignee: &str,
    created_day: u32,
    completed_day: u32,
) -> Campaign {
    let mut campaign: Campaign = planned_campaign(id);
    let created: DateTime<Utc> = march(created_day, 8);
    let completed: DateTime<Utc> = march(completed_day, 8);

    let mut history: History<CampaignStatus> = History::new();
    history.record(TransitionEntry::created(
        CampaignStatus::Planned,
        String::from("System"),
        created,
    ));
    history.record(TransitionEntry::status_changed(
        CampaignStatus::Planned,
        CampaignStatus::Completed,
        assignee.to_string(),
        completed,
    ));

    campaign.assignee = Some(PersonId::new(assignee));
    campaign.status = CampaignStatus::Completed;
    campaign.created_at = created;
    campaign.updated_at = completed;
    campaign.history = history;
    campaign
}

/// Creates a planned campaign owned by `department`.
pub fn department_campaign(id: &str, department: &str) -> Campaign {
    let mut campaign: Campaign = planned_campaign(id);
    campaign.department = Some(DepartmentId::new(department));
    campaign
}
