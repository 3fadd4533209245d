// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply_create;
use crate::command::CampaignDraft;
use cadence_domain::{Campaign, CampaignId, Person, PersonId, Urgency};
use chrono::{DateTime, TimeZone, Utc};

pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

pub fn person(id: &str, name: &str) -> Person {
    Person::new(
        PersonId::new(id),
        name.to_string(),
        format!("{id}@example.com"),
        None,
        None,
    )
}

pub fn draft(title: &str) -> CampaignDraft {
    CampaignDraft {
        title: title.to_string(),
        scheduled_for: march(15, 10),
        urgency: Urgency::Medium,
        difficulty: None,
        assignee: None,
        department: None,
        note: None,
        requires_report: false,
        report_due: None,
    }
}

pub fn planned_campaign(title: &str) -> Campaign {
    apply_create(CampaignId::new("cmp-001"), draft(title), "System", march(1, 8))
        .unwrap()
        .campaign
}
