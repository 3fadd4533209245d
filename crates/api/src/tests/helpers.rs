// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::handlers::{create_campaign, transition_campaign};
use crate::request_response::{CreateCampaignRequest, MutationResponse, TransitionRequest};
use crate::session::SessionClaims;
use cadence_persistence::{CampaignStore, MemoryStore};
use chrono::{DateTime, TimeZone, Utc};

pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

pub fn february(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, day, hour, 0, 0).unwrap()
}

pub fn member_claims(
    home_department: Option<&str>,
    operator: bool,
    business_unit: bool,
) -> SessionClaims {
    SessionClaims {
        role: String::from("member"),
        home_department: home_department.map(ToString::to_string),
        operator,
        business_unit,
    }
}

pub fn store_with_people(ids: &[&str]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for id in ids {
        store.upsert_person(cadence_domain::Person::new(
            cadence_domain::PersonId::new(id),
            format!("Person {id}"),
            format!("{id}@example.com"),
            None,
            None,
        ));
    }
    store
}

pub fn create_request(title: &str, scheduled_for: DateTime<Utc>) -> CreateCampaignRequest {
    CreateCampaignRequest {
        claims: SessionClaims::owner(),
        actor: String::from("Owner"),
        title: title.to_string(),
        scheduled_for,
        urgency: String::from("Medium"),
        difficulty: None,
        assignee_id: None,
        department: None,
        note: None,
        requires_report: false,
        report_due: None,
    }
}

/// Creates a campaign assigned to `assignee` and completes it, so the
/// completion duration runs from `created` to `completed`.
pub fn seed_completed(
    store: &mut MemoryStore,
    assignee: &str,
    created: DateTime<Utc>,
    completed: DateTime<Utc>,
) -> String {
    let mut request: CreateCampaignRequest = create_request("Seeded campaign", created);
    request.assignee_id = Some(assignee.to_string());

    let response: MutationResponse = create_campaign(store, request, created).unwrap();
    let campaign_id: String = response.campaign.campaign_id.clone();

    transition_campaign(
        store,
        &campaign_id,
        TransitionRequest {
            claims: SessionClaims::owner(),
            actor: String::from("Owner"),
            new_status: String::from("Completed"),
        },
        completed,
    )
    .unwrap();

    campaign_id
}
