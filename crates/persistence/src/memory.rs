// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use crate::store::{CampaignStore, NotificationRecord};
use cadence_domain::{
    Campaign, CampaignId, ChampionSnapshot, MonthKey, Person, PersonId, ScheduleModeConfig,
    WorkRequest,
};
use std::collections::BTreeMap;

/// The reference in-memory store adapter.
///
/// Documents are kept as serialized JSON where a real adapter would
/// persist them, so encode/decode paths are exercised the same way.
/// Used for development, tests, and single-process deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    campaigns: BTreeMap<CampaignId, Campaign>,
    people: BTreeMap<PersonId, Person>,
    snapshot_document: Option<String>,
    schedule_document: Option<String>,
    submissions_enabled: bool,
    work_requests: Vec<WorkRequest>,
    notification_log: Vec<NotificationRecord>,
}

impl MemoryStore {
    /// Creates an empty store with submissions disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            campaigns: BTreeMap::new(),
            people: BTreeMap::new(),
            snapshot_document: None,
            schedule_document: None,
            submissions_enabled: false,
            work_requests: Vec::new(),
            notification_log: Vec::new(),
        }
    }
}

impl CampaignStore for MemoryStore {
    fn allocate_campaign_id(&mut self) -> CampaignId {
        loop {
            let candidate = CampaignId::new(&format!("cmp-{:016x}", rand::random::<u64>()));
            if !self.campaigns.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn get_campaign(&self, campaign_id: &CampaignId) -> Result<Campaign, StoreError> {
        self.campaigns
            .get(campaign_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("campaign {campaign_id}")))
    }

    fn insert_campaign(&mut self, campaign: Campaign) -> Result<(), StoreError> {
        if self.campaigns.contains_key(&campaign.campaign_id) {
            return Err(StoreError::WriteFailed(format!(
                "campaign {} already exists",
                campaign.campaign_id
            )));
        }
        self.campaigns.insert(campaign.campaign_id.clone(), campaign);
        Ok(())
    }

    fn replace_campaign(&mut self, campaign: Campaign) -> Result<(), StoreError> {
        if !self.campaigns.contains_key(&campaign.campaign_id) {
            return Err(StoreError::NotFound(format!(
                "campaign {}",
                campaign.campaign_id
            )));
        }
        self.campaigns.insert(campaign.campaign_id.clone(), campaign);
        Ok(())
    }

    fn delete_campaign(&mut self, campaign_id: &CampaignId) -> Result<Campaign, StoreError> {
        self.campaigns
            .remove(campaign_id)
            .ok_or_else(|| StoreError::NotFound(format!("campaign {campaign_id}")))
    }

    fn campaigns_scheduled_in(&self, month: MonthKey) -> Vec<Campaign> {
        self.campaigns
            .values()
            .filter(|campaign| month.contains(campaign.scheduled_for))
            .cloned()
            .collect()
    }

    fn all_campaigns(&self) -> Vec<Campaign> {
        self.campaigns.values().cloned().collect()
    }

    fn upsert_person(&mut self, person: Person) {
        self.people.insert(person.person_id.clone(), person);
    }

    fn get_person(&self, person_id: &PersonId) -> Result<Person, StoreError> {
        self.people
            .get(person_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("person {person_id}")))
    }

    fn list_people(&self) -> Vec<Person> {
        self.people.values().cloned().collect()
    }

    fn cached_snapshot(&self) -> Result<Option<ChampionSnapshot>, StoreError> {
        self.snapshot_document
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(StoreError::from)
    }

    fn store_snapshot(&mut self, snapshot: &ChampionSnapshot) -> Result<(), StoreError> {
        self.snapshot_document = Some(serde_json::to_string(snapshot)?);
        Ok(())
    }

    fn schedule_config(&self) -> Result<Option<ScheduleModeConfig>, StoreError> {
        self.schedule_document
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(StoreError::from)
    }

    fn set_schedule_config(&mut self, config: &ScheduleModeConfig) -> Result<(), StoreError> {
        self.schedule_document = Some(serde_json::to_string(config)?);
        Ok(())
    }

    fn submissions_enabled(&self) -> bool {
        self.submissions_enabled
    }

    fn set_submissions_enabled(&mut self, enabled: bool) {
        self.submissions_enabled = enabled;
    }

    fn allocate_request_id(&mut self) -> String {
        loop {
            let candidate: String = format!("req-{:016x}", rand::random::<u64>());
            if !self
                .work_requests
                .iter()
                .any(|request| request.request_id == candidate)
            {
                return candidate;
            }
        }
    }

    fn append_work_request(&mut self, request: WorkRequest) -> Result<(), StoreError> {
        if self
            .work_requests
            .iter()
            .any(|existing| existing.request_id == request.request_id)
        {
            return Err(StoreError::WriteFailed(format!(
                "work request {} already exists",
                request.request_id
            )));
        }
        self.work_requests.push(request);
        Ok(())
    }

    fn list_work_requests(&self) -> Vec<WorkRequest> {
        self.work_requests.clone()
    }

    fn record_notification(&mut self, record: NotificationRecord) {
        self.notification_log.push(record);
    }

    fn notifications(&self) -> Vec<NotificationRecord> {
        self.notification_log.clone()
    }
}
