// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use cadence::NotificationRequest;
use cadence_domain::{
    Campaign, CampaignId, ChampionSnapshot, MonthKey, Person, PersonId, ScheduleModeConfig,
    WorkRequest,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dispatched notification, as kept in the store's notification log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// The notification as it was surfaced.
    pub notification: NotificationRequest,
    /// When the notification was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Trait for store adapters.
///
/// The lifecycle layer computes full replacement records; adapters only
/// move documents. Every single-document write is atomic: it either
/// lands whole or fails with no partial state. Failures surface
/// verbatim as [`StoreError`], and reads never mutate.
pub trait CampaignStore {
    /// Allocates a fresh campaign identifier.
    fn allocate_campaign_id(&mut self) -> CampaignId;

    /// Retrieves a campaign by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no campaign has this identifier.
    fn get_campaign(&self, campaign_id: &CampaignId) -> Result<Campaign, StoreError>;

    /// Inserts a new campaign.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the identifier is already
    /// taken.
    fn insert_campaign(&mut self, campaign: Campaign) -> Result<(), StoreError>;

    /// Replaces an existing campaign with a new full record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no campaign has this identifier;
    /// nothing is written in that case.
    fn replace_campaign(&mut self, campaign: Campaign) -> Result<(), StoreError>;

    /// Removes a campaign and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no campaign has this identifier.
    fn delete_campaign(&mut self, campaign_id: &CampaignId) -> Result<Campaign, StoreError>;

    /// Returns all campaigns scheduled inside the given month.
    fn campaigns_scheduled_in(&self, month: MonthKey) -> Vec<Campaign>;

    /// Returns all campaigns.
    fn all_campaigns(&self) -> Vec<Campaign>;

    /// Inserts or replaces a person record.
    fn upsert_person(&mut self, person: Person);

    /// Retrieves a person by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no person has this identifier.
    fn get_person(&self, person_id: &PersonId) -> Result<Person, StoreError>;

    /// Returns all person records.
    fn list_people(&self) -> Vec<Person>;

    /// Retrieves the cached champion snapshot, if one has been stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SerializationError` if the stored document
    /// cannot be decoded.
    fn cached_snapshot(&self) -> Result<Option<ChampionSnapshot>, StoreError>;

    /// Stores the champion snapshot, replacing any previous one.
    ///
    /// The snapshot is a singular document; only the latest computation
    /// is retained.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SerializationError` if the snapshot cannot
    /// be encoded.
    fn store_snapshot(&mut self, snapshot: &ChampionSnapshot) -> Result<(), StoreError>;

    /// Retrieves the schedule mode configuration, if one has been stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SerializationError` if the stored document
    /// cannot be decoded.
    fn schedule_config(&self) -> Result<Option<ScheduleModeConfig>, StoreError>;

    /// Stores the schedule mode configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SerializationError` if the configuration
    /// cannot be encoded.
    fn set_schedule_config(&mut self, config: &ScheduleModeConfig) -> Result<(), StoreError>;

    /// Returns whether business-unit work submissions are enabled.
    fn submissions_enabled(&self) -> bool;

    /// Sets whether business-unit work submissions are enabled.
    fn set_submissions_enabled(&mut self, enabled: bool);

    /// Allocates a fresh work request identifier.
    fn allocate_request_id(&mut self) -> String;

    /// Appends a work request to the triage queue.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the identifier is already
    /// taken.
    fn append_work_request(&mut self, request: WorkRequest) -> Result<(), StoreError>;

    /// Returns all pending work requests in submission order.
    fn list_work_requests(&self) -> Vec<WorkRequest>;

    /// Appends an entry to the notification log.
    fn record_notification(&mut self, record: NotificationRecord);

    /// Returns the notification log in append order.
    fn notifications(&self) -> Vec<NotificationRecord>;
}
