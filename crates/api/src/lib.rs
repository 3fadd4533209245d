// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! API boundary layer for the Cadence Campaign Tracker.
//!
//! Sessions arrive as untyped claims and leave as typed role bundles;
//! campaigns leave only as capability-projected views. Handlers
//! orchestrate the lifecycle layer against a [`CampaignStore`] and
//! translate every lower-layer error into the [`ApiError`] contract.
//!
//! [`CampaignStore`]: cadence_persistence::CampaignStore

mod champion;
mod draft_policy;
mod error;
mod handlers;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use champion::{compute_champion, get_cached_snapshot};
pub use draft_policy::{DraftPolicy, DraftPolicyError};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    clear_note, create_campaign, delete_campaign, get_campaign, get_schedule_config,
    list_campaigns, list_people, list_work_requests, reassign_campaign, register_person,
    schedule_mode_active, set_note, set_schedule_config, set_submissions_enabled,
    submit_work_request, transition_campaign,
};
pub use request_response::{
    CampaignView, CreateCampaignRequest, MutationResponse, RegisterPersonRequest, ReassignRequest,
    ScheduleConfigRequest, SetNoteRequest, SubmissionsToggleRequest, TransitionRequest,
    WorkRequestSubmission,
};
pub use session::{SessionClaims, resolve_session};
