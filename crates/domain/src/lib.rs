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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod champion;
mod error;
mod schedule;
mod types;
mod validation;
mod visibility;

#[cfg(test)]
mod tests;

pub use champion::{
    COMPLETION_QUALIFYING_MINIMUM, CompletionBoard, ChampionSnapshot, DifficultyBoard,
    HARD_QUALIFYING_MINIMUM, MonthKey, SpeedBoard, TIMED_COMPLETION_MINIMUM,
    compute_champion_snapshot,
};
pub use error::DomainError;
pub use schedule::{DEACTIVATION_TIME, ScheduleModeConfig, should_mode_be_active};
pub use types::{
    Campaign, CampaignId, CampaignStatus, DepartmentId, Difficulty, Person, PersonId, Urgency,
    WorkRequest,
};
pub use validation::{validate_actor, validate_title};
pub use visibility::{CapabilitySet, Session, resolve_capabilities};
