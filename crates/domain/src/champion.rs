// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly champion computation over completed campaigns.
//!
//! This module provides the pure, deterministic leaderboard calculation.
//! It operates on an explicit snapshot of inputs (the campaigns of one
//! calendar month) and never performs I/O; the orchestration shell that
//! reads the store, applies the monotonic cache rule, and persists the
//! result lives in the api crate.
//!
//! ## Invariants
//!
//! - Ties are never broken: every assignee sharing the best value is a
//!   co-winner.
//! - Winner sets are ordered by person id, so identical inputs always
//!   produce identical snapshots.
//! - A board with nobody above its qualification threshold has an empty
//!   winner set.

use crate::error::DomainError;
use crate::types::{Campaign, CampaignStatus, PersonId};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Minimum completions in the month before the completion board names a winner.
pub const COMPLETION_QUALIFYING_MINIMUM: u32 = 3;

/// Minimum timed completions before an assignee qualifies for the speed board.
pub const TIMED_COMPLETION_MINIMUM: usize = 3;

/// Minimum hard completions before the difficulty board names a winner.
pub const HARD_QUALIFYING_MINIMUM: u32 = 2;

/// A calendar month key (year and 1-based month).
///
/// Keys order chronologically; the derived ordering relies on the field
/// order (year before month).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    /// The calendar year.
    year: i32,
    /// The month (1-12).
    month: u32,
}

impl MonthKey {
    /// Creates a new `MonthKey`.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not in the range 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(DomainError::InvalidMonthKey(format!("{year}-{month}")))
        }
    }

    /// Returns the calendar month immediately preceding `reference`'s month.
    #[must_use]
    pub fn preceding(reference: DateTime<Utc>) -> Self {
        if reference.month() == 1 {
            Self {
                year: reference.year() - 1,
                month: 12,
            }
        } else {
            Self {
                year: reference.year(),
                month: reference.month() - 1,
            }
        }
    }

    /// Returns whether `instant` falls within this calendar month (UTC).
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant.year() == self.year && instant.month() == self.month
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_part, month_part) = s
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidMonthKey(s.to_string()))?;
        let year: i32 = year_part
            .parse()
            .map_err(|_| DomainError::InvalidMonthKey(s.to_string()))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| DomainError::InvalidMonthKey(s.to_string()))?;
        Self::new(year, month).map_err(|_| DomainError::InvalidMonthKey(s.to_string()))
    }
}

/// The completion-count leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionBoard {
    /// The best completion count observed.
    pub best: u32,
    /// Everyone at the best count, empty below the qualification threshold.
    pub winners: Vec<PersonId>,
}

/// The average-completion-speed leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedBoard {
    /// The best (lowest) average duration in hours, if anyone qualified.
    pub best_average_hours: Option<f64>,
    /// Everyone at the best average.
    pub winners: Vec<PersonId>,
}

/// The hard-campaign-count leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBoard {
    /// The best hard-completion count observed.
    pub best: u32,
    /// Everyone at the best count, empty below the qualification threshold.
    pub winners: Vec<PersonId>,
}

/// The cached monthly leaderboard result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionSnapshot {
    /// The month this snapshot covers.
    pub month: MonthKey,
    /// The completion-count board.
    pub completions: CompletionBoard,
    /// The speed board.
    pub speed: SpeedBoard,
    /// The difficulty board.
    pub hard_completions: DifficultyBoard,
    /// When this snapshot was computed.
    pub computed_at: DateTime<Utc>,
}

impl ChampionSnapshot {
    /// Returns whether any board produced a winner.
    #[must_use]
    pub fn has_winners(&self) -> bool {
        !self.completions.winners.is_empty()
            || !self.speed.winners.is_empty()
            || !self.hard_completions.winners.is_empty()
    }
}

/// Computes the champion snapshot for one calendar month.
///
/// This is a pure, deterministic batch calculation. Campaigns outside the
/// target month, not Completed, or without an assignee are ignored, so
/// callers may pass an unfiltered collection.
///
/// # Arguments
///
/// * `campaigns` - The candidate campaigns
/// * `month` - The target month
/// * `computed_at` - The timestamp recorded on the snapshot
#[must_use]
pub fn compute_champion_snapshot(
    campaigns: &[Campaign],
    month: MonthKey,
    computed_at: DateTime<Utc>,
) -> ChampionSnapshot {
    let eligible: Vec<&Campaign> = campaigns
        .iter()
        .filter(|campaign| {
            month.contains(campaign.scheduled_for)
                && campaign.status == CampaignStatus::Completed
                && campaign.assignee.is_some()
        })
        .collect();

    ChampionSnapshot {
        month,
        completions: completion_board(&eligible),
        speed: speed_board(&eligible),
        hard_completions: difficulty_board(&eligible),
        computed_at,
    }
}

/// Counts completions per assignee and picks everyone at the maximum.
fn completion_board(eligible: &[&Campaign]) -> CompletionBoard {
    let mut counts: BTreeMap<PersonId, u32> = BTreeMap::new();
    for campaign in eligible {
        if let Some(assignee) = &campaign.assignee {
            *counts.entry(assignee.clone()).or_insert(0) += 1;
        }
    }

    let best: u32 = counts.values().copied().max().unwrap_or(0);
    let winners: Vec<PersonId> = if best >= COMPLETION_QUALIFYING_MINIMUM {
        counts
            .iter()
            .filter(|(_, count)| **count == best)
            .map(|(person, _)| person.clone())
            .collect()
    } else {
        Vec::new()
    };

    CompletionBoard { best, winners }
}

/// Averages completion duration per assignee and picks everyone at the minimum.
///
/// The duration base point is `original_scheduled_for` when present (the
/// pre-reassignment date), else the first transition entry. The end point
/// is the most recent entry into Completed, falling back to `updated_at`.
/// Campaigns with a missing base point or a negative duration are skipped.
fn speed_board(eligible: &[&Campaign]) -> SpeedBoard {
    let mut durations: BTreeMap<PersonId, Vec<f64>> = BTreeMap::new();
    for campaign in eligible {
        let Some(assignee) = &campaign.assignee else {
            continue;
        };
        let Some(hours) = completion_hours(campaign) else {
            continue;
        };
        durations.entry(assignee.clone()).or_default().push(hours);
    }

    let averages: Vec<(PersonId, f64)> = durations
        .into_iter()
        .filter(|(_, hours)| hours.len() >= TIMED_COMPLETION_MINIMUM)
        .map(|(person, hours)| {
            #[allow(clippy::cast_precision_loss)]
            let average: f64 = hours.iter().sum::<f64>() / hours.len() as f64;
            (person, average)
        })
        .collect();

    let best: Option<f64> = averages
        .iter()
        .map(|(_, average)| *average)
        .min_by(|a, b| a.total_cmp(b));

    let winners: Vec<PersonId> = best.map_or_else(Vec::new, |best_average| {
        averages
            .iter()
            .filter(|(_, average)| (average - best_average).abs() < f64::EPSILON)
            .map(|(person, _)| person.clone())
            .collect()
    });

    SpeedBoard {
        best_average_hours: best,
        winners,
    }
}

/// Computes the timed completion duration for one campaign, in hours.
fn completion_hours(campaign: &Campaign) -> Option<f64> {
    let start: DateTime<Utc> = campaign
        .original_scheduled_for
        .or_else(|| campaign.history.first().map(|entry| entry.timestamp))?;
    let end: DateTime<Utc> = campaign
        .entered_status_at(CampaignStatus::Completed)
        .unwrap_or(campaign.updated_at);

    let seconds: i64 = (end - start).num_seconds();
    if seconds < 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(seconds as f64 / 3600.0)
}

/// Counts hard completions per assignee and picks everyone at the maximum.
fn difficulty_board(eligible: &[&Campaign]) -> DifficultyBoard {
    let mut counts: BTreeMap<PersonId, u32> = BTreeMap::new();
    for campaign in eligible {
        let is_hard: bool = campaign
            .difficulty
            .is_some_and(|difficulty| difficulty.is_hard());
        if !is_hard {
            continue;
        }
        if let Some(assignee) = &campaign.assignee {
            *counts.entry(assignee.clone()).or_insert(0) += 1;
        }
    }

    let best: u32 = counts.values().copied().max().unwrap_or(0);
    let winners: Vec<PersonId> = if best >= HARD_QUALIFYING_MINIMUM {
        counts
            .iter()
            .filter(|(_, count)| **count == best)
            .map(|(person, _)| person.clone())
            .collect()
    } else {
        Vec::new()
    };

    DifficultyBoard { best, winners }
}
