// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Champion engine orchestration.
//!
//! The leaderboard computation itself is pure and lives in the domain
//! crate. This shell owns the cache discipline: one snapshot document,
//! recomputed only when it is older than the target month or when a
//! recompute is forced.

use crate::error::ApiError;
use cadence_domain::{Campaign, ChampionSnapshot, MonthKey, compute_champion_snapshot};
use cadence_persistence::CampaignStore;
use chrono::{DateTime, Utc};
use tracing::info;

/// Drops winnerless snapshots.
///
/// Applied to cached and fresh results alike, so repeated calls over
/// the same data return bit-identical answers.
fn filter_winnerless(snapshot: ChampionSnapshot) -> Option<ChampionSnapshot> {
    snapshot.has_winners().then_some(snapshot)
}

/// Computes the champion snapshot for the month preceding `reference`.
///
/// With `force` unset, a cached snapshot at or past the target month is
/// returned as-is, `computed_at` untouched. Otherwise the target
/// month's campaigns are read in bulk, the snapshot is computed and
/// persisted (even when empty), and the result is returned.
///
/// Returns `None` when all three boards are winnerless.
///
/// # Errors
///
/// Returns an `ApiError` if the store cannot be read or the snapshot
/// cannot be written.
pub fn compute_champion<S: CampaignStore>(
    store: &mut S,
    reference: DateTime<Utc>,
    force: bool,
) -> Result<Option<ChampionSnapshot>, ApiError> {
    let target: MonthKey = MonthKey::preceding(reference);

    if !force
        && let Some(cached) = store.cached_snapshot()?
        && cached.month >= target
    {
        return Ok(filter_winnerless(cached));
    }

    let campaigns: Vec<Campaign> = store.campaigns_scheduled_in(target);
    let snapshot: ChampionSnapshot = compute_champion_snapshot(&campaigns, target, reference);
    store.store_snapshot(&snapshot)?;
    info!(month = %target, winners = snapshot.has_winners(), "champion snapshot computed");

    Ok(filter_winnerless(snapshot))
}

/// Reads the cached snapshot for a specific month, without recomputing.
///
/// Returns `None` when no snapshot is stored or the stored one covers a
/// different month.
///
/// # Errors
///
/// Returns an `ApiError` if the stored document cannot be decoded.
pub fn get_cached_snapshot<S: CampaignStore>(
    store: &S,
    month: MonthKey,
) -> Result<Option<ChampionSnapshot>, ApiError> {
    Ok(store
        .cached_snapshot()?
        .filter(|snapshot| snapshot.month == month))
}
