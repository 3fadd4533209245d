// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{february, march, seed_completed, store_with_people};
use crate::champion::{compute_champion, get_cached_snapshot};
use cadence_domain::{ChampionSnapshot, MonthKey, PersonId};
use cadence_persistence::{CampaignStore, MemoryStore};

fn february_key() -> MonthKey {
    MonthKey::new(2026, 2).unwrap()
}

fn seeded_store() -> MemoryStore {
    let mut store = store_with_people(&["ada", "bob"]);
    seed_completed(&mut store, "ada", february(1, 8), february(2, 8));
    seed_completed(&mut store, "ada", february(5, 8), february(6, 8));
    seed_completed(&mut store, "ada", february(9, 8), february(10, 8));
    store
}

#[test]
fn test_compute_names_winner_and_persists_snapshot() {
    let mut store = seeded_store();

    let snapshot: ChampionSnapshot =
        compute_champion(&mut store, march(15, 3), false).unwrap().unwrap();

    assert_eq!(snapshot.month, february_key());
    assert_eq!(snapshot.completions.best, 3);
    assert_eq!(snapshot.completions.winners, vec![PersonId::new("ada")]);
    assert_eq!(snapshot.speed.best_average_hours, Some(24.0));
    assert_eq!(store.cached_snapshot().unwrap(), Some(snapshot));
}

#[test]
fn test_cached_snapshot_is_returned_untouched() {
    let mut store = seeded_store();
    let first: ChampionSnapshot =
        compute_champion(&mut store, march(15, 3), false).unwrap().unwrap();

    // New completions land after the first run; without force the
    // cached answer stands, computed_at included.
    seed_completed(&mut store, "bob", february(11, 8), february(12, 8));
    seed_completed(&mut store, "bob", february(13, 8), february(14, 8));
    seed_completed(&mut store, "bob", february(15, 8), february(16, 8));
    seed_completed(&mut store, "bob", february(17, 8), february(18, 8));

    let second: ChampionSnapshot =
        compute_champion(&mut store, march(20, 3), false).unwrap().unwrap();

    assert_eq!(second, first);
    assert_eq!(second.computed_at, march(15, 3));
}

#[test]
fn test_force_recompute_overwrites_cached_snapshot() {
    let mut store = seeded_store();
    compute_champion(&mut store, march(15, 3), false).unwrap();

    seed_completed(&mut store, "bob", february(11, 8), february(12, 8));
    seed_completed(&mut store, "bob", february(13, 8), february(14, 8));
    seed_completed(&mut store, "bob", february(15, 8), february(16, 8));
    seed_completed(&mut store, "bob", february(17, 8), february(18, 8));

    let recomputed: ChampionSnapshot =
        compute_champion(&mut store, march(20, 3), true).unwrap().unwrap();

    assert_eq!(recomputed.completions.best, 4);
    assert_eq!(recomputed.completions.winners, vec![PersonId::new("bob")]);
    assert_eq!(recomputed.computed_at, march(20, 3));
}

#[test]
fn test_empty_month_persists_snapshot_and_returns_none() {
    let mut store = MemoryStore::new();

    let result = compute_champion(&mut store, march(15, 3), false).unwrap();

    assert_eq!(result, None);
    // The winnerless snapshot is still persisted as the cache document.
    let cached: ChampionSnapshot = store.cached_snapshot().unwrap().unwrap();
    assert_eq!(cached.month, february_key());
    assert!(!cached.has_winners());
}

#[test]
fn test_winnerless_cache_keeps_returning_none_without_recompute() {
    let mut store = MemoryStore::new();
    compute_champion(&mut store, march(15, 3), false).unwrap();
    let cached_before: Option<ChampionSnapshot> = store.cached_snapshot().unwrap();

    let result = compute_champion(&mut store, march(16, 3), false).unwrap();

    assert_eq!(result, None);
    assert_eq!(store.cached_snapshot().unwrap(), cached_before);
}

#[test]
fn test_cached_accessor_filters_by_month() {
    let mut store = seeded_store();
    compute_champion(&mut store, march(15, 3), false).unwrap();

    assert!(get_cached_snapshot(&store, february_key()).unwrap().is_some());
    assert_eq!(
        get_cached_snapshot(&store, MonthKey::new(2026, 1).unwrap()).unwrap(),
        None
    );
}
