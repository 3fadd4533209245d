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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of event a transition entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionAction {
    /// The record was created in its initial state.
    Created,
    /// The record moved from one state to another.
    StatusChanged,
}

impl TransitionAction {
    /// Converts this action to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::StatusChanged => "status_changed",
        }
    }
}

impl std::fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable entry in a record's transition log.
///
/// Every successful state change appends exactly one entry. Entries are
/// immutable once written and capture:
/// - When the change happened (timestamp)
/// - What kind of change it was (action)
/// - The state before the change (`old_status`, absent for `Created`)
/// - The state after the change (`new_status`)
/// - Who performed it (actor display name, or `System`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEntry<S> {
    /// When this transition occurred.
    pub timestamp: DateTime<Utc>,
    /// The kind of event recorded.
    pub action: TransitionAction,
    /// The state before the transition. Absent for `Created` entries.
    pub old_status: Option<S>,
    /// The state after the transition.
    pub new_status: S,
    /// The actor who initiated the transition.
    pub actor: String,
}

impl<S> TransitionEntry<S> {
    /// Creates an entry recording the creation of a record.
    ///
    /// # Arguments
    ///
    /// * `initial` - The state the record was created in
    /// * `actor` - The actor who created the record
    /// * `timestamp` - When the record was created
    #[must_use]
    pub const fn created(initial: S, actor: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            action: TransitionAction::Created,
            old_status: None,
            new_status: initial,
            actor,
        }
    }

    /// Creates an entry recording a state change.
    ///
    /// # Arguments
    ///
    /// * `old_status` - The state before the change
    /// * `new_status` - The state after the change
    /// * `actor` - The actor who performed the change
    /// * `timestamp` - When the change occurred
    #[must_use]
    pub const fn status_changed(
        old_status: S,
        new_status: S,
        actor: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            action: TransitionAction::StatusChanged,
            old_status: Some(old_status),
            new_status,
            actor,
        }
    }
}

/// An append-only sequence of transition entries.
///
/// The wrapper is the enforcement point for the append-only invariant:
/// entries can be recorded and read, never mutated, removed, or reordered.
/// Callers that need the raw sequence get an immutable slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History<S> {
    entries: Vec<TransitionEntry<S>>,
}

impl<S> History<S> {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry to the log.
    ///
    /// This is the only mutation the log permits.
    pub fn record(&mut self, entry: TransitionEntry<S>) {
        self.entries.push(entry);
    }

    /// Returns all entries in append order.
    #[must_use]
    pub fn entries(&self) -> &[TransitionEntry<S>] {
        &self.entries
    }

    /// Returns the most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TransitionEntry<S>> {
        self.entries.last()
    }

    /// Returns the first entry, if any.
    #[must_use]
    pub fn first(&self) -> Option<&TransitionEntry<S>> {
        self.entries.first()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: PartialEq> History<S> {
    /// Returns the timestamp of the canonical point of entry into `status`.
    ///
    /// This is the most recent entry whose `new_status` equals `status`.
    /// Earlier visits to the same status are superseded.
    #[must_use]
    pub fn entered_at(&self, status: &S) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.new_status == *status)
            .map(|entry| entry.timestamp)
    }
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}
