// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::effects::SideEffect;
use cadence_domain::Campaign;

/// The result of a successful lifecycle operation.
///
/// Carries the campaign as it should be persisted plus the side effects
/// the caller should carry out after persisting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleOutcome {
    /// The campaign after the operation.
    pub campaign: Campaign,
    /// The side effects requested by the operation.
    pub effects: Vec<SideEffect>,
}

impl LifecycleOutcome {
    /// Creates an outcome with no side effects.
    #[must_use]
    pub const fn unchanged(campaign: Campaign) -> Self {
        Self {
            campaign,
            effects: Vec::new(),
        }
    }

    /// Creates an outcome with the given side effects.
    #[must_use]
    pub const fn with_effects(campaign: Campaign, effects: Vec<SideEffect>) -> Self {
        Self { campaign, effects }
    }
}
