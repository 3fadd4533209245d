// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability resolution for session-aware record gating.
//!
//! Capabilities expose what a session may do with a given campaign
//! without leaking record content. Resolution is a pure function of the
//! session and the campaign's department: it is recomputed on every list
//! render, so it must carry no hidden state and no caching.

use crate::types::{Campaign, DepartmentId};
use serde::{Deserialize, Serialize};

/// The resolved role bundle for the current session.
///
/// Exactly one variant holds at a time. The owner/operator/business-unit
/// flags of the source system exist only as enum structure here, so
/// contradictory combinations are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    /// The top administrative login. Full capability over every record.
    Owner,
    /// A logged-in department member.
    DepartmentMember {
        /// The member's home department, if one is configured.
        home_department: Option<DepartmentId>,
        /// The "views everything" flag. Grants clear reads and status
        /// changes across departments, but never edit or delete.
        operator: bool,
        /// The business-unit flag. Gates work-request submission.
        business_unit: bool,
    },
    /// An anonymous visitor. Blurred reads only.
    Guest,
}

/// What a session may do with a given campaign.
///
/// `can_request_work` is not a campaign capability: it gates the creation
/// of a `WorkRequest` and is resolved here only so callers get the whole
/// picture from one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// The session may see title and content unblurred.
    pub can_read_clear: bool,
    /// The session may edit campaign fields.
    pub can_edit: bool,
    /// The session may change the lifecycle status.
    pub can_change_status: bool,
    /// The session may delete the campaign.
    pub can_delete: bool,
    /// The session may create campaigns directly.
    pub can_create: bool,
    /// The session may submit a work request instead of a campaign.
    pub can_request_work: bool,
}

impl CapabilitySet {
    /// The full capability set held by the owner session.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            can_read_clear: true,
            can_edit: true,
            can_change_status: true,
            can_delete: true,
            can_create: true,
            can_request_work: false,
        }
    }

    /// The operator set: clear reads and status changes, no edit/delete.
    #[must_use]
    pub const fn operator() -> Self {
        Self {
            can_read_clear: true,
            can_edit: false,
            can_change_status: true,
            can_delete: false,
            can_create: true,
            can_request_work: false,
        }
    }

    /// Read-only clear visibility, as granted on home-department records.
    #[must_use]
    pub const fn read_only(can_request_work: bool) -> Self {
        Self {
            can_read_clear: true,
            can_edit: false,
            can_change_status: false,
            can_delete: false,
            can_create: false,
            can_request_work,
        }
    }

    /// Blurred visibility with no interaction capability.
    #[must_use]
    pub const fn blurred(can_request_work: bool) -> Self {
        Self {
            can_read_clear: false,
            can_edit: false,
            can_change_status: false,
            can_delete: false,
            can_create: false,
            can_request_work,
        }
    }
}

/// Resolves the capability set for a session viewing a campaign.
///
/// Precedence:
///
/// 1. Owner: full capability regardless of department.
/// 2. Department member with the operator flag: clear reads, status
///    changes, and direct creation; never edit or delete.
/// 3. Plain department member: clear read-only on campaigns in the home
///    department; blurred otherwise. A campaign without a department is
///    clear only to owner/operator sessions.
/// 4. Guest: blurred, no interaction.
///
/// Work-request submission requires the business-unit flag and the global
/// submissions toggle; it is independent of the campaign under view.
///
/// # Arguments
///
/// * `session` - The resolved role bundle
/// * `campaign` - The campaign being viewed
/// * `submissions_enabled` - The global request-submission toggle
#[must_use]
pub fn resolve_capabilities(
    session: &Session,
    campaign: &Campaign,
    submissions_enabled: bool,
) -> CapabilitySet {
    match session {
        Session::Owner => CapabilitySet::full(),
        Session::DepartmentMember {
            home_department,
            operator,
            business_unit,
        } => {
            let can_request_work: bool = *business_unit && submissions_enabled;
            if *operator {
                return CapabilitySet::operator();
            }
            let home_match: bool = match (home_department, &campaign.department) {
                (Some(home), Some(dept)) => home == dept,
                _ => false,
            };
            if home_match {
                CapabilitySet::read_only(can_request_work)
            } else {
                CapabilitySet::blurred(can_request_work)
            }
        }
        Session::Guest => CapabilitySet::blurred(false),
    }
}
