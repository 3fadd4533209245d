// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session resolution.
//!
//! Callers arrive with untyped claims (role name plus flags). This
//! module is the single point where those strings become a typed
//! [`Session`]; everything past it works with the enum and cannot see a
//! contradictory role combination.

use crate::error::ApiError;
use cadence_domain::{DepartmentId, Session};
use serde::{Deserialize, Serialize};

/// The untyped session claims supplied with each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The role name: `owner`, `member`, or `guest`.
    pub role: String,
    /// The member's home department, if any. Ignored for other roles.
    pub home_department: Option<String>,
    /// The operator flag. Ignored for other roles.
    pub operator: bool,
    /// The business-unit flag. Ignored for other roles.
    pub business_unit: bool,
}

impl SessionClaims {
    /// Claims for the owner login.
    #[must_use]
    pub fn owner() -> Self {
        Self {
            role: String::from("owner"),
            home_department: None,
            operator: false,
            business_unit: false,
        }
    }

    /// Claims for an anonymous visitor.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            role: String::from("guest"),
            home_department: None,
            operator: false,
            business_unit: false,
        }
    }
}

/// Resolves untyped claims into a typed session.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` for an unknown role name.
pub fn resolve_session(claims: &SessionClaims) -> Result<Session, ApiError> {
    match claims.role.as_str() {
        "owner" => Ok(Session::Owner),
        "member" => Ok(Session::DepartmentMember {
            home_department: claims
                .home_department
                .as_deref()
                .map(DepartmentId::new),
            operator: claims.operator,
            business_unit: claims.business_unit,
        }),
        "guest" => Ok(Session::Guest),
        other => Err(ApiError::AuthenticationFailed {
            reason: format!("Unknown role '{other}'"),
        }),
    }
}
