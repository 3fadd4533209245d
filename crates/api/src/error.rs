// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::draft_policy::DraftPolicyError;
use cadence::CoreError;
use cadence_domain::DomainError;
use cadence_persistence::StoreError;

/// API-level errors.
///
/// These are distinct from domain/core/store errors and represent the
/// API contract. Lower-layer errors are translated, never passed
/// through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Session resolution failed.
    AuthenticationFailed {
        /// The reason resolution failed.
        reason: String,
    },
    /// The session lacks the capability for this action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The capability required for this action.
        required_capability: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The store rejected a write. No partial state remains.
    StorageFailure {
        /// A description of the failed write.
        message: String,
    },
    /// A draft submission violated the intake policy.
    DraftPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_capability,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_capability}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::StorageFailure { message } => write!(f, "Storage failure: {message}"),
            Self::DraftPolicyViolation { message } => {
                write!(f, "Draft rejected: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTitle(msg) => ApiError::InvalidInput {
            field: String::from("title"),
            message: msg,
        },
        DomainError::InvalidStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown status '{msg}'"),
        },
        DomainError::InvalidUrgency(msg) => ApiError::InvalidInput {
            field: String::from("urgency"),
            message: format!("Unknown urgency '{msg}'"),
        },
        DomainError::InvalidDifficulty(msg) => ApiError::InvalidInput {
            field: String::from("difficulty"),
            message: format!("Unknown difficulty '{msg}'"),
        },
        DomainError::InvalidActor(msg) => ApiError::InvalidInput {
            field: String::from("actor"),
            message: msg,
        },
        DomainError::InvalidTimeOfDay(msg) => ApiError::InvalidInput {
            field: String::from("activation_time"),
            message: msg,
        },
        DomainError::InvalidTimezone(msg) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("Unknown timezone '{msg}'"),
        },
        DomainError::InvalidMonthKey(msg) => ApiError::InvalidInput {
            field: String::from("month"),
            message: msg,
        },
        DomainError::HistoryDiverged {
            campaign_id,
            recorded_status,
            derived_status,
        } => ApiError::DomainRuleViolation {
            rule: String::from("history_consistency"),
            message: format!(
                "Campaign {campaign_id} records status {recorded_status} but its history derives {derived_status}"
            ),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(message) => ApiError::Internal { message },
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Record"),
                message,
            },
            StoreError::WriteFailed(message) => Self::StorageFailure { message },
            StoreError::SerializationError(message) => Self::Internal { message },
        }
    }
}

impl From<DraftPolicyError> for ApiError {
    fn from(err: DraftPolicyError) -> Self {
        Self::DraftPolicyViolation {
            message: err.to_string(),
        }
    }
}
