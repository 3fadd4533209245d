// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cadence_domain::PersonId;
use serde::{Deserialize, Serialize};

/// The visual category of an in-app notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// A positive outcome, such as a completion.
    Success,
    /// A disruptive outcome, such as a cancellation.
    Alert,
    /// A reversal, such as a revival back to planned.
    Warning,
    /// A neutral event.
    Info,
}

impl NotificationKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Alert => "alert",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to surface an in-app notification.
///
/// The lifecycle layer describes the notification; the outer layer
/// decides how to deliver and persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Short headline.
    pub title: String,
    /// Full message body.
    pub message: String,
    /// The visual category.
    pub kind: NotificationKind,
    /// The person the notification targets, when it targets one.
    pub recipient: Option<PersonId>,
}

/// A request to send assignment mail to a newly assigned person.
///
/// All strings are pre-rendered here so the delivery layer only fills a
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEmail {
    /// The subject line. Carries an `[URGENT]` marker for critical work.
    pub subject: String,
    /// The recipient's email address.
    pub recipient_email: String,
    /// The recipient's display name.
    pub recipient_name: String,
    /// The campaign title.
    pub campaign_title: String,
    /// The display name of the person handing off, when known.
    pub previous_assignee: Option<String>,
    /// The urgency level as display text.
    pub urgency_label: String,
    /// The difficulty level as display text, if rated.
    pub difficulty_label: Option<String>,
    /// The campaign note, if any.
    pub description: Option<String>,
    /// The owning department as display text, if any.
    pub department_name: Option<String>,
    /// The short human-facing reference code.
    pub reference_code: String,
}

/// A side effect requested by a lifecycle operation.
///
/// Effects are descriptions, not actions. The lifecycle layer never
/// performs I/O; it hands these to the caller after the state change
/// has been decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideEffect {
    /// Surface an in-app notification.
    Notification(NotificationRequest),
    /// Send assignment mail.
    Email(AssignmentEmail),
}
