//! Contact form submissions.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::types::id::ContactId;

/// A stored contact form submission.
///
/// `date` is a human-readable local timestamp, kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub date: String,
}

impl Contact {
    /// Build a submission received at `at`. Fields are trimmed, nothing else
    /// is validated.
    #[must_use]
    pub fn received<Tz>(
        id: ContactId,
        name: &str,
        phone: &str,
        message: &str,
        at: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        Self {
            id,
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
            date: locale_date(at),
        }
    }
}

/// `M/D/YYYY, h:mm:ss AM`, the short en-US date-time form.
fn locale_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
