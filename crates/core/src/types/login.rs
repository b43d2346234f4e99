//! The captured login attempt.
//!
//! Login is simulated: nothing is verified and the password is kept in plain
//! text. Only the most recent attempt is ever stored.

use core::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The last submitted login form.
///
/// `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
    #[serde(rename = "loginTime")]
    pub login_time: String,
}

impl LoginAttempt {
    /// Build an attempt made at `at`. Email and password are trimmed.
    #[must_use]
    pub fn new(email: &str, password: &str, at: DateTime<Utc>) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.trim().to_string(),
            login_time: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("login_time", &self.login_time)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_login_time_is_iso_utc_millis() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let attempt = LoginAttempt::new(" a@b.c ", " hunter2 ", at);
        assert_eq!(attempt.email, "a@b.c");
        assert_eq!(attempt.password, "hunter2");
        assert_eq!(attempt.login_time, "2024-03-05T14:07:09.000Z");
    }

    #[test]
    fn test_serialized_field_names() {
        let attempt = LoginAttempt::new("a@b.c", "pw", Utc::now());
        let json = serde_json::to_value(&attempt).unwrap();
        assert!(json.get("loginTime").is_some());
        assert!(json.get("login_time").is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let attempt = LoginAttempt::new("a@b.c", "super-secret-pw", Utc::now());
        let debug_output = format!("{attempt:?}");
        assert!(debug_output.contains("a@b.c"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-pw"));
    }
}
