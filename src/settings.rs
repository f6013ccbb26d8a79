//! User preferences and profile, as edited from the settings and profile pages

use serde::{Deserialize, Serialize};

/// The colour theme of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the theme of the operating system
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub theme: Theme,
    pub email_notifications: bool,
    pub push_notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            email_notifications: true,
            push_notifications: false,
        }
    }
}


/// The identity of the user
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    name: String,
    email: String,
}

impl Profile {
    pub(crate) fn new(name: String, email: String) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> &str  { &self.name  }
    pub fn email(&self) -> &str { &self.email }
}

/// A minimal sanity check: exactly one `@`, with something on both sides, and no whitespace
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            local.is_empty() == false
                && domain.is_empty() == false
                && email.chars().any(char::is_whitespace) == false
        },
        _ => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("your.email@example.com"));
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("") == false);
        assert!(is_valid_email("no-at-sign") == false);
        assert!(is_valid_email("@example.com") == false);
        assert!(is_valid_email("me@") == false);
        assert!(is_valid_email("a@b@c") == false);
        assert!(is_valid_email("me @example.com") == false);
    }

    #[test]
    fn serde_preferences() {
        let prefs = Preferences::default();
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json, serde_json::json!({"theme": "system", "emailNotifications": true, "pushNotifications": false}));

        // Missing fields fall back to their defaults
        let partial: Preferences = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(partial.theme, Theme::Dark);
        assert_eq!(partial.email_notifications, true);
    }
}
