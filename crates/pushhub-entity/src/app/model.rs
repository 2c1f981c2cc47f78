//! App entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pushhub_core::types::AppId;

/// An app-defined action a notification can trigger on the device.
///
/// Commands are declared per app as an ordered list; `param` is the wire
/// key sent with the notification, `name` the label shown to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCommand {
    /// Wire parameter identifying the command.
    pub param: String,
    /// Human-readable command name.
    pub name: String,
}

/// A registered application that notifications are sent to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct App {
    /// Unique app identifier.
    pub id: AppId,
    /// Display name.
    pub name: String,
    /// URL-safe handle used in criteria filters.
    pub handle: String,
    /// Ordered list of commands this app understands.
    #[sqlx(json)]
    pub commands: Vec<AppCommand>,
    /// When the app was registered.
    pub created_at: DateTime<Utc>,
}

impl App {
    /// Resolve the display label for a command parameter.
    ///
    /// Returns the `name` of the first command whose `param` matches, or
    /// `None` when the app does not declare the command.
    pub fn command_label(&self, param: &str) -> Option<&str> {
        self.commands
            .iter()
            .find(|command| command.param == param)
            .map(|command| command.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_commands(commands: Vec<AppCommand>) -> App {
        App {
            id: AppId::new(),
            name: "Acme".to_string(),
            handle: "acme".to_string(),
            commands,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_command_label_matches_param() {
        let app = app_with_commands(vec![AppCommand {
            param: "push".to_string(),
            name: "Send Push".to_string(),
        }]);
        assert_eq!(app.command_label("push"), Some("Send Push"));
    }

    #[test]
    fn test_command_label_unknown_param() {
        let app = app_with_commands(vec![AppCommand {
            param: "push".to_string(),
            name: "Send Push".to_string(),
        }]);
        assert_eq!(app.command_label("unknown"), None);
    }

    #[test]
    fn test_command_label_first_match_wins() {
        let app = app_with_commands(vec![
            AppCommand {
                param: "open".to_string(),
                name: "Open Screen".to_string(),
            },
            AppCommand {
                param: "open".to_string(),
                name: "Open (legacy)".to_string(),
            },
        ]);
        assert_eq!(app.command_label("open"), Some("Open Screen"));
    }
}
