//! User-visible alerts.

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Confirmation, such as a created graph.
    Info,
    /// A failed operation or validation error.
    Error,
}

/// A blocking message shown to the user until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Severity, which picks the popup color.
    pub level: AlertLevel,
    /// Popup title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Alert {
    /// Creates an alert.
    #[must_use]
    pub fn new(level: AlertLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an info alert.
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Info, title, message)
    }

    /// Creates an error alert.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, title, message)
    }

    /// Whether this is an error alert.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, AlertLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_creation() {
        let a = Alert::error("Create graph", "Failed to create graph: disk full");
        assert_eq!(a.level, AlertLevel::Error);
        assert_eq!(a.title, "Create graph");
        assert!(a.message.contains("disk full"));
        assert!(a.is_error());
        assert!(!Alert::info("t", "m").is_error());
    }
}
