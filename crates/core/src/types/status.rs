//! Order status types.
//!
//! The server owns the status lifecycle; the client only reads it. Unknown
//! status strings must never fail deserialization, so the wire enum carries
//! an `Other` catch-all.

use serde::{Deserialize, Serialize};

/// Order status as reported by the ordering API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    /// Any status value this client does not recognize.
    #[serde(other)]
    Other,
}

impl OrderStatus {
    /// The badge class the renderer should use for this status.
    ///
    /// Total function: unrecognized statuses display as pending.
    #[must_use]
    pub const fn display_class(self) -> DisplayClass {
        match self {
            Self::Processing => DisplayClass::Processing,
            Self::Completed => DisplayClass::Completed,
            Self::Pending | Self::Other => DisplayClass::Pending,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
            Self::Other => write!(f, "unknown"),
        }
    }
}

/// Display classification for an order status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayClass {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl DisplayClass {
    /// Classify a raw status string.
    ///
    /// `"processing"` and `"completed"` map to their own classes; everything
    /// else, including `"pending"` and unrecognized values, displays as
    /// pending. Total function, no error case.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        match status {
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }

    /// CSS-style class name for the renderer.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Processing => "status-processing",
            Self::Completed => "status-completed",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_statuses() {
        assert_eq!(DisplayClass::classify("processing"), DisplayClass::Processing);
        assert_eq!(DisplayClass::classify("completed"), DisplayClass::Completed);
        assert_eq!(DisplayClass::classify("pending"), DisplayClass::Pending);
    }

    #[test]
    fn test_classify_unknown_is_pending() {
        assert_eq!(DisplayClass::classify("unknown"), DisplayClass::Pending);
        assert_eq!(DisplayClass::classify(""), DisplayClass::Pending);
        assert_eq!(DisplayClass::classify("COMPLETED"), DisplayClass::Pending);
    }

    #[test]
    fn test_status_deserialize_known() {
        let status: OrderStatus = serde_json::from_str("\"processing\"").unwrap();
        assert_eq!(status, OrderStatus::Processing);
    }

    #[test]
    fn test_status_deserialize_unknown_falls_back() {
        let status: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(status, OrderStatus::Other);
        assert_eq!(status.display_class(), DisplayClass::Pending);
    }

    #[test]
    fn test_display_class_matches_classify() {
        for (status, raw) in [
            (OrderStatus::Pending, "pending"),
            (OrderStatus::Processing, "processing"),
            (OrderStatus::Completed, "completed"),
        ] {
            assert_eq!(status.display_class(), DisplayClass::classify(raw));
        }
    }

    #[test]
    fn test_css_class_names() {
        assert_eq!(DisplayClass::Processing.css_class(), "status-processing");
        assert_eq!(DisplayClass::Pending.css_class(), "status-pending");
    }
}
