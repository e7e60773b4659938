use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Icon, Palette};

/// One labeled metric shown in a stat card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    /// Already formatted for display, never parsed back.
    pub value: String,
    /// Signed percentage change versus the previous period.
    pub change: f64,
    pub icon: Icon,
    pub color: Palette,
}

impl Stat {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: f64,
        icon: Icon,
        color: Palette,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change,
            icon,
            color,
        }
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.change)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increase,
    NoChange,
    Decrease,
}

impl Trend {
    /// NaN counts as no change.
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Trend::Increase
        } else if change < 0.0 {
            Trend::Decrease
        } else {
            Trend::NoChange
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Trend::Increase => Icon::ArrowUp,
            Trend::NoChange => Icon::Equals,
            Trend::Decrease => Icon::ArrowDown,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            Trend::Increase => "increase",
            Trend::NoChange => "No change",
            Trend::Decrease => "decrease",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Trend::Increase => "positive",
            Trend::NoChange => "neutral",
            Trend::Decrease => "negative",
        }
    }

    /// e.g. `8.2% increase`, `2% decrease`.
    pub fn describe(change: f64) -> String {
        let trend = Self::of(change);
        let magnitude = if change.is_nan() { 0.0 } else { change.abs() };
        format!("{magnitude}% {}", trend.word())
    }
}

/// Severity tag of an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Success,
    Warning,
    #[default]
    Info,
}

impl ActivityKind {
    /// Case-insensitive; anything unrecognised is `Info`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "success" => ActivityKind::Success,
            "warning" => ActivityKind::Warning,
            _ => ActivityKind::Info,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ActivityKind::Info => Icon::InfoCircle,
            ActivityKind::Success => Icon::CheckCircle,
            ActivityKind::Warning => Icon::ExclamationCircle,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ActivityKind::Info => "info",
            ActivityKind::Success => "success",
            ActivityKind::Warning => "warning",
        }
    }
}

impl<'de> Deserialize<'de> for ActivityKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Primary,
    Secondary,
}

impl ActionStyle {
    pub fn class(self) -> &'static str {
        match self {
            ActionStyle::Primary => "primary",
            ActionStyle::Secondary => "secondary",
        }
    }
}

/// Follow-up offered next to an activity, e.g. "Review".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAction {
    pub label: String,
    #[serde(default)]
    pub style: ActionStyle,
    /// In-app destination; without one the action is shown but inert.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique within one feed.
    pub id: u32,
    pub message: String,
    pub timestamp: Timestamp,
    #[serde(rename = "type", default)]
    pub kind: ActivityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActivityAction>,
}

/// A shortcut link to another screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title: String,
    pub icon: Icon,
    pub path: String,
}

impl QuickAction {
    pub fn new(title: impl Into<String>, icon: Icon, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon,
            path: path.into(),
        }
    }

    /// The admin dashboard's shortcut grid, in display order.
    pub fn admin_defaults() -> Vec<Self> {
        vec![
            Self::new("Add New User", Icon::Users, "/dashboard/users/new"),
            Self::new("Add Property", Icon::Home, "/dashboard/properties/new"),
            Self::new("View Reports", Icon::ChartLine, "/dashboard/reports"),
            Self::new("View Bookings", Icon::CalendarAlt, "/dashboard/bookings"),
        ]
    }
}

/// Everything the admin dashboard needs from its data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub stats: Vec<Stat>,
    pub activities: Vec<Activity>,
    pub generated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_classification() {
        assert_eq!(Trend::of(8.2), Trend::Increase);
        assert_eq!(Trend::of(0.0), Trend::NoChange);
        assert_eq!(Trend::of(-2.0), Trend::Decrease);
        assert_eq!(Trend::of(f64::NAN), Trend::NoChange);
    }

    #[test]
    fn trend_description_uses_magnitude() {
        assert_eq!(Trend::describe(8.2), "8.2% increase");
        assert_eq!(Trend::describe(5.0), "5% increase");
        assert_eq!(Trend::describe(-2.0), "2% decrease");
        assert_eq!(Trend::describe(0.0), "0% No change");
    }

    #[test]
    fn activity_kind_wire_format() {
        let activity: Activity = serde_json::from_value(serde_json::json!({
            "id": 7,
            "message": "Payment received",
            "timestamp": "2026-10-18T12:00:00Z",
            "type": "success",
        }))
        .unwrap();
        assert_eq!(activity.kind, ActivityKind::Success);

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "success");
    }

    #[test]
    fn unknown_activity_kind_is_info() {
        let kind: ActivityKind = serde_json::from_str(r#""critical""#).unwrap();
        assert_eq!(kind, ActivityKind::Info);
        assert_eq!(kind.icon(), Icon::InfoCircle);
    }

    #[test]
    fn activity_kind_ignores_case() {
        let kinds: Vec<ActivityKind> =
            serde_json::from_str(r#"["SUCCESS", "Warning", "INFO"]"#).unwrap();
        assert_eq!(
            kinds,
            [ActivityKind::Success, ActivityKind::Warning, ActivityKind::Info]
        );
    }

    #[test]
    fn activity_action_is_optional() {
        let activity: Activity = serde_json::from_value(serde_json::json!({
            "id": 3,
            "message": "Suspicious login attempt detected from new device",
            "timestamp": "2026-10-18T07:00:00Z",
            "type": "warning",
            "action": { "label": "Review", "style": "secondary" },
        }))
        .unwrap();
        let action = activity.action.as_ref().unwrap();
        assert_eq!(action.label, "Review");
        assert_eq!(action.style, ActionStyle::Secondary);
        assert_eq!(action.path, None);

        let plain = Activity {
            action: None,
            ..activity
        };
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("action").is_none());
    }

    #[test]
    fn admin_quick_actions() {
        let paths: Vec<_> = QuickAction::admin_defaults()
            .into_iter()
            .map(|a| a.path)
            .collect();
        assert_eq!(
            paths,
            [
                "/dashboard/users/new",
                "/dashboard/properties/new",
                "/dashboard/reports",
                "/dashboard/bookings",
            ]
        );
    }
}
