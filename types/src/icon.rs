use serde::{Deserialize, Serialize};

/// A glyph the dashboard knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Users,
    Building,
    Hotel,
    DollarSign,
    Home,
    ChartLine,
    CalendarAlt,
    UserTie,
    ClipboardList,
    Envelope,
    Cog,
    Bell,
    CheckCircle,
    ExclamationCircle,
    InfoCircle,
    ArrowUp,
    ArrowDown,
    Equals,
}

impl Icon {
    /// CSS class suffix, e.g. `icon-dollar-sign`.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Users => "users",
            Icon::Building => "building",
            Icon::Hotel => "hotel",
            Icon::DollarSign => "dollar-sign",
            Icon::Home => "home",
            Icon::ChartLine => "chart-line",
            Icon::CalendarAlt => "calendar-alt",
            Icon::UserTie => "user-tie",
            Icon::ClipboardList => "clipboard-list",
            Icon::Envelope => "envelope",
            Icon::Cog => "cog",
            Icon::Bell => "bell",
            Icon::CheckCircle => "check-circle",
            Icon::ExclamationCircle => "exclamation-circle",
            Icon::InfoCircle => "info-circle",
            Icon::ArrowUp => "arrow-up",
            Icon::ArrowDown => "arrow-down",
            Icon::Equals => "equals",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::Building => "🏢",
            Icon::Hotel => "🏨",
            Icon::DollarSign => "$",
            Icon::Home => "🏠",
            Icon::ChartLine => "📈",
            Icon::CalendarAlt => "📅",
            Icon::UserTie => "👔",
            Icon::ClipboardList => "📋",
            Icon::Envelope => "✉",
            Icon::Cog => "⚙",
            Icon::Bell => "🔔",
            Icon::CheckCircle => "✔",
            Icon::ExclamationCircle => "!",
            Icon::InfoCircle => "ℹ",
            Icon::ArrowUp => "▲",
            Icon::ArrowDown => "▼",
            Icon::Equals => "=",
        }
    }
}

/// Brand colors used to tint stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    #[default]
    EarthBrown,
    ForestGreen,
    WarmGold,
    DeepCharcoal,
}

impl Palette {
    pub fn hex(self) -> &'static str {
        match self {
            Palette::EarthBrown => "#5A3825",
            Palette::ForestGreen => "#228B22",
            Palette::WarmGold => "#DAA520",
            Palette::DeepCharcoal => "#2E2E2E",
        }
    }

    /// The color at roughly 8% opacity, for icon backgrounds.
    pub fn tint(self) -> String {
        format!("{}15", self.hex())
    }
}
