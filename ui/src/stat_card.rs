use dioxus::prelude::*;
use types::{Icon, Palette, Trend};

use crate::IconGlyph;

/// One metric tile: icon, title, value and the change versus last period.
#[component]
pub fn StatCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    change: f64,
    icon: Icon,
    #[props(default)] color: Palette,
) -> Element {
    let trend = Trend::of(change);
    let hex = color.hex();
    let tint = color.tint();
    let trend_class = trend.class();

    rsx! {
        div { class: "stat-card", style: "border-top: 4px solid {hex}",
            div { class: "stat-header",
                div { class: "stat-icon", style: "background-color: {tint}",
                    IconGlyph { icon, style: "color: {hex}" }
                }
                div { class: "stat-title", "{title}" }
            }
            div { class: "stat-value", "{value}" }
            div { class: "stat-change {trend_class}",
                span { class: "change-icon",
                    IconGlyph { icon: trend.icon() }
                }
                span { class: "change-value", {Trend::describe(change)} }
                span { class: "change-label", "vs last period" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(title: &str, value: &str, change: f64) -> String {
        dioxus_ssr::render_element(rsx! {
            StatCard {
                title,
                value,
                change,
                icon: Icon::Users,
                color: Palette::ForestGreen,
            }
        })
    }

    #[test]
    fn shows_title_value_and_increase() {
        let html = render("Total Users", "1,234", 8.2);
        assert!(html.contains("Total Users"));
        assert!(html.contains("1,234"));
        assert!(html.contains("8.2% increase"));
        assert!(html.contains("vs last period"));
        assert!(html.contains("stat-change positive"));
        assert!(html.contains("#228B22"));
    }

    #[test]
    fn shows_decrease_as_magnitude() {
        let html = render("Total Hotels", "89", -2.0);
        assert!(html.contains("2% decrease"));
        assert!(!html.contains("-2%"));
        assert!(html.contains("icon-arrow-down"));
    }

    #[test]
    fn shows_no_change() {
        let html = render("Total Hotels", "89", 0.0);
        assert!(html.contains("0% No change"));
        assert!(html.contains("stat-change neutral"));
    }
}
