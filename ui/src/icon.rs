use dioxus::prelude::*;
use types::Icon;

#[component]
pub fn IconGlyph(
    icon: Icon,
    #[props(into, default)] class: String,
    #[props(into, default)] style: String,
) -> Element {
    let name = icon.name();
    let glyph = icon.glyph();

    rsx! {
        span {
            class: "icon icon-{name} {class}",
            style,
            "aria-hidden": "true",
            "{glyph}"
        }
    }
}
