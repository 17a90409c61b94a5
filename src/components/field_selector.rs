use dioxus::prelude::*;

use crate::constants::*;

/// A chip-style single-choice selector backed by a fixed option list.
///
/// The trigger shows the current label; activating it opens a menu under
/// the chip. Picking an option reports the label upward and closes the
/// menu. One option is always selected and there is no clear action.
/// Each instance owns its own open/closed state.
#[component]
pub fn FieldSelector(
    icon: &'static str,
    menu_label: &'static str,
    options: Vec<String>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            style: "position: relative; display: inline-block;",
            button {
                class: "hover-btn",
                style: "
                    display: inline-flex; align-items: center; gap: 8px;
                    height: 32px; padding: 0 12px;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                    font-size: 12px; cursor: pointer;
                ",
                onclick: move |_| open.set(!open()),
                span { style: "font-size: 12px;", "{icon}" }
                span { "{selected}" }
                span { style: "font-size: 9px; color: {TEXT_MUTED};", "▾" }
            }

            if open() {
                // Backdrop to catch clicks outside the menu
                div {
                    style: "
                        position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                        z-index: {LAYER_POPOVER_BACKDROP};
                    ",
                    onclick: move |_| open.set(false),
                }
                div {
                    style: "
                        position: absolute; left: 0; top: calc(100% + 4px);
                        width: 200px; background-color: {BG_ELEVATED};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                        padding: 4px 0; box-shadow: 0 8px 24px rgba(0,0,0,0.4);
                        z-index: {LAYER_POPOVER};
                    ",
                    div {
                        style: "padding: 6px 12px; font-size: 11px; color: {TEXT_MUTED};",
                        "{menu_label}"
                    }
                    div {
                        style: "height: 1px; background-color: {BORDER_SUBTLE}; margin: 2px 0;",
                    }
                    for option in options.iter() {
                        {
                            let label = option.clone();
                            let choice = option.clone();
                            rsx! {
                                div {
                                    key: "{label}",
                                    class: "hover-btn",
                                    style: "
                                        padding: 6px 12px; font-size: 12px;
                                        color: {TEXT_PRIMARY}; cursor: pointer;
                                    ",
                                    onclick: move |_| {
                                        on_select.call(choice.clone());
                                        open.set(false);
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
