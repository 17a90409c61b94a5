use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::Calendar;
use crate::constants::*;
use crate::utils::{format_long_date, format_short_date};

/// Visual style of the date picker trigger.
#[derive(Clone, Copy, PartialEq)]
pub enum DateTriggerStyle {
    /// Rounded toolbar chip: "Start" unset, "Start Sep 1, 2025" set.
    Chip,
    /// Full-width field button: "Pick a date" unset, long-form date set.
    Field,
}

/// A single-date picker: a trigger plus a calendar popover.
///
/// Each instance owns its own open/closed state, so several pickers sit
/// side by side without stepping on one another. Picking a day reports
/// the date upward and closes the popover.
#[component]
pub fn DatePickerField(
    placeholder: &'static str,
    value: Option<NaiveDate>,
    trigger: DateTriggerStyle,
    on_select: EventHandler<NaiveDate>,
) -> Element {
    let mut open = use_signal(|| false);

    let label = match (trigger, value) {
        (DateTriggerStyle::Chip, Some(date)) => {
            format!("{placeholder} {}", format_short_date(date))
        }
        (DateTriggerStyle::Chip, None) => placeholder.to_string(),
        (DateTriggerStyle::Field, Some(date)) => format_long_date(date),
        (DateTriggerStyle::Field, None) => "Pick a date".to_string(),
    };

    let trigger_style = match trigger {
        DateTriggerStyle::Chip => format!(
            "
            display: inline-flex; align-items: center; gap: 8px;
            height: 32px; padding: 0 12px;
            background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
            border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
            font-size: 12px; cursor: pointer;
            "
        ),
        DateTriggerStyle::Field => {
            let color = if value.is_some() { TEXT_PRIMARY } else { TEXT_MUTED };
            format!(
                "
                display: flex; align-items: center; gap: 8px;
                width: 100%; box-sizing: border-box; padding: 10px 12px;
                background-color: {BG_SURFACE}; color: {color};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                font-size: 13px; cursor: pointer; text-align: left;
                "
            )
        }
    };

    rsx! {
        div {
            style: "position: relative;",
            button {
                class: "hover-btn",
                style: "{trigger_style}",
                onclick: move |_| open.set(!open()),
                span { style: "font-size: 12px;", "📅" }
                span { "{label}" }
                if trigger == DateTriggerStyle::Chip {
                    span { style: "font-size: 9px; color: {TEXT_MUTED};", "▾" }
                }
            }

            if open() {
                // Backdrop to catch clicks outside the popover
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
                        background-color: {BG_ELEVATED};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.4);
                        z-index: {LAYER_POPOVER};
                    ",
                    Calendar {
                        selected: value,
                        on_select: move |date| {
                            on_select.call(date);
                            open.set(false);
                        },
                    }
                }
            }
        }
    }
}
