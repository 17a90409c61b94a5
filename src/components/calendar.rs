use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;

use crate::constants::*;

const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Month-grid date selection surface.
///
/// The view month is component-local; it starts on the selection's month,
/// or on the current month when nothing is selected. Any date, past or
/// future, can be picked.
#[component]
pub fn Calendar(selected: Option<NaiveDate>, on_select: EventHandler<NaiveDate>) -> Element {
    let initial = selected.unwrap_or_else(|| Local::now().date_naive());
    let mut view_year = use_signal(|| initial.year());
    let mut view_month = use_signal(|| initial.month());

    let year = view_year();
    let month = view_month();
    let today = Local::now().date_naive();

    // The view month is kept in 1..=12 by the nav handlers, so the first
    // of the month always exists.
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return rsx! { div {} };
    };
    let leading_blanks = first.weekday().num_days_from_sunday();
    let month_name = MONTH_NAMES[(month - 1) as usize];

    rsx! {
        div {
            style: "padding: 12px; width: 252px;",

            // Month navigation
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    margin-bottom: 8px;
                ",
                button {
                    class: "hover-btn",
                    style: "
                        width: 24px; height: 24px; border-radius: 6px;
                        background: none; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_SECONDARY}; font-size: 11px; cursor: pointer;
                    ",
                    onclick: move |_| {
                        if view_month() == 1 {
                            view_month.set(12);
                            view_year.set(view_year() - 1);
                        } else {
                            view_month.set(view_month() - 1);
                        }
                    },
                    "‹"
                }
                span {
                    style: "font-size: 12px; font-weight: 500; color: {TEXT_PRIMARY};",
                    "{month_name} {year}"
                }
                button {
                    class: "hover-btn",
                    style: "
                        width: 24px; height: 24px; border-radius: 6px;
                        background: none; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_SECONDARY}; font-size: 11px; cursor: pointer;
                    ",
                    onclick: move |_| {
                        if view_month() == 12 {
                            view_month.set(1);
                            view_year.set(view_year() + 1);
                        } else {
                            view_month.set(view_month() + 1);
                        }
                    },
                    "›"
                }
            }

            // Weekday header row
            div {
                style: "display: grid; grid-template-columns: repeat(7, 32px); gap: 2px;",
                for header in WEEKDAY_HEADERS {
                    div {
                        style: "
                            height: 24px; display: flex; align-items: center; justify-content: center;
                            font-size: 10px; color: {TEXT_DIM};
                        ",
                        "{header}"
                    }
                }
            }

            // Day grid
            div {
                style: "display: grid; grid-template-columns: repeat(7, 32px); gap: 2px;",
                for blank in 0..leading_blanks {
                    div { key: "blank-{blank}" }
                }
                for day in 1..=days_in_month(year, month) {
                    {
                        let date = NaiveDate::from_ymd_opt(year, month, day);
                        let is_selected = date.is_some() && date == selected;
                        let is_today = date == Some(today);
                        let background = if is_selected { ACCENT_PRIMARY } else { "transparent" };
                        let color = if is_selected { "#ffffff" } else { TEXT_PRIMARY };
                        let border = if is_today && !is_selected {
                            format!("1px solid {BORDER_STRONG}")
                        } else {
                            "1px solid transparent".to_string()
                        };
                        let class = if is_selected { "" } else { "hover-btn" };
                        rsx! {
                            button {
                                key: "day-{day}",
                                class: "{class}",
                                style: "
                                    width: 32px; height: 28px; border-radius: 6px;
                                    background-color: {background}; color: {color};
                                    border: {border}; font-size: 12px; cursor: pointer;
                                ",
                                onclick: move |_| {
                                    if let Some(date) = date {
                                        on_select.call(date);
                                    }
                                },
                                "{day}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2025, 12), 31);
    }
}
