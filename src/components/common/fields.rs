//! Labelled text inputs for form bodies.
//!
//! Each field keeps a local text signal so the element is not recreated
//! while the user types; a prop change from outside (e.g. a reset) is
//! detected against the last seen prop value and overwrites the local
//! text. Every keystroke is reported upward through `on_change`.

use dioxus::prelude::*;

use crate::constants::*;

#[component]
pub fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut text = use_signal(|| value.clone());
    let mut last_prop_value = use_signal(|| value.clone());

    use_effect(move || {
        let v = value.clone();
        if v != last_prop_value() {
            if v != text() {
                text.set(v.clone());
            }
            last_prop_value.set(v);
        }
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; min-width: 0;",
            label {
                style: "
                    font-size: 11px; font-weight: 500; color: {TEXT_MUTED};
                    text-transform: uppercase; letter-spacing: 0.5px;
                ",
                "{label}"
            }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{text()}",
                style: "
                    width: 100%; min-width: 0; box-sizing: border-box;
                    padding: 10px 12px; font-size: 13px;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                    outline: none;
                    user-select: text;
                ",
                oninput: move |e| {
                    let next = e.value();
                    text.set(next.clone());
                    on_change.call(next);
                },
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    placeholder: &'static str,
    rows: u32,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut text = use_signal(|| value.clone());
    let mut last_prop_value = use_signal(|| value.clone());

    use_effect(move || {
        let v = value.clone();
        if v != last_prop_value() {
            if v != text() {
                text.set(v.clone());
            }
            last_prop_value.set(v);
        }
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; min-width: 0;",
            label {
                style: "
                    font-size: 11px; font-weight: 500; color: {TEXT_MUTED};
                    text-transform: uppercase; letter-spacing: 0.5px;
                ",
                "{label}"
            }
            textarea {
                rows: "{rows}",
                placeholder: "{placeholder}",
                value: "{text()}",
                style: "
                    width: 100%; min-width: 0; box-sizing: border-box;
                    padding: 10px 12px; font-size: 13px; line-height: 1.5;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                    outline: none;
                    resize: vertical;
                    user-select: text;
                ",
                oninput: move |e| {
                    let next = e.value();
                    text.set(next.clone());
                    on_change.call(next);
                },
            }
        }
    }
}
