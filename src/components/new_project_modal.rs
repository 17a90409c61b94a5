use dioxus::prelude::*;

use crate::components::common::{TextAreaField, TextField};
use crate::components::{DatePickerField, DateTriggerStyle, FieldSelector, MilestoneList};
use crate::constants::*;
use crate::state::{ProjectDraft, ProjectPriority, ProjectStatus};

/// The project creation dialog.
///
/// Owns the in-progress draft. The host decides whether the modal is
/// mounted, so every open starts from a blank draft and closing drops
/// all form state. The footer exposes exactly two terminal actions:
/// Cancel (also reachable through the backdrop) and Create, which
/// forwards the draft as-is.
#[component]
pub fn NewProjectModal(
    on_create: EventHandler<ProjectDraft>,
    on_cancel: EventHandler<MouseEvent>,
) -> Element {
    let mut draft = use_signal(ProjectDraft::default);

    let mut labels_open = use_signal(|| false);
    let mut dependencies_open = use_signal(|| false);

    let status_label = draft.read().status.label();
    let priority_label = draft.read().priority.label();
    let start_date = draft.read().start_date;
    let target_date = draft.read().target_date;
    let title = draft.read().title.clone();
    let description = draft.read().description.clone();

    let chip_style = format!(
        "
        display: inline-flex; align-items: center; gap: 8px;
        height: 32px; padding: 0 12px;
        background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
        border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
        font-size: 12px; cursor: pointer;
        "
    );
    let labels_chip_style = chip_style.clone();
    let dependencies_chip_style = chip_style;

    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0, 0, 0, 0.5);
                display: flex; align-items: center; justify-content: center;
                z-index: {LAYER_MODAL};
            ",
            onclick: move |e| on_cancel.call(e),
            div {
                style: "
                    width: 760px; max-height: 85vh; overflow-y: auto;
                    background-color: {BG_ELEVATED};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 12px;
                    box-shadow: 0 25px 60px rgba(0,0,0,0.6), 0 0 0 1px rgba(255,255,255,0.03);
                ",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    style: "padding: 24px 24px 12px;",
                    h2 {
                        style: "
                            margin: 0; font-size: 18px; font-weight: 600;
                            color: {TEXT_PRIMARY}; letter-spacing: -0.2px;
                        ",
                        "New project"
                    }
                    p {
                        style: "margin: 6px 0 0; font-size: 12px; color: {TEXT_MUTED};",
                        "Set schedule, status, and milestones, then create."
                    }
                }

                // Toolbar chips
                div {
                    style: "padding: 8px 24px 0; display: flex; flex-wrap: wrap; gap: 8px;",

                    FieldSelector {
                        icon: "☰",
                        menu_label: "Change status…",
                        options: ProjectStatus::ALL
                            .iter()
                            .map(|status| status.label().to_string())
                            .collect::<Vec<_>>(),
                        selected: status_label.to_string(),
                        on_select: move |label: String| {
                            if let Some(status) = ProjectStatus::from_label(&label) {
                                draft.write().status = status;
                            }
                        },
                    }

                    FieldSelector {
                        icon: "⚑",
                        menu_label: "Change priority…",
                        options: ProjectPriority::ALL
                            .iter()
                            .map(|priority| priority.label().to_string())
                            .collect::<Vec<_>>(),
                        selected: priority_label.to_string(),
                        on_select: move |label: String| {
                            if let Some(priority) = ProjectPriority::from_label(&label) {
                                draft.write().priority = priority;
                            }
                        },
                    }

                    DatePickerField {
                        placeholder: "Start",
                        value: start_date,
                        trigger: DateTriggerStyle::Chip,
                        on_select: move |date| {
                            draft.write().start_date = Some(date);
                        },
                    }

                    DatePickerField {
                        placeholder: "Target",
                        value: target_date,
                        trigger: DateTriggerStyle::Chip,
                        on_select: move |date| {
                            draft.write().target_date = Some(date);
                        },
                    }

                    // Labels placeholder popover
                    div {
                        style: "position: relative; display: inline-block;",
                        button {
                            class: "hover-btn",
                            style: "{labels_chip_style}",
                            onclick: move |_| labels_open.set(!labels_open()),
                            span { style: "font-size: 12px;", "🏷" }
                            span { "Labels" }
                        }
                        if labels_open() {
                            div {
                                style: "
                                    position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                                    z-index: {LAYER_POPOVER_BACKDROP};
                                ",
                                onclick: move |_| labels_open.set(false),
                            }
                            div {
                                style: "
                                    position: absolute; left: 0; top: calc(100% + 4px);
                                    width: 220px; background-color: {BG_ELEVATED};
                                    border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                                    padding: 12px; box-shadow: 0 8px 24px rgba(0,0,0,0.4);
                                    z-index: {LAYER_POPOVER};
                                ",
                                div {
                                    style: "font-size: 12px; color: {TEXT_MUTED};",
                                    "Add or select labels"
                                }
                                div {
                                    style: "margin-top: 8px; display: flex; gap: 6px; flex-wrap: wrap;",
                                    for badge in ["Design", "Frontend", "Backend"] {
                                        span {
                                            key: "{badge}",
                                            style: "
                                                padding: 3px 8px; border-radius: 10px;
                                                background-color: {BG_SURFACE};
                                                border: 1px solid {BORDER_SUBTLE};
                                                font-size: 11px; color: {TEXT_SECONDARY};
                                            ",
                                            "{badge}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // Dependencies placeholder popover
                    div {
                        style: "position: relative; display: inline-block;",
                        button {
                            class: "hover-btn",
                            style: "{dependencies_chip_style}",
                            onclick: move |_| dependencies_open.set(!dependencies_open()),
                            span { style: "font-size: 12px;", "🔗" }
                            span { "Dependencies" }
                        }
                        if dependencies_open() {
                            div {
                                style: "
                                    position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                                    z-index: {LAYER_POPOVER_BACKDROP};
                                ",
                                onclick: move |_| dependencies_open.set(false),
                            }
                            div {
                                style: "
                                    position: absolute; left: 0; top: calc(100% + 4px);
                                    width: 260px; background-color: {BG_ELEVATED};
                                    border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                                    padding: 12px; box-shadow: 0 8px 24px rgba(0,0,0,0.4);
                                    z-index: {LAYER_POPOVER};
                                ",
                                p {
                                    style: "margin: 0; font-size: 12px; color: {TEXT_MUTED};",
                                    "Link related projects or tasks"
                                }
                            }
                        }
                    }
                }

                // Divider
                div {
                    style: "height: 1px; background-color: {BORDER_SUBTLE}; margin: 16px 0;",
                }

                // Body
                div {
                    style: "
                        padding: 0 24px 20px;
                        display: flex; flex-direction: column; gap: 18px;
                    ",
                    TextField {
                        label: "Project name",
                        placeholder: "Add project name…",
                        value: title,
                        on_change: move |next: String| {
                            draft.write().title = next;
                        },
                    }
                    TextAreaField {
                        label: "Description",
                        placeholder: "Write a description, a project brief, or collect ideas…",
                        rows: 5,
                        value: description,
                        on_change: move |next: String| {
                            draft.write().description = next;
                        },
                    }
                    MilestoneList { draft }
                }

                // Footer
                div {
                    style: "
                        display: flex; justify-content: flex-end; gap: 10px;
                        padding: 0 24px 24px;
                    ",
                    button {
                        class: "hover-btn",
                        style: "
                            padding: 10px 16px; border-radius: 8px;
                            background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                            color: {TEXT_SECONDARY}; font-size: 12px; font-weight: 600;
                            cursor: pointer;
                        ",
                        onclick: move |e| on_cancel.call(e),
                        "Cancel"
                    }
                    button {
                        style: "
                            padding: 10px 18px; border-radius: 8px;
                            background: linear-gradient(180deg, {ACCENT_PRIMARY} 0%, #4f5ac2 100%);
                            border: none; color: white;
                            font-size: 13px; font-weight: 600; cursor: pointer;
                            box-shadow: 0 2px 8px rgba(94, 106, 210, 0.3);
                        ",
                        onclick: move |_| on_create.call(draft()),
                        "Create project"
                    }
                }
            }
        }
    }
}
