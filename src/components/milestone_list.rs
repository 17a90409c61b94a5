use dioxus::prelude::*;

use crate::components::common::{TextAreaField, TextField};
use crate::components::{DatePickerField, DateTriggerStyle};
use crate::constants::*;
use crate::state::{Milestone, ProjectDraft};

/// Editable list of the draft's milestones.
///
/// "Add milestone" appends a blank entry which is immediately editable.
/// Entries write back into the draft by id, so edits from an editor whose
/// entry was just removed are dropped instead of landing on a neighbor.
#[component]
pub fn MilestoneList(draft: Signal<ProjectDraft>) -> Element {
    let milestones = draft.read().milestones.clone();

    rsx! {
        div {
            style: "
                border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                padding: 16px;
            ",
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    margin-bottom: 12px;
                ",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "font-size: 12px;", "☰" }
                    h3 {
                        style: "margin: 0; font-size: 13px; font-weight: 500; color: {TEXT_PRIMARY};",
                        "Milestones"
                    }
                }
                button {
                    class: "hover-btn",
                    style: "
                        padding: 6px 12px; background-color: {BG_SURFACE};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                        color: {TEXT_SECONDARY}; font-size: 12px; cursor: pointer;
                    ",
                    onclick: move |_| {
                        draft.write().add_milestone();
                    },
                    "Add milestone"
                }
            }

            if milestones.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: {TEXT_DIM};",
                    "No milestones yet"
                }
            } else {
                div {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    for (index, milestone) in milestones.into_iter().enumerate() {
                        MilestoneEditor {
                            key: "{milestone.id}",
                            draft,
                            milestone,
                            ordinal: index + 1,
                        }
                    }
                }
            }
        }
    }
}

/// One milestone's sub-form: name, target date, and notes.
#[component]
fn MilestoneEditor(draft: Signal<ProjectDraft>, milestone: Milestone, ordinal: usize) -> Element {
    let id = milestone.id;

    rsx! {
        div {
            style: "
                border: 1px solid {BORDER_SUBTLE}; border-radius: 8px;
                padding: 12px; background-color: {BG_BASE};
                display: flex; flex-direction: column; gap: 12px;
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span {
                    style: "font-size: 11px; color: {TEXT_DIM};",
                    "Milestone {ordinal}"
                }
                button {
                    class: "hover-btn",
                    style: "
                        width: 22px; height: 22px; border-radius: 6px;
                        background: none; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_MUTED}; font-size: 11px; cursor: pointer;
                    ",
                    onclick: move |_| {
                        draft.write().remove_milestone(id);
                    },
                    "✕"
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                TextField {
                    label: "Milestone name",
                    placeholder: "Add a name…",
                    value: milestone.title.clone(),
                    on_change: move |next: String| {
                        draft.write().set_milestone_title(id, next);
                    },
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 6px; min-width: 0;",
                    label {
                        style: "
                            font-size: 11px; font-weight: 500; color: {TEXT_MUTED};
                            text-transform: uppercase; letter-spacing: 0.5px;
                        ",
                        "Target date"
                    }
                    DatePickerField {
                        placeholder: "Target date",
                        value: milestone.target_date,
                        trigger: DateTriggerStyle::Field,
                        on_select: move |date| {
                            draft.write().set_milestone_target_date(id, Some(date));
                        },
                    }
                }
            }

            TextAreaField {
                label: "Details",
                placeholder: "Add notes…",
                rows: 3,
                value: milestone.detail.clone(),
                on_change: move |next: String| {
                    draft.write().set_milestone_detail(id, next);
                },
            }
        }
    }
}
