//! Root application component
//!
//! Hosts the landing surface and owns the creation dialog's open/closed
//! state. The modal is conditionally mounted, so every open starts from a
//! fresh draft and closing drops all form state. Committed drafts land in
//! an in-memory list rendered below the hero; nothing is persisted.

use dioxus::prelude::*;

use crate::components::NewProjectModal;
use crate::constants::*;
use crate::state::ProjectDraft;
use crate::utils::format_short_date;

#[component]
pub fn App() -> Element {
    let mut show_modal = use_signal(|| false);
    let mut created = use_signal(Vec::<ProjectDraft>::new);

    let projects = created.read().clone();

    rsx! {
        // Global CSS
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .hover-btn {{ transition: background-color 0.15s ease, border-color 0.15s ease; }}
            .hover-btn:hover {{ background-color: {BG_HOVER} !important; }}
            input::placeholder, textarea::placeholder {{ color: {TEXT_DIM}; }}
            "#
        }

        div {
            style: "
                min-height: 100vh; background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                display: flex; flex-direction: column; align-items: center;
                padding: 80px 24px 48px;
            ",

            // Hero
            div {
                style: "text-align: center; max-width: 560px;",
                h1 {
                    style: "margin: 0; font-size: 32px; font-weight: 700; letter-spacing: -0.5px;",
                    "Roadmap Studio"
                }
                p {
                    style: "margin: 12px 0 0; font-size: 14px; color: {TEXT_SECONDARY}; line-height: 1.6;",
                    "Plan projects with status, priority, schedule dates, and milestones."
                }
                button {
                    style: "
                        margin-top: 28px; padding: 12px 24px; border-radius: 8px;
                        background: linear-gradient(180deg, {ACCENT_PRIMARY} 0%, #4f5ac2 100%);
                        border: none; color: white;
                        font-size: 14px; font-weight: 600; cursor: pointer;
                        box-shadow: 0 2px 8px rgba(94, 106, 210, 0.3);
                    ",
                    onclick: move |_| show_modal.set(true),
                    "New project"
                }
            }

            // Committed projects
            if !projects.is_empty() {
                div {
                    style: "
                        margin-top: 56px; width: 100%; max-width: 560px;
                        display: flex; flex-direction: column; gap: 10px;
                    ",
                    h2 {
                        style: "
                            margin: 0 0 4px; font-size: 12px; font-weight: 600;
                            color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;
                        ",
                        "Projects"
                    }
                    for (index, project) in projects.into_iter().enumerate() {
                        ProjectCard { key: "{index}", project }
                    }
                }
            }

            if show_modal() {
                NewProjectModal {
                    on_create: move |draft: ProjectDraft| {
                        created.write().push(draft);
                        show_modal.set(false);
                    },
                    on_cancel: move |_| show_modal.set(false),
                }
            }
        }
    }
}

/// One committed project in the landing list.
#[component]
fn ProjectCard(project: ProjectDraft) -> Element {
    let name = if project.title.is_empty() {
        "Untitled project".to_string()
    } else {
        project.title.clone()
    };

    let schedule = match (project.start_date, project.target_date) {
        (Some(start), Some(target)) => {
            format!("{} → {}", format_short_date(start), format_short_date(target))
        }
        (Some(start), None) => format!("From {}", format_short_date(start)),
        (None, Some(target)) => format!("Due {}", format_short_date(target)),
        (None, None) => String::new(),
    };

    let milestone_count = project.milestones.len();

    rsx! {
        div {
            style: "
                padding: 14px 16px; border: 1px solid {BORDER_DEFAULT};
                border-radius: 8px; background-color: {BG_ELEVATED};
                display: flex; flex-direction: column; gap: 8px; text-align: left;
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span {
                    style: "font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY};",
                    "{name}"
                }
                if milestone_count > 0 {
                    span {
                        style: "font-size: 11px; color: {TEXT_MUTED};",
                        if milestone_count == 1 {
                            "1 milestone"
                        } else {
                            "{milestone_count} milestones"
                        }
                    }
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 8px; flex-wrap: wrap;",
                span {
                    style: "
                        padding: 2px 8px; border-radius: 10px; font-size: 11px;
                        background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE};
                        color: {TEXT_SECONDARY};
                    ",
                    "{project.status.label()}"
                }
                span {
                    style: "
                        padding: 2px 8px; border-radius: 10px; font-size: 11px;
                        background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE};
                        color: {TEXT_SECONDARY};
                    ",
                    "{project.priority.label()}"
                }
                if !schedule.is_empty() {
                    span {
                        style: "font-size: 11px; color: {TEXT_MUTED};",
                        "{schedule}"
                    }
                }
            }
        }
    }
}
