use crate::app::{AppController, AppSnapshot};
use crate::form::FormPhase;
use crate::theme::severity_style;
use crate::types::{Category, Severity};
use crate::ui::drive_analysis;
use dioxus::prelude::*;

#[component]
pub fn ReportFormView(controller: Signal<AppController>, snapshot: Signal<AppSnapshot>) -> Element {
    let mut controller = controller;
    let (description, location, phase, can_analyze, can_submit) = {
        let snapshot = snapshot.read();
        let form = &snapshot.form;
        (
            form.description().to_string(),
            form.location().to_string(),
            form.phase().clone(),
            form.can_analyze(),
            form.can_submit(),
        )
    };

    let on_analyze = move |_| {
        let job = controller.write().begin_analysis();
        if let Some(job) = job {
            drive_analysis(controller, job);
        }
    };

    rsx! {
        div { class: "card",
            h2 { "New Report" }
            label { "What happened?" }
            textarea {
                class: "field",
                rows: "4",
                placeholder: "Describe the incident (e.g. ZESA transformer sparks, lost dog...)",
                value: "{description}",
                oninput: move |ev: FormEvent| controller.write().set_description(ev.value()),
            }
            label { "Location" }
            input {
                class: "field",
                r#type: "text",
                placeholder: "e.g. Corner Borrowdale Rd & Harare Dr",
                value: "{location}",
                oninput: move |ev: FormEvent| controller.write().set_location(ev.value()),
            }
            {match phase {
                FormPhase::Analyzing => rsx! {
                    div { class: "pending", "Analyzing incident details..." }
                },
                FormPhase::Editing => rsx! {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !can_analyze,
                        onclick: on_analyze,
                        "Analyze Report"
                    }
                },
                FormPhase::Reviewing(suggestion) => {
                    let style = severity_style(suggestion.severity);
                    rsx! {
                        div { class: "card",
                            span { class: "text-muted", "SUGGESTED TITLE" }
                            input {
                                class: "field",
                                r#type: "text",
                                value: "{suggestion.title}",
                                oninput: move |ev: FormEvent| {
                                    controller.write().update_suggestion(|s| s.title = ev.value());
                                },
                            }
                            span { class: "text-muted", "CATEGORY" }
                            select {
                                class: "field",
                                onchange: move |ev: FormEvent| {
                                    let picked = Category::ALL.into_iter().find(|c| c.label() == ev.value());
                                    if let Some(category) = picked {
                                        controller.write().update_suggestion(|s| s.category = category);
                                    }
                                },
                                for category in Category::ALL {
                                    option {
                                        value: category.label(),
                                        selected: category == suggestion.category,
                                        "{category}"
                                    }
                                }
                            }
                            span { class: "text-muted", "SEVERITY" }
                            select {
                                class: "field {style.text_class}",
                                onchange: move |ev: FormEvent| {
                                    let picked = Severity::ALL.into_iter().find(|s| s.label() == ev.value());
                                    if let Some(severity) = picked {
                                        controller.write().update_suggestion(|s| s.severity = severity);
                                    }
                                },
                                for severity in Severity::ALL {
                                    option {
                                        value: severity.label(),
                                        selected: severity == suggestion.severity,
                                        "{severity}"
                                    }
                                }
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| controller.write().edit_suggestion(),
                                "Edit"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: !can_submit,
                                onclick: move |_| {
                                    controller.write().submit_report();
                                },
                                "Submit Report"
                            }
                        }
                    }
                }
            }}
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| controller.write().cancel_report(),
                "Cancel"
            }
        }
    }
}
