use crate::analyst::PendingTurn;
use crate::app::{AnalysisJob, AppController, Tab};
use crate::config::AiConfig;
use crate::theme::APP_CSS;
use crate::views::{AnalystView, FeedView, ReportFormView};
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    let controller = use_signal(|| AppController::from_config(&AiConfig::from_env()));
    let mut snapshot = use_signal(|| controller.peek().snapshot());

    // Views render from the published snapshot; the controller is only written.
    use_future(move || {
        let mut updates = controller.peek().subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    let active_tab = snapshot.read().tab;

    rsx! {
        style { dangerous_inner_html: "{APP_CSS}" }
        div { class: "app-shell",
            AppHeader {}
            main { class: "main",
                {match active_tab {
                    Tab::Feed => rsx!( FeedView { snapshot } ),
                    Tab::Report => rsx!( ReportFormView { controller, snapshot } ),
                    Tab::Analyst => rsx!( AnalystView { controller, snapshot } ),
                }}
            }
            TabNavigation { controller, active_tab }
        }
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        header { class: "header",
            h1 { "Sentinel Zimbabwe" }
            p { class: "tagline", "Neighborhood Watch & Safety" }
        }
    }
}

#[component]
fn TabNavigation(controller: Signal<AppController>, active_tab: Tab) -> Element {
    let mut controller = controller;
    rsx! {
        nav { class: "nav",
            TabButton { controller, active_tab, tab: Tab::Feed, label: "Feed" }
            button {
                class: "tab tab-new",
                r#type: "button",
                title: "New report",
                onclick: move |_| controller.write().select_tab(Tab::Report),
                "+"
            }
            TabButton { controller, active_tab, tab: Tab::Analyst, label: "Analyst" }
        }
    }
}

#[component]
fn TabButton(
    controller: Signal<AppController>,
    active_tab: Tab,
    tab: Tab,
    label: &'static str,
) -> Element {
    let mut controller = controller;
    let class = if active_tab == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| controller.write().select_tab(tab),
            "{label}"
        }
    }
}

/// Run a chat turn on the root scope. Leaving the analyst tab unmounts its
/// view, and a view-scoped task would be cancelled with it.
pub(crate) fn drive_chat_turn(mut controller: Signal<AppController>, turn: PendingTurn) {
    spawn_forever(async move {
        let outcome = turn.resolve().await;
        controller.write().finish_chat_turn(outcome);
    });
}

/// Run an analysis on the root scope; see [`drive_chat_turn`].
pub(crate) fn drive_analysis(mut controller: Signal<AppController>, job: AnalysisJob) {
    spawn_forever(async move {
        let outcome = job.run().await;
        controller.write().complete_analysis(outcome);
    });
}
