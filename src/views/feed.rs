use crate::app::AppSnapshot;
use crate::feed::{active_label, format_age};
use crate::theme::severity_style;
use crate::types::Report;
use dioxus::prelude::*;
use time::OffsetDateTime;

#[component]
pub fn FeedView(snapshot: Signal<AppSnapshot>) -> Element {
    let reports = snapshot.read().reports.clone();
    let now = OffsetDateTime::now_utc();

    rsx! {
        div { class: "feed",
            div { class: "card-meta",
                h2 { "Community Feed" }
                span { class: "badge badge-low", "{active_label(reports.len())}" }
            }
            for report in reports.iter() {
                ReportCard { key: "{report.id}", report: report.clone(), age: format_age(report.timestamp, now) }
            }
        }
    }
}

#[component]
fn ReportCard(report: Report, age: String) -> Element {
    let style = severity_style(report.severity);
    rsx! {
        div { class: "card",
            div { class: "card-meta",
                span { class: "{style.badge_class}", "{report.category}" }
                span { class: "text-muted", "{age}" }
            }
            h3 { "{report.title}" }
            p { "{report.description}" }
            div { class: "card-footer",
                span { "📍 {report.location}" }
                span { "👍 {report.votes}" }
            }
        }
    }
}
