use crate::types::Severity;

pub struct SeverityStyle {
    /// Badge background and border on report cards.
    pub badge_class: &'static str,
    /// Text colour used for the severity in the review card.
    pub text_class: &'static str,
}

pub fn severity_style(severity: Severity) -> SeverityStyle {
    match severity {
        Severity::Critical => SeverityStyle {
            badge_class: "badge badge-critical",
            text_class: "severity-text severity-critical",
        },
        Severity::High => SeverityStyle {
            badge_class: "badge badge-high",
            text_class: "severity-text severity-high",
        },
        Severity::Medium => SeverityStyle {
            badge_class: "badge badge-medium",
            text_class: "severity-text",
        },
        Severity::Low => SeverityStyle {
            badge_class: "badge badge-low",
            text_class: "severity-text",
        },
    }
}

pub const APP_CSS: &str = r#"
:root {
    --color-brand: #15803d;
    --color-brand-dark: #166534;
    --color-brand-light: #dcfce7;
    --color-bg: #f9fafb;
    --color-surface: #ffffff;
    --color-border: #e5e7eb;
    --color-text: #111827;
    --color-text-muted: #6b7280;
}
body { margin: 0; background: var(--color-bg); color: var(--color-text); font-family: system-ui, sans-serif; }
.app-shell { max-width: 28rem; margin: 0 auto; min-height: 100vh; padding-bottom: 5rem; position: relative; }
.header { background: var(--color-brand); color: #fff; padding: 2rem 1rem 1rem; position: sticky; top: 0; z-index: 10; }
.header h1 { margin: 0; font-size: 1.25rem; }
.header .tagline { margin: 0; font-size: 0.75rem; color: var(--color-brand-light); }
.main { padding: 1rem; }
.card { background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 0.75rem; padding: 1rem; margin-bottom: 1rem; }
.card-meta { display: flex; justify-content: space-between; align-items: flex-start; }
.card-footer { display: flex; justify-content: space-between; border-top: 1px solid var(--color-border); padding-top: 0.75rem; font-size: 0.75rem; color: var(--color-text-muted); }
.badge { padding: 0.25rem 0.5rem; border-radius: 999px; font-size: 0.75rem; font-weight: 600; border: 1px solid; }
.badge-critical { background: #fee2e2; color: #991b1b; border-color: #fecaca; }
.badge-high { background: #ffedd5; color: #9a3412; border-color: #fed7aa; }
.badge-medium { background: #fef9c3; color: #854d0e; border-color: #fef08a; }
.badge-low { background: #dcfce7; color: #166534; border-color: #bbf7d0; }
.severity-text { font-weight: 500; }
.severity-critical { color: #dc2626; }
.severity-high { color: #ea580c; }
.btn { width: 100%; padding: 0.75rem; border: none; border-radius: 0.5rem; font-weight: 600; cursor: pointer; }
.btn-primary { background: var(--color-brand); color: #fff; }
.btn-secondary { background: var(--color-surface); border: 1px solid var(--color-border); color: var(--color-text-muted); }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.field { display: block; width: 100%; box-sizing: border-box; padding: 0.75rem; border: 1px solid var(--color-border); border-radius: 0.5rem; }
.pending { padding: 1rem; text-align: center; color: var(--color-brand); background: var(--color-brand-light); border-radius: 0.5rem; }
.chat { display: flex; flex-direction: column; height: calc(100vh - 140px); background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 0.75rem; overflow: hidden; }
.chat-list { flex: 1; overflow-y: auto; padding: 1rem; background: var(--color-bg); }
.message-row { display: flex; margin-bottom: 1rem; }
.message-row.user { justify-content: flex-end; }
.bubble { max-width: 80%; padding: 0.75rem; border-radius: 1rem; font-size: 0.875rem; }
.bubble.user { background: var(--color-brand); color: #fff; }
.bubble.model { background: var(--color-surface); border: 1px solid var(--color-border); }
.composer { display: flex; gap: 0.5rem; padding: 0.75rem; border-top: 1px solid var(--color-border); }
.nav { position: fixed; bottom: 0; left: 0; right: 0; max-width: 28rem; margin: 0 auto; display: flex; justify-content: space-around; padding: 0.75rem; background: var(--color-surface); border-top: 1px solid var(--color-border); }
.nav .tab { background: none; border: none; color: var(--color-text-muted); cursor: pointer; }
.nav .tab.active { color: var(--color-brand); }
.nav .tab-new { background: var(--color-brand); color: #fff; border-radius: 999px; width: 3.5rem; height: 3.5rem; margin-top: -2rem; font-size: 1.5rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_badge_class_has_a_rule() {
        for severity in Severity::ALL {
            let style = severity_style(severity);
            let modifier = style.badge_class.split_whitespace().last().unwrap();
            assert!(
                APP_CSS.contains(&format!(".{modifier} ")),
                "missing css for {modifier}"
            );
        }
    }

    #[test]
    fn only_urgent_levels_get_coloured_text() {
        assert!(severity_style(Severity::Critical).text_class.contains("critical"));
        assert!(severity_style(Severity::High).text_class.contains("high"));
        assert_eq!(severity_style(Severity::Low).text_class, "severity-text");
    }
}
