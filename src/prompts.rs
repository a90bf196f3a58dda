use crate::types::{Category, Report, Severity};
use serde_json::{Value, json};

/// Local context the prompts are written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub brand: &'static str,
    /// Locally recognisable incident kinds, used as hints for the classifier.
    pub incident_examples: &'static str,
    pub emergency_advice: &'static str,
    pub greetings: &'static str,
    /// First message shown in the analyst chat.
    pub welcome: &'static str,
}

pub const ZIMBABWE: Region = Region {
    name: "Zimbabwe",
    brand: "Sentinel Zimbabwe",
    incident_examples: "ZESA, council water, potholes, crime",
    emergency_advice: "emergency numbers 999/112, ZESA fault lines",
    greetings: "\"Mhoro\" or \"Salibonani\"",
    welcome: "Mhoro! I am your Sentinel Zimbabwe Analyst. Ask me about recent incidents, ZESA patterns, or safety advice in your area.",
};

impl Default for Region {
    fn default() -> Self {
        ZIMBABWE
    }
}

pub fn classification_prompt(region: &Region, description: &str) -> String {
    format!(
        r#"Analyze this neighborhood incident report for {name} context (e.g. {examples}).
Provide a short title, a category, and a severity level.

Description: "{description}"

Respond with JSON only:
{{
  "title": "string",
  "category": {categories},
  "severity": {severities}
}}"#,
        name = region.name,
        examples = region.incident_examples,
        categories = quoted_alternatives(Category::ALL.iter().map(|c| c.label())),
        severities = quoted_alternatives(Severity::ALL.iter().map(|s| s.label())),
    )
}

fn quoted_alternatives<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels
        .map(|label| format!("\"{label}\""))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Response schema that pins `category` and `severity` to the known labels.
pub fn classification_schema() -> Value {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let severities: Vec<&str> = Severity::ALL.iter().map(|s| s.label()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "category": { "type": "STRING", "enum": categories },
            "severity": { "type": "STRING", "enum": severities }
        },
        "required": ["title", "category", "severity"]
    })
}

/// System instruction for the analyst, embedding the given reports as JSON.
pub fn analyst_instruction(region: &Region, reports: &[Report]) -> serde_json::Result<String> {
    let snapshot = serde_json::to_string(reports)?;
    Ok(format!(
        r#"You are a helpful neighborhood safety analyst for {brand}.
You have access to the following active reports from the community:
{snapshot}

Use this data to answer questions about safety trends, specific incidents, or infrastructure issues (like {examples}).
If asked about general safety in {name}, give relevant local advice (e.g. {advice}).
Be concise, friendly, and community-focused. Use {greetings} occasionally for greeting."#,
        brand = region.brand,
        examples = region.incident_examples,
        name = region.name,
        advice = region.emergency_advice,
        greetings = region.greetings,
    ))
}

pub fn connection_apology(region: &Region) -> String {
    let network = region.brand.split_whitespace().next().unwrap_or(region.brand);
    format!("I'm having trouble connecting to the {network} network. Please try again.")
}
