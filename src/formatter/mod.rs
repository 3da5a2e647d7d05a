//! Markdown rendering of a lookup result.

use crate::directory::MedicationRecord;
use crate::reference::ReferenceLink;

const DISCLAIMER: &str =
    "*This is informational only. Always consult healthcare professionals for medical advice.*";
const SOURCES: &str = "*Sources: FASS.se, Läkemedelsverket*";

/// Render a lookup result as Markdown text.
///
/// The FASS section and disclaimer are always present, whether or not
/// `record` is set. Output has no trailing newline.
pub fn format_lookup(query: &str, record: Option<&MedicationRecord>, link: &ReferenceLink) -> String {
    let mut output: Vec<String> = Vec::new();
    output.push(format!("## Swedish Medication Lookup: {}\n", query));

    if let Some(record) = record {
        output.push(format!(
            "### {} ({})\n",
            title_case(record.canonical_name),
            record.brands.join(", ")
        ));
        output.push(format!("**Use:** {}", record.indication));
        output.push(format!("**Dosage:** {}", record.dosage));
        output.push(format!("**OTC:** {}", record.otc));
        output.push(format!("**Warnings:** {}", record.warnings));
        output.push(String::new());
    }

    output.push("### Full Information on FASS".to_string());
    output.push(format!("🔗 {}", link.search_url));
    output.push(String::new());
    output.push("---".to_string());
    output.push(DISCLAIMER.to_string());
    output.push(SOURCES.to_string());

    output.join("\n")
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}
