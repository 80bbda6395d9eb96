//! Converts free-form roster text into student records via the LLM.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::student::RawStudentRecord;
use crate::roster::infer::{infer_department, infer_year};
use crate::roster::prompts::{ROSTER_PARSE_PROMPT, ROSTER_PARSE_SYSTEM};

/// Extracts structured records from raw roster text.
///
/// The model is instructed to return a bare JSON array; [`recover_json_array`]
/// tolerates fences or stray prose around it. Records whose `year` or
/// `department` came back empty are backfilled from the registration number.
pub async fn extract_records(
    raw_text: &str,
    llm: &LlmClient,
) -> Result<Vec<RawStudentRecord>, AppError> {
    let prompt = ROSTER_PARSE_PROMPT.replace("{raw_text}", raw_text);
    let response = llm
        .call(&prompt, ROSTER_PARSE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("roster extraction failed: {e}")))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("model returned empty content".to_string()))?;
    let array = recover_json_array(text)
        .ok_or_else(|| AppError::Llm("model did not return a JSON array".to_string()))?;

    let records: Vec<RawStudentRecord> = serde_json::from_str(array)
        .map_err(|e| AppError::Llm(format!("model returned malformed JSON: {e}")))?;

    Ok(records.into_iter().map(backfill_from_registration).collect())
}

/// Pulls the outermost JSON array out of the model response. Code fences and
/// surrounding prose are ignored; `None` if no array-shaped span exists.
pub fn recover_json_array(text: &str) -> Option<&str> {
    static ARRAY: OnceLock<Regex> = OnceLock::new();
    let re = ARRAY.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("array pattern compiles"));
    re.find(text).map(|m| m.as_str())
}

/// Backfills empty `year`/`department` values from the registration number.
/// Keys the model omitted stay omitted: that is a schema violation for the
/// assembler to report, not something to paper over here.
fn backfill_from_registration(mut record: RawStudentRecord) -> RawStudentRecord {
    let reg = record.registration_number.clone().unwrap_or_default();
    if record.department.as_deref() == Some("") {
        record.department = Some(infer_department(&reg));
    }
    if record.year.as_deref() == Some("") {
        record.year = Some(infer_year(&reg));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_a_bare_array() {
        let input = r#"[{"full_name": "Priya R"}]"#;
        assert_eq!(recover_json_array(input), Some(input));
    }

    #[test]
    fn recovers_an_array_inside_fences_and_prose() {
        let input = "Here is the data:\n```json\n[{\"full_name\": \"Priya R\"}]\n```\nDone.";
        assert_eq!(
            recover_json_array(input),
            Some(r#"[{"full_name": "Priya R"}]"#)
        );
    }

    #[test]
    fn recovers_multiline_arrays() {
        let input = "[\n  {\"full_name\": \"A\"},\n  {\"full_name\": \"B\"}\n]";
        assert_eq!(recover_json_array(input), Some(input));
    }

    #[test]
    fn no_array_means_none() {
        assert_eq!(recover_json_array("I could not parse the roster."), None);
    }

    #[test]
    fn backfills_only_empty_fields() {
        let record = RawStudentRecord {
            full_name: Some("Priya R".to_string()),
            registration_number: Some("SEC23CS042".to_string()),
            department: Some("".to_string()),
            year: Some("".to_string()),
            category: None,
            section: None,
        };
        let filled = backfill_from_registration(record);
        assert_eq!(filled.department.as_deref(), Some("CSE"));
        assert_eq!(filled.year.as_deref(), Some("Third"));
    }

    #[test]
    fn backfill_leaves_populated_and_missing_keys_alone() {
        let record = RawStudentRecord {
            full_name: Some("Priya R".to_string()),
            registration_number: Some("SEC23CS042".to_string()),
            department: Some("ECE".to_string()),
            year: None,
            category: None,
            section: None,
        };
        let filled = backfill_from_registration(record);
        // Populated values win over inference; an omitted key stays omitted.
        assert_eq!(filled.department.as_deref(), Some("ECE"));
        assert_eq!(filled.year, None);
    }

    #[test]
    fn backfill_with_unknown_registration_stays_empty() {
        let record = RawStudentRecord {
            full_name: Some("Priya R".to_string()),
            registration_number: Some("".to_string()),
            department: Some("".to_string()),
            year: Some("".to_string()),
            category: None,
            section: None,
        };
        let filled = backfill_from_registration(record);
        assert_eq!(filled.department.as_deref(), Some(""));
        assert_eq!(filled.year.as_deref(), Some(""));
    }
}
