//! Pure inference from a registration number to year and department.
//!
//! Registration numbers look like `SEC23CS042`: a cohort marker (`SEC` plus a
//! two-digit admission year) followed by a two-letter department code. The
//! structuring prompt teaches the model the same tables; these functions are
//! the deterministic fallback for records that come back with empty fields.

/// Maps the cohort marker to an academic year, relative to the 2025-26
/// academic year. Unknown cohorts map to an empty string.
pub fn infer_year(registration_number: &str) -> String {
    let reg = registration_number.to_ascii_uppercase();
    match reg.get(..5).unwrap_or("") {
        "SEC22" => "Fourth",
        "SEC23" => "Third",
        "SEC24" => "Second",
        "SEC25" => "First",
        _ => "",
    }
    .to_string()
}

/// Maps the two-letter code after the cohort marker to a canonical
/// department. Unknown codes map to an empty string.
pub fn infer_department(registration_number: &str) -> String {
    let reg = registration_number.to_ascii_uppercase();
    match reg.get(5..7).unwrap_or("") {
        "CS" => "CSE",
        "IT" => "IT",
        "EC" => "ECE",
        "EE" => "EEE",
        "CE" => "CIVIL",
        "ME" => "MECH",
        "AD" => "AI&DS",
        "AM" => "AIML",
        "EI" => "EIE",
        "CB" => "CSBS",
        "CJ" => "M.Tech CSE",
        "MU" => "Mechanical and Automation",
        "IC" => "ICE",
        _ => "",
    }
    .to_string()
}
