//! Student record types and the fixed grouping orders.
//!
//! Ordering lives in data (`CATEGORY_ORDER`, `YEAR_ORDER`) rather than in
//! control flow so the document hierarchy can be tested and changed without
//! touching the renderer.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical department codes recognized by the roster pipeline.
pub const DEPARTMENTS: [&str; 13] = [
    "CSE",
    "IT",
    "ECE",
    "EEE",
    "CIVIL",
    "MECH",
    "AI&DS",
    "AIML",
    "EIE",
    "CSBS",
    "M.Tech CSE",
    "Mechanical and Automation",
    "ICE",
];

/// Year buckets in document order: seniors first, first years last.
pub const YEAR_ORDER: [&str; 4] = ["Fourth", "Third", "Second", "First"];

/// Top-level grouping bucket for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hostel,
    Dayscholar,
    Uncategorized,
}

/// Document order of the category buckets.
pub const CATEGORY_ORDER: [Category; 3] = [
    Category::Hostel,
    Category::Dayscholar,
    Category::Uncategorized,
];

impl Category {
    /// Heading text for the bucket, or `None` when the bucket renders
    /// un-headed (Uncategorized content follows whatever precedes it).
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Category::Hostel => Some("Hostel"),
            Category::Dayscholar => Some("Dayscholar"),
            Category::Uncategorized => None,
        }
    }

    /// Buckets a raw category label. Only the exact recognized labels map to
    /// a named bucket; anything else (including absence) is Uncategorized.
    pub fn from_label(label: Option<&str>) -> Category {
        match label {
            Some("Hostel") => Category::Hostel,
            Some("Dayscholar") => Category::Dayscholar,
            _ => Category::Uncategorized,
        }
    }
}

/// A record exactly as the model emitted it. Mandatory keys may still be
/// absent here; that is only an error once the record reaches validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStudentRecord {
    pub full_name: Option<String>,
    pub registration_number: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub category: Option<String>,
    pub section: Option<String>,
}

/// A mandatory key was absent from a record (empty string is fine, a missing
/// key is not).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record is missing mandatory field '{field}'")]
pub struct SchemaViolation {
    pub field: &'static str,
}

/// A validated student record. The four mandatory fields are always present
/// (possibly empty); `category` and `section` keep missing-vs-empty intact at
/// the type level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub full_name: String,
    pub registration_number: String,
    pub department: String,
    pub year: String,
    pub category: Option<String>,
    pub section: Option<String>,
}

impl StudentRecord {
    pub fn category(&self) -> Category {
        Category::from_label(self.category.as_deref())
    }
}

impl TryFrom<RawStudentRecord> for StudentRecord {
    type Error = SchemaViolation;

    fn try_from(raw: RawStudentRecord) -> Result<Self, Self::Error> {
        Ok(StudentRecord {
            full_name: raw.full_name.ok_or(SchemaViolation { field: "full_name" })?,
            registration_number: raw.registration_number.ok_or(SchemaViolation {
                field: "registration_number",
            })?,
            department: raw.department.ok_or(SchemaViolation {
                field: "department",
            })?,
            year: raw.year.ok_or(SchemaViolation { field: "year" })?,
            category: raw.category,
            section: raw.section,
        })
    }
}
