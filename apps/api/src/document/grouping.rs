//! Grouping of validated records into the category → year → department tree.
//!
//! The tree is ephemeral: built fresh per document generation, borrowed from
//! the input slice, and dropped once rendering finishes. Empty buckets are
//! omitted at every level so the renderer never emits a heading with no body.

use crate::models::student::{Category, StudentRecord, CATEGORY_ORDER, YEAR_ORDER};

/// One non-empty category bucket, years in document order.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub years: Vec<YearGroup<'a>>,
}

/// One non-empty year bucket within a category.
#[derive(Debug)]
pub struct YearGroup<'a> {
    pub year: &'static str,
    pub body: YearBody<'a>,
}

/// First years render as a single table; senior years as per-department lists.
#[derive(Debug)]
pub enum YearBody<'a> {
    FirstYearTable(Vec<&'a StudentRecord>),
    Departments(Vec<DepartmentGroup<'a>>),
}

/// A senior department and its students in original relative order.
#[derive(Debug)]
pub struct DepartmentGroup<'a> {
    pub department: &'a str,
    pub students: Vec<&'a StudentRecord>,
}

/// Builds the grouping tree, consulting `CATEGORY_ORDER` and `YEAR_ORDER` for
/// iteration order. Records keep their original relative order inside every
/// bucket; the only re-sort is the department sort, which is stable.
pub fn group_records(records: &[StudentRecord]) -> Vec<CategoryGroup<'_>> {
    CATEGORY_ORDER
        .iter()
        .filter_map(|&category| {
            let members: Vec<&StudentRecord> = records
                .iter()
                .filter(|r| r.category() == category)
                .collect();
            if members.is_empty() {
                return None;
            }

            let years: Vec<YearGroup<'_>> = YEAR_ORDER
                .iter()
                .filter_map(|&year| {
                    let cohort: Vec<&StudentRecord> = members
                        .iter()
                        .copied()
                        .filter(|r| r.year == year)
                        .collect();
                    if cohort.is_empty() {
                        return None;
                    }
                    let body = if year == "First" {
                        YearBody::FirstYearTable(sort_by_department(cohort))
                    } else {
                        YearBody::Departments(group_by_department(cohort))
                    };
                    Some(YearGroup { year, body })
                })
                .collect();

            Some(CategoryGroup { category, years })
        })
        .collect()
}

fn sort_by_department(mut cohort: Vec<&StudentRecord>) -> Vec<&StudentRecord> {
    // sort_by is stable: ties keep original relative order.
    cohort.sort_by(|a, b| a.department.cmp(&b.department));
    cohort
}

fn group_by_department<'a>(cohort: Vec<&'a StudentRecord>) -> Vec<DepartmentGroup<'a>> {
    let mut names: Vec<&'a str> = cohort.iter().map(|r| r.department.as_str()).collect();
    names.sort_unstable();
    names.dedup();

    names
        .into_iter()
        .map(|department| DepartmentGroup {
            department,
            students: cohort
                .iter()
                .copied()
                .filter(|r| r.department == department)
                .collect(),
        })
        .collect()
}
