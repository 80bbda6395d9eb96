//! Document assembly: student records in, WordprocessingML bytes out.
//!
//! Pure and deterministic. The assembler performs no I/O beyond filling an
//! in-memory buffer at the end, holds no state across invocations, and never
//! mutates its input. An empty record list is valid and yields a title-only
//! document; a record with a missing mandatory key aborts the whole assembly
//! with no partial output.

use std::io::Cursor;

use docx_rs::{
    Docx, Paragraph, Run, RunFonts, SpecialIndentType, Tab, TabValueType, Table, TableCell,
    TableLayoutType, TableRow, WidthType,
};
use thiserror::Error;

use crate::document::grouping::{group_records, CategoryGroup, YearBody};
use crate::document::typography::{
    black_run, bold_black_run, heading, heading_styles, BLACK, BODY_FONT, BODY_SIZE, COL_DEPT,
    COL_NAME, COL_REG, COL_SECTION, COL_SNO, LIST_HANGING, LIST_INDENT, SECTION_PLACEHOLDER,
    SEPARATOR, TAB_NAME, TAB_REG, TAB_SEPARATOR,
};
use crate::models::student::{RawStudentRecord, SchemaViolation, StudentRecord};

/// Advisory filename for the download response.
pub const DOWNLOAD_FILENAME: &str = "student_details.docx";
/// Advisory content type for the download response.
pub const CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const TITLE: &str = "VOLUNTEERS LIST";

const TABLE_HEADERS: [&str; 5] = ["S.No.", "Name", "SEC ID", "Section", "Department"];
const COLUMN_WIDTHS: [usize; 5] = [COL_SNO, COL_NAME, COL_REG, COL_SECTION, COL_DEPT];

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("schema violation: {0}")]
    Schema(#[from] SchemaViolation),

    #[error("failed to serialize document: {0}")]
    Serialize(String),
}

/// Validates the raw records, assembles the roster document and serializes it
/// to an in-memory buffer owned by the caller.
pub fn assemble(records: Vec<RawStudentRecord>) -> Result<Vec<u8>, AssembleError> {
    let validated: Vec<StudentRecord> = records
        .into_iter()
        .map(StudentRecord::try_from)
        .collect::<Result<_, _>>()?;

    let docx = build_document(&validated);

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| AssembleError::Serialize(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Builds the document tree for an already-validated record list.
pub fn build_document(records: &[StudentRecord]) -> Docx {
    let mut docx = Docx::new()
        .default_fonts(RunFonts::new().ascii(BODY_FONT))
        .default_size(BODY_SIZE);
    for style in heading_styles() {
        docx = docx.add_style(style);
    }

    docx = docx.add_paragraph(heading("Title", TITLE));

    for group in group_records(records) {
        docx = add_category(docx, &group);
    }
    docx
}

fn add_category(mut docx: Docx, group: &CategoryGroup<'_>) -> Docx {
    if let Some(label) = group.category.heading() {
        docx = docx.add_paragraph(heading("Heading1", label));
    }

    for year in &group.years {
        docx = docx.add_paragraph(heading("Heading2", &format!("{} Year", year.year)));
        docx = match &year.body {
            YearBody::FirstYearTable(students) => docx.add_table(first_year_table(students)),
            YearBody::Departments(departments) => {
                let mut docx = docx;
                for dept in departments {
                    docx = docx.add_paragraph(heading("Heading3", dept.department));
                    for (i, student) in dept.students.iter().enumerate() {
                        docx = docx.add_paragraph(senior_list_paragraph(i + 1, student));
                    }
                }
                docx
            }
        };
    }
    docx
}

/// The first-year roster as a fixed-layout 5-column table. Column widths are
/// advisory hints; fixed layout (autofit disabled) makes the engine honor
/// them. Rows arrive pre-sorted by department; numbering restarts at 1 per
/// table.
fn first_year_table(students: &[&StudentRecord]) -> Table {
    let header = TableRow::new(
        TABLE_HEADERS
            .iter()
            .zip(COLUMN_WIDTHS)
            .map(|(label, width)| table_cell(width, bold_black_run(label)))
            .collect(),
    );

    let mut rows = vec![header];
    for (i, student) in students.iter().enumerate() {
        let section = student.section.as_deref().unwrap_or(SECTION_PLACEHOLDER);
        let cells = [
            (COL_SNO, (i + 1).to_string()),
            (COL_NAME, student.full_name.clone()),
            (COL_REG, student.registration_number.clone()),
            (COL_SECTION, section.to_string()),
            (COL_DEPT, student.department.clone()),
        ];
        rows.push(TableRow::new(
            cells
                .into_iter()
                .map(|(width, text)| table_cell(width, black_run(&text)))
                .collect(),
        ));
    }

    Table::new(rows)
        .set_grid(COLUMN_WIDTHS.to_vec())
        .layout(TableLayoutType::Fixed)
        .width(COLUMN_WIDTHS.iter().sum(), WidthType::Dxa)
}

fn table_cell(width: usize, run: Run) -> TableCell {
    TableCell::new()
        .width(width, WidthType::Dxa)
        .add_paragraph(Paragraph::new().add_run(run))
}

/// One senior roster line: `"<n>.\t<name>"` at the first tab stop, a centered
/// separator glyph mid-page, then the registration number. The hanging indent
/// keeps the number flush left with wrapped lines aligned under the name.
/// Three separate runs, each explicitly black, so run boundaries cannot pick
/// up differing theme defaults.
fn senior_list_paragraph(number: usize, student: &StudentRecord) -> Paragraph {
    Paragraph::new()
        .indent(
            Some(LIST_INDENT),
            Some(SpecialIndentType::Hanging(LIST_HANGING)),
            None,
            None,
        )
        .add_tab(Tab::new().val(TabValueType::Left).pos(TAB_NAME))
        .add_tab(Tab::new().val(TabValueType::Center).pos(TAB_SEPARATOR))
        .add_tab(Tab::new().val(TabValueType::Left).pos(TAB_REG))
        .add_run(
            Run::new()
                .add_text(format!("{number}."))
                .add_tab()
                .add_text(student.full_name.as_str())
                .add_tab()
                .color(BLACK),
        )
        .add_run(black_run(SEPARATOR))
        .add_run(
            Run::new()
                .add_tab()
                .add_text(student.registration_number.as_str())
                .color(BLACK),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, reg: &str, dept: &str, year: &str) -> StudentRecord {
        StudentRecord {
            full_name: name.to_string(),
            registration_number: reg.to_string(),
            department: dept.to_string(),
            year: year.to_string(),
            category: None,
            section: None,
        }
    }

    fn with_category(mut record: StudentRecord, category: &str) -> StudentRecord {
        record.category = Some(category.to_string());
        record
    }

    fn raw(record: &StudentRecord) -> RawStudentRecord {
        RawStudentRecord {
            full_name: Some(record.full_name.clone()),
            registration_number: Some(record.registration_number.clone()),
            department: Some(record.department.clone()),
            year: Some(record.year.clone()),
            category: record.category.clone(),
            section: record.section.clone(),
        }
    }

    /// Renders records to the main document part XML for content assertions.
    fn document_xml(records: &[StudentRecord]) -> String {
        let xml = build_document(records).build();
        String::from_utf8(xml.document).unwrap()
    }

    fn position(xml: &str, needle: &str) -> usize {
        xml.find(needle)
            .unwrap_or_else(|| panic!("expected {needle:?} in document"))
    }

    #[test]
    fn single_uncategorized_first_year_renders_table_without_category_heading() {
        let xml = document_xml(&[student("Priya R", "SEC25CS001", "CSE", "First")]);

        assert!(xml.contains(TITLE));
        assert!(!xml.contains(r#"w:val="Heading1""#));
        assert!(xml.contains("First Year"));
        assert!(xml.contains("<w:tbl>"));
        assert!(xml.contains("S.No."));
        assert!(xml.contains(">1<"));
        assert!(xml.contains("Priya R"));
        // No section supplied: the placeholder fills the cell.
        assert!(xml.contains(SECTION_PLACEHOLDER));
    }

    #[test]
    fn hostel_seniors_group_by_department_in_lexicographic_order() {
        let records = vec![
            with_category(student("Arun K", "SEC24EC007", "ECE", "Second"), "Hostel"),
            with_category(student("Divya S", "SEC24CS011", "CSE", "Second"), "Hostel"),
        ];
        let xml = document_xml(&records);

        assert!(xml.contains("Hostel"));
        assert!(xml.contains("Second Year"));
        assert!(position(&xml, "CSE") < position(&xml, "ECE"));
        // Each department list restarts at 1.
        assert_eq!(xml.matches(">1.<").count(), 2);
    }

    #[test]
    fn all_categories_and_years_render_in_fixed_nested_order() {
        let records = vec![
            student("U1", "SEC25IT001", "IT", "First"),
            with_category(student("H4", "SEC22CS001", "CSE", "Fourth"), "Hostel"),
            with_category(student("D3", "SEC23EC001", "ECE", "Third"), "Dayscholar"),
            with_category(student("H1", "SEC25ME001", "MECH", "First"), "Hostel"),
            student("U2", "SEC24CE001", "CIVIL", "Second"),
        ];
        let xml = document_xml(&records);

        let hostel = position(&xml, "Hostel");
        let dayscholar = position(&xml, "Dayscholar");
        assert!(hostel < dayscholar);

        // Hostel: Fourth before First; the uncategorized Second Year comes
        // after the Dayscholar block.
        let fourth = position(&xml, "Fourth Year");
        let hostel_first = position(&xml, "First Year");
        assert!(hostel < fourth && fourth < hostel_first);
        let second = position(&xml, "Second Year");
        assert!(dayscholar < second);

        // Completeness: every record surfaces exactly once.
        for reg in [
            "SEC25IT001",
            "SEC22CS001",
            "SEC23EC001",
            "SEC25ME001",
            "SEC24CE001",
        ] {
            assert_eq!(xml.matches(reg).count(), 1, "{reg} must appear once");
        }
    }

    #[test]
    fn every_run_carries_the_black_override() {
        let records = vec![
            student("U1", "SEC25IT001", "IT", "First"),
            with_category(student("H4", "SEC22CS001", "CSE", "Fourth"), "Hostel"),
        ];
        let xml = document_xml(&records);

        let runs = xml.matches("<w:r>").count();
        let black = xml.matches(r#"<w:color w:val="000000""#).count();
        assert!(runs > 0);
        assert_eq!(runs, black);
    }

    #[test]
    fn senior_list_uses_hanging_indent_and_three_tab_stops() {
        let xml = document_xml(&[with_category(
            student("Arun K", "SEC23CS042", "CSE", "Third"),
            "Hostel",
        )]);

        assert!(xml.contains(r#"w:hanging="360""#));
        assert!(xml.contains(r#"w:pos="720""#));
        assert!(xml.contains(r#"w:pos="4320""#));
        assert!(xml.contains(r#"w:pos="5760""#));
        assert!(xml.contains(SEPARATOR));
    }

    #[test]
    fn senior_line_advances_through_all_three_tab_stops() {
        let xml = document_xml(&[with_category(
            student("Arun K", "SEC23CS042", "CSE", "Third"),
            "Hostel",
        )]);

        // One tab before the name, one after it (so the separator reaches the
        // centered stop), one before the registration number. Tab-stop
        // definitions carry attributes; only the in-run tab characters are
        // bare `<w:tab />` elements.
        assert_eq!(xml.matches("<w:tab />").count(), 3);

        // Run sequence within the line: number+tab+name+tab, separator,
        // tab+registration number.
        let name = position(&xml, "Arun K");
        let separator = position(&xml, SEPARATOR);
        let reg = position(&xml, "SEC23CS042");
        assert!(name < separator && separator < reg);
    }

    #[test]
    fn first_year_table_uses_fixed_layout_and_advisory_widths() {
        let xml = document_xml(&[student("Priya R", "SEC25CS001", "CSE", "First")]);

        assert!(xml.contains("<w:tblLayout"));
        assert!(xml.contains(r#"w:w="2880""#));
        assert!(xml.contains(r#"w:w="144""#));
    }

    #[test]
    fn empty_input_yields_a_title_only_document() {
        let xml = document_xml(&[]);

        assert!(xml.contains(TITLE));
        assert!(!xml.contains("<w:tbl>"));
        assert!(!xml.contains(r#"w:val="Heading1""#));
        assert!(!xml.contains(r#"w:val="Heading2""#));
    }

    #[test]
    fn assembling_twice_is_idempotent() {
        let records = vec![
            with_category(student("Arun K", "SEC24EC007", "ECE", "Second"), "Hostel"),
            student("Priya R", "SEC25CS001", "CSE", "First"),
        ];
        assert_eq!(document_xml(&records), document_xml(&records));
    }

    #[test]
    fn missing_mandatory_key_aborts_with_schema_violation() {
        let mut bad = raw(&student("Arun K", "SEC24EC007", "ECE", "Second"));
        bad.department = None;

        let err = assemble(vec![bad]).unwrap_err();
        match err {
            AssembleError::Schema(violation) => assert_eq!(violation.field, "department"),
            AssembleError::Serialize(_) => panic!("expected a schema violation"),
        }
    }

    #[test]
    fn assemble_produces_a_zip_package() {
        let bytes = assemble(vec![raw(&student("Priya R", "SEC25CS001", "CSE", "First"))])
            .unwrap();
        // OOXML packages are zip archives: PK magic.
        assert_eq!(&bytes[..2], b"PK");
    }
}
