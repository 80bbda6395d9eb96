//! Typography constants and run/paragraph constructors for the roster
//! document.
//!
//! Every visible run is built through [`black_run`], which takes the explicit
//! black color at construction time. The document theme's default heading
//! color must never leak through, so no code path creates a run without a
//! color override.

use docx_rs::{Paragraph, Run, Style, StyleType};

/// Body typeface applied as the document default.
pub const BODY_FONT: &str = "Times New Roman";
/// Body size in half-points (12pt).
pub const BODY_SIZE: usize = 24;
/// Explicit foreground for every run in the document.
pub const BLACK: &str = "000000";

// First-year table column widths in twips (1440 per inch):
// narrow S.No., wide name, medium registration number, narrow section,
// medium department.
pub const COL_SNO: usize = 144;
pub const COL_NAME: usize = 2880;
pub const COL_REG: usize = 1440;
pub const COL_SECTION: usize = 144;
pub const COL_DEPT: usize = 1440;

/// Placeholder for a first-year record with no section.
pub const SECTION_PLACEHOLDER: &str = "N/A";

// Senior list geometry: body indented half an inch with a quarter-inch
// hanging first line so the number sits flush left; tab stops for the name,
// the separator glyph, and the registration number.
pub const LIST_INDENT: i32 = 720;
pub const LIST_HANGING: i32 = 360;
pub const TAB_NAME: usize = 720;
pub const TAB_SEPARATOR: usize = 4320;
pub const TAB_REG: usize = 5760;

/// Separator glyph between name and registration number.
pub const SEPARATOR: &str = "–";

/// A text run carrying the explicit black override.
pub fn black_run(text: &str) -> Run {
    Run::new().add_text(text).color(BLACK)
}

pub fn bold_black_run(text: &str) -> Run {
    black_run(text).bold()
}

/// A heading paragraph in the given style, its run forced to black.
pub fn heading(style_id: &str, text: &str) -> Paragraph {
    Paragraph::new().style(style_id).add_run(black_run(text))
}

/// Heading styles registered on every generated document. IDs mirror the
/// built-in Word ranks; sizes are half-points.
pub fn heading_styles() -> Vec<Style> {
    vec![
        Style::new("Title", StyleType::Paragraph).name("Title").size(56),
        Style::new("Heading1", StyleType::Paragraph)
            .name("Heading 1")
            .size(32)
            .bold(),
        Style::new("Heading2", StyleType::Paragraph)
            .name("Heading 2")
            .size(28)
            .bold(),
        Style::new("Heading3", StyleType::Paragraph)
            .name("Heading 3")
            .size(24)
            .bold(),
    ]
}
