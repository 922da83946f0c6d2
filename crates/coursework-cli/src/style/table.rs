//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use coursework_types::Course;

use super::colors::SemanticStyle;

/// Creates a styled two-column table of courses.
pub fn course_table(courses: &[Course]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = ["Course", "Enrolled"]
        .into_iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for course in courses {
        table.add_row(vec![
            Cell::new(course.name()),
            Cell::new(course.enrollment_count()).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Prints courses as a formatted table with a row count footer.
pub fn print_course_table(courses: &[Course]) {
    if courses.is_empty() {
        println!("{}", "No courses in catalog.".muted());
        return;
    }

    println!("{}", course_table(courses));

    let count = courses.len();
    let row_word = if count == 1 { "course" } else { "courses" };
    println!("{}", format!("({count} {row_word})").muted());
}
