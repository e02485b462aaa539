//! Projection of controller state onto a [`Document`].
//!
//! Rendering is stateless: every pass recomputes region visibility and fully
//! rebuilds the list sections it touches.

use std::{collections::HashMap, fmt::Write as _};

use crate::controller::ViewState;

const ITEM_BULLET: &str = "•";
const RELATIONSHIP_ARROW: &str = "→";
const LOADING_TEXT: &str = "Loading student data...";
const FOOTER_TEXT: &str = "* Students over 21 years old";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Students,
    Courses,
    Instructors,
    Relationships,
    CourseInstructors,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Students,
        SectionKind::Courses,
        SectionKind::Instructors,
        SectionKind::Relationships,
        SectionKind::CourseInstructors,
    ];

    pub fn container_id(self) -> &'static str {
        match self {
            SectionKind::Students => "students-list",
            SectionKind::Courses => "courses-list",
            SectionKind::Instructors => "instructors-list",
            SectionKind::Relationships => "relationships-list",
            SectionKind::CourseInstructors => "course-instructor-list",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Students => "Students",
            SectionKind::Courses => "Courses",
            SectionKind::Instructors => "Instructors",
            SectionKind::Relationships => "Student → Course",
            SectionKind::CourseInstructors => "Course → Instructor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub class: &'static str,
    pub text: String,
}

impl Span {
    fn new(class: &'static str, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub test_id: String,
    pub class: &'static str,
    pub bullet: Span,
    pub spans: Vec<Span>,
}

impl Row {
    fn item(test_id: String, text: String) -> Self {
        Self {
            test_id,
            class: "item-row",
            bullet: Span::new("item-bullet", ITEM_BULLET),
            spans: vec![Span::new("item-text", text)],
        }
    }

    fn relationship(test_id: String, text: String) -> Self {
        Self {
            test_id,
            class: "item-row relationship-item",
            bullet: Span::new("item-bullet relationship-arrow", RELATIONSHIP_ARROW),
            spans: vec![Span::new("item-text", text)],
        }
    }

    /// Visible text of the row without its bullet.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub loading_visible: bool,
    pub error_visible: bool,
    pub error_text: String,
    pub output_visible: bool,
    pub footer_visible: bool,
    sections: Vec<Section>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            loading_visible: true,
            error_visible: false,
            error_text: String::new(),
            output_visible: false,
            footer_visible: false,
            sections: SectionKind::ALL
                .iter()
                .map(|&kind| Section {
                    kind,
                    rows: Vec::new(),
                })
                .collect(),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, kind: SectionKind) -> &Section {
        &self.sections[kind as usize]
    }

    fn replace_rows(&mut self, kind: SectionKind, rows: Vec<Row>) {
        self.sections[kind as usize].rows = rows;
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    pub fn find_row(&self, test_id: &str) -> Option<&Row> {
        self.rows().find(|row| row.test_id == test_id)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n<title>Student Roster</title>\n");
        out.push_str("</head>\n<body>\n");

        let _ = writeln!(
            out,
            "<div id=\"loading-spinner\" style=\"{}\">{LOADING_TEXT}</div>",
            display_style(self.loading_visible)
        );
        let _ = writeln!(
            out,
            "<div id=\"error-container\" style=\"{}\"><p id=\"error-text\">{}</p></div>",
            display_style(self.error_visible),
            escape_html(&self.error_text)
        );

        let _ = writeln!(
            out,
            "<div id=\"output\" style=\"{}\">",
            display_style(self.output_visible)
        );
        for section in &self.sections {
            let _ = writeln!(
                out,
                "<section>\n<h2>{}</h2>\n<div id=\"{}\">",
                escape_html(section.kind.heading()),
                section.kind.container_id()
            );
            for row in &section.rows {
                write_row_html(&mut out, row);
            }
            out.push_str("</div>\n</section>\n");
        }
        out.push_str("</div>\n");

        let _ = writeln!(
            out,
            "<div class=\"footer\" style=\"{}\">{}</div>",
            display_style(self.footer_visible),
            escape_html(FOOTER_TEXT)
        );
        out.push_str("</body>\n</html>\n");
        out
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if self.loading_visible {
            let _ = writeln!(out, "{LOADING_TEXT}");
        }
        if self.error_visible {
            let _ = writeln!(out, "Error: {}", self.error_text);
        }
        if self.output_visible {
            for section in &self.sections {
                let _ = writeln!(out, "\n{}", section.kind.heading());
                for row in &section.rows {
                    let _ = writeln!(out, "  {} {}", row.bullet.text, row.text());
                }
            }
        }
        if self.footer_visible {
            let _ = writeln!(out, "\n{FOOTER_TEXT}");
        }
        out
    }
}

fn display_style(visible: bool) -> &'static str {
    if visible {
        "display:block"
    } else {
        "display:none"
    }
}

fn write_row_html(out: &mut String, row: &Row) {
    let _ = write!(
        out,
        "<div class=\"{}\" data-testid=\"{}\"><span class=\"{}\">{}</span>",
        row.class,
        escape_html(&row.test_id),
        row.bullet.class,
        escape_html(&row.bullet.text)
    );
    for span in &row.spans {
        let _ = write!(
            out,
            "<span class=\"{}\">{}</span>",
            span.class,
            escape_html(&span.text)
        );
    }
    out.push_str("</div>\n");
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn render(state: &ViewState<'_>, document: &mut Document) {
    if state.loading {
        document.loading_visible = true;
        document.error_visible = false;
        document.output_visible = false;
        document.footer_visible = false;
        return;
    }

    document.loading_visible = false;

    if let Some(error) = state.error {
        document.error_visible = true;
        document.output_visible = false;
        document.footer_visible = false;
        document.error_text = error.to_string();
        return;
    }

    document.error_visible = false;
    document.output_visible = true;
    document.footer_visible = true;

    render_students(state, document);
    render_courses(state, document);
    render_instructors(state, document);
    render_student_course_relationships(state, document);
    render_course_instructor_relationships(state, document);
}

/// Renders the settled error state for failures that happen outside a load cycle.
pub fn render_error(message: &str, document: &mut Document) {
    let state = ViewState {
        loading: false,
        error: Some(message),
        students: &[],
        instructors: &[],
        courses: &[],
    };
    render(&state, document);
}

fn render_students(state: &ViewState<'_>, document: &mut Document) {
    let rows = state
        .students
        .iter()
        .map(|student| {
            Row::item(
                format!("text-student-{}", student.id()),
                student.display_string(),
            )
        })
        .collect();
    document.replace_rows(SectionKind::Students, rows);
}

fn render_courses(state: &ViewState<'_>, document: &mut Document) {
    let rows = state
        .courses
        .iter()
        .enumerate()
        .map(|(index, course)| Row {
            test_id: format!("text-course-{index}"),
            class: "item-row course-item",
            bullet: Span::new("item-bullet", ITEM_BULLET),
            spans: vec![
                Span::new("course-name", format!("{}:", course.name)),
                Span::new("course-description", course.description.clone()),
            ],
        })
        .collect();
    document.replace_rows(SectionKind::Courses, rows);
}

fn render_instructors(state: &ViewState<'_>, document: &mut Document) {
    let rows = state
        .instructors
        .iter()
        .map(|instructor| {
            Row::item(
                format!("text-instructor-{}", instructor.id()),
                instructor.display_string(),
            )
        })
        .collect();
    document.replace_rows(SectionKind::Instructors, rows);
}

fn render_student_course_relationships(state: &ViewState<'_>, document: &mut Document) {
    // Later courses with a duplicate name win.
    let descriptions: HashMap<&str, &str> = state
        .courses
        .iter()
        .map(|course| (course.name.as_str(), course.description.as_str()))
        .collect();

    let rows = state
        .students
        .iter()
        .map(|student| {
            let description = descriptions.get(student.course()).copied().unwrap_or("");
            Row::relationship(
                format!("text-relationship-{}", student.id()),
                student.course_relationship(description),
            )
        })
        .collect();
    document.replace_rows(SectionKind::Relationships, rows);
}

fn render_course_instructor_relationships(state: &ViewState<'_>, document: &mut Document) {
    let rows = state
        .courses
        .iter()
        .enumerate()
        .map(|(index, course)| {
            let instructor_name = state
                .instructors
                .iter()
                .find(|instructor| instructor.teaches_course(&course.name))
                .map(|instructor| instructor.name())
                .unwrap_or("");
            Row::relationship(
                format!("text-course-instructor-{index}"),
                format!("{} → Taught by {instructor_name}", course.name),
            )
        })
        .collect();
    document.replace_rows(SectionKind::CourseInstructors, rows);
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
