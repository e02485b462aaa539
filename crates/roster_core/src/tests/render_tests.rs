use super::*;
use crate::records::{Instructor, Student};
use shared::domain::{Course, InstructorId, StudentId};

struct Fixture {
    students: Vec<Student>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
}

impl Fixture {
    fn roster() -> Self {
        Self {
            students: vec![
                Student::new(StudentId::new("1"), "Alice", 22, "CS101"),
                Student::new(StudentId::new("2"), "Bob", 20, "PHYS999"),
            ],
            instructors: vec![
                Instructor::new(
                    InstructorId::new("5"),
                    "Dr. First",
                    "Programming",
                    vec!["MATH201".to_string(), "CS101".to_string()],
                ),
                Instructor::new(
                    InstructorId::new("6"),
                    "Dr. Second",
                    "Programming",
                    vec!["CS101".to_string()],
                ),
            ],
            courses: vec![
                Course::new("CS101", "Intro"),
                Course::new("MATH201", "Algebra"),
                Course::new("ART100", "Drawing"),
            ],
        }
    }

    fn ready(&self) -> ViewState<'_> {
        ViewState {
            loading: false,
            error: None,
            students: &self.students,
            instructors: &self.instructors,
            courses: &self.courses,
        }
    }
}

fn texts(document: &Document, kind: SectionKind) -> Vec<String> {
    document.section(kind).rows.iter().map(Row::text).collect()
}

fn test_ids(document: &Document, kind: SectionKind) -> Vec<&str> {
    document
        .section(kind)
        .rows
        .iter()
        .map(|row| row.test_id.as_str())
        .collect()
}

#[test]
fn ready_state_populates_all_five_sections() {
    let fixture = Fixture::roster();
    let mut document = Document::new();

    render(&fixture.ready(), &mut document);

    assert!(document.output_visible && document.footer_visible);
    assert!(!document.loading_visible && !document.error_visible);
    assert_eq!(
        texts(&document, SectionKind::Students),
        vec!["Alice (22) - CS101 *", "Bob (20) - PHYS999"]
    );
    assert_eq!(
        test_ids(&document, SectionKind::Students),
        vec!["text-student-1", "text-student-2"]
    );
    assert_eq!(
        texts(&document, SectionKind::Courses),
        vec!["CS101: Intro", "MATH201: Algebra", "ART100: Drawing"]
    );
    assert_eq!(
        test_ids(&document, SectionKind::Courses),
        vec!["text-course-0", "text-course-1", "text-course-2"]
    );
    assert_eq!(
        test_ids(&document, SectionKind::Instructors),
        vec!["text-instructor-5", "text-instructor-6"]
    );
    assert_eq!(
        test_ids(&document, SectionKind::Relationships),
        vec!["text-relationship-1", "text-relationship-2"]
    );
    assert_eq!(
        test_ids(&document, SectionKind::CourseInstructors),
        vec![
            "text-course-instructor-0",
            "text-course-instructor-1",
            "text-course-instructor-2"
        ]
    );
    assert_eq!(document.rows().count(), 2 + 2 + 3 + 2 + 3);
}

#[test]
fn unmatched_student_course_gets_empty_description() {
    let fixture = Fixture::roster();
    let mut document = Document::new();

    render(&fixture.ready(), &mut document);

    assert_eq!(
        texts(&document, SectionKind::Relationships),
        vec!["Alice → CS101 → Intro", "Bob → PHYS999 → "]
    );
}

#[test]
fn first_instructor_in_input_order_wins_each_course() {
    let fixture = Fixture::roster();
    let mut document = Document::new();

    render(&fixture.ready(), &mut document);

    assert_eq!(
        texts(&document, SectionKind::CourseInstructors),
        vec![
            "CS101 → Taught by Dr. First",
            "MATH201 → Taught by Dr. First",
            "ART100 → Taught by ",
        ]
    );
}

#[test]
fn relationship_rows_use_the_arrow_bullet() {
    let fixture = Fixture::roster();
    let mut document = Document::new();

    render(&fixture.ready(), &mut document);

    let row = document.find_row("text-relationship-1").expect("row");
    assert_eq!(row.bullet.text, "→");
    assert_eq!(row.class, "item-row relationship-item");
    let student_row = document.find_row("text-student-1").expect("row");
    assert_eq!(student_row.bullet.text, "•");
}

#[test]
fn loading_state_shows_only_the_indicator() {
    let fixture = Fixture::roster();
    let mut document = Document::new();
    let state = ViewState {
        loading: true,
        ..fixture.ready()
    };

    render(&state, &mut document);

    assert!(document.loading_visible);
    assert!(!document.error_visible);
    assert!(!document.output_visible);
    assert!(!document.footer_visible);
    assert_eq!(document.rows().count(), 0);
}

#[test]
fn error_state_hides_output_and_shows_message() {
    let mut document = Document::new();
    let state = ViewState {
        loading: false,
        error: Some("HTTP error! status: 500"),
        students: &[],
        instructors: &[],
        courses: &[],
    };

    render(&state, &mut document);

    assert!(!document.loading_visible);
    assert!(document.error_visible);
    assert_eq!(document.error_text, "HTTP error! status: 500");
    assert!(!document.output_visible);
    assert!(!document.footer_visible);
}

#[test]
fn rerender_rebuilds_sections_instead_of_appending() {
    let fixture = Fixture::roster();
    let mut document = Document::new();

    render(&fixture.ready(), &mut document);
    render(&fixture.ready(), &mut document);

    assert_eq!(document.rows().count(), 12);

    let empty = ViewState {
        loading: false,
        error: None,
        students: &[],
        instructors: &[],
        courses: &[],
    };
    render(&empty, &mut document);
    assert_eq!(document.rows().count(), 0);
}

#[test]
fn html_carries_regions_test_ids_and_escaped_text() {
    let students = vec![Student::new(StudentId::new("9"), "<script>", 30, "A&B")];
    let state = ViewState {
        loading: false,
        error: None,
        students: &students,
        instructors: &[],
        courses: &[],
    };
    let mut document = Document::new();
    render(&state, &mut document);

    let html = document.to_html();

    assert!(html.contains("id=\"loading-spinner\" style=\"display:none\""));
    assert!(html.contains("id=\"error-container\" style=\"display:none\""));
    assert!(html.contains("id=\"output\" style=\"display:block\""));
    assert!(html.contains("class=\"footer\" style=\"display:block\""));
    for kind in SectionKind::ALL {
        assert!(html.contains(&format!("id=\"{}\"", kind.container_id())));
    }
    assert!(html.contains("data-testid=\"text-student-9\""));
    assert!(html.contains("&lt;script&gt; (30) - A&amp;B *"));
    assert!(!html.contains("<script>"));
}

#[test]
fn string_ids_and_fractional_ages_render_as_received() {
    let students = vec![Student::with_age(
        StudentId::new("s1"),
        "Ana",
        serde_json::from_str("20.5").expect("age"),
        "",
    )];
    let state = ViewState {
        loading: false,
        error: None,
        students: &students,
        instructors: &[],
        courses: &[],
    };
    let mut document = Document::new();

    render(&state, &mut document);

    let row = document.find_row("text-student-s1").expect("student row");
    assert_eq!(row.text(), "Ana (20.5) - ");
    let relationship = document.find_row("text-relationship-s1").expect("relationship row");
    assert_eq!(relationship.text(), "Ana →  → ");
}

#[test]
fn text_rendering_follows_visibility() {
    let mut document = Document::new();
    assert_eq!(document.to_text(), "Loading student data...\n");

    let state = ViewState {
        loading: false,
        error: Some("boom"),
        students: &[],
        instructors: &[],
        courses: &[],
    };
    render(&state, &mut document);
    assert_eq!(document.to_text(), "Error: boom\n");

    let fixture = Fixture::roster();
    render(&fixture.ready(), &mut document);
    let text = document.to_text();
    assert!(text.contains("\nStudents\n  • Alice (22) - CS101 *\n"));
    assert!(text.contains("  → CS101 → Taught by Dr. First\n"));
    assert!(!text.contains("Error"));
}

#[test]
fn render_error_settles_a_fresh_document_into_the_error_state() {
    let mut document = Document::new();

    render_error("invalid document url: relative URL without a base", &mut document);

    assert!(!document.loading_visible);
    assert!(document.error_visible);
    assert!(!document.output_visible);
    assert_eq!(
        document.error_text,
        "invalid document url: relative URL without a base"
    );
}
