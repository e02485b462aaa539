use super::*;

fn student(age: u32) -> Student {
    Student::new(StudentId::new("1"), "Alice Johnson", age, "CS101")
}

fn instructor() -> Instructor {
    Instructor::new(
        InstructorId::new("7"),
        "Dr. Smith",
        "Computer Science, Algorithms",
        vec!["CS101".to_string(), "CS201".to_string()],
    )
}

#[test]
fn over_21_is_strictly_greater_than() {
    assert!(!student(0).is_over_21());
    assert!(!student(21).is_over_21());
    assert!(student(22).is_over_21());
    assert!(student(80).is_over_21());
}

#[test]
fn display_string_marks_students_over_21() {
    assert_eq!(student(22).display_string(), "Alice Johnson (22) - CS101 *");
    assert!(student(22).display_string().ends_with(" *"));
    assert_eq!(student(21).display_string(), "Alice Johnson (21) - CS101");
    assert!(!student(21).display_string().ends_with(" *"));
}

#[test]
fn course_relationship_chains_name_course_and_description() {
    assert_eq!(
        student(20).course_relationship("Intro"),
        "Alice Johnson → CS101 → Intro"
    );
    assert_eq!(student(20).course_relationship(""), "Alice Johnson → CS101 → ");
}

#[test]
fn student_from_raw_copies_every_field() {
    let raw = RawStudent {
        id: StudentId::new("3"),
        name: "Bob".to_string(),
        age: Age::years(19),
        course: "MATH201".to_string(),
    };
    let student = Student::from(&raw);
    assert_eq!(student.id(), &StudentId::new("3"));
    assert_eq!(student.name(), "Bob");
    assert_eq!(student.age().as_f64(), Some(19.0));
    assert_eq!(student.course(), "MATH201");
}

#[test]
fn students_with_odd_field_values_still_display() {
    let doc = shared::protocol::RawDocument::from_slice(
        br#"{"students":[
            {"id":"s1","name":"Ana","age":20.5,"course":null},
            {"id":2,"name":"Ben","age":21.5,"course":"CS101"},
            {"id":3,"name":"Cy","age":"old","course":"CS101"},
            {"id":4,"name":"Di","course":"CS101"}
        ]}"#,
    )
    .expect("odd values load");
    let students: Vec<Student> = doc.students.iter().map(Student::from).collect();

    assert_eq!(students[0].id().as_str(), "s1");
    assert!(!students[0].is_over_21());
    assert_eq!(students[0].display_string(), "Ana (20.5) - ");
    assert_eq!(students[0].course_relationship(""), "Ana →  → ");

    assert!(students[1].is_over_21());
    assert_eq!(students[1].display_string(), "Ben (21.5) - CS101 *");

    assert!(!students[2].is_over_21());
    assert_eq!(students[2].display_string(), "Cy (old) - CS101");

    assert!(!students[3].is_over_21());
    assert_eq!(students[3].display_string(), "Di () - CS101");
}

#[test]
fn instructor_display_string_lists_subjects() {
    assert_eq!(
        instructor().display_string(),
        "Dr. Smith - Computer Science, Algorithms"
    );
}

#[test]
fn teaches_course_requires_exact_match() {
    let instructor = instructor();
    assert!(instructor.teaches_course("CS101"));
    assert!(instructor.teaches_course("CS201"));
    assert!(!instructor.teaches_course("cs101"));
    assert!(!instructor.teaches_course("CS10"));
    assert!(!instructor.teaches_course("MATH201"));
}

#[test]
fn course_relationships_follow_course_order() {
    let lines: Vec<String> = instructor().course_relationships().collect();
    assert_eq!(
        lines,
        vec!["CS101 → Taught by Dr. Smith", "CS201 → Taught by Dr. Smith"]
    );
}

#[test]
fn instructor_without_courses_has_no_relationships() {
    let instructor = Instructor::new(InstructorId::new("2"), "Ms. Park", "History", Vec::new());
    assert_eq!(instructor.course_relationships().count(), 0);
    assert!(!instructor.teaches_course(""));
}
