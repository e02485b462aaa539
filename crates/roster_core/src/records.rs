use shared::{
    domain::{Age, InstructorId, StudentId},
    protocol::{RawInstructor, RawStudent},
};

const AGE_MARKER_THRESHOLD: f64 = 21.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    age: Age,
    course: String,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>, age: u32, course: impl Into<String>) -> Self {
        Self::with_age(id, name, Age::years(age), course)
    }

    pub fn with_age(
        id: StudentId,
        name: impl Into<String>,
        age: Age,
        course: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            course: course.into(),
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> &Age {
        &self.age
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    /// Ages without a numeric reading are never over 21.
    pub fn is_over_21(&self) -> bool {
        self.age
            .as_f64()
            .is_some_and(|age| age > AGE_MARKER_THRESHOLD)
    }

    /// `"{name} ({age}) - {course}"` with the age printed as received,
    /// suffixed with `" *"` for students over 21.
    pub fn display_string(&self) -> String {
        let marker = if self.is_over_21() { " *" } else { "" };
        format!("{} ({}) - {}{marker}", self.name, self.age, self.course)
    }

    pub fn course_relationship(&self, description: &str) -> String {
        format!("{} → {} → {description}", self.name, self.course)
    }
}

impl From<&RawStudent> for Student {
    fn from(raw: &RawStudent) -> Self {
        Self::with_age(
            raw.id.clone(),
            raw.name.clone(),
            raw.age.clone(),
            raw.course.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    id: InstructorId,
    name: String,
    subjects: String,
    courses: Vec<String>,
}

impl Instructor {
    pub fn new(
        id: InstructorId,
        name: impl Into<String>,
        subjects: impl Into<String>,
        courses: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            subjects: subjects.into(),
            courses,
        }
    }

    pub fn id(&self) -> &InstructorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subjects(&self) -> &str {
        &self.subjects
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn display_string(&self) -> String {
        format!("{} - {}", self.name, self.subjects)
    }

    /// Exact, case-sensitive match against the taught course names.
    pub fn teaches_course(&self, course_name: &str) -> bool {
        self.courses.iter().any(|course| course == course_name)
    }

    pub fn course_relationships(&self) -> impl Iterator<Item = String> + '_ {
        self.courses
            .iter()
            .map(move |course| format!("{course} → Taught by {}", self.name))
    }
}

impl From<&RawInstructor> for Instructor {
    fn from(raw: &RawInstructor) -> Self {
        Self::new(
            raw.id.clone(),
            raw.name.clone(),
            raw.subjects.clone(),
            raw.courses.clone(),
        )
    }
}

#[cfg(test)]
#[path = "tests/records_tests.rs"]
mod tests;
