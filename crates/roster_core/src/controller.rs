use std::{fmt::Display, sync::Arc};

use shared::domain::Course;
use tracing::{error, info, warn};

use crate::{
    data_service::{audit_references, DataService},
    error::FetchError,
    records::{Instructor, Student},
    render::{render, Document},
};

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to load data";

/// Lifecycle of the single load cycle. `Failed` and `Ready` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Failed(String),
    Ready,
}

/// Borrowed snapshot of controller state handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub students: &'a [Student],
    pub instructors: &'a [Instructor],
    pub courses: &'a [Course],
}

pub struct App {
    data_service: Arc<DataService>,
    status: LoadStatus,
    students: Vec<Student>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
}

impl App {
    pub fn new(data_service: Arc<DataService>) -> Self {
        Self {
            data_service,
            status: LoadStatus::Loading,
            students: Vec::new(),
            instructors: Vec::new(),
            courses: Vec::new(),
        }
    }

    /// Runs the load sequence once and renders the outcome into `document`.
    pub async fn init(&mut self, document: &mut Document) {
        if self.status != LoadStatus::Loading {
            warn!(status = ?self.status, "load cycle already settled; rendering current state");
            self.render(document);
            return;
        }

        info!("application started, loading student data");

        if let Err(err) = self.load_data().await {
            error!(error = %err, "error loading data");
            self.status = LoadStatus::Failed(failure_message(&err));
        }

        self.render(document);
    }

    pub async fn load_data(&mut self) -> Result<(), FetchError> {
        info!("demonstration: chained futures");
        let chained = self.data_service.fetch_with_chaining().await?;
        info!(
            students = chained.students.len(),
            "chained retrieval finished; result is for demonstration only"
        );

        info!("demonstration: async/await");
        let raw = self.data_service.fetch_with_suspension().await?;

        let processed = self.data_service.process_data(&raw);
        audit_references(&processed).log();

        info!(
            students = ?processed.students.iter().map(Student::display_string).collect::<Vec<_>>(),
            instructors = ?processed.instructors.iter().map(Instructor::display_string).collect::<Vec<_>>(),
            courses = ?processed.courses.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            "final processed data"
        );

        self.students = processed.students;
        self.instructors = processed.instructors;
        self.courses = processed.courses;
        self.status = LoadStatus::Ready;

        info!("data loading complete");
        Ok(())
    }

    pub fn render(&self, document: &mut Document) {
        render(&self.view_state(), document);
    }

    pub fn view_state(&self) -> ViewState<'_> {
        ViewState {
            loading: self.is_loading(),
            error: self.error(),
            students: &self.students,
            instructors: &self.instructors,
            courses: &self.courses,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

pub fn failure_message(err: &impl Display) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        DEFAULT_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
