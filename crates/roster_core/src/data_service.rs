use std::{
    collections::HashSet,
    future::Future,
    sync::{Arc, OnceLock},
};

use futures::{future, TryFutureExt};
use reqwest::{Client, Response};
use shared::{
    domain::{Course, InstructorId, StudentId},
    protocol::RawDocument,
};
use tracing::{error, info, warn};
use url::Url;

use crate::{
    error::FetchError,
    records::{Instructor, Student},
};

pub const DEFAULT_DOCUMENT_PATH: &str = "./data/students.json";

static GLOBAL_SERVICE: OnceLock<Arc<DataService>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataServiceConfig {
    pub base_url: String,
    /// Resolved against `base_url` the way a relative link is.
    pub document_path: String,
}

impl DataServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            document_path: DEFAULT_DOCUMENT_PATH.to_string(),
        }
    }

    pub fn with_document_path(mut self, document_path: impl Into<String>) -> Self {
        self.document_path = document_path.into();
        self
    }

    pub fn document_url(&self) -> Result<Url, FetchError> {
        let base = Url::parse(self.base_url.trim())?;
        Ok(base.join(self.document_path.trim())?)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedData {
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    pub courses: Vec<Course>,
}

/// Retrieves the roster document over HTTP and turns it into typed records.
#[derive(Debug, Clone)]
pub struct DataService {
    http: Client,
    document_url: Url,
}

impl DataService {
    pub fn new(config: &DataServiceConfig) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: &DataServiceConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http,
            document_url: config.document_url()?,
        })
    }

    /// Process-wide instance. The first successful call fixes the
    /// configuration; later configs are ignored.
    pub fn global(config: &DataServiceConfig) -> Result<Arc<Self>, FetchError> {
        if let Some(existing) = GLOBAL_SERVICE.get() {
            return Ok(Arc::clone(existing));
        }
        let service = Arc::new(Self::new(config)?);
        Ok(Arc::clone(GLOBAL_SERVICE.get_or_init(|| service)))
    }

    pub fn document_url(&self) -> &Url {
        &self.document_url
    }

    /// Retrieval expressed as a chain of future combinators.
    pub fn fetch_with_chaining(
        &self,
    ) -> impl Future<Output = Result<RawDocument, FetchError>> + '_ {
        info!(url = %self.document_url, "fetching data using chained futures");

        self.http
            .get(self.document_url.clone())
            .send()
            .map_err(FetchError::from)
            .and_then(|response| {
                info!(
                    status = response.status().as_u16(),
                    "chained: response received"
                );
                future::ready(check_status(response))
            })
            .and_then(|response| response.bytes().map_err(FetchError::from))
            .and_then(|body| future::ready(parse_document(&body)))
            .inspect_ok(|document| log_parsed("chained", document))
            .inspect_err(|err| error!(error = %err, "chained: error fetching data"))
    }

    /// Retrieval expressed as one linear async sequence.
    pub async fn fetch_with_suspension(&self) -> Result<RawDocument, FetchError> {
        info!(url = %self.document_url, "fetching data using async/await");

        match self.fetch_document().await {
            Ok(document) => {
                log_parsed("async", &document);
                Ok(document)
            }
            Err(err) => {
                error!(error = %err, "async: error fetching data");
                Err(err)
            }
        }
    }

    async fn fetch_document(&self) -> Result<RawDocument, FetchError> {
        let response = self.http.get(self.document_url.clone()).send().await?;
        info!(
            status = response.status().as_u16(),
            "async: response received"
        );
        let response = check_status(response)?;
        let body = response.bytes().await?;
        parse_document(&body)
    }

    pub fn process_data(&self, raw: &RawDocument) -> ProcessedData {
        process_document(raw)
    }
}

/// Builds one record per raw entry; courses pass through untouched.
pub fn process_document(raw: &RawDocument) -> ProcessedData {
    info!("processing raw data into typed records");

    let students: Vec<Student> = raw.students.iter().map(Student::from).collect();
    let instructors: Vec<Instructor> = raw.instructors.iter().map(Instructor::from).collect();
    let courses = raw.courses.clone();

    info!(
        students = students.len(),
        instructors = instructors.len(),
        courses = courses.len(),
        "created typed records"
    );

    ProcessedData {
        students,
        instructors,
        courses,
    }
}

fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

fn parse_document(body: &[u8]) -> Result<RawDocument, FetchError> {
    Ok(RawDocument::from_slice(body)?)
}

fn log_parsed(style: &str, document: &RawDocument) {
    info!(
        style,
        students = document.students.len(),
        instructors = document.instructors.len(),
        courses = document.courses.len(),
        "data parsed successfully"
    );
}

/// Course names referenced by students or instructors that no course defines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceReport {
    pub dangling_student_courses: Vec<(StudentId, String)>,
    pub dangling_instructor_courses: Vec<(InstructorId, String)>,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_student_courses.is_empty() && self.dangling_instructor_courses.is_empty()
    }

    pub fn log(&self) {
        for (student_id, course) in &self.dangling_student_courses {
            warn!(%student_id, %course, "student references unknown course");
        }
        for (instructor_id, course) in &self.dangling_instructor_courses {
            warn!(%instructor_id, %course, "instructor references unknown course");
        }
    }
}

pub fn audit_references(data: &ProcessedData) -> ReferenceReport {
    let known: HashSet<&str> = data.courses.iter().map(|c| c.name.as_str()).collect();

    let dangling_student_courses = data
        .students
        .iter()
        .filter(|student| !known.contains(student.course()))
        .map(|student| (student.id().clone(), student.course().to_string()))
        .collect();

    let dangling_instructor_courses = data
        .instructors
        .iter()
        .flat_map(|instructor| {
            instructor
                .courses()
                .iter()
                .filter(|course| !known.contains(course.as_str()))
                .map(move |course| (instructor.id().clone(), course.clone()))
        })
        .collect();

    ReferenceReport {
        dangling_student_courses,
        dangling_instructor_courses,
    }
}

#[cfg(test)]
#[path = "tests/data_service_tests.rs"]
mod tests;
