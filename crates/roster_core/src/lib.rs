//! Roster loading and rendering: typed records, the data service that fetches
//! and converts the roster document, the application controller, and the view
//! renderer that projects controller state into a [`Document`].

pub mod controller;
pub mod data_service;
pub mod error;
pub mod records;
pub mod render;

pub use controller::{failure_message, App, LoadStatus, ViewState, DEFAULT_FAILURE_MESSAGE};
pub use data_service::{
    audit_references, process_document, DataService, DataServiceConfig, ProcessedData,
    ReferenceReport, DEFAULT_DOCUMENT_PATH,
};
pub use error::FetchError;
pub use records::{Instructor, Student};
pub use render::{render, render_error, Document, Row, Section, SectionKind, Span};
