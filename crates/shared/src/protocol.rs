//! Wire shape of the roster data document.
//!
//! Records are never rejected for their field values: missing or `null`
//! fields take their empty value, text fields accept any scalar, and ids and
//! ages keep whatever the document carried.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{lenient_text, text_of, Age, Course, InstructorId, StudentId};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(text_of).collect(),
        other => vec![text_of(other)],
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStudent {
    #[serde(default)]
    pub id: StudentId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default)]
    pub age: Age,
    #[serde(default, deserialize_with = "lenient_text")]
    pub course: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInstructor {
    #[serde(default)]
    pub id: InstructorId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subjects: String,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<RawStudent>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructors: Vec<RawInstructor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<Course>,
}

impl RawDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
