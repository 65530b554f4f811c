use crate::types::field_error::{field_errors, FieldError};
use async_graphql::SimpleObject;
use services::submission::SubmissionError;
use services::validation::{ErrorMap, ErrorMapExt};
use std::fmt;

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl From<ErrorMap> for ValidationErrorType {
    fn from(errors: ErrorMap) -> Self {
        ValidationErrorType {
            message: errors.to_message(),
            errors: field_errors(errors),
        }
    }
}

impl fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct SubmissionErrorType {
    pub message: String,
    /// HTTP status returned by the endpoint, when it answered at all
    pub status: Option<i32>,
}

impl From<SubmissionError> for SubmissionErrorType {
    fn from(e: SubmissionError) -> Self {
        let status = match &e {
            SubmissionError::Rejected { status } => Some(i32::from(*status)),
            _ => None,
        };
        SubmissionErrorType {
            message: e.to_string(),
            status,
        }
    }
}

impl fmt::Display for SubmissionErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}
