use async_graphql::SimpleObject;
use services::validation::ErrorMap;

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Flattens an error map into a list ordered by field name
pub fn field_errors(errors: ErrorMap) -> Vec<FieldError> {
    errors
        .into_iter()
        .map(|(field, message)| FieldError { field, message })
        .collect()
}
