pub mod field_error;
pub mod project_form;
pub mod submission;
