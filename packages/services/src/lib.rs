pub mod form;
pub mod submission;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use form::*;
pub use submission::*;
pub use validation::*;
