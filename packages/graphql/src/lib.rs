pub mod types;
pub mod queries;
pub mod mutations;
pub mod errors;

#[cfg(test)]
pub mod test_helpers;
