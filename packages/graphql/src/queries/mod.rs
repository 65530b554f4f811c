use async_graphql::MergedObject;
mod validation;

#[derive(MergedObject, Default)]
pub struct Queries(validation::ValidationQueries);
