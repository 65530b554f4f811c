use async_graphql::MergedObject;
mod submissions;

pub use submissions::SubmissionMutationResult;

#[derive(MergedObject, Default)]
pub struct Mutations(submissions::SubmissionMutation);
