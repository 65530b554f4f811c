use crate::errors::{SubmissionErrorType, ValidationErrorType};
use crate::types::project_form::ProjectFormInput;
use crate::types::submission::SubmissionReceipt;
use async_graphql::{Context, Object, Result, Union};
use services::form::FormRecord;
use services::submission::{SubmissionError, SubmissionService};

#[derive(Union)]
pub enum SubmissionMutationResult {
    SubmissionReceipt(SubmissionReceipt),
    ValidationError(ValidationErrorType),
    SubmissionError(SubmissionErrorType),
}

#[derive(Default)]
pub struct SubmissionMutation;

#[Object]
impl SubmissionMutation {
    /// Validates the form and forwards it to the intake endpoint
    async fn submit_form(
        &self,
        ctx: &Context<'_>,
        input: ProjectFormInput,
    ) -> Result<SubmissionMutationResult> {
        let service = ctx.data::<SubmissionService>()?;
        let record = FormRecord::from(input);

        let result = match service.submit(&record).await {
            Ok(receipt) => SubmissionMutationResult::SubmissionReceipt(receipt.into()),
            Err(SubmissionError::Invalid(errors)) => {
                let error = ValidationErrorType::from(errors);
                tracing::debug!(error = %error, "submitForm returned field errors");
                SubmissionMutationResult::ValidationError(error)
            }
            Err(e) => {
                let error = SubmissionErrorType::from(e);
                tracing::warn!(error = %error, status = ?error.status, "submitForm failed");
                SubmissionMutationResult::SubmissionError(error)
            }
        };

        Ok(result)
    }
}
