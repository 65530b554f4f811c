use crate::types::field_error::{field_errors, FieldError};
use crate::types::project_form::ProjectFormInput;
use async_graphql::{Context, Object};
use services::form::FormRecord;
use services::submission::SubmissionService;
use services::validation::{self, RulePolicy};

#[derive(Default)]
pub struct ValidationQueries;

// The service's policy when one is configured, otherwise the default one
fn active_policy(ctx: &Context<'_>) -> RulePolicy {
    ctx.data::<SubmissionService>()
        .map(|service| service.policy().clone())
        .unwrap_or_default()
}

#[Object]
impl ValidationQueries {
    async fn validate_cpf(&self, value: String) -> bool {
        validation::validate_cpf(&value)
    }

    async fn validate_cnpj(&self, value: String) -> bool {
        validation::validate_cnpj(&value)
    }

    async fn validate_email(&self, value: String) -> bool {
        validation::validate_email(&value)
    }

    async fn validate_phone(&self, value: String) -> bool {
        validation::validate_phone(&value)
    }

    /// Field errors for the form under the active rules; empty when it can be submitted
    async fn validate_form(&self, ctx: &Context<'_>, input: ProjectFormInput) -> Vec<FieldError> {
        let record = FormRecord::from(input);
        let errors = validation::validate_form(&record, &active_policy(ctx));
        tracing::debug!(failed_fields = errors.len(), "form validated");
        field_errors(errors)
    }

    /// Field names whose rules are currently enforced
    async fn active_rules(&self, ctx: &Context<'_>) -> Vec<String> {
        active_policy(ctx)
            .rules()
            .map(|rule| rule.field().to_string())
            .collect()
    }
}
