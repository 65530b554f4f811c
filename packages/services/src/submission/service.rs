use super::transport::{FormTransport, HttpTransport, TransportError};
use crate::form::FormRecord;
use crate::validation::{classify_tax_id, validate_form, ErrorMap, ErrorMapExt, RulePolicy, TaxIdKind};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/requisitos";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Acknowledgement for a form the endpoint accepted
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub status: u16,
    pub tax_id_kind: Option<TaxIdKind>,
}

#[derive(Debug)]
pub enum SubmissionError {
    /// The form failed validation and was not sent
    Invalid(ErrorMap),
    /// The endpoint answered with a non-2xx status
    Rejected { status: u16 },
    Transport(TransportError),
    Encoding(String),
}

impl From<TransportError> for SubmissionError {
    fn from(e: TransportError) -> Self {
        SubmissionError::Transport(e)
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(e: serde_json::Error) -> Self {
        SubmissionError::Encoding(e.to_string())
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Invalid(errors) => write!(f, "{}", errors.to_message()),
            SubmissionError::Rejected { status } => {
                write!(f, "Submission rejected by endpoint with status {}", status)
            }
            SubmissionError::Transport(e) => write!(f, "Failed to reach submission endpoint: {}", e),
            SubmissionError::Encoding(message) => write!(f, "Failed to encode form: {}", message),
        }
    }
}

/// Validates forms and forwards the accepted ones to the intake endpoint
#[derive(Clone)]
pub struct SubmissionService {
    endpoint: String,
    policy: RulePolicy,
    transport: Arc<dyn FormTransport>,
}

impl SubmissionService {
    pub fn new(
        endpoint: impl Into<String>,
        policy: RulePolicy,
        transport: Arc<dyn FormTransport>,
    ) -> Self {
        SubmissionService {
            endpoint: endpoint.into(),
            policy,
            transport,
        }
    }

    pub fn from_env() -> Result<Self, TransportError> {
        let endpoint =
            std::env::var("INTAKE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let timeout_secs = std::env::var("INTAKE_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let policy = RulePolicy::from_env();

        let transport = HttpTransport::new(Duration::from_secs(timeout_secs))?;

        Ok(SubmissionService::new(endpoint, policy, Arc::new(transport)))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn policy(&self) -> &RulePolicy {
        &self.policy
    }

    pub fn validate(&self, form: &FormRecord) -> ErrorMap {
        validate_form(form, &self.policy)
    }

    /// Validates `form` and, when it passes, POSTs it as JSON to the endpoint.
    ///
    /// Nothing is sent for an invalid form. There is no retry: any non-2xx
    /// status or transport failure is returned to the caller.
    pub async fn submit(&self, form: &FormRecord) -> Result<SubmissionReceipt, SubmissionError> {
        let errors = self.validate(form);
        if !errors.is_empty() {
            tracing::debug!(failed_fields = errors.len(), "form rejected by validation");
            return Err(SubmissionError::Invalid(errors));
        }

        let id = Uuid::new_v4();
        let body = serde_json::to_value(form)?;

        let status = match self.transport.post_json(self.endpoint.clone(), body).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(submission_id = %id, error = %e, "form submission failed");
                return Err(e.into());
            }
        };

        if !(200..300).contains(&status) {
            tracing::warn!(submission_id = %id, status, "form submission rejected");
            return Err(SubmissionError::Rejected { status });
        }

        let tax_id_kind = classify_tax_id(&form.cnpj);
        tracing::info!(
            submission_id = %id,
            status,
            tax_id_kind = ?tax_id_kind,
            "form submitted"
        );

        Ok(SubmissionReceipt {
            id,
            submitted_at: Utc::now(),
            status,
            tax_id_kind,
        })
    }
}
