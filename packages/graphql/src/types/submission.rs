use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(SimpleObject)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub status: i32,
    /// "CPF" or "CNPJ"
    pub tax_id_kind: Option<String>,
}

impl From<services::submission::SubmissionReceipt> for SubmissionReceipt {
    fn from(receipt: services::submission::SubmissionReceipt) -> Self {
        SubmissionReceipt {
            id: receipt.id,
            submitted_at: receipt.submitted_at,
            status: i32::from(receipt.status),
            tax_id_kind: receipt.tax_id_kind.map(|kind| kind.to_string()),
        }
    }
}
