use async_graphql::{EmptySubscription, Schema};
use futures::future::BoxFuture;
use serde_json::Value;
use services::submission::{FormTransport, SubmissionService, TransportError};
use services::validation::RulePolicy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::mutations::Mutations;
use crate::queries::Queries;

pub type TestSchema = Schema<Queries, Mutations, EmptySubscription>;

/// Answers every POST with the same status and counts the calls
#[derive(Clone)]
pub struct StaticTransport {
    status: u16,
    calls: Arc<AtomicUsize>,
}

impl StaticTransport {
    pub fn with_status(status: u16) -> Self {
        StaticTransport {
            status,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FormTransport for StaticTransport {
    fn post_json(&self, _url: String, _body: Value) -> BoxFuture<'static, Result<u16, TransportError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let status = self.status;
        Box::pin(async move { Ok(status) })
    }
}

pub fn create_test_schema(transport: StaticTransport) -> TestSchema {
    let service = SubmissionService::new(
        "https://intake.test/requisitos",
        RulePolicy::default(),
        Arc::new(transport),
    );
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(service)
        .finish()
}

/// GraphQL input literal passing every default rule
pub fn valid_form_input() -> String {
    r#"{
        nome: "Ateliê Aurora",
        cnpj: "11.222.333/0001-81",
        responsavel: "Marina Souza",
        email: "contato@atelieaurora.com.br",
        telefone: "(11) 91234-5678",
        objetivo: "Vender peças artesanais online",
        produtos: "Cerâmicas e luminárias",
        estilo: "Minimalista",
        dispositivos: { celular: true }
    }"#
    .to_string()
}
