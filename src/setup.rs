// src/setup.rs

use async_graphql::{EmptySubscription, Schema};
use graphql::mutations::Mutations as MutationRoot;
use graphql::queries::Queries as QueryRoot;
use services::submission::SubmissionService;
use tracing_subscriber::EnvFilter;

pub(super) type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

pub(super) struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub(super) fn from_env() -> Self {
        let host = std::env::var("INTAKE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("INTAKE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        ServerConfig { host, port }
    }
}

/// Installs the global subscriber. `RUST_LOG` filters (default `info`),
/// `INTAKE_LOG_FORMAT=json` switches to JSON lines.
pub(super) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("INTAKE_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

pub(super) fn build_schema(service: SubmissionService) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(service)
        .finish()
}
