mod setup;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use services::submission::SubmissionService;
use setup::{build_schema, init_tracing, AppSchema, ServerConfig};
use tracing_actix_web::TracingLogger;

async fn index() -> &'static str {
    "Hello, intake!"
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(schema: web::Data<AppSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::resource("/graphql")
                .route(web::post().to(graphql_request))
                .route(web::get().to(graphql_playground)),
        );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let service = SubmissionService::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;

    let active_rules: Vec<&str> = service.policy().rules().map(|rule| rule.field()).collect();
    tracing::info!(
        endpoint = service.endpoint(),
        rules = ?active_rules,
        "submission service configured"
    );

    let schema = build_schema(service);

    tracing::info!(host = %config.host, port = config.port, "starting intake server");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(schema.clone()))
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
