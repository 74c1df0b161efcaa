use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::prelude::*;

use blog_service::config::Config;
use blog_service::schema::{build_schema, AppSchema};
use blog_service::store::ContentStore;

async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// SDL endpoint for schema introspection and client code generation
async fn schema_handler(schema: web::Data<AppSchema>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(schema.sdl())
}

async fn health_handler() -> &'static str {
    "ok"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting blog service...");

    let config = Config::from_env()?;

    // Ordered startup: the store connection must complete and the adapter
    // must exist before the server accepts a single request.
    let store = ContentStore::connect(&config.store).await?;
    let schema = build_schema(Arc::new(store));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("GraphiQL available at http://{}/graphiql", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(schema.clone()))
            .route("/graphql", web::post().to(graphql_handler))
            .route("/graphiql", web::get().to(graphiql_handler))
            .route("/schema", web::get().to(schema_handler))
            .route("/health", web::get().to(health_handler))
    })
    .workers(config.server.workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
