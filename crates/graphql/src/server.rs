//! GraphQL HTTP server.

use std::future::Future;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tracing::{debug, info};

use crate::types::PortfolioSchema;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_playground: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            enable_playground: true,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the HTTP routes: `/graphql`, `/health`, and the GraphiQL UI on `/`
/// when the playground is enabled.
pub fn router(schema: PortfolioSchema, config: &ServerConfig) -> Router {
    let graphql = if config.enable_playground {
        get(graphql_playground).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    let mut app = Router::new()
        .route("/graphql", graphql)
        .route("/health", get(health_check));

    if config.enable_playground {
        app = app.route("/", get(graphql_playground));
    }

    app.with_state(schema)
}

/// Start the GraphQL server with graceful shutdown support.
pub async fn serve_with_shutdown<F>(
    schema: PortfolioSchema,
    config: ServerConfig,
    shutdown_signal: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(schema, &config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("⚡ GraphQL server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    debug!("Server stopped");
    Ok(())
}

/// GraphQL query handler.
async fn graphql_handler(
    State(schema): State<PortfolioSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphQL Playground UI.
async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use portfolio_core::ports::PageLimits;
    use portfolio_core::services::CatalogService;
    use portfolio_storage::{MemRepositories, MemoryStore};

    use crate::schema::build_schema;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:4000");
        assert!(config.enable_playground);
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "OK");
    }

    #[tokio::test]
    async fn test_shutdown_stops_server() {
        let repos = Arc::new(MemRepositories::new(Arc::new(MemoryStore::new())));
        let schema = build_schema(CatalogService::new(repos, PageLimits::default()));
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            enable_playground: false,
        };

        // Signal d'arrêt immédiat: le serveur doit rendre la main proprement
        let result = serve_with_shutdown(schema, config, async {}).await;
        assert!(result.is_ok());
    }
}
