pub mod modules;
pub use modules::career;
pub use modules::catalog;
pub mod health;
pub mod seed;
pub mod shared;

mod api;

use crate::api::openapi::ApiDoc;
use crate::career::{
    adapter::outgoing::{CareerQueryPostgres, CareerRepositoryPostgres},
    application::{
        career_use_cases::CareerUseCases,
        services::{CreateCareerService, GetCareersService, RecommendCareersService},
    },
};
use crate::catalog::{
    adapter::outgoing::CatalogQueryPostgres,
    application::{
        catalog_use_cases::CatalogUseCases,
        services::{GetDesignationsService, GetLanguagesService},
    },
};
use crate::shared::api::{custom_json_config, ApiResponse};
use crate::shared::config::AppConfig;

use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "career_compass")]
#[command(about = "Career path recommendations over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Commands {
    /// Run the HTTP API (default)
    Serve,

    /// Apply pending migrations, back up and reseed careers, languages and designations
    Seed,

    /// Apply pending migrations and exit
    Migrate,
}

#[derive(Clone)]
pub struct AppState {
    pub career: CareerUseCases,
    pub catalog: CatalogUseCases,
}

impl AppState {
    pub fn from_db(db: &Arc<DatabaseConnection>) -> Self {
        let career_query = CareerQueryPostgres::new(Arc::clone(db));
        let career_repo = CareerRepositoryPostgres::new(Arc::clone(db));
        let catalog_query = CatalogQueryPostgres::new(Arc::clone(db));

        Self {
            career: CareerUseCases {
                recommend: Arc::new(RecommendCareersService::new(career_query.clone())),
                get_list: Arc::new(GetCareersService::new(career_query)),
                create: Arc::new(CreateCareerService::new(career_repo)),
            },
            catalog: CatalogUseCases {
                get_languages: Arc::new(GetLanguagesService::new(catalog_query.clone())),
                get_designations: Arc::new(GetDesignationsService::new(catalog_query)),
            },
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    let outcome = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config, Arc::clone(&db_arc)).await,
        Commands::Migrate => migrate(&db_arc).await,
        Commands::Seed => reseed(&config, &db_arc).await,
    };

    close_db(db_arc).await;
    outcome
}

#[cfg(not(tarpaulin_include))]
async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    Migrator::up(db, None)
        .await
        .context("Failed to apply migrations")?;
    info!("Migrations applied");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn reseed(config: &AppConfig, db_arc: &Arc<DatabaseConnection>) -> anyhow::Result<()> {
    migrate(db_arc).await?;

    let summary = seed::run(Arc::clone(db_arc), &config.backup_dir).await?;
    for path in &summary.backups {
        info!(path = %path.display(), "Backup kept");
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn serve(config: &AppConfig, db_arc: Arc<DatabaseConnection>) -> anyhow::Result<()> {
    let server_url = config.server_url();
    info!(%server_url, "Starting career service");

    let state = AppState::from_db(&db_arc);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .default_service(web::route().to(route_not_found))
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("HTTP server error")
}

/// Waits for the pool to drain. Skipped when a worker still holds a handle.
#[cfg(not(tarpaulin_include))]
async fn close_db(db_arc: Arc<DatabaseConnection>) {
    match Arc::try_unwrap(db_arc) {
        Ok(conn) => match conn.close().await {
            Ok(()) => info!("Database connection closed"),
            Err(e) => warn!(error = %e, "Failed to close database connection"),
        },
        Err(_) => warn!("Database connection still in use at shutdown, dropping it"),
    }
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Career
    cfg.service(crate::career::adapter::incoming::web::routes::recommend_handler);
    cfg.service(crate::career::adapter::incoming::web::routes::get_careers_handler);
    cfg.service(crate::career::adapter::incoming::web::routes::create_career_handler);
    // Catalog
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_languages_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_designations_handler);
}

async fn route_not_found() -> HttpResponse {
    ApiResponse::not_found("NOT_FOUND", "Route not found")
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
