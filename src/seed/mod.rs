pub mod data;

use anyhow::Context;
use sea_orm::DatabaseConnection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::career::{
    adapter::outgoing::{CareerQueryPostgres, CareerRepositoryPostgres},
    application::{
        ports::incoming::use_cases::SeedCareersUseCase, services::SeedCareersService,
    },
};
use crate::catalog::{
    adapter::outgoing::{CatalogQueryPostgres, CatalogRepositoryPostgres},
    application::{
        ports::incoming::use_cases::SeedCatalogUseCase, services::SeedCatalogService,
    },
};
use crate::shared::snapshot::FsSnapshotWriter;

/// What a seed run backed up and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub backups: Vec<PathBuf>,
    pub careers: u64,
    pub languages: u64,
    pub designations: u64,
}

/// Backs up, clears and reseeds careers, languages and designations.
pub async fn run(db: Arc<DatabaseConnection>, backup_dir: &Path) -> anyhow::Result<SeedSummary> {
    let snapshot = FsSnapshotWriter::new(backup_dir);

    let careers = SeedCareersService::new(
        CareerQueryPostgres::new(Arc::clone(&db)),
        CareerRepositoryPostgres::new(Arc::clone(&db)),
        snapshot.clone(),
    );
    let catalog = SeedCatalogService::new(
        CatalogQueryPostgres::new(Arc::clone(&db)),
        CatalogRepositoryPostgres::new(Arc::clone(&db)),
        snapshot,
    );

    run_with(&careers, &catalog).await
}

/// Takes every backup before clearing anything, so a failed snapshot leaves
/// all three collections as they were.
pub async fn run_with(
    careers: &dyn SeedCareersUseCase,
    catalog: &dyn SeedCatalogUseCase,
) -> anyhow::Result<SeedSummary> {
    let career_seed = data::careers().context("Built-in career data is invalid")?;

    let career_backup = careers
        .backup()
        .await
        .context("Failed to back up careers")?;
    let catalog_backups = catalog
        .backup()
        .await
        .context("Failed to back up languages and designations")?;

    let backups: Vec<PathBuf> = [
        career_backup,
        catalog_backups.languages,
        catalog_backups.designations,
    ]
    .into_iter()
    .flatten()
    .collect();

    let inserted_careers = careers
        .replace(career_seed)
        .await
        .context("Failed to seed careers")?;

    let inserted_catalog = catalog
        .replace(data::languages(), data::designations())
        .await
        .with_context(|| {
            format!(
                "Failed to seed languages and designations, backups kept in {:?}",
                backups
            )
        })?;

    let summary = SeedSummary {
        backups,
        careers: inserted_careers,
        languages: inserted_catalog.languages,
        designations: inserted_catalog.designations,
    };

    info!(
        careers = summary.careers,
        languages = summary.languages,
        designations = summary.designations,
        "Database successfully seeded"
    );

    Ok(summary)
}
