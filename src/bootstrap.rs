use crate::application::{ports::util::SlugGenerator, services::ApplicationServices};
use crate::config::{AppConfig, SlugStrategy};
use crate::infrastructure::{
    database,
    repositories::{PostgresBlogPostReadRepository, PostgresBlogPostWriteRepository},
    time::SystemClock,
    util::{AsciiSlugGenerator, TransliteratingSlugGenerator, UuidGenerator},
};
use anyhow::{Context, Result};
use std::sync::Arc;

pub fn slug_generator(strategy: SlugStrategy) -> Arc<dyn SlugGenerator> {
    match strategy {
        SlugStrategy::Ascii => Arc::new(AsciiSlugGenerator),
        SlugStrategy::Transliterate => Arc::new(TransliteratingSlugGenerator),
    }
}

/// Connects to PostgreSQL, applies the embedded migrations, and wires the
/// Postgres repositories into the application services.
pub async fn connect(config: &AppConfig) -> Result<ApplicationServices> {
    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let read_repo = Arc::new(PostgresBlogPostReadRepository::new(pool.clone()));
    let write_repo = Arc::new(PostgresBlogPostWriteRepository::new(pool));

    tracing::info!(
        slug_strategy = ?config.slug_strategy(),
        "blog services ready"
    );

    Ok(ApplicationServices::new(
        write_repo,
        read_repo.clone(),
        read_repo,
        Arc::new(SystemClock),
        slug_generator(config.slug_strategy()),
        Arc::new(UuidGenerator),
        config.service_options(),
    ))
}
