use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::database;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let url = database::database_url()?;
    let pool = database::connect().await?;

    database::run_migrations(&pool).await?;

    utils::output_success(
        &output_format,
        "Migrations applied",
        Some(json!({ "database": database::redacted_url(&url) })),
    )
}
