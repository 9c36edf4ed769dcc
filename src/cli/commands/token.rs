use serde_json::json;
use uuid::Uuid;

use crate::auth::{self, Claims};
use crate::cli::{utils, OutputFormat};
use crate::config;

pub async fn handle(user_id: Uuid, email: String, output_format: OutputFormat) -> anyhow::Result<()> {
    let claims = Claims::new(user_id, email);
    let token = auth::generate_jwt(&claims)?;

    utils::output_success(
        &output_format,
        "Token minted",
        Some(json!({
            "token": token,
            "expires_in_hours": config::config().security.jwt_expiry_hours,
        })),
    )
}
