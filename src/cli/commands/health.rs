use serde_json::{json, Value};

use crate::cli::{utils, OutputFormat};

pub async fn handle(url: Option<String>, output_format: OutputFormat) -> anyhow::Result<()> {
    let base_url = url
        .or_else(|| std::env::var("BOOKMARK_API_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string());

    let response = reqwest::get(format!("{}/health", base_url)).await?;
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);

    if status.is_success() {
        utils::output_success(
            &output_format,
            &format!("{} is healthy", base_url),
            Some(json!({ "health": body })),
        )
    } else {
        utils::output_error(
            &output_format,
            &format!("{} reported {} - {}", base_url, status, body),
        )
    }
}
