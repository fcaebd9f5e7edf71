// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};
use std::env;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    dramaboard::presentation::http::openapi::write_openapi_snapshot()
        .with_context(|| format!("writing OpenAPI snapshot to {output_path}"))?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
