//! Scripted walk through the users collection.
//!
//! Reads `url` and `accessToken` from `env/default.json` overlaid with
//! `.env`, or from the JSON files given as arguments, then:
//!
//! 1. fetches page 3 of the users
//! 2. logs the total number of pages
//! 3. sorts the page by name
//! 4. logs the name of the last user
//! 5. renames that user to `Alex Smith`
//! 6. deletes that user
//! 7. fetches the nonexistent user 5555
//!
//! Log output is controlled with `RUST_LOG` (default `info`).

use std::process::ExitCode;
use std::sync::Arc;

use gorest_client::{
    FileConfigSource, GoRestConfig, SortKey, TracingSink, UserService, UserUpdate,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const NONEXISTENT_USER: u64 = 5555;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    let source = if paths.is_empty() {
        FileConfigSource::standard()
    } else {
        FileConfigSource::load(&paths)
    };
    let source = match source {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Loaded configuration from {:?}", source.files());

    let config = GoRestConfig::from_source(&source);
    let service = UserService::new(&config, Arc::new(TracingSink));

    run(&service).await;
    ExitCode::SUCCESS
}

async fn run(service: &UserService) {
    let mut page = service.list_page(3, None).await;
    if page.is_empty() {
        tracing::warn!("1. No users retrieved for page 3");
        return;
    }

    match page.pagination {
        Some(pagination) => tracing::info!(
            "2. Total number of pages retrieved: {}",
            pagination.total_pages
        ),
        None => tracing::info!("2. Total number of pages retrieved: unknown"),
    }

    service.sort(&mut page.users, Some(SortKey::Name));

    let Some(last) = page.users.pop() else {
        return;
    };
    tracing::info!("4. Last user in array: {}", last.name);

    let Some(updated) = service
        .update(&UserUpdate::new(last.id).name("Alex Smith"))
        .await
    else {
        return;
    };

    let deleted = service.delete(updated.id).await;
    tracing::info!("6. Delete user {} success: {}", updated.name, deleted);

    // The response code is logged by the service.
    let _ = service.get(NONEXISTENT_USER).await;
}
