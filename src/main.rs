//! Biblius Console - Library Management System
//!
//! Entry point wiring configuration, logging, the REST services and the
//! entity routing table. A route path segment (and optional entity id) picks
//! the feature to open, mirroring the URL-driven navigation of the web shell.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblius_console::{
    config::AppConfig,
    controllers::{
        AuthorUpdateController, BookUpdateController, BorrowedBookUpdateController,
        ClientUpdateController,
    },
    models::{Author, Book, BorrowedBook, Client},
    navigation::HistoryNavigator,
    routing::EntityRoute,
    services::{EntityApi as _, Services},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblius_console={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Biblius Console v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend API at {}", config.api.base_url);

    let services = Services::new(&config.api)?;
    let navigator = Arc::new(HistoryNavigator::new());

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "book".to_string());
    let id: Option<i32> = args.next().and_then(|v| v.parse().ok());

    let route = EntityRoute::from_path(&path)?;
    navigator.push(route.path());
    tracing::info!("Opening {}", route.page_title());

    dispatch(route, id, &services, navigator).await
}

/// Construct the feature controller for the dispatched route, fetch the
/// entity under edit when an id was given, and report the resulting form
/// state.
async fn dispatch(
    route: EntityRoute,
    id: Option<i32>,
    services: &Services,
    navigator: Arc<HistoryNavigator>,
) -> anyhow::Result<()> {
    match route {
        EntityRoute::Author => {
            let author = match id {
                Some(id) => services.authors.find(id).await?,
                None => Author::default(),
            };
            let mut controller =
                AuthorUpdateController::new(services.authors.clone(), navigator);
            controller.initialize(&author);
            tracing::info!("Author form ready (id: {:?})", controller.edit_form.id);
        }
        EntityRoute::Book => {
            let book = match id {
                Some(id) => services.books.find(id).await?,
                None => Book::default(),
            };
            let mut controller = BookUpdateController::new(
                services.books.clone(),
                services.publishers.clone(),
                services.authors.clone(),
                navigator,
            );
            controller.initialize(&book).await;
            tracing::info!(
                "Book form ready (id: {:?}, {} publisher option(s), {} author option(s))",
                controller.edit_form.id,
                controller.publishers_collection.len(),
                controller.authors_shared_collection.len(),
            );
        }
        EntityRoute::BorrowedBook => {
            let borrowed_book = match id {
                Some(id) => services.borrowed_books.find(id).await?,
                None => BorrowedBook::default(),
            };
            let mut controller = BorrowedBookUpdateController::new(
                services.borrowed_books.clone(),
                services.books.clone(),
                services.clients.clone(),
                navigator,
            );
            controller.initialize(&borrowed_book).await;
            tracing::info!(
                "BorrowedBook form ready (id: {:?}, {} book option(s), {} client option(s))",
                controller.edit_form.id,
                controller.books_collection.len(),
                controller.clients_collection.len(),
            );
        }
        EntityRoute::Client => {
            let client = match id {
                Some(id) => services.clients.find(id).await?,
                None => Client::default(),
            };
            let mut controller =
                ClientUpdateController::new(services.clients.clone(), navigator);
            controller.initialize(&client);
            tracing::info!("Client form ready (id: {:?})", controller.edit_form.id);
        }
        EntityRoute::Publisher => {
            // Publishers are managed by an external feature; list them only.
            let publishers = services.publishers.query(&[]).await?;
            tracing::info!("{} publisher(s) available", publishers.len());
        }
    }
    Ok(())
}
