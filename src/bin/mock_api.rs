use actix_web::{middleware::Logger, App, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use order_dashboard::config::MockServerConfig;
use order_dashboard::repositories::in_memory::InMemoryOrderRepository;
use order_dashboard::{routes, state};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = MockServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let repo = InMemoryOrderRepository::seeded(config.seed_orders).await;
    let state = state::AppState::new(repo);

    tracing::info!(
        bind = %config.bind_addr,
        seeded = config.seed_orders,
        "mock order api listening"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
