use dotenvy::dotenv;
use env_logger::Env;
use log::info;
use orrya_contact_service::config::Config;
use orrya_contact_service::{db, http, store};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    db::init_schema(&config)
        .await
        .expect("Could not initialize database schema");

    let pool = db::build_pool(&config)
        .await
        .expect("Could not build connection pool");

    store::ping(&pool)
        .await
        .expect("Could not connect to MySQL database");

    info!("Connected to MySQL database");

    http::listen(pool, &config).await;
}
