use crate::config::Config;
use log::info;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{Connection, Executor, MySql, MySqlConnection, Pool};
use std::time::Duration;

const CREATE_CONTACTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    company VARCHAR(255),
    phone VARCHAR(50),
    service VARCHAR(255),
    message TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    status ENUM('new', 'read', 'responded') DEFAULT 'new',
    INDEX idx_email (email),
    INDEX idx_created_at (created_at),
    INDEX idx_status (status)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci";

/// Ensures the database and the contacts table exist. Idempotent; runs at
/// startup before the pool is built.
pub async fn init_schema(config: &Config) -> Result<(), sqlx::Error> {
    let mut connection = MySqlConnection::connect_with(&config.server_connect_options()).await?;
    connection
        .execute(format!("CREATE DATABASE IF NOT EXISTS `{}`", config.db_name).as_str())
        .await?;
    connection.close().await?;

    let mut connection = MySqlConnection::connect_with(&config.database_connect_options()).await?;
    connection.execute(CREATE_CONTACTS_TABLE).await?;
    connection.close().await?;

    info!("Database and contacts table initialized");
    Ok(())
}

pub async fn build_pool(config: &Config) -> Result<Pool<MySql>, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(config.database_connect_options())
        .await
}
