use sqlx::mysql::MySqlConnectOptions;
use std::env;

/// Runtime configuration, read once at startup from the environment.
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub listen_port: u16,
    pub frontend_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| String::from("localhost")),
            db_user: env::var("DB_USER").unwrap_or_else(|_| String::from("root")),
            db_password: env::var("DB_PASSWORD").unwrap_or_default(),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| String::from("orrya_contacts")),
            db_port: env_u16("DB_PORT", 3306),
            listen_port: env_u16("PORT", 3001),
            frontend_url: env::var("FRONTEND_URL").ok(),
        }
    }

    /// Connection options for the MySQL server itself, with no database
    /// selected. Used to create the database before it exists.
    pub fn server_connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
    }

    pub fn database_connect_options(&self) -> MySqlConnectOptions {
        self.server_connect_options().database(&self.db_name)
    }
}

fn env_u16(name: &str, default: u16) -> u16 {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid port number")),
        Err(_) => default,
    }
}
