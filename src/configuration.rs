use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    #[serde(skip)]
    pub payment: PaymentSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PaymentSettings {
    pub base_url: String,
    pub secret_key: String,
    pub currency: String,
    pub timeout_secs: u64,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.stripe.com".to_string(),
            secret_key: String::new(),
            currency: "usd".to_string(),
            timeout_secs: 15,
        }
    }
}

impl PaymentSettings {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let secret_key = std::env::var("PAYMENT_SECRET_KEY")
            .map_err(|_| config::ConfigError::NotFound("PAYMENT_SECRET_KEY".to_string()))?;
        let base_url = std::env::var("PAYMENT_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.stripe.com".to_string());
        let currency = std::env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "usd".to_string());
        let timeout_secs = std::env::var("PAYMENT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        Ok(PaymentSettings {
            base_url,
            secret_key,
            currency,
            timeout_secs,
        })
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();
    settings.merge(config::File::with_name("configuration"))?;

    let mut config: Settings = settings.try_deserialize()?;

    // The payment processor credentials only ever come from the environment
    config.payment = PaymentSettings::from_env().unwrap_or_default();

    Ok(config)
}
