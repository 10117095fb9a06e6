#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match env_value("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Connection target of the managed document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database_id: String,
    pub api_key: Option<String>,
    /// Field the collections are ordered by, newest first.
    pub order_field: String,
    /// `host:port` of a local Firestore emulator.
    pub emulator_host: Option<String>,
}

impl FirestoreConfig {
    pub fn from_env() -> Self {
        Self {
            project_id: env_value("FIRESTORE_PROJECT_ID")
                .unwrap_or_else(|| "stargazingproto".to_string()),
            database_id: env_value("FIRESTORE_DATABASE").unwrap_or_else(|| "(default)".to_string()),
            api_key: env_value("FIRESTORE_API_KEY"),
            order_field: env_value("FIRESTORE_ORDER_FIELD")
                .unwrap_or_else(|| "uploadTime".to_string()),
            emulator_host: env_value("FIRESTORE_EMULATOR_HOST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Firestore(FirestoreConfig),
    /// Seeded in-process catalogue, no network.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            // Missing .env is the normal case outside local development.
            let _ = dotenvy::dotenv();
        }

        let mode = AppMode::from_env();
        let store = match mode {
            AppMode::Local => StoreConfig::Memory,
            AppMode::Production => StoreConfig::Firestore(FirestoreConfig::from_env()),
        };
        Self { mode, store }
    }

    pub fn local() -> Self {
        Self {
            mode: AppMode::Local,
            store: StoreConfig::Memory,
        }
    }
}

/// Runtime environment first, then the value baked in at compile time
/// (the only source available to wasm builds).
fn env_value(key: &str) -> Option<String> {
    let runtime = std::env::var(key).ok();
    let baked = match key {
        "APP_MODE" => option_env!("APP_MODE"),
        "FIRESTORE_PROJECT_ID" => option_env!("FIRESTORE_PROJECT_ID"),
        "FIRESTORE_DATABASE" => option_env!("FIRESTORE_DATABASE"),
        "FIRESTORE_API_KEY" => option_env!("FIRESTORE_API_KEY"),
        "FIRESTORE_ORDER_FIELD" => option_env!("FIRESTORE_ORDER_FIELD"),
        "FIRESTORE_EMULATOR_HOST" => option_env!("FIRESTORE_EMULATOR_HOST"),
        _ => None,
    };
    runtime
        .or_else(|| baked.map(str::to_string))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
