use crate::config::{AppConfig, AppMode, StoreConfig};
use crate::storage::{firestore::FirestoreClient, memory::InMemoryStore, DocumentStore};
use anyhow::{Context, Result};
use std::rc::Rc;

/// Application services, built once at startup and handed to the views.
#[derive(Clone)]
pub struct AppState {
    pub store: Rc<dyn DocumentStore>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.config == other.config
    }
}

impl AppState {
    /// Create AppState from configuration.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("app mode: LOCAL"),
            AppMode::Production => tracing::info!("app mode: PRODUCTION"),
        }

        let store: Rc<dyn DocumentStore> = match &config.store {
            StoreConfig::Firestore(firestore) => {
                tracing::info!(
                    "store: Firestore project={} database={} order_field={}",
                    firestore.project_id,
                    firestore.database_id,
                    firestore.order_field
                );
                if let Some(host) = &firestore.emulator_host {
                    tracing::info!("store: using emulator at {}", host);
                }
                let client = FirestoreClient::new(firestore)
                    .context("failed to build Firestore client")?;
                Rc::new(client)
            }
            StoreConfig::Memory => {
                let seeded = InMemoryStore::seeded();
                tracing::info!(
                    "store: in-memory catalogue ({} videos, {} shorts)",
                    seeded.len(crate::types::MediaKind::LongForm),
                    seeded.len(crate::types::MediaKind::ShortForm)
                );
                Rc::new(seeded)
            }
        };

        Ok(Self { store, config })
    }

    /// Local mode state; cannot fail.
    pub fn local() -> Self {
        Self {
            store: Rc::new(InMemoryStore::seeded()),
            config: AppConfig::local(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FirestoreConfig;

    #[test]
    fn local_config_builds_memory_store() {
        let state = AppState::from_config(AppConfig::local()).unwrap();
        assert_eq!(state.config.mode, AppMode::Local);
    }

    #[test]
    fn production_config_builds_firestore_client() {
        let config = AppConfig {
            mode: AppMode::Production,
            store: StoreConfig::Firestore(FirestoreConfig {
                project_id: "stargazingproto".to_string(),
                database_id: "(default)".to_string(),
                api_key: None,
                order_field: "uploadTime".to_string(),
                emulator_host: None,
            }),
        };
        let state = AppState::from_config(config.clone()).unwrap();
        assert_eq!(state.config, config);
    }

    #[test]
    fn clones_share_the_store() {
        let state = AppState::local();
        assert_eq!(state.clone(), state);
        assert_ne!(AppState::local(), state);
    }
}
