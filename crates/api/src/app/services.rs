//! Shared state handed to every route through an `Extension`.

use std::sync::{Arc, Mutex};

use stockroom_infra::{CatalogStore, InMemoryCatalogStore, RestCatalogStore};

use crate::config::Config;
use crate::navigation::{Coordinator, NavigationCommand, NavigationState};
use crate::settings::Settings;

pub struct AppServices {
    pub store: Arc<dyn CatalogStore>,
    pub settings: Settings,
    navigation: Mutex<Coordinator>,
}

impl AppServices {
    pub fn new(store: Arc<dyn CatalogStore>, settings: Settings) -> Self {
        Self {
            store,
            settings,
            navigation: Mutex::new(Coordinator::new()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCatalogStore::new()), Settings::default())
    }

    pub fn navigation(&self) -> NavigationState {
        match self.navigation.lock() {
            Ok(guard) => guard.state(),
            Err(poisoned) => poisoned.into_inner().state(),
        }
    }

    pub fn navigate(&self, command: NavigationCommand) -> NavigationState {
        let mut guard = match self.navigation.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.apply(command)
    }
}

/// Pick the backing store from config.
pub fn build_services(config: &Config) -> AppServices {
    let store: Arc<dyn CatalogStore> = match &config.store {
        Some(rest) => {
            tracing::info!(base_url = %rest.base_url, "using hosted catalog store");
            Arc::new(RestCatalogStore::new(rest.clone()))
        }
        None => {
            tracing::warn!("STOCKROOM_STORE_URL not set; using in-memory catalog store");
            Arc::new(InMemoryCatalogStore::new())
        }
    };

    AppServices::new(store, Settings::new(config.theme))
}
