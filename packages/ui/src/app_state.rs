//! Application state context and the services every page needs to reach the
//! backend.

use std::rc::Rc;
use std::time::Duration;

use api::RestClient;
use dioxus::prelude::*;
use store::{AppState, AuthSlice, ClientConfig, KeyValueStore};

/// Handles that do not change for the lifetime of the app: the REST client
/// (without credentials), the session storage and the search debounce delay.
#[derive(Clone, Copy)]
pub struct Services {
    api: Signal<RestClient>,
    storage: Signal<Rc<dyn KeyValueStore>>,
    debounce: Duration,
}

impl Services {
    fn new(config: &ClientConfig, storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            api: Signal::new(RestClient::from_config(config)),
            storage: Signal::new(storage),
            debounce: Duration::from_millis(config.search.debounce_ms),
        }
    }

    /// A client carrying the bearer token of the current session, if any.
    pub fn client(&self, auth: &AuthSlice) -> RestClient {
        self.api.read().with_token(auth.access_token())
    }

    pub fn storage(&self) -> Rc<dyn KeyValueStore> {
        Rc::clone(&self.storage.read())
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_store() -> Rc<dyn KeyValueStore> {
    Rc::new(store::LocalStorage::new())
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn platform_store() -> Rc<dyn KeyValueStore> {
    Rc::new(store::MemoryStore::new())
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_store() -> Rc<dyn KeyValueStore> {
    Rc::new(store::FileStore::default_location())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> ClientConfig {
    let Ok(text) = std::fs::read_to_string(ClientConfig::filename()) else {
        return ClientConfig::from_env();
    };
    match ClientConfig::from_toml(&text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable {}", ClientConfig::filename());
            ClientConfig::from_env()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> ClientConfig {
    ClientConfig::from_env()
}

/// Get the application state.
/// Returns a signal that updates whenever any slice changes.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provider component that restores the session and owns the app state.
/// Wrap your app with this component before any page mounts.
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let services = use_hook(|| {
        let config = load_config();
        tracing::info!(base_url = %config.api.base_url, "Starting PetPerfect client");
        Services::new(&config, platform_store())
    });
    let state = use_signal(|| AppState::restore(services.storage().as_ref()));

    use_context_provider(|| services);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
