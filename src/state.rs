use std::sync::Arc;

use crate::auth::{FirebaseIdentity, IdentityProvider};
use crate::client::SearchClient;
use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub search_client: SearchClient,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let identity = Arc::new(FirebaseIdentity::from_config(&config));
        Self::with_identity(config, identity)
    }

    pub fn with_identity(config: Config, identity: Arc<dyn IdentityProvider>) -> Arc<Self> {
        let search_client = SearchClient::new(&config.api_base_url);
        Arc::new(Self {
            config,
            search_client,
            identity,
        })
    }
}
