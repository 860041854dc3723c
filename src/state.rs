use std::sync::Arc;

use crate::config::Config;
use crate::services::cms::CmsClient;

#[derive(Clone)]
pub struct AppState {
    pub cms: Arc<CmsClient>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(cms: CmsClient, config: Config) -> Self {
        Self {
            cms: Arc::new(cms),
            config: Arc::new(config),
        }
    }
}
