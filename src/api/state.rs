use crate::core::AppConfig;
use crate::mailbox::StatusFacade;

pub struct AppState {
    pub facade: StatusFacade,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(facade: StatusFacade, config: AppConfig) -> Self {
        Self { facade, config }
    }
}
