use crate::config::AppConfig;
use crate::services::agent::Answerer;
use crate::services::notifier::Notifier;

pub struct AppState {
    pub config: AppConfig,
    pub answerer: Box<dyn Answerer>,
    pub notifier: Box<dyn Notifier>,
}
