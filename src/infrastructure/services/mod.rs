pub mod http;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::QuizServiceBox;

pub struct QuizServiceManager {}

impl QuizServiceManager {
    /// Builds the quiz service client from the loaded configuration.
    pub fn get() -> Result<QuizServiceBox> {
        let url = Config::get(ConfigKey::ServiceURL);
        let timeout = Duration::from_millis(Config::get(ConfigKey::HealthCheckTimeout).parse::<u64>()?);

        return Ok(Arc::new(http::HttpQuizService::new(url, timeout)));
    }
}
