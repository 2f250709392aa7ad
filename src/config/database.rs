use serde::Deserialize;

use crate::config::env::EnvConfig;
use crate::services::connector::{ConnectError, Connector};
use crate::services::driver::{MongoConnection, MongoDriver};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    pub uri: Option<String>,
    pub db_name: Option<String>,
}

impl ConnectOptions {
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = Some(db_name.into());
        self
    }
}

/// Connects to MongoDB using `options`, falling back to `MONGODB_URI` from `.env`.
pub async fn connect(
    options: Option<&ConnectOptions>,
) -> Result<MongoConnection, ConnectError<mongodb::error::Error>> {
    let connector = Connector::new(MongoDriver::default(), EnvConfig::load());
    connector.connect_logged(options).await
}
