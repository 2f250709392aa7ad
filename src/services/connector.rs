use thiserror::Error;
use tracing::{error, info};

use crate::config::database::ConnectOptions;
use crate::config::env::EnvConfig;
use crate::services::driver::Driver;

#[derive(Error, Debug)]
pub enum ConnectError<E> {
    #[error("MongoDB URI not provided. Set MONGODB_URI in .env file or pass as parameter")]
    MissingUri,
    #[error(transparent)]
    Connection(E),
}

impl<E> ConnectError<E> {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingUri)
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub fn into_driver_error(self) -> Option<E> {
        match self {
            Self::Connection(e) => Some(e),
            Self::MissingUri => None,
        }
    }
}

pub struct Connector<D> {
    driver: D,
    env: EnvConfig,
}

impl<D: Driver> Connector<D> {
    pub fn new(driver: D, env: EnvConfig) -> Self {
        Self { driver, env }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn env(&self) -> &EnvConfig {
        &self.env
    }

    // Empty strings count as unset.
    pub fn resolve_uri<'a>(
        &'a self,
        options: Option<&'a ConnectOptions>,
    ) -> Result<&'a str, ConnectError<D::Error>> {
        options
            .and_then(|o| o.uri.as_deref())
            .filter(|uri| !uri.is_empty())
            .or_else(|| self.env.mongodb_uri.as_deref().filter(|uri| !uri.is_empty()))
            .ok_or(ConnectError::MissingUri)
    }

    pub async fn connect(
        &self,
        options: Option<&ConnectOptions>,
    ) -> Result<D::Handle, ConnectError<D::Error>> {
        let uri = self.resolve_uri(options)?;
        let db_name = options.and_then(|o| o.db_name.as_deref());

        self.driver
            .connect(uri, db_name)
            .await
            .map_err(ConnectError::Connection)
    }

    pub async fn connect_logged(
        &self,
        options: Option<&ConnectOptions>,
    ) -> Result<D::Handle, ConnectError<D::Error>> {
        match self.connect(options).await {
            Ok(handle) => {
                info!("MongoDB connected successfully");
                Ok(handle)
            }
            Err(e) => {
                error!("MongoDB connection error: {}", e);
                Err(e)
            }
        }
    }
}
