pub mod config;
pub mod services;

pub use config::database::{connect, ConnectOptions};
pub use config::env::EnvConfig;
pub use services::connector::{ConnectError, Connector};
pub use services::driver::{Driver, MongoConnection, MongoDriver};
