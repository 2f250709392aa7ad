use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::debug;

const DEFAULT_DATABASE: &str = "test";

#[async_trait]
pub trait Driver: Send + Sync {
    type Handle: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn connect(&self, uri: &str, db_name: Option<&str>) -> Result<Self::Handle, Self::Error>;
}

#[derive(Debug, Clone)]
pub struct MongoConnection {
    client: Client,
    database: Database,
}

impl MongoConnection {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn into_database(self) -> Database {
        self.database
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MongoDriver;

#[async_trait]
impl Driver for MongoDriver {
    type Handle = MongoConnection;
    type Error = mongodb::error::Error;

    async fn connect(&self, uri: &str, db_name: Option<&str>) -> Result<MongoConnection, mongodb::error::Error> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;

        let database = match db_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        // Client construction is lazy; ping so unreachable hosts and bad credentials fail here.
        client.database("admin").run_command(doc! { "ping": 1 }).await?;
        debug!("Selected MongoDB database: {}", database.name());

        Ok(MongoConnection { client, database })
    }
}
