pub mod connector;
pub mod driver;
