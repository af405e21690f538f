pub mod catalog;
pub mod config;
pub mod metrics;
pub mod search;
pub mod session;
pub mod testing;

pub use catalog::{CatalogError, Movie, MovieCatalog, MovieFilter, RestCatalog, SortOrder};
pub use config::{
    load_config, load_config_from_str, validate_config, ApiConfig, Config, ConfigError,
    SearchConfig,
};
pub use search::{SearchController, SearchSnapshot};
pub use session::{
    AccountGateway, Credentials, Registration, RestAccountGateway, Session, SessionError, User,
};
