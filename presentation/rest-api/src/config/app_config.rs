use super::{
    cache_config, cors_config, database_config::DatabaseSettings, server_config::ServerConfig,
};
use cache::ListingCacheConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub cache: ListingCacheConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            cache: cache_config::from_env(),
        })
    }
}
