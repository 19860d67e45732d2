mod balance_config;
mod engine_options;

pub use balance_config::BalanceConfig;
pub use engine_options::EngineOptions;
