mod discovery_params_log_context;

pub use self::discovery_params_log_context::DiscoveryParamsLogContext;
