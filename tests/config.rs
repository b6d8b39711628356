use stock_data_service::config::{AppEnv, Config};

// Single test so the env-var mutations cannot race each other.
#[test]
fn from_env_applies_defaults_and_validates_port() {
    for key in ["PORT", "HOST", "APP_ENV", "TIINGO_API_KEY", "STATIC_DIR"] {
        std::env::remove_var(key);
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.app_env, AppEnv::Development);
    assert_eq!(config.tiingo_api_key, "");
    assert_eq!(config.static_dir, "static");

    std::env::set_var("APP_ENV", "production");
    std::env::set_var("TIINGO_API_KEY", "secret");
    let config = Config::from_env().unwrap();
    assert_eq!(config.app_env, AppEnv::Production);
    assert_eq!(config.tiingo_api_key, "secret");

    std::env::set_var("PORT", "not-a-port");
    assert!(Config::from_env().is_err());

    for key in ["PORT", "APP_ENV", "TIINGO_API_KEY"] {
        std::env::remove_var(key);
    }
}
