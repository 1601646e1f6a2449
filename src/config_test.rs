use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]).expect("defaults parse");
    assert_eq!(config.addr(), SocketAddr::new(DEFAULT_HOST, 3000));
    assert_eq!(config.site_root, None);
    assert_eq!(config.maps_api_key, None);
}

#[test]
fn reads_every_variable() {
    let config = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("SITE_ROOT", "/srv/nyumba"),
        ("MAPS_API_KEY", "key-123"),
    ])
    .expect("valid config");

    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.site_root, Some(PathBuf::from("/srv/nyumba")));
    assert_eq!(config.maps_api_key.as_deref(), Some("key-123"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = config_from(&[("PORT", "  "), ("MAPS_API_KEY", "")]).expect("blank is default");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.maps_api_key, None);
}

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: `eighty`");
}

#[test]
fn invalid_host_is_rejected() {
    let err = config_from(&[("HOST", "not-an-ip")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}
