//! Endpoint selection from the environment.

use schematics_provider::config::ENDPOINT_ENV;
use schematics_provider::{ProviderConfig, Visibility};

#[test]
fn environment_configures_the_provider() {
    // SAFETY: this is the only test in this binary touching the environment.
    unsafe {
        std::env::set_var("IC_REGION", "eu-gb");
        std::env::set_var("IC_VISIBILITY", "private");
        std::env::remove_var(ENDPOINT_ENV);
    }
    let config = ProviderConfig::from_env().unwrap();
    assert_eq!(config.region, "eu-gb");
    assert_eq!(config.visibility, Visibility::Private);
    let url = config.endpoint_for(None).unwrap();
    assert_eq!(url.host_str(), Some("private-eu-gb.schematics.cloud.ibm.com"));

    unsafe {
        std::env::set_var(ENDPOINT_ENV, "http://127.0.0.1:8181/api/");
    }
    let config = ProviderConfig::from_env().unwrap();
    let url = config.endpoint_for(Some("us-east")).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8181/api/");

    unsafe {
        std::env::set_var("IC_VISIBILITY", "internal");
    }
    assert!(ProviderConfig::from_env().is_err());

    unsafe {
        std::env::remove_var("IC_REGION");
        std::env::remove_var("IC_VISIBILITY");
        std::env::remove_var(ENDPOINT_ENV);
    }
}
