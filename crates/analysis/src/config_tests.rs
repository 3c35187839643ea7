use super::*;

#[test]
fn test_defaults_match_three_tiers() {
    let config = AnalysisConfig::default();
    assert_eq!(config.tiers.depth(Tier::Free), 2);
    assert_eq!(config.tiers.depth(Tier::Basic), 5);
    assert_eq!(config.tiers.depth(Tier::Pro), 10);
    assert_eq!(config.cache.capacity, 10_000);
    assert_eq!(config.cache.ttl(), Duration::from_secs(24 * 60 * 60));
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_tier_falls_back_to_shallowest() {
    assert_eq!(Tier::from_name("pro"), Tier::Pro);
    assert_eq!(Tier::from_name(" Medium "), Tier::Basic);
    assert_eq!(Tier::from_name("deep"), Tier::Pro);
    assert_eq!(Tier::from_name("platinum"), Tier::Free);
    assert_eq!(Tier::from_name(""), Tier::Free);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = AnalysisConfig::from_toml_str(
        r#"
        [tiers]
        pro = 8

        [cache]
        capacity = 64
        "#,
    )
    .unwrap();
    assert_eq!(config.tiers.free, 2);
    assert_eq!(config.tiers.pro, 8);
    assert_eq!(config.cache.capacity, 64);
    assert_eq!(config.cache.ttl_secs, 86_400);
}

#[test]
fn test_invalid_values_are_rejected() {
    let zero_capacity = AnalysisConfig::from_toml_str("[cache]\ncapacity = 0\n");
    assert!(matches!(zero_capacity, Err(ConfigError::Invalid(_))));

    let flat_tiers = AnalysisConfig::from_toml_str("[tiers]\nfree = 3\nbasic = 3\n");
    assert!(matches!(flat_tiers, Err(ConfigError::Invalid(_))));

    let garbage = AnalysisConfig::from_toml_str("tiers = [");
    assert!(matches!(garbage, Err(ConfigError::Parse(_))));
}

#[test]
fn test_toml_round_trip() {
    let config = AnalysisConfig::default();
    let text = config.to_toml_string().unwrap();
    assert_eq!(AnalysisConfig::from_toml_str(&text).unwrap(), config);
}
