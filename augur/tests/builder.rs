use std::sync::Arc;
use std::time::Duration;

use augur::{Augur, AugurConfig, AugurError, RangePreset};
use augur_mock::MockConnector;

#[test]
fn requires_a_connector() {
    assert!(matches!(
        Augur::builder().build(),
        Err(AugurError::InvalidArg(_))
    ));
}

#[test]
fn rejects_unknown_default_range() {
    let cfg = AugurConfig {
        default_range: "2w".into(),
        ..AugurConfig::default()
    };
    let res = Augur::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .config(cfg)
        .build();
    assert!(matches!(res, Err(AugurError::UnknownRange { .. })));
}

#[test]
fn builder_settings_reach_config() {
    let augur = Augur::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::from_millis(750))
        .default_range(RangePreset::OneMonth)
        .build()
        .unwrap();
    assert_eq!(augur.config().provider_timeout, Duration::from_millis(750));
    assert_eq!(augur.config().default_range, "1m");
}
