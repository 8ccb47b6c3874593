//! Logging initialization behavior

use aperture::error::SurfaceError;
use aperture::logging::{init_logging, LoggingConfig};

#[test]
fn test_init_installs_once() {
    let config = LoggingConfig {
        level: "off".to_string(),
        ..LoggingConfig::default()
    };

    init_logging(Some(&config)).unwrap();

    // The global dispatcher is already set; a second install reports the
    // failure instead of panicking.
    assert!(matches!(
        init_logging(Some(&config)),
        Err(SurfaceError::Logging(_))
    ));
}
