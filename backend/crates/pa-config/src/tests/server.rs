use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server & Database
// =========================================================================

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _dir = setup_config_dir();
    let _port = EnvGuard::set("PA_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given - port 0 means OS auto-assign
    let _dir = setup_config_dir();
    let _port = EnvGuard::set("PA_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_tiny_body_limit_when_validate_then_error() {
    // Given
    let _dir = setup_config_dir();
    let _limit = EnvGuard::set("PA_SERVER_MAX_BODY_BYTES", "1024");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_database_path_with_traversal_when_validate_then_error() {
    // Given
    let _dir = setup_config_dir();
    let _path = EnvGuard::set("PA_DATABASE_PATH", "../../../etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_base_path_with_trailing_slash_when_validate_then_error() {
    // Given
    let _dir = setup_config_dir();
    let _base = EnvGuard::set("PA_API_BASE_PATH", "/api/");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_base_path_when_validate_then_ok() {
    // Given
    let _dir = setup_config_dir();
    let _base = EnvGuard::set("PA_API_BASE_PATH", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
