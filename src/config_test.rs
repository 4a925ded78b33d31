use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that touch process environment.
fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_lock()`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ROOT");
    }
}

#[test]
fn from_env_defaults_to_no_overrides() {
    let _guard = env_lock();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_env_reads_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("SITE_ROOT", "/srv/gallery");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, Some(8080));
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/gallery")));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_trims_whitespace() {
    assert_eq!(parse_port(" 3000 "), Ok(3000));
    assert!(parse_port("70000").is_err());
}

#[test]
fn bind_addr_prefers_port_override() {
    let site_addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();

    assert_eq!(ServerConfig::default().bind_addr(site_addr), site_addr);

    let cfg = ServerConfig { port: Some(9000), ..ServerConfig::default() };
    assert_eq!(cfg.bind_addr(site_addr), "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
}

#[test]
fn site_root_prefers_override() {
    assert_eq!(ServerConfig::default().site_root("target/site"), PathBuf::from("target/site"));

    let cfg = ServerConfig { site_root: Some(PathBuf::from("/srv/gallery")), ..ServerConfig::default() };
    assert_eq!(cfg.site_root("target/site"), PathBuf::from("/srv/gallery"));
}
