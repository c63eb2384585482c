use std::collections::HashMap;

use super::*;

fn config(per_client: usize, global: usize) -> RateLimitConfig {
    RateLimitConfig {
        per_client_limit: per_client,
        per_client_window: Duration::from_secs(60),
        global_limit: global,
        global_window: Duration::from_secs(60),
        trust_proxy_headers: false,
    }
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = RateLimiter::new(config(3, 100));
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at("10.0.0.1", now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("10.0.0.1", now),
        Err(RateLimitError::PerClientExceeded { limit: 3, window_secs: 60 })
    ));
}

#[test]
fn global_allows_up_to_limit() {
    let rl = RateLimiter::new(config(100, 5));
    let now = Instant::now();

    // Use distinct clients to avoid hitting per-client limit first.
    for i in 0..5 {
        assert!(rl.check_and_record_at(&format!("client-{i}"), now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("client-new", now),
        Err(RateLimitError::GlobalExceeded { limit: 5, .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = RateLimiter::new(config(2, 100));
    let start = Instant::now();

    for _ in 0..2 {
        rl.check_and_record_at("a", start).unwrap();
    }
    assert!(rl.check_and_record_at("a", start).is_err());

    let after_window = start + Duration::from_secs(60) + Duration::from_millis(1);
    assert!(rl.check_and_record_at("a", after_window).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = RateLimiter::new(config(1, 100));
    let now = Instant::now();

    rl.check_and_record_at("a", now).unwrap();
    assert!(rl.check_and_record_at("a", now).is_err());
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = RateLimiter::new(config(1, 2));
    let now = Instant::now();

    rl.check_and_record_at("a", now).unwrap();
    for _ in 0..5 {
        assert!(rl.check_and_record_at("a", now).is_err());
    }
    // Only one global slot used so far.
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn clones_share_counters() {
    let rl = RateLimiter::new(config(1, 100));
    let other = rl.clone();
    let now = Instant::now();

    rl.check_and_record_at("a", now).unwrap();
    assert!(other.check_and_record_at("a", now).is_err());
}

#[test]
fn config_reads_overrides_and_defaults() {
    let vars: HashMap<&str, &str> = [("RATE_LIMIT_PER_CLIENT", "4"), ("RATE_LIMIT_GLOBAL_WINDOW_SECS", "30")].into();
    let cfg = RateLimitConfig::from_lookup(|k| vars.get(k).map(|v| (*v).to_string()));
    assert_eq!(cfg.per_client_limit, 4);
    assert_eq!(cfg.per_client_window, Duration::from_secs(DEFAULT_PER_CLIENT_WINDOW_SECS));
    assert_eq!(cfg.global_limit, DEFAULT_GLOBAL_LIMIT);
    assert_eq!(cfg.global_window, Duration::from_secs(30));
    assert!(!cfg.trust_proxy_headers);
}

#[test]
fn proxy_trust_is_opt_in() {
    let cfg = RateLimitConfig::from_lookup(|k| (k == "RATE_LIMIT_TRUST_PROXY").then(|| "true".to_string()));
    assert!(cfg.trust_proxy_headers);
    assert!(RateLimiter::new(cfg).config().trust_proxy_headers);

    let cfg = RateLimitConfig::from_lookup(|k| (k == "RATE_LIMIT_TRUST_PROXY").then(|| "yes please".to_string()));
    assert!(!cfg.trust_proxy_headers);
}
