use super::*;

#[test]
fn github_pages_host_is_static() {
    assert_eq!(DeploymentMode::from_hostname("mga210.github.io"), DeploymentMode::Static);
}

#[test]
fn raw_githubusercontent_host_is_static() {
    assert_eq!(DeploymentMode::from_hostname("raw.githubusercontent.com"), DeploymentMode::Static);
}

#[test]
fn other_hosts_are_remote() {
    for host in ["localhost", "127.0.0.1", "portfolio.replit.app", "example.com", ""] {
        assert_eq!(DeploymentMode::from_hostname(host), DeploymentMode::Remote, "host {host:?}");
    }
}

#[test]
fn default_mode_is_remote() {
    assert_eq!(DeploymentMode::default(), DeploymentMode::Remote);
    assert!(!DeploymentMode::default().is_static());
}

#[test]
fn welcome_differs_by_mode() {
    let remote = DeploymentMode::Remote.welcome_message();
    let local = DeploymentMode::Static.welcome_message();
    assert_ne!(remote, local);
    assert!(remote.contains("Miguel's AI assistant"));
    assert!(local.contains("Miguel's assistant"));
    assert!(local.ends_with("What would you like to know?"));
}
