use figment::Jail;
use ndo_config::NdoConfig;

#[test]
fn env_vars_fill_controller_section() {
    Jail::expect_with(|jail| {
        jail.set_env("NDOMIG_CONTROLLER__HOST", "ndo.lab.example.net");
        jail.set_env("NDOMIG_CONTROLLER__USERNAME", "svc-migrate");
        jail.set_env("NDOMIG_CONTROLLER__PASSWORD", "hunter2");

        let config: NdoConfig = NdoConfig::figment().extract()?;
        assert_eq!(config.controller.host, "ndo.lab.example.net");
        assert!(config.controller.require_complete().is_ok());
        Ok(())
    });
}

#[test]
fn env_vars_override_nested_migrate_settings() {
    Jail::expect_with(|jail| {
        jail.set_env("NDOMIG_MIGRATE__GRACE_SECS", "10");
        jail.set_env("NDOMIG_MIGRATE__POLL_ATTEMPTS", "5");

        let config: NdoConfig = NdoConfig::figment().extract()?;
        assert_eq!(config.migrate.grace_secs, 10);
        assert_eq!(config.migrate.poll_attempts, 5);
        // Untouched fields keep their defaults.
        assert_eq!(config.migrate.poll_interval_ms, 500);
        Ok(())
    });
}
