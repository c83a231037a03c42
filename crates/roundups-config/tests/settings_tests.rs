use roundups_config::{Settings, SettingsManager};
use roundups_domain::{PolicyPatch, RoundUpMethod};
use tempfile::tempdir;

#[test]
fn default_settings_carry_a_usable_policy() {
    let settings = Settings::default();

    assert!(settings.policy.is_enabled);
    assert!(settings.policy.minimum_round_up <= settings.policy.maximum_round_up);
    assert!(!settings.currency.is_empty());
    assert!(!settings.locale.is_empty());
}

#[test]
fn settings_persist_and_load() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::new(
        dir.path().join("settings.json"),
        dir.path().join("backups"),
    );

    let mut settings = Settings::default();
    settings.policy.apply(PolicyPatch {
        method: Some(RoundUpMethod::CustomAmount),
        custom_amount: Some(2.5),
        excluded_categories: Some(vec!["Fuel".into()]),
        ..PolicyPatch::default()
    });

    manager.save(&settings).expect("save settings");
    let loaded = manager.load().expect("load settings");

    assert_eq!(loaded.policy.method, RoundUpMethod::CustomAmount);
    assert_eq!(loaded.policy.custom_amount, Some(2.5));
    assert_eq!(loaded.policy.excluded_categories, vec!["fuel"]);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::new(
        dir.path().join("settings.json"),
        dir.path().join("backups"),
    );

    let loaded = manager.load().expect("load settings");
    assert!(loaded.policy.is_enabled);
}

#[test]
fn with_base_dir_lays_out_the_settings_tree() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::with_base_dir(dir.path().to_path_buf()).expect("layout");

    assert!(manager.settings_path().ends_with("settings/settings.json"));
    assert!(manager.backups_dir().is_dir());
}

#[test]
fn backups_round_trip_and_list_newest_first() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::with_base_dir(dir.path().to_path_buf()).expect("layout");

    let settings = Settings::default();
    let name = manager
        .backup(&settings, Some("Before Pilot!"))
        .expect("write backup");
    assert!(name.starts_with("settings_"));
    assert!(name.ends_with("_before-pilot.json"));

    let restored = manager.restore(&name).expect("restore backup");
    assert_eq!(restored.policy, settings.policy);

    let listing = manager.list_backups().expect("list backups");
    assert!(listing.contains(&name));

    let missing = manager.restore("settings_19990101_0000.json");
    assert!(missing.is_err());
}
