use crate::config::{
    Config, Hotkey, MAX_CAPTURE_ATTEMPTS, MOD_ALT, MOD_CONTROL, MOD_SHIFT, RawConfig,
    find_duplicate_hotkeys,
};

fn ctrl_alt(key: u8) -> Option<Hotkey> {
    Some(Hotkey::new(MOD_CONTROL | MOD_ALT, u32::from(key)))
}

fn create_test_config(
    ml: Option<Hotkey>,
    fml: Option<Hotkey>,
    pause: Option<Hotkey>,
) -> Config {
    Config {
        hotkey_convert_ml: ml,
        hotkey_convert_fml: fml,
        hotkey_pause: pause,
        ..Default::default()
    }
}

#[test]
fn default_config_is_valid() {
    assert_eq!(Config::default().validate(), Ok(()));
}

#[test]
fn distinct_hotkeys_have_no_duplicates() {
    let cfg = create_test_config(ctrl_alt(b'1'), ctrl_alt(b'2'), ctrl_alt(b'P'));
    assert_eq!(find_duplicate_hotkeys(&cfg), None);
}

#[test]
fn unbound_hotkeys_never_collide() {
    let cfg = create_test_config(None, None, None);
    assert_eq!(find_duplicate_hotkeys(&cfg), None);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn same_key_with_different_modifiers_is_allowed() {
    let cfg = create_test_config(
        ctrl_alt(b'1'),
        Some(Hotkey::new(MOD_CONTROL | MOD_SHIFT, u32::from(b'1'))),
        None,
    );
    assert_eq!(find_duplicate_hotkeys(&cfg), None);
}

#[test]
fn duplicate_pair_is_reported_by_name() {
    let cfg = create_test_config(ctrl_alt(b'1'), ctrl_alt(b'1'), None);

    let msg = find_duplicate_hotkeys(&cfg).unwrap();
    assert!(msg.starts_with("Duplicate hotkeys found:"));
    assert!(msg.contains("• 'Convert selection to ML' and 'Convert selection to FML'"));
    assert!(msg.ends_with("Each action must have a unique hotkey."));
}

#[test]
fn every_colliding_pair_is_listed() {
    let cfg = create_test_config(ctrl_alt(b'1'), ctrl_alt(b'1'), ctrl_alt(b'1'));

    let msg = find_duplicate_hotkeys(&cfg).unwrap();
    assert_eq!(msg.matches('•').count(), 3);
    assert!(msg.contains("'Convert selection to FML' and 'Pause'"));
}

#[test]
fn hotkey_without_key_is_rejected() {
    let cfg = create_test_config(Some(Hotkey::new(MOD_CONTROL, 0)), None, None);

    let err = cfg.validate().unwrap_err();
    assert!(err.contains("Convert selection to ML"));
    assert!(err.contains("vk=0"));
}

#[test]
fn capture_attempts_must_be_in_range() {
    for attempts in [0, MAX_CAPTURE_ATTEMPTS + 1] {
        let cfg = Config {
            capture_attempts: attempts,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("capture_attempts"), "{err}");
    }

    for attempts in [1, MAX_CAPTURE_ATTEMPTS] {
        let cfg = Config {
            capture_attempts: attempts,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }
}

#[test]
fn raw_config_defaults_convert_to_default_config() {
    assert_eq!(Config::try_from(RawConfig::default()), Ok(Config::default()));
}

#[test]
fn raw_config_with_duplicates_fails_conversion() {
    let raw = RawConfig {
        hotkey_pause: ctrl_alt(b'1'),
        ..RawConfig::default()
    };

    let err = Config::try_from(raw).unwrap_err();
    assert!(err.contains("'Convert selection to ML' and 'Pause'"));
}
