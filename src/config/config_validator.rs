use std::fmt::Write as _;

use crate::config::{
    Config, Hotkey, MAX_CAPTURE_ATTEMPTS,
    constants::{CONVERT_FML, CONVERT_ML, PAUSE},
};

fn named_hotkeys(config: &Config) -> [(&'static str, Option<Hotkey>); 3] {
    [
        (CONVERT_ML, config.hotkey_convert_ml),
        (CONVERT_FML, config.hotkey_convert_fml),
        (PAUSE, config.hotkey_pause),
    ]
}

pub fn find_duplicate_hotkeys(config: &Config) -> Option<String> {
    let hotkeys = named_hotkeys(config);

    let duplicates: Vec<_> = hotkeys
        .iter()
        .enumerate()
        .filter_map(|(i, (name1, hk1_opt))| {
            hk1_opt.as_ref().map(|hk1| {
                hotkeys
                    .iter()
                    .skip(i + 1)
                    .filter_map(move |(name2, hk2_opt)| {
                        hk2_opt
                            .as_ref()
                            .filter(|hk2| hk1 == *hk2)
                            .map(|_| (*name1, *name2))
                    })
            })
        })
        .flatten()
        .collect();

    if duplicates.is_empty() {
        None
    } else {
        let mut error = String::from("Duplicate hotkeys found:\n\n");

        for (name1, name2) in &duplicates {
            // `String` implements `fmt::Write` infallibly; ignore the `fmt::Result` for clarity.
            let _ = writeln!(error, "• '{name1}' and '{name2}'");
        }

        error.push_str("\nEach action must have a unique hotkey.");
        Some(error)
    }
}

fn find_unbindable_hotkey(config: &Config) -> Option<String> {
    named_hotkeys(config)
        .into_iter()
        .find(|(_, hk)| hk.is_some_and(|hk| hk.vk == 0))
        .map(|(name, _)| format!("Hotkey for '{name}' has no key (vk=0)."))
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_CAPTURE_ATTEMPTS).contains(&self.capture_attempts) {
            return Err(format!(
                "capture_attempts must be between 1 and {MAX_CAPTURE_ATTEMPTS}, got {}.",
                self.capture_attempts
            ));
        }

        if let Some(error) = find_unbindable_hotkey(self) {
            return Err(error);
        }

        if let Some(error) = find_duplicate_hotkeys(self) {
            return Err(error);
        }

        Ok(())
    }
}
