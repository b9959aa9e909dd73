//! Browser key-code table.
//!
//! Maps DOM `keyCode` values to classified [`KeyCode`]s. The standard table
//! covers the keys browsers report consistently; configuration can add or
//! override entries through [`KeyTable::with_overrides`].

use super::key_code::{KeyCategory, KeyCode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

const NAV: KeyCategory = KeyCategory::NAVIGATION;
const ARROW_NAV: KeyCategory = KeyCategory::ARROW.union(KeyCategory::NAVIGATION);
const MOD: KeyCategory = KeyCategory::MODIFIER;
const WS: KeyCategory = KeyCategory::WHITESPACE;
const MEDIA: KeyCategory = KeyCategory::MEDIA;
const PAD: KeyCategory = KeyCategory::KEYPAD;
const PAD_DIGIT: KeyCategory = KeyCategory::KEYPAD.union(KeyCategory::DIGIT);
const NONE: KeyCategory = KeyCategory::empty();

const LETTER_NAMES: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];
const DIGIT_NAMES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const NUMPAD_NAMES: [&str; 10] = [
    "Numpad0", "Numpad1", "Numpad2", "Numpad3", "Numpad4", "Numpad5", "Numpad6", "Numpad7",
    "Numpad8", "Numpad9",
];
const FUNCTION_NAMES: [&str; 12] = [
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
];

const NAMED_KEYS: &[(u32, &str, KeyCategory)] = &[
    (8, "Backspace", NONE),
    (9, "Tab", WS),
    (13, "Enter", WS),
    (16, "Shift", MOD),
    (17, "Ctrl", MOD),
    (18, "Alt", MOD),
    (19, "Pause", NONE),
    (20, "CapsLock", MOD),
    (27, "Escape", NONE),
    (32, "Space", WS),
    (33, "PageUp", NAV),
    (34, "PageDown", NAV),
    (35, "End", NAV),
    (36, "Home", NAV),
    (37, "Left", ARROW_NAV),
    (38, "Up", ARROW_NAV),
    (39, "Right", ARROW_NAV),
    (40, "Down", ARROW_NAV),
    (44, "PrintScreen", NONE),
    (45, "Insert", NONE),
    (46, "Delete", NONE),
    (91, "MetaLeft", MOD),
    (92, "MetaRight", MOD),
    (93, "ContextMenu", NONE),
    (106, "NumpadMultiply", PAD),
    (107, "NumpadAdd", PAD),
    (108, "NumpadEnter", PAD.union(WS)),
    (109, "NumpadSubtract", PAD),
    (110, "NumpadDecimal", PAD),
    (111, "NumpadDivide", PAD),
    (144, "NumLock", PAD.union(MOD)),
    (145, "ScrollLock", MOD),
    (173, "VolumeMute", MEDIA),
    (174, "VolumeDown", MEDIA),
    (175, "VolumeUp", MEDIA),
    (176, "MediaNextTrack", MEDIA),
    (177, "MediaPreviousTrack", MEDIA),
    (178, "MediaStop", MEDIA),
    (179, "MediaPlayPause", MEDIA),
    (181, "VolumeMuteFirefox", MEDIA),
    (182, "VolumeDownFirefox", MEDIA),
    (183, "VolumeUpFirefox", MEDIA),
    (186, "Semicolon", NONE),
    (187, "Equals", NONE),
    (188, "Comma", NONE),
    (189, "Minus", NONE),
    (190, "Period", NONE),
    (191, "Slash", NONE),
    (192, "Backquote", NONE),
    (219, "BracketLeft", NONE),
    (220, "Backslash", NONE),
    (221, "BracketRight", NONE),
    (222, "Quote", NONE),
    (224, "MetaFirefox", MOD),
];

static STANDARD: LazyLock<KeyTable> = LazyLock::new(KeyTable::build_standard);

/// A key-table entry as written in configuration files.
///
/// ```toml
/// [[keys]]
/// code = 226
/// name = "IntlBackslash"
/// categories = ["letter"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeyEntry {
    /// DOM key code
    pub code: u32,
    /// Display name
    pub name: String,
    /// Category names: function, navigation, arrow, modifier, letter, digit,
    /// keypad, whitespace, media
    #[serde(default)]
    pub categories: Vec<String>,
}

impl KeyEntry {
    /// Converts the entry into a key code, resolving category names.
    pub fn to_key_code(&self) -> Result<KeyCode, KeyTableError> {
        let mut categories = KeyCategory::empty();
        for name in &self.categories {
            let flag = KeyCategory::from_name(name).ok_or_else(|| KeyTableError::UnknownCategory {
                code: self.code,
                category: name.clone(),
            })?;
            categories |= flag;
        }
        Ok(KeyCode::from_mask(self.code, self.name.clone(), categories.bits()))
    }
}

/// Errors raised while building a key table from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyTableError {
    #[error("Unknown key category '{category}' for key code {code}")]
    UnknownCategory { code: u32, category: String },
}

/// Lookup table from DOM key codes to classified key codes.
#[derive(Debug, Clone)]
pub struct KeyTable {
    keys: BTreeMap<u32, KeyCode>,
}

impl KeyTable {
    /// The process-wide standard browser key table.
    pub fn standard() -> &'static KeyTable {
        &STANDARD
    }

    fn build_standard() -> KeyTable {
        let mut keys = BTreeMap::new();
        let mut insert = |key: KeyCode| {
            keys.insert(key.code(), key);
        };

        for &(code, name, categories) in NAMED_KEYS {
            insert(KeyCode::new(code, name, categories));
        }
        for (code, name) in (48..).zip(DIGIT_NAMES) {
            insert(KeyCode::new(code, name, KeyCategory::DIGIT));
        }
        for (code, name) in (65..).zip(LETTER_NAMES) {
            insert(KeyCode::new(code, name, KeyCategory::LETTER));
        }
        for (code, name) in (96..).zip(NUMPAD_NAMES) {
            insert(KeyCode::new(code, name, PAD_DIGIT));
        }
        for (code, name) in (112..).zip(FUNCTION_NAMES) {
            insert(KeyCode::new(code, name, KeyCategory::FUNCTION));
        }

        log::debug!("Built standard key table with {} entries", keys.len());
        KeyTable { keys }
    }

    /// Returns a copy of this table with `entries` added or replacing existing codes.
    pub fn with_overrides(&self, entries: &[KeyEntry]) -> Result<KeyTable, KeyTableError> {
        let mut table = self.clone();
        for entry in entries {
            let key = entry.to_key_code()?;
            if table.keys.insert(key.code(), key).is_some() {
                log::debug!("Key table entry {} overridden as '{}'", entry.code, entry.name);
            }
        }
        Ok(table)
    }

    pub fn get(&self, code: u32) -> Option<&KeyCode> {
        self.keys.get(&code)
    }

    /// Classifies a native key code. Unknown codes yield an uncategorized
    /// key named "Unknown".
    pub fn lookup(&self, code: u32) -> KeyCode {
        match self.keys.get(&code) {
            Some(key) => key.clone(),
            None => {
                log::trace!("No key table entry for code {}", code);
                KeyCode::new(code, "Unknown", KeyCategory::empty())
            }
        }
    }

    /// Finds a key by name, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&KeyCode> {
        self.keys.values().find(|key| key.name().eq_ignore_ascii_case(name))
    }

    /// Iterates over all entries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys.values()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_are_arrow_and_navigation() {
        let table = KeyTable::standard();
        for code in 37..=40 {
            let key = table.lookup(code);
            assert!(key.is_arrow_key() && key.is_navigation_key(), "{key}");
            assert!(!key.is_keypad_key());
        }
        assert!(table.lookup(33).is_navigation_key());
        assert!(!table.lookup(33).is_arrow_key());
    }

    #[test]
    fn ranges_are_classified() {
        let table = KeyTable::standard();
        assert_eq!(table.lookup(65).name(), "A");
        assert!(table.lookup(90).is_letter_key());
        assert_eq!(table.lookup(48).name(), "0");
        assert!(table.lookup(57).is_digit_key());
        let numpad = table.lookup(101);
        assert!(numpad.is_keypad_key() && numpad.is_digit_key());
        assert_eq!(table.lookup(123).name(), "F12");
        assert!(table.lookup(112).is_function_key());
        assert!(table.lookup(179).is_media_key());
        assert!(table.lookup(16).is_modifier_key());
        assert!(table.lookup(32).is_whitespace_key());
    }

    #[test]
    fn canonical_instances_match_table_entries() {
        let table = KeyTable::standard();
        for canonical in [KeyCode::DELETE, KeyCode::ESCAPE, KeyCode::BACK_SPACE, KeyCode::ENTER] {
            let entry = table.get(canonical.code()).expect("canonical key in table");
            assert_eq!(entry, &canonical);
            assert_eq!(entry.name(), canonical.name());
        }
        assert!(table.lookup(KeyCode::ENTER.code()).is_whitespace_key());
    }

    #[test]
    fn unknown_codes_fall_back() {
        let key = KeyTable::standard().lookup(999);
        assert_eq!(key.name(), "Unknown");
        assert_eq!(key.categories(), KeyCategory::empty());
        assert_eq!(key.code(), 999);
    }

    #[test]
    fn find_by_name_ignores_case() {
        let table = KeyTable::standard();
        assert_eq!(table.find_by_name("pagedown").map(KeyCode::code), Some(34));
        assert!(table.find_by_name("Hyper").is_none());
    }

    #[test]
    fn iteration_is_sorted_by_code() {
        let codes: Vec<u32> = KeyTable::standard().iter().map(KeyCode::code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert_eq!(codes.len(), KeyTable::standard().len());
    }

    #[test]
    fn overrides_replace_and_extend() {
        let entries = vec![
            KeyEntry {
                code: 226,
                name: "IntlBackslash".to_string(),
                categories: vec!["letter".to_string()],
            },
            KeyEntry {
                code: 19,
                name: "Break".to_string(),
                categories: vec!["Media".to_string(), "function".to_string()],
            },
        ];
        let table = KeyTable::standard().with_overrides(&entries).unwrap();
        assert!(table.lookup(226).is_letter_key());
        let pause = table.lookup(19);
        assert_eq!(pause.name(), "Break");
        assert!(pause.is_media_key() && pause.is_function_key());
        assert_eq!(table.len(), KeyTable::standard().len() + 1);
        // The shared table is untouched
        assert_eq!(KeyTable::standard().lookup(19).name(), "Pause");
    }

    #[test]
    fn overrides_reject_unknown_categories() {
        let entries = vec![KeyEntry {
            code: 1,
            name: "Odd".to_string(),
            categories: vec!["sideways".to_string()],
        }];
        assert_eq!(
            KeyTable::standard().with_overrides(&entries).unwrap_err(),
            KeyTableError::UnknownCategory {
                code: 1,
                category: "sideways".to_string()
            }
        );
    }
}
