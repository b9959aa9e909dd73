//! Key codes tagged with semantic categories.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

bitflags::bitflags! {
    /// Semantic classes a key can belong to. A key may carry several.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyCategory: u32 {
        /// Function keys like F1, F2, ...
        const FUNCTION   = 1;
        /// Arrow keys plus Page Up/Down, Home, and End (including keypad keys)
        const NAVIGATION = 1 << 1;
        /// Left, right, up, down (including the keypad arrows)
        const ARROW      = 1 << 2;
        /// Keys that can act as a modifier
        const MODIFIER   = 1 << 3;
        /// Letter keys
        const LETTER     = 1 << 4;
        /// Digit keys (including the keypad digits)
        const DIGIT      = 1 << 5;
        /// Every key on the keypad
        const KEYPAD     = 1 << 6;
        /// Space, tab, and enter
        const WHITESPACE = 1 << 7;
        /// Multimedia keys (volume, track controls, ...)
        const MEDIA      = 1 << 8;
    }
}

impl KeyCategory {
    /// Parses a lowercase category name as used in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter_names()
            .find(|(flag_name, _)| flag_name.eq_ignore_ascii_case(name))
            .map(|(_, flag)| flag)
    }

    /// Lowercase names of the categories set in this mask.
    pub fn names(&self) -> Vec<String> {
        self.iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect()
    }
}

/// A platform key code paired with a display name and category mask.
///
/// Two key codes are equal, and hash identically, when their numeric `code`
/// matches. The name and categories do not take part in comparisons: the
/// code is the platform-level identity of the key.
#[derive(Clone, Debug)]
pub struct KeyCode {
    code: u32,
    name: Cow<'static, str>,
    categories: KeyCategory,
}

impl KeyCode {
    pub const DELETE: KeyCode = KeyCode::new(46, "Delete", KeyCategory::empty());
    pub const ESCAPE: KeyCode = KeyCode::new(27, "Escape", KeyCategory::empty());
    pub const BACK_SPACE: KeyCode = KeyCode::new(8, "Backspace", KeyCategory::empty());
    pub const ENTER: KeyCode = KeyCode::new(13, "Enter", KeyCategory::empty());

    pub const fn new(code: u32, name: &'static str, categories: KeyCategory) -> Self {
        Self {
            code,
            name: Cow::Borrowed(name),
            categories,
        }
    }

    /// Builds a key code with an owned name and a raw category mask.
    ///
    /// Bits outside the known categories are kept as-is.
    pub fn from_mask(code: u32, name: impl Into<String>, mask: u32) -> Self {
        Self {
            code,
            name: Cow::Owned(name.into()),
            categories: KeyCategory::from_bits_retain(mask),
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> KeyCategory {
        self.categories
    }

    /// The character whose code point equals this key code, if there is one.
    pub fn character(&self) -> Option<char> {
        char::from_u32(self.code)
    }

    pub fn is_function_key(&self) -> bool {
        self.categories.contains(KeyCategory::FUNCTION)
    }

    pub fn is_navigation_key(&self) -> bool {
        self.categories.contains(KeyCategory::NAVIGATION)
    }

    pub fn is_arrow_key(&self) -> bool {
        self.categories.contains(KeyCategory::ARROW)
    }

    pub fn is_modifier_key(&self) -> bool {
        self.categories.contains(KeyCategory::MODIFIER)
    }

    pub fn is_letter_key(&self) -> bool {
        self.categories.contains(KeyCategory::LETTER)
    }

    pub fn is_digit_key(&self) -> bool {
        self.categories.contains(KeyCategory::DIGIT)
    }

    pub fn is_keypad_key(&self) -> bool {
        self.categories.contains(KeyCategory::KEYPAD)
    }

    pub fn is_whitespace_key(&self) -> bool {
        self.categories.contains(KeyCategory::WHITESPACE)
    }

    pub fn is_media_key(&self) -> bool {
        self.categories.contains(KeyCategory::MEDIA)
    }
}

impl PartialEq for KeyCode {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for KeyCode {}

impl Hash for KeyCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
