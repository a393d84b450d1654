//! Emotion command dictionary.

use std::collections::HashMap;

use chatline_core::EmotionTable;

/// Built-in emotion keywords and their emotion type codes.
pub const BUILTIN_EMOTIONS: &[(&str, u8)] = &[
    ("!", 0),
    ("?", 1),
    ("ho", 2),
    ("lv", 3),
    ("swt", 4),
    ("ic", 5),
    ("an", 6),
    ("ag", 7),
    ("$", 8),
    ("...", 9),
    ("lv2", 14),
    ("thx", 15),
    ("wah", 16),
    ("sry", 17),
    ("heh", 18),
    ("swt2", 19),
    ("hmm", 20),
    ("no1", 21),
    ("??", 22),
    ("omg", 23),
    ("oh", 24),
    ("X", 25),
    ("hlp", 26),
    ("go", 27),
    ("sob", 28),
    ("gg", 29),
    ("kis", 30),
    ("kis2", 31),
    ("pif", 32),
    ("ok", 33),
    ("bzz", 36),
    ("rice", 37),
    ("awsm", 38),
    ("meh", 39),
    ("shy", 40),
    ("pat", 41),
    ("mp", 42),
    ("slur", 43),
    ("com", 44),
    ("yawn", 45),
    ("grat", 46),
    ("hp", 47),
];

/// Keyword → emotion code lookup.
#[derive(Debug, Clone)]
pub struct EmotionDictionary {
    entries: HashMap<String, u8>,
}

impl EmotionDictionary {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_EMOTIONS
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    /// Built-in table with `overrides` added on top.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, u8)>,
    {
        let mut dict = Self::builtin();
        dict.entries.extend(overrides);
        dict
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EmotionDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EmotionTable for EmotionDictionary {
    fn emotion(&self, keyword: &str) -> Option<u8> {
        self.entries.get(keyword).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_stable() {
        let dict = EmotionDictionary::builtin();
        assert_eq!(dict.emotion("lv"), Some(3));
        assert_eq!(dict.emotion("lv"), dict.emotion("lv"));
        assert_eq!(dict.emotion("nope"), None);
    }

    #[test]
    fn overrides_replace_and_extend() {
        let dict = EmotionDictionary::with_overrides([("lv".to_string(), 99), ("dance".to_string(), 50)]);
        assert_eq!(dict.emotion("lv"), Some(99));
        assert_eq!(dict.emotion("dance"), Some(50));
        assert_eq!(dict.emotion("!"), Some(0));
    }
}
