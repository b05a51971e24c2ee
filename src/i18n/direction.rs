// SPDX-License-Identifier: MPL-2.0
//! Text direction resolution.

use crate::config::Config;
use unic_langid::{CharacterDirection, LanguageIdentifier};

/// Writing direction used when aligning leading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Returns the direction of a parsed locale.
    #[must_use]
    pub fn of_locale(locale: &LanguageIdentifier) -> Self {
        match locale.character_direction() {
            CharacterDirection::RTL => TextDirection::RightToLeft,
            _ => TextDirection::LeftToRight,
        }
    }

    /// Parses `tag` and returns its direction, or `None` if it is not a valid locale.
    #[must_use]
    pub fn of_tag(tag: &str) -> Option<Self> {
        tag.parse::<LanguageIdentifier>()
            .ok()
            .map(|locale| Self::of_locale(&locale))
    }

    #[must_use]
    pub fn is_right_to_left(self) -> bool {
        self == TextDirection::RightToLeft
    }
}

/// Resolves the text direction from, in order, the CLI language, the
/// configured language and the OS locale.
pub fn resolve_direction(cli_lang: Option<&str>, config: &Config) -> TextDirection {
    // 1. Check CLI args
    if let Some(direction) = cli_lang.and_then(TextDirection::of_tag) {
        return direction;
    }

    // 2. Check config file
    if let Some(direction) = config.language.as_deref().and_then(TextDirection::of_tag) {
        return direction;
    }

    // 3. Check OS locale
    if let Some(direction) = sys_locale::get_locale()
        .as_deref()
        .and_then(TextDirection::of_tag)
    {
        return direction;
    }

    TextDirection::LeftToRight
}
