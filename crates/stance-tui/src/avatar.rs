//! Avatar resolution for event boxes.
//!
//! Events carry an opaque `image` reference. A terminal cannot show the
//! picture, so the default resolver draws the persona's initials instead.

use stance_engine::SentimentEvent;

/// A displayable avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// Short glyph drawn inside the box (at most two cells wide).
    pub glyph: String,
    /// The reference the avatar was resolved from.
    pub source: String,
}

/// Turns an event's image reference into something drawable.
pub trait AvatarResolver {
    fn resolve(&self, event: &SentimentEvent) -> Avatar;
}

/// Resolver that ignores the image and uses the persona's initials.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitialsResolver;

impl AvatarResolver for InitialsResolver {
    fn resolve(&self, event: &SentimentEvent) -> Avatar {
        Avatar {
            glyph: initials(&event.persona),
            source: event.image.clone(),
        }
    }
}

/// First letters of the first two words, uppercased. `?` when empty.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}
