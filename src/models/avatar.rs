#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use serde::Deserialize;

/// Avatar value meaning "draw the username initials instead of an image".
pub const INITIALS_AVATAR: &str = "username";

/// Shown in the initials badge while the username is still empty.
const EMPTY_INITIALS: &str = "Na";

const BADGE_COLORS: [&str; 16] = [
    "#EF4444", "#F97316", "#F59E0B", "#EAB308", "#84CC16", "#22C55E", "#10B981", "#14B8A6",
    "#06B6D4", "#0EA5E9", "#3B82F6", "#6366F1", "#8B5CF6", "#A855F7", "#D946EF", "#EC4899",
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Avatar {
    pub id: u32,
    pub name: String,
    pub url: String,
}

/// The fixed set of named avatars a user may pick from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AvatarCatalog {
    pub avatars: Vec<Avatar>,
}

impl AvatarCatalog {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// True for the initials sentinel and for every catalog name.
    pub fn accepts(&self, value: &str) -> bool {
        value == INITIALS_AVATAR || self.find(value).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&Avatar> {
        self.avatars.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Avatar> {
        self.avatars.iter()
    }
}

/// First two characters of `name`, or "Na" for an empty name.
pub fn initials(name: &str) -> String {
    let prefix: String = name.chars().take(2).collect();
    if prefix.is_empty() {
        EMPTY_INITIALS.to_string()
    } else {
        prefix
    }
}

/// Stable badge color derived from the characters of `name`.
pub fn badge_color(name: &str) -> &'static str {
    let index = name.chars().map(|c| c as usize).sum::<usize>() % BADGE_COLORS.len();
    BADGE_COLORS[index]
}
