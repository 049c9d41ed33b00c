use serde::{Deserialize, Serialize};
use std::fmt;

/// The JSON documents that make up the site's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentDocument {
    Clients,
    Projects,
    Films,
    Copy,
    Images,
    Hero,
    HeroConfig,
    BackgroundColours,
}

impl ContentDocument {
    pub const ALL: [ContentDocument; 8] = [
        ContentDocument::Clients,
        ContentDocument::Projects,
        ContentDocument::Films,
        ContentDocument::Copy,
        ContentDocument::Images,
        ContentDocument::Hero,
        ContentDocument::HeroConfig,
        ContentDocument::BackgroundColours,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ContentDocument::Clients => "clients.json",
            ContentDocument::Projects => "projects.json",
            ContentDocument::Films => "films.json",
            ContentDocument::Copy => "copy.json",
            ContentDocument::Images => "images.json",
            ContentDocument::Hero => "hero.json",
            ContentDocument::HeroConfig => "heroConfig.json",
            ContentDocument::BackgroundColours => "backgroundColour.json",
        }
    }

    /// Message returned to API clients when the document cannot be served.
    pub fn failure_message(self) -> &'static str {
        match self {
            ContentDocument::Clients => "Failed to load clients data",
            ContentDocument::Projects => "Failed to load projects data",
            ContentDocument::Films => "Failed to load filmography data",
            ContentDocument::Copy => "Failed to load copy data",
            ContentDocument::Images => "Failed to load images data",
            ContentDocument::Hero => "Failed to load hero data",
            ContentDocument::HeroConfig => "Failed to load hero configuration",
            ContentDocument::BackgroundColours => "Failed to load background colour data",
        }
    }
}

impl fmt::Display for ContentDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
