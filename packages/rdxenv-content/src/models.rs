//! Typed views of the content documents. Every field the page scripts treat
//! as optional is defaulted, so a sparse document still decodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub logo: String,
    pub tagline: String,
    pub period: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    pub links: Vec<ClientLink>,
}

impl Client {
    /// Sort key; a missing order counts as zero.
    pub fn sort_order(&self) -> f64 {
        self.order.filter(|o| o.is_finite()).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientsDocument {
    pub clients: Vec<Client>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub description: String,
    pub image_url: String,
    pub alt_text: String,
}

/// Projects keyed by client id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsDocument {
    pub projects: BTreeMap<String, Vec<Project>>,
}

impl ProjectsDocument {
    pub fn for_client(&self, client_id: &str) -> &[Project] {
        self.projects
            .get(client_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A release year as it appears in `films.json`: either a number or a
/// string such as `"2021"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilmYear {
    Number(i64),
    Text(String),
}

impl FilmYear {
    /// Leading integer of the year, if it has one.
    pub fn value(&self) -> Option<i64> {
        match self {
            FilmYear::Number(n) => Some(*n),
            FilmYear::Text(text) => {
                let trimmed = text.trim_start();
                let end = trimmed
                    .char_indices()
                    .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
                    .map(|(i, _)| i)
                    .unwrap_or(trimmed.len());
                trimmed[..end].parse().ok()
            }
        }
    }
}

impl Default for FilmYear {
    fn default() -> Self {
        FilmYear::Text(String::new())
    }
}

impl fmt::Display for FilmYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilmYear::Number(n) => write!(f, "{n}"),
            FilmYear::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Film {
    pub id: String,
    pub title: String,
    pub year: FilmYear,
    pub client: String,
    pub duration: String,
    pub description: String,
    pub thumbnail_url: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilmsDocument {
    pub filmography: Vec<Film>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutCopy {
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactCopy {
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Platform name to profile URL; iterated in platform order.
    pub social: BTreeMap<String, Option<String>>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilmographyCopy {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyDocument {
    pub about: Option<AboutCopy>,
    pub contact: Option<ContactCopy>,
    pub filmography: Option<FilmographyCopy>,
}
