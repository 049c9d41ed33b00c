use rdxenv_content::ContentError;
use rdxenv_core::DomError;
use rdxenv_hero::HeroError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("invalid client id: {0:?}")]
    InvalidClientId(String),

    #[error("carousel has no items")]
    EmptyCarousel,

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Hero(#[from] HeroError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
