use rdxenv_core::DomError;

pub type HeroResult<T> = Result<T, HeroError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeroError {
    /// The target selector matched nothing; nothing was rendered.
    #[error("hero container not found: {0}")]
    MissingContainer(String),

    /// Configuration absent or malformed; rejected before any DOM mutation.
    #[error("invalid hero configuration: {0}")]
    InvalidConfig(String),

    /// The container has no usable size; it is left empty.
    #[error("hero container has degenerate dimensions {width}x{height}")]
    DegenerateDimensions { width: f64, height: f64 },

    #[error("background image pool is empty, tiles use fallback fills")]
    EmptyBackgroundPool,

    #[error("background colour pool has no valid #RRGGBB entries")]
    EmptyColorPool,

    #[error("layout produced no tiles")]
    EmptyLayout,

    #[error(transparent)]
    Dom(#[from] DomError),
}

impl HeroError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Non-fatal conditions degrade a cosmetic feature instead of aborting.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::EmptyBackgroundPool | Self::EmptyColorPool)
    }
}
