use rdxenv_core::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SsrError {
    #[error("cannot render unknown node {0:?}")]
    UnknownNode(NodeId),

    #[error("failed to write rendered html: {0}")]
    Io(#[from] std::io::Error),
}

pub type SsrResult<T> = Result<T, SsrError>;
