pub mod dom;
pub mod error;
pub mod mutations;
pub mod selector;

pub use dom::{
    Attribute, BoxSize, Document, Element, GenericArena, Node, NodeId, SharedDocument,
    StyleProperty, Text, lock, share,
};
pub use error::{DomError, DomResult};
pub use mutations::Mutation;
pub use selector::Selector;
