use serde::{Deserialize, Serialize};

/// One structural or attribute change applied to a [`crate::Document`].
///
/// Node ids are the ffi form of [`crate::NodeId`] so the log can be
/// serialized and compared across documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    CreateElement {
        name: String,
        id: u64,
    },
    CreateTextNode {
        value: String,
        id: u64,
    },
    AppendChild {
        parent: u64,
        id: u64,
    },
    InsertBefore {
        reference: u64,
        id: u64,
    },
    InsertAfter {
        reference: u64,
        id: u64,
    },
    SetAttribute {
        name: String,
        value: String,
        id: u64,
    },
    RemoveAttribute {
        name: String,
        id: u64,
    },
    AddClass {
        name: String,
        id: u64,
    },
    RemoveClass {
        name: String,
        id: u64,
    },
    SetStyle {
        name: String,
        value: String,
        id: u64,
    },
    RemoveStyle {
        name: String,
        id: u64,
    },
    SetText {
        value: String,
        id: u64,
    },
    Remove {
        id: u64,
    },
}

impl Mutation {
    /// The node this mutation targets.
    pub fn target(&self) -> u64 {
        match self {
            Mutation::CreateElement { id, .. }
            | Mutation::CreateTextNode { id, .. }
            | Mutation::AppendChild { id, .. }
            | Mutation::InsertBefore { id, .. }
            | Mutation::InsertAfter { id, .. }
            | Mutation::SetAttribute { id, .. }
            | Mutation::RemoveAttribute { id, .. }
            | Mutation::AddClass { id, .. }
            | Mutation::RemoveClass { id, .. }
            | Mutation::SetStyle { id, .. }
            | Mutation::RemoveStyle { id, .. }
            | Mutation::SetText { id, .. }
            | Mutation::Remove { id } => *id,
        }
    }
}
