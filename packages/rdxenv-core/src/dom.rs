use crate::error::{DomError, DomResult};
use crate::mutations::Mutation;
use crate::selector::Selector;
use slotmap::{Key, SlotMap, new_key_type};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

new_key_type! {
    pub struct NodeId;
}

impl NodeId {
    /// Numeric handle used in the mutation log.
    pub fn to_ffi(self) -> u64 {
        self.data().as_ffi()
    }
}

#[derive(Debug, Clone)]
pub struct GenericArena<T> {
    items: SlotMap<NodeId, T>,
}

impl<T> Default for GenericArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GenericArena<T> {
    pub fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
        }
    }
    pub fn insert(&mut self, item: T) -> NodeId {
        self.items.insert(item)
    }
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.items.get(id)
    }
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.items.get_mut(id)
    }
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.items.remove(id)
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Element(el) => el.parent,
            Node::Text(txt) => txt.parent,
        }
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            Node::Element(el) => el.parent = parent,
            Node::Text(txt) => txt.parent = parent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleProperty {
    pub name: String,
    pub value: String,
}

/// Measured size of an element's box, as reported by whoever lays the page out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub attributes: SmallVec<[Attribute; 4]>,
    pub classes: SmallVec<[String; 2]>,
    pub style: SmallVec<[StyleProperty; 4]>,
    pub children: SmallVec<[NodeId; 4]>,
    pub parent: Option<NodeId>,
    pub box_size: Option<BoxSize>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: SmallVec::new(),
            classes: SmallVec::new(),
            style: SmallVec::new(),
            children: SmallVec::new(),
            parent: None,
            box_size: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| prop.value.as_str())
    }

    /// Reads a length style property in pixels (`"800px"` or a bare number).
    pub fn style_px(&self, name: &str) -> Option<f64> {
        let raw = self.style_value(name)?.trim();
        let number = raw.strip_suffix("px").unwrap_or(raw).trim();
        number.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Serialized `style` attribute value, in insertion order.
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|prop| format!("{}: {};", prop.name, prop.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct Text {
    pub text: String,
    pub parent: Option<NodeId>,
}

/// An arena-backed HTML document.
///
/// Every change goes through a method on this type and is recorded in the
/// mutation log, which callers drain with [`Document::drain_mutations`].
#[derive(Debug, Clone)]
pub struct Document {
    nodes: GenericArena<Node>,
    root: NodeId,
    mutations: Vec<Mutation>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut nodes = GenericArena::new();
        let root = nodes.insert(Node::Element(Element::new("html")));
        Self {
            nodes,
            root,
            mutations: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some()
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.nodes.get(id) {
            Some(Node::Element(el)) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut Element> {
        match self.nodes.get_mut(id) {
            Some(Node::Element(el)) => Ok(el),
            Some(Node::Text(_)) => Err(DomError::NotAnElement(id)),
            None => Err(DomError::UnknownNode(id)),
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(Node::parent)
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = self.nodes.insert(Node::Element(Element::new(tag)));
        self.mutations.push(Mutation::CreateElement {
            name: tag.to_ascii_lowercase(),
            id: id.to_ffi(),
        });
        id
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        let id = self.nodes.insert(Node::Text(Text {
            text: text.to_string(),
            parent: None,
        }));
        self.mutations.push(Mutation::CreateTextNode {
            value: text.to_string(),
            id: id.to_ffi(),
        });
        id
    }

    fn ensure_insertable(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if !self.contains(child) {
            return Err(DomError::UnknownNode(child));
        }
        if self.element(parent).is_none() {
            return if self.contains(parent) {
                Err(DomError::NotAnElement(parent))
            } else {
                Err(DomError::UnknownNode(parent))
            };
        }
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                tracing::warn!(?parent, ?child, "rejected insert: node would contain itself");
                return Err(DomError::HierarchyRequest(child));
            }
            cursor = self.parent(current);
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(old_parent) = self.parent(id) else {
            return;
        };
        if let Some(Node::Element(el)) = self.nodes.get_mut(old_parent) {
            el.children.retain(|c| *c != id);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.set_parent(None);
        }
    }

    /// Appends `child` to `parent`, moving it out of any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.ensure_insertable(parent, child)?;
        self.detach(child);
        self.element_mut(parent)?.children.push(child);
        if let Some(node) = self.nodes.get_mut(child) {
            node.set_parent(Some(parent));
        }
        self.mutations.push(Mutation::AppendChild {
            parent: parent.to_ffi(),
            id: child.to_ffi(),
        });
        Ok(())
    }

    fn insert_relative(&mut self, reference: NodeId, node: NodeId, after: bool) -> DomResult<()> {
        let parent = self
            .parent(reference)
            .ok_or(DomError::UnknownNode(reference))?;
        self.ensure_insertable(parent, node)?;
        self.detach(node);
        let children = &mut self.element_mut(parent)?.children;
        let position = children
            .iter()
            .position(|c| *c == reference)
            .ok_or(DomError::UnknownNode(reference))?;
        children.insert(if after { position + 1 } else { position }, node);
        if let Some(inserted) = self.nodes.get_mut(node) {
            inserted.set_parent(Some(parent));
        }
        let (reference, id) = (reference.to_ffi(), node.to_ffi());
        self.mutations.push(if after {
            Mutation::InsertAfter { reference, id }
        } else {
            Mutation::InsertBefore { reference, id }
        });
        Ok(())
    }

    /// Inserts `node` as the next sibling of `reference`.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> DomResult<()> {
        self.insert_relative(reference, node, true)
    }

    /// Inserts `node` as the previous sibling of `reference`.
    pub fn insert_before(&mut self, reference: NodeId, node: NodeId) -> DomResult<()> {
        self.insert_relative(reference, node, false)
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(Node::Element(el)) = self.nodes.remove(current) {
                stack.extend(el.children);
            }
        }
    }

    /// Removes `id` and its whole subtree from the document.
    pub fn remove(&mut self, id: NodeId) -> DomResult<()> {
        if id == self.root {
            tracing::warn!("rejected removal of the document root");
            return Err(DomError::HierarchyRequest(id));
        }
        if !self.contains(id) {
            return Err(DomError::UnknownNode(id));
        }
        self.detach(id);
        self.drop_subtree(id);
        self.mutations.push(Mutation::Remove { id: id.to_ffi() });
        Ok(())
    }

    /// Removes every child of `id` (the `innerHTML = ''` operation).
    pub fn clear_children(&mut self, id: NodeId) -> DomResult<()> {
        let children = std::mem::take(&mut self.element_mut(id)?.children);
        for child in children {
            self.drop_subtree(child);
            self.mutations.push(Mutation::Remove { id: child.to_ffi() });
        }
        Ok(())
    }

    /// Sets an attribute. `class` replaces the class list; `style` is parsed
    /// into individual properties.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        match name {
            "class" => {
                let el = self.element_mut(id)?;
                el.classes = value.split_whitespace().map(str::to_string).collect();
            }
            "style" => {
                let el = self.element_mut(id)?;
                el.style = parse_style(value);
            }
            _ => {
                let el = self.element_mut(id)?;
                match el.attributes.iter_mut().find(|attr| attr.name == name) {
                    Some(attr) => attr.value = value.to_string(),
                    None => el.attributes.push(Attribute {
                        name: name.to_string(),
                        value: value.to_string(),
                    }),
                }
            }
        }
        self.mutations.push(Mutation::SetAttribute {
            name: name.to_string(),
            value: value.to_string(),
            id: id.to_ffi(),
        });
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        let el = self.element_mut(id)?;
        let before = el.attributes.len();
        el.attributes.retain(|attr| attr.name != name);
        if el.attributes.len() != before {
            self.mutations.push(Mutation::RemoveAttribute {
                name: name.to_string(),
                id: id.to_ffi(),
            });
        }
        Ok(())
    }

    /// Adds a class unless it is already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        let el = self.element_mut(id)?;
        if el.has_class(class) {
            return Ok(());
        }
        el.classes.push(class.to_string());
        self.mutations.push(Mutation::AddClass {
            name: class.to_string(),
            id: id.to_ffi(),
        });
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        let el = self.element_mut(id)?;
        if !el.has_class(class) {
            return Ok(());
        }
        el.classes.retain(|c| c != class);
        self.mutations.push(Mutation::RemoveClass {
            name: class.to_string(),
            id: id.to_ffi(),
        });
        Ok(())
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str, enabled: bool) -> DomResult<()> {
        if enabled {
            self.add_class(id, class)
        } else {
            self.remove_class(id, class)
        }
    }

    pub fn set_style(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let el = self.element_mut(id)?;
        match el.style.iter_mut().find(|prop| prop.name == name) {
            Some(prop) => prop.value = value.to_string(),
            None => el.style.push(StyleProperty {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
        self.mutations.push(Mutation::SetStyle {
            name: name.to_string(),
            value: value.to_string(),
            id: id.to_ffi(),
        });
        Ok(())
    }

    pub fn remove_style(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        let el = self.element_mut(id)?;
        let before = el.style.len();
        el.style.retain(|prop| prop.name != name);
        if el.style.len() != before {
            self.mutations.push(Mutation::RemoveStyle {
                name: name.to_string(),
                id: id.to_ffi(),
            });
        }
        Ok(())
    }

    /// Replaces the content of `id` with a single text node (or rewrites the
    /// text of a text node).
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        match self.nodes.get_mut(id) {
            Some(Node::Text(txt)) => {
                txt.text = text.to_string();
                self.mutations.push(Mutation::SetText {
                    value: text.to_string(),
                    id: id.to_ffi(),
                });
                Ok(())
            }
            Some(Node::Element(_)) => {
                self.clear_children(id)?;
                if !text.is_empty() {
                    let text_node = self.create_text(text);
                    self.append_child(id, text_node)?;
                }
                Ok(())
            }
            None => Err(DomError::UnknownNode(id)),
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let Some(Node::Text(txt)) = self.nodes.get(node) {
                out.push_str(&txt.text);
            }
        }
        out
    }

    pub fn set_box_size(&mut self, id: NodeId, size: BoxSize) -> DomResult<()> {
        self.element_mut(id)?.box_size = Some(size);
        Ok(())
    }

    /// Creates a `tag` element with the given classes and appends it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        classes: &[&str],
    ) -> DomResult<NodeId> {
        let id = self.create_element(tag);
        for class in classes {
            self.add_class(id, class)?;
        }
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Like [`Document::append_element`] with a single text child.
    pub fn append_text_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        classes: &[&str],
        text: &str,
    ) -> DomResult<NodeId> {
        let id = self.append_element(parent, tag, classes)?;
        self.set_text_content(id, text)?;
        Ok(id)
    }

    /// `id` followed by all of its descendants, in document order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.contains(id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&id| self.element(id).and_then(Element::id) == Some(element_id))
    }

    pub fn query_selector(&self, selector: &str) -> DomResult<Option<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(self.root)
            .into_iter()
            .find(|&id| selector.matches(self, id)))
    }

    pub fn query_selector_all(&self, selector: &str) -> DomResult<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(self.root)
            .into_iter()
            .filter(|&id| selector.matches(self, id))
            .collect())
    }

    pub fn mutation_count(&self) -> usize {
        self.mutations.len()
    }

    pub fn drain_mutations(&mut self) -> Vec<Mutation> {
        let mut mutations = Vec::new();
        std::mem::swap(&mut self.mutations, &mut mutations);
        mutations
    }
}

fn parse_style(value: &str) -> SmallVec<[StyleProperty; 4]> {
    value
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(StyleProperty {
                name: name.to_string(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}

/// A document shared between page initialisation and background tasks.
pub type SharedDocument = Arc<Mutex<Document>>;

pub fn share(document: Document) -> SharedDocument {
    Arc::new(Mutex::new(document))
}

/// Locks a shared document, ignoring poisoning: no `Document` method leaves
/// the arena half-updated.
pub fn lock(document: &SharedDocument) -> MutexGuard<'_, Document> {
    document.lock().unwrap_or_else(PoisonError::into_inner)
}
