//! A small CSS selector subset: compound selectors (`tag`, `#id`, `.class`,
//! combined like `div.hero-block`) joined by the descendant combinator.

use crate::dom::{Document, Element, NodeId};
use crate::error::{DomError, DomResult};

#[derive(Debug, Clone, PartialEq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| el.has_class(class))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    source: String,
    // Left to right; every pair is related by the descendant combinator.
    parts: Vec<Compound>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

fn parse_compound(selector: &str, token: &str) -> DomResult<Compound> {
    let chars: Vec<char> = token.chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();

    if chars.first() == Some(&'*') {
        pos = 1;
    } else {
        let tag = take_ident(&chars, &mut pos);
        if !tag.is_empty() {
            compound.tag = Some(tag);
        }
    }

    while pos < chars.len() {
        let marker = chars[pos];
        pos += 1;
        let ident = take_ident(&chars, &mut pos);
        if ident.is_empty() {
            return Err(DomError::invalid_selector(
                selector,
                format!("expected a name after `{marker}`"),
            ));
        }
        match marker {
            '#' if compound.id.is_none() => compound.id = Some(ident),
            '#' => {
                return Err(DomError::invalid_selector(selector, "more than one id"));
            }
            '.' => compound.classes.push(ident),
            other => {
                return Err(DomError::invalid_selector(
                    selector,
                    format!("unsupported character `{other}`"),
                ));
            }
        }
    }
    Ok(compound)
}

impl Selector {
    pub fn parse(input: &str) -> DomResult<Self> {
        let parts = input
            .split_whitespace()
            .map(|token| parse_compound(input, token))
            .collect::<DomResult<Vec<_>>>()?;
        if parts.is_empty() {
            return Err(DomError::invalid_selector(input, "empty selector"));
        }
        Ok(Self {
            source: input.to_string(),
            parts,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((last, ancestors)) = self.parts.split_last() else {
            return false;
        };
        match doc.element(node) {
            Some(el) if last.matches(el) => {}
            _ => return false,
        }

        let mut cursor = doc.parent(node);
        for part in ancestors.iter().rev() {
            loop {
                let Some(current) = cursor else {
                    return false;
                };
                cursor = doc.parent(current);
                if doc.element(current).is_some_and(|el| part.matches(el)) {
                    break;
                }
            }
        }
        true
    }
}
