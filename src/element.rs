//! In-memory model of the markup a carousel owns.
//!
//! An [`Element`] is the root region plus the parts the controller looks for
//! at construction: an optional inner region, the panes, the indicators and
//! the prev/next controls. Hosts build it from whatever they render with and
//! read the active flags and attributes back after each frame.

use std::collections::BTreeMap;
use std::fmt;

/// Host-provided identity of a carousel root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single markup node: an active flag (the `active` class) and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub active: bool,
    attributes: BTreeMap<String, String>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active() -> Self {
        Self { active: true, ..Self::default() }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Sets an attribute, returning the value it replaced.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        self.attributes.insert(name.to_string(), value.to_string())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Addresses one node of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef {
    Root,
    Inner,
    Pane(usize),
    Indicator(usize),
    PrevControl,
    NextControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    pub root: Node,
    pub inner: Option<Node>,
    pub panes: Vec<Node>,
    pub indicators: Vec<Node>,
    pub prev_control: Option<Node>,
    pub next_control: Option<Node>,
}

impl Element {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            root: Node::new(),
            inner: None,
            panes: Vec::new(),
            indicators: Vec::new(),
            prev_control: None,
            next_control: None,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Adds `count` inactive panes.
    pub fn with_panes(mut self, count: usize) -> Self {
        self.panes.extend((0..count).map(|_| Node::new()));
        self
    }

    pub fn with_pane(mut self, pane: Node) -> Self {
        self.panes.push(pane);
        self
    }

    /// Adds one inactive indicator per pane.
    pub fn with_indicators(mut self) -> Self {
        let missing = self.panes.len().saturating_sub(self.indicators.len());
        self.indicators.extend((0..missing).map(|_| Node::new()));
        self
    }

    pub fn with_inner(mut self) -> Self {
        self.inner = Some(Node::new());
        self
    }

    pub fn with_controls(mut self) -> Self {
        self.prev_control = Some(Node::new());
        self.next_control = Some(Node::new());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.root = self.root.with_attribute(name, value);
        self
    }

    pub fn node(&self, target: NodeRef) -> Option<&Node> {
        match target {
            NodeRef::Root => Some(&self.root),
            NodeRef::Inner => self.inner.as_ref(),
            NodeRef::Pane(i) => self.panes.get(i),
            NodeRef::Indicator(i) => self.indicators.get(i),
            NodeRef::PrevControl => self.prev_control.as_ref(),
            NodeRef::NextControl => self.next_control.as_ref(),
        }
    }

    pub fn node_mut(&mut self, target: NodeRef) -> Option<&mut Node> {
        match target {
            NodeRef::Root => Some(&mut self.root),
            NodeRef::Inner => self.inner.as_mut(),
            NodeRef::Pane(i) => self.panes.get_mut(i),
            NodeRef::Indicator(i) => self.indicators.get_mut(i),
            NodeRef::PrevControl => self.prev_control.as_mut(),
            NodeRef::NextControl => self.next_control.as_mut(),
        }
    }
}

struct JournalEntry {
    target: NodeRef,
    name: String,
    previous: Option<String>,
}

/// Records every attribute write so it can be undone in reverse order.
#[derive(Default)]
pub struct AttributeJournal {
    entries: Vec<JournalEntry>,
}

impl AttributeJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the attribute if the node exists. Missing nodes are skipped.
    pub fn set(&mut self, element: &mut Element, target: NodeRef, name: &str, value: &str) {
        if let Some(node) = element.node_mut(target) {
            let previous = node.set_attribute(name, value);
            self.entries.push(JournalEntry { target, name: name.to_string(), previous });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn restore(&mut self, element: &mut Element) {
        while let Some(entry) = self.entries.pop() {
            let Some(node) = element.node_mut(entry.target) else {
                continue;
            };
            match entry.previous {
                Some(value) => {
                    node.set_attribute(&entry.name, &value);
                }
                None => {
                    node.remove_attribute(&entry.name);
                }
            }
        }
    }
}
