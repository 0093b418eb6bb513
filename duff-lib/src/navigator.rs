//! Explicit state machine for walking the collection tree.
//!
//! The navigator owns no data: it borrows the tree and keeps a LIFO stack of
//! the folders entered so far together with the breadcrumb of their names.
//! It advances only on [`NavEvent`]s and ends in `Done`, `Cancelled` or
//! `Inconsistent`.

use crate::error::StructuralInconsistency;
use crate::model::{Node, NodeKind, Req};

/// Breadcrumb label of the top level.
pub const ROOT_LABEL: &str = "Main List";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Choose the entry at this position of the displayed list.
    Select(usize),
    Back,
    Cancel,
    /// Terminal size changed. Navigation state is not affected.
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState<'a> {
    Browsing,
    Done(&'a Req),
    Cancelled,
    Inconsistent(StructuralInconsistency),
}

impl NavState<'_> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, NavState::Browsing)
    }
}

#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    root: &'a [Node],
    current: &'a [Node],
    stack: Vec<&'a Node>,
    path: Vec<String>,
    state: NavState<'a>,
    selected: Option<&'a Node>,
    viewport: Option<(u16, u16)>,
}

impl<'a> Navigator<'a> {
    pub fn new(root: &'a [Node]) -> Self {
        Self {
            root,
            current: root,
            stack: Vec::new(),
            path: vec![ROOT_LABEL.to_string()],
            state: NavState::Browsing,
            selected: None,
            viewport: None,
        }
    }

    /// Entries of the level on display, in source order.
    pub fn current(&self) -> &'a [Node] {
        self.current
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn state(&self) -> &NavState<'a> {
        &self.state
    }

    /// The leaf chosen when the session ended in `Done`.
    pub fn selected(&self) -> Option<&'a Node> {
        self.selected
    }

    pub fn viewport(&self) -> Option<(u16, u16)> {
        self.viewport
    }

    /// Position of the first entry named `name` on the current level.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.current.iter().position(|n| n.name == name)
    }

    pub fn handle(&mut self, event: NavEvent) -> &NavState<'a> {
        if self.state.is_terminal() {
            tracing::debug!(?event, "navigation already finished, event ignored");
            return &self.state;
        }

        match event {
            NavEvent::Select(index) => self.select(index),
            NavEvent::Back => self.back(),
            NavEvent::Cancel => self.state = NavState::Cancelled,
            NavEvent::Resize { width, height } => self.viewport = Some((width, height)),
        }

        &self.state
    }

    fn select(&mut self, index: usize) {
        let current = self.current;
        let Some(node) = current.get(index) else {
            tracing::debug!(index, len = current.len(), "selection out of range");
            return;
        };

        match node.kind() {
            NodeKind::Folder(children) => {
                self.stack.push(node);
                self.path.push(node.name.clone());
                self.current = children;
                tracing::debug!(path = %self.path.join(" > "), "entered folder");
            }
            NodeKind::Leaf(req) => {
                tracing::debug!(name = %node.name, "request selected");
                self.selected = Some(node);
                self.state = NavState::Done(req);
            }
            NodeKind::Malformed => {
                let reason = if node.req.is_some() {
                    "request entry has children"
                } else {
                    "folder has no children"
                };
                let inconsistency = StructuralInconsistency {
                    node: node.name.clone(),
                    path: self.path.clone(),
                    reason: reason.to_string(),
                };
                tracing::warn!(%inconsistency, "aborting navigation");
                self.state = NavState::Inconsistent(inconsistency);
            }
        }
    }

    fn back(&mut self) {
        if self.stack.pop().is_none() {
            return;
        }
        self.path.pop();
        self.current = self
            .stack
            .last()
            .copied()
            .map_or(self.root, |parent| parent.children.as_slice());
    }
}
