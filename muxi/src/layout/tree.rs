// Copyright (c) 2026 the muxi authors. Licensed under Apache License, Version 2.0.

//! Tree surgery: split, delete, focus, find, reshape.

use strum_macros::Display;
use thiserror::Error;

use super::{Rect, MIN_VIEW_DIM};

/// Index into the tree's node arena.
pub type NodeId = usize;

/// Key of a view owned by the mux.
pub type ViewId = usize;

/// Split orientation. `Horizontal` places children side by side (the
/// separator is a column); `Vertical` stacks them (the separator is a row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("view too small to split: both children must be at least {MIN_VIEW_DIM}x{MIN_VIEW_DIM}")]
    RegionTooSmall,
}

#[derive(Debug)]
enum NodeKind {
    Leaf(ViewId),
    Split {
        orientation: Orientation,
        first: NodeId,
        second: NodeId,
    },
}

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    rect: Rect,
    kind: NodeKind,
}

/// What `delete` did.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The last view was deleted; the tree is empty and the program should
    /// exit.
    LastView,
    /// The sibling subtree was promoted; apply these reshape assignments.
    Promoted { assignments: Vec<(ViewId, Rect)> },
}

/// One separator line between the two children of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Vertical line: `(x, y, len)` — drawn down a column.
    Column { x: u16, y: u16, len: u16 },
    /// Horizontal line: `(y, x, len)` — drawn across a row.
    Row { y: u16, x: u16, len: u16 },
}

#[derive(Debug)]
pub struct LayoutTree {
    nodes: Vec<Option<Node>>,
    root: Option<NodeId>,
    focused: NodeId,
    last_focused: NodeId,
}

impl LayoutTree {
    /// A tree holding a single view covering `rect`.
    #[must_use]
    pub fn new(rect: Rect, view: ViewId) -> Self {
        let root = Node {
            parent: None,
            rect,
            kind: NodeKind::Leaf(view),
        };
        Self {
            nodes: vec![Some(root)],
            root: Some(0),
            focused: 0,
            last_focused: 0,
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(id) = self.nodes.iter().position(Option::is_none) {
            self.nodes[id] = Some(node);
            id
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id].as_ref().expect("live node id")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id].as_mut().expect("live node id")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    #[must_use]
    pub fn root_rect(&self) -> Option<Rect> { self.root.map(|id| self.node(id).rect) }

    /// The focused view. The tree always has a focused leaf while non-empty.
    #[must_use]
    pub fn focused_view(&self) -> Option<ViewId> {
        self.root?;
        match self.node(self.focused).kind {
            NodeKind::Leaf(view) => Some(view),
            NodeKind::Split { .. } => None,
        }
    }

    #[must_use]
    pub fn focused_rect(&self) -> Option<Rect> {
        self.root?;
        Some(self.node(self.focused).rect)
    }

    fn leaf_of_view(&self, view: ViewId) -> Option<NodeId> {
        self.nodes.iter().enumerate().find_map(|(id, slot)| {
            matches!(slot, Some(Node { kind: NodeKind::Leaf(v), .. }) if *v == view)
                .then_some(id)
        })
    }

    fn first_leaf(&self, id: NodeId) -> NodeId {
        let mut cursor = id;
        loop {
            match self.node(cursor).kind {
                NodeKind::Leaf(_) => return cursor,
                NodeKind::Split { first, .. } => cursor = first,
            }
        }
    }

    /// Focus a node, descending to its first-child-most view; updates the
    /// previous-focus trail only when focus actually moves.
    pub fn focus_node(&mut self, id: NodeId) {
        let leaf = self.first_leaf(id);
        if leaf != self.focused {
            self.last_focused = self.focused;
            self.focused = leaf;
        }
    }

    /// Focus the previously focused view, if it is still alive.
    pub fn focus_previous(&mut self) {
        if self.nodes.get(self.last_focused).map(Option::is_some) == Some(true) {
            self.focus_node(self.last_focused);
        }
    }

    /// Deepest node whose rectangle encloses `(y, x)`, or `None` when the
    /// point lies outside the root.
    #[must_use]
    pub fn find(&self, y: i32, x: i32) -> Option<NodeId> {
        let mut cursor = self.root.filter(|&id| self.node(id).rect.contains(y, x))?;
        loop {
            match self.node(cursor).kind {
                NodeKind::Leaf(_) => return Some(cursor),
                NodeKind::Split { first, second, .. } => {
                    if self.node(first).rect.contains(y, x) {
                        cursor = first;
                    } else if self.node(second).rect.contains(y, x) {
                        cursor = second;
                    } else {
                        return Some(cursor);
                    }
                }
            }
        }
    }

    /// The view whose rectangle encloses `(y, x)`, resolving containers to
    /// their first descendant view.
    #[must_use]
    pub fn view_at(&self, y: i32, x: i32) -> Option<ViewId> {
        let mut cursor = self.find(y, x)?;
        loop {
            match self.node(cursor).kind {
                NodeKind::Leaf(view) => return Some(view),
                NodeKind::Split { first, .. } => cursor = first,
            }
        }
    }

    /// Probe point for a directional focus move out of `rect`: two cells
    /// past the relevant edge, centered on the other axis.
    #[must_use]
    pub fn probe_point(rect: Rect, direction: Direction) -> (i32, i32) {
        let (y, x, h, w) = (
            i32::from(rect.y),
            i32::from(rect.x),
            i32::from(rect.h),
            i32::from(rect.w),
        );
        match direction {
            Direction::Up => (y - 2, x + w / 2),
            Direction::Down => (y + h + 2, x + w / 2),
            Direction::Left => (y + h / 2, x - 2),
            Direction::Right => (y + h / 2, x + w + 2),
        }
    }

    /// Move focus to the neighbour in `direction`; focus is unchanged when
    /// no neighbour exists there.
    pub fn focus_direction(&mut self, direction: Direction) {
        let Some(rect) = self.focused_rect() else {
            return;
        };
        let (y, x) = Self::probe_point(rect, direction);
        if let Some(target) = self.find(y, x) {
            self.focus_node(target);
        }
    }

    /// Child rectangles for a container, per the division rule: the first
    /// child gets the floor half, one line is the separator, the second
    /// child gets the rest.
    fn divide(rect: Rect, orientation: Orientation) -> (Rect, Rect) {
        match orientation {
            Orientation::Horizontal => {
                let left = Rect::new(rect.y, rect.x, rect.h, rect.w / 2);
                let right = Rect::new(
                    rect.y,
                    rect.x + rect.w / 2 + 1,
                    rect.h,
                    rect.w.saturating_sub(rect.w / 2 + 1),
                );
                (left, right)
            }
            Orientation::Vertical => {
                let top = Rect::new(rect.y, rect.x, rect.h / 2, rect.w);
                let bottom = Rect::new(
                    rect.y + rect.h / 2 + 1,
                    rect.x,
                    rect.h.saturating_sub(rect.h / 2 + 1),
                    rect.w,
                );
                (top, bottom)
            }
        }
    }

    fn fits(rect: Rect) -> bool { rect.h >= MIN_VIEW_DIM && rect.w >= MIN_VIEW_DIM }

    /// The child rectangles a split of the focused view would produce,
    /// without touching the tree. Lets the caller spawn the new view's PTY
    /// first and abandon the whole operation if that fails.
    pub fn preview_split(&self, orientation: Orientation) -> Result<(Rect, Rect), SplitError> {
        if self.root.is_none() {
            return Err(SplitError::RegionTooSmall);
        }
        let rect = self.node(self.focused).rect;
        let (first, second) = Self::divide(rect, orientation);
        if !Self::fits(first) || !Self::fits(second) {
            return Err(SplitError::RegionTooSmall);
        }
        Ok((first, second))
    }

    /// Split the focused view, wrapping it in a new container whose second
    /// child is `new_view`. Returns the reshape assignments for both
    /// children; the tree is untouched on failure.
    pub fn split(
        &mut self,
        orientation: Orientation,
        new_view: ViewId,
    ) -> Result<Vec<(ViewId, Rect)>, SplitError> {
        let leaf = self.focused;
        let rect = self.node(leaf).rect;
        let (first_rect, second_rect) = Self::divide(rect, orientation);
        if !Self::fits(first_rect) || !Self::fits(second_rect) {
            return Err(SplitError::RegionTooSmall);
        }

        let parent = self.node(leaf).parent;
        let container = self.alloc(Node {
            parent,
            rect,
            kind: NodeKind::Leaf(0), // patched below once children exist
        });
        let second = self.alloc(Node {
            parent: Some(container),
            rect: second_rect,
            kind: NodeKind::Leaf(new_view),
        });

        let old_view = match self.node(leaf).kind {
            NodeKind::Leaf(view) => view,
            NodeKind::Split { .. } => unreachable!("focused is always a leaf"),
        };
        {
            let node = self.node_mut(leaf);
            node.parent = Some(container);
            node.rect = first_rect;
        }
        self.node_mut(container).kind = NodeKind::Split {
            orientation,
            first: leaf,
            second,
        };

        match parent {
            None => self.root = Some(container),
            Some(p) => self.replace_child(p, leaf, container),
        }

        self.focus_node(second);
        Ok(vec![(old_view, first_rect), (new_view, second_rect)])
    }

    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if let NodeKind::Split { first, second, .. } = &mut self.node_mut(parent).kind {
            if *first == old {
                *first = new;
            } else if *second == old {
                *second = new;
            }
        }
    }

    /// Delete a view's leaf, promoting its sibling into the parent slot.
    pub fn delete(&mut self, view: ViewId) -> DeleteOutcome {
        let Some(leaf) = self.leaf_of_view(view) else {
            return DeleteOutcome::Promoted { assignments: Vec::new() };
        };

        let Some(parent) = self.node(leaf).parent else {
            // Deleting the root view shuts the tree down.
            self.nodes[leaf] = None;
            self.root = None;
            return DeleteOutcome::LastView;
        };

        let (sibling, parent_rect, grandparent) = {
            let parent_node = self.node(parent);
            let NodeKind::Split { first, second, .. } = parent_node.kind else {
                unreachable!("leaf parent is always a split")
            };
            let sibling = if first == leaf { second } else { first };
            (sibling, parent_node.rect, parent_node.parent)
        };

        // Promote the sibling into the parent's place.
        self.node_mut(sibling).parent = grandparent;
        match grandparent {
            None => self.root = Some(sibling),
            Some(g) => self.replace_child(g, parent, sibling),
        }

        let focus_dead = self.focused == leaf || self.focused == parent;
        self.nodes[leaf] = None;
        self.nodes[parent] = None;

        if focus_dead {
            self.focused = self.first_leaf(sibling);
        }
        if self.nodes.get(self.last_focused).map(Option::is_some) != Some(true) {
            self.last_focused = self.focused;
        }

        let assignments = self.reshape_node(sibling, parent_rect);
        DeleteOutcome::Promoted { assignments }
    }

    /// Reshape the whole tree to a new root rectangle (host resize).
    pub fn reshape_root(&mut self, rect: Rect) -> Vec<(ViewId, Rect)> {
        match self.root {
            Some(root) => self.reshape_node(root, rect),
            None => Vec::new(),
        }
    }

    /// Assign `rect` to a subtree, recursively re-dividing containers, and
    /// collect the view assignments.
    fn reshape_node(&mut self, id: NodeId, rect: Rect) -> Vec<(ViewId, Rect)> {
        let mut assignments = Vec::new();
        self.reshape_into(id, rect, &mut assignments);
        assignments
    }

    fn reshape_into(&mut self, id: NodeId, rect: Rect, out: &mut Vec<(ViewId, Rect)>) {
        self.node_mut(id).rect = rect;
        match self.node(id).kind {
            NodeKind::Leaf(view) => out.push((view, rect)),
            NodeKind::Split { orientation, first, second } => {
                let (first_rect, second_rect) = Self::divide(rect, orientation);
                self.reshape_into(first, first_rect, out);
                self.reshape_into(second, second_rect, out);
            }
        }
    }

    /// Every live view with its rectangle, in drawing order (first child
    /// before second).
    #[must_use]
    pub fn views(&self) -> Vec<(ViewId, Rect)> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.collect_views(root, &mut out);
        }
        out
    }

    fn collect_views(&self, id: NodeId, out: &mut Vec<(ViewId, Rect)>) {
        match self.node(id).kind {
            NodeKind::Leaf(view) => out.push((view, self.node(id).rect)),
            NodeKind::Split { first, second, .. } => {
                self.collect_views(first, out);
                self.collect_views(second, out);
            }
        }
    }

    /// Every separator line, in drawing order.
    #[must_use]
    pub fn separators(&self) -> Vec<Separator> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.collect_separators(root, &mut out);
        }
        out
    }

    fn collect_separators(&self, id: NodeId, out: &mut Vec<Separator>) {
        let rect = self.node(id).rect;
        if let NodeKind::Split { orientation, first, second } = self.node(id).kind {
            self.collect_separators(first, out);
            match orientation {
                Orientation::Horizontal => out.push(Separator::Column {
                    x: rect.mid_col(),
                    y: rect.y,
                    len: rect.h,
                }),
                Orientation::Vertical => out.push(Separator::Row {
                    y: rect.mid_row(),
                    x: rect.x,
                    len: rect.w,
                }),
            }
            self.collect_separators(second, out);
        }
    }
}

/// A directional focus command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
