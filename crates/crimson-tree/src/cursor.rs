//! Stateful in-order cursor with mid-iteration removal.

use crate::error::CursorError;
use crate::tree::RbTree;
use crate::types::NIL;
use crate::util::{l, leftmost, r, successor, value};

/// In-order traversal state, held outside the tree.
///
/// The cursor is a plain value: every operation takes the tree it walks as an
/// argument. While a cursor is live the tree must not be mutated through any
/// path other than [`Cursor::remove`]; interleaved `insert`/`remove` calls
/// on the tree leave the cursor pointing at stale slots.
///
/// One cursor at a time: [`RbTree::cursor`] always starts a fresh traversal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cursor {
    /// `None` until the first `next`; `NIL` once the walk has run off the end.
    current: Option<u32>,
    /// Set by `remove`: `current` already denotes the next element.
    removed: bool,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self {
            current: None,
            removed: false,
        }
    }

    /// Whether another [`next`](Cursor::next) would yield an element.
    pub fn has_next<T: Ord>(&self, tree: &RbTree<T>) -> bool {
        match self.current {
            None => !tree.is_empty(),
            Some(curr) if self.removed => curr != NIL,
            Some(curr) => curr != NIL && successor(&tree.arena, curr) != NIL,
        }
    }

    /// Advances to the next element in order and returns it.
    pub fn next<'a, T: Ord>(&mut self, tree: &'a RbTree<T>) -> Result<&'a T, CursorError> {
        let curr = match self.current {
            None => leftmost(&tree.arena, tree.root),
            Some(curr) if self.removed => {
                // The removal parked the cursor on the slot holding the next
                // element; yield it without advancing.
                self.removed = false;
                curr
            }
            Some(NIL) => NIL,
            Some(curr) => successor(&tree.arena, curr),
        };
        self.current = Some(curr);
        if curr == NIL {
            return Err(CursorError::Exhausted);
        }
        Ok(value(&tree.arena, curr))
    }

    /// Removes the element last returned by [`next`](Cursor::next).
    ///
    /// Fails before the first `next` and when called twice without an
    /// intervening `next`.
    pub fn remove<T: Ord>(&mut self, tree: &mut RbTree<T>) -> Result<(), CursorError> {
        let curr = match self.current {
            Some(curr) if curr != NIL && !self.removed => curr,
            _ => return Err(CursorError::InvalidState),
        };
        // With two real children the splice moves the successor's value into
        // this very slot, so the cursor stays put. Otherwise this node itself
        // is unlinked and the cursor parks on its in-order successor,
        // resolved while the links are still intact.
        let park = if l(&tree.arena, curr) != NIL && r(&tree.arena, curr) != NIL {
            curr
        } else {
            successor(&tree.arena, curr)
        };
        tree.remove_at(curr);
        self.current = Some(park);
        self.removed = true;
        Ok(())
    }
}
