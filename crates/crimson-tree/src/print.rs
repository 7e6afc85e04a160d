//! Level-order textual dump for inspection and debugging.
//!
//! Read-only consumer of the tree: it touches values, colors, and child
//! presence, nothing else. Not part of the data contract.

use std::fmt::{Display, Write};

use crate::tree::RbTree;
use crate::types::NIL;
use crate::util::{color, l, r, value};

/// Renders the tree one level per line.
///
/// Each live node prints as `(value,B)` or `(value,R)`; each absent child of
/// a printed node as `(nil)`. The line holding the deepest live nodes is the
/// last. An empty tree is a single `(nil)` line.
pub fn dump<T: Ord + Display>(tree: &RbTree<T>) -> String {
    let mut out = String::new();
    if tree.is_empty() {
        out.push_str("(nil)\n");
        return out;
    }

    let mut level = vec![tree.root];
    while !level.is_empty() {
        let mut children = Vec::new();
        let mut live = 0usize;
        for &n in &level {
            if n == NIL {
                out.push_str("(nil)");
                continue;
            }
            let _ = write!(
                out,
                "({},{})",
                value(&tree.arena, n),
                color(&tree.arena, n).letter()
            );
            for child in [l(&tree.arena, n), r(&tree.arena, n)] {
                if child != NIL {
                    live += 1;
                }
                children.push(child);
            }
        }
        out.push('\n');
        level = if live != 0 { children } else { Vec::new() };
    }
    out
}
