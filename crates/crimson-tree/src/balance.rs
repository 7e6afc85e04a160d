//! Rotations and the two rebalancing state machines.
//!
//! Everything here is a free function over the arena. The root index is
//! threaded as `&mut u32` because a rotation at the top of the tree replaces
//! it. Rotations preserve in-order placement only; callers recolor.

use crate::types::{Color, Node, NIL};
use crate::util::{
    color, is_black, is_red, l, leftmost, p, r, set_black, set_color, set_l, set_p, set_r,
    set_red, successor, value,
};

/// Left-rotate around `x`, lifting its right child into `x`'s position.
pub(crate) fn rotate_left<T>(arena: &mut [Node<T>], root: &mut u32, x: u32) {
    let y = r(arena, x);
    let px = p(arena, x);
    if px != NIL {
        if l(arena, px) == x {
            set_l(arena, px, y);
        } else {
            set_r(arena, px, y);
        }
    } else {
        *root = y;
    }
    set_p(arena, y, px);

    let t = l(arena, y);
    set_r(arena, x, t);
    if t != NIL {
        set_p(arena, t, x);
    }
    set_l(arena, y, x);
    set_p(arena, x, y);
}

/// Right-rotate around `x`, lifting its left child into `x`'s position.
pub(crate) fn rotate_right<T>(arena: &mut [Node<T>], root: &mut u32, x: u32) {
    let y = l(arena, x);
    let px = p(arena, x);
    if px != NIL {
        if l(arena, px) == x {
            set_l(arena, px, y);
        } else {
            set_r(arena, px, y);
        }
    } else {
        *root = y;
    }
    set_p(arena, y, px);

    let t = r(arena, y);
    set_l(arena, x, t);
    if t != NIL {
        set_p(arena, t, x);
    }
    set_r(arena, y, x);
    set_p(arena, x, y);
}

/// Restore the red-black invariants after linking the red node `n`.
///
/// The only possible violation is red `n` under a red parent. Each iteration
/// either recolors and pushes the violation two levels up (red uncle) or
/// resolves it with at most two rotations (black uncle, triangle vs line).
pub(crate) fn fix_insert<T>(arena: &mut [Node<T>], root: &mut u32, mut n: u32) {
    // A red parent is never the sentinel and never the root, so the
    // grandparent reads below always land on real nodes.
    while is_red(arena, p(arena, n)) {
        let pa = p(arena, n);
        let g = p(arena, pa);
        if pa == l(arena, g) {
            let u = r(arena, g);
            if is_red(arena, u) {
                set_black(arena, u);
                set_black(arena, pa);
                set_red(arena, g);
                n = g;
            } else {
                if n == r(arena, pa) {
                    n = pa;
                    rotate_left(arena, root, n);
                }
                set_black(arena, p(arena, n));
                let g = p(arena, p(arena, n));
                set_red(arena, g);
                rotate_right(arena, root, g);
            }
        } else {
            let u = l(arena, g);
            if is_red(arena, u) {
                set_black(arena, u);
                set_black(arena, pa);
                set_red(arena, g);
                n = g;
            } else {
                if n == l(arena, pa) {
                    n = pa;
                    rotate_right(arena, root, n);
                }
                set_black(arena, p(arena, n));
                let g = p(arena, p(arena, n));
                set_red(arena, g);
                rotate_left(arena, root, g);
            }
        }
    }
    set_black(arena, *root);
}

/// Unlink the value at `n` from the tree and return it.
///
/// The structurally spliced node is `n` itself when it has a sentinel child,
/// otherwise its in-order successor, whose value is moved into `n`'s slot.
/// The spliced slot is dead afterwards; it keeps its stale links but no value.
pub(crate) fn remove_node<T>(arena: &mut [Node<T>], root: &mut u32, n: u32) -> T {
    let target = if l(arena, n) == NIL || r(arena, n) == NIL {
        n
    } else {
        leftmost(arena, r(arena, n))
    };

    // Link the replacement (possibly the sentinel) into the target's place.
    // Writing the sentinel's parent field here is what gives fix_remove a
    // concrete starting index when the replacement is absent.
    let rep = if l(arena, target) != NIL {
        l(arena, target)
    } else {
        r(arena, target)
    };
    let tp = p(arena, target);
    set_p(arena, rep, tp);
    if tp == NIL {
        *root = rep;
    } else if target == l(arena, tp) {
        set_l(arena, tp, rep);
    } else {
        set_r(arena, tp, rep);
    }

    let removed = if target == n {
        arena[n as usize].value.take()
    } else {
        let moved = arena[target as usize].value.take();
        std::mem::replace(&mut arena[n as usize].value, moved)
    }
    .expect("removed node holds a value");

    if is_black(arena, target) {
        fix_remove(arena, root, rep);
    }
    removed
}

/// Dissolve the double-black deficiency left at `n` after a black node was
/// spliced out above it.
///
/// Mirrored case split on which side of its parent `n` sits: a red sibling is
/// first rotated into a black one; an all-black sibling is recolored red and
/// the deficiency moves up; otherwise a red nephew is rotated to the far side
/// and one final rotation at the parent resolves the deficiency.
fn fix_remove<T>(arena: &mut [Node<T>], root: &mut u32, mut n: u32) {
    while n != *root && is_black(arena, n) {
        let pa = p(arena, n);
        if n == l(arena, pa) {
            let mut s = r(arena, pa);
            if is_red(arena, s) {
                set_black(arena, s);
                set_red(arena, pa);
                rotate_left(arena, root, pa);
                s = r(arena, pa);
            }
            if is_black(arena, l(arena, s)) && is_black(arena, r(arena, s)) {
                set_red(arena, s);
                n = pa;
            } else {
                if is_black(arena, r(arena, s)) {
                    set_black(arena, l(arena, s));
                    set_red(arena, s);
                    rotate_right(arena, root, s);
                    s = r(arena, pa);
                }
                set_color(arena, s, color(arena, pa));
                set_black(arena, pa);
                set_black(arena, r(arena, s));
                rotate_left(arena, root, pa);
                n = *root;
            }
        } else {
            let mut s = l(arena, pa);
            if is_red(arena, s) {
                set_black(arena, s);
                set_red(arena, pa);
                rotate_right(arena, root, pa);
                s = l(arena, pa);
            }
            if is_black(arena, l(arena, s)) && is_black(arena, r(arena, s)) {
                set_red(arena, s);
                n = pa;
            } else {
                if is_black(arena, l(arena, s)) {
                    set_black(arena, r(arena, s));
                    set_red(arena, s);
                    rotate_left(arena, root, s);
                    s = l(arena, pa);
                }
                set_color(arena, s, color(arena, pa));
                set_black(arena, pa);
                set_black(arena, l(arena, s));
                rotate_right(arena, root, pa);
                n = *root;
            }
        }
    }
    set_black(arena, n);
}

/// Structural validator: sentinel/root color, parent-link consistency, no
/// red-red adjacency, uniform black-height, and sorted in-order values.
pub(crate) fn check<T: Ord>(arena: &[Node<T>], root: u32) -> Result<(), String> {
    if color(arena, NIL) != Color::Black {
        return Err("sentinel is not black".to_string());
    }
    if root == NIL {
        return Ok(());
    }
    if p(arena, root) != NIL {
        return Err("root has a parent".to_string());
    }
    if !is_black(arena, root) {
        return Err("root is not black".to_string());
    }

    fn black_height<T>(arena: &[Node<T>], n: u32) -> Result<usize, String> {
        if n == NIL {
            return Ok(1);
        }
        let ln = l(arena, n);
        let rn = r(arena, n);
        if ln != NIL && p(arena, ln) != n {
            return Err("broken parent link on left child".to_string());
        }
        if rn != NIL && p(arena, rn) != n {
            return Err("broken parent link on right child".to_string());
        }
        if is_red(arena, n) && (is_red(arena, ln) || is_red(arena, rn)) {
            return Err("red node has a red child".to_string());
        }
        let lh = black_height(arena, ln)?;
        let rh = black_height(arena, rn)?;
        if lh != rh {
            return Err("black height mismatch".to_string());
        }
        Ok(lh + usize::from(is_black(arena, n)))
    }
    black_height(arena, root)?;

    let mut prev = NIL;
    let mut curr = leftmost(arena, root);
    while curr != NIL {
        if prev != NIL && value(arena, prev) > value(arena, curr) {
            return Err("in-order values out of order".to_string());
        }
        prev = curr;
        curr = successor(arena, curr);
    }
    Ok(())
}
