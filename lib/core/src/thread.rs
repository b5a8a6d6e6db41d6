use std::collections::{HashMap, HashSet};

use crate::comment::{Comment, ROOT_PARENT_ID};

/// Visual indentation added per reply level.
pub const INDENT_STEP_PX: u32 = 20;

/// A comment placed in render order, rebuilt from scratch on every pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderNode {
    pub comment: Comment,
    pub depth: u32,
}

impl RenderNode {
    pub fn indent_px(&self) -> u32 {
        self.depth * INDENT_STEP_PX
    }
}

/// Partitions `comments` into parent key -> ordered direct children,
/// preserving the input order within each group. Roots arrive pre-sorted by
/// the backend (pinned first, then by creation time), so input order is the
/// display order.
fn group_by_parent(comments: Vec<Comment>) -> HashMap<i64, Vec<Comment>> {
    let mut groups: HashMap<i64, Vec<Comment>> = HashMap::new();
    for comment in comments {
        groups.entry(comment.parent_key()).or_default().push(comment);
    }
    groups
}

/// Flattens a fetched comment set into depth-first pre-order: each comment
/// is followed by its replies at `depth + 1` before its next sibling.
///
/// Every record is emitted exactly once. Comments whose `parent_id` does not
/// resolve within the set would be unreachable from the root forest; those
/// stranded subtrees are appended after it at root indentation and a warning
/// is logged.
pub fn assemble_thread(comments: Vec<Comment>) -> Vec<RenderNode> {
    let total = comments.len();
    let mut groups = group_by_parent(comments);
    let mut nodes = Vec::with_capacity(total);

    emit_subtrees(&mut groups, ROOT_PARENT_ID, &mut nodes);

    if !groups.is_empty() {
        // A stranded subtree starts where the missing parent would be: its
        // key matches no comment id still waiting in a group. Keys that do
        // match a waiting comment are inner groups of some stranded subtree
        // and get consumed when that subtree is walked from its top.
        let waiting_ids: HashSet<i64> = groups.values().flatten().map(|comment| comment.id).collect();
        let mut stranded_keys: Vec<i64> = groups
            .keys()
            .copied()
            .filter(|key| !waiting_ids.contains(key))
            .collect();
        stranded_keys.sort_unstable();
        for key in stranded_keys {
            if let Some(stranded) = groups.get(&key) {
                log::warn!("{} comments reference parent {key} outside the fetched set", stranded.len());
                emit_subtrees(&mut groups, key, &mut nodes);
            }
        }
    }

    // Only cyclic parent references can still be waiting here. The backend
    // makes those impossible, but emit them anyway so no record is lost.
    if !groups.is_empty() {
        let mut cyclic_keys: Vec<i64> = groups.keys().copied().collect();
        cyclic_keys.sort_unstable();
        for key in cyclic_keys {
            if groups.contains_key(&key) {
                log::warn!("comments under parent {key} form a reference cycle");
                emit_subtrees(&mut groups, key, &mut nodes);
            }
        }
    }

    nodes
}

/// Emits the group keyed by `start_key` and, recursively, every reachable
/// descendant group. Uses an explicit stack, reply nesting is unbounded.
fn emit_subtrees(groups: &mut HashMap<i64, Vec<Comment>>, start_key: i64, nodes: &mut Vec<RenderNode>) {
    let Some(roots) = groups.remove(&start_key) else {
        return;
    };

    let mut stack = vec![(0u32, roots.into_iter())];
    while let Some((depth, siblings)) = stack.last_mut() {
        match siblings.next() {
            Some(comment) => {
                let depth = *depth;
                let comment_id = comment.id;
                nodes.push(RenderNode { comment, depth });
                if let Some(replies) = groups.remove(&comment_id) {
                    stack.push((depth + 1, replies.into_iter()));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}
