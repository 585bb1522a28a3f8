//! Sibling-level decoration redistribution.
//!
//! Upstream tree edits that attach a directive wrapper per-node instead of
//! per-span leave two adjacent structural siblings carrying the same
//! marker string: one as its trailing text, the other as its leading text.
//! This pass migrates the duplicated leading marker onto the previous
//! sibling's trailing side and clears it down to a single-space separator.
//!
//! The work is split into an explicit plan/apply pair so the mutation of
//! the caller's tree is a visible contract rather than a side effect
//! buried in the walk. [`plan_redistribution`] simulates the scan on a
//! shadow copy of the decoration fields (so mutations made earlier in the
//! scan are visible to later iterations, exactly as if they were applied
//! in place) and returns complete replacement values;
//! [`apply_redistribution`] writes them back through the adapter.

use super::adapter::{NodeKind, TreeAdapter};

/// Replacement decoration values for one sibling, produced by
/// [`plan_redistribution`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecorEdit {
    /// Index into the sibling list the plan was computed for.
    pub index: usize,
    /// The node's complete new leading text.
    pub lead: Option<String>,
    /// The node's complete new trailing text.
    pub trail: Option<String>,
}

/// Plan the redistribution pass over one sibling level.
///
/// For each position `i`, the first following sibling that is neither
/// text nor comment is located; when that sibling's leading and trailing
/// texts are both present and equal, the leading text migrates to become
/// `i`'s trailing text, `i`'s previous trailing text becomes the
/// sibling's, and the sibling's leading text is reduced to a single
/// space.
///
/// This operates strictly within one sibling level and never inspects
/// ancestor or descendant decorations.
pub fn plan_redistribution<A: TreeAdapter>(adapter: &A, siblings: &[A::Handle]) -> Vec<DecorEdit> {
    let mut lead: Vec<Option<String>> = siblings.iter().map(|n| adapter.lead_text(n)).collect();
    let mut trail: Vec<Option<String>> = siblings.iter().map(|n| adapter.trail_text(n)).collect();
    let mut touched = vec![false; siblings.len()];

    for i in 0..siblings.len() {
        let Some(j) = next_structural(adapter, siblings, i + 1) else {
            continue;
        };

        let duplicated = matches!((&lead[j], &trail[j]), (Some(l), Some(t)) if l == t);
        if duplicated {
            let saved = trail[i].take();
            trail[i] = lead[j].clone();
            trail[j] = saved;
            lead[j] = Some(" ".to_string());
            touched[i] = true;
            touched[j] = true;
        }
    }

    (0..siblings.len())
        .filter(|&i| touched[i])
        .map(|index| DecorEdit {
            index,
            lead: lead[index].clone(),
            trail: trail[index].clone(),
        })
        .collect()
}

/// Write a plan back into the caller's tree.
pub fn apply_redistribution<A: TreeAdapter>(
    adapter: &A,
    siblings: &[A::Handle],
    edits: &[DecorEdit],
) {
    for edit in edits {
        adapter.set_lead_text(&siblings[edit.index], edit.lead.clone());
        adapter.set_trail_text(&siblings[edit.index], edit.trail.clone());
    }
}

/// Index of the first sibling at or after `from` whose kind is neither
/// text nor comment.
fn next_structural<A: TreeAdapter>(adapter: &A, siblings: &[A::Handle], from: usize) -> Option<usize> {
    (from..siblings.len()).find(|&i| {
        !matches!(
            adapter.node_kind(&siblings[i]),
            NodeKind::Text | NodeKind::Comment
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Handle, Node};
    use crate::serialize::DomAdapter;

    fn element_with(lead: Option<&str>, trail: Option<&str>) -> Handle {
        let el = Node::element("div");
        el.set_lead_text(lead.map(str::to_string));
        el.set_trail_text(trail.map(str::to_string));
        el
    }

    #[test]
    fn test_duplicated_marker_migrates() {
        let a = element_with(None, Some("Y"));
        let b = element_with(Some("X"), Some("X"));
        let siblings = vec![a.clone(), b.clone()];

        let edits = plan_redistribution(&DomAdapter, &siblings);
        apply_redistribution(&DomAdapter, &siblings, &edits);

        assert_eq!(a.trail_text(), Some("X".to_string()));
        assert_eq!(b.lead_text(), Some(" ".to_string()));
        assert_eq!(b.trail_text(), Some("Y".to_string()));
    }

    #[test]
    fn test_no_trailing_text_on_first_sibling() {
        let a = element_with(None, None);
        let b = element_with(Some("X"), Some("X"));
        let siblings = vec![a.clone(), b.clone()];

        let edits = plan_redistribution(&DomAdapter, &siblings);
        apply_redistribution(&DomAdapter, &siblings, &edits);

        assert_eq!(a.trail_text(), Some("X".to_string()));
        assert_eq!(b.lead_text(), Some(" ".to_string()));
        assert_eq!(b.trail_text(), None);
    }

    #[test]
    fn test_unequal_markers_untouched() {
        let a = element_with(None, Some("Y"));
        let b = element_with(Some("X"), Some("Z"));
        let siblings = vec![a.clone(), b.clone()];

        let edits = plan_redistribution(&DomAdapter, &siblings);
        assert!(edits.is_empty());
    }

    #[test]
    fn test_text_siblings_skipped_when_finding_next() {
        let a = element_with(None, Some("Y"));
        let text = Node::text("\n    ");
        let b = element_with(Some("X"), Some("X"));
        let siblings = vec![a.clone(), text, b.clone()];

        let edits = plan_redistribution(&DomAdapter, &siblings);
        apply_redistribution(&DomAdapter, &siblings, &edits);

        assert_eq!(a.trail_text(), Some("X".to_string()));
        assert_eq!(b.lead_text(), Some(" ".to_string()));
        assert_eq!(b.trail_text(), Some("Y".to_string()));
    }

    #[test]
    fn test_no_structural_successor_is_noop() {
        let a = element_with(Some("X"), Some("X"));
        let text = Node::text("tail");
        let siblings = vec![a.clone(), text];

        let edits = plan_redistribution(&DomAdapter, &siblings);
        assert!(edits.is_empty());
        assert_eq!(a.lead_text(), Some("X".to_string()));
    }

    #[test]
    fn test_pass_is_not_idempotent() {
        // Running the pass twice keeps moving markers; this is the
        // documented consumed-and-mutated contract.
        let a = element_with(None, Some(" "));
        let b = element_with(Some("X"), Some("X"));
        let siblings = vec![a.clone(), b.clone()];

        let edits = plan_redistribution(&DomAdapter, &siblings);
        apply_redistribution(&DomAdapter, &siblings, &edits);
        let first = (a.trail_text(), b.lead_text(), b.trail_text());

        let edits = plan_redistribution(&DomAdapter, &siblings);
        apply_redistribution(&DomAdapter, &siblings, &edits);
        let second = (a.trail_text(), b.lead_text(), b.trail_text());

        assert_ne!(first, second);
    }
}
