//! Chain storage for `IntList`.
//!
//! A chain is a run of boxed nodes, each exclusively owned by its predecessor's
//! `next` link (or by the list's `head` for the first node).

/// An owning link to the next node; `None` marks the end of the chain.
pub(crate) type Link = Option<Box<Node>>;

/// A single chain cell holding one value.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) next: Link,
}

impl Node {
    /// Allocates a detached node.
    pub(crate) fn new(value: i32) -> Box<Self> {
        Box::new(Self { value, next: None })
    }
}

// =============================================================================
// CHAIN WALKING
// =============================================================================

/// Walks to the empty link past the last node. For an empty chain this is `head` itself.
pub(crate) fn end_link(mut link: &mut Link) -> &mut Link {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Walks to the link that owns the last node.
///
/// Stops at the first link whose node has no successor, so for a single-node chain
/// this is `head`. An empty chain yields `head` unchanged.
pub(crate) fn last_link(mut link: &mut Link) -> &mut Link {
    while link.as_ref().map_or(false, |node| node.next.is_some()) {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}

/// Returns the node reached after `steps` links from `head`, if the chain is that long.
pub(crate) fn node_at(head: &Link, steps: usize) -> Option<&Node> {
    let mut node = head.as_deref()?;
    for _ in 0..steps {
        node = node.next.as_deref()?;
    }
    Some(node)
}

/// Releases a chain one node at a time.
///
/// The default drop glue for `Box<Node>` recurses once per node, which overflows the
/// stack on long chains.
pub(crate) fn release(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(values: &[i32]) -> Link {
        let mut head = None;
        for &v in values.iter().rev() {
            let mut node = Node::new(v);
            node.next = head;
            head = Some(node);
        }
        head
    }

    #[test]
    fn test_end_link_on_empty_chain_is_head() {
        let mut head: Link = None;
        *end_link(&mut head) = Some(Node::new(7));
        assert_eq!(node_at(&head, 0).map(|n| n.value), Some(7));
    }

    #[test]
    fn test_end_link_appends_after_tail() {
        let mut head = chain(&[1, 2]);
        *end_link(&mut head) = Some(Node::new(3));
        assert_eq!(node_at(&head, 2).map(|n| n.value), Some(3));
        assert!(node_at(&head, 3).is_none());
    }

    #[test]
    fn test_last_link_detaches_tail() {
        let mut head = chain(&[1, 2, 3]);
        let tail = last_link(&mut head).take();
        assert_eq!(tail.map(|n| n.value), Some(3));
        assert_eq!(node_at(&head, 1).map(|n| n.value), Some(2));
        assert!(node_at(&head, 2).is_none());
    }

    #[test]
    fn test_last_link_single_node_is_head() {
        let mut head = chain(&[42]);
        let tail = last_link(&mut head).take();
        assert_eq!(tail.map(|n| n.value), Some(42));
        assert!(head.is_none());
    }

    #[test]
    fn test_node_at() {
        let head = chain(&[5, 3, 9]);
        assert_eq!(node_at(&head, 0).map(|n| n.value), Some(5));
        assert_eq!(node_at(&head, 1).map(|n| n.value), Some(3));
        assert_eq!(node_at(&head, 2).map(|n| n.value), Some(9));
        assert!(node_at(&head, 3).is_none());
        assert!(node_at(&None, 0).is_none());
    }

    #[test]
    fn test_release_long_chain() {
        let mut head = None;
        for v in 0..200_000 {
            let mut node = Node::new(v);
            node.next = head;
            head = Some(node);
        }
        release(head);
    }
}
