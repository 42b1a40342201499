//! Core `IntList` implementation.
//!
//! The list owns a singly-linked chain of nodes and caches its length. The abstract
//! state is the ordered run of values reached by walking `len()` links from `head`.
//! There is no tail pointer, so appending and removing both walk the chain.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use log::{debug, trace};

use super::node::{self, Link, Node};
use crate::error::{ListError, ListResult};

/// A mutable sequence of `i32` values stored as a singly-linked chain.
///
/// # Representation invariants
///
/// - walking `size` links from `head` never runs out of nodes;
/// - `head` is `None` exactly when `size == 0`;
/// - the node at position `size - 1` has no successor.
///
/// Every mutation re-checks these in debug builds.
pub struct IntList {
    head: Link,
    /// Cached node count.
    size: usize,
}

impl IntList {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Creates an empty list with no backing nodes.
    pub fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the element at `index`, walking `index` links from the head.
    ///
    /// Fails with [`ListError::IndexOutOfRange`] unless `index < len()`.
    pub fn element_at(&self, index: usize) -> ListResult<i32> {
        if index >= self.size {
            debug!("element_at({}) rejected: length is {}", index, self.size);
            return Err(ListError::index_out_of_range(index, self.size));
        }
        node::node_at(&self.head, index)
            .map(|n| n.value)
            .ok_or_else(|| ListError::index_out_of_range(index, self.size))
    }

    /// Returns a freshly allocated copy of the elements in order.
    ///
    /// The snapshot shares nothing with the list.
    pub fn to_vec(&self) -> Vec<i32> {
        let mut result = Vec::with_capacity(self.size);
        result.extend(self.iter());
        result
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Appends `element` as the new last element.
    pub fn add(&mut self, element: i32) {
        *node::end_link(&mut self.head) = Some(Node::new(element));
        self.size += 1;
        trace!("add({}): length now {}", element, self.size);
        debug_assert_eq!(self.check_rep(), Ok(()));
    }

    /// Detaches the last element and returns its value.
    ///
    /// Fails with [`ListError::EmptyList`] when the list is empty; the list is left untouched.
    pub fn remove_last(&mut self) -> ListResult<i32> {
        if self.size == 0 {
            debug!("remove_last rejected: list is empty");
            return Err(ListError::empty_list());
        }
        let tail = node::last_link(&mut self.head)
            .take()
            .ok_or_else(ListError::empty_list)?;
        self.size -= 1;
        trace!("remove_last() -> {}: length now {}", tail.value, self.size);
        debug_assert_eq!(self.check_rep(), Ok(()));
        Ok(tail.value)
    }

    // =========================================================================
    // REPRESENTATION
    // =========================================================================

    /// Returns the first `size` reachable nodes, in chain order.
    pub(crate) fn nodes(&self) -> Vec<&Node> {
        let mut nodes = Vec::with_capacity(self.size);
        let mut link = self.head.as_deref();
        while let Some(n) = link {
            if nodes.len() == self.size {
                break;
            }
            nodes.push(n);
            link = n.next.as_deref();
        }
        nodes
    }

    /// Verifies the representation invariants, describing the first violation found.
    pub(crate) fn check_rep(&self) -> Result<(), String> {
        let nodes = self.nodes();
        if nodes.len() < self.size {
            return Err(format!(
                "chain ends after {} nodes but size is {}",
                nodes.len(),
                self.size
            ));
        }
        match nodes.last() {
            None if self.head.is_some() => Err("empty list still owns a head node".to_string()),
            Some(last) if last.next.is_some() => Err(format!(
                "node at position {} has a successor",
                self.size - 1
            )),
            _ => Ok(()),
        }
    }
}

impl Default for IntList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for IntList {
    fn drop(&mut self) {
        node::release(self.head.take());
    }
}

impl Clone for IntList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for IntList {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for IntList {}

impl fmt::Debug for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Index<usize> for IntList {
    type Output = i32;

    /// Panics unless `index < len()`.
    fn index(&self, index: usize) -> &i32 {
        if index >= self.size {
            panic!("{}", ListError::index_out_of_range(index, self.size));
        }
        match node::node_at(&self.head, index) {
            Some(n) => &n.value,
            None => panic!("{}", ListError::index_out_of_range(index, self.size)),
        }
    }
}

impl Extend<i32> for IntList {
    /// Appends each value in turn, walking to the tail once.
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut added = 0;
        let mut link = node::end_link(&mut self.head);
        for value in iter {
            let appended = link.insert(Node::new(value));
            link = &mut appended.next;
            added += 1;
        }
        self.size += added;
        trace!("extend: appended {}, length now {}", added, self.size);
        debug_assert_eq!(self.check_rep(), Ok(()));
    }
}

impl FromIterator<i32> for IntList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl From<Vec<i32>> for IntList {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&IntList> for Vec<i32> {
    fn from(list: &IntList) -> Self {
        list.to_vec()
    }
}

impl<'a> IntoIterator for &'a IntList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// =============================================================================
// ITERATION
// =============================================================================

/// Borrowing iterator over an [`IntList`], yielding values front to back.
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let n = self.next?;
        self.next = n.next.as_deref();
        self.remaining -= 1;
        Some(n.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add(i32),
        RemoveLast,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => any::<i32>().prop_map(Op::Add),
            1 => Just(Op::RemoveLast),
        ]
    }

    fn values() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(any::<i32>(), 0..64)
    }

    proptest! {
        #[test]
        fn add_appends_and_keeps_prefix(initial in values(), element in any::<i32>()) {
            let mut list = IntList::from(initial.clone());
            let old_len = list.len();

            list.add(element);

            prop_assert_eq!(list.len(), old_len + 1);
            prop_assert_eq!(list.element_at(old_len), Ok(element));
            for (i, v) in initial.iter().enumerate() {
                prop_assert_eq!(list.element_at(i), Ok(*v));
            }
        }

        #[test]
        fn remove_last_shrinks_and_keeps_prefix(initial in values()) {
            prop_assume!(!initial.is_empty());
            let mut list = IntList::from(initial.clone());

            let removed = list.remove_last();

            prop_assert_eq!(removed, Ok(initial[initial.len() - 1]));
            prop_assert_eq!(list.len(), initial.len() - 1);
            for i in 0..list.len() {
                prop_assert_eq!(list.element_at(i), Ok(initial[i]));
            }
        }

        #[test]
        fn to_vec_agrees_with_element_at(initial in values()) {
            let list = IntList::from(initial);
            let snapshot = list.to_vec();

            prop_assert_eq!(snapshot.len(), list.len());
            for (i, v) in snapshot.iter().enumerate() {
                prop_assert_eq!(list.element_at(i), Ok(*v));
            }
            prop_assert!(list.element_at(list.len()).is_err());
        }

        #[test]
        fn add_then_remove_round_trips(initial in values(), element in any::<i32>()) {
            let mut list = IntList::from(initial);
            let before = list.to_vec();

            list.add(element);
            prop_assert_eq!(list.remove_last(), Ok(element));

            prop_assert_eq!(list.to_vec(), before);
        }

        #[test]
        fn behaves_like_vec(ops in prop::collection::vec(op_strategy(), 0..128)) {
            let mut list = IntList::new();
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    Op::Add(v) => {
                        list.add(v);
                        model.push(v);
                    }
                    Op::RemoveLast => {
                        let expected = model.pop().ok_or(ListError::EmptyList);
                        prop_assert_eq!(list.remove_last(), expected);
                    }
                }
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.check_rep(), Ok(()));
            }
            prop_assert_eq!(list.to_vec(), model);
        }
    }
}
