//! Equivalence classes of anagrams
//!
//! The cache is a disjoint-set forest over interned strings. Every string
//! belongs to exactly one class, so merging two strings that already sit in
//! different classes unites those classes instead of duplicating members.

use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use crate::core::compare::are_anagrams;
use crate::core::normalize::NormalizedString;

/// A partition of normalized strings into anagram classes
#[derive(Debug, Clone, Default)]
pub struct EquivalenceCache {
    /// Members in insertion order; a member's position is its id
    members: Vec<NormalizedString>,
    index: HashMap<NormalizedString, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

/// What a merge did to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Both strings were already in the same class
    Unchanged,
    /// Neither string was cached; a new class was appended
    Created,
    /// One string joined the class of the other
    Extended,
    /// The strings bridged two existing classes, which are now one
    United,
    /// Empty strings are never recorded
    Skipped,
}

impl MergeOutcome {
    /// Whether the merge modified the cache and needs flushing
    pub fn changed(self) -> bool {
        matches!(
            self,
            MergeOutcome::Created | MergeOutcome::Extended | MergeOutcome::United
        )
    }
}

impl EquivalenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        (0..self.parent.len())
            .filter(|&id| self.parent[id] == id)
            .count()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of distinct cached strings across all classes
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// True iff some class holds both `a` and `b`
    pub fn contains(&self, a: &NormalizedString, b: &NormalizedString) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&x), Some(&y)) => self.root(x) == self.root(y),
            _ => false,
        }
    }

    /// Record that `a` and `b` are anagrams.
    ///
    /// Callers must have confirmed the pair with
    /// [`are_anagrams`](crate::core::compare::are_anagrams) first.
    pub fn merge(&mut self, a: &NormalizedString, b: &NormalizedString) -> MergeOutcome {
        debug_assert!(are_anagrams(a, b), "merge of non-anagrams {a} / {b}");

        if a.is_empty() || b.is_empty() {
            debug!("Skipping merge of empty string");
            return MergeOutcome::Skipped;
        }

        let root_a = self.index.get(a).map(|&id| self.root(id));
        let root_b = self.index.get(b).map(|&id| self.root(id));

        let outcome = match (root_a, root_b) {
            (Some(x), Some(y)) if x == y => return MergeOutcome::Unchanged,
            (Some(_), Some(_)) => MergeOutcome::United,
            (Some(_), None) | (None, Some(_)) => MergeOutcome::Extended,
            (None, None) => MergeOutcome::Created,
        };

        let x = self.intern(a);
        let y = self.intern(b);
        self.union(x, y);

        debug!(a = %a, b = %b, ?outcome, "Merged anagram pair");
        outcome
    }

    /// Add a whole class at once, uniting it with any class it overlaps.
    ///
    /// Returns true when at least one member was already cached. Empty
    /// members are ignored.
    pub fn insert_class<'a, I>(&mut self, members: I) -> bool
    where
        I: IntoIterator<Item = &'a NormalizedString>,
    {
        let mut first: Option<usize> = None;
        let mut overlapped = false;

        for member in members {
            if member.is_empty() {
                continue;
            }
            if self.index.contains_key(member) {
                overlapped = true;
            }
            let id = self.intern(member);
            match first {
                Some(head) => self.union(head, id),
                None => first = Some(id),
            }
        }

        overlapped
    }

    /// Classes in creation order, members in insertion order
    pub fn classes(&self) -> Vec<Vec<&NormalizedString>> {
        let mut position: HashMap<usize, usize> = HashMap::new();
        let mut classes: Vec<Vec<&NormalizedString>> = Vec::new();

        for (id, member) in self.members.iter().enumerate() {
            let root = self.root(id);
            let slot = *position.entry(root).or_insert_with(|| {
                classes.push(Vec::new());
                classes.len() - 1
            });
            classes[slot].push(member);
        }

        classes
    }

    /// The class holding `s`, if cached
    pub fn class_of(&self, s: &NormalizedString) -> Option<Vec<&NormalizedString>> {
        let root = self.root(*self.index.get(s)?);
        Some(
            self.members
                .iter()
                .enumerate()
                .filter(|&(id, _)| self.root(id) == root)
                .map(|(_, m)| m)
                .collect(),
        )
    }

    fn intern(&mut self, s: &NormalizedString) -> usize {
        if let Some(&id) = self.index.get(s) {
            return id;
        }
        let id = self.members.len();
        self.members.push(s.clone());
        self.index.insert(s.clone(), id);
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    fn root(&self, mut id: usize) -> usize {
        while self.parent[id] != id {
            id = self.parent[id];
        }
        id
    }

    /// Find with path compression
    fn find(&mut self, mut id: usize) -> usize {
        let root = self.root(id);
        while self.parent[id] != root {
            let next = self.parent[id];
            self.parent[id] = root;
            id = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
    }
}
