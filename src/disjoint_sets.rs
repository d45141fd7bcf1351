// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Disjoint sets of integers in an interval [0 .. N-1] (Union-Find)
//!
//! The structure maintains a partition of [0 .. N-1] into equivalence
//! classes. It supports merging two classes and retrieving the
//! representative of an element's class, using both path compression
//! (during find) and tree weight balancing (during union). The amortized
//! cost per operation is bounded by the inverse of Ackermann's function,
//! which matches the known lower bound for the problem.
//!

use std::fmt::Display;

// Implementation:
// - cell[e] >= 0: parent pointer. e belongs to the tree rooted at the
//   ancestor reached by following parents.
// - cell[e] < 0: e is a root and -cell[e] is the number of elements in
//   its tree, so a fresh element holds -1.
// The root of a tree is the representative of its class. A union always
// attaches the smaller tree under the root of the larger one; on ties
// the second argument's root goes under the first's. Together with find
// that means unions driven in ascending element order keep the smallest
// member of every class at the root.

///
/// A partition of the integers [0 .. N-1] into disjoint classes
///
#[derive(Debug, Clone)]
pub struct DisjointSets {
    cell: Vec<i64>,
}

impl DisjointSets {
    ///
    /// Create a partition of [0 .. n-1] into n singleton classes
    ///
    pub fn new(n: usize) -> Self {
        DisjointSets { cell: vec![-1; n] }
    }

    ///
    /// Check whether element e is the representative of its class
    ///
    pub fn is_root(&self, e: u32) -> bool {
        self.cell[e as usize] < 0
    }

    ///
    /// Number of elements in the class rooted at e
    /// - e must be a root
    ///
    pub fn class_size(&self, e: u32) -> usize {
        debug_assert!(self.is_root(e));
        -self.cell[e as usize] as usize
    }

    ///
    /// Number of classes
    ///
    pub fn num_classes(&self) -> usize {
        self.cell.iter().filter(|&&c| c < 0).count()
    }

    ///
    /// Representative of the class containing element e
    ///
    /// Side effect: every node traversed on the way up is re-parented
    /// directly to the root, so later finds on the same path are O(1).
    ///
    pub fn find(&mut self, e: u32) -> u32 {
        debug_assert!((e as usize) < self.cell.len());

        // (a) locate the root of e's tree
        let mut root = e;
        while self.cell[root as usize] >= 0 {
            root = self.cell[root as usize] as u32;
        }

        // (b) path compression: point all members along the just-found
        // path directly to the root
        let mut i = e;
        while self.cell[i as usize] >= 0 {
            let parent = self.cell[i as usize] as u32;
            self.cell[i as usize] = root as i64;
            i = parent;
        }

        root
    }

    ///
    /// Merge the classes of a and b
    /// - no-op if a and b already share a root
    /// - otherwise the root of the smaller tree is attached under the
    ///   root of the larger tree; on ties b's root goes under a's
    ///
    pub fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // roots hold negated sizes: the more negative cell is the
            // larger tree
            if self.cell[ra as usize] <= self.cell[rb as usize] {
                self.cell[ra as usize] += self.cell[rb as usize];
                self.cell[rb as usize] = ra as i64;
            } else {
                self.cell[rb as usize] += self.cell[ra as usize];
                self.cell[ra as usize] = rb as i64;
            }
        }
    }

    ///
    /// Overwrite the cells of the given elements with the cells the same
    /// elements have in `other`
    ///
    /// The refiner uses this to substitute a finer partition of one
    /// class back into the main partition. The element set must be
    /// closed under `other`'s parent pointers, otherwise the
    /// parent-chain invariant breaks.
    ///
    pub fn copy_cells_from(&mut self, other: &DisjointSets, elements: &[u32]) {
        debug_assert_eq!(self.cell.len(), other.cell.len());
        for &e in elements {
            self.cell[e as usize] = other.cell[e as usize];
        }
    }
}

impl Display for DisjointSets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // non-compressing walk so that Display can take &self
        fn root_of(cell: &[i64], mut e: usize) -> usize {
            while cell[e] >= 0 {
                e = cell[e] as usize;
            }
            e
        }
        for r in 0..self.cell.len() {
            if self.cell[r] < 0 {
                write!(f, "class[{r}]:")?;
                for e in 0..self.cell.len() {
                    if root_of(&self.cell, e) == r {
                        write!(f, " {e}")?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
