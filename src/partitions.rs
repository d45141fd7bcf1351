// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Partition of automaton states into equivalence classes
//!
//! Classes are refined according to the same-transition criterion: two
//! states stay in the same class if and only if they go to the same
//! class on every alphabet symbol (see Aho & Ullman's treatment of DFA
//! minimization). The partition lives in a [DisjointSets] structure;
//! refining a class means splitting it into singletons and re-merging
//! the members that still agree, which Tarjan's Union-Find does in
//! near-linear time.
//!

use tracing::trace;

use crate::{
    automata::{Dfa, StateAttrib, StateId},
    disjoint_sets::DisjointSets,
};

///
/// Seed a partition with at most two classes: the accepting states and
/// everything else. If either category is empty only the other class
/// exists. Dead states count as non-accepting.
///
pub fn init_partition(attribs: &[StateAttrib]) -> DisjointSets {
    let mut sets = DisjointSets::new(attribs.len());
    let mut accept_rep: Option<StateId> = None; // representative of the accept states
    let mut others_rep: Option<StateId> = None; // representative of the other states

    for (s, &a) in attribs.iter().enumerate() {
        let s = s as StateId;
        if a == StateAttrib::Accept {
            match accept_rep {
                None => accept_rep = Some(s), // no representative yet
                Some(r) => sets.union(r, s),
            }
        } else {
            match others_rep {
                None => others_rep = Some(s),
                Some(r) => sets.union(r, s),
            }
        }
    }
    sets
}

// Check whether s1 and s2 have equivalent transitions under the current
// partition: on every symbol both must go to the same class, where "no
// transition" is its own distinguished class.
fn same_transitions(dfa: &Dfa, sets: &mut DisjointSets, s1: StateId, s2: StateId) -> bool {
    for j in 0..dfa.alphabet_size() {
        let t1 = dfa.next(s1, j).map(|t| sets.find(t));
        let t2 = dfa.next(s2, j).map(|t| sets.find(t));
        if t1 != t2 {
            return false;
        }
    }
    true
}

// Substitute the scratch partition of one class back into the main
// partition if it is finer, i.e. if at least one member ended up with a
// different representative. Returns whether a substitution happened.
fn update_partition(
    sets: &mut DisjointSets,
    scratch: &mut DisjointSets,
    members: &[StateId],
) -> bool {
    let mut update = false;
    for &s in members {
        if sets.find(s) != scratch.find(s) {
            update = true; // at least one transition differed
            break;
        }
    }
    if update {
        sets.copy_cells_from(scratch, members);
    }
    update
}

///
/// One refinement sweep over all current classes
///
/// Every class with at least two members is split into sub-classes of
/// states that agree on the class of their successor for every symbol.
/// Returns true iff some class was split.
///
/// Splits take effect immediately: classes visited later in the same
/// sweep are checked against the already-updated partition instead of
/// the partition the sweep started from. A split is always a sound
/// refinement of the coarser partition, so the early update can only
/// surface further mandated splits within the sweep, never spurious
/// ones.
///
pub fn refine(dfa: &Dfa, sets: &mut DisjointSets) -> bool {
    let num_states = dfa.num_states() as StateId;
    let mut changed = false;
    let mut members: Vec<StateId> = Vec::new();

    for rep in 0..num_states {
        // only roots of classes with at least two members can split
        if !sets.is_root(rep) || sets.class_size(rep) < 2 {
            continue;
        }

        members.clear();
        for s in 0..num_states {
            if sets.find(s) == rep {
                members.push(s);
            }
        }

        //
        // Split the class into singletons, then re-merge the members
        // with equivalent transitions under the main partition. Every
        // member treated in the i-th pass is marked in unified[]: all
        // states equivalent to members[i] join its scratch class right
        // there, so later passes skip them. The relation is symmetric,
        // so checking pairs with i < j is enough.
        //
        let mut scratch = DisjointSets::new(num_states as usize);
        let mut unified = vec![false; num_states as usize];
        for i in 0..members.len() - 1 {
            let mi = members[i];
            if unified[mi as usize] {
                continue;
            }
            unified[mi as usize] = true;
            for j in i + 1..members.len() {
                let mj = members[j];
                if unified[mj as usize] {
                    continue;
                }
                if same_transitions(dfa, sets, mi, mj) {
                    scratch.union(mi, mj);
                    unified[mj as usize] = true;
                }
            }
        }

        if update_partition(sets, &mut scratch, &members) {
            trace!("split class of state {rep} ({} members)", members.len());
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reader::parse_dfa;

    #[test]
    fn test_init_partition() {
        use StateAttrib::*;

        let sets = &mut init_partition(&[Normal, Accept, Accept, Normal, Dead]);
        assert_eq!(sets.num_classes(), 2);
        assert_eq!(sets.find(1), sets.find(2));
        assert_eq!(sets.find(0), sets.find(3));
        assert_eq!(sets.find(0), sets.find(4));
        assert_ne!(sets.find(0), sets.find(1));
        // roots are the smallest members of their classes
        assert_eq!(sets.find(0), 0);
        assert_eq!(sets.find(1), 1);
    }

    #[test]
    fn test_init_partition_single_class() {
        use StateAttrib::*;

        let sets = &mut init_partition(&[Normal, Normal, Normal]);
        assert_eq!(sets.num_classes(), 1);
        assert_eq!(sets.find(2), 0);
    }

    #[test]
    fn test_refine_to_fixpoint() {
        // 0 and 1 both loop into the accept pair {2, 3}; 4 does not
        let dfa = parse_dfa(
            "5 2\n\
             a b\n\
             2 4\n\
             3 4\n\
             2 3\n\
             3 2\n\
             4 4\n\
             2 3",
        )
        .unwrap();

        let sets = &mut init_partition(dfa.attribs());
        assert_eq!(sets.num_classes(), 2);

        // first sweep splits {0, 1, 4} into {0, 1} and {4}
        assert!(refine(&dfa, sets));
        assert_eq!(sets.num_classes(), 3);
        assert_eq!(sets.find(0), sets.find(1));
        assert_ne!(sets.find(0), sets.find(4));
        assert_eq!(sets.find(2), sets.find(3));

        // nothing left to split
        assert!(!refine(&dfa, sets));
        assert_eq!(sets.num_classes(), 3);
    }

    #[test]
    fn test_refine_distinguishes_missing_transitions() {
        // state 1 has a transition where state 0 has none
        let dfa = parse_dfa("2 1\na\n-1\n0\n").unwrap();
        let sets = &mut init_partition(dfa.attribs());
        assert_eq!(sets.num_classes(), 1);
        assert!(refine(&dfa, sets));
        assert_ne!(sets.find(0), sets.find(1));
        assert!(!refine(&dfa, sets));
    }
}
