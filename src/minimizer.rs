// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Minimization of deterministic finite-state automata
//!

//
// Pipeline, for an input automaton `dfa`:
// - seed a partition of the states with the accepting and
//   non-accepting classes
// - refine the partition by the same-transition criterion until no
//   class splits any further
// - compress: build a fresh automaton with one state per class
// - mark the dead states of the compressed automaton
//
// The compressed automaton is built before dead-state detection so the
// transitive closure runs once, on the smallest graph.
//

use tracing::debug;

use crate::{
    automata::{Dfa, StateAttrib, StateId},
    disjoint_sets::DisjointSets,
    partitions, reachability,
};

///
/// Minimize an automaton
///
/// The result accepts the same language with the minimum number of
/// states; dead states of the result are marked but kept, so the state
/// ids stay contiguous.
///
pub fn minimize(dfa: &Dfa) -> Dfa {
    let mut sets = partitions::init_partition(dfa.attribs());

    // refine equivalence classes until no further split occurs
    let mut sweeps = 1;
    while partitions::refine(dfa, &mut sets) {
        sweeps += 1;
    }
    debug!(
        "partition of {} states stable after {} sweeps: {} classes",
        dfa.num_states(),
        sweeps,
        sets.num_classes()
    );

    let mut out = compress(dfa, &mut sets);
    reachability::mark_dead(&mut out);
    out
}

//
// Build the compressed automaton: one state per equivalence class.
//
// The representative of a class is its member with the smallest id,
// which is exactly its Union-Find root (unions here always keep the
// smallest member on top). Representatives get new ids in ascending
// scan order, tracked by two mappings:
//     map[old] = new id, defined for representatives
//     pam[new] = old id of the representative (the inverse)
// Since members map to the (lower-numbered) id of their representative,
// original state names are not preserved.
//
fn compress(dfa: &Dfa, sets: &mut DisjointSets) -> Dfa {
    let num_states = dfa.num_states();
    let nab = dfa.alphabet_size();

    let mut root = vec![0 as StateId; num_states]; // representative of every state
    let mut map = vec![0 as StateId; num_states];
    let mut pam: Vec<StateId> = Vec::new();

    for s in 0..num_states as StateId {
        root[s as usize] = sets.find(s);
        if root[s as usize] == s {
            // s is the representative of its class
            map[s as usize] = pam.len() as StateId;
            pam.push(s);
        }
    }

    let rep_count = pam.len();
    debug_assert!(rep_count >= 1);

    let mut transitions = Vec::with_capacity(rep_count * nab);
    let mut attrib = Vec::with_capacity(rep_count);
    let mut accept = Vec::new();
    for i in 0..rep_count {
        let old = pam[i];
        for j in 0..nab {
            transitions.push(dfa.next(old, j).map(|t| map[root[t as usize] as usize]));
        }
        let a = dfa.attrib(old);
        attrib.push(a);
        if a == StateAttrib::Accept {
            accept.push(i as StateId);
        }
    }

    let initial_state = map[root[dfa.initial_state() as usize] as usize];
    debug!("compressed {num_states} states to {rep_count}");

    Dfa::from_parts(
        rep_count,
        dfa.alphabet().into(),
        transitions.into_boxed_slice(),
        initial_state,
        attrib.into_boxed_slice(),
        accept,
    )
}
