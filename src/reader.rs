// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Reading automata from their text description
//!
//! The expected format is:
//! ```text
//! NSTATES NAB
//! L1 L2 ... Lnab
//! S11 S12 ... S1nab
//! ...
//! Sn1 Sn2 ... Snnab
//! A1 A2 ... Am
//! ```
//! where NSTATES is the number of states, NAB the alphabet size, each
//! Li a single non-white alphabet symbol, each Sij the target of the
//! transition from state i on the symbol in column j (a negative value
//! means "no transition"), and A1 ... Am are the accepting states,
//! running to the end of the input. Items may be separated by any
//! amount of whitespace; state ids are 0-based and state 0 is the
//! initial state.
//!

use crate::{
    automata::{Dfa, StateId},
    errors::{Error, Result},
};

///
/// Parse one DFA description
///
/// Everything after the transition matrix is read as the accept-state
/// list, so a description consumes its whole input.
///
/// # Errors
///
/// Malformed input produces the [Error](crate::errors::Error) variant
/// naming the violation and, where applicable, the offending value.
///
pub fn parse_dfa(input: &str) -> Result<Dfa> {
    let mut tokens = input.split_whitespace();

    let num_states = tokens
        .next()
        .and_then(|t| t.parse::<i64>().ok())
        .ok_or(Error::MissingHeader)?;
    let nab = tokens
        .next()
        .and_then(|t| t.parse::<i64>().ok())
        .ok_or(Error::MissingHeader)?;
    if num_states < 1 {
        return Err(Error::BadStateCount(num_states));
    }
    if nab < 1 {
        return Err(Error::BadAlphabetSize(nab));
    }
    let num_states = num_states as usize;
    let nab = nab as usize;

    // alphabet symbols are collected character by character, so
    // adjacent symbols inside a single token are accepted
    let mut alphabet = Vec::with_capacity(nab);
    while alphabet.len() < nab {
        match tokens.next() {
            Some(t) => alphabet.extend(t.chars().take(nab - alphabet.len())),
            None => return Err(Error::TruncatedAlphabet),
        }
    }

    // transition matrix; any negative target means "no transition"
    let mut transitions = Vec::with_capacity(num_states * nab);
    for _ in 0..num_states * nab {
        let t = tokens
            .next()
            .and_then(|t| t.parse::<i64>().ok())
            .ok_or(Error::BadTransitionMatrix)?;
        if t >= num_states as i64 {
            return Err(Error::StateOutOfRange(t));
        }
        transitions.push(if t >= 0 { Some(t as StateId) } else { None });
    }

    // accepting states run to the end of the input
    let mut accept = Vec::new();
    for t in tokens {
        let a = t.parse::<i64>().map_err(|_| Error::BadAcceptList)?;
        if a < 0 || a >= num_states as i64 {
            return Err(Error::AcceptOutOfRange(a));
        }
        accept.push(a as StateId);
    }

    Dfa::new(num_states, alphabet, transitions, accept)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::automata::StateAttrib;

    #[test]
    fn test_parse() {
        let dfa = parse_dfa(
            "3 2\n\
             a b\n\
             1 2\n\
             1 1\n\
             -1 2\n\
             1",
        )
        .unwrap();

        assert_eq!(dfa.num_states(), 3);
        assert_eq!(dfa.alphabet(), &['a', 'b']);
        assert_eq!(dfa.initial_state(), 0);
        assert_eq!(dfa.next(0, 0), Some(1));
        assert_eq!(dfa.next(0, 1), Some(2));
        assert_eq!(dfa.next(2, 0), None);
        assert_eq!(dfa.next(2, 1), Some(2));
        assert_eq!(dfa.accept_states(), &[1]);
        assert_eq!(dfa.attrib(1), StateAttrib::Accept);
        assert_eq!(dfa.attrib(0), StateAttrib::Normal);
    }

    #[test]
    fn test_parse_adjacent_alphabet_symbols() {
        // "ab" in one token reads as the two symbols 'a' and 'b'
        let dfa = parse_dfa("1 2 ab 0 -1").unwrap();
        assert_eq!(dfa.alphabet(), &['a', 'b']);
        assert_eq!(dfa.next(0, 0), Some(0));
        assert_eq!(dfa.next(0, 1), None);
    }

    #[test]
    fn test_parse_no_accept_states() {
        let dfa = parse_dfa("2 1\na\n1\n0\n").unwrap();
        assert!(dfa.accept_states().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_dfa(""), Err(Error::MissingHeader)));
        assert!(matches!(parse_dfa("3"), Err(Error::MissingHeader)));
        assert!(matches!(parse_dfa("x 2"), Err(Error::MissingHeader)));
        assert!(matches!(parse_dfa("0 2 a b"), Err(Error::BadStateCount(0))));
        assert!(matches!(
            parse_dfa("2 -1 a"),
            Err(Error::BadAlphabetSize(-1))
        ));
        assert!(matches!(parse_dfa("2 2 a"), Err(Error::TruncatedAlphabet)));
        assert!(matches!(
            parse_dfa("2 1 a 0"),
            Err(Error::BadTransitionMatrix)
        ));
        assert!(matches!(
            parse_dfa("2 1 a 0 x"),
            Err(Error::BadTransitionMatrix)
        ));
        assert!(matches!(
            parse_dfa("2 1 a 0 2"),
            Err(Error::StateOutOfRange(2))
        ));
        assert!(matches!(
            parse_dfa("2 1 a 0 1 x"),
            Err(Error::BadAcceptList)
        ));
        assert!(matches!(
            parse_dfa("2 1 a 0 1 5"),
            Err(Error::AcceptOutOfRange(5))
        ));
        assert!(matches!(
            parse_dfa("2 1 a 0 1 -1"),
            Err(Error::AcceptOutOfRange(-1))
        ));
    }
}
