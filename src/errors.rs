// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Error codes
//!

use thiserror::Error;

/// Result alias used by the reader and the driver
pub type Result<T, E = Error> = std::result::Result<T, E>;

///
/// Errors produced while reading a DFA description
///
/// Diagnostics carry the offending value where there is one.
///
#[derive(Debug, Error)]
pub enum Error {
    /// The input does not start with two integers
    #[error("input must begin with no_of_states alphabet_size")]
    MissingHeader,

    /// The declared number of states is less than one
    #[error("nonsensible number of states ({0})")]
    BadStateCount(i64),

    /// The declared alphabet size is less than one
    #[error("nonsensible number of alphabet symbols ({0})")]
    BadAlphabetSize(i64),

    /// Fewer alphabet symbols than announced in the header
    #[error("bad input while reading alphabet")]
    TruncatedAlphabet,

    /// The transition matrix is short or contains a non-integer item
    #[error("bad input while reading states")]
    BadTransitionMatrix,

    /// A transition target is outside the declared state range
    #[error("state ({0}) - out of range")]
    StateOutOfRange(i64),

    /// The accept-state list contains a non-integer item
    #[error("bad input while reading accept states")]
    BadAcceptList,

    /// An accept-state id is outside the declared state range
    #[error("accept state ({0}) - out of range")]
    AcceptOutOfRange(i64),

    /// The input file could not be opened or read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
