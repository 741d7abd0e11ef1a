// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the sorted suffix order everything else stands on.
//!
//! The suffix array is built once per text by prefix doubling and then shared
//! read-only with the pattern matcher and the suffix tree builder.

mod suffix_array;

pub use suffix_array::*;
pub(crate) use suffix_array::first_unsorted;
