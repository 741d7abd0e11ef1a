// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`SortedSuffixArray`, `VerifiedLcp`) that check
//!    externally supplied arrays in full, once. If you hold one, it satisfies
//!    the invariant.
//!
//! 2. **Runtime contracts** that panic in debug builds when the builders
//!    break their own invariants. Zero-cost in release, but catch bugs during
//!    development.
//!
//! Use both. The wrappers catch bad input. The contracts catch algorithmic
//! errors when tests run.

mod types;
pub mod contracts;

pub use types::*;
