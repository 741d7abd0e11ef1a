// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seqdex command-line interface.
//!
//! Two subcommands: `match` builds a suffix array and reports every position
//! where any of the given patterns occurs, and `tree` turns a supplied suffix
//! array plus LCP array into a suffix tree edge list. Both read stdin unless
//! `--input` names a file and write their result to stdout.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqdex",
    about = "Suffix array pattern matching and suffix tree construction",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace), logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find all positions where any pattern occurs in the text
    ///
    /// Input: the text (without sentinel), a pattern count, then the patterns.
    /// Output: ascending positions on one line.
    Match {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Build a suffix tree from a suffix array and LCP array
    ///
    /// Input: the text (with sentinel), n suffix array entries, n-1 LCP
    /// entries. Output: the text, then one `start end` line per edge.
    Tree {
        #[command(flatten)]
        common: CommonArgs,

        /// Check that the suffix array is sorted and every LCP entry is exact
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args)]
pub struct CommonArgs {
    /// Read input from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Alphabet letters in rank order
    #[arg(long, default_value = "ACGT")]
    pub alphabet: String,

    /// Sentinel symbol terminating the text, ranked below every letter
    #[arg(long, default_value_t = '$')]
    pub sentinel: char,
}
