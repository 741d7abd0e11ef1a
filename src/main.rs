// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use seqdex::{io as tool, logging, Alphabet};
use std::fs;
use std::io::{self, BufWriter, Read, Write};

mod cli;
use cli::{Cli, Commands, CommonArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).map_err(|e| anyhow!(e))?;

    match cli.command {
        Commands::Match { common } => run_match(&common),
        Commands::Tree { common, strict } => run_tree(&common, strict),
    }
}

fn run_match(common: &CommonArgs) -> Result<()> {
    let alphabet = alphabet(common)?;
    let input = read_input(common)?;
    let parsed = tool::parse_match_input(&alphabet, &input).context("invalid match input")?;

    let occurrences = tool::run_match(&parsed);

    let mut out = BufWriter::new(io::stdout().lock());
    tool::write_positions(&mut out, occurrences.positions())?;
    out.flush()?;
    Ok(())
}

fn run_tree(common: &CommonArgs, strict: bool) -> Result<()> {
    let alphabet = alphabet(common)?;
    let input = read_input(common)?;
    let parsed = tool::parse_tree_input(&alphabet, &input).context("invalid tree input")?;

    let edges = tool::run_tree(&parsed, strict).context("failed to build suffix tree")?;

    let mut out = BufWriter::new(io::stdout().lock());
    tool::write_edges(&mut out, &parsed.text, &edges)?;
    out.flush()?;
    Ok(())
}

fn alphabet(common: &CommonArgs) -> Result<Alphabet> {
    if !common.sentinel.is_ascii() {
        bail!("sentinel {:?} is not ASCII", common.sentinel);
    }
    Alphabet::new(common.sentinel as u8, common.alphabet.as_bytes())
        .with_context(|| format!("invalid alphabet {:?}", common.alphabet))
}

fn read_input(common: &CommonArgs) -> Result<String> {
    match &common.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
