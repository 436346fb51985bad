// Copyright 2026 Thomas Johannesson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Command-line entry point

use anyhow::Result;
use clap::Parser;
use rangeshift::repo::{ChangeChain, Git2Repo};
use tracing_subscriber::EnvFilter;

/// Carry the hunks of one file's A->B diff forward to revision C.
///
/// Prints the approximate A->C ranges of every A->B hunk whose lines were
/// not rewritten again between B and C.
#[derive(Parser)]
#[command(name = "rangeshift")]
struct Cli {
    /// Oldest revision (A).
    base: String,

    /// Intermediate revision (B).
    middle: String,

    /// Newest revision (C).
    target: String,

    /// File to follow, relative to the repository root.
    path: String,

    /// Also carry this 1-based line of A forward to C.
    #[arg(short, long)]
    line: Option<usize>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rangeshift=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let git_repo = Git2Repo::open(std::env::current_dir()?)?;
    let chain = ChangeChain::load(&git_repo, &cli.base, &cli.middle, &cli.target, &cli.path)?;

    for range in chain.composed()? {
        println!("{range}");
    }

    if let Some(line) = cli.line {
        if line == 0 {
            anyhow::bail!("Line numbers start at 1");
        }
        match chain.transfer_line(line - 1) {
            Some(moved) => println!("line {} -> {}", line, moved + 1),
            None => println!("line {} -> (changed)", line),
        }
    }

    Ok(())
}
