#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{
    io::{self, Write},
    process,
};

use shelf as lib;

use lib::{Endpoints, FailurePolicy, Query};

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{error, trace};

fn main() {
    let Cli {
        key,
        sort,
        api_url,
        strict,
        verbosity,
        quiet,
    } = Cli::parse();

    if let Err(err) = setup_errlog(verbosity as usize, quiet) {
        eprintln!("{err}");
        process::exit(2);
    }

    // invalid input is reported before any request is made
    let query = match Query::new(key.as_deref().unwrap_or_default(), &sort) {
        Ok(query) => query,
        Err(err) => {
            println!("Error: {err}");
            process::exit(1);
        }
    };

    let policy = if strict {
        FailurePolicy::Abort
    } else {
        FailurePolicy::Skip
    };

    if let Err(err) = try_main(&query, Endpoints::new(api_url), policy) {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main(query: &Query, endpoints: Endpoints, policy: FailurePolicy) -> Result<()> {
    trace!("Using {policy:?} failure policy");
    let document = lib::bibliography_by_work(query, endpoints, policy)
        .wrap_err_with(|| format!("Cannot build the bibliography of '{}'", query.work_id()))?;

    // nothing is printed unless the whole document serializes
    let yaml = document.to_yaml()?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(yaml.as_bytes())
        .and_then(|()| {
            if yaml.ends_with('\n') {
                Ok(())
            } else {
                stdout.write_all(b"\n")
            }
        })
        .wrap_err("Cannot write the bibliography to stdout")
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "shelf")]
#[clap(about = "List the books of every author of an OpenLibrary work as YAML")]
#[clap(version, author)]
struct Cli {
    /// The OpenLibrary work key of the book, e.g. OL27448W
    #[clap(short, long)]
    key: Option<String>,

    /// Sort author names and book publish years, either `asc` or `desc`
    ///
    /// When not used the order returned by OpenLibrary is kept.
    #[clap(short, long, default_value = "")]
    sort: String,

    /// Base URL of the OpenLibrary API
    #[clap(long, default_value = lib::DEFAULT_BASE_URL)]
    api_url: String,

    /// Stop at the first author that cannot be resolved instead of leaving them out
    #[clap(long)]
    strict: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only errors are printed to stderr.
    #[clap(short, long)]
    quiet: bool,
}
