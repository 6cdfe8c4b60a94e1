use anyhow::Result;

mod cli;
mod config;
mod extraction;
mod filesio;
mod grouping;
mod output;
mod schedule;
mod table;
#[cfg(test)]
mod testutil;
mod validation;

fn main() -> Result<()> {
    cli::run()
}
