use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use paradigm_core::languages::{self, Sample};
use paradigm_core::realise::spell_out;
use paradigm_core::{Alignment, LogObserver, Paradigm, Transcript, VocabularyItem, derivation};

mod cli;

use cli::{Command, ParadigmCli};

fn main() -> Result<()> {
    let cli = ParadigmCli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::List => list(),
        Command::Table {
            language,
            alignment,
            gap_marker,
        } => {
            let sample = languages::find(&language)?;
            let alignment = alignment.resolve(sample.alignment);
            table(&sample, alignment, gap_marker.as_deref().unwrap_or(""))
        }
        Command::Derive {
            language,
            cell,
            step,
            alignment,
        } => {
            let sample = languages::find(&language)?;
            let alignment = alignment.resolve(sample.alignment);
            derive(&sample, &cell, alignment, step)
        }
    }
}

fn list() -> Result<()> {
    let samples = languages::catalogue()?;
    let width = samples
        .iter()
        .map(|sample| sample.key.len())
        .max()
        .unwrap_or(0);
    let mut out = io::stdout().lock();
    for sample in &samples {
        writeln!(out, "{:<width$}  {}", sample.key, sample.title)?;
    }
    Ok(())
}

fn table(sample: &Sample, alignment: Alignment, gap_marker: &str) -> Result<()> {
    let paradigm = Paradigm::build(&sample.profile, alignment)
        .with_context(|| format!("Failed to build the {} paradigm", sample.key))?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}", sample.title)?;
    writeln!(out, "{}", paradigm.table(gap_marker))?;
    Ok(())
}

fn derive(sample: &Sample, cell: &str, alignment: Alignment, step: bool) -> Result<()> {
    let out = io::stdout().lock();
    let realised = if step {
        let input = io::stdin().lock();
        transcribe(Transcript::stepping(out, input), sample, cell, alignment)?
    } else {
        transcribe(Transcript::new(out), sample, cell, alignment)?
    };

    tracing::info!(
        language = %sample.profile.name(),
        cell,
        forms = %spell_out(&realised),
        "Derived cell"
    );
    Ok(())
}

fn transcribe<W: Write, R: BufRead>(
    mut transcript: Transcript<W, R>,
    sample: &Sample,
    cell: &str,
    alignment: Alignment,
) -> Result<Vec<VocabularyItem>> {
    let observer = (&mut transcript, LogObserver);
    let realised = derivation(&sample.profile, cell, alignment, observer)?;
    transcript.finish().context("Failed to write the derivation")?;
    Ok(realised)
}
