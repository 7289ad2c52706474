//! Observers that make a derivation visible.
//!
//! [`Transcript`] prints a lettered, human-readable account of each stage and
//! can pause for acknowledgement between stages. [`LogObserver`] sends the
//! same stages to `tracing` at debug level.

use std::io::{self, BufRead, Write};

use crate::realise::{RealisationObserver, spell_out};
use crate::rule::GeneralisationRule;
use crate::structure::FeatureStructure;
use crate::vocabulary::VocabularyItem;

/// `a`, `b`, ... for list entries; plain numbers past `z`.
fn letter(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(b'a' + offset).to_string(),
        _ => (index + 1).to_string(),
    }
}

/// Writes a step-by-step account of a cell realisation.
///
/// Write errors do not interrupt the derivation; the first one is kept and
/// returned by [`Transcript::finish`].
#[derive(Debug)]
pub struct Transcript<W, R = io::Empty> {
    out: W,
    input: Option<R>,
    error: Option<io::Error>,
    announced_rules: bool,
}

impl<W: Write> Transcript<W> {
    /// A transcript that never waits.
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: None,
            error: None,
            announced_rules: false,
        }
    }
}

impl<W: Write, R: BufRead> Transcript<W, R> {
    /// A transcript that reads one line from `input` after the cell, the
    /// copied lexicon, the generalised lexicon and the matches.
    pub fn stepping(out: W, input: R) -> Self {
        Self {
            out,
            input: Some(input),
            error: None,
            announced_rules: false,
        }
    }

    /// Return the writer, or the first I/O error met along the way.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit<F>(&mut self, write: F)
    where
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        if self.error.is_none() {
            if let Err(error) = write(&mut self.out) {
                self.error = Some(error);
            }
        }
    }

    fn list(&mut self, items: &[VocabularyItem]) {
        self.emit(|out| {
            for (index, item) in items.iter().enumerate() {
                writeln!(out, "    {}. {item}", letter(index))?;
            }
            Ok(())
        });
    }

    fn announce_rules(&mut self) {
        if !self.announced_rules {
            self.announced_rules = true;
            self.emit(|out| writeln!(out, " 2. Applying rules"));
        }
    }

    fn pause(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.out.flush() {
            self.error = Some(error);
            return;
        }
        if let Some(input) = self.input.as_mut() {
            let mut line = String::new();
            if let Err(error) = input.read_line(&mut line) {
                self.error = Some(error);
            }
        }
    }
}

impl<W: Write, R: BufRead> RealisationObserver for Transcript<W, R> {
    fn cell(&mut self, cell: &FeatureStructure) {
        self.announced_rules = false;
        self.emit(|out| writeln!(out, "Paradigm cell: {cell}"));
        self.pause();
    }

    fn copied(&mut self, items: &[VocabularyItem]) {
        self.emit(|out| writeln!(out, " 1. Creating copy of the morpheme list"));
        self.list(items);
        self.pause();
    }

    fn rule(&mut self, index: usize, rule: &GeneralisationRule, fired: bool) {
        self.announce_rules();
        self.emit(|out| {
            let mark = if fired { "applies" } else { "does not apply" };
            writeln!(out, "    {}. {rule}  ({mark})", letter(index))
        });
    }

    fn generalised(&mut self, items: &[VocabularyItem]) {
        self.announce_rules();
        self.emit(|out| {
            writeln!(out)?;
            writeln!(out, "    new VI list")
        });
        self.list(items);
        self.pause();
    }

    fn matched(&mut self, items: &[VocabularyItem]) {
        self.emit(|out| writeln!(out, " 3. Finding Vocabulary Items"));
        self.list(items);
        self.pause();
    }
}

/// Reports each stage as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RealisationObserver for LogObserver {
    fn cell(&mut self, cell: &FeatureStructure) {
        tracing::debug!(%cell, "Realising paradigm cell");
    }

    fn copied(&mut self, items: &[VocabularyItem]) {
        tracing::debug!(count = items.len(), "Copied morpheme list");
    }

    fn rule(&mut self, index: usize, rule: &GeneralisationRule, fired: bool) {
        tracing::debug!(index, %rule, fired, "Tested generalisation rule");
    }

    fn generalised(&mut self, items: &[VocabularyItem]) {
        for item in items {
            tracing::debug!(%item, "Generalised vocabulary item");
        }
    }

    fn matched(&mut self, items: &[VocabularyItem]) {
        tracing::debug!(forms = %spell_out(items), count = items.len(), "Found vocabulary items");
    }
}
