//! Interactive command loop over an [`Engine`].

pub mod command;
pub mod render;

use anyhow::Result;
use command::Command;
use engine::{Engine, SearchError};
use std::io::{BufRead, Write};

pub const PROMPT: &str = ">: ";

/// Output streams and presentation settings for a session.
pub struct Session<'e, O, E> {
    engine: &'e Engine,
    out: O,
    err: E,
    width: usize,
    prompt: bool,
}

impl<'e, O: Write, E: Write> Session<'e, O, E> {
    pub fn new(engine: &'e Engine, out: O, err: E, width: usize) -> Self {
        Self { engine, out, err, width, prompt: true }
    }

    /// Disables the `>: ` prompt, for scripted input.
    pub fn quiet(mut self) -> Self {
        self.prompt = false;
        self
    }

    /// Reads commands until `/exit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line?;
            if !self.dispatch(&line)? {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Executes one command line. Returns `false` once the session should end.
    pub fn dispatch(&mut self, line: &str) -> Result<bool> {
        match Command::parse(line) {
            Command::Search(query) => self.search(query)?,
            Command::DocFreq => self.doc_freq()?,
            Command::TermFreq { term, doc_id } => self.term_freq(term, doc_id)?,
            Command::Exit => return Ok(false),
            Command::Empty => {}
            Command::Unknown(cmd) => {
                writeln!(self.err, "<Error>: unrecognized command {cmd:?} (try /search, /df, /tf, /exit)")?
            }
        }
        Ok(true)
    }

    fn search(&mut self, query: &str) -> Result<()> {
        let results = match self.engine.search(query) {
            Ok(results) => results,
            Err(SearchError::NoValidInput { unresolved }) => {
                self.report_unresolved(&unresolved)?;
                return self.report(&SearchError::NoValidInput { unresolved });
            }
            Err(err) => return self.report(&err),
        };
        self.report_unresolved(&results.unresolved)?;

        for hit in &results.hits {
            let Some(doc) = self.engine.document(hit.doc_id) else { continue };
            let spans = self.engine.highlights(hit.doc_id, results.terms.as_slice());
            write!(self.out, "{}", render::render_hit(hit, &doc.text, &spans, self.width))?;
        }
        Ok(())
    }

    fn doc_freq(&mut self) -> Result<()> {
        for (term, count) in self.engine.doc_frequencies() {
            writeln!(self.out, "{term} {count}")?;
        }
        Ok(())
    }

    fn term_freq(&mut self, term: &str, doc_id: &str) -> Result<()> {
        let id = match doc_id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.err, "<Error>: document id must be an integer ({doc_id:?})")?;
                return Ok(());
            }
        };
        match self.engine.term_frequency(term, id) {
            Ok(count) => writeln!(self.out, "{id} {term} {count}")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn report_unresolved(&mut self, unresolved: &[String]) -> Result<()> {
        for term in unresolved {
            self.report(&SearchError::TermNotFound(term.clone()))?;
        }
        Ok(())
    }

    fn report(&mut self, err: &SearchError) -> Result<()> {
        writeln!(self.err, "<Error>: {err}")?;
        Ok(())
    }
}
