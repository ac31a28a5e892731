use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use super::SuggestionPool;
use crate::error::MultipickError;

/// Where the suggestion pool comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSource<'a> {
    /// Suggestions given directly on the command line
    Args(&'a [String]),
    /// One suggestion per line in a file
    File(&'a Path),
    /// One suggestion per line on stdin
    Stdin,
}

impl<'a> PoolSource<'a> {
    /// Pick the source: arguments first, then a file, then piped stdin.
    pub fn resolve(
        args: &'a [String],
        file: Option<&'a Path>,
        stdin_is_terminal: bool,
    ) -> Result<Self, MultipickError> {
        if !args.is_empty() {
            return Ok(PoolSource::Args(args));
        }
        if let Some(path) = file {
            return Ok(PoolSource::File(path));
        }
        if !stdin_is_terminal {
            return Ok(PoolSource::Stdin);
        }
        Err(MultipickError::NoSuggestionSource)
    }

    /// Resolve against the real stdin
    pub fn detect(args: &'a [String], file: Option<&'a Path>) -> Result<Self, MultipickError> {
        Self::resolve(args, file, io::stdin().is_terminal())
    }
}

/// Read a suggestion pool from its source
pub struct PoolReader;

impl PoolReader {
    pub fn read(source: &PoolSource<'_>) -> Result<SuggestionPool, MultipickError> {
        match source {
            PoolSource::Args(items) => Ok(SuggestionPool::new(
                items
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            PoolSource::File(path) => {
                let mut file = File::open(path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                Ok(SuggestionPool::from_lines(&contents))
            }
            PoolSource::Stdin => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(SuggestionPool::from_lines(&buffer))
            }
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
