//! Grammar header scanning.
//!
//! Only the first line that declares a grammar is inspected. The rest of the
//! file is never read, so this works on grammars the full ANTLR tool would
//! reject.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::HeaderError;

use super::{Grammar, GrammarType};

/// Classify the grammar file at `path` from its header line.
///
/// # Errors
///
/// - [`HeaderError::Io`] if the file cannot be opened or read
/// - [`HeaderError::Parse`] if the header line has no name token
/// - [`HeaderError::NotFound`] if no header line exists
pub fn parse_grammar_header(path: &Path) -> Result<Grammar, HeaderError> {
    let file = File::open(path)?;
    scan_header(BufReader::new(file), path)
}

/// Classify grammar text read from `reader`, recording `path` as its filename.
///
/// Lines are read as bytes; only the header line needs to be valid text, and
/// invalid UTF-8 in it is replaced rather than rejected.
///
/// # Errors
///
/// Same as [`parse_grammar_header`], minus the open failure.
pub fn scan_header<R: BufRead>(mut reader: R, path: &Path) -> Result<Grammar, HeaderError> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();

        let Some(kind) = classify_line(line) else {
            continue;
        };

        let name = grammar_name(line)?;
        return Ok(Grammar::new(name, path, kind));
    }

    Err(HeaderError::NotFound)
}

/// Return the grammar type whose keyword starts `line`, if any.
///
/// `grammar` is tested before `lexer`, which is tested before `parser`.
fn classify_line(line: &str) -> Option<GrammarType> {
    GrammarType::ALL
        .into_iter()
        .find(|kind| line.starts_with(kind.keyword()))
}

/// Extract the declared name: the last whitespace-separated token before `;`.
fn grammar_name(line: &str) -> Result<String, HeaderError> {
    let declaration = line.split_once(';').map_or(line, |(head, _)| head);
    let tokens: Vec<&str> = declaration.split_whitespace().collect();

    match tokens.as_slice() {
        [_, .., last] => Ok((*last).to_string()),
        _ => Err(HeaderError::Parse {
            line: declaration.to_string(),
        }),
    }
}
