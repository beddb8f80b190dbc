//! Input resolution
//!
//! Text comes from piped stdin when there is any, otherwise from the
//! positional arguments.

use std::io::BufRead;

use tracing::debug;

use crate::error::BoxError;

/// Literal two-character sequence that splits an argument into lines.
pub const ARG_LINE_SEPARATOR: &str = "\\n";

/// Collect the lines to draw around.
///
/// Stdin wins when it is not a terminal and carries at least one line.
/// Otherwise the arguments are used. An empty pipe with no arguments is
/// valid and yields no lines; a terminal with no arguments is
/// [`BoxError::NoInput`].
pub fn resolve_text_input(args: &[String]) -> Result<Vec<String>, BoxError> {
    let piped = if atty::is(atty::Stream::Stdin) {
        None
    } else {
        let stdin = std::io::stdin();
        Some(read_lines(stdin.lock())?)
    };
    choose_input(piped, args)
}

/// Pick between piped lines (`None` when stdin is a terminal) and
/// positional arguments.
pub fn choose_input(piped: Option<Vec<String>>, args: &[String]) -> Result<Vec<String>, BoxError> {
    if let Some(piped) = piped.as_ref().filter(|lines| !lines.is_empty()) {
        debug!(lines = piped.len(), "using input from stdin");
        return Ok(piped.clone());
    }

    let lines = process_arguments(args);
    if !lines.is_empty() {
        debug!(lines = lines.len(), "using input from arguments");
        return Ok(lines);
    }

    match piped {
        Some(_) => {
            debug!("stdin is empty, drawing an empty box");
            Ok(Vec::new())
        }
        None => Err(BoxError::NoInput),
    }
}

/// Read every line from a reader, without line terminators.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, BoxError> {
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(BoxError::from)
}

/// Turn positional arguments into lines.
///
/// Empty arguments are skipped; a literal `\n` inside an argument starts a
/// new line.
pub fn process_arguments(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|arg| !arg.is_empty())
        .flat_map(|arg| arg.split(ARG_LINE_SEPARATOR).map(str::to_string))
        .collect()
}
