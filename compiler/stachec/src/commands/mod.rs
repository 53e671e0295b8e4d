//! Command handlers for the stache CLI.
//!
//! Each submodule implements one command. Argument parsing, file reading,
//! and lex error rendering are shared and live here in the module root.

use stache_lexer::{Delimiters, LexError, LexOptions};

mod lex;

pub use lex::{canon_file, lex_file};

/// Arguments shared by the commands that operate on one template file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileArgs {
    pub path: String,
    /// Print JSON instead of the human-readable listing.
    pub json: bool,
    pub options: LexOptions,
}

/// Parse `<file> [--json] [--delimiters="<open> <close>"]`.
///
/// Flags may appear before or after the path. Returns a message suitable
/// for an `error:` line on failure.
pub fn parse_file_args(args: &[String]) -> Result<FileArgs, String> {
    let mut path = None;
    let mut parsed = FileArgs::default();

    for arg in args {
        if arg == "--json" {
            parsed.json = true;
        } else if let Some(value) = arg.strip_prefix("--delimiters=") {
            let delimiters = parse_delimiters_flag(value)?;
            parsed.options = parsed.options.with_delimiters(delimiters);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    parsed.path = path.ok_or_else(|| "missing file path".to_owned())?;
    Ok(parsed)
}

/// Parse the value of `--delimiters`, e.g. `<% %>`.
pub fn parse_delimiters_flag(value: &str) -> Result<Delimiters, String> {
    Delimiters::parse_pair(value).ok_or_else(|| {
        format!(
            "invalid delimiters '{value}': expected two non-empty sequences separated by a space, e.g. \"<% %>\""
        )
    })
}

/// Render a lex error as a diagnostic pointing into `source`.
///
/// ```text
/// page.stache:3:5: error: missing closing delimiter
///   |
/// 3 | {{name
///   |     ^
///   = help: close the tag with ...
/// ```
pub fn render_lex_error(path: &str, source: &str, error: &LexError) -> String {
    let line_no = error.line.to_string();
    let gutter = " ".repeat(line_no.len());
    let line_text = source
        .lines()
        .nth(usize::try_from(error.line.saturating_sub(1)).unwrap_or(usize::MAX))
        .unwrap_or("");

    // Mirror tabs so the caret lines up under the reported column.
    let column = usize::try_from(error.column.saturating_sub(1)).unwrap_or(usize::MAX);
    let marker: String = line_text
        .chars()
        .take(column)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    format!(
        "{path}:{line}:{col}: error: {reason}\n\
         {gutter} |\n\
         {line_no} | {line_text}\n\
         {gutter} | {marker}^\n\
         {gutter} = help: {help}\n",
        line = error.line,
        col = error.column,
        reason = error.reason,
        help = error.reason.help(),
    )
}

/// Read a template source. The error is an `error:` message naming `path`.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find template '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("no permission to read template '{path}'"),
        std::io::ErrorKind::InvalidData => format!("template '{path}' is not valid UTF-8"),
        _ => format!("cannot read template '{path}': {e}"),
    })
}

fn exit_with_error(msg: &str) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

/// Print a lex error diagnostic to stderr and exit with status 1.
fn exit_with_lex_error(path: &str, source: &str, error: &LexError) -> ! {
    eprint!("{}", render_lex_error(path, source, error));
    std::process::exit(1);
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
