//! The comment-stripping scanner.
//!
//! [`strip_comments`] turns annotated JSON into plain JSON by walking the
//! document line by line with a single flag that tracks whether the cursor
//! is inside a multi-line `/* ... */` comment. Matching is substring based
//! and line scoped, good enough for hand-written configuration files but
//! deliberately not a lexer: it does not know about string literals.

/// The line ending a document was written with.
///
/// The same delimiter is used to split the input into lines and to rejoin
/// the surviving lines. Mixed or auto-detected line endings are not
/// supported: a `\n`-terminated document scanned as [`Eol::Crlf`] is one
/// giant line as far as the scanner is concerned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Eol {
    /// Unix line endings (`\n`), the default
    #[default]
    Lf,
    /// Windows line endings (`\r\n`)
    Crlf,
}

impl Eol {
    /// The delimiter that separates two lines.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Eol::Lf => "\n",
            Eol::Crlf => "\r\n",
        }
    }
}

/// Byte range of the first complete `/* ... */` on the line, terminator
/// included. The comment ends at the first `*/` after its opener.
fn find_block_comment(line: &str) -> Option<(usize, usize)> {
    let start = line.find("/*")?;
    let close = line[start + 2..].find("*/")?;
    Some((start, start + 2 + close + 2))
}

/// Removes every comment that is complete within the line, scanning left
/// to right: a `//` consumes through the end of the line, a `/* ... */`
/// consumes only itself.
fn remove_line_comments(line: &str) -> String {
    let mut kept = String::new();
    let mut rest = line;

    loop {
        let line_comment = rest.find("//");
        let block_comment = find_block_comment(rest);

        match (line_comment, block_comment) {
            (Some(pos), Some((start, _))) if pos < start => {
                kept.push_str(&rest[..pos]);
                break;
            },
            (Some(pos), None) => {
                kept.push_str(&rest[..pos]);
                break;
            },
            (_, Some((start, end))) => {
                kept.push_str(&rest[..start]);
                rest = &rest[end..];
            },
            (None, None) => {
                kept.push_str(rest);
                break;
            },
        }
    }

    kept
}

/// Scans one line that starts outside of a block comment. Returns the
/// surviving text and whether the line opens a block comment that
/// continues past its end.
fn scan_line(line: &str) -> (String, bool) {
    if line.contains("//") || find_block_comment(line).is_some() {
        // Only complete comments are removed here. A dangling `/*` left
        // after one of them stays literal text and does not open a
        // block comment.
        (remove_line_comments(line), false)
    } else if let Some(start) = line.find("/*") {
        (line[..start].to_string(), true)
    } else {
        (line.to_string(), false)
    }
}

/// Removes `//` line comments and `/* ... */` block comments from `text`.
///
/// The text is split into lines on the delimiter of `eol`, comments are
/// removed line by line, every line whose remaining content is blank
/// (including lines that were blank to begin with) is dropped, and the
/// survivors are rejoined with the same delimiter.
///
/// This is a total function: an unterminated block comment silently drops
/// all remaining lines instead of reporting an error, and comment markers
/// inside JSON string literals are stripped like real comments (see the
/// crate-level docs).
///
/// ```
/// use jsonc_lines::{strip_comments, Eol};
///
/// let stripped = strip_comments("{\n  \"a\": 1, // one\n  \"b\": 2\n}", Eol::Lf);
/// assert_eq!(stripped, "{\n  \"a\": 1, \n  \"b\": 2\n}");
/// ```
pub fn strip_comments(text: &str, eol: Eol) -> String {
    let delimiter = eol.delimiter();
    let mut filtered: Vec<String> = Vec::new();
    let mut in_block_comment = false;

    for line in text.split(delimiter) {
        if in_block_comment {
            // Nothing but the terminator matters inside a block comment.
            // Lines without one contribute nothing.
            if let Some(pos) = line.find("*/") {
                in_block_comment = false;
                filtered.push(line[pos + 2..].to_string());
            }
        } else {
            let (kept, opens_block) = scan_line(line);
            filtered.push(kept);
            in_block_comment = opens_block;
        }
    }

    filtered.retain(|line| !line.trim().is_empty());
    filtered.join(delimiter)
}
