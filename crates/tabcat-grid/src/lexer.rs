//! Line-by-line CSV tokenization.
//!
//! The token stream is a transient intermediate representation: field
//! values, the commas between them, and one `Newline` per input line. It
//! never leaves this crate. Empty-cell restoration and row padding need
//! context across neighbouring tokens, so they live in later passes in
//! [`builder`](crate::builder) instead of this scan.

/// One lexical unit of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A field value, quotes already stripped. Borrows from the input.
    Value(&'a str),
    Comma,
    Newline,
}

/// Tokenizes the whole input, one line at a time.
///
/// Lines are split on `\n` and a single trailing `\r` is stripped from
/// each, so CRLF input tokenizes identically to LF input. The empty
/// remainder after the final `\n` yields a lone `Newline` token that the
/// measuring pass collapses.
pub(crate) fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for line in input.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        tokenize_line(line, &mut tokens);
    }
    tokens
}

/// Scans one line left to right, byte by byte.
///
/// A `"` at the start of a field opens a quoted value running to the next
/// `"` (exclusive); embedded quotes have no escape. A `"` in the middle of
/// an unquoted value is literal: quote detection only triggers at field
/// start. An unterminated quote consumes the rest of the line.
fn tokenize_line<'a>(line: &'a str, tokens: &mut Vec<Token<'a>>) {
    let bytes = line.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b',' => {
                tokens.push(Token::Comma);
                pos += 1;
            }
            b'"' => {
                let start = pos + 1;
                let end = line[start..].find('"').map_or(line.len(), |i| start + i);
                tokens.push(Token::Value(&line[start..end]));
                // Step past the closing quote; past the end is fine when
                // the quote was unterminated.
                pos = end + 1;
            }
            _ => {
                let end = line[pos..].find(',').map_or(line.len(), |i| pos + i);
                tokens.push(Token::Value(&line[pos..end]));
                pos = end;
            }
        }
    }
    tokens.push(Token::Newline);
}
