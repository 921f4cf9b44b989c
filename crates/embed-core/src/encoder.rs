//! Turns one shader source file into a C string-literal declaration.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::EmbedError;

/// One generated string-literal binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Identifier the constant is named after (file name up to the first dot).
    pub identifier: String,
    /// Escaped shader text: one double-quoted fragment per source line.
    pub literal_body: String,
}

/// Derive the generated identifier from a file name.
///
/// Everything from the first `.` onward is dropped: `a.b.frag` becomes `a`,
/// and a name with no dot passes through unchanged.
pub fn identifier_for(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Escape shader text into adjacent quoted fragments.
///
/// Each source line keeps its terminator, the terminator is rewritten as the
/// two-character `\n` escape, and the line is wrapped in double quotes
/// followed by a real newline. The C compiler concatenates the adjacent
/// literals back into a single string. A final line with no terminator gets
/// no trailing escape.
pub fn escape_lines(content: &str) -> String {
    let mut body = String::with_capacity(content.len() + content.len() / 8);
    for line in content.split_inclusive('\n') {
        body.push('"');
        match line.strip_suffix('\n') {
            Some(rest) => {
                // CRLF terminators collapse to a single \n escape
                body.push_str(rest.strip_suffix('\r').unwrap_or(rest));
                body.push_str("\\n");
            }
            None => body.push_str(line),
        }
        body.push('"');
        body.push('\n');
    }
    body
}

/// Read `path` and produce its declaration.
pub fn encode_source(path: &Path) -> Result<Declaration, EmbedError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            EmbedError::Decode {
                path: path.to_path_buf(),
                source,
            }
        } else {
            EmbedError::Filesystem {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    Ok(Declaration {
        identifier: identifier_for(file_name).to_string(),
        literal_body: escape_lines(&content),
    })
}
