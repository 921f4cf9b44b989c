//! Renders declarations into the generated header and writes it to disk.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::encoder::Declaration;
use crate::error::EmbedError;

/// Render the full header text from declarations, in the given order.
///
/// Each declaration becomes
///
/// ```c
/// static const char* <identifier>_shader_string =
/// "<line>\n"
/// ;
/// ```
///
/// followed by a blank separator line. Two files that reduce to the same
/// identifier would shadow each other in the generated header, so duplicates
/// are rejected here.
pub fn render_header(declarations: &[Declaration]) -> Result<String, EmbedError> {
    let mut seen = HashSet::new();
    let mut header = String::new();

    for decl in declarations {
        if !seen.insert(decl.identifier.as_str()) {
            return Err(EmbedError::DuplicateIdentifier {
                identifier: decl.identifier.clone(),
            });
        }
        header.push_str("static const char* ");
        header.push_str(&decl.identifier);
        header.push_str("_shader_string = \n");
        header.push_str(&decl.literal_body);
        header.push_str(";\n\n");
    }

    Ok(header)
}

/// Write `text` to `path`, replacing any previous artifact wholesale.
///
/// The text goes to a temp file in the destination directory first and is
/// renamed into place, so a failure part-way through leaves the previous
/// artifact intact.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), EmbedError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| EmbedError::Filesystem {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.write_all(text.as_bytes())
        .map_err(|source| EmbedError::Filesystem {
            path: path.to_path_buf(),
            source,
        })?;
    tmp.persist(path).map_err(|e| EmbedError::Filesystem {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    log::debug!("Wrote {} bytes to {:?}", text.len(), path);
    Ok(())
}
