//! Core transformation for the shader-embed generator.
//!
//! Turns a directory of shader source files into a single C header of
//! embedded string constants: scan the directory, encode each file as a
//! string-literal declaration, render the declarations in order, and write
//! the artifact. All paths are explicit, so the pipeline can run against any
//! directory.

pub mod emitter;
pub mod encoder;
pub mod error;
pub mod scanner;

pub use emitter::{render_header, write_atomic};
pub use encoder::{Declaration, encode_source, escape_lines, identifier_for};
pub use error::EmbedError;
pub use scanner::scan_sources;

use std::path::Path;

/// Run the scan → encode → render stages and return the header text.
///
/// Fails on the first error; nothing is written by this function.
pub fn render_shader_header(input_dir: &Path) -> Result<String, EmbedError> {
    let sources = scanner::scan_sources(input_dir)?;

    let mut declarations = Vec::with_capacity(sources.len());
    for path in &sources {
        declarations.push(encoder::encode_source(path)?);
    }

    emitter::render_header(&declarations)
}
