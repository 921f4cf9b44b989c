//! shader-embed
//!
//! Reads every shader source file in the input directory and generates a C
//! header declaring each one as an embedded string constant, so shader text
//! compiles straight into the binary without runtime file I/O.

mod config;

use anyhow::Context;
use config::Config;
use embed_core::{render_shader_header, write_atomic};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    log::info!(
        "Embedding shaders from {:?} into {:?}",
        config.input_dir,
        config.output_path
    );

    let header = render_shader_header(&config.input_dir)
        .with_context(|| format!("failed to generate header from {:?}", config.input_dir))?;

    // Echo the generated text for manual inspection before committing it
    print!("{header}");

    write_atomic(&config.output_path, &header)
        .with_context(|| format!("failed to write {:?}", config.output_path))?;

    log::info!("Wrote {} bytes to {:?}", header.len(), config.output_path);
    Ok(())
}
