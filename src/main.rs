#[macro_use]
extern crate tracing;

use anyhow::Context;
use std::path::PathBuf;

mod scene;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const DEFAULT_OUTPUT: &str = "img/ogp.png";

#[derive(argh::FromArgs)]
/// Render the Open Graph preview image into a PNG file
struct Args {
    #[argh(option, default = "PathBuf::from(DEFAULT_OUTPUT)")]
    /// where to write the image
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    info!("composing scene..");
    let palette = scene::Palette::load().context("invalid palette")?;
    let frame = scene::compose(&palette)?;

    info!("encoding {}x{} frame..", frame.width(), frame.height());
    let png = frame.encode().context("failed to encode frame")?;

    ogpgen_common::png::write_file(&args.output, &png)?;
    info!(len = png.len(), "wrote png");

    println!(
        "generated {} ({}x{})",
        args.output.display(),
        scene::WIDTH,
        scene::HEIGHT
    );

    Ok(())
}
