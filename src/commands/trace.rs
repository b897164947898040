use linetrace::{LineTrace, LineTraceResult};
use tracing::info;

use crate::cli::Cli;

/// Trace the input image and write its outlines as an SVG document.
pub fn run(cli: &Cli) -> LineTraceResult<()> {
    let tracer = LineTrace::new().with_contour_options((&cli.contour_options).into());
    let loaded = tracer.for_image(&cli.input)?;
    let (width, height) = loaded.dimensions();
    info!(input = %cli.input.display(), width, height, "loaded image");

    let document = loaded.mask().to_svg()?;
    document.save(&cli.output)?;
    println!("SVG file saved as {}", cli.output.display());

    Ok(())
}
