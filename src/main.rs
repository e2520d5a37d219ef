use pool_curve::curve::{PoolReserves, SwapAmounts};
use pool_curve::render::{CurveRenderer, RenderOutcome, Rgba, Surface};
use pool_curve::types::{RenderError, Result, Viewport};
use pool_curve::utils::{config::Config, logger};
use tracing::info;

/// Demo host: the library renders on demand, the host owns scheduling.
/// One pass over environment-supplied inputs, written out as a PPM.
fn main() -> Result<()> {
    let config = Config::load()?;
    config.validate()?;
    logger::init(&config.logging_config().level);
    info!("Starting curve renderer");

    let reserves = PoolReserves::new(
        env_f64("RESERVE_A", 100.0)?,
        env_f64("RESERVE_B", 100.0)?,
    )?;
    let swap = SwapAmounts::new(env_f64("SWAP_A", 10.0)?, env_f64("SWAP_B", 0.0)?)?;
    let viewport = Viewport::new(env_u32("WIDTH", 500)?, env_u32("HEIGHT", 500)?)?;

    let renderer = CurveRenderer::new(config.style_config().clone());
    let mut surface = Surface::new(&viewport);

    match renderer.render(&mut surface, &reserves, &swap)? {
        RenderOutcome::NotReady => {
            info!("pool not funded yet, nothing to draw");
        }
        RenderOutcome::Rendered(summary) => {
            for projection in &summary.projections {
                info!(side = %projection.side, "{}", projection.label());
            }
            for caption in renderer.captions() {
                info!(placement = ?caption.placement, text = caption.text, "caption");
            }
            std::fs::write("curve.ppm", surface.to_ppm(Rgba::WHITE))?;
            info!(%viewport, "wrote curve.ppm");
        }
    }

    Ok(())
}

fn env_f64(name: &'static str, default: f64) -> Result<f64> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| RenderError::invalid_input(name, format!("{:?}: {}", raw, e))),
        Err(_) => Ok(default),
    }
}

fn env_u32(name: &'static str, default: u32) -> Result<u32> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| RenderError::invalid_input(name, format!("{:?}: {}", raw, e))),
        Err(_) => Ok(default),
    }
}
