use anyhow::{ensure, Context, Result};
use log::{debug, trace};

use crate::coords::{Rect, Vec2};

use super::image::{Image, Sample};
use super::task::{BlurConfig, BlurDirection, BlurPass, BlurTask};

/// Runs one directional pass from `src` into the task's target rect of `dst`.
///
/// Texels of `dst` outside the target rect are left untouched.
pub fn blur_pass<S: Sample>(
    src: &Image<S>,
    dst: &mut Image<S>,
    task: &BlurTask,
    config: &BlurConfig,
) -> Result<()> {
    ensure!(
        task.kind == S::KIND,
        "blur task targets {:?} but the images hold {:?} samples",
        task.kind,
        S::KIND
    );
    task.validate(src.extent(), dst.extent()).context("invalid blur task")?;

    let pass = BlurPass::new(task, src.extent(), config);
    trace!(
        "blur pass {:?}: sigma {} support {} target {:?}",
        pass.direction, pass.sigma, pass.support, pass.target
    );
    if pass.support == 0 {
        debug!("blur pass {:?} has no support; copying source", pass.direction);
    }

    let width = dst.width() as usize;
    let (x0, y0) = (task.target.origin.x as usize, task.target.origin.y as usize);
    let (x1, y1) = (task.target.max().x as usize, task.target.max().y as usize);

    let rows = &mut dst.pixels_mut()[y0 * width..y1 * width];
    for_each_row(rows, width, |i, row| {
        let y = (y0 + i) as f32 + 0.5;
        for x in x0..x1 {
            let uv = pass.uv_at(Vec2::new(x as f32 + 0.5, y));
            row[x] = pass.filter(src, uv);
        }
    });

    Ok(())
}

#[cfg(feature = "multithreading")]
fn for_each_row<S: Sample>(
    rows: &mut [S],
    width: usize,
    func: impl Fn(usize, &mut [S]) + Send + Sync,
) {
    use rayon::iter::{IndexedParallelIterator, ParallelIterator};
    use rayon::slice::ParallelSliceMut;

    rows.par_chunks_mut(width)
        .enumerate()
        .for_each(|(i, row)| func(i, row));
}

#[cfg(not(feature = "multithreading"))]
fn for_each_row<S: Sample>(rows: &mut [S], width: usize, func: impl Fn(usize, &mut [S])) {
    rows.chunks_mut(width)
        .enumerate()
        .for_each(|(i, row)| func(i, row));
}

/// Separable Gaussian blur of `source_rect` of `src`.
///
/// Runs a horizontal pass into an intermediate image, then a vertical pass
/// from it. The vertical pass starts only once the horizontal one has
/// written every texel. Returns an image the size of `source_rect`.
pub fn blur_2d<S: Sample>(
    src: &Image<S>,
    source_rect: Rect,
    sigma: f32,
    config: &BlurConfig,
) -> Result<Image<S>> {
    ensure!(
        source_rect.is_finite() && !source_rect.is_empty(),
        "blur source rect {source_rect:?} is empty or not finite"
    );
    let (w, h) = (source_rect.size.x as u32, source_rect.size.y as u32);
    debug!("blur {w}x{h} {:?} sigma {sigma}", S::KIND);

    let local = Rect::new(0.0, 0.0, w as f32, h as f32);
    let mut intermediate = Image::new(w, h);
    let horizontal = BlurTask {
        target: local,
        source: source_rect,
        sigma,
        direction: BlurDirection::Horizontal,
        kind: S::KIND,
    };
    blur_pass(src, &mut intermediate, &horizontal, config).context("horizontal blur pass")?;

    let mut output = Image::new(w, h);
    let vertical = BlurTask {
        target: local,
        source: local,
        direction: BlurDirection::Vertical,
        ..horizontal
    };
    blur_pass(&intermediate, &mut output, &vertical, config).context("vertical blur pass")?;

    Ok(output)
}
