use rayon::prelude::*;
use std::ops::Range;

use crate::core::actions::render_slice::ports::colour_policy::ColourPolicy;
use crate::core::actions::render_slice::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::pixel_grid::{BYTES_PER_PIXEL, PixelGrid};
use crate::core::util::pixel_to_plane_coords::PlaneMapping;

/// How the pixels inside one slice are evaluated.
///
/// Slices themselves always run one after another on the scheduling thread;
/// `Parallel` only spreads a single slice over rayon's pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceExecution {
    #[default]
    Sequential,
    Parallel,
}

/// Everything a slice needs besides its index range.
pub struct SliceContext<'a, Alg: ?Sized, CP: ?Sized> {
    pub mapping: &'a PlaneMapping,
    pub iteration_cap: u32,
    pub algorithm: &'a Alg,
    pub colour_policy: &'a CP,
}

/// Classifies and colours every pixel index in `pixels`, writing each one at
/// its own offset in `grid`. Returns how many of them were bounded.
///
/// Sequential execution writes in increasing index order. Parallel execution
/// writes disjoint 4-byte chunks, so the order is unspecified but the result
/// is identical.
pub fn render_slice<Alg, CP>(
    grid: &mut PixelGrid,
    pixels: Range<usize>,
    context: &SliceContext<'_, Alg, CP>,
    execution: SliceExecution,
) -> usize
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CP: ColourPolicy + ?Sized,
{
    match execution {
        SliceExecution::Sequential => render_sequential(grid, pixels, context),
        SliceExecution::Parallel => render_parallel(grid, pixels, context),
    }
}

fn render_sequential<Alg, CP>(
    grid: &mut PixelGrid,
    pixels: Range<usize>,
    context: &SliceContext<'_, Alg, CP>,
) -> usize
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CP: ColourPolicy + ?Sized,
{
    let mut bounded = 0;

    for index in pixels {
        let c = context.mapping.index_to_plane(index);
        let escape = context.algorithm.classify(c, context.iteration_cap);

        if escape.is_bounded() {
            bounded += 1;
        }
        grid.write_at(index, context.colour_policy.colour(escape, context.iteration_cap));
    }

    bounded
}

fn render_parallel<Alg, CP>(
    grid: &mut PixelGrid,
    pixels: Range<usize>,
    context: &SliceContext<'_, Alg, CP>,
) -> usize
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CP: ColourPolicy + ?Sized,
{
    let first = pixels.start;

    grid.span_mut(pixels)
        .par_chunks_mut(BYTES_PER_PIXEL)
        .enumerate()
        .map(|(offset, px)| {
            let c = context.mapping.index_to_plane(first + offset);
            let escape = context.algorithm.classify(c, context.iteration_cap);

            px.copy_from_slice(
                &context
                    .colour_policy
                    .colour(escape, context.iteration_cap)
                    .to_bytes(),
            );

            usize::from(escape.is_bounded())
        })
        .sum()
}
