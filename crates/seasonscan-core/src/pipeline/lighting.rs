//! Illumination normalization.
//!
//! Uneven lighting across a face shifts the measured skin lightness, so each
//! zone's L channel goes through contrast-limited adaptive histogram
//! equalization before masking: the zone is partitioned into a fixed tile
//! grid, each tile's histogram is clipped and equalized, and per-pixel
//! values are remapped by bilinear interpolation between the four
//! surrounding tile mappings. The clip limit bounds per-bin amplification so
//! near-uniform regions (flat shadows, blown highlights) do not acquire
//! artificial contrast. The chroma channels are never touched, and the whole
//! transform is deterministic.

use crate::config::LightingParams;

/// Equalize a zone's L plane in place.
pub fn normalize_lightness(l: &mut [u8], width: usize, height: usize, params: &LightingParams) {
    if l.is_empty() {
        return;
    }
    debug_assert_eq!(l.len(), width * height);

    // A tile grid wider than the zone collapses to one tile per pixel
    // column/row; the interpolation below handles any grid shape.
    let tiles_x = (params.tile_cols as usize).clamp(1, width);
    let tiles_y = (params.tile_rows as usize).clamp(1, height);
    let tile_w = width.div_ceil(tiles_x);
    let tile_h = height.div_ceil(tiles_y);
    let tiles_x = width.div_ceil(tile_w);
    let tiles_y = height.div_ceil(tile_h);

    // Per-tile clipped-CDF lookup tables.
    let mut luts = vec![[0u8; 256]; tiles_x * tiles_y];
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x0 = tx * tile_w;
            let x1 = ((tx + 1) * tile_w).min(width);
            let y0 = ty * tile_h;
            let y1 = ((ty + 1) * tile_h).min(height);

            let mut hist = [0u32; 256];
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[l[y * width + x] as usize] += 1;
                }
            }

            let area = ((x1 - x0) * (y1 - y0)) as u32;
            clip_histogram(&mut hist, area, params.clip_limit);
            build_lut(&hist, area, &mut luts[ty * tiles_x + tx]);
        }
    }

    // Remap every pixel by bilinear interpolation between the mappings of
    // the four nearest tile centers.
    for y in 0..height {
        let gy = (y as f32 + 0.5) / tile_h as f32 - 0.5;
        let ty0 = gy.floor() as isize;
        let wy = gy - ty0 as f32;
        let ty0c = ty0.clamp(0, tiles_y as isize - 1) as usize;
        let ty1c = (ty0 + 1).clamp(0, tiles_y as isize - 1) as usize;

        for x in 0..width {
            let gx = (x as f32 + 0.5) / tile_w as f32 - 0.5;
            let tx0 = gx.floor() as isize;
            let wx = gx - tx0 as f32;
            let tx0c = tx0.clamp(0, tiles_x as isize - 1) as usize;
            let tx1c = (tx0 + 1).clamp(0, tiles_x as isize - 1) as usize;

            let v = l[y * width + x] as usize;
            let top = (1.0 - wx) * luts[ty0c * tiles_x + tx0c][v] as f32
                + wx * luts[ty0c * tiles_x + tx1c][v] as f32;
            let bottom = (1.0 - wx) * luts[ty1c * tiles_x + tx0c][v] as f32
                + wx * luts[ty1c * tiles_x + tx1c][v] as f32;

            l[y * width + x] = ((1.0 - wy) * top + wy * bottom).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Clip the histogram at `clip_limit` times the uniform bin height and
/// redistribute the excess evenly across the value range.
fn clip_histogram(hist: &mut [u32; 256], area: u32, clip_limit: f32) {
    let limit = ((clip_limit * area as f32 / 256.0) as u32).max(1);

    let mut excess = 0u32;
    for bin in hist.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }

    let bonus = excess / 256;
    for bin in hist.iter_mut() {
        *bin += bonus;
    }

    // Spread the leftover counts at a regular stride so no part of the
    // value range is favored.
    let mut residual = (excess % 256) as usize;
    if residual > 0 {
        let step = (256 / residual).max(1);
        let mut i = 0;
        while i < 256 && residual > 0 {
            hist[i] += 1;
            residual -= 1;
            i += step;
        }
    }
}

/// Build the equalization lookup table from a clipped histogram.
fn build_lut(hist: &[u32; 256], area: u32, lut: &mut [u8; 256]) {
    let scale = 255.0 / area as f32;
    let mut cumulative = 0u32;
    for (i, &count) in hist.iter().enumerate() {
        cumulative += count;
        lut[i] = (cumulative as f32 * scale).round().min(255.0) as u8;
    }
}
