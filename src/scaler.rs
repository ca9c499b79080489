use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Precomputed source index per destination pixel (nearest sample).
pub struct ScaleMap {
    xs: Vec<usize>,
    ys: Vec<usize>,
}

impl ScaleMap {
    pub fn empty() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }
}

pub fn build_scale_map(dst_w: usize, dst_h: usize, src_w: usize, src_h: usize) -> ScaleMap {
    let sx = src_w as f32 / dst_w as f32;
    let sy = src_h as f32 / dst_h as f32;
    let xs = (0..dst_w)
        .map(|x| ((x as f32 * sx) as usize).min(src_w - 1))
        .collect();
    let ys = (0..dst_h)
        .map(|y| ((y as f32 * sy) as usize).min(src_h - 1))
        .collect();
    ScaleMap { xs, ys }
}

/// Nearest-neighbor stretch of the logical buffer onto the window surface.
/// Rows are processed in parallel for cache friendly writes.
pub fn blit_nearest(dst: &mut [u32], dst_w: usize, src: &[u32], src_w: usize, map: &ScaleMap) {
    dst.par_chunks_mut(dst_w).enumerate().for_each(|(y, row)| {
        let src_row = map.ys[y] * src_w;
        for (x, out) in row.iter_mut().enumerate() {
            *out = src[src_row + map.xs[x]];
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_blit_is_identity() {
        let src: Vec<u32> = (0..16).collect();
        let map = build_scale_map(4, 4, 4, 4);
        let mut dst = vec![0u32; 16];
        blit_nearest(&mut dst, 4, &src, 4, &map);
        assert_eq!(dst, src);
    }

    #[test]
    fn upscale_replicates_the_nearest_source_pixel() {
        let src = vec![1u32, 2, 3, 4]; // 2x2
        let map = build_scale_map(4, 4, 2, 2);
        let mut dst = vec![0u32; 16];
        blit_nearest(&mut dst, 4, &src, 2, &map);
        assert_eq!(&dst[0..4], &[1, 1, 2, 2]);
        assert_eq!(&dst[12..16], &[3, 3, 4, 4]);
    }
}
