use crate::foundation::error::{MoodError, MoodResult};
use anyhow::Context as _;
use rayon::prelude::*;
use std::path::Path;

const MAX_DIM: u32 = 16_384;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha RGBA8 pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        Some(if self.premultiplied {
            demultiply(px)
        } else {
            px
        })
    }
}

fn demultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    if a == 0 || a == 255 {
        return [r, g, b, a];
    }
    let un = |c: u8| ((u16::from(c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8;
    [un(r), un(g), un(b), a]
}

/// Rasterize an SVG document at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> MoodResult<FrameRGBA> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse scene svg")?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(MoodError::render(format!(
            "scene size out of range: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| MoodError::render("failed to allocate scene pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

/// Rasterize several documents, in order. With `parallel`, work runs on a dedicated rayon pool.
pub fn rasterize_all(
    svgs: &[String],
    parallel: bool,
    threads: Option<usize>,
) -> MoodResult<Vec<FrameRGBA>> {
    if !parallel {
        return svgs.iter().map(|s| rasterize_svg(s)).collect();
    }
    let pool = build_thread_pool(threads)?;
    pool.install(|| svgs.par_iter().map(|s| rasterize_svg(s)).collect())
}

fn build_thread_pool(threads: Option<usize>) -> MoodResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MoodError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MoodError::render(format!("failed to build rayon thread pool: {e}")))
}

/// Write a frame as PNG, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> MoodResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let data: Vec<u8> = if frame.premultiplied {
        frame
            .data
            .chunks_exact(4)
            .flat_map(|px| demultiply([px[0], px[1], px[2], px[3]]))
            .collect()
    } else {
        frame.data.clone()
    };

    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/surface/raster.rs"]
mod tests;
