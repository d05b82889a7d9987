//! Software preview of a partially drawn path.

use core::f32::consts::PI;
use alloc::vec::Vec;

use wizdraw::stroke;

use vek::vec::Vec2;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use rgb::{ComponentMap, RGB, RGBA, RGBA8};

use crate::path::PathError::CanvasTooSmall;
use crate::path::{PathModel, PathResult};
use crate::scene::CURVE_COLOR;
use crate::tessellation::{Float, Point3};

pub type Couple = vek::vec::repr_c::vec2::Vec2<Float>;

pub const CLEAR_COLOR: RGB<Float> = RGB { r: 0.160, g: 0.294, b: 0.305 };
/// Degrees of yaw added by each `View::turn`.
pub const TURN_STEP: Float = 0.006;
/// World distance from the canvas center to its shorter edge at scale 1.
pub const VIEW_EXTENT: Float = 8.0;

/// Orthographic orbit around the origin. Angles are in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    pub pitch: Float,
    pub yaw: Float,
    pub scale: Float,
}

impl Default for View {
    fn default() -> Self {
        Self {
            pitch: 25.0,
            yaw: -45.0,
            scale: 0.92,
        }
    }
}

impl View {
    pub fn turn(&mut self) {
        self.yaw += TURN_STEP;
    }

    /// Pixel position of `p` on a `w` by `h` canvas, y pointing down.
    pub fn project(&self, p: Point3, w: usize, h: usize) -> Couple {
        let (sin_yaw, cos_yaw) = (self.yaw * PI / 180.0).sin_cos();
        let (sin_pitch, cos_pitch) = (self.pitch * PI / 180.0).sin_cos();

        let p = p * self.scale;
        let x = p.x * cos_yaw + p.z * sin_yaw;
        let z = p.z * cos_yaw - p.x * sin_yaw;
        let y = p.y * cos_pitch - z * sin_pitch;

        let unit = (w.min(h) as Float) / (2.0 * VIEW_EXTENT);
        Couple::new(w as Float * 0.5 + x * unit, h as Float * 0.5 - y * unit)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Preview {
    pub view: View,
    pub clear: RGB<Float>,
    pub color: RGBA<Float>,
    pub width: Float,
}

impl Default for Preview {
    fn default() -> Self {
        Self {
            view: View::default(),
            clear: CLEAR_COLOR,
            color: CURVE_COLOR,
            width: 1.5,
        }
    }
}

impl Preview {
    /// Clears the canvas then strokes `curve` as one polyline.
    ///
    /// `mask` needs `w * h` bytes; rows of `dst` are `stride` pixels apart.
    pub fn render<const SSAA: usize>(
        &self,
        curve: &[Point3],
        dst: &mut [RGBA8],
        mask: &mut [u8],
        w: usize,
        h: usize,
        stride: usize,
    ) -> PathResult<()> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        if stride < w || mask.len() < w * h || dst.len() < stride * (h - 1) + w {
            return Err(CanvasTooSmall);
        }

        let clear = to_rgba8(RGBA::new(self.clear.r, self.clear.g, self.clear.b, 1.0));
        for row in 0..h {
            dst[row * stride..][..w].fill(clear);
        }

        if curve.len() < 2 {
            return Ok(());
        }

        let flat: Vec<Couple> = curve.iter().map(|p| self.view.project(*p, w, h)).collect();
        let mask = &mut mask[..w * h];
        mask.fill(0);
        stroke::<SSAA>(&flat, mask, Vec2::new(w, h), self.width);

        let color = to_rgba8(self.color);
        for (row, coverage) in mask.chunks_exact(w).enumerate() {
            let line = row * stride;
            for (x, q) in coverage.iter().enumerate() {
                if *q != 0 {
                    blend_pixel(&mut dst[line + x], color, *q);
                }
            }
        }

        Ok(())
    }

    /// Renders the first `visible` points of `path`.
    pub fn render_playback<const SSAA: usize>(
        &self,
        path: &PathModel,
        visible: usize,
        dst: &mut [RGBA8],
        mask: &mut [u8],
        w: usize,
        h: usize,
        stride: usize,
    ) -> PathResult<()> {
        let curve = path.curve();
        self.render::<SSAA>(&curve[..visible.min(curve.len())], dst, mask, w, h, stride)
    }
}

fn to_rgba8(color: RGBA<Float>) -> RGBA8 {
    color.map(|c| (c * 255.0) as u8)
}

/// Source-over blending of `src` weighted by mask `coverage`.
#[inline(always)]
pub fn blend_pixel(dst: &mut RGBA8, src: RGBA8, coverage: u8) {
    let alpha = (src.a as u32 * coverage as u32) / 255;
    let keep = 255 - alpha;
    let mix = |s: u8, d: u8| ((s as u32 * alpha + d as u32 * keep) / 255) as u8;

    dst.r = mix(src.r, dst.r);
    dst.g = mix(src.g, dst.g);
    dst.b = mix(src.b, dst.b);
    dst.a = (alpha + (dst.a as u32 * keep) / 255) as u8;
}
