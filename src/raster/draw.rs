//! Shape fills on a [`Canvas`].
//!
//! Coverage comes from an aliased `tiny_skia` mask sized to the shape's clipped bounding box, so
//! small dots stay crisp and per-shape cost tracks the shape, not the canvas.

use resvg::tiny_skia;

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::raster::canvas::Canvas;
use crate::raster::composite::{Blend, blend};

/// Half-open rectangle covering the pixel box `[x0, x1] × [y0, y1]`, both corners included.
pub fn inclusive_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
    Rect::new(
        f64::from(x0),
        f64::from(y0),
        f64::from(x1) + 1.0,
        f64::from(y1) + 1.0,
    )
}

/// Fill the half-open rectangle `rect`.
pub fn fill_rect(canvas: &mut Canvas, rect: Rect, color: Rgba8, mode: Blend) {
    let Some(r) = sk_rect(rect) else {
        return;
    };
    fill_path(canvas, &tiny_skia::PathBuilder::from_rect(r), color, mode);
}

/// Fill the ellipse inscribed in `bounds`.
pub fn fill_ellipse(canvas: &mut Canvas, bounds: Rect, color: Rgba8, mode: Blend) {
    let Some(path) = sk_rect(bounds).and_then(tiny_skia::PathBuilder::from_oval) else {
        return;
    };
    fill_path(canvas, &path, color, mode);
}

/// Fill a closed polygon (non-zero winding). Fewer than three points draws nothing.
pub fn fill_polygon(canvas: &mut Canvas, points: &[Point], color: Rgba8, mode: Blend) {
    if points.len() < 3 {
        return;
    }
    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(points[0].x as f32, points[0].y as f32);
    for p in &points[1..] {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    let Some(path) = pb.finish() else {
        return;
    };
    fill_path(canvas, &path, color, mode);
}

/// Draw a one-pixel line between two pixel positions, both endpoints included.
pub fn draw_line(canvas: &mut Canvas, from: Point, to: Point, color: Rgba8, mode: Blend) {
    if from.y == to.y || from.x == to.x {
        let rect = Rect::new(
            from.x.min(to.x),
            from.y.min(to.y),
            from.x.max(to.x) + 1.0,
            from.y.max(to.y) + 1.0,
        );
        fill_rect(canvas, rect, color, mode);
        return;
    }

    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(from.x as f32 + 0.5, from.y as f32 + 0.5);
    pb.line_to(to.x as f32 + 0.5, to.y as f32 + 0.5);
    let Some(line) = pb.finish() else {
        return;
    };
    let stroke = tiny_skia::Stroke {
        width: 1.0,
        line_cap: tiny_skia::LineCap::Square,
        ..tiny_skia::Stroke::default()
    };
    let Some(outline) = line.stroke(&stroke, 1.0) else {
        return;
    };
    fill_path(canvas, &outline, color, mode);
}

fn sk_rect(r: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_ltrb(r.x0 as f32, r.y0 as f32, r.x1 as f32, r.y1 as f32)
}

fn fill_path(canvas: &mut Canvas, path: &tiny_skia::Path, color: Rgba8, mode: Blend) {
    let b = path.bounds();
    let x0 = (b.left().floor() as i64).max(0);
    let y0 = (b.top().floor() as i64).max(0);
    let x1 = (b.right().ceil() as i64).min(i64::from(canvas.width()));
    let y1 = (b.bottom().ceil() as i64).min(i64::from(canvas.height()));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let mw = (x1 - x0) as u32;
    let mh = (y1 - y0) as u32;
    let Some(mut mask) = tiny_skia::Mask::new(mw, mh) else {
        return;
    };
    mask.fill_path(
        path,
        tiny_skia::FillRule::Winding,
        false,
        tiny_skia::Transform::from_translate(-(x0 as f32), -(y0 as f32)),
    );

    for (i, &coverage) in mask.data().iter().enumerate() {
        if coverage == 0 {
            continue;
        }
        let x = x0 + (i as i64 % i64::from(mw));
        let y = y0 + (i as i64 / i64::from(mw));
        let Some(dst) = canvas.pixel(x as u32, y as u32) else {
            continue;
        };
        canvas.set_pixel(x, y, blend(dst, color, coverage, mode));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;
