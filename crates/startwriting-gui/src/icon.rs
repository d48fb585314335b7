//! StartWriting application icon generator.
//!
//! Produces a procedural icon: a yellow pencil drawn diagonally across a
//! cream tile, with a red dot standing in for a highlighted vowel. Rendered
//! at any resolution as RGBA pixel data for use as the window icon.

/// Generate the icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let tile_margin = s * 0.04;
    let tile_corner = s * 0.18;

    // Pencil axis: graphite tip lower-left, eraser upper-right.
    let (tip_x, tip_y) = (s * 0.18, s * 0.82);
    let (end_x, end_y) = (s * 0.84, s * 0.16);
    let half_w = s * 0.09;

    // Section boundaries along the axis (t ∈ [0, 1]).
    let graphite_end = 0.07;
    let cone_end = 0.22;
    let eraser_start = 0.86;

    let (dot_x, dot_y, dot_r) = (s * 0.30, s * 0.30, s * 0.12);

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Rounded tile. ───────────────────────────────────
            let tile_d = rounded_box_dist(px, py, s, tile_margin, tile_corner);
            let tile_aa = smooth_edge(tile_d, 0.0);
            if tile_aa > 0.0 {
                cr = 0xfd;
                cg = 0xf6;
                cb = 0xe3;
                ca = tile_aa;
            }

            // 2. Vowel dot. ──────────────────────────────────────
            let dd = ((px - dot_x).powi(2) + (py - dot_y).powi(2)).sqrt();
            let dot_aa = smooth_edge(dd, dot_r);
            if dot_aa > 0.0 {
                cr = lerp_c(cr, 0xe6, dot_aa);
                cg = lerp_c(cg, 0x2a, dot_aa);
                cb = lerp_c(cb, 0x2a, dot_aa);
                ca = ca + (1.0 - ca) * dot_aa;
            }

            // 3. Pencil. ─────────────────────────────────────────
            let t = project_t(px, py, tip_x, tip_y, end_x, end_y);
            if (0.0..=1.0).contains(&t) {
                let ld = point_to_seg_dist(px, py, tip_x, tip_y, end_x, end_y);

                // The cone widens linearly from the tip to the body.
                let width = if t < cone_end {
                    half_w * (t / cone_end)
                } else {
                    half_w
                };

                if ld < width + 1.5 {
                    let aa = smooth_edge(ld, width);
                    let col: [u8; 3] = if t < graphite_end {
                        [0x30, 0x30, 0x38]
                    } else if t < cone_end {
                        [0xe8, 0xc8, 0x98]
                    } else if t < eraser_start {
                        // Darker stripe along one side gives the body depth.
                        let side = cross_sign(px, py, tip_x, tip_y, end_x, end_y);
                        if side > 0.0 && ld > width * 0.35 {
                            [0xe0, 0xa8, 0x10]
                        } else {
                            [0xf8, 0xc8, 0x30]
                        }
                    } else {
                        [0xf0, 0x90, 0xa0]
                    };

                    cr = lerp_c(cr, col[0], aa);
                    cg = lerp_c(cg, col[1], aa);
                    cb = lerp_c(cb, col[2], aa);
                    ca = ca + (1.0 - ca) * aa;
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Signed distance to a centred square of side `size - 2 * margin` with
/// rounded corners. Negative inside.
fn rounded_box_dist(px: f32, py: f32, size: f32, margin: f32, corner: f32) -> f32 {
    let half = size * 0.5 - margin;
    let qx = (px - size * 0.5).abs() - (half - corner);
    let qy = (py - size * 0.5).abs() - (half - corner);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - corner
}

/// Perpendicular distance from a point to a line segment.
fn point_to_seg_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }
    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    let proj_x = ax + t * abx;
    let proj_y = ay + t * aby;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

/// Project point onto line segment, returning parameter t (unclamped).
fn project_t(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return 0.0;
    }
    ((px - ax) * abx + (py - ay) * aby) / len_sq
}

/// Which side of the line a→b the point lies on.
fn cross_sign(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_buffer_size() {
        let icon = generate_icon(32);
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
        assert_eq!((icon.width, icon.height), (32, 32));
    }

    #[test]
    fn test_corners_are_transparent_and_centre_is_opaque() {
        let size = 64;
        let px = render_icon(size);
        let alpha = |x: u32, y: u32| px[((y * size + x) * 4 + 3) as usize];
        assert_eq!(alpha(0, 0), 0);
        assert_eq!(alpha(size - 1, size - 1), 0);
        assert_eq!(alpha(size / 2, size / 2), 255);
    }
}
