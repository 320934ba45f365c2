//! Framebuffer helpers for the wave scene: opaque polylines plus
//! alpha-blended triangle fill for the translucent polarizer plane.

pub fn clear(frame: &mut [u8], rgb: [u8; 3]) {
    for px in frame.chunks_exact_mut(4) {
        px[0] = rgb[0];
        px[1] = rgb[1];
        px[2] = rgb[2];
        px[3] = 0xFF;
    }
}

fn set_pixel(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, rgb: [u8; 3]) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let idx = ((y as u32 * width + x as u32) * 4) as usize;
    frame[idx] = rgb[0];
    frame[idx + 1] = rgb[1];
    frame[idx + 2] = rgb[2];
    frame[idx + 3] = 0xFF;
}

fn blend_pixel(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, rgb: [u8; 3], alpha: f32) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let idx = ((y as u32 * width + x as u32) * 4) as usize;
    for ch in 0..3 {
        let base = frame[idx + ch] as f32;
        frame[idx + ch] = (base + (rgb[ch] as f32 - base) * alpha) as u8;
    }
    frame[idx + 3] = 0xFF;
}

fn draw_line(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    rgb: [u8; 3],
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        set_pixel(frame, width, height, x, y, rgb);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Connect successive points with line segments.
pub fn draw_polyline(
    frame: &mut [u8],
    width: u32,
    height: u32,
    points: &[(i32, i32)],
    rgb: [u8; 3],
) {
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        draw_line(frame, width, height, x0, y0, x1, y1, rgb);
    }
}

/// Alpha-blend a filled triangle over the frame, edge-function rasterization.
pub fn blend_triangle(
    frame: &mut [u8],
    width: u32,
    height: u32,
    tri: [(i32, i32); 3],
    rgb: [u8; 3],
    alpha: f32,
) {
    let [(ax, ay), (bx, by), (cx, cy)] = tri;
    let min_x = ax.min(bx).min(cx).max(0);
    let max_x = ax.max(bx).max(cx).min(width as i32 - 1);
    let min_y = ay.min(by).min(cy).max(0);
    let max_y = ay.max(by).max(cy).min(height as i32 - 1);

    let edge = |px: i32, py: i32, x0: i32, y0: i32, x1: i32, y1: i32| -> i64 {
        (x1 - x0) as i64 * (py - y0) as i64 - (y1 - y0) as i64 * (px - x0) as i64
    };
    // degenerate triangles have zero area, nothing to fill
    let area = edge(cx, cy, ax, ay, bx, by);
    if area == 0 {
        return;
    }

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let w0 = edge(x, y, ax, ay, bx, by);
            let w1 = edge(x, y, bx, by, cx, cy);
            let w2 = edge(x, y, cx, cy, ax, ay);
            let inside = if area > 0 {
                w0 >= 0 && w1 >= 0 && w2 >= 0
            } else {
                w0 <= 0 && w1 <= 0 && w2 <= 0
            };
            if inside {
                blend_pixel(frame, width, height, x, y, rgb, alpha);
            }
        }
    }
}

/// Blend a quad given as four corners in winding order.
pub fn blend_quad(
    frame: &mut [u8],
    width: u32,
    height: u32,
    quad: [(i32, i32); 4],
    rgb: [u8; 3],
    alpha: f32,
) {
    blend_triangle(frame, width, height, [quad[0], quad[1], quad[2]], rgb, alpha);
    blend_triangle(frame, width, height, [quad[0], quad[2], quad[3]], rgb, alpha);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * width + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2]]
    }

    #[test]
    fn test_polyline_touches_every_vertex() {
        let mut frame = vec![0u8; 16 * 16 * 4];
        let pts = [(1, 1), (10, 4), (12, 12)];
        draw_polyline(&mut frame, 16, 16, &pts, [0, 255, 255]);
        for (x, y) in pts {
            assert_eq!(px(&frame, 16, x as u32, y as u32), [0, 255, 255]);
        }
    }

    #[test]
    fn test_triangle_blend_is_partial() {
        let mut frame = vec![0u8; 16 * 16 * 4];
        clear(&mut frame, [0, 0, 0]);
        blend_triangle(&mut frame, 16, 16, [(0, 0), (15, 0), (0, 15)], [255, 255, 255], 0.2);
        let inside = px(&frame, 16, 2, 2);
        assert!(inside[0] > 0 && inside[0] < 255);
    }

    #[test]
    fn test_degenerate_triangle_draws_nothing() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        blend_triangle(&mut frame, 8, 8, [(1, 1), (1, 1), (1, 1)], [255, 0, 0], 0.5);
        assert!(frame.iter().all(|&b| b == 0));
    }
}
