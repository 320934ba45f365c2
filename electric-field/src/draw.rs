//! Direct RGBA framebuffer rasterizer for the field scene: lines, arrows and
//! filled discs, clipped to the frame.

pub fn clear(frame: &mut [u8], rgb: [u8; 3]) {
    for px in frame.chunks_exact_mut(4) {
        px[0] = rgb[0];
        px[1] = rgb[1];
        px[2] = rgb[2];
        px[3] = 0xFF;
    }
}

pub fn set_pixel(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, rgb: [u8; 3]) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let idx = ((y as u32 * width + x as u32) * 4) as usize;
    frame[idx] = rgb[0];
    frame[idx + 1] = rgb[1];
    frame[idx + 2] = rgb[2];
    frame[idx + 3] = 0xFF;
}

/// Bresenham line between two pixel coordinates.
pub fn draw_line(
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

/// Line with a two-stroke arrowhead at the tip, oriented along `angle`
/// (radians, screen coordinates).
pub fn draw_arrow(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x0: i32,
    y0: i32,
    angle: f64,
    length: f64,
    rgb: [u8; 3],
) {
    let tip_x = x0 + (angle.cos() * length).round() as i32;
    let tip_y = y0 + (angle.sin() * length).round() as i32;
    draw_line(frame, width, height, x0, y0, tip_x, tip_y, rgb);

    let head = (length * 0.35).max(2.0);
    for side in [-1.0, 1.0] {
        let a = angle + std::f64::consts::PI - side * 0.5;
        let hx = tip_x + (a.cos() * head).round() as i32;
        let hy = tip_y + (a.sin() * head).round() as i32;
        draw_line(frame, width, height, tip_x, tip_y, hx, hy, rgb);
    }
}

pub fn fill_disc(
    frame: &mut [u8],
    width: u32,
    height: u32,
    cx: i32,
    cy: i32,
    radius: i32,
    rgb: [u8; 3],
) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                set_pixel(frame, width, height, cx + dx, cy + dy, rgb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * width + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2]]
    }

    #[test]
    fn test_line_endpoints_are_set() {
        let mut frame = vec![0u8; 16 * 16 * 4];
        draw_line(&mut frame, 16, 16, 2, 3, 12, 9, [255, 255, 255]);
        assert_eq!(px(&frame, 16, 2, 3), [255, 255, 255]);
        assert_eq!(px(&frame, 16, 12, 9), [255, 255, 255]);
    }

    #[test]
    fn test_out_of_bounds_pixels_are_clipped() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        // must not panic
        draw_line(&mut frame, 8, 8, -5, -5, 20, 20, [10, 20, 30]);
        fill_disc(&mut frame, 8, 8, 7, 7, 4, [10, 20, 30]);
    }

    #[test]
    fn test_disc_center_filled() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        fill_disc(&mut frame, 8, 8, 4, 4, 2, [200, 0, 0]);
        assert_eq!(px(&frame, 8, 4, 4), [200, 0, 0]);
        assert_eq!(px(&frame, 8, 0, 0), [0, 0, 0]);
    }
}
