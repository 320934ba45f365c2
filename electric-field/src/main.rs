//! Electric field of two orbiting point charges.
//!
//! A positive and a negative unit charge orbit the origin, always
//! diametrically opposite. Each frame resamples the Coulomb field on a 32x32
//! observation grid and draws it quiver-style: fixed-length arrows oriented
//! along the local field, colored by the field angle through an HSV wheel.
//! Esc quits, S saves a PNG.

mod draw;

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use sim_core::{field, palette, FieldGrid, Grid, Viewport};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const WORLD: Viewport = Viewport::new(-5.0, 5.0, -5.0, 5.0);
const GRID_SIZE: usize = 32;
const CHARGE_Q: f64 = 1.0;
const ORBIT_RADIUS: f64 = 2.0;
const TIME_STEPS: usize = 200;
const CANVAS: u32 = 640;
const FRAME_INTERVAL: Duration = Duration::from_millis(50);
const ARROW_LEN: f64 = CANVAS as f64 / GRID_SIZE as f64 * 0.8;
const CHARGE_RADIUS: i32 = 8;

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Electric Field")
        .with_inner_size(LogicalSize::new(CANVAS as f64, CANVAS as f64))
        .build(&event_loop)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), &window);
    let mut pixels = Pixels::new(CANVAS, CANVAS, surface_texture)?;

    let grid = Grid::new(GRID_SIZE, GRID_SIZE, WORLD)?;
    info!("observation grid {GRID_SIZE}x{GRID_SIZE} over [-5,5]^2");

    let mut step = 0usize;
    let mut last_advance = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => match pressed_key(&input) {
                    Some(VirtualKeyCode::Escape) => *control_flow = ControlFlow::Exit,
                    Some(VirtualKeyCode::S) => {
                        if let Err(e) = save_frame(pixels.frame(), step) {
                            error!("PNG capture failed: {e}");
                        }
                    }
                    _ => {}
                },
                WindowEvent::Resized(new_size) => {
                    if let Err(e) =
                        pixels.resize_surface(new_size.width.max(1), new_size.height.max(1))
                    {
                        error!("resize surface error: {e}");
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if last_advance.elapsed() >= FRAME_INTERVAL {
                    step = (step + 1) % TIME_STEPS;
                    last_advance = Instant::now();
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let t = 2.0 * PI * step as f64 / TIME_STEPS as f64;
                let charges = field::orbiting_pair(CHARGE_Q, ORBIT_RADIUS, t);
                let sampled = FieldGrid::sample(&charges, &grid);
                render(pixels.frame_mut(), &grid, &sampled, &charges);
                if let Err(e) = pixels.render() {
                    error!("pixels.render() failed: {e}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

/// Map world coordinates to canvas pixels (y flipped, screen-down).
fn to_screen(x: f64, y: f64) -> (i32, i32) {
    let sx = (x - WORLD.x_min) / WORLD.width() * CANVAS as f64;
    let sy = (WORLD.y_max - y) / WORLD.height() * CANVAS as f64;
    (sx.round() as i32, sy.round() as i32)
}

fn render(frame: &mut [u8], grid: &Grid, sampled: &FieldGrid, charges: &[field::Charge]) {
    draw::clear(frame, [0, 0, 0]);

    for iy in 0..grid.height() {
        for ix in 0..grid.width() {
            let (ex, ey) = sampled.vector(ix, iy);
            let angle = ey.atan2(ex);
            let rgb = palette::angle_color(angle);
            let (wx, wy) = grid.point(ix, iy);
            let (sx, sy) = to_screen(wx, wy);
            // screen y grows downward, so the drawn angle is mirrored
            draw::draw_arrow(frame, CANVAS, CANVAS, sx, sy, -angle, ARROW_LEN, rgb);
        }
    }

    for c in charges {
        let (sx, sy) = to_screen(c.x, c.y);
        let rgb = if c.q > 0.0 {
            [230, 40, 40]
        } else {
            [40, 80, 230]
        };
        draw::fill_disc(frame, CANVAS, CANVAS, sx, sy, CHARGE_RADIUS, rgb);
    }
}

fn pressed_key(input: &KeyboardInput) -> Option<VirtualKeyCode> {
    if input.state == ElementState::Pressed {
        input.virtual_keycode
    } else {
        None
    }
}

fn save_frame(frame: &[u8], step: usize) -> Result<()> {
    let img = image::RgbaImage::from_raw(CANVAS, CANVAS, frame.to_vec())
        .ok_or_else(|| anyhow::anyhow!("frame buffer does not match {CANVAS}x{CANVAS}"))?;
    let name = format!("electric-field-step{step:03}.png");
    img.save(&name)?;
    info!("saved {name}");
    Ok(())
}
