//! Animated zoom into the Mandelbrot set.
//!
//! Zooms geometrically from 1x to 50000x on a fixed center over 30 frames,
//! recomputing the full escape-time field for each frame's view box. The last
//! frame is held once the zoom completes. Esc quits, S saves a PNG.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use sim_core::{EscapeField, EscapeParams, Grid, Palette, ZoomTrajectory};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const ZOOM_CENTER: (f64, f64) = (-1.05, 0.25);
const ZOOM_START: f64 = 1.0;
const ZOOM_END: f64 = 50_000.0;
const FRAMES: u32 = 30;
const FIELD_SIZE: u32 = 800;
const MAX_ITER: u32 = 200;
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Mandelbrot Zoom")
        .with_inner_size(LogicalSize::new(FIELD_SIZE as f64, FIELD_SIZE as f64))
        .build(&event_loop)?;

    // The field resolution stays fixed; pixels scales the buffer to whatever
    // size the surface ends up at.
    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), &window);
    let mut pixels = Pixels::new(FIELD_SIZE, FIELD_SIZE, surface_texture)?;

    let params = EscapeParams::new(MAX_ITER)?;
    let palette = Palette::new(MAX_ITER);
    let trajectory = ZoomTrajectory::new(ZOOM_CENTER, ZOOM_START, ZOOM_END, FRAMES)?;
    let grid_for = move |frame: u32| -> Result<Grid> {
        Ok(Grid::new(
            FIELD_SIZE as usize,
            FIELD_SIZE as usize,
            trajectory.viewport_at(frame),
        )?)
    };

    let mut frame_index = 0u32;
    let mut field = EscapeField::compute(&grid_for(0)?, params);
    info!("zoom frame 0 of {FRAMES}: {:.2}x", trajectory.zoom_at(0));
    let mut needs_redraw = true;
    let mut last_advance = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => match pressed_key(&input) {
                    Some(VirtualKeyCode::Escape) => *control_flow = ControlFlow::Exit,
                    Some(VirtualKeyCode::S) => {
                        if let Err(e) =
                            save_frame(pixels.frame(), FIELD_SIZE, FIELD_SIZE, frame_index)
                        {
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
                    needs_redraw = true;
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let done = frame_index + 1 >= FRAMES;
                if !done && last_advance.elapsed() >= FRAME_INTERVAL {
                    frame_index += 1;
                    match grid_for(frame_index) {
                        Ok(grid) => {
                            field = EscapeField::compute(&grid, params);
                            info!(
                                "zoom frame {frame_index} of {FRAMES}: {:.2}x",
                                trajectory.zoom_at(frame_index)
                            );
                        }
                        Err(e) => error!("frame {frame_index} grid failed: {e}"),
                    }
                    last_advance = Instant::now();
                    needs_redraw = true;
                }
                if needs_redraw {
                    needs_redraw = false;
                    window.request_redraw();
                } else if done {
                    // animation finished, idle until input arrives
                    *control_flow =
                        ControlFlow::WaitUntil(Instant::now() + Duration::from_millis(100));
                }
            }
            Event::RedrawRequested(_) => {
                for (cell, px) in field
                    .cells()
                    .iter()
                    .zip(pixels.frame_mut().chunks_exact_mut(4))
                {
                    let rgb = palette.color(*cell);
                    px[0] = rgb[0];
                    px[1] = rgb[1];
                    px[2] = rgb[2];
                    px[3] = 0xFF;
                }
                if let Err(e) = pixels.render() {
                    error!("pixels.render() failed: {e}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn pressed_key(input: &KeyboardInput) -> Option<VirtualKeyCode> {
    if input.state == ElementState::Pressed {
        input.virtual_keycode
    } else {
        None
    }
}

fn save_frame(frame: &[u8], width: u32, height: u32, frame_index: u32) -> Result<()> {
    let img = image::RgbaImage::from_raw(width, height, frame.to_vec())
        .ok_or_else(|| anyhow::anyhow!("frame buffer does not match {width}x{height}"))?;
    let name = format!("mandelbrot-zoom-frame{frame_index:03}.png");
    img.save(&name)?;
    info!("saved {name}");
    Ok(())
}
