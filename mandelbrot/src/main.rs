//! Static Mandelbrot set renderer.
//!
//! Computes the escape-time field once for the classic view of the set and
//! blits it to a window. Recomputes only when the window is resized.
//! Esc quits, S saves the current frame as a PNG.

use anyhow::Result;
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use sim_core::{EscapeField, EscapeParams, Grid, Palette, Viewport};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const VIEW: Viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5);
const MAX_ITER: u32 = 200;

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Mandelbrot Set")
        .with_inner_size(LogicalSize::new(800.0, 800.0))
        .with_min_inner_size(LogicalSize::new(160.0, 160.0))
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut width = size.width.max(1);
    let mut height = size.height.max(1);
    let surface_texture = SurfaceTexture::new(width, height, &window);
    let mut pixels = Pixels::new(width, height, surface_texture)?;

    let params = EscapeParams::new(MAX_ITER)?;
    let palette = Palette::new(MAX_ITER);
    let mut field = compute_field(width, height, params)?;
    info!("initial field computed at {width}x{height}");
    let mut needs_redraw = true;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => {
                    match pressed_key(&input) {
                        Some(VirtualKeyCode::Escape) => *control_flow = ControlFlow::Exit,
                        Some(VirtualKeyCode::S) => {
                            if let Err(e) = save_frame(pixels.frame(), width, height, "mandelbrot")
                            {
                                error!("PNG capture failed: {e}");
                            }
                        }
                        _ => {}
                    }
                }
                WindowEvent::Resized(new_size) => {
                    width = new_size.width.max(1);
                    height = new_size.height.max(1);
                    if let Err(e) = pixels.resize_surface(width, height) {
                        error!("resize surface error: {e}");
                    }
                    if let Err(e) = pixels.resize_buffer(width, height) {
                        error!("resize buffer error: {e}");
                    }
                    match compute_field(width, height, params) {
                        Ok(f) => field = f,
                        Err(e) => error!("field recompute failed: {e}"),
                    }
                    needs_redraw = true;
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    width = new_inner_size.width.max(1);
                    height = new_inner_size.height.max(1);
                    if let Err(e) = pixels.resize_surface(width, height) {
                        error!("scale factor resize surface error: {e}");
                    }
                    if let Err(e) = pixels.resize_buffer(width, height) {
                        error!("scale factor resize buffer error: {e}");
                    }
                    match compute_field(width, height, params) {
                        Ok(f) => field = f,
                        Err(e) => error!("field recompute failed: {e}"),
                    }
                    needs_redraw = true;
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if needs_redraw {
                    needs_redraw = false;
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                blit(&field, &palette, pixels.frame_mut());
                if let Err(e) = pixels.render() {
                    error!("pixels.render() failed: {e}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn compute_field(width: u32, height: u32, params: EscapeParams) -> Result<EscapeField> {
    let grid = Grid::new(width as usize, height as usize, VIEW)?;
    Ok(EscapeField::compute(&grid, params))
}

fn blit(field: &EscapeField, palette: &Palette, frame: &mut [u8]) {
    for (cell, px) in field.cells().iter().zip(frame.chunks_exact_mut(4)) {
        let rgb = palette.color(*cell);
        px[0] = rgb[0];
        px[1] = rgb[1];
        px[2] = rgb[2];
        px[3] = 0xFF;
    }
    // count for the curious: how much of the view is inside the set
    let bounded = field.cells().iter().filter(|c| c.is_bounded()).count();
    log::debug!("{bounded} of {} points bounded", field.cells().len());
}

fn pressed_key(input: &KeyboardInput) -> Option<VirtualKeyCode> {
    if input.state == ElementState::Pressed {
        input.virtual_keycode
    } else {
        None
    }
}

fn save_frame(frame: &[u8], width: u32, height: u32, prefix: &str) -> Result<()> {
    let img = image::RgbaImage::from_raw(width, height, frame.to_vec())
        .ok_or_else(|| anyhow::anyhow!("frame buffer does not match {width}x{height}"))?;
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let name = format!("{prefix}-{stamp}.png");
    img.save(&name)?;
    info!("saved {name}");
    Ok(())
}
