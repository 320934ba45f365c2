//! Polarized light wave passing through a filter.
//!
//! The wave grows along the propagation axis frame by frame, elliptically
//! polarized at first. At the polarizer frame the y component is filtered
//! away and the wave continues linearly polarized; the filter plane at y = 0
//! becomes more visible at the same moment. The 200-frame loop repeats.
//! Esc quits, S saves a PNG.

mod draw;
mod project;

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use project::Projector;
use sim_core::wave::{self, Polarization};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const CANVAS: u32 = 640;
const FRAME_INTERVAL: Duration = Duration::from_millis(40);
const WAVE_COLOR: [u8; 3] = [0, 255, 255];
const PLANE_COLOR: [u8; 3] = [255, 255, 255];
/// Transverse extent of the polarizer plane, matching the scene bounds.
const PLANE_HALF_WIDTH: f64 = 1.5;

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Polarized Light")
        .with_inner_size(LogicalSize::new(CANVAS as f64, CANVAS as f64))
        .build(&event_loop)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), &window);
    let mut pixels = Pixels::new(CANVAS, CANVAS, surface_texture)?;

    let projector = Projector::new(CANVAS);
    let mut frame_index = 0usize;
    let mut last_advance = Instant::now();
    let mut last_polarization = Polarization::Elliptical;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => match pressed_key(&input) {
                    Some(VirtualKeyCode::Escape) => *control_flow = ControlFlow::Exit,
                    Some(VirtualKeyCode::S) => {
                        if let Err(e) = save_frame(pixels.frame(), frame_index) {
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
                    frame_index = (frame_index + 1) % wave::WAVE_SAMPLES;
                    last_advance = Instant::now();
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let wf = wave::wave_frame(frame_index);
                if wf.polarization != last_polarization {
                    info!("polarization switched to {:?} at frame {frame_index}", wf.polarization);
                    last_polarization = wf.polarization;
                }
                render(pixels.frame_mut(), &projector, &wf);
                if let Err(e) = pixels.render() {
                    error!("pixels.render() failed: {e}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn render(frame: &mut [u8], projector: &Projector, wf: &wave::WaveFrame) {
    draw::clear(frame, [0, 0, 0]);

    // polarizer plane at y = 0, spanning the transverse and full z extent
    let quad = [
        projector.project(-PLANE_HALF_WIDTH, 0.0, 0.0),
        projector.project(PLANE_HALF_WIDTH, 0.0, 0.0),
        projector.project(PLANE_HALF_WIDTH, 0.0, 2.0 * PI),
        projector.project(-PLANE_HALF_WIDTH, 0.0, 2.0 * PI),
    ];
    draw::blend_quad(frame, CANVAS, CANVAS, quad, PLANE_COLOR, wf.filter_alpha);

    let points: Vec<(i32, i32)> = wf
        .samples
        .iter()
        .map(|s| projector.project(s.x, s.y, s.z))
        .collect();
    draw::draw_polyline(frame, CANVAS, CANVAS, &points, WAVE_COLOR);
}

fn pressed_key(input: &KeyboardInput) -> Option<VirtualKeyCode> {
    if input.state == ElementState::Pressed {
        input.virtual_keycode
    } else {
        None
    }
}

fn save_frame(frame: &[u8], frame_index: usize) -> Result<()> {
    let img = image::RgbaImage::from_raw(CANVAS, CANVAS, frame.to_vec())
        .ok_or_else(|| anyhow::anyhow!("frame buffer does not match {CANVAS}x{CANVAS}"))?;
    let name = format!("polarized-light-frame{frame_index:03}.png");
    img.save(&name)?;
    info!("saved {name}");
    Ok(())
}
