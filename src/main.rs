//! Dino Dash entry point
//!
//! Window setup, input mapping and the fixed-timestep game loop. All game
//! rules live in the simulation; this file only shuttles inputs in and
//! frames out.

use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use winit::{
    event::{ElementState, Event as WinitEvent, KeyEvent, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use dino_dash::Tuning;
use dino_dash::consts::{MAX_DT, MAX_SUBSTEPS, SIM_DT};
use dino_dash::renderer::{RenderState, shapes};
use dino_dash::sim::{CameraRig, GamePhase, GameState, TickInput, tick};

/// Score and lives go in the window title; there is no in-scene text
fn hud_title(state: &GameState) -> String {
    match state.phase {
        GamePhase::Running => {
            format!("Dino Dash - score {} - lives {}", state.score, state.lives)
        }
        GamePhase::Paused => format!(
            "Dino Dash - score {} - lives {} [paused]",
            state.score, state.lives
        ),
        GamePhase::GameOver => {
            format!("Dino Dash - GAME OVER - score {} (R to restart)", state.score)
        }
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Run seed: {seed}");

    let tuning = Tuning::load_or_default(Path::new("tuning.json"));
    let mut game = GameState::new(seed, tuning);
    let mut camera = CameraRig::new();
    let mut input = TickInput::default();

    let event_loop = EventLoop::new().expect("Failed to create event loop");

    let window_attributes = Window::default_attributes()
        .with_title("Dino Dash")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
    let window = Arc::new(
        event_loop
            .create_window(window_attributes)
            .expect("Failed to create window"),
    );

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });
    let surface = instance
        .create_surface(window.clone())
        .expect("Failed to create surface");
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))
    .expect("Failed to get adapter");
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let size = window.inner_size();
    let mut render_state = pollster::block_on(RenderState::new(
        surface,
        &adapter,
        size.width.max(1),
        size.height.max(1),
    ));

    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;

    event_loop
        .run(move |event, control_flow| match event {
            WinitEvent::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => control_flow.exit(),
                WindowEvent::Resized(physical_size) => {
                    render_state.resize(physical_size.width, physical_size.height);
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Right,
                    ..
                } => camera.toggle_mode(),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            state: key_state,
                            physical_key: PhysicalKey::Code(code),
                            repeat,
                            ..
                        },
                    ..
                } => {
                    let pressed = *key_state == ElementState::Pressed;
                    let fresh = pressed && !*repeat;
                    match code {
                        KeyCode::Escape | KeyCode::KeyQ if pressed => control_flow.exit(),
                        KeyCode::Space if fresh => input.jump = true,
                        KeyCode::KeyC => input.crouch = pressed,
                        KeyCode::KeyP if fresh => input.pause = true,
                        KeyCode::KeyR if fresh => input.reset = true,
                        KeyCode::KeyV if fresh => camera.toggle_mode(),
                        KeyCode::ArrowLeft if pressed => camera.adjust_yaw(-0.08),
                        KeyCode::ArrowRight if pressed => camera.adjust_yaw(0.08),
                        KeyCode::ArrowUp if pressed => camera.adjust_pitch(0.05),
                        KeyCode::ArrowDown if pressed => camera.adjust_pitch(-0.05),
                        KeyCode::Minus if pressed => camera.adjust_distance(1.0),
                        KeyCode::Equal if pressed => camera.adjust_distance(-1.0),
                        _ => {}
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let dt = (now - last_frame).as_secs_f32().min(MAX_DT);
                    last_frame = now;

                    accumulator += dt;
                    let mut substeps = 0;
                    while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                        tick(&mut game, &input, SIM_DT);
                        accumulator -= SIM_DT;
                        substeps += 1;

                        // Clear one-shot inputs after processing
                        input.jump = false;
                        input.pause = false;
                        input.reset = false;
                    }
                    // Drop any backlog once the substep cap is hit so a
                    // sustained stall skips world time instead of pinning
                    // the loop at max substeps
                    if substeps == MAX_SUBSTEPS {
                        accumulator = 0.0;
                    }

                    window.set_title(&hud_title(&game));

                    let (eye, target) = camera.eye_target(&game.player);
                    render_state.set_camera(eye, target);
                    let vertices = shapes::scene_vertices(&game);
                    match render_state.render(&vertices) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let (w, h) = render_state.size;
                            render_state.resize(w, h);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => control_flow.exit(),
                        Err(e) => log::warn!("Surface error: {e:?}"),
                    }
                }
                _ => {}
            },
            WinitEvent::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .expect("Event loop error");
}
