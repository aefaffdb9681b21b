use std::sync::Arc;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::window::WindowBuilder;

use evening_core::{
    AnimationClock, Controls, CueSchedule, PhysicsConstants, PhysicsInputs, ShineParams,
    CUE_VOLUME, SHINE_OFFSET,
};

mod audio;
mod render;

const FOCUS_TITLE: &str = "evening";
const CONFIG_TITLE: &str = "evening (config)";

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let sound_enabled = !std::env::args().any(|arg| arg == "--no-sound");
    if let Err(err) = run(sound_enabled) {
        log::error!("startup failed: {err:#}");
        std::process::exit(1);
    }
}

fn run(sound_enabled: bool) -> anyhow::Result<()> {
    // Physics constants, derived once. Invalid tuning is a startup error,
    // never a negative duration handed to a timer.
    let physics = PhysicsConstants::derive(PhysicsInputs::default())?;
    let shine = ShineParams::new(SHINE_OFFSET)?;
    log::info!(
        "bounce cycle {:.4}s (fall {:.4}s, squash {:.4}s, rebound {:.4}s, rise {:.4}s)",
        physics.cycle_duration,
        physics.first_cycle_duration,
        physics.second_cycle_duration,
        physics.third_cycle_duration,
        physics.fourth_cycle_duration,
    );

    let controls = Arc::new(Controls::new(sound_enabled));

    let event_loop = EventLoop::new()?;
    // the config caption starts visible, matching the initial panel state
    let window = WindowBuilder::new()
        .with_title(CONFIG_TITLE)
        .build(&event_loop)?;

    // A missing GPU is fatal and user-facing; a missing audio device only
    // leaves the cue player inert.
    let mut gpu = pollster::block_on(render::GpuState::new(&window, &physics, &shine))?;

    let cue_state = audio::CueState::shared();
    let _audio_stream = audio::start_cue_output(Arc::clone(&cue_state));
    let player = audio::CuePlayer::new(cue_state);
    player.set_volume(CUE_VOLUME);

    // Epoch last, right before the loops start: both the render clock and
    // the cue schedule are offsets from this instant.
    let clock = AnimationClock::start();
    if sound_enabled {
        let schedule = CueSchedule::for_bounce(&physics);
        log::info!(
            "cue armed: first fire in {:?}, period {:?}",
            schedule.initial_delay,
            schedule.period,
        );
        audio::arm_cue_loop(clock, schedule, Arc::clone(&controls), player.clone());
    }

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key.as_ref() {
                Key::Character("m") => {
                    let on = controls.toggle_sound();
                    log::info!("sound {}", if on { "on" } else { "off" });
                }
                Key::Character("c") => {
                    // two-state panel analog: title + log per transition
                    let hidden = controls.toggle_panel();
                    if hidden {
                        gpu.window.set_title(FOCUS_TITLE);
                        log::info!("config hidden");
                    } else {
                        gpu.window.set_title(CONFIG_TITLE);
                        log::info!("config shown");
                    }
                }
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => match gpu.render(clock.elapsed_secs() as f32) {
            Ok(_) => gpu.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(_) => {}
        },
        _ => {}
    })?;
    Ok(())
}
