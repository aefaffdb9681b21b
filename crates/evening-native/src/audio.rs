//! Cue playback and the independent cue-scheduler thread.
//!
//! A cpal output stream drains a small shared mixer state; `CuePlayer` is
//! the owned handle through which the cue is (re)triggered. If no output
//! device or stream is available the handle is inert and every trigger is
//! a silent no-op. Stream errors are swallowed; a missed cue is simply
//! silent.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use evening_core::{AnimationClock, Controls, CueSchedule};
use std::sync::{Arc, Mutex};
use std::thread;

// Synthesized bounce thump
const CUE_FREQ_HZ: f32 = 170.0;
const CUE_DURATION_SEC: f32 = 0.22;
const CUE_ATTACK_SEC: f32 = 0.004;

struct ActiveCue {
    phase: f32,     // radians
    phase_inc: f32, // radians per sample
    samples_emitted: u32,
    total_samples: u32,
    attack_samples: u32,
}

impl ActiveCue {
    fn new(sample_rate: f32) -> Self {
        let total = (CUE_DURATION_SEC * sample_rate) as u32;
        Self {
            phase: 0.0,
            phase_inc: 2.0 * std::f32::consts::PI * CUE_FREQ_HZ / sample_rate,
            samples_emitted: 0,
            total_samples: total.max(1),
            attack_samples: ((CUE_ATTACK_SEC * sample_rate) as u32).min(total),
        }
    }
}

pub struct CueState {
    sample_rate: f32,
    volume: f32,
    active: Option<ActiveCue>,
}

pub type SharedCueState = Arc<Mutex<CueState>>;

impl CueState {
    pub fn shared() -> SharedCueState {
        Arc::new(Mutex::new(Self {
            sample_rate: 44_100.0,
            volume: 0.0,
            active: None,
        }))
    }

    fn next_sample(&mut self) -> f32 {
        let Some(cue) = self.active.as_mut() else {
            return 0.0;
        };
        let n = cue.samples_emitted;
        let env = if n < cue.attack_samples {
            n as f32 / cue.attack_samples.max(1) as f32
        } else {
            let decay = cue.total_samples - cue.attack_samples;
            1.0 - (n - cue.attack_samples) as f32 / decay.max(1) as f32
        };
        let sample = cue.phase.sin() * env * self.volume;
        cue.phase += cue.phase_inc;
        if cue.phase > 2.0 * std::f32::consts::PI {
            cue.phase -= 2.0 * std::f32::consts::PI;
        }
        cue.samples_emitted += 1;
        if cue.samples_emitted >= cue.total_samples {
            self.active = None;
        }
        sample
    }
}

/// Owned handle to the playback primitive. The cue is always invoked
/// through this handle, never through a bare function reference.
#[derive(Clone)]
pub struct CuePlayer {
    state: SharedCueState,
}

impl CuePlayer {
    pub fn new(state: SharedCueState) -> Self {
        Self { state }
    }

    pub fn set_volume(&self, volume: f32) {
        if let Ok(mut guard) = self.state.lock() {
            guard.volume = volume;
        }
    }

    /// Play the cue from the start, replacing any cue still sounding.
    pub fn play(&self) {
        if let Ok(mut guard) = self.state.lock() {
            let sample_rate = guard.sample_rate;
            guard.active = Some(ActiveCue::new(sample_rate));
        }
    }
}

/// Open the default output device and keep the returned stream alive for
/// the life of the process. Returns None when no usable output exists.
pub fn start_cue_output(state: SharedCueState) -> Option<cpal::Stream> {
    let host = cpal::default_host();
    let device = host.default_output_device()?;
    let config = device.default_output_config().ok()?;
    let channels = config.channels() as usize;
    state.lock().ok()?.sample_rate = config.sample_rate().0 as f32;

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => build_output::<f32>(&device, &config.into(), channels, state),
        cpal::SampleFormat::I16 => build_output::<i16>(&device, &config.into(), channels, state),
        cpal::SampleFormat::U16 => build_output::<u16>(&device, &config.into(), channels, state),
        _ => return None,
    }
    .ok()?;
    stream.play().ok()?;
    Some(stream)
}

fn build_output<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: SharedCueState,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let mut guard = state.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                let sample = guard.next_sample();
                for out in frame.iter_mut() {
                    *out = T::from_sample(sample);
                }
            }
        },
        |_err| {},
        None,
    )
}

/// Arm the cue timer: fires at `epoch + initial_delay + n * period`,
/// reading the mute flag on every fire. The thread is never cancelled;
/// muting gates only the audible effect.
pub fn arm_cue_loop(
    clock: AnimationClock,
    schedule: CueSchedule,
    controls: Arc<Controls>,
    player: CuePlayer,
) {
    let spawned = thread::Builder::new()
        .name("cue-scheduler".into())
        .spawn(move || {
            for n in 0u32.. {
                let target = schedule.fire_time(n);
                let elapsed = clock.elapsed();
                if target > elapsed {
                    thread::sleep(target - elapsed);
                }
                if controls.sound_enabled() {
                    player.play();
                }
            }
        });
    if spawned.is_err() {
        log::warn!("could not start cue scheduler; running without sound");
    }
}
