//! Synthetic gait generators
//!
//! [`WalkGenerator`] renders a straight walk along +z as 60 Hz foot
//! positions. Each foot alternates a sinusoidal swing with a flat stance;
//! the right foot runs half a cycle behind the left. With the default
//! parameters the walk has:
//!
//! ```text
//! cycle 1.2 s → cadence 100 spm
//! stride 1.2 m, step 0.6 m → speed 1.0 m/s
//! swing 0.4 s, stance 0.8 s, double support 0.2 s
//! ```

use gaitguard_core::{Foot, SpatialSample, StepEvent, Vec3};

use super::TestRng;

/// Straight-line walk rendered as spatial samples
#[derive(Debug, Clone, Copy)]
pub struct WalkGenerator {
    /// Gait cycle (seconds)
    pub cycle_s: f64,
    /// Swing phase per cycle (seconds)
    pub swing_s: f64,
    /// Stride length (meters)
    pub stride_m: f64,
    /// Peak foot height during swing (meters)
    pub swing_height_m: f64,
    /// Floor height in device coordinates (meters)
    pub floor_y: f64,
    /// Standing time before the first lift-off (seconds)
    pub lead_in_s: f64,
    /// Frame rate (Hz)
    pub frame_rate: f64,
    /// Uniform vertical noise amplitude on stance frames (meters)
    pub stance_noise_m: f64,
    /// Point density reported with every frame
    pub point_density: Option<f64>,
}

impl Default for WalkGenerator {
    fn default() -> Self {
        Self {
            cycle_s: 1.2,
            swing_s: 0.4,
            stride_m: 1.2,
            swing_height_m: 0.1,
            floor_y: 0.0,
            lead_in_s: 0.5,
            frame_rate: 60.0,
            stance_noise_m: 0.0,
            point_density: Some(90.0),
        }
    }
}

impl WalkGenerator {
    /// Expected cadence (steps/min)
    pub fn cadence(&self) -> f64 {
        2.0 * 60.0 / self.cycle_s
    }

    /// Expected walking speed (m/s)
    pub fn speed(&self) -> f64 {
        self.stride_m / self.cycle_s
    }

    /// Expected step length (meters)
    pub fn step_length(&self) -> f64 {
        self.stride_m / 2.0
    }

    fn foot_at(&self, t: f64, offset: f64, z0: f64) -> (f64, f64) {
        let local = t - self.lead_in_s - offset;
        if local < 0.0 {
            return (0.0, z0);
        }
        let k = (local / self.cycle_s).floor();
        let phase = local - k * self.cycle_s;
        let base = z0 + k * self.stride_m;
        if phase < self.swing_s {
            let progress = (phase / (0.875 * self.swing_s)).min(1.0);
            let height = self.swing_height_m * (std::f64::consts::PI * phase / self.swing_s).sin();
            (height, base + self.stride_m * progress)
        } else {
            (0.0, base + self.stride_m)
        }
    }

    /// Frames covering `duration_s`
    pub fn samples(&self, duration_s: f64) -> Vec<SpatialSample> {
        let mut rng = TestRng::new(7);
        let heading = Vec3::new(0.0, 0.0, 1.0);
        let frames = (duration_s * self.frame_rate) as usize;
        (0..frames)
            .map(|i| {
                let t = i as f64 / self.frame_rate;
                let (left_h, left_z) = self.foot_at(t, 0.0, 0.0);
                let (right_h, right_z) = self.foot_at(t, self.cycle_s / 2.0, self.step_length());
                let mut noise = || {
                    if self.stance_noise_m > 0.0 {
                        rng.gen_range(-self.stance_noise_m, self.stance_noise_m)
                    } else {
                        0.0
                    }
                };
                let left_y = self.floor_y + left_h + if left_h == 0.0 { noise() } else { 0.0 };
                let right_y = self.floor_y + right_h + if right_h == 0.0 { noise() } else { 0.0 };
                let sample = SpatialSample::new(
                    t,
                    Vec3::new(-0.1, left_y, left_z),
                    Vec3::new(0.1, right_y, right_z),
                    heading,
                );
                match self.point_density {
                    Some(density) => sample.with_point_density(density),
                    None => sample,
                }
            })
            .collect()
    }
}

/// Alternating strikes at a fixed interval
pub fn step_sequence(count: usize, interval_s: f64, step_length_m: f64, clearance_m: f64) -> Vec<StepEvent> {
    (0..count)
        .map(|i| {
            let foot = if i % 2 == 0 { Foot::Left } else { Foot::Right };
            StepEvent::new(i as u64, foot, i as f64 * interval_s)
                .with_step_length(step_length_m)
                .with_toe_clearance(clearance_m)
        })
        .collect()
}

/// Alternating strikes with per-foot step lengths
pub fn asymmetric_sequence(count: usize, interval_s: f64, left_m: f64, right_m: f64) -> Vec<StepEvent> {
    (0..count)
        .map(|i| {
            let (foot, length) = if i % 2 == 0 { (Foot::Left, left_m) } else { (Foot::Right, right_m) };
            StepEvent::new(i as u64, foot, i as f64 * interval_s).with_step_length(length)
        })
        .collect()
}

/// Alternating strikes with lengths jittered uniformly by ±`jitter_m`
pub fn noisy_sequence(count: usize, interval_s: f64, step_length_m: f64, jitter_m: f64, seed: u32) -> Vec<StepEvent> {
    let mut rng = TestRng::new(seed);
    (0..count)
        .map(|i| {
            let foot = if i % 2 == 0 { Foot::Left } else { Foot::Right };
            let length = step_length_m + rng.gen_range(-jitter_m, jitter_m);
            StepEvent::new(i as u64, foot, i as f64 * interval_s).with_step_length(length)
        })
        .collect()
}
