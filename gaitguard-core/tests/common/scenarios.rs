//! Named walking scenarios with expected outcomes

use gaitguard_core::RiskLevel;

use super::generators::WalkGenerator;

/// Expected results for a scenario
#[derive(Debug, Clone, Copy)]
pub struct ExpectedOutcomes {
    pub cadence: f64,
    pub speed: f64,
    pub step_length: f64,
    /// Highest risk level the scenario may produce
    pub max_level: RiskLevel,
    /// Lowest risk level the scenario must produce
    pub min_level: RiskLevel,
}

/// A walk plus what it should measure as
#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub name: &'static str,
    pub walk: WalkGenerator,
    pub duration_s: f64,
    pub expected: ExpectedOutcomes,
}

pub struct Scenarios;

impl Scenarios {
    /// Brisk healthy adult
    pub fn healthy_adult() -> TestScenario {
        let walk = WalkGenerator::default();
        TestScenario {
            name: "healthy_adult",
            walk,
            duration_s: 20.0,
            expected: ExpectedOutcomes {
                cadence: walk.cadence(),
                speed: walk.speed(),
                step_length: walk.step_length(),
                max_level: RiskLevel::Low,
                min_level: RiskLevel::Low,
            },
        }
    }

    /// Slow short-stepped shuffle
    ///
    /// 75 spm with 0.3 m steps gives 0.375 m/s, below the speed at which the
    /// speed penalty is full.
    pub fn shuffling_gait() -> TestScenario {
        let walk = WalkGenerator {
            cycle_s: 1.6,
            swing_s: 0.5,
            stride_m: 0.6,
            swing_height_m: 0.05,
            ..WalkGenerator::default()
        };
        TestScenario {
            name: "shuffling_gait",
            walk,
            duration_s: 30.0,
            expected: ExpectedOutcomes {
                cadence: walk.cadence(),
                speed: walk.speed(),
                step_length: walk.step_length(),
                max_level: RiskLevel::High,
                min_level: RiskLevel::Moderate,
            },
        }
    }

    /// Healthy walk captured on a raised floor with stance jitter
    pub fn noisy_raised_floor() -> TestScenario {
        let walk = WalkGenerator {
            floor_y: -1.1,
            stance_noise_m: 0.003,
            ..WalkGenerator::default()
        };
        TestScenario {
            name: "noisy_raised_floor",
            walk,
            duration_s: 20.0,
            expected: ExpectedOutcomes {
                cadence: walk.cadence(),
                speed: walk.speed(),
                step_length: walk.step_length(),
                max_level: RiskLevel::Moderate,
                min_level: RiskLevel::Low,
            },
        }
    }

    pub fn all_scenarios() -> Vec<TestScenario> {
        vec![Self::healthy_adult(), Self::shuffling_gait(), Self::noisy_raised_floor()]
    }
}
