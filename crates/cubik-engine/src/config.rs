//! Session configuration, validation, and error types.
//!
//! [`CubeConfig`] is the input for constructing a [`CubeSession`](crate::CubeSession).
//! [`validate()`](CubeConfig::validate) checks every structural invariant
//! up front so that a session, once built, never fails on its own settings.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use cubik_core::{GridSize, MAX_GRID_SIZE};

// ── Easing ─────────────────────────────────────────────────────────

/// Time curve applied to animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant angular speed.
    Linear,
    /// Smoothstep: slow start, slow finish.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` to eased progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

// ── AnimationConfig ────────────────────────────────────────────────

/// How moves are presented to the [`Animator`](crate::Animator).
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Duration of one quarter turn, in milliseconds. Half turns take
    /// twice as long. Zero disables timing. Default: 150.
    pub duration_ms: u64,
    /// Progress curve. Default: [`Easing::EaseInOut`].
    pub easing: Easing,
    /// Edge length of one cubie in world units. Default: 1.0.
    pub cubie_size: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 150,
            easing: Easing::default(),
            cubie_size: 1.0,
        }
    }
}

impl AnimationConfig {
    /// Total duration for a move of `quarter_steps` quarter turns.
    pub fn duration_for(&self, quarter_steps: u32) -> Duration {
        Duration::from_millis(self.duration_ms.saturating_mul(u64::from(quarter_steps)))
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CubeConfig::validate()`] or while starting
/// and stopping a [`CubeWorker`](crate::CubeWorker).
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid size is zero or above [`MAX_GRID_SIZE`].
    InvalidSize {
        /// The configured size.
        size: u32,
        /// The largest supported size.
        max: u32,
    },
    /// Move queue capacity is zero.
    QueueCapacityZero,
    /// Animation settings are unusable.
    InvalidAnimation {
        /// Which setting is wrong.
        reason: String,
    },
    /// The worker thread could not be spawned.
    ThreadSpawnFailed {
        /// OS error text.
        reason: String,
    },
    /// The session could not be recovered from the worker thread
    /// (the thread panicked).
    SessionRecoveryFailed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => {
                write!(f, "grid size {size} is outside 1..={max}")
            }
            Self::QueueCapacityZero => write!(f, "max_queue must be at least 1"),
            Self::InvalidAnimation { reason } => write!(f, "invalid animation config: {reason}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::SessionRecoveryFailed => {
                write!(f, "session could not be recovered from worker thread")
            }
        }
    }
}

impl Error for ConfigError {}

// ── CubeConfig ─────────────────────────────────────────────────────

/// Complete configuration for a [`CubeSession`](crate::CubeSession).
///
/// # Examples
///
/// ```
/// use cubik_engine::{ConfigError, CubeConfig};
///
/// let config = CubeConfig { size: 4, seed: 7, ..CubeConfig::default() };
/// assert_eq!(config.validate().unwrap().get(), 4);
///
/// let bad = CubeConfig { max_queue: 0, ..CubeConfig::default() };
/// assert_eq!(bad.validate(), Err(ConfigError::QueueCapacityZero));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CubeConfig {
    /// Edge length `N`. Default: 3.
    pub size: u32,
    /// Seed for the scramble generator. Default: 0.
    pub seed: u64,
    /// Maximum moves waiting in the queue. Default: 256.
    pub max_queue: usize,
    /// Animation settings.
    pub animation: AnimationConfig,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 3,
            seed: 0,
            max_queue: 256,
            animation: AnimationConfig::default(),
        }
    }
}

impl CubeConfig {
    /// Validate all structural invariants and return the checked size.
    pub fn validate(&self) -> Result<GridSize, ConfigError> {
        let size = GridSize::new(self.size).map_err(|_| ConfigError::InvalidSize {
            size: self.size,
            max: MAX_GRID_SIZE,
        })?;
        if self.max_queue == 0 {
            return Err(ConfigError::QueueCapacityZero);
        }
        let cubie = self.animation.cubie_size;
        if !cubie.is_finite() || cubie <= 0.0 {
            return Err(ConfigError::InvalidAnimation {
                reason: format!("cubie_size must be finite and positive, got {cubie}"),
            });
        }
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let size = CubeConfig::default().validate().unwrap();
        assert_eq!(size.get(), 3);
    }

    #[test]
    fn size_bounds() {
        for size in [0, MAX_GRID_SIZE + 1] {
            let c = CubeConfig {
                size,
                ..CubeConfig::default()
            };
            assert_eq!(
                c.validate(),
                Err(ConfigError::InvalidSize {
                    size,
                    max: MAX_GRID_SIZE
                })
            );
        }
    }

    #[test]
    fn cubie_size_must_be_positive() {
        for cubie_size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let c = CubeConfig {
                animation: AnimationConfig {
                    cubie_size,
                    ..AnimationConfig::default()
                },
                ..CubeConfig::default()
            };
            assert!(matches!(
                c.validate(),
                Err(ConfigError::InvalidAnimation { .. })
            ));
        }
    }

    #[test]
    fn easing_endpoints() {
        for e in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(-3.0), 0.0);
            assert_eq!(e.apply(7.0), 1.0);
            assert_eq!(e.apply(f32::NAN), 0.0);
        }
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        assert!(Easing::EaseInOut.apply(0.1) < 0.1);
    }

    #[test]
    fn duration_scales_with_steps() {
        let a = AnimationConfig::default();
        assert_eq!(a.duration_for(2), Duration::from_millis(300));
        assert_eq!(a.duration_for(0), Duration::ZERO);
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::QueueCapacityZero.to_string(),
            "max_queue must be at least 1"
        );
        assert_eq!(
            ConfigError::InvalidSize { size: 0, max: 20 }.to_string(),
            "grid size 0 is outside 1..=20"
        );
    }
}
