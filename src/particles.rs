//! One-shot particle batches: falling petals and radial heart sparkles.
//!
//! Particles are render-and-forget. Each carries the randomized trajectory
//! and timing parameters the presentation layer feeds into its keyframes;
//! nothing here tracks identity or lifecycle after creation, and particles
//! are exempt from the flower bed's collision avoidance.

use rand::Rng;

use crate::svg::Vec2;

pub const PETAL_COUNT: usize = 25;
pub const SPARKLE_COUNT: usize = 18;

/// A falling petal. Positions are percent of container width; lengths px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Petal {
    pub x_percent: f64,
    pub fall_duration: f64,
    pub fall_delay: f64,
    /// Horizontal drift over one fall, px.
    pub drift: f64,
    pub width: f64,
    pub height: f64,
}

/// A sparkle flying outward from the container center. Start and end are px
/// offsets from the center, projected from the sparkle's angle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sparkle {
    pub angle_degrees: f64,
    pub start: Vec2,
    pub end: Vec2,
    pub duration: f64,
    pub delay: f64,
    pub size: f64,
}

#[tracing::instrument(skip(rng))]
pub fn spawn_petals<R: Rng + ?Sized>(rng: &mut R) -> Vec<Petal> {
    (0..PETAL_COUNT)
        .map(|_| {
            let x_percent = rng.random_range(0.0..100.0);
            let fall_duration = rng.random_range(5.0..12.0);
            let fall_delay = rng.random_range(0.0..8.0);
            let drift = rng.random_range(-40.0..40.0);
            let width = rng.random_range(8.0..16.0);
            let height = width * rng.random_range(0.8..1.4);
            Petal {
                x_percent,
                fall_duration,
                fall_delay,
                drift,
                width,
                height,
            }
        })
        .collect()
}

#[tracing::instrument(skip(rng))]
pub fn spawn_heart_sparkles<R: Rng + ?Sized>(rng: &mut R) -> Vec<Sparkle> {
    (0..SPARKLE_COUNT)
        .map(|i| {
            let angle_degrees =
                (360.0 / SPARKLE_COUNT as f64) * i as f64 + rng.random_range(0.0..20.0);
            let rad = angle_degrees.to_radians();

            let start_dist = rng.random_range(20.0..35.0);
            let start = Vec2::new(rad.cos() * start_dist, rad.sin() * start_dist);

            let end_dist = rng.random_range(50.0..90.0);
            let end = Vec2::new(rad.cos() * end_dist, rad.sin() * end_dist);

            Sparkle {
                angle_degrees,
                start,
                end,
                duration: rng.random_range(2.0..4.5),
                delay: rng.random_range(0.0..3.0),
                size: rng.random_range(2.0..6.0),
            }
        })
        .collect()
}
