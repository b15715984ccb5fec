#![forbid(unsafe_code)]

//! Procedural flower garden scenes: a collision-avoiding flower spawner,
//! one-shot particle batches, and adapters that turn the generated scene
//! into SVG markup or a PNG preview.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so seeded
//! generators reproduce a scene exactly.

pub mod error;
pub mod flora;
pub mod heads;
pub mod music;
pub mod particles;
pub mod raster;
pub mod render;
pub mod scene;
pub mod spawn;
pub mod svg;

pub use error::{FloretError, FloretResult};
pub use flora::{ColorRole, FlowerKind, FlowerSpec, Palette};
pub use music::{MusicState, MusicToggle, Playback};
pub use particles::{PETAL_COUNT, Petal, SPARKLE_COUNT, Sparkle, spawn_heart_sparkles, spawn_petals};
pub use render::{render_scene, scene_to_svg};
pub use scene::{Director, FlowerBed, PetalLayer, Scene, SparkleLayer};
pub use spawn::{Flower, Leaf, LeafSide, SpawnConfig, Spawner, SwayStyle};
pub use svg::{Canvas, Group, SvgDoc, SvgNode};
