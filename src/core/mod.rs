//! Core-Domänenlogik: Kontrollpunkte, Spline, Rauschen, Bewegung, Glättung.

pub mod control_points;
pub mod cord;
pub mod motion;
pub mod noise;
pub mod radial_layout;
pub mod smoothing;
pub mod spline;

pub use control_points::ordered_control_points;
pub use cord::{CordFrame, FloatingCord};
pub use noise::noise2;
pub use radial_layout::{layout_on_arc, Pose};
pub use smoothing::smooth_toward;
pub use spline::{catmull_rom_point, sample_spline, tangent_at};
