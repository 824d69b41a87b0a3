//! Floating-Cord Library.
//!
//! Prozedurale Kurven-Animation: eine flexible Cord hängt oder schwebt
//! zwischen zwei Ankern und optionalen Handles. Pro Frame entsteht eine
//! geglättete Polyline (Positionen + Breiten), die der einbettende Host
//! rendert. Dazu ein zustandsloses Bogen-Layout für Objekte vor einem
//! Blickpunkt.

pub mod core;
pub mod shared;

pub use core::{layout_on_arc, CordFrame, FloatingCord, Pose};
pub use core::{
    catmull_rom_point, noise2, ordered_control_points, sample_spline, smooth_toward, tangent_at,
};
pub use shared::{CordOptions, Strand, WidthKey, WidthProfile};
