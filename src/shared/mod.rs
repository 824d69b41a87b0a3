//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration und die Typen, die zwischen `core` und dem
//! einbettenden Host geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod strand;
mod width_profile;

pub use options::CordOptions;
pub use strand::Strand;
pub use width_profile::{WidthKey, WidthProfile};
