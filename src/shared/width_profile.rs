//! Breitenprofil der Cord: 1D-Kurve über u ∈ [0, 1] → Breite in Metern.
//!
//! Statisch pro Instanz; wird beim Anlegen der Cord einmal pro Vertex
//! abgetastet und danach nicht mehr ausgewertet.

use serde::{Deserialize, Serialize};

use super::options::{WIDTH_END_DEFAULT, WIDTH_MID_DEFAULT};

/// Stützstelle des Breitenprofils.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthKey {
    /// Parametrische Position entlang der Cord (0 = Start, 1 = Ende)
    pub u: f32,
    /// Breite in Metern
    pub width: f32,
}

/// Stückweise lineare Breitenkurve.
///
/// Stützstellen werden beim Anlegen aufsteigend nach `u` sortiert;
/// außerhalb der äußersten Stützstellen wird geklemmt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidthProfile {
    keys: Vec<WidthKey>,
}

impl WidthProfile {
    /// Erstellt ein Profil aus Stützstellen (werden nach `u` sortiert).
    pub fn new(mut keys: Vec<WidthKey>) -> Self {
        keys.sort_by(|a, b| a.u.total_cmp(&b.u));
        Self { keys }
    }

    /// Profil mit konstanter Breite.
    pub fn constant(width: f32) -> Self {
        Self {
            keys: vec![WidthKey { u: 0.0, width }],
        }
    }

    /// Wertet das Profil an `u` aus. Leeres Profil → 0.
    pub fn sample(&self, u: f32) -> f32 {
        let Some(first) = self.keys.first() else {
            return 0.0;
        };
        if u <= first.u {
            return first.width;
        }
        let last = self.keys.last().unwrap();
        if u >= last.u {
            return last.width;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if u <= b.u {
                let span = b.u - a.u;
                if span <= f32::EPSILON {
                    return b.width;
                }
                let t = (u - a.u) / span;
                return a.width + (b.width - a.width) * t;
            }
        }

        last.width
    }

    /// Zugriff auf die sortierten Stützstellen.
    pub fn keys(&self) -> &[WidthKey] {
        &self.keys
    }
}

impl Default for WidthProfile {
    /// Dünn-dick-dünn: 8 mm an den Enden, 12 mm in der Mitte.
    fn default() -> Self {
        Self::new(vec![
            WidthKey {
                u: 0.0,
                width: WIDTH_END_DEFAULT,
            },
            WidthKey {
                u: 0.5,
                width: WIDTH_MID_DEFAULT,
            },
            WidthKey {
                u: 1.0,
                width: WIDTH_END_DEFAULT,
            },
        ])
    }
}
