//! Die Cord-Instanz: besitzt Optionen, Rausch-Seed und Vertex-Puffer und
//! führt die Update-Pipeline pro Frame aus.
//!
//! Pipeline pro Frame: Kontrollpunkte sammeln → pro Vertex Spline abtasten
//! → Durchhang/Fluttern addieren → gegen den Vorwert glätten → emittieren.
//! Über Frames hinweg persistieren nur der Vertex-Puffer und der Seed.

use glam::Vec3;

use super::control_points::ordered_control_points;
use super::motion::{float_offset, sag_offset};
use super::noise::rand_unit;
use super::smoothing::smooth_toward;
use super::spline::{sample_spline, tangent_at};
use crate::shared::{CordOptions, Strand};

/// Salt für die Ableitung des Rausch-Seeds aus dem Instanz-Seed.
const SEED_SALT: u32 = 0x5CA7_7EED;
/// Skalierung des Einheits-Zufallswerts auf die Rausch-Domäne.
const SEED_SCALE: f32 = 1000.0;

/// Externe Eingaben für einen Simulationsschritt.
///
/// Anker und Handles gehören dem Host; die Cord liest sie nur.
#[derive(Debug, Clone, Copy)]
pub struct CordFrame<'a> {
    /// Start-Anker (World-Space); `None` überspringt das Update.
    pub start: Option<Vec3>,
    /// End-Anker (World-Space); `None` überspringt das Update.
    pub end: Option<Vec3>,
    /// Optionale Zwischen-Handles; `None`-Einträge werden ignoriert.
    pub handles: &'a [Option<Vec3>],
    /// Zeit seit dem letzten Frame in Sekunden.
    pub dt: f32,
    /// Absolute Simulationszeit in Sekunden.
    pub time: f32,
}

/// Eine schwebende Cord zwischen zwei Ankern.
///
/// Mehrere Instanzen sind voneinander unabhängig und können in beliebiger
/// Reihenfolge aktualisiert werden; der Seed dekorreliert ihr Fluttern.
pub struct FloatingCord {
    options: CordOptions,
    /// Rausch-Seed, fixiert bei der Initialisierung.
    seed: f32,
    /// Geglättete Vertex-Positionen. Null-Vektor = noch nie beschrieben;
    /// der erste Schreibzugriff springt dann ohne Glättung auf das Ziel.
    vertices: Vec<Vec3>,
    /// Statische Breite pro Vertex, einmalig aus dem Breitenprofil abgetastet.
    widths: Vec<f32>,
}

impl FloatingCord {
    /// Erstellt eine Cord-Instanz mit `segments + 1` Vertex-Slots.
    ///
    /// `seed` dekorreliert das Fluttern gleichzeitiger Instanzen; gleiche
    /// Seeds und Eingaben liefern bit-identische Ausgaben.
    pub fn new(options: CordOptions, seed: u32) -> Self {
        let segments = options.clamped_segments();
        let widths = (0..=segments)
            .map(|i| {
                options
                    .width_profile
                    .sample(i as f32 / segments as f32)
            })
            .collect();

        Self {
            seed: rand_unit(seed, SEED_SALT) * SEED_SCALE,
            vertices: vec![Vec3::ZERO; segments + 1],
            widths,
            options,
        }
    }

    /// Anzahl der Liniensegmente (Vertices − 1).
    pub fn segments(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Die aktiven Optionen dieser Instanz.
    pub fn options(&self) -> &CordOptions {
        &self.options
    }

    /// Führt einen Simulationsschritt aus.
    ///
    /// Fehlt einer der Anker, wird der Frame komplett übersprungen: keine
    /// Teilausgabe, der zuletzt emittierte Zustand bleibt unverändert.
    /// Gibt `true` zurück, wenn die Polyline aktualisiert wurde.
    pub fn update(&mut self, frame: &CordFrame<'_>) -> bool {
        let (Some(start), Some(end)) = (frame.start, frame.end) else {
            return false;
        };

        let control_points = ordered_control_points(start, end, frame.handles);
        let segments = self.segments();
        let sag_active = control_points.len() == 2 && self.options.sag > 0.0;

        for i in 0..=segments {
            let u = i as f32 / segments as f32;
            let mut target = sample_spline(&control_points, u);

            if sag_active {
                target += sag_offset(u, self.options.sag);
            }

            // Entartete Tangente: Rausch-Versatz für diesen Vertex auslassen.
            if let Some(tangent) = tangent_at(&control_points, u) {
                target += float_offset(
                    tangent,
                    u,
                    self.seed,
                    frame.time,
                    self.options.noise_amplitude,
                    self.options.noise_frequency,
                );
            }

            self.vertices[i] = smooth_toward(
                self.vertices[i],
                target,
                self.options.follow_responsiveness,
                frame.dt,
            );
        }

        true
    }

    /// Host-Vertrag: aktuelle Positionen und Breiten für den Renderer.
    pub fn strand(&self) -> Strand<'_> {
        Strand {
            positions: &self.vertices,
            widths: &self.widths,
        }
    }

    /// Geglättete Vertex-Positionen (World-Space).
    pub fn positions(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Breite pro Vertex in Metern.
    pub fn widths(&self) -> &[f32] {
        &self.widths
    }
}
