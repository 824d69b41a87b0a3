//! Zentrale Konfiguration für die Cord-Simulation.
//!
//! `CordOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use super::width_profile::WidthProfile;

// ── Form ────────────────────────────────────────────────────────────

/// Harte Untergrenze der Segmentanzahl (verhindert Division durch 0 im
/// parametrischen Mapping).
pub const SEGMENTS_MIN: usize = 1;
/// Empfohlener Bereich der Segmentanzahl.
pub const SEGMENTS_RECOMMENDED: std::ops::RangeInclusive<usize> = 4..=128;
/// Standard-Segmentanzahl.
pub const SEGMENTS_DEFAULT: usize = 32;
/// Standard-Durchhang in Metern (nur ohne Handles aktiv).
pub const SAG_DEFAULT: f32 = 0.1;

// ── Breitenprofil ──────────────────────────────────────────────────

/// Standard-Breite an den Cord-Enden (Meter).
pub const WIDTH_END_DEFAULT: f32 = 0.008;
/// Standard-Breite in der Cord-Mitte (Meter).
pub const WIDTH_MID_DEFAULT: f32 = 0.012;

// ── Fluttern ────────────────────────────────────────────────────────

/// Standard-Amplitude des Flutter-Rauschens in Metern.
pub const NOISE_AMPLITUDE_DEFAULT: f32 = 0.015;
/// Standard-Frequenz des Flutter-Rauschens in Hz.
pub const NOISE_FREQUENCY_DEFAULT: f32 = 0.5;
/// Standard-Reaktivität der Glättung (höher = steifer).
pub const FOLLOW_RESPONSIVENESS_DEFAULT: f32 = 10.0;

// ── Bogen-Layout ───────────────────────────────────────────────────

/// Standard-Radius des Bogen-Layouts in Metern.
pub const ARC_RADIUS_DEFAULT: f32 = 1.5;
/// Standard-Öffnungswinkel des Bogen-Layouts in Grad.
pub const ARC_ANGLE_RANGE_DEFAULT: f32 = 90.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Simulations-Optionen.
/// Kann als `floating_cord.toml` neben der Host-Binary gespeichert werden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CordOptions {
    // ── Form ────────────────────────────────────────────────────
    /// Anzahl Liniensegmente (empfohlen 4–128)
    pub segments: usize,
    /// Vertikaler Durchhang in Metern, nur ohne Handles aktiv
    pub sag: f32,
    /// Breitenprofil über die Cord-Länge
    #[serde(default)]
    pub width_profile: WidthProfile,

    // ── Fluttern ────────────────────────────────────────────────
    /// Amplitude des Flutter-Rauschens in Metern
    pub noise_amplitude: f32,
    /// Frequenz des Flutter-Rauschens in Hz
    pub noise_frequency: f32,
    /// Reaktivität der Glättung (höher = steifer)
    pub follow_responsiveness: f32,

    // ── Bogen-Layout ────────────────────────────────────────────
    /// Radius des Bogen-Layouts in Metern
    #[serde(default = "default_arc_radius")]
    pub arc_radius: f32,
    /// Öffnungswinkel des Bogen-Layouts in Grad
    #[serde(default = "default_arc_angle_range")]
    pub arc_angle_range: f32,
}

impl Default for CordOptions {
    fn default() -> Self {
        Self {
            segments: SEGMENTS_DEFAULT,
            sag: SAG_DEFAULT,
            width_profile: WidthProfile::default(),

            noise_amplitude: NOISE_AMPLITUDE_DEFAULT,
            noise_frequency: NOISE_FREQUENCY_DEFAULT,
            follow_responsiveness: FOLLOW_RESPONSIVENESS_DEFAULT,

            arc_radius: ARC_RADIUS_DEFAULT,
            arc_angle_range: ARC_ANGLE_RANGE_DEFAULT,
        }
    }
}

/// Serde-Default für `arc_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_arc_radius() -> f32 {
    ARC_RADIUS_DEFAULT
}

/// Serde-Default für `arc_angle_range` (Abwärtskompatibilität).
fn default_arc_angle_range() -> f32 {
    ARC_ANGLE_RANGE_DEFAULT
}

impl CordOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Host-Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floating_cord"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floating_cord.toml")
    }

    /// Segmentanzahl mit Sicherheits-Clamp auf die harte Untergrenze.
    ///
    /// Werte außerhalb des empfohlenen Bereichs sind kein harter Fehler,
    /// nur Werte unter `SEGMENTS_MIN` werden korrigiert (und geloggt).
    pub fn clamped_segments(&self) -> usize {
        if self.segments < SEGMENTS_MIN {
            log::warn!(
                "Segmentanzahl {} unter Minimum, verwende {}",
                self.segments,
                SEGMENTS_MIN
            );
            SEGMENTS_MIN
        } else {
            self.segments
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_entsprechen_den_konstanten() {
        let opts = CordOptions::default();
        assert_eq!(opts.segments, SEGMENTS_DEFAULT);
        assert_eq!(opts.sag, SAG_DEFAULT);
        assert_eq!(opts.noise_amplitude, NOISE_AMPLITUDE_DEFAULT);
        assert_eq!(opts.follow_responsiveness, FOLLOW_RESPONSIVENESS_DEFAULT);
        assert!(SEGMENTS_RECOMMENDED.contains(&opts.segments));
    }

    #[test]
    fn toml_roundtrip_erhaelt_alle_werte() {
        let opts = CordOptions {
            segments: 64,
            sag: 0.25,
            noise_amplitude: 0.02,
            ..CordOptions::default()
        };

        let toml = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let parsed: CordOptions = toml::from_str(&toml).expect("Parsen erwartet");

        assert_eq!(parsed.segments, 64);
        assert_eq!(parsed.sag, 0.25);
        assert_eq!(parsed.noise_amplitude, 0.02);
        assert_eq!(parsed.width_profile, opts.width_profile);
    }

    #[test]
    fn fehlende_layout_felder_fallen_auf_defaults() {
        // Ältere Dateien ohne Bogen-Layout-Felder bleiben ladbar.
        let toml = r#"
            segments = 16
            sag = 0.1
            noise_amplitude = 0.015
            noise_frequency = 0.5
            follow_responsiveness = 10.0
        "#;
        let parsed: CordOptions = toml::from_str(toml).expect("Parsen erwartet");
        assert_eq!(parsed.arc_radius, ARC_RADIUS_DEFAULT);
        assert_eq!(parsed.arc_angle_range, ARC_ANGLE_RANGE_DEFAULT);
    }

    #[test]
    fn segmentanzahl_wird_auf_minimum_geklemmt() {
        let mut opts = CordOptions::default();
        opts.segments = 0;
        assert_eq!(opts.clamped_segments(), SEGMENTS_MIN);

        opts.segments = 200;
        assert_eq!(opts.clamped_segments(), 200);
    }
}
