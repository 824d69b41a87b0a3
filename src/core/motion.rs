//! Additive Verformungen des rohen Spline-Punkts: Durchhang und Fluttern.

use glam::Vec3;
use std::f32::consts::PI;

use super::noise::noise2;

/// Versatz des zweiten Rauschkanals gegen den ersten. Dekorreliert Seit-
/// und Hochbewegung, obwohl beide dieselbe Rauschfunktion abtasten.
const CHANNEL_OFFSET: f32 = 50.0;
/// Skalierung von u auf die Rausch-Domäne.
const NOISE_U_SCALE: f32 = 2.0;

/// Vertikaler Durchhang entlang der festen Welt-Abwärtsachse.
///
/// `sin(u · π)`: 0 an beiden Enden, Maximum in der Kurvenmitte. Wirkt
/// unabhängig von der Kurvenorientierung. Der Aufrufer aktiviert den
/// Durchhang nur für Cords ohne Handles (genau zwei Kontrollpunkte).
pub fn sag_offset(u: f32, sag: f32) -> Vec3 {
    Vec3::NEG_Y * sag * (u * PI).sin()
}

/// Fluttern: kohärentes Rauschen im Seit/Hoch-Frame der Tangente.
///
/// Das Frame entsteht aus `side = normalize(cross(worldUp, tangent))` und
/// `up = normalize(cross(tangent, side))`. Beide Rauschkanäle werden von
/// [0, 1] auf [-0.5, 0.5] verschoben und mit `2 · amplitude` skaliert, der
/// Gesamtversatz pro Achse überstreicht damit `[-amplitude, +amplitude]`.
///
/// Steht die Tangente parallel zur Welt-Hochachse, kollabiert das
/// Kreuzprodukt; dann wird auf das Welt-Frame rechts/vorn ausgewichen
/// statt einen nicht-finiten Vektor zu erzeugen.
pub fn float_offset(
    tangent: Vec3,
    u: f32,
    seed: f32,
    time: f32,
    amplitude: f32,
    frequency: f32,
) -> Vec3 {
    let side = Vec3::Y.cross(tangent).try_normalize().unwrap_or(Vec3::X);
    let up = tangent.cross(side).try_normalize().unwrap_or(Vec3::NEG_Z);

    let n1 = noise2(seed + u * NOISE_U_SCALE, time * frequency);
    let n2 = noise2(seed + CHANNEL_OFFSET + u * NOISE_U_SCALE, time * frequency);

    (side * (n1 - 0.5) + up * (n2 - 0.5)) * (amplitude * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn durchhang_ist_null_an_den_enden() {
        assert_relative_eq!(sag_offset(0.0, 0.1).y, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(sag_offset(1.0, 0.1).y, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn durchhang_ist_maximal_in_der_mitte() {
        let mid = sag_offset(0.5, 0.1);
        assert_relative_eq!(mid.y, -0.1, epsilon = TOLERANCE);
        assert_eq!(mid.x, 0.0);
        assert_eq!(mid.z, 0.0);
    }

    #[test]
    fn flutter_versatz_bleibt_in_der_amplitude() {
        let tangent = Vec3::X;
        let amplitude = 0.015;

        for i in 0..100 {
            let time = i as f32 * 0.1;
            let offset = float_offset(tangent, 0.3, 123.0, time, amplitude, 0.5);
            assert!(offset.length() <= amplitude * 2.0 + TOLERANCE);
            assert!(offset.is_finite());
        }
    }

    #[test]
    fn flutter_liegt_in_der_ebene_senkrecht_zur_tangente() {
        let tangent = Vec3::X;
        let offset = float_offset(tangent, 0.5, 7.0, 1.0, 0.02, 0.5);

        // side und up stehen senkrecht auf der Tangente.
        assert_relative_eq!(offset.dot(tangent), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn amplitude_null_ergibt_keinen_versatz() {
        let offset = float_offset(Vec3::X, 0.5, 7.0, 1.0, 0.0, 0.5);
        assert_eq!(offset, Vec3::ZERO);
    }

    #[test]
    fn vertikale_tangente_faellt_auf_welt_frame_zurueck() {
        // cross(Y, Y) = 0 → Rückfall auf rechts/vorn, kein NaN.
        let offset = float_offset(Vec3::Y, 0.5, 7.0, 1.0, 0.02, 0.5);
        assert!(offset.is_finite());
        assert_relative_eq!(offset.dot(Vec3::Y), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn flutter_ist_deterministisch() {
        let a = float_offset(Vec3::X, 0.25, 42.0, 3.5, 0.015, 0.5);
        let b = float_offset(Vec3::X, 0.25, 42.0, 3.5, 0.015, 0.5);
        assert_eq!(a, b);
    }
}
