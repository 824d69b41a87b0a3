//! Reine Geometrie-Funktionen für Catmull-Rom-Splines in 3D.
//!
//! Layer-neutral: wird von `core::cord` und den Tests importiert, ohne
//! weitere Abhängigkeiten in den Rest des Crates.

use glam::Vec3;

/// Schrittweite des Finite-Differenzen-Tangens (parametrischer Abstand).
pub const TANGENT_EPSILON: f32 = 0.01;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Wertet die Spline durch `points` an der parametrischen Stelle `u ∈ [0, 1]` aus.
///
/// Zwei Punkte: lineare Interpolation. Ab drei Punkten: Catmull-Rom, wobei
/// die äußeren Indizes des Kontroll-Quads auf die Endpunkte geklemmt werden,
/// damit die Kurve nicht über den ersten/letzten Anker hinausschießt.
///
/// Vorbedingung: `points.len() >= 2`.
pub fn sample_spline(points: &[Vec3], u: f32) -> Vec3 {
    debug_assert!(points.len() >= 2, "sample_spline braucht mindestens 2 Punkte");

    if points.len() == 2 {
        return points[0].lerp(points[1], u);
    }

    let n = points.len();
    let f = u * (n - 1) as f32;
    let i = (f.floor().max(0.0) as usize).min(n - 2);
    let t = (f - i as f32).clamp(0.0, 1.0);

    let p0 = points[i.saturating_sub(1)];
    let p1 = points[i];
    let p2 = points[i + 1];
    let p3 = points[(i + 2).min(n - 1)];

    catmull_rom_point(p0, p1, p2, p3, t)
}

/// Finite-Differenzen-Tangente an der Stelle `u`, auf Länge 1 normiert.
///
/// Die Stützstellen `u ± ε` werden an den Domänengrenzen geklemmt.
/// `None`, wenn beide Stützstellen zusammenfallen (entartete Geometrie) —
/// der Aufrufer überspringt dann das Rausch-Frame statt mit einem
/// nicht-finiten Vektor weiterzurechnen.
pub fn tangent_at(points: &[Vec3], u: f32) -> Option<Vec3> {
    let ahead = sample_spline(points, (u + TANGENT_EPSILON).min(1.0));
    let behind = sample_spline(points, (u - TANGENT_EPSILON).max(0.0));
    (ahead - behind).try_normalize()
}
