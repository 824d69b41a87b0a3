//! Framerate-unabhängige exponentielle Glättung der Polyline-Vertices.

use glam::Vec3;

/// Blendet `previous` exponentiell gegen `target`.
///
/// `result = lerp(previous, target, 1 − exp(−responsiveness · dt))`.
/// Höhere Responsiveness konvergiert schneller; für `dt → ∞` geht der
/// Faktor gegen 1, ein einzelner langer Frame konvergiert also zum Ziel
/// statt darüber hinauszuschießen.
///
/// Erstschreib-Regel: ein exakter Null-Vektor gilt als "nie beschrieben"
/// und springt ohne Glättung direkt auf `target` (verhindert das sichtbare
/// Einschweben vom Ursprung im allerersten Frame). Ein legitim berechnetes
/// Ziel exakt im Ursprung ist davon nicht unterscheidbar und springt
/// ebenfalls — bekannte, dokumentierte Einschränkung.
pub fn smooth_toward(previous: Vec3, target: Vec3, responsiveness: f32, dt: f32) -> Vec3 {
    if previous == Vec3::ZERO {
        return target;
    }
    previous.lerp(target, 1.0 - (-responsiveness * dt).exp())
}
