//! Zustandsloses Bogen-Layout: verteilt Objekte auf einem horizontalen
//! Kreisbogen vor einem Blickpunkt, jeweils zum Blickpunkt gedreht.
//!
//! Kollaborateur der Cord-Simulation: konsumiert pro Frame eine
//! Blickpunkt-Pose und produziert Objekt-Posen; hält keinerlei Zustand.
//! Konvention wie überall in glam: rechtshändig, Blickrichtung −Z.

use glam::{Mat3, Quat, Vec3};

/// Pose aus Position und Orientierung (World-Space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Blickrichtung der Pose (−Z der lokalen Achsen).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// Verteilt `count` Posen auf einem horizontalen Bogen vor dem Blickpunkt.
///
/// Der Bogenmittelpunkt liegt `radius` Meter in Blickrichtung; die Objekte
/// stehen im Abstand `radius · 0.5` um diesen Mittelpunkt, gleichmäßig über
/// `angle_range_deg` Grad verteilt (0° = geradeaus, symmetrisch nach links
/// und rechts). Jede Pose ist zum Blickpunkt gedreht.
///
/// Ein einzelnes Objekt erhält den Winkel 0°; `count == 0` liefert eine
/// leere Liste.
pub fn layout_on_arc(
    viewpoint: &Pose,
    count: usize,
    radius: f32,
    angle_range_deg: f32,
) -> Vec<Pose> {
    if count == 0 {
        return Vec::new();
    }

    let center = viewpoint.position + viewpoint.forward() * radius;

    (0..count)
        .map(|i| {
            let angle_deg = if count == 1 {
                0.0
            } else {
                -angle_range_deg / 2.0 + (angle_range_deg / (count - 1) as f32) * i as f32
            };
            let swing = Quat::from_axis_angle(Vec3::Y, angle_deg.to_radians());
            let position = center + swing * (Vec3::X * radius * 0.5);

            Pose {
                position,
                rotation: look_at_rotation(position, viewpoint.position),
            }
        })
        .collect()
}

/// Rotation, die von `from` nach `to` blickt; die Welt-Hochachse bleibt oben.
///
/// Fallen beide Punkte zusammen oder zeigt die Blickrichtung exakt entlang
/// der Hochachse, wird auf stabile Ersatzachsen ausgewichen statt eine
/// nicht-finite Rotation zu erzeugen.
fn look_at_rotation(from: Vec3, to: Vec3) -> Quat {
    let Some(forward) = (to - from).try_normalize() else {
        return Quat::IDENTITY;
    };

    // Rechtshändige Basis (right, up, back) mit back = −forward.
    let back = -forward;
    let right = Vec3::Y.cross(back).try_normalize().unwrap_or(Vec3::X);
    let up = back.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, back))
}
