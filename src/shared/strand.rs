//! Host-Vertrag: die pro Frame emittierte Polyline.
//!
//! Lebt im shared-Modul, da `core` sie baut und der Host-Renderer sie
//! konsumiert. Die Library endet an diesem Vertrag; Darstellung (Mesh,
//! Line-Strip, …) ist Sache des Hosts.

use glam::Vec3;

/// Read-only Sicht auf die aktuelle Polyline einer Cord-Instanz.
///
/// `positions` und `widths` sind parallel indexiert und immer gleich lang
/// (Segmente + 1 Einträge).
#[derive(Debug, Clone, Copy)]
pub struct Strand<'a> {
    /// Geglättete Vertex-Positionen (World-Space)
    pub positions: &'a [Vec3],
    /// Breite pro Vertex in Metern
    pub widths: &'a [f32],
}

impl Strand<'_> {
    /// Anzahl der Vertices (Segmente + 1).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Leer nur im theoretischen Grenzfall; reguläre Instanzen haben ≥ 2 Vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iteriert Paare aus Position und Breite.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.widths.iter().copied())
    }
}
