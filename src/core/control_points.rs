//! Sammelt die geordnete Kontrollpunkt-Sequenz für die Spline.
//!
//! Handles dürfen frei im Raum gegriffen und verschoben werden; die
//! Sortierung nach Skalarprojektion auf die Start→End-Achse liefert
//! trotzdem eine stabile, nachvollziehbare Reihenfolge.

use glam::Vec3;

/// Baut die Kontrollpunkt-Sequenz `[start, …sortierte Handles…, end]`.
///
/// `None`-Einträge in `handles` werden übersprungen, nicht als Fehler
/// behandelt. Handles werden aufsteigend nach ihrer Skalarprojektion
/// `t = dot(handle − start, dir)` sortiert; bei gleicher Projektion bleibt
/// die Eingabereihenfolge erhalten (stabile Sortierung).
///
/// Fallen Start und Ende zusammen, ist die Achse entartet: jeder Handle
/// erhält die Projektion 0, die Eingabereihenfolge bleibt bestehen und es
/// entstehen keine NaN-Werte.
///
/// Ergebnislänge ist immer ≥ 2.
pub fn ordered_control_points(start: Vec3, end: Vec3, handles: &[Option<Vec3>]) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(2 + handles.len());
    points.push(start);

    if !handles.is_empty() {
        // Entartete Achse → Null-Vektor → Projektion 0 für alle Handles.
        let dir = (end - start).normalize_or_zero();

        let mut projected: Vec<(f32, Vec3)> = handles
            .iter()
            .flatten()
            .map(|&handle| ((handle - start).dot(dir), handle))
            .collect();
        projected.sort_by(|a, b| a.0.total_cmp(&b.0));
        points.extend(projected.into_iter().map(|(_, p)| p));
    }

    points.push(end);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laenge_ist_zwei_plus_vorhandene_handles() {
        let start = Vec3::ZERO;
        let end = Vec3::new(2.0, 0.0, 0.0);

        let handles = [
            Some(Vec3::new(0.5, 0.0, 0.0)),
            None,
            Some(Vec3::new(1.5, 0.0, 0.0)),
        ];
        let points = ordered_control_points(start, end, &handles);
        assert_eq!(points.len(), 4, "2 Anker + 2 vorhandene Handles");

        let points = ordered_control_points(start, end, &[]);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn handles_werden_nach_projektion_sortiert() {
        let start = Vec3::ZERO;
        let end = Vec3::new(2.0, 0.0, 0.0);

        // Eingabe in umgekehrter Reihenfolge (Projektionen 1.5 und 0.3).
        let handles = [
            Some(Vec3::new(1.5, 0.2, 0.0)),
            Some(Vec3::new(0.3, -0.1, 0.0)),
        ];
        let points = ordered_control_points(start, end, &handles);

        assert_eq!(points[0], start);
        assert_eq!(points[1], Vec3::new(0.3, -0.1, 0.0));
        assert_eq!(points[2], Vec3::new(1.5, 0.2, 0.0));
        assert_eq!(points[3], end);
    }

    #[test]
    fn eingabereihenfolge_aendert_sortierung_nicht() {
        let start = Vec3::ZERO;
        let end = Vec3::new(2.0, 0.0, 0.0);
        let a = Some(Vec3::new(0.3, 0.0, 0.5));
        let b = Some(Vec3::new(1.5, 0.0, -0.5));

        let forward = ordered_control_points(start, end, &[a, b]);
        let reversed = ordered_control_points(start, end, &[b, a]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn seitliche_handles_projizieren_auf_die_achse() {
        let start = Vec3::ZERO;
        let end = Vec3::new(2.0, 0.0, 0.0);

        // Projektion t = dot((1, 0, 1), (1, 0, 0)) = 1 → zwischen den Ankern.
        let handle = Vec3::new(1.0, 0.0, 1.0);
        let points = ordered_control_points(start, end, &[Some(handle)]);
        assert_eq!(points, vec![start, handle, end]);
    }

    #[test]
    fn entartete_achse_bleibt_stabil_und_endlich() {
        let anchor = Vec3::new(1.0, 1.0, 1.0);
        let handles = [
            Some(Vec3::new(5.0, 0.0, 0.0)),
            Some(Vec3::new(-3.0, 0.0, 0.0)),
        ];

        // start == end: Projektion 0 für alle, Eingabereihenfolge bleibt.
        let points = ordered_control_points(anchor, anchor, &handles);
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(points[2], Vec3::new(-3.0, 0.0, 0.0));
        assert!(points.iter().all(|p| p.is_finite()));
    }
}
