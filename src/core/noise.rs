//! Deterministisches 2D-Kohärenzrauschen für die Flutter-Bewegung.
//!
//! Wertrauschen über einem Integer-Gitter mit Quintic-Fade. Die Gitterwerte
//! stammen aus einem SplitMix-Avalanche-Hash, damit identische Eingaben
//! bit-identische Ausgaben liefern. Wertebereich [0, 1], stetig in beiden
//! Eingaben.

/// Avalanche-Hash (SplitMix32-Finalizer).
pub(crate) fn splitmix32(value: u32) -> u32 {
    let mut z = value.wrapping_add(0x9E37_79B9);
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

/// Deterministischer Zufallswert in [0, 1) aus Seed und Salt.
pub(crate) fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

/// Gitterwert in [0, 1) an der Zelle (ix, iy).
fn lattice(ix: i32, iy: i32) -> f32 {
    rand_unit(ix as u32, (iy as u32).wrapping_mul(0x9E37_79B9))
}

/// Quintic-Fade 6t⁵ − 15t⁴ + 10t³ (stetige erste und zweite Ableitung
/// an den Zellgrenzen).
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// 2D-Kohärenzrauschen, Ausgabe in [0, 1].
pub fn noise2(x: f32, y: f32) -> f32 {
    let x0 = x.floor();
    let y0 = y.floor();
    let ix = x0 as i32;
    let iy = y0 as i32;
    let fx = fade(x - x0);
    let fy = fade(y - y0);

    let v00 = lattice(ix, iy);
    let v10 = lattice(ix + 1, iy);
    let v01 = lattice(ix, iy + 1);
    let v11 = lattice(ix + 1, iy + 1);

    let bottom = v00 + (v10 - v00) * fx;
    let top = v01 + (v11 - v01) * fx;
    bottom + (top - bottom) * fy
}
