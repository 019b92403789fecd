//! Egg outline and color

use std::f32::consts::PI;

use egui::{Color32, Pos2};

/// Half-width of the egg
const EGG_A: f32 = 110.0;
/// Half-height of the egg
const EGG_B: f32 = 150.0;
/// Asymmetry between the pointed and the round end
const EGG_D: f32 = 20.0;

/// Height reserved for the egg in the layout
pub const EGG_AREA_HEIGHT: f32 = 335.0;
/// Distance from the top of the egg area to the egg's center
pub const EGG_CENTER_Y: f32 = EGG_B + EGG_D;

/// Points along the egg outline, one per degree, closed at 360.
pub fn egg_outline(center: Pos2) -> Vec<Pos2> {
    (0..=360)
        .map(|degrees| {
            let rad = degrees as f32 / 360.0 * 2.0 * PI;
            let (sin_t, cos_t) = rad.sin_cos();
            let x = EGG_A * cos_t;
            let y = -((EGG_B * EGG_B - EGG_D * EGG_D * cos_t * cos_t).sqrt() + EGG_D * sin_t) * sin_t;
            Pos2::new(center.x + x, center.y + y)
        })
        .collect()
}

/// Shell color fading from raw yellow to boiled red as `progress` goes to 1
pub fn egg_color(progress: f32) -> Color32 {
    let remaining = 1.0 - progress.clamp(0.0, 1.0);
    Color32::from_rgb(255, (239.0 * remaining) as u8, (174.0 * remaining) as u8)
}
