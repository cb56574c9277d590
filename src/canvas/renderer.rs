use super::background::ParticleField;
use super::shapes::Rgba;
use super::surface::{BlendMode, DrawSurface};
use crate::constants::*;
use rand::Rng;

/// Draw one frame: fade the previous frame, then add every particle's streak.
pub fn draw_field<R: Rng, S: DrawSurface + ?Sized>(field: &ParticleField<R>, surface: &mut S) {
    let viewport = field.viewport();
    let fade = Rgba::new(BACKGROUND_RGB, field.config().motion.bg_fade);

    // Low-alpha fill instead of a clear; leftovers form the motion trails.
    surface.fill_rect(&fade.to_string(), viewport.width, viewport.height);

    surface.set_blend(BlendMode::Additive);
    for particle in field.particles() {
        surface.stroke_segment(
            &particle.color().to_string(),
            STREAK_LINE_WIDTH,
            &particle.streak(),
        );
    }
    // Leave the context as we found it for anything drawn after us.
    surface.set_blend(BlendMode::Normal);
}

/// Opaque background fill.  Used on start and after resizing, which clears
/// the canvas.
pub fn paint_base<R: Rng, S: DrawSurface + ?Sized>(field: &ParticleField<R>, surface: &mut S) {
    let viewport = field.viewport();
    let base = Rgba::new(BACKGROUND_RGB, 1.0).to_hex();
    surface.fill_rect(&base, viewport.width, viewport.height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::surface::{DrawOp, RecordingSurface};
    use crate::config::Viewport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(reduced: bool) -> ParticleField<StdRng> {
        ParticleField::new(
            Viewport::new(1200.0, 800.0, 1.0),
            reduced,
            StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn frame_fades_then_draws_additively_then_restores() {
        let field = field(false);
        let mut surface = RecordingSurface::default();
        draw_field(&field, &mut surface);

        assert_eq!(
            surface.ops.first(),
            Some(&DrawOp::Fill {
                style: "rgba(2, 17, 20, 0.06)".into(),
                width: 1200.0,
                height: 800.0
            })
        );
        assert_eq!(surface.ops[1], DrawOp::Blend(BlendMode::Additive));
        assert_eq!(surface.ops.last(), Some(&DrawOp::Blend(BlendMode::Normal)));
        assert_eq!(surface.strokes(), field.particles().len());
    }

    #[test]
    fn reduced_motion_fades_faster() {
        let field = field(true);
        let mut surface = RecordingSurface::default();
        draw_field(&field, &mut surface);
        match &surface.ops[0] {
            DrawOp::Fill { style, .. } => assert_eq!(style, "rgba(2, 17, 20, 0.1)"),
            other => panic!("expected fade fill, got {:?}", other),
        }
    }

    #[test]
    fn streaks_use_particle_colour_and_width() {
        let field = field(false);
        let mut surface = RecordingSurface::default();
        draw_field(&field, &mut surface);

        let first = &field.particles()[0];
        match &surface.ops[2] {
            DrawOp::Stroke { style, line_width, segment } => {
                assert_eq!(style, &first.color().to_string());
                assert_eq!(*line_width, STREAK_LINE_WIDTH);
                assert_eq!(*segment, first.streak());
            }
            other => panic!("expected stroke, got {:?}", other),
        }
    }

    #[test]
    fn base_paint_is_opaque() {
        let field = field(false);
        let mut surface = RecordingSurface::default();
        paint_base(&field, &mut surface);
        assert_eq!(
            surface.ops,
            vec![DrawOp::Fill { style: "#021114".into(), width: 1200.0, height: 800.0 }]
        );
    }
}
