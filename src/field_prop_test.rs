//! Property tests: random host event sequences never break the speed cap,
//! the wrap bounds or the population bound.

#![cfg(test)]

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::canvas::background::ParticleField;
use crate::config::Viewport;
use crate::constants::WRAP_MARGIN;
use crate::messages::Message;
use crate::update::update;

/// Host events as they arrive from the browser, minus resize.
fn message_strategy() -> impl Strategy<Value = Message> {
    prop_oneof![
        6 => Just(Message::AnimationFrame { dt_ms: 16.0 }),
        2 => (-50.0..1300.0f64, -50.0..900.0f64).prop_map(|(x, y)| Message::PointerMoved { x, y }),
        1 => Just(Message::PointerLeft),
        1 => (-50.0..1300.0f64, -50.0..900.0f64).prop_map(|(x, y)| Message::Clicked { x, y }),
        1 => any::<bool>().prop_map(|visible| Message::VisibilityChanged { visible }),
    ]
}

fn field_strategy() -> impl Strategy<Value = ParticleField<StdRng>> {
    (200.0..1400.0f64, 200.0..900.0f64, any::<bool>(), any::<u64>()).prop_map(
        |(w, h, reduced, seed)| ParticleField::new(Viewport::new(w, h, 1.0), reduced, StdRng::seed_from_u64(seed)),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn invariants_hold_after_every_message(
        mut field in field_strategy(),
        messages in prop::collection::vec(message_strategy(), 1..120),
    ) {
        let max_speed = field.config().motion.max_speed;
        let max_particles = field.config().max_particles();

        for msg in messages {
            let was_frame = matches!(msg, Message::AnimationFrame { .. });
            let advanced = !update(&mut field, msg).is_empty() && was_frame;

            prop_assert!(field.particles().len() <= max_particles);

            if advanced {
                let vp = *field.viewport();
                for p in field.particles() {
                    prop_assert!(p.speed() <= max_speed + 1e-9);
                    prop_assert!(p.x >= -WRAP_MARGIN && p.x <= vp.width + WRAP_MARGIN);
                    prop_assert!(p.y >= -WRAP_MARGIN && p.y <= vp.height + WRAP_MARGIN);
                }
            }
        }
    }

    #[test]
    fn hidden_field_never_changes(
        mut field in field_strategy(),
        frames in 1usize..40,
    ) {
        update(&mut field, Message::VisibilityChanged { visible: false });
        let before = field.particles().to_vec();
        for _ in 0..frames {
            let cmds = update(&mut field, Message::AnimationFrame { dt_ms: 16.0 });
            prop_assert!(cmds.is_empty());
        }
        prop_assert_eq!(field.particles(), before.as_slice());
    }
}

#[test]
fn particle_beyond_right_margin_lands_on_left_margin() {
    let mut field = ParticleField::new(Viewport::new(1000.0, 600.0, 1.0), false, StdRng::seed_from_u64(9));
    {
        let particles = field.particles_mut();
        particles.truncate(1);
        let p = &mut particles[0];
        p.x = 1000.0 + 15.0;
        p.y = 300.0;
        p.vx = 0.0;
        p.vy = 0.0;
        p.life = 0;
    }
    assert!(field.tick(16.0));
    assert_eq!(field.particles()[0].x, -WRAP_MARGIN);
}
