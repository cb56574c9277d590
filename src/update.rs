// src/update.rs
//
// Reducer: applies a `Message` to the field and returns the commands the
// host has to run.  Pure, so the frame loop can be tested without a browser.
//
use rand::Rng;

use crate::canvas::background::ParticleField;
use crate::messages::{Command, Message};

pub fn update<R: Rng>(field: &mut ParticleField<R>, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::Start => {
            field.start();
            commands.push(Command::PaintBase);
            if field.is_running() {
                commands.push(Command::ScheduleFrame);
            }
        }
        Message::Stop => {
            field.stop();
            commands.push(Command::CancelFrame);
        }
        Message::AnimationFrame { dt_ms } => {
            // A paused field does not reschedule; resuming queues a fresh frame.
            if field.tick(dt_ms) {
                commands.push(Command::Render);
                commands.push(Command::ScheduleFrame);
            }
        }
        Message::PointerMoved { x, y } => field.pointer_move(x, y),
        Message::PointerLeft => field.pointer_leave(),
        Message::Clicked { x, y } => field.burst(x, y),
        Message::Resized(viewport) => {
            field.resize(viewport);
            commands.push(Command::ResizeSurface(viewport));
            commands.push(Command::PaintBase);
        }
        Message::VisibilityChanged { visible } => {
            field.set_visible(visible);
            if !visible {
                commands.push(Command::CancelFrame);
            } else if field.is_running() {
                commands.push(Command::ScheduleFrame);
            }
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::background::RunState;
    use crate::config::Viewport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> ParticleField<StdRng> {
        ParticleField::new(Viewport::new(1024.0, 768.0, 1.0), false, StdRng::seed_from_u64(5))
    }

    #[test]
    fn start_paints_and_schedules() {
        let mut f = field();
        assert_eq!(
            update(&mut f, Message::Start),
            vec![Command::PaintBase, Command::ScheduleFrame]
        );
    }

    #[test]
    fn running_frame_renders_and_reschedules() {
        let mut f = field();
        let cmds = update(&mut f, Message::AnimationFrame { dt_ms: 16.7 });
        assert_eq!(cmds, vec![Command::Render, Command::ScheduleFrame]);
        assert_eq!(f.stats().frames, 1);
    }

    #[test]
    fn hidden_page_stops_the_loop_until_visible() {
        let mut f = field();
        assert_eq!(
            update(&mut f, Message::VisibilityChanged { visible: false }),
            vec![Command::CancelFrame]
        );
        assert_eq!(f.run_state(), RunState::Paused);

        let before = f.particles().to_vec();
        assert!(update(&mut f, Message::AnimationFrame { dt_ms: 16.0 }).is_empty());
        assert_eq!(f.particles(), before.as_slice());

        assert_eq!(
            update(&mut f, Message::VisibilityChanged { visible: true }),
            vec![Command::ScheduleFrame]
        );
        assert_eq!(
            update(&mut f, Message::AnimationFrame { dt_ms: 16.0 }),
            vec![Command::Render, Command::ScheduleFrame]
        );
    }

    #[test]
    fn visibility_does_not_restart_a_stopped_field() {
        let mut f = field();
        assert_eq!(update(&mut f, Message::Stop), vec![Command::CancelFrame]);
        assert!(update(&mut f, Message::VisibilityChanged { visible: true }).is_empty());
        assert!(update(&mut f, Message::AnimationFrame { dt_ms: 16.0 }).is_empty());
        assert_eq!(update(&mut f, Message::Start), vec![Command::PaintBase, Command::ScheduleFrame]);
    }

    #[test]
    fn resize_resizes_surface_and_repaints() {
        let mut f = field();
        let vp = Viewport::new(400.0, 900.0, 3.0);
        assert_eq!(
            update(&mut f, Message::Resized(vp)),
            vec![Command::ResizeSurface(vp), Command::PaintBase]
        );
        assert_eq!(f.viewport().dpr, 1.25);
        // Population was fixed at start-up.
        assert_eq!(f.config().burst_size, 28);
    }

    #[test]
    fn pointer_messages_have_no_side_effects() {
        let mut f = field();
        assert!(update(&mut f, Message::PointerMoved { x: 1.0, y: 2.0 }).is_empty());
        assert!(f.pointer().active);
        assert!(update(&mut f, Message::PointerLeft).is_empty());
        assert!(!f.pointer().active);

        let before = f.particles().len();
        assert!(update(&mut f, Message::Clicked { x: 5.0, y: 6.0 }).is_empty());
        assert_eq!(f.particles().len(), before + 28);
    }
}
