//! Damped spring that eases the displayed pan toward its target.

use crate::constants::*;
use crate::view::ViewState;

/// Advance `view.pan` toward `view.target_pan` by one frame.
///
/// Uses semi-implicit Euler per axis. `dt` is capped at [`SPRING_MAX_DT`] so a
/// long frame cannot blow up the integration. An axis that is both close to
/// its target and nearly at rest snaps exactly onto it.
pub fn step(view: &mut ViewState, dt: f32) {
    let dt = dt.clamp(0.0, SPRING_MAX_DT);

    let disp = view.pan - view.target_pan;
    let accel = -SPRING_STIFFNESS * disp - SPRING_DAMPING * view.pan_velocity;
    view.pan_velocity += accel * dt;
    view.pan += view.pan_velocity * dt;

    if disp.x.abs() < SPRING_SNAP_DISTANCE && view.pan_velocity.x.abs() < SPRING_SNAP_VELOCITY {
        view.pan.x = view.target_pan.x;
        view.pan_velocity.x = 0.0;
    }
    if disp.y.abs() < SPRING_SNAP_DISTANCE && view.pan_velocity.y.abs() < SPRING_SNAP_VELOCITY {
        view.pan.y = view.target_pan.y;
        view.pan_velocity.y = 0.0;
    }
}

/// True once pan sits exactly on its target with no residual velocity.
pub fn is_settled(view: &ViewState) -> bool {
    view.pan == view.target_pan && view.pan_velocity == glam::Vec2::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn run_until_settled(view: &mut ViewState, max_steps: usize) -> Option<usize> {
        for i in 0..max_steps {
            if is_settled(view) {
                return Some(i);
            }
            step(view, 1.0 / 60.0);
        }
        None
    }

    #[test]
    fn test_converges_from_rest() {
        let mut view = ViewState::new(Vec2::new(-400.0, 250.0), 1.0);
        view.target_pan = Vec2::new(0.0, 0.0);
        let steps = run_until_settled(&mut view, 10_000);
        assert!(steps.is_some());
        assert_eq!(view.pan, view.target_pan);
        assert_eq!(view.pan_velocity, Vec2::ZERO);
    }

    #[test]
    fn test_converges_with_initial_velocity() {
        let mut view = ViewState::new(Vec2::new(30.0, -30.0), 1.0);
        view.target_pan = Vec2::new(-200.0, 75.0);
        view.pan_velocity = Vec2::new(5000.0, -3000.0);
        assert!(run_until_settled(&mut view, 10_000).is_some());
        assert_eq!(view.pan, Vec2::new(-200.0, 75.0));
    }

    #[test]
    fn test_moves_toward_target() {
        let mut view = ViewState::new(Vec2::new(100.0, 0.0), 1.0);
        view.target_pan = Vec2::ZERO;
        step(&mut view, 1.0 / 60.0);
        assert!(view.pan.x < 100.0 && view.pan.x > 0.0);
        assert!(view.pan_velocity.x < 0.0);
    }

    #[test]
    fn test_large_dt_is_capped() {
        let mut capped = ViewState::new(Vec2::new(100.0, 0.0), 1.0);
        capped.target_pan = Vec2::ZERO;
        let mut reference = capped.clone();
        step(&mut capped, 5.0);
        step(&mut reference, SPRING_MAX_DT);
        assert_eq!(capped, reference);
    }

    #[test]
    fn test_axes_snap_independently() {
        let mut view = ViewState::new(Vec2::new(0.01, 300.0), 1.0);
        view.target_pan = Vec2::ZERO;
        step(&mut view, 1.0 / 60.0);
        assert_eq!(view.pan.x, 0.0);
        assert_eq!(view.pan_velocity.x, 0.0);
        assert!(view.pan.y > 0.0);
    }
}
