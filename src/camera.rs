//! Ligand-centered framing and manual zoom against the active session.
//!
//! Framing here is a refinement pass: the pipeline's coarse auto-view
//! centers on the whole named selection, then [`frame_ligand`] tightens
//! the camera onto the ligand's bounding box alone. Manual zoom steps
//! are proportional to the current camera depth so they stay useful
//! both near and far.

use crate::session::{SessionSlot, ViewportSession};
use crate::stage::{Stage, StructureComponent, LIGAND_SELECTOR};

/// Fraction of the current camera depth applied per manual zoom step.
pub const ZOOM_STEP_FRACTION: f32 = 0.1;

/// Direction of a manual zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Move the camera toward the scene.
    In,
    /// Move the camera away from the scene.
    Out,
}

impl ZoomDirection {
    fn signum(self) -> f32 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Tighten the camera onto the ligand sub-selection.
///
/// No-op when no component is loaded or when the structure has no atoms
/// matching the ligand selector; the current view is left untouched.
pub fn frame_ligand<S: Stage>(session: &mut ViewportSession<S>) {
    let (stage, component) = session.split_mut();
    let Some(component) = component else { return };
    if component.atom_count(LIGAND_SELECTOR) == 0 {
        return;
    }
    let Some(bounds) = component.bounding_box(LIGAND_SELECTOR) else {
        return;
    };

    stage.zoom_to(bounds.center, bounds.size);
    stage.request_render();
}

/// Step the camera depth by `step_fraction` of its current magnitude.
///
/// The step is computed from the depth as read before the update, so an
/// in-step followed by an out-step lands at 0.99x the original
/// magnitude rather than exactly back where it started. No-op when no
/// session exists yet.
pub fn zoom<S: Stage>(
    slot: &mut SessionSlot<S>,
    direction: ZoomDirection,
    step_fraction: f32,
) {
    let Some(session) = slot.get_mut() else { return };
    let stage = session.stage_mut();

    let depth = stage.camera_depth();
    let step = depth.abs() * step_fraction;
    stage.set_camera_depth(depth + direction.signum() * step);
    stage.request_render();
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::stage::mock::MockFactory;
    use crate::stage::StageOptions;

    fn live_slot(factory: &mut MockFactory) -> SessionSlot<crate::stage::mock::MockStage> {
        let mut slot = SessionSlot::new();
        let _session =
            slot.ensure(factory, &StageOptions::default()).unwrap();
        slot
    }

    fn load_into(
        slot: &mut SessionSlot<crate::stage::mock::MockStage>,
    ) {
        let source = crate::source::mock::MockSource::with_entries(&[(
            "1abc", "payload",
        )]);
        let session = slot.get_mut().unwrap();
        let _component = session.load_structure("1abc", &source).unwrap();
    }

    #[test]
    fn framing_zooms_to_the_ligand_bounds() {
        let mut factory = MockFactory::default();
        let mut slot = live_slot(&mut factory);
        load_into(&mut slot);

        let session = slot.get_mut().unwrap();
        frame_ligand(session);

        let stage = session.stage_mut();
        assert_eq!(
            stage.zoomed_to,
            [(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0))]
        );
        assert_eq!(stage.render_requests, 1);
    }

    #[test]
    fn framing_is_a_noop_without_ligand_atoms() {
        let mut factory = MockFactory {
            ligand_atoms: Some(0),
            ..MockFactory::default()
        };
        let mut slot = live_slot(&mut factory);
        load_into(&mut slot);

        let session = slot.get_mut().unwrap();
        frame_ligand(session);

        let stage = session.stage_mut();
        assert!(stage.zoomed_to.is_empty());
        assert_eq!(stage.render_requests, 0);
    }

    #[test]
    fn framing_is_a_noop_without_a_component() {
        let mut factory = MockFactory::default();
        let mut slot = live_slot(&mut factory);

        let session = slot.get_mut().unwrap();
        frame_ligand(session);
        assert!(session.stage_mut().zoomed_to.is_empty());
    }

    #[test]
    fn zoom_step_is_a_tenth_of_the_pre_update_depth() {
        let mut factory = MockFactory::default();
        let mut slot = live_slot(&mut factory);
        slot.get_mut().unwrap().stage_mut().depth = -100.0;

        zoom(&mut slot, ZoomDirection::In, ZOOM_STEP_FRACTION);
        let stage = slot.get_mut().unwrap().stage_mut();
        assert!((stage.depth - -90.0).abs() < 1e-4);
        assert_eq!(stage.render_requests, 1);
    }

    #[test]
    fn zoom_in_then_out_lands_at_99_percent_of_the_start() {
        // The step is recomputed from the depth each call, so the pair
        // of steps is multiplicative: 1.1 * 0.9 = 0.99.
        let mut factory = MockFactory::default();
        let mut slot = live_slot(&mut factory);
        slot.get_mut().unwrap().stage_mut().depth = -100.0;

        zoom(&mut slot, ZoomDirection::In, ZOOM_STEP_FRACTION);
        zoom(&mut slot, ZoomDirection::Out, ZOOM_STEP_FRACTION);

        let depth = slot.get_mut().unwrap().stage_mut().depth;
        assert!((depth - -99.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_is_a_noop_without_a_session() {
        let mut slot: SessionSlot<crate::stage::mock::MockStage> =
            SessionSlot::new();
        zoom(&mut slot, ZoomDirection::In, ZOOM_STEP_FRACTION);
        assert!(!slot.is_live());
    }
}
