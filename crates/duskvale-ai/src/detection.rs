//! Detection and range gating.
//!
//! Recomputed every tick from a fresh target snapshot; nothing here survives
//! beyond the decision it feeds.

use duskvale_core::components::Combatant;

use crate::capabilities::TargetView;

/// Derived per-tick view of the target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DetectionState {
    pub distance: f32,
    pub target_detected: bool,
    pub target_in_attack_range: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionGate {
    pub detection_range: f32,
    pub attack_range: f32,
}

impl DetectionGate {
    pub fn new(detection_range: f32, attack_range: f32) -> Self {
        Self {
            detection_range,
            attack_range,
        }
    }

    /// Measure the target without touching facing.
    ///
    /// A dead target is never detected and no distance is computed.
    pub fn measure(&self, own: &Combatant, target: &TargetView) -> DetectionState {
        if !target.alive {
            return DetectionState::default();
        }
        let distance = own.position.distance(target.position);
        let target_detected = distance <= self.detection_range;
        DetectionState {
            distance,
            target_detected,
            target_in_attack_range: target_detected && distance <= self.attack_range,
        }
    }

    /// Measure, then turn toward a detected target unless an attack is in
    /// progress. Facing stays frozen for the whole attack.
    pub fn observe(
        &self,
        own: &mut Combatant,
        target: &TargetView,
        attacking: bool,
    ) -> DetectionState {
        let state = self.measure(own, target);
        if state.target_detected && !attacking {
            own.face_toward(target.position.x);
        }
        state
    }
}
