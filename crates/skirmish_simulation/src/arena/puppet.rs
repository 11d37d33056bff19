//! Headless animation puppet.
//!
//! The core signals through a `SignalBuffer`; systems flush the buffer as
//! `AnimationSignalEvent`s and `drive_puppets` folds them into `Puppet`.
//! An engine bridge would read the same events instead.

use bevy::prelude::*;

use crate::combat::PunchSide;
use crate::shared::{AnimSignal, AnimTrigger, AnimationDriver};

/// Event: one animation signal addressed to an actor.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AnimationSignalEvent {
    pub entity: Entity,
    pub signal: AnimSignal,
}

/// `AnimationDriver` collecting signals during one actor update.
#[derive(Debug, Default)]
pub struct SignalBuffer {
    pub signals: Vec<AnimSignal>,
}

impl AnimationDriver for SignalBuffer {
    fn signal(&mut self, signal: AnimSignal) {
        self.signals.push(signal);
    }
}

impl SignalBuffer {
    /// Emit the buffered signals for `entity`, in order.
    pub fn flush(self, entity: Entity, writer: &mut EventWriter<AnimationSignalEvent>) {
        for signal in self.signals {
            writer.write(AnimationSignalEvent { entity, signal });
        }
    }
}

/// Animator parameters as last written (what an animation controller would hold).
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Puppet {
    /// "Speed" float
    pub speed: f32,
    /// "PunchIndex" int
    pub punch_side: PunchSide,
    pub attack_triggers: u32,
    pub hit_triggers: u32,
    pub die_triggers: u32,
}

impl Puppet {
    pub fn apply(&mut self, signal: AnimSignal) {
        match signal {
            AnimSignal::Speed(speed) => self.speed = speed,
            AnimSignal::PunchSide(side) => self.punch_side = side,
            AnimSignal::Trigger(AnimTrigger::Attack) => self.attack_triggers += 1,
            AnimSignal::Trigger(AnimTrigger::Hit) => self.hit_triggers += 1,
            AnimSignal::Trigger(AnimTrigger::Die) => self.die_triggers += 1,
        }
    }
}

/// System: apply this step's signals to puppets.
pub fn drive_puppets(
    mut signals: EventReader<AnimationSignalEvent>,
    mut puppets: Query<&mut Puppet>,
) {
    for event in signals.read() {
        let Ok(mut puppet) = puppets.get_mut(event.entity) else {
            continue;
        };
        if let AnimSignal::Trigger(trigger) = event.signal {
            crate::logger::log(&format!("🎭 {:?} → {}", event.entity, trigger.name()));
        }
        puppet.apply(event.signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puppet_tracks_parameters() {
        let mut puppet = Puppet::default();

        puppet.apply(AnimSignal::Speed(0.5));
        puppet.apply(AnimSignal::PunchSide(PunchSide::Right));
        puppet.apply(AnimSignal::Trigger(AnimTrigger::Attack));
        puppet.apply(AnimSignal::Trigger(AnimTrigger::Hit));
        puppet.apply(AnimSignal::Trigger(AnimTrigger::Hit));

        assert_eq!(puppet.speed, 0.5);
        assert_eq!(puppet.punch_side, PunchSide::Right);
        assert_eq!(puppet.attack_triggers, 1);
        assert_eq!(puppet.hit_triggers, 2);
        assert_eq!(puppet.die_triggers, 0);
    }
}
