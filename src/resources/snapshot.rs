use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

use crate::{
    physics::HazardEvent,
    resources::{FlightId, ScreenTint, WarningCue},
};

/// Immutable view of a flight after one tick, for consumers outside the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub flight_id: FlightId,
    pub tick: u64,
    pub g_force: f64,
    pub consciousness: f64,
    pub new_hazards: Vec<HazardEvent>,
    pub hazard_total: usize,
    pub tint: ScreenTint,
    pub warning: WarningCue,
}

/// Fan-out of per-tick snapshots over unbounded channels.
#[derive(Resource, Debug, Default)]
pub struct SnapshotFeed {
    subscribers: Vec<Sender<FlightSnapshot>>,
}

impl SnapshotFeed {
    pub fn subscribe(&mut self) -> Receiver<FlightSnapshot> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Sends to every live subscriber and forgets the ones that hung up.
    pub fn publish(&mut self, snapshot: &FlightSnapshot) {
        self.subscribers
            .retain(|sender| sender.send(snapshot.clone()).is_ok());
    }
}
