//! Commands accepted by the simulation plugin

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimulationCommand {
    /// Rebuild the initial system and zero the elapsed time
    Restart,
    TogglePause,
    /// Multiply every subsequent step by this factor
    SetTimeScale(f64),
}
