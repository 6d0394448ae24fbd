//! Session loop: one map plus the AI controllers steering its entities.

use skirmish_engine::{BehaviourProfile, Map, SimConfig};
use tracing::{debug, trace};

/// A running simulation that owns the world and its AI controllers.
///
/// Each [`Session::tick`] advances everything by one step in a fixed order:
/// controllers act first (in registration order) so their zero-delay actions
/// land in the same step, then the map fires due actions, counts buffs down,
/// and culls the dead. Controllers whose entity was culled are dropped at the
/// end of the step and never act again.
pub struct Session {
    map: Map,
    controllers: Vec<Box<dyn BehaviourProfile>>,
    config: SimConfig,
    tick: u64,
}

impl Session {
    pub fn new(map: Map, config: SimConfig) -> Self {
        Self {
            map,
            controllers: Vec::new(),
            config,
            tick: 0,
        }
    }

    /// Registers an AI controller. Controllers act in registration order.
    pub fn add_controller(&mut self, controller: Box<dyn BehaviourProfile>) {
        self.controllers.push(controller);
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Mutable world access for the embedding layer, e.g. player commands.
    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    pub fn config(&self) -> SimConfig {
        self.config
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Number of live AI controllers.
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    /// True while the player entity is alive.
    pub fn player_alive(&self) -> bool {
        self.map.entity(self.map.player_id()).is_some()
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) {
        for controller in &mut self.controllers {
            controller.tick(&mut self.map);
        }
        self.map.tick_and_apply_actions();

        let before = self.controllers.len();
        let map = &self.map;
        self.controllers
            .retain(|controller| map.entity(controller.entity_id()).is_some());
        let culled = before - self.controllers.len();
        if culled > 0 {
            debug!("Dropped {} controller(s) for culled entities", culled);
        }

        self.tick += 1;
        trace!(
            "Tick {} complete: {} live entities, {} pending actions",
            self.tick,
            self.map.active_entity_ids().len(),
            self.map.pending_actions()
        );
    }
}
