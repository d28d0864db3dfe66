use bevy::app::{App, FixedUpdate, Plugin};
use bevy::ecs::system::ResMut;
use bevy::log::error;

use super::data::builder::SimulationBuilder;
use super::data::simulation::Simulation;

/// A plugin that owns a falling sand simulation and steps it on the fixed timestep
#[derive(Debug, Clone, Default)]
pub struct FallingSandPlugin {
    pub builder: SimulationBuilder,
}

impl FallingSandPlugin {
    pub fn new(builder: SimulationBuilder) -> Self {
        Self { builder }
    }

    /// Advance the simulation by one tick
    pub fn step_system(mut simulation: ResMut<Simulation>) {
        simulation.step();
    }
}

impl Plugin for FallingSandPlugin {
    fn build(&self, app: &mut App) {
        let simulation = match self.builder.clone().build() {
            Ok(simulation) => simulation,
            Err(err) => {
                error!("Could not build the falling sand simulation: {}", err);
                panic!("invalid falling sand configuration: {}", err);
            }
        };
        app.insert_resource(simulation);
        app.add_systems(FixedUpdate, Self::step_system);
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::IVec2;

    use super::*;
    use crate::physics::fallingsand::elements::element::ParticleType;

    fn get_app() -> App {
        let mut app = App::new();
        app.add_plugins(FallingSandPlugin::new(
            SimulationBuilder::new().width(3).height(3),
        ));
        app
    }

    #[test]
    fn test_plugin_inserts_simulation() {
        let app = get_app();
        let simulation = app.world.resource::<Simulation>();
        assert_eq!(simulation.width(), 3);
        assert_eq!(simulation.tick(), 0);
    }

    #[test]
    fn test_fixed_update_steps() {
        let mut app = get_app();
        app.world
            .resource_mut::<Simulation>()
            .spawn(IVec2::new(1, 0), ParticleType::Sand)
            .unwrap();
        app.world.run_schedule(FixedUpdate);
        let simulation = app.world.resource::<Simulation>();
        assert_eq!(simulation.tick(), 1);
        assert_eq!(simulation.kind_at(IVec2::new(1, 1)), Some(ParticleType::Sand));
    }

    #[test]
    #[should_panic]
    fn test_invalid_config_panics() {
        let mut app = App::new();
        app.add_plugins(FallingSandPlugin::new(SimulationBuilder::new().width(0)));
    }
}
