//! Stage labels and the ordered schedule runner.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{IntoSystemConfigs, ScheduleLabel};

/// Labels for each frame stage.
///
/// Stages run in the order listed, top to bottom, every frame.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EngineSchedule {
    /// Advance the simulated clock.
    PreUpdate,
    /// Advance orbital angles and local positions.
    Update,
    /// Compose world positions (moons onto their planets).
    PostUpdate,
    /// Plan and emit the camera pose.
    PreRender,
}

/// Ordered collection of [`Schedule`]s that drives one frame.
pub struct EngineSchedules {
    schedules: Vec<(EngineSchedule, Schedule)>,
}

impl EngineSchedules {
    /// Create an empty set of stages.
    pub fn new() -> Self {
        let stages = vec![
            EngineSchedule::PreUpdate,
            EngineSchedule::Update,
            EngineSchedule::PostUpdate,
            EngineSchedule::PreRender,
        ];

        let schedules = stages
            .into_iter()
            .map(|label| (label, Schedule::default()))
            .collect();

        Self { schedules }
    }

    /// Register a system (or system tuple) into a specific stage.
    pub fn add_system<M>(&mut self, stage: EngineSchedule, system: impl IntoSystemConfigs<M>) {
        if let Some(schedule) = self.get_schedule_mut(&stage) {
            schedule.add_systems(system);
        }
    }

    /// Run all stages in order for one frame.
    pub fn run(&mut self, world: &mut World) {
        for (_label, schedule) in &mut self.schedules {
            schedule.run(world);
        }
    }

    /// Returns a mutable reference to the schedule for a given stage.
    pub fn get_schedule_mut(&mut self, stage: &EngineSchedule) -> Option<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|(label, _)| label == stage)
            .map(|(_, schedule)| schedule)
    }
}

impl Default for EngineSchedules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_world;

    #[derive(Resource, Default)]
    struct ExecutionLog {
        stages: Vec<String>,
    }

    fn log_system(stage_name: &'static str) -> impl Fn(ResMut<'_, ExecutionLog>) {
        move |mut log: ResMut<'_, ExecutionLog>| {
            log.stages.push(stage_name.to_string());
        }
    }

    #[test]
    fn test_schedule_runs_all_stages_in_order() {
        let mut world = create_world();
        world.insert_resource(ExecutionLog::default());

        let mut schedules = EngineSchedules::new();
        // Registered out of order on purpose.
        schedules.add_system(EngineSchedule::PreRender, log_system("PreRender"));
        schedules.add_system(EngineSchedule::Update, log_system("Update"));
        schedules.add_system(EngineSchedule::PreUpdate, log_system("PreUpdate"));
        schedules.add_system(EngineSchedule::PostUpdate, log_system("PostUpdate"));

        schedules.run(&mut world);

        let log = world.resource::<ExecutionLog>();
        assert_eq!(log.stages, vec!["PreUpdate", "Update", "PostUpdate", "PreRender"]);
    }

    #[test]
    fn test_every_stage_has_a_schedule() {
        let mut schedules = EngineSchedules::default();
        for stage in [
            EngineSchedule::PreUpdate,
            EngineSchedule::Update,
            EngineSchedule::PostUpdate,
            EngineSchedule::PreRender,
        ] {
            assert!(schedules.get_schedule_mut(&stage).is_some(), "{stage:?}");
        }
    }
}
