//! The navigation resource: focus history, camera scheduler and the catalog
//! selections are resolved against.

use bevy_ecs::prelude::*;
use orrery_config::Config;
use orrery_nav::{
    CameraPose, FocusEntry, FocusRequest, FocusStack, FrameScheduler, SceneQuery, SelectionError,
    UnknownEasing, apply_request, select_by_name,
};
use orrery_orbit::BodyCatalog;

/// Owns the focus stack and the frame scheduler.
///
/// All focus mutations go through [`select`](Self::select),
/// [`select_name`](Self::select_name) and [`back`](Self::back); the
/// scheduler observes them on the next [`tick`](Self::tick).
#[derive(Resource, Debug, Default)]
pub struct Navigator {
    catalog: BodyCatalog,
    stack: FocusStack,
    scheduler: FrameScheduler,
}

impl Navigator {
    /// Navigator rooted at the sun.
    pub fn new(catalog: BodyCatalog, scheduler: FrameScheduler) -> Self {
        Self {
            catalog,
            stack: FocusStack::default(),
            scheduler,
        }
    }

    /// Build from config.
    ///
    /// # Errors
    ///
    /// Fails if the configured easing name is unknown.
    pub fn from_config(config: &Config, catalog: BodyCatalog) -> Result<Self, UnknownEasing> {
        let scheduler = FrameScheduler::from_config(&config.navigation, &config.simulation)?;
        Ok(Self::new(catalog, scheduler))
    }

    /// Apply a UI selection. Unknown kinds are ignored and return `Ok(false)`.
    pub fn select(&mut self, request: &FocusRequest) -> Result<bool, SelectionError> {
        apply_request(&mut self.stack, &self.catalog, request)
    }

    /// Focus a body by name.
    pub fn select_name(&mut self, name: &str) -> Result<(), SelectionError> {
        select_by_name(&mut self.stack, &self.catalog, name)
    }

    /// Return to the previous level. The root focus is never popped.
    pub fn back(&mut self) -> Option<FocusEntry> {
        self.stack.pop_focus()
    }

    /// Advance the camera one frame.
    pub fn tick(&mut self, now_ms: f64, scene: &impl SceneQuery) -> CameraPose {
        self.scheduler.update(now_ms, &self.stack, scene)
    }

    /// Focus history.
    pub fn stack(&self) -> &FocusStack {
        &self.stack
    }

    /// Camera scheduler.
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// The catalog selections resolve against.
    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Caption for the focused entry.
    pub fn headline(&self) -> String {
        self.stack.current().headline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_nav::FocusKind;
    use orrery_orbit::PresetOptions;

    fn navigator() -> Navigator {
        Navigator::new(
            BodyCatalog::solar_system(&PresetOptions::default()),
            FrameScheduler::default(),
        )
    }

    #[test]
    fn test_select_and_back() {
        let mut nav = navigator();
        assert_eq!(nav.headline(), "Star: Sun");

        nav.select(&FocusRequest::new("planet", 3)).unwrap();
        assert_eq!(nav.headline(), "Planet: Earth");
        nav.select_name("moon").unwrap();
        assert_eq!(nav.stack().current().kind, FocusKind::Moon);

        assert_eq!(nav.back().unwrap().data.name, "Moon");
        assert_eq!(nav.back().unwrap().data.name, "Earth");
        assert!(nav.back().is_none());
        assert_eq!(nav.headline(), "Star: Sun");
    }

    #[test]
    fn test_from_config_uses_configured_duration() {
        let mut config = Config::default();
        config.navigation.transition_ms = 300.0;
        let nav = Navigator::from_config(&config, BodyCatalog::default()).unwrap();
        assert_eq!(nav.scheduler().duration_ms(), 300.0);
    }

    #[test]
    fn test_from_config_rejects_bad_easing() {
        let mut config = Config::default();
        config.navigation.easing = "springy".to_string();
        assert!(Navigator::from_config(&config, BodyCatalog::default()).is_err());
    }
}
