use super::models::{Mode, ModeSource};
use super::router::PathRouter;
use super::Result;

/// What a mode should be derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeContext<'a> {
    /// The controller's own state (toggle state, or the last navigated path)
    Stored,
    /// An explicit navigation path
    Path(&'a str),
}

/// Tracks or derives the active mode
///
/// Both configurations answer the same questions; they differ only in what
/// they store. A toggled controller stores the mode itself, a routed one
/// stores the last navigated path and resolves it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeController {
    Toggled { mode: Mode, router: PathRouter },
    Routed { router: PathRouter, path: String },
}

impl Default for ModeController {
    fn default() -> Self {
        Self::toggled(Mode::Editor)
    }
}

impl ModeController {
    pub fn toggled(initial: Mode) -> Self {
        Self::toggled_with(initial, PathRouter::default())
    }

    /// Toggled controller that resolves explicit paths with `router`
    pub fn toggled_with(initial: Mode, router: PathRouter) -> Self {
        Self::Toggled {
            mode: initial,
            router,
        }
    }

    pub fn routed(router: PathRouter, initial_path: impl Into<String>) -> Self {
        Self::Routed {
            router,
            path: initial_path.into(),
        }
    }

    /// Build a controller for the configured source
    ///
    /// A routed controller starts at the canonical path of `initial`.
    pub fn for_source(source: ModeSource, initial: Mode, fallback: Mode) -> Self {
        match source {
            ModeSource::Toggle => Self::toggled_with(initial, PathRouter::new(fallback)),
            ModeSource::Routed => Self::routed(PathRouter::new(fallback), initial.path()),
        }
    }

    pub fn source(&self) -> ModeSource {
        match self {
            Self::Toggled { .. } => ModeSource::Toggle,
            Self::Routed { .. } => ModeSource::Routed,
        }
    }

    /// The active mode
    pub fn mode(&self) -> Mode {
        self.derive_mode(ModeContext::Stored)
    }

    /// Derive a mode from stored state or from an explicit path
    ///
    /// Never changes the controller's state.
    pub fn derive_mode(&self, context: ModeContext<'_>) -> Mode {
        match (self, context) {
            (Self::Toggled { mode, .. }, ModeContext::Stored) => *mode,
            (Self::Routed { router, path }, ModeContext::Stored) => router.resolve(path),
            (_, ModeContext::Path(path)) => self.router().resolve(path),
        }
    }

    /// Resolve a path without touching the stored state
    pub fn resolve(&self, path: &str) -> Mode {
        self.derive_mode(ModeContext::Path(path))
    }

    /// Flip to the other mode and return it
    ///
    /// A routed controller flips by navigating to the other mode's path.
    pub fn toggle(&mut self) -> Mode {
        match self {
            Self::Toggled { mode, .. } => {
                *mode = mode.toggled();
                *mode
            }
            Self::Routed { router, path } => {
                let next = router.resolve(path).toggled();
                *path = next.path().to_string();
                next
            }
        }
    }

    /// Record a navigation and return the mode it selects
    ///
    /// A toggled controller adopts the resolved mode as its stored state.
    pub fn navigate(&mut self, target: &str) -> Mode {
        match self {
            Self::Toggled { mode, router } => {
                *mode = router.resolve(target);
                *mode
            }
            Self::Routed { router, path } => {
                *path = target.to_string();
                router.resolve(path)
            }
        }
    }

    /// Current navigation path (canonical mode path when toggled)
    pub fn path(&self) -> &str {
        match self {
            Self::Toggled { mode, .. } => mode.path(),
            Self::Routed { path, .. } => path,
        }
    }

    /// Resolve a path, reporting paths outside the route table
    pub fn try_resolve(&self, path: &str) -> Result<Mode> {
        self.router().try_resolve(path)
    }

    pub fn router(&self) -> PathRouter {
        match self {
            Self::Toggled { router, .. } | Self::Routed { router, .. } => *router,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_starts_in_editor() {
        let controller = ModeController::default();
        assert_eq!(controller.mode(), Mode::Editor);
        assert_eq!(controller.source(), ModeSource::Toggle);
    }

    #[test]
    fn test_toggle_two_cycle() {
        let mut controller = ModeController::default();
        assert_eq!(controller.toggle(), Mode::Viewer);
        assert_eq!(controller.mode(), Mode::Viewer);
        assert_eq!(controller.toggle(), Mode::Editor);
        assert_eq!(controller.toggle(), Mode::Viewer);
    }

    #[test]
    fn test_toggled_initial_viewer() {
        let mut controller = ModeController::for_source(ModeSource::Toggle, Mode::Viewer, Mode::Editor);
        assert_eq!(controller.mode(), Mode::Viewer);
        assert_eq!(controller.toggle(), Mode::Editor);
    }

    #[test]
    fn test_routed_derives_from_path() {
        let mut controller = ModeController::for_source(ModeSource::Routed, Mode::Editor, Mode::Editor);
        assert_eq!(controller.path(), "/editor");
        assert_eq!(controller.mode(), Mode::Editor);

        assert_eq!(controller.navigate("/viewer"), Mode::Viewer);
        assert_eq!(controller.mode(), Mode::Viewer);
        assert_eq!(controller.path(), "/viewer");
    }

    #[test]
    fn test_routed_unmapped_path_falls_back_consistently() {
        let mut controller = ModeController::routed(PathRouter::new(Mode::Editor), "/viewer");
        assert_eq!(controller.navigate("/unknown"), Mode::Editor);
        assert_eq!(controller.mode(), Mode::Editor);
        assert_eq!(controller.mode(), Mode::Editor);
        assert_eq!(controller.path(), "/unknown");
    }

    #[test]
    fn test_routed_toggle_navigates_to_other_path() {
        let mut controller = ModeController::routed(PathRouter::default(), "/editor");
        assert_eq!(controller.toggle(), Mode::Viewer);
        assert_eq!(controller.path(), "/viewer");
        assert_eq!(controller.toggle(), Mode::Editor);
        assert_eq!(controller.path(), "/editor");

        // From an unmapped path the fallback is the mode being left
        controller.navigate("/nowhere");
        assert_eq!(controller.toggle(), Mode::Viewer);
    }

    #[test]
    fn test_derive_mode_with_path_does_not_change_state() {
        let controller = ModeController::default();
        assert_eq!(controller.derive_mode(ModeContext::Path("/viewer")), Mode::Viewer);
        assert_eq!(controller.derive_mode(ModeContext::Stored), Mode::Editor);

        let controller = ModeController::routed(PathRouter::new(Mode::Viewer), "/editor");
        assert_eq!(controller.resolve("/missing"), Mode::Viewer);
        assert_eq!(controller.mode(), Mode::Editor);
    }

    #[test]
    fn test_toggled_navigate_adopts_resolved_mode() {
        let mut controller = ModeController::default();
        assert_eq!(controller.navigate("/viewer"), Mode::Viewer);
        assert_eq!(controller.path(), "/viewer");
        assert_eq!(controller.navigate("/elsewhere"), Mode::Editor);
    }

    #[test]
    fn test_toggled_uses_configured_fallback() {
        let mut controller = ModeController::for_source(ModeSource::Toggle, Mode::Editor, Mode::Viewer);
        assert_eq!(controller.router().fallback(), Mode::Viewer);
        assert_eq!(controller.resolve("/unknown"), Mode::Viewer);
        assert_eq!(controller.mode(), Mode::Editor);

        assert_eq!(controller.navigate("/unknown"), Mode::Viewer);
        assert_eq!(controller.mode(), Mode::Viewer);
        assert_eq!(controller.navigate("/editor"), Mode::Editor);
    }

    #[test]
    fn test_try_resolve_uses_table() {
        let controller = ModeController::for_source(ModeSource::Toggle, Mode::Editor, Mode::Viewer);
        assert_eq!(controller.try_resolve("/viewer/"), Ok(Mode::Viewer));
        assert!(controller.try_resolve("/unknown").is_err());
    }
}
