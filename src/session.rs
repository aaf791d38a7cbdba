//! Viewport session lifecycle.
//!
//! One session per mounted view: created lazily on the first structure
//! request, reused for every subsequent one, and never destroyed while
//! the view is mounted. Components are cleared in place before each
//! reload rather than the stage being rebuilt.
//!
//! All mutation happens on the host's single event-dispatch context;
//! the `&mut` receivers below are what serialize access, not any
//! synchronization primitive. In particular a session can never have
//! two structure loads in flight at once.

use crate::error::PlasviewError;
use crate::source::StructureSource;
use crate::stage::{Stage, StageFactory, StageOptions};

/// The persistent rendering surface plus its zero-or-one loaded
/// structure component.
pub struct ViewportSession<S: Stage> {
    stage: S,
    component: Option<S::Component>,
}

impl<S: Stage> ViewportSession<S> {
    fn new(stage: S) -> Self {
        Self {
            stage,
            component: None,
        }
    }

    /// Remove all loaded components from the stage. Idempotent; safe to
    /// call when nothing is loaded.
    pub fn clear_structure(&mut self) {
        self.stage.remove_all_components();
        self.component = None;
    }

    /// Fetch the payload for `identifier`, parse it through the stage,
    /// and install the resulting component.
    ///
    /// The previous component, if any, is discarded wholesale.
    pub fn load_structure(
        &mut self,
        identifier: &str,
        source: &dyn StructureSource,
    ) -> Result<&mut S::Component, PlasviewError> {
        let payload = source.fetch(identifier)?;
        let component = self.stage.load_structure(identifier, &payload)?;
        Ok(self.component.insert(component))
    }

    /// The loaded component, if one is present.
    pub fn component_mut(&mut self) -> Option<&mut S::Component> {
        self.component.as_mut()
    }

    /// The underlying stage.
    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    /// Stage and component borrowed simultaneously, for camera work
    /// that commands the viewer while querying the component.
    pub fn split_mut(&mut self) -> (&mut S, Option<&mut S::Component>) {
        (&mut self.stage, self.component.as_mut())
    }
}

/// Owns the at-most-one live session for a mounted view.
pub struct SessionSlot<S: Stage> {
    session: Option<ViewportSession<S>>,
}

impl<S: Stage> Default for SessionSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Stage> SessionSlot<S> {
    /// An empty slot; the session is created on first [`Self::ensure`].
    #[must_use]
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Return the existing session, constructing one via the factory if
    /// none exists yet. The options only apply at construction time;
    /// an existing session is returned unchanged.
    pub fn ensure<F>(
        &mut self,
        factory: &mut F,
        options: &StageOptions,
    ) -> Result<&mut ViewportSession<S>, PlasviewError>
    where
        F: StageFactory<Stage = S>,
    {
        match &mut self.session {
            Some(session) => Ok(session),
            slot @ None => {
                let stage = factory.create_stage(options)?;
                log::debug!("viewport session created");
                Ok(slot.insert(ViewportSession::new(stage)))
            }
        }
    }

    /// The live session, if one has been created.
    pub fn get_mut(&mut self) -> Option<&mut ViewportSession<S>> {
        self.session.as_mut()
    }

    /// Whether a session has been created for this view.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock::MockSource;
    use crate::stage::mock::MockFactory;

    #[test]
    fn ensure_creates_the_session_once_and_reuses_it() {
        let mut slot = SessionSlot::new();
        let mut factory = MockFactory::default();
        let options = StageOptions::default();

        assert!(!slot.is_live());
        let _session = slot.ensure(&mut factory, &options).unwrap();
        assert!(slot.is_live());
        let _session = slot.ensure(&mut factory, &options).unwrap();
        assert_eq!(factory.created, 1);
    }

    #[test]
    fn ensure_applies_stage_options_at_construction() {
        let mut slot = SessionSlot::new();
        let mut factory = MockFactory::default();
        let options = StageOptions::default();

        let session = slot.ensure(&mut factory, &options).unwrap();
        assert_eq!(session.stage_mut().background_color, "black");
    }

    #[test]
    fn ensure_propagates_factory_failure_and_stays_empty() {
        let mut slot = SessionSlot::new();
        let mut factory = MockFactory {
            fail_creation: true,
            ..MockFactory::default()
        };

        let result = slot.ensure(&mut factory, &StageOptions::default());
        assert!(result.is_err());
        assert!(!slot.is_live());
    }

    #[test]
    fn load_installs_a_component_and_clear_discards_it() {
        let mut slot = SessionSlot::new();
        let mut factory = MockFactory::default();
        let source =
            MockSource::with_entries(&[("1abc", "ATOM payload")]);

        let session =
            slot.ensure(&mut factory, &StageOptions::default()).unwrap();
        let _component = session.load_structure("1abc", &source).unwrap();
        assert!(session.component_mut().is_some());
        assert_eq!(session.stage_mut().loaded, ["1abc"]);

        session.clear_structure();
        assert!(session.component_mut().is_none());
        assert_eq!(session.stage_mut().clear_calls, 1);
    }

    #[test]
    fn clear_is_idempotent_when_nothing_is_loaded() {
        let mut slot = SessionSlot::new();
        let mut factory = MockFactory::default();

        let session =
            slot.ensure(&mut factory, &StageOptions::default()).unwrap();
        session.clear_structure();
        session.clear_structure();
        assert_eq!(session.stage_mut().clear_calls, 2);
        assert!(session.component_mut().is_none());
    }

    #[test]
    fn failed_load_leaves_no_component_installed() {
        let mut slot = SessionSlot::new();
        let mut factory = MockFactory::default();
        let source = MockSource::default();

        let session =
            slot.ensure(&mut factory, &StageOptions::default()).unwrap();
        let result = session.load_structure("9zzz", &source);
        assert!(result.is_err());
        assert!(session.component_mut().is_none());
    }
}
