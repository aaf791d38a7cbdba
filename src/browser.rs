//! Mounted-view facade.
//!
//! Wires the selection state machine, load pipeline, viewport session,
//! and camera controls into one object the host UI drives with
//! discrete events: pick a variation, pick an identifier, toggle the
//! ligand, zoom, toggle fullscreen. Each event runs to completion on
//! the host's single dispatch context before the next one starts.

use std::path::Path;

use crate::camera::{self, ZoomDirection};
use crate::dataset::DatasetIndex;
use crate::options::ViewerOptions;
use crate::pipeline::{LoadContext, LoadPhase, LoadPipeline, LoadResult};
use crate::selection::{SelectionAction, SelectionState, Variation};
use crate::session::SessionSlot;
use crate::source::StructureSource;
use crate::stage::StageFactory;

/// Browses a curated dataset of protein-ligand complexes against one
/// persistent rendering surface.
pub struct ComplexBrowser<F: StageFactory, Src: StructureSource> {
    selection: SelectionState,
    pipeline: LoadPipeline,
    slot: SessionSlot<F::Stage>,
    factory: F,
    source: Src,
    index: DatasetIndex,
    options: ViewerOptions,
}

impl<F: StageFactory, Src: StructureSource> ComplexBrowser<F, Src> {
    /// Build a browser over an already-parsed dataset index.
    pub fn new(
        factory: F,
        source: Src,
        index: DatasetIndex,
        options: ViewerOptions,
    ) -> Self {
        Self {
            selection: SelectionState::new(),
            pipeline: LoadPipeline::new(),
            slot: SessionSlot::new(),
            factory,
            source,
            index,
            options,
        }
    }

    /// Build a browser, reading the dataset asset named by the options.
    ///
    /// A missing or malformed dataset is not fatal: the browser comes
    /// up with an empty identifier list and the failure is logged.
    pub fn mount(factory: F, source: Src, options: ViewerOptions) -> Self {
        let index = match DatasetIndex::load(Path::new(&options.dataset_path))
        {
            Ok(index) => index,
            Err(e) => {
                log::error!(
                    "failed to load dataset {}: {e}",
                    options.dataset_path
                );
                DatasetIndex::default()
            }
        };
        Self::new(factory, source, index, options)
    }

    /// Current selection snapshot.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// State last published by the load pipeline.
    #[must_use]
    pub fn load_result(&self) -> &LoadResult {
        self.pipeline.result()
    }

    /// Current load pipeline phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.pipeline.phase()
    }

    /// Selectable structure identifiers for the picker.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        self.index.unique_identifiers()
    }

    /// The parsed dataset index.
    #[must_use]
    pub fn index(&self) -> &DatasetIndex {
        &self.index
    }

    /// The session slot, for hosts layering extra viewer work on top.
    pub fn session_slot_mut(&mut self) -> &mut SessionSlot<F::Stage> {
        &mut self.slot
    }

    /// Select a dataset variation.
    pub fn select_variation(&mut self, variation: Variation) {
        let action = self.selection.set_variation(variation);
        self.dispatch(action);
    }

    /// Select a structure identifier and load it.
    pub fn select_identifier(&mut self, identifier: &str) {
        let action = self.selection.set_identifier(identifier);
        self.dispatch(action);
    }

    /// Flip ligand visibility, replaying the load for the current
    /// identifier when one is displayed.
    pub fn toggle_ligand(&mut self) {
        let action = self.selection.toggle_ligand();
        self.dispatch(action);
    }

    /// Flip the fullscreen flag; returns the state the host should
    /// request from the platform.
    pub fn toggle_fullscreen(&mut self) -> bool {
        let _action = self.selection.toggle_fullscreen();
        self.selection.fullscreen()
    }

    /// Step the camera depth toward or away from the scene.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        camera::zoom(&mut self.slot, direction, self.options.zoom_step);
    }

    fn dispatch(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::LoadStructure(identifier) => {
                let ligand_visible = self.selection.ligand_visible();
                let mut ctx = LoadContext {
                    slot: &mut self.slot,
                    factory: &mut self.factory,
                    source: &self.source,
                    index: &self.index,
                    options: &self.options,
                };
                let _result =
                    self.pipeline.run(&identifier, ligand_visible, &mut ctx);
            }
            SelectionAction::SetFullscreen(_) | SelectionAction::None => {}
        }
    }
}
