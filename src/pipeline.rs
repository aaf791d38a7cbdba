//! Structure load pipeline.
//!
//! Drives the full reload sequence for a selected identifier against
//! the single viewport session: ensure the session exists, clear the
//! previous structure, fetch and parse the new one, apply the wanted
//! representations, frame the view, and publish details back to the
//! host. Every run is a full clear-and-reconstruct; toggling a
//! representation replays the same sequence rather than patching the
//! loaded component.
//!
//! A run is tagged with the identifier it was requested for. When a
//! newer selection supersedes a still-unpublished run, the stale
//! outcome is discarded instead of overwriting the fresh one.

use crate::camera;
use crate::dataset::{DatasetIndex, DatasetRecord};
use crate::error::PlasviewError;
use crate::options::ViewerOptions;
use crate::session::SessionSlot;
use crate::source::StructureSource;
use crate::stage::{
    Representation, StageFactory, StructureComponent, LIGAND_SELECTOR,
};

/// Phase of the load pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No load has been requested yet.
    #[default]
    Idle,
    /// A load run is in flight.
    Loading,
    /// The last run published its structure and details.
    Ready,
    /// The last run failed; recoverable by selecting again.
    Failed,
}

/// State published back to the host UI after each pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    /// Dataset details for the displayed identifier; empty when none.
    pub details: DatasetRecord,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Failure description from the most recent run, if it failed.
    pub error: Option<String>,
}

/// Tag tying an in-flight run to the identifier it was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    identifier: String,
}

impl LoadTicket {
    /// Identifier this run was requested for.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Borrowed collaborators a pipeline run operates over.
pub struct LoadContext<'a, F: StageFactory> {
    /// Session slot owned by the mounted view.
    pub slot: &'a mut SessionSlot<F::Stage>,
    /// Stage factory bound to the host's mount target.
    pub factory: &'a mut F,
    /// Remote structure source.
    pub source: &'a dyn StructureSource,
    /// Parsed dataset index.
    pub index: &'a DatasetIndex,
    /// Viewer options.
    pub options: &'a ViewerOptions,
}

/// The `Idle -> Loading -> Ready/Failed` load state machine.
#[derive(Debug, Default)]
pub struct LoadPipeline {
    phase: LoadPhase,
    result: LoadResult,
    requested: Option<String>,
}

impl LoadPipeline {
    /// A fresh pipeline in the idle phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pipeline phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// State last published to the host.
    #[must_use]
    pub fn result(&self) -> &LoadResult {
        &self.result
    }

    /// Whether a run is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.result.loading
    }

    /// Enter the loading phase for `identifier` and hand back the
    /// ticket the caller must return to [`Self::finish`].
    ///
    /// Returns `None` for an empty identifier: clearing the selection
    /// is not a load trigger. A `begin` while a previous run is still
    /// unfinished supersedes it; the stale run's outcome will be
    /// discarded when it arrives.
    pub fn begin(&mut self, identifier: &str) -> Option<LoadTicket> {
        if identifier.is_empty() {
            return None;
        }
        self.phase = LoadPhase::Loading;
        self.result.loading = true;
        self.result.error = None;
        self.requested = Some(identifier.to_owned());
        Some(LoadTicket {
            identifier: identifier.to_owned(),
        })
    }

    /// Publish a finished run.
    ///
    /// Outcomes whose ticket no longer matches the current selection
    /// are dropped so a stale slow load cannot overwrite a fresh one.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<DatasetRecord, PlasviewError>,
    ) {
        if self.requested.as_deref() != Some(ticket.identifier.as_str()) {
            log::debug!(
                "discarding stale load result for {}",
                ticket.identifier
            );
            return;
        }

        match outcome {
            Ok(details) => {
                self.result.details = details;
                self.result.loading = false;
                self.result.error = None;
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                log::error!(
                    "failed to load structure {}: {e}",
                    ticket.identifier
                );
                self.result.details = DatasetRecord::default();
                self.result.loading = false;
                self.result.error = Some(e.to_string());
                self.phase = LoadPhase::Failed;
            }
        }
    }

    /// Begin, execute, and finish a run in one call: the host path when
    /// selections are dispatched synchronously.
    pub fn run<F: StageFactory>(
        &mut self,
        identifier: &str,
        ligand_visible: bool,
        ctx: &mut LoadContext<'_, F>,
    ) -> &LoadResult {
        if let Some(ticket) = self.begin(identifier) {
            let outcome = execute(&ticket, ligand_visible, ctx);
            self.finish(ticket, outcome);
        }
        self.result()
    }
}

/// The reload sequence for one run, in fixed order: ensure the session,
/// clear the previous structure, load the new one, add the cartoon,
/// add the ligand licorice when visible, auto-view the ligand, look up
/// dataset details, then tighten the frame onto the ligand.
pub fn execute<F: StageFactory>(
    ticket: &LoadTicket,
    ligand_visible: bool,
    ctx: &mut LoadContext<'_, F>,
) -> Result<DatasetRecord, PlasviewError> {
    let session = ctx.slot.ensure(ctx.factory, &ctx.options.stage)?;
    session.clear_structure();

    let component =
        session.load_structure(&ticket.identifier, ctx.source)?;
    component.add_representation(&Representation::Cartoon);
    if ligand_visible {
        component.add_representation(&Representation::ligand_licorice(
            ctx.options.ligand_scale,
        ));
    }
    component.auto_view(LIGAND_SELECTOR);

    let details = ctx.index.lookup(&ticket.identifier);
    camera::frame_ligand(session);

    Ok(details)
}
