//! Top-level selection state machine.
//!
//! Pure state transitions: each event method mutates the snapshot and
//! returns the follow-up work the host must dispatch. No asynchronous
//! work happens here; the pipeline and camera layers observe the flags
//! and identifiers this module maintains.

use serde::{Deserialize, Serialize};

/// Dataset variation choices presented by the host UI.
///
/// Only [`Variation::Plas5k`] is wired to a backing dataset; the other
/// entries are placeholders pending their data drops.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variation {
    /// The PLAS-5K complex dataset.
    Plas5k,
    /// Second PLAS-5K variation (no data yet).
    Plas5kVariation2,
    /// Third PLAS-5K variation (no data yet).
    Plas5kVariation3,
    /// The APO-Bind dataset (no data yet).
    ApoBind,
}

impl Variation {
    /// Every variation, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::Plas5k,
        Self::Plas5kVariation2,
        Self::Plas5kVariation3,
        Self::ApoBind,
    ];

    /// UI label, matching the datasets' published naming.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Plas5k => "PLAS-5K",
            Self::Plas5kVariation2 => "PLAS-5K Variation 2",
            Self::Plas5kVariation3 => "PLAS-5K Variation 3",
            Self::ApoBind => "APO-Bind",
        }
    }

    /// Whether this variation is wired to a backing dataset.
    #[must_use]
    pub fn has_dataset(self) -> bool {
        matches!(self, Self::Plas5k)
    }
}

/// Follow-up work the host must dispatch after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Nothing to do.
    None,
    /// Run the load pipeline for the given identifier.
    LoadStructure(String),
    /// Enter or exit platform fullscreen on the mount target.
    SetFullscreen(bool),
}

/// Snapshot of the user's current selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    variation: Option<Variation>,
    identifier: Option<String>,
    ligand_visible: bool,
    fullscreen: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            variation: None,
            identifier: None,
            // The ligand is shown until the user hides it.
            ligand_visible: true,
            fullscreen: false,
        }
    }
}

impl SelectionState {
    /// A fresh selection: no variation, no identifier, ligand shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected variation, if any.
    #[must_use]
    pub fn variation(&self) -> Option<Variation> {
        self.variation
    }

    /// Currently selected structure identifier, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Whether the ligand representation is shown.
    #[must_use]
    pub fn ligand_visible(&self) -> bool {
        self.ligand_visible
    }

    /// Whether the view is in fullscreen mode.
    #[must_use]
    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether the identifier picker is shown for the current
    /// variation.
    #[must_use]
    pub fn identifier_picker_visible(&self) -> bool {
        self.variation.is_some_and(Variation::has_dataset)
    }

    /// Select a dataset variation.
    ///
    /// Switching variation gates the picker's visibility only; a
    /// previously selected identifier and its displayed structure are
    /// retained.
    pub fn set_variation(&mut self, variation: Variation) -> SelectionAction {
        self.variation = Some(variation);
        SelectionAction::None
    }

    /// Select a structure identifier. An empty identifier clears the
    /// selection without triggering a load.
    pub fn set_identifier(&mut self, identifier: &str) -> SelectionAction {
        if identifier.is_empty() {
            self.identifier = None;
            return SelectionAction::None;
        }
        self.identifier = Some(identifier.to_owned());
        SelectionAction::LoadStructure(identifier.to_owned())
    }

    /// Flip ligand visibility. Replays the load for the current
    /// identifier so the representation set is rebuilt from scratch.
    pub fn toggle_ligand(&mut self) -> SelectionAction {
        self.ligand_visible = !self.ligand_visible;
        match &self.identifier {
            Some(identifier) => {
                SelectionAction::LoadStructure(identifier.clone())
            }
            None => SelectionAction::None,
        }
    }

    /// Flip the fullscreen flag and request the matching platform
    /// state. The actual fullscreen transition is the host's job.
    pub fn toggle_fullscreen(&mut self) -> SelectionAction {
        self.fullscreen = !self.fullscreen;
        SelectionAction::SetFullscreen(self.fullscreen)
    }
}
