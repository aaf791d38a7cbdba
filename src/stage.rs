//! Rendering-engine boundary.
//!
//! The crate drives an external molecular rendering engine through the
//! traits in this module; it never parses structure files or draws
//! geometry itself. A host binds a [`StageFactory`] to its mount target
//! and the session layer takes it from there: one [`Stage`] per mounted
//! view, zero-or-one [`StructureComponent`] loaded into it at a time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::PlasviewError;

/// Atom selector matching the bound small-molecule ligand.
pub const LIGAND_SELECTOR: &str = "ligand";

/// Rendering style applied to a loaded structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    /// Backbone cartoon covering the whole structure.
    Cartoon,
    /// Licorice sticks restricted to an atom selector.
    Licorice {
        /// Atom selector the sticks are restricted to.
        selector: String,
        /// Stick radius scale factor.
        scale: f32,
    },
}

impl Representation {
    /// Licorice sticks over the ligand sub-selection.
    #[must_use]
    pub fn ligand_licorice(scale: f32) -> Self {
        Self::Licorice {
            selector: LIGAND_SELECTOR.to_owned(),
            scale,
        }
    }
}

/// Axis-aligned bounds of an atom sub-selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Box center in world space.
    pub center: Vec3,
    /// Box extent along each axis.
    pub size: Vec3,
}

/// Options applied when a stage is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StageOptions {
    /// Background color of the rendering surface.
    pub background_color: String,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            background_color: "black".to_owned(),
        }
    }
}

/// A loaded molecular structure and its active representations.
///
/// Owned exclusively by the session that loaded it and replaced
/// wholesale on every reload; representations are never updated
/// incrementally.
pub trait StructureComponent {
    /// Apply a representation to this component.
    fn add_representation(&mut self, representation: &Representation);

    /// Coarse camera fit of the atoms matching `selector`.
    fn auto_view(&mut self, selector: &str);

    /// Number of atoms matching `selector`.
    fn atom_count(&self, selector: &str) -> usize;

    /// Minimal bounding box of the atoms matching `selector`, or `None`
    /// when no atoms match.
    fn bounding_box(&self, selector: &str) -> Option<BoundingBox>;
}

/// The persistent rendering surface.
///
/// Implementations parse structure payloads, manage loaded components,
/// and expose the handful of viewer controls the camera layer needs.
pub trait Stage {
    /// Component handle produced by [`Stage::load_structure`].
    type Component: StructureComponent;

    /// Parse a structure payload and add it to the stage.
    ///
    /// `name` identifies the structure for diagnostics; `payload` is the
    /// structure file's own text format, passed through uninterpreted.
    fn load_structure(
        &mut self,
        name: &str,
        payload: &str,
    ) -> Result<Self::Component, PlasviewError>;

    /// Remove every loaded component. Safe to call when nothing is
    /// loaded.
    fn remove_all_components(&mut self);

    /// Center the camera on `center` and fit `size` into view.
    fn zoom_to(&mut self, center: Vec3, size: Vec3);

    /// Camera depth offset from the scene origin.
    fn camera_depth(&self) -> f32;

    /// Overwrite the camera depth offset.
    fn set_camera_depth(&mut self, depth: f32);

    /// Schedule a redraw.
    fn request_render(&mut self);
}

/// Constructs a stage bound to the host's mount target.
///
/// The mount target itself is a host concern; a factory captures it at
/// wiring time so the session layer can create the stage lazily on the
/// first structure request.
pub trait StageFactory {
    /// Stage type this factory produces.
    type Stage: Stage;

    /// Build a new stage with the given options.
    fn create_stage(
        &mut self,
        options: &StageOptions,
    ) -> Result<Self::Stage, PlasviewError>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording fakes for the rendering-engine boundary.

    use glam::Vec3;

    use super::{
        BoundingBox, Representation, Stage, StageFactory, StageOptions,
        StructureComponent, LIGAND_SELECTOR,
    };
    use crate::error::PlasviewError;

    /// Component fake that records every call made against it.
    #[derive(Debug, Default)]
    pub(crate) struct MockComponent {
        pub(crate) representations: Vec<Representation>,
        pub(crate) auto_views: Vec<String>,
        pub(crate) ligand_atoms: usize,
        pub(crate) ligand_bounds: Option<BoundingBox>,
    }

    impl StructureComponent for MockComponent {
        fn add_representation(&mut self, representation: &Representation) {
            self.representations.push(representation.clone());
        }

        fn auto_view(&mut self, selector: &str) {
            self.auto_views.push(selector.to_owned());
        }

        fn atom_count(&self, selector: &str) -> usize {
            if selector == LIGAND_SELECTOR {
                self.ligand_atoms
            } else {
                0
            }
        }

        fn bounding_box(&self, selector: &str) -> Option<BoundingBox> {
            if selector == LIGAND_SELECTOR {
                self.ligand_bounds
            } else {
                None
            }
        }
    }

    /// Stage fake that records clears, loads, and camera commands.
    #[derive(Debug)]
    pub(crate) struct MockStage {
        pub(crate) background_color: String,
        pub(crate) clear_calls: usize,
        pub(crate) loaded: Vec<String>,
        pub(crate) depth: f32,
        pub(crate) zoomed_to: Vec<(Vec3, Vec3)>,
        pub(crate) render_requests: usize,
        pub(crate) ligand_atoms: usize,
        pub(crate) ligand_bounds: Option<BoundingBox>,
        pub(crate) reject_payloads: bool,
    }

    impl Default for MockStage {
        fn default() -> Self {
            Self {
                background_color: String::new(),
                clear_calls: 0,
                loaded: Vec::new(),
                depth: -100.0,
                zoomed_to: Vec::new(),
                render_requests: 0,
                ligand_atoms: 8,
                ligand_bounds: Some(BoundingBox {
                    center: Vec3::new(1.0, 2.0, 3.0),
                    size: Vec3::new(4.0, 5.0, 6.0),
                }),
                reject_payloads: false,
            }
        }
    }

    impl Stage for MockStage {
        type Component = MockComponent;

        fn load_structure(
            &mut self,
            name: &str,
            _payload: &str,
        ) -> Result<Self::Component, PlasviewError> {
            if self.reject_payloads {
                return Err(PlasviewError::StructureLoad(format!(
                    "mock rejected {name}"
                )));
            }
            self.loaded.push(name.to_owned());
            Ok(MockComponent {
                ligand_atoms: self.ligand_atoms,
                ligand_bounds: self.ligand_bounds,
                ..MockComponent::default()
            })
        }

        fn remove_all_components(&mut self) {
            self.clear_calls += 1;
        }

        fn zoom_to(&mut self, center: Vec3, size: Vec3) {
            self.zoomed_to.push((center, size));
        }

        fn camera_depth(&self) -> f32 {
            self.depth
        }

        fn set_camera_depth(&mut self, depth: f32) {
            self.depth = depth;
        }

        fn request_render(&mut self) {
            self.render_requests += 1;
        }
    }

    /// Factory fake counting how many stages it has built.
    #[derive(Debug, Default)]
    pub(crate) struct MockFactory {
        pub(crate) created: usize,
        pub(crate) ligand_atoms: Option<usize>,
        pub(crate) ligand_bounds: Option<Option<BoundingBox>>,
        pub(crate) reject_payloads: bool,
        pub(crate) fail_creation: bool,
    }

    impl StageFactory for MockFactory {
        type Stage = MockStage;

        fn create_stage(
            &mut self,
            options: &StageOptions,
        ) -> Result<Self::Stage, PlasviewError> {
            if self.fail_creation {
                return Err(PlasviewError::Stage(
                    "mock factory refused".to_owned(),
                ));
            }
            self.created += 1;
            let mut stage = MockStage {
                background_color: options.background_color.clone(),
                reject_payloads: self.reject_payloads,
                ..MockStage::default()
            };
            if let Some(atoms) = self.ligand_atoms {
                stage.ligand_atoms = atoms;
            }
            if let Some(bounds) = self.ligand_bounds {
                stage.ligand_bounds = bounds;
            }
            Ok(stage)
        }
    }
}
