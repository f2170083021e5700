//! scenesheet library
//!
//! Parses mixing console scene files into a path tree, resolves which
//! physical input feeds each channel, and builds printable report tables.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod routing;
pub mod scene;
pub mod utils;

// Re-export commonly used items for easier imports
pub use config::{Config, CONFIG};
pub use error::{ConfigError, SceneError};
pub use report::{build_report, Cell, ReportTable, SceneReport};
pub use routing::{FamilyProfile, FamilyRegistry, Resolver};
pub use scene::{SceneDocument, TreeNode};

/// Parses a scene and builds its report using the profile its version tag maps to.
pub fn report_for(content: &str, registry: &FamilyRegistry) -> Result<SceneReport, SceneError> {
    let scene = SceneDocument::parse(content);
    let profile = registry.for_version(&scene.version)?;
    build_report(&scene, profile)
}
