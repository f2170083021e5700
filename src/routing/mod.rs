//! # Physical-Input Resolver
//!
//! Answers "what is plugged into this channel?" for a parsed scene.
//!
//! Channel sources are stored as a numeric id. On full-size consoles the
//! low ids go through `/config/routing/IN`, a list of labels such as
//! `AN1-8` or `A9-16` that each describe one block of eight inputs. Ids
//! above the routable ceiling name fixed internal sources (USB player, FX
//! returns, buses). Rack mixers skip all of this and use the plain index.
//!
//! All per-family differences come from a [`FamilyProfile`].

pub mod family;
pub mod user_input;

use crate::error::SceneError;
use crate::scene::SceneDocument;
use crate::{trace_fn, warn_fn};
use crate::utils::{pad_id, parse_number};

pub use family::{FamilyProfile, FamilyRegistry, GroupKind, GroupPrefix, VersionRule};
pub use user_input::decode_user_input;

pub const ROUTING_IN_PATH: &str = "config/routing/IN";
pub const USER_ROUTING_IN_PATH: &str = "config/userrout/in";

/// Number of channels in one routing block.
pub const GROUP_SIZE: u32 = 8;

/// Display value for a channel whose source is not present.
pub const OFF: &str = "Off";

/// Display value for a fixed-source id the profile does not name.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// One decoded routing label, e.g. `AN9-16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingGroup {
    pub kind: GroupKind,
    pub base: u32,
    /// Last channel of the range, when the label has one
    pub end: Option<u32>,
}

impl RoutingGroup {
    /// Decodes a routing label using the profile's prefix table.
    ///
    /// Unclassified labels are returned with `base` 0 and are never parsed,
    /// since the resolver falls back to the position within the group.
    pub fn parse(label: &str, profile: &FamilyProfile) -> Result<Self, SceneError> {
        let (kind, range) = profile.classify(label);
        if kind == GroupKind::Unclassified {
            return Ok(Self {
                kind,
                base: 0,
                end: None,
            });
        }

        let invalid = || SceneError::InvalidRange {
            label: label.to_string(),
        };
        let mut bounds = range.splitn(2, '-');
        let base = bounds
            .next()
            .and_then(|b| b.trim().parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let end = match bounds.next() {
            Some(e) => Some(e.trim().parse::<u32>().map_err(|_| invalid())?),
            None => None,
        };

        Ok(Self { kind, base, end })
    }

    /// Absolute channel within the group's source for a 1-based position,
    /// or `None` when the label's base pushes it past `u32::MAX`.
    pub fn relative(&self, position: u32) -> Option<u32> {
        self.base.checked_add(position - 1)
    }

    /// Aux blocks carry more channels than their label range, so they are
    /// never cut off.
    pub fn is_out_of_range(&self, relative: u32) -> bool {
        self.kind != GroupKind::Aux && self.end.map_or(false, |end| relative > end)
    }
}

/// Resolves channel source ids for one scene under one family profile.
pub struct Resolver<'a> {
    scene: &'a SceneDocument,
    profile: &'a FamilyProfile,
}

impl<'a> Resolver<'a> {
    pub fn new(scene: &'a SceneDocument, profile: &'a FamilyProfile) -> Self {
        Self { scene, profile }
    }

    /// Display string for a channel's source: empty for id 0, the bare
    /// index on direct-index families, otherwise `"NN: <name>"`.
    ///
    /// An id above the ceiling that the profile has no name for is shown as
    /// [`UNKNOWN_SOURCE`] so one odd channel does not sink a whole report.
    pub fn physical_input(&self, id: u32) -> Result<String, SceneError> {
        if id == 0 {
            return Ok(String::new());
        }
        if self.profile.is_direct_index() {
            return Ok(id.to_string());
        }
        let name = match self.physical_name(id) {
            Err(SceneError::UnknownSource { id, profile }) => {
                warn_fn!(
                    "physical_input",
                    "No source known for id {} in profile '{}'",
                    id,
                    profile
                );
                UNKNOWN_SOURCE.to_string()
            }
            other => other?,
        };
        Ok(format!("{}: {}", pad_id(id), name))
    }

    /// Name of the physical or internal source behind `id`.
    pub fn physical_name(&self, id: u32) -> Result<String, SceneError> {
        match self.profile.routable_ceiling {
            None => Ok(id.to_string()),
            Some(_) if id == 0 => Ok(String::new()),
            Some(ceiling) if id <= ceiling => self.routed_name(id),
            Some(_) => self
                .profile
                .fixed_sources
                .get(&id)
                .cloned()
                .ok_or_else(|| SceneError::UnknownSource {
                    id,
                    profile: self.profile.name.clone(),
                }),
        }
    }

    fn routed_name(&self, id: u32) -> Result<String, SceneError> {
        let group_index = ((id - 1) / GROUP_SIZE) as usize;
        let position = (id - 1) % GROUP_SIZE + 1;

        let label = self.scene.value_at(ROUTING_IN_PATH, group_index)?;
        let group = RoutingGroup::parse(label, self.profile)?;
        trace_fn!(
            "routed_name",
            "id {} -> group {} ({:?}), position {}",
            id,
            label,
            group.kind,
            position
        );

        if group.kind == GroupKind::Unclassified {
            return Ok(position.to_string());
        }

        let relative = group
            .relative(position)
            .ok_or_else(|| SceneError::InvalidRange {
                label: label.to_string(),
            })?;
        if group.is_out_of_range(relative) {
            return Ok(OFF.to_string());
        }

        let name = match group.kind {
            GroupKind::UserIn if self.profile.user_routing => self.user_input_name(relative)?,
            kind => format!("{} {}", kind, relative),
        };
        Ok(name)
    }

    fn user_input_name(&self, relative: u32) -> Result<String, SceneError> {
        let index = relative.checked_sub(1).ok_or_else(|| {
            SceneError::MissingField(format!("{}[-1]", USER_ROUTING_IN_PATH))
        })? as usize;
        let raw = self.scene.value_at(USER_ROUTING_IN_PATH, index)?;
        let code = parse_number(USER_ROUTING_IN_PATH, raw)?;
        Ok(decode_user_input(code))
    }
}
