//! Hardware family profiles.
//!
//! The consoles that write scene files come in several generations which
//! encode input routing differently. Everything that differs between them
//! lives in a [`FamilyProfile`]; the resolver itself has no per-family
//! branches. Profiles are looked up by the scene's version tag through a
//! [`FamilyRegistry`], which the configuration file can extend or override.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::SceneError;
use crate::scene::HEADERLESS_VERSION;

pub const PROFILE_X32: &str = "x32";
pub const PROFILE_X32_LEGACY: &str = "x32-legacy";
pub const PROFILE_XAIR: &str = "xair";

/// Type of an 8-channel input block, derived from its routing label prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    #[serde(rename = "aes50-a")]
    Aes50A,
    #[serde(rename = "aes50-b")]
    Aes50B,
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "aux")]
    Aux,
    #[serde(rename = "user-in")]
    UserIn,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "unclassified")]
    Unclassified,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupKind::Aes50A => "AES50-A",
            GroupKind::Aes50B => "AES50-B",
            GroupKind::Local => "Local",
            GroupKind::Aux => "Aux In",
            GroupKind::UserIn => "User In",
            GroupKind::Card => "Card In",
            GroupKind::Unclassified => "Unclassified",
        };
        write!(f, "{}", name)
    }
}

/// Maps a routing label prefix such as `"AN"` to a group kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPrefix {
    pub prefix: String,
    pub kind: GroupKind,
}

impl GroupPrefix {
    pub fn new(prefix: &str, kind: GroupKind) -> Self {
        Self {
            prefix: prefix.to_string(),
            kind,
        }
    }
}

/// A fixed (non-routable) source id and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSource {
    pub id: u32,
    pub name: String,
}

/// Everything the resolver and report need to know about one console family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyProfile {
    pub name: String,
    /// Highest id resolved through the routing groups. `None` means ids are
    /// shown as the bare input index with no symbolic lookup.
    pub routable_ceiling: Option<u32>,
    /// Checked in order, so longer prefixes must come before their own prefixes
    pub group_prefixes: Vec<GroupPrefix>,
    /// Names for ids above the routable ceiling
    pub fixed_sources: BTreeMap<u32, String>,
    /// Whether `UIN` groups go through the user-input routing table
    pub user_routing: bool,
    /// Long names for FX device short codes. Entries marked "(?)" are unconfirmed.
    pub fx_names: BTreeMap<String, String>,
    /// Small-format layout: unpadded bus keys, two-field inserts, single main
    pub compact_layout: bool,
}

impl FamilyProfile {
    /// Full-size console with 38 routable ids and 16 buses.
    pub fn x32() -> Self {
        let mut fixed_sources = BTreeMap::new();
        fixed_sources.insert(39, "USB-Player L".to_string());
        fixed_sources.insert(40, "USB-Player R".to_string());
        fixed_sources.extend(fx_return_sources(41));
        fixed_sources.extend(bus_sources(49, 16));

        Self {
            name: PROFILE_X32.to_string(),
            routable_ceiling: Some(38),
            group_prefixes: default_group_prefixes(),
            fixed_sources,
            user_routing: true,
            fx_names: default_fx_names(),
            compact_layout: false,
        }
    }

    /// Early firmware: 36 routable ids and 15 buses.
    pub fn x32_legacy() -> Self {
        let mut fixed_sources = BTreeMap::new();
        fixed_sources.insert(37, "USB-Player L".to_string());
        fixed_sources.insert(38, "USB-Player R".to_string());
        fixed_sources.extend(fx_return_sources(39));
        fixed_sources.extend(bus_sources(47, 15));

        Self {
            name: PROFILE_X32_LEGACY.to_string(),
            routable_ceiling: Some(36),
            group_prefixes: default_group_prefixes(),
            fixed_sources,
            user_routing: true,
            fx_names: default_fx_names(),
            compact_layout: false,
        }
    }

    /// Rack mixers: inputs are referenced by their plain index.
    pub fn xair() -> Self {
        Self {
            name: PROFILE_XAIR.to_string(),
            routable_ceiling: None,
            group_prefixes: Vec::new(),
            fixed_sources: BTreeMap::new(),
            user_routing: false,
            fx_names: default_fx_names(),
            compact_layout: true,
        }
    }

    pub fn is_direct_index(&self) -> bool {
        self.routable_ceiling.is_none()
    }

    /// Finds the group kind for a routing label, returning the kind and the
    /// label with the prefix removed.
    pub fn classify<'a>(&self, label: &'a str) -> (GroupKind, &'a str) {
        self.group_prefixes
            .iter()
            .find_map(|p| label.strip_prefix(p.prefix.as_str()).map(|rest| (p.kind, rest)))
            .unwrap_or((GroupKind::Unclassified, label))
    }

    pub fn fx_name(&self, short: &str) -> Option<&str> {
        self.fx_names.get(short).map(String::as_str)
    }
}

fn default_group_prefixes() -> Vec<GroupPrefix> {
    vec![
        GroupPrefix::new("CARD", GroupKind::Card),
        GroupPrefix::new("AUX", GroupKind::Aux),
        GroupPrefix::new("UIN", GroupKind::UserIn),
        GroupPrefix::new("AN", GroupKind::Local),
        GroupPrefix::new("A", GroupKind::Aes50A),
        GroupPrefix::new("B", GroupKind::Aes50B),
    ]
}

fn default_fx_names() -> BTreeMap<String, String> {
    [
        ("RPLT", "Platereverb"),
        ("DLY", "Delay"),
        ("CMB", "Combinator"),
        ("FAC", "FAC (?)"),
        ("EXC", "Exciter"),
        ("WAVD", "Wavedesigner"),
        ("P1A", "P1A (?)"),
        ("HALL", "Hallreverb"),
        ("GEQ", "GraphicEq"),
    ]
    .into_iter()
    .map(|(short, long)| (short.to_string(), long.to_string()))
    .collect()
}

/// FX 1L, FX 1R ... FX 4R starting at `first`.
fn fx_return_sources(first: u32) -> impl Iterator<Item = (u32, String)> {
    (0..8).map(move |i| {
        let side = if i % 2 == 0 { 'L' } else { 'R' };
        (first + i, format!("FX {}{}", i / 2 + 1, side))
    })
}

/// BUS 01 ... BUS nn starting at `first`.
fn bus_sources(first: u32, count: u32) -> impl Iterator<Item = (u32, String)> {
    (0..count).map(move |i| (first + i, format!("BUS {:02}", i + 1)))
}

/// Maps version tags starting with `prefix` to a profile name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRule {
    pub prefix: String,
    pub profile: String,
}

impl VersionRule {
    pub fn new(prefix: &str, profile: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            profile: profile.to_string(),
        }
    }
}

/// Named profiles plus the ordered rules that pick one for a version tag.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyRegistry {
    profiles: BTreeMap<String, FamilyProfile>,
    rules: Vec<VersionRule>,
    fallback: String,
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        let profiles = [
            FamilyProfile::x32(),
            FamilyProfile::x32_legacy(),
            FamilyProfile::xair(),
        ]
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect();

        Self {
            profiles,
            rules: vec![
                VersionRule::new(HEADERLESS_VERSION, PROFILE_XAIR),
                VersionRule::new("#1.", PROFILE_X32_LEGACY),
                VersionRule::new("#2.", PROFILE_X32_LEGACY),
            ],
            fallback: PROFILE_X32.to_string(),
        }
    }
}

impl FamilyRegistry {
    pub fn profile(&self, name: &str) -> Result<&FamilyProfile, SceneError> {
        self.profiles
            .get(name)
            .ok_or_else(|| SceneError::UnknownProfile(name.to_string()))
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Adds or replaces a profile.
    pub fn insert_profile(&mut self, profile: FamilyProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Adds a version rule ahead of the existing ones.
    pub fn prepend_rule(&mut self, rule: VersionRule) {
        self.rules.insert(0, rule);
    }

    pub fn rules(&self) -> &[VersionRule] {
        &self.rules
    }

    /// Picks the profile for a scene's version tag. The first matching rule
    /// wins; unmatched tags use the full-size profile.
    pub fn for_version(&self, version: &str) -> Result<&FamilyProfile, SceneError> {
        let name = self
            .rules
            .iter()
            .find(|rule| version.starts_with(rule.prefix.as_str()))
            .map_or(self.fallback.as_str(), |rule| rule.profile.as_str());
        self.profile(name)
    }
}
