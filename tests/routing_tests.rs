//! Physical-input resolution against complete scenes

mod common;
use common::{setup, SceneBuilder};

use scenesheet::routing::family::{PROFILE_X32, PROFILE_X32_LEGACY, PROFILE_XAIR};
use scenesheet::routing::{decode_user_input, FamilyProfile, FamilyRegistry, Resolver};
use scenesheet::{SceneDocument, SceneError};

fn x32_scene(builder: SceneBuilder) -> SceneDocument {
    SceneDocument::parse(&builder.build())
}

#[test]
fn test_unassigned_for_every_family() {
    setup("debug");
    let registry = FamilyRegistry::default();
    let scene = x32_scene(SceneBuilder::x32());
    for name in [PROFILE_X32, PROFILE_X32_LEGACY, PROFILE_XAIR] {
        let profile = registry.profile(name).unwrap();
        assert_eq!(Resolver::new(&scene, profile).physical_input(0).unwrap(), "");
    }
}

#[test]
fn test_local_group_channel_three() {
    let scene = x32_scene(SceneBuilder::x32());
    let profile = FamilyProfile::x32();
    let resolver = Resolver::new(&scene, &profile);
    assert_eq!(resolver.physical_name(3).unwrap(), "Local 3");
    assert_eq!(resolver.physical_input(3).unwrap(), "03: Local 3");
}

#[test]
fn test_short_local_range_turns_off() {
    let scene = x32_scene(SceneBuilder::x32().with_routing("AN3-8 AN9-16 AN17-24 AN25-32 AUX1-4"));
    let profile = FamilyProfile::x32();
    let resolver = Resolver::new(&scene, &profile);
    assert_eq!(resolver.physical_name(6).unwrap(), "Local 8");
    assert_eq!(resolver.physical_name(7).unwrap(), "Off");
    assert_eq!(resolver.physical_name(8).unwrap(), "Off");
}

#[test]
fn test_aux_group_is_not_bounded() {
    let scene = x32_scene(SceneBuilder::x32());
    let profile = FamilyProfile::x32();
    let resolver = Resolver::new(&scene, &profile);
    assert_eq!(resolver.physical_name(37).unwrap(), "Aux In 5");
    assert_eq!(resolver.physical_name(38).unwrap(), "Aux In 6");
    assert_eq!(resolver.physical_name(39).unwrap(), "USB-Player L");
}

#[test]
fn test_user_routing_codes() {
    let scene = x32_scene(
        SceneBuilder::x32()
            .with_routing("UIN1-8 UIN9-16 AN17-24 AN25-32 AUX1-4")
            .with_user_routing(&[5, 0, 40, 100, 130, 161, 167, 168, 9]),
    );
    let profile = FamilyProfile::x32();
    let resolver = Resolver::new(&scene, &profile);
    let names: Vec<String> = (1..=9).map(|id| resolver.physical_name(id).unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "Local 5",
            "Off",
            "AES50-A 8",
            "AES50-B 20",
            "Card In 2",
            "Aux In 1",
            "Talkback Int",
            "Talkback Ext",
            "Local 9",
        ]
    );
    // the code table only has nine entries
    assert!(matches!(
        resolver.physical_name(10),
        Err(SceneError::MissingField(_))
    ));
}

#[test]
fn test_user_input_decode_properties() {
    assert_eq!(decode_user_input(5), "Local 5");
    assert_eq!(decode_user_input(0), "Off");
    assert_eq!(decode_user_input(167), "Talkback Int");
}

#[test]
fn test_legacy_family_ceiling() {
    let scene = x32_scene(SceneBuilder::x32().with_header("#2.1# \"Old\" \"\" %000000000 1"));
    let registry = FamilyRegistry::default();
    let profile = registry.for_version(&scene.version).unwrap();
    assert_eq!(profile.name, PROFILE_X32_LEGACY);

    let resolver = Resolver::new(&scene, profile);
    assert_eq!(resolver.physical_name(36).unwrap(), "Aux In 4");
    assert_eq!(resolver.physical_name(37).unwrap(), "USB-Player L");
    assert_eq!(resolver.physical_name(61).unwrap(), "BUS 15");
    assert!(matches!(
        resolver.physical_name(62),
        Err(SceneError::UnknownSource { id: 62, .. })
    ));
}

#[test]
fn test_direct_index_family_skips_routing() {
    let scene = x32_scene(SceneBuilder::xair());
    let registry = FamilyRegistry::default();
    let profile = registry.for_version(&scene.version).unwrap();
    let resolver = Resolver::new(&scene, profile);
    assert_eq!(resolver.physical_input(12).unwrap(), "12");
    assert_eq!(resolver.physical_input(0).unwrap(), "");
}

#[test]
fn test_malformed_range_fails_single_lookup() {
    let scene = x32_scene(SceneBuilder::x32().with_routing("AN1-8 ANx-16 AN17-24 AN25-32 AUX1-4"));
    let profile = FamilyProfile::x32();
    let resolver = Resolver::new(&scene, &profile);
    assert_eq!(resolver.physical_name(1).unwrap(), "Local 1");
    assert!(matches!(
        resolver.physical_name(9),
        Err(SceneError::InvalidRange { .. })
    ));
    assert_eq!(resolver.physical_name(17).unwrap(), "Local 17");
}

#[test]
fn test_unknown_prefix_uses_position() {
    let scene = x32_scene(SceneBuilder::x32().with_routing("AN1-8 USB1-8 AN17-24 AN25-32 AUX1-4"));
    let profile = FamilyProfile::x32();
    let resolver = Resolver::new(&scene, &profile);
    assert_eq!(resolver.physical_name(11).unwrap(), "3");
}
