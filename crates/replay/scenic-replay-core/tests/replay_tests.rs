use approx::assert_relative_eq;

use scenic_entities_core::{Curve, EntityCore, Scene, Spatial, TextureBased};
use scenic_replay_core::{Playhead, PropertyValue, Timeline};

fn float(v: PropertyValue) -> f64 {
    match v {
        PropertyValue::Float(f) => f,
        other => panic!("expected float, got {other:?}"),
    }
}

fn sample_for(samples: &[scenic_replay_core::PropertySample], property: &str) -> PropertyValue {
    samples
        .iter()
        .filter(|s| s.property == property)
        .last()
        .unwrap_or_else(|| panic!("no sample for {property}"))
        .value
}

/// it should replay a serialized stream end to end with eased tweens
#[test]
fn end_to_end_replay() {
    let mut scene = Scene::new();
    let id = scene.create_sprite().id();

    // Frame 1 places the sprite (first appearance snaps), frame 2 tweens it.
    scene.sprite_mut(id).unwrap().set_x(0.0);
    let f1 = scene.commit_frame(1);
    scene
        .sprite_mut(id)
        .unwrap()
        .set_x_with(10.0, Some(Curve::Ease));
    let f2 = scene.commit_frame(2);

    let json = serde_json::to_string(&vec![f1, f2]).unwrap();
    let timeline = Timeline::from_json(&json).unwrap();
    let mut playhead = Playhead::new(&timeline);

    assert_eq!(playhead.begin_frame(), Some(1));
    assert_eq!(
        sample_for(&playhead.sample(0.0), "x"),
        PropertyValue::Float(0.0)
    );
    playhead.end_frame();

    assert_eq!(playhead.begin_frame(), Some(2));
    let mid = float(sample_for(&playhead.sample(0.5), "x"));
    assert_relative_eq!(mid, 5.0); // ease(0.5) = 0.5
    let quarter = float(sample_for(&playhead.sample(0.25), "x"));
    assert_relative_eq!(quarter, 10.0 * Curve::Ease.eval(0.25));
    playhead.end_frame();

    assert_eq!(playhead.begin_frame(), None);
    assert_eq!(playhead.value(id, "x"), Some(PropertyValue::Float(10.0)));
}

/// it should snap no-curve changes at the frame boundary
#[test]
fn no_curve_is_instantaneous() {
    let mut scene = Scene::new();
    let id = scene.create_sprite().id();
    scene.sprite_mut(id).unwrap().set_y(1.0);
    let f1 = scene.commit_frame(1);
    scene.sprite_mut(id).unwrap().set_y(9.0); // no curve
    let f2 = scene.commit_frame(2);

    let timeline = Timeline::from_batches([f1, f2]).unwrap();
    let mut playhead = Playhead::new(&timeline);
    playhead.begin_frame();
    playhead.end_frame();
    playhead.begin_frame();
    // Even at progress 0 the new value is in force.
    assert_eq!(
        sample_for(&playhead.sample(0.0), "y"),
        PropertyValue::Float(9.0)
    );
}

/// it should tween colors per channel under elastic without leaving RGB range
#[test]
fn elastic_tint_replay() {
    let mut scene = Scene::new();
    let id = scene.create_sprite().id();
    scene.sprite_mut(id).unwrap().set_tint(0x000000).unwrap();
    let f1 = scene.commit_frame(1);
    scene
        .sprite_mut(id)
        .unwrap()
        .set_tint_with(0x00FF00, Some(Curve::Elastic))
        .unwrap();
    let f2 = scene.commit_frame(2);

    let timeline = Timeline::from_batches([f1, f2]).unwrap();
    let mut playhead = Playhead::new(&timeline);
    playhead.begin_frame();
    playhead.end_frame();
    playhead.begin_frame();

    for progress in [0.1, 0.3, 0.45, 0.8] {
        match sample_for(&playhead.sample(progress), "tint") {
            PropertyValue::Color(c) => {
                assert!(c <= 0xFFFFFF);
                // Only the green channel moves.
                assert_eq!(c & 0xFF00FF, 0);
            }
            other => panic!("expected color, got {other:?}"),
        }
    }
    assert_eq!(
        sample_for(&playhead.sample(1.0), "tint"),
        PropertyValue::Color(0x00FF00)
    );
}

/// it should hold curved booleans until the frame completes
#[test]
fn curved_bool_holds_then_steps() {
    let mut scene = Scene::new();
    let id = scene.create_sprite().id();
    scene.sprite_mut(id).unwrap().set_visible(true);
    let f1 = scene.commit_frame(1);
    scene
        .sprite_mut(id)
        .unwrap()
        .props_mut()
        .set("visible", PropertyValue::Bool(false), Some(Curve::Ease))
        .unwrap();
    let f2 = scene.commit_frame(2);

    let timeline = Timeline::from_batches([f1, f2]).unwrap();
    let mut playhead = Playhead::new(&timeline);
    playhead.begin_frame();
    playhead.end_frame();
    playhead.begin_frame();
    assert_eq!(
        sample_for(&playhead.sample(0.5), "visible"),
        PropertyValue::Bool(true)
    );
    assert_eq!(
        sample_for(&playhead.sample(1.0), "visible"),
        PropertyValue::Bool(false)
    );
}

/// it should chain duplicate commands within a frame in call order
#[test]
fn duplicate_commands_chain_within_frame() {
    let mut scene = Scene::new();
    let id = scene.create_sprite().id();
    scene.sprite_mut(id).unwrap().set_x(0.0);
    let f1 = scene.commit_frame(1);
    {
        let sprite = scene.sprite_mut(id).unwrap();
        sprite.set_x_with(4.0, Some(Curve::Linear));
        sprite.set_x_with(8.0, Some(Curve::Linear));
    }
    let f2 = scene.commit_frame(2);
    assert_eq!(f2.len(), 2);

    let timeline = Timeline::from_batches([f1, f2]).unwrap();
    let mut playhead = Playhead::new(&timeline);
    playhead.begin_frame();
    playhead.end_frame();
    playhead.begin_frame();

    let samples = playhead.sample(0.5);
    let xs: Vec<f64> = samples
        .iter()
        .filter(|s| s.property == "x")
        .map(|s| float(s.value))
        .collect();
    // First command tweens 0 -> 4, second chains 4 -> 8; the later sample
    // supersedes at apply time.
    assert_relative_eq!(xs[0], 2.0);
    assert_relative_eq!(xs[1], 6.0);

    playhead.end_frame();
    assert_eq!(playhead.value(id, "x"), Some(PropertyValue::Float(8.0)));
}

/// it should treat a hold (same value, with curve) as a real transition
#[test]
fn hold_animation_replays() {
    let mut scene = Scene::new();
    let id = scene.create_sprite().id();
    scene.sprite_mut(id).unwrap().set_rotation(1.0);
    let f1 = scene.commit_frame(1);
    // Same value re-set with a curve: still emitted, still a transition.
    scene
        .sprite_mut(id)
        .unwrap()
        .set_rotation_with(1.0, Some(Curve::Bell));
    let f2 = scene.commit_frame(2);
    assert_eq!(f2.len(), 1);

    let timeline = Timeline::from_batches([f1, f2]).unwrap();
    let mut playhead = Playhead::new(&timeline);
    playhead.begin_frame();
    playhead.end_frame();
    playhead.begin_frame();
    // From 1.0 toward 1.0 the tween is flat, but the frame carries it.
    assert_eq!(
        sample_for(&playhead.sample(0.5), "rotation"),
        PropertyValue::Float(1.0)
    );
}

/// it should track remaining frames and expose baseline lookups
#[test]
fn remaining_and_baseline_lookup() {
    let mut scene = Scene::new();
    let id = scene.create_circle().id();
    scene.circle_mut(id).unwrap().set_radius(30.0);
    let f1 = scene.commit_frame(1);

    let timeline = Timeline::from_batches([f1]).unwrap();
    let mut playhead = Playhead::new(&timeline);
    assert_eq!(playhead.remaining(), 1);
    assert_eq!(playhead.value(id, "radius"), None);

    playhead.begin_frame();
    playhead.end_frame();
    assert_eq!(playhead.remaining(), 0);
    assert_eq!(
        playhead.value(id, "radius"),
        Some(PropertyValue::Float(30.0))
    );
}
