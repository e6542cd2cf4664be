use scenic_entities_core::{Curve, EntityCore, Scene, Spatial, TextureBased};
use scenic_replay_core::{Playhead, Timeline};
use serde_json::to_string_pretty;

fn main() -> anyhow::Result<()> {
    // Simulate three turns of a ball dropping, flashing green on the bounce.
    let mut scene = Scene::new();
    let ball = scene.create_sprite().id();

    let mut batches = Vec::new();

    let sprite = scene.sprite_mut(ball).expect("ball exists");
    sprite.set_x(50.0).set_y(0.0).set_anchor(0.5);
    batches.push(scene.commit_frame(1));

    let sprite = scene.sprite_mut(ball).expect("ball exists");
    sprite.set_y_with(100.0, Some(Curve::Ease));
    batches.push(scene.commit_frame(2));

    let sprite = scene.sprite_mut(ball).expect("ball exists");
    sprite.set_y_with(60.0, Some(Curve::Elastic));
    sprite.set_tint_with(0x00FF00, Some(Curve::Bell))?;
    batches.push(scene.commit_frame(3));

    let json = to_string_pretty(&batches)?;
    println!("Emitted stream:\n{json}\n");

    // Viewer side: load the stream back and sample each frame window.
    let timeline = Timeline::from_json(&json)?;
    let mut playhead = Playhead::new(&timeline);
    while let Some(frame) = playhead.begin_frame() {
        for progress in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let samples = playhead.sample(progress);
            println!("frame {frame} @ {progress:.2}: {samples:?}");
        }
        playhead.end_frame();
    }

    Ok(())
}
