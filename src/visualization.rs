//! 3D visualization of a fold using kiss3d.

use kiss3d::prelude::*;

use snakecube::Fold;

/// Color of segment `index`, shading from red at the start to blue at the end.
fn segment_color(index: usize, count: usize) -> Color {
    let t = index as f32 / (count.max(2) - 1) as f32;
    let middle = 1.0 - (2.0 * t - 1.0).abs();
    Color::new(1.0 - 0.8 * t, 0.3 + 0.4 * middle, 0.2 + 0.8 * t, 1.0)
}

/// A rendered segment in the 3D scene.
struct RenderedCube {
    node: SceneNode3d,
    /// Position when not exploded.
    base_position: Vec3,
}

/// Adds one cube for each of the first `shown` segments.
///
/// Solver coordinates map x->X, y->Y, z->Z, centered on the origin.
fn build_scene(scene: &mut SceneNode3d, fold: &Fold, shown: usize) -> Vec<RenderedCube> {
    /// Size of each rendered cube (slightly smaller than 1.0 for visible gaps).
    const CUBE_SIZE: f32 = 0.9;
    /// Offset to center the grid around the origin.
    const CENTER_OFFSET: f32 = -1.0;

    let count = fold.path().len();
    fold.path()
        .iter()
        .take(shown)
        .enumerate()
        .map(|(index, &(x, y, z))| {
            let base_position = Vec3::new(
                x as f32 + CENTER_OFFSET,
                y as f32 + CENTER_OFFSET,
                z as f32 + CENTER_OFFSET,
            );
            let node = scene
                .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                .set_color(segment_color(index, count))
                .set_position(base_position);
            RenderedCube {
                node,
                base_position,
            }
        })
        .collect()
}

/// Opens an interactive viewer that plays the fold back segment by segment.
pub fn display(fold: Fold) {
    pollster::block_on(display_async(fold));
}

async fn display_async(fold: Fold) {
    let count = fold.path().len();
    let title = |shown: usize| {
        format!(
            "Segment {}/{} - [Left/Right] fold, [Up/Down] explode, [R] reset",
            shown, count
        )
    };

    let mut shown = count;
    let mut window = Window::new(&title(shown)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(8.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let mut rendered_cubes = build_scene(&mut scene, &fold, shown);

    let mut explosion_amount: f32 = 0.0;
    const EXPLOSION_SPEED: f32 = 0.05;

    loop {
        let mut changed = false;
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Up => explosion_amount += EXPLOSION_SPEED,
                        Key::Down => {
                            explosion_amount = (explosion_amount - EXPLOSION_SPEED).max(0.0)
                        }
                        Key::R => {
                            explosion_amount = 0.0;
                            shown = count;
                            changed = true;
                        }
                        Key::Right => {
                            shown = (shown + 1).min(count);
                            changed = true;
                        }
                        Key::Left => {
                            shown = shown.saturating_sub(1).max(1);
                            changed = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if changed {
            for mut cube in rendered_cubes.drain(..) {
                cube.node.remove();
            }
            rendered_cubes = build_scene(&mut scene, &fold, shown);
            window.set_title(&title(shown));
        }

        // push every cube away from the grid center
        for cube in &mut rendered_cubes {
            let explosion_direction = cube.base_position.normalize_or_zero();
            cube.node
                .set_position(cube.base_position + explosion_direction * explosion_amount * 2.0);
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
