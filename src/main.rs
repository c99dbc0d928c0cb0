use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Instant;
use verlet_rope::render::DebugLines;
use verlet_rope::{ObstacleWorld, RopeConfig, RopeResult, RopeSimulation, Transform};

const DT: f32 = 1.0 / 60.0;
const TICKS: u32 = 600;

fn load_config() -> RopeResult<RopeConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading rope config from {path}");
            let json = std::fs::read_to_string(&path)?;
            RopeConfig::from_json_str(&json)
        }
        None => Ok(RopeConfig::new(3.0, 10)
            .with_iterations(30)
            .with_substeps(4)),
    }
}

fn build_world() -> ObstacleWorld {
    let mut world = ObstacleWorld::new();
    world.add_ground(-2.5);
    world.add_sphere(Vec3::new(0.6, -1.5, 0.0), 0.4);
    world.add_box(Vec3::new(-0.8, -2.0, 0.0), Vec3::new(0.3, 0.2, 0.3));
    world
}

fn run() -> RopeResult<()> {
    let config = load_config()?;
    let world = build_world();

    // The rope hangs from the tip of a boom that swings back and forth
    // around Y.
    let tip = Vec3::new(0.8, 0.0, 0.0);
    let rest = Transform::from_position(Vec3::new(0.0, 0.5, 0.0));
    let swung = Transform::from_position_rotation(rest.position, Quat::from_rotation_y(FRAC_PI_2));

    let mut rope = RopeSimulation::new(config, rest.transform_point(tip))?;
    let started = Instant::now();

    for tick in 0..TICKS {
        let phase = (tick as f32 / TICKS as f32 * TAU).sin() * 0.5 + 0.5;
        let anchor = rest.lerp(&swung, phase).transform_point(tip);
        rope.tick(DT, &anchor, &world);

        if tick % 60 == 0 {
            let clearance = rope
                .nodes()
                .iter()
                .filter_map(|n| world.min_clearance(n.position))
                .fold(f32::INFINITY, f32::min);
            let tip_position = rope.nodes().last().map(|n| n.position).unwrap_or(anchor);
            log::info!(
                "tick {tick}: tip {tip_position}, min clearance {clearance:.4}, {} sweep contacts",
                rope.contact_nodes().count()
            );
        }
    }

    let elapsed = started.elapsed();
    let mesh = rope.mesh();
    let debug = DebugLines::from_rope(
        rope.nodes(),
        rope.solver().contact_flags(),
        rope.config().radius,
        rope.anchor(),
    );
    if let Some((min, max)) = mesh.bounds() {
        log::info!("mesh bounds {min} .. {max}");
    }
    log::info!(
        "{TICKS} ticks in {elapsed:?}: {} vertices, {} triangles, {} debug lines, max stretch {:.5}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        debug.line_count(),
        rope.solver().max_segment_error(rope.config().rest_distance())
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("rope demo failed: {e}");
        std::process::exit(1);
    }
}
