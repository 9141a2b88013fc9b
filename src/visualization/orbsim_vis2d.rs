use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::rocket::Direction;
use crate::simulation::states::{BodyId, NVec2};
use crate::simulation::world::{format_elapsed, World as SimWorld};

/// Inspect picks the closest body whose edge is within this many pixels
const INFO_DISTANCE: f64 = 50.0;
/// Clicks left of this x are reserved for the host's speed control
const LAUNCH_MARGIN: f32 = 40.0;
/// Pixels of smooth scrolling counted as one wheel tick
const PIXELS_PER_TICK: f32 = 40.0;

const BG_COLOR: (u8, u8, u8) = (0, 3, 10);
const LAUNCH_COLOR: (u8, u8, u8) = (200, 200, 200);

const THRUST_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::ArrowUp, Direction::Up),
    (KeyCode::ArrowDown, Direction::Down),
    (KeyCode::ArrowLeft, Direction::Left),
    (KeyCode::ArrowRight, Direction::Right),
];

#[derive(Resource)]
struct Sim(SimWorld);

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
enum PointerMode {
    Launch,
    #[default]
    Inspect,
}

#[derive(Resource, Default)]
struct Pointer {
    mode: PointerMode,
    launch_from: Option<Vec2>,
    last_cursor: Option<Vec2>,
    inspected: Option<BodyId>,
}

pub fn run_2d(world: SimWorld) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", world.bodies().len());

    let resolution = (world.viewport.width as f32, world.viewport.height as f32);
    App::new()
        .insert_resource(Sim(world))
        .init_resource::<Pointer>()
        .insert_resource(ClearColor(Color::srgb_u8(BG_COLOR.0, BG_COLOR.1, BG_COLOR.2)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "orbsim".into(),
                resolution: resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, (keyboard_system, pointer_system, physics_step_system, draw_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Sim>,
    mut pointer: ResMut<Pointer>,
    mut exit: EventWriter<AppExit>,
) {
    let world = &mut sim.0;

    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
    if keys.just_pressed(KeyCode::Space) {
        world.engine.toggle_pause();
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        world.engine.speed_up();
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        world.engine.speed_down();
    }
    if keys.just_pressed(KeyCode::KeyS) {
        world.reset_pan();
    }
    if keys.just_pressed(KeyCode::KeyL) {
        pointer.mode = PointerMode::Launch;
    }
    if keys.just_pressed(KeyCode::KeyI) {
        pointer.mode = PointerMode::Inspect;
        pointer.launch_from = None;
    }

    let Some(rocket) = world.first_rocket() else {
        return;
    };

    if keys.any_just_pressed([KeyCode::Enter, KeyCode::Tab]) {
        match world.advance_stage(rocket) {
            Ok(true) => {}
            Ok(false) => info!("already on the last stage"),
            Err(e) => warn!("{e}"),
        }
    }

    let held: Vec<Direction> = THRUST_KEYS
        .iter()
        .filter(|(key, _)| keys.pressed(*key))
        .map(|(_, dir)| *dir)
        .collect();
    if let Err(e) = world.apply_thrust(rocket, &held) {
        warn!("{e}");
    }
}

fn pointer_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sim: ResMut<Sim>,
    mut pointer: ResMut<Pointer>,
) {
    let world = &mut sim.0;

    // scrolling up zooms in, which lowers the scaling
    for ev in wheel.read() {
        let ticks = match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_TICK,
        };
        world.zoom(-ticks as f64);
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        pointer.last_cursor = None;
        return;
    };

    if buttons.pressed(MouseButton::Right) {
        if let Some(last) = pointer.last_cursor {
            let delta = cursor - last;
            if delta != Vec2::ZERO {
                world.pan(to_nvec(delta));
            }
        }
    }
    pointer.last_cursor = Some(cursor);

    let mode = pointer.mode;
    match mode {
        PointerMode::Launch => {
            if buttons.just_pressed(MouseButton::Left) && cursor.x > LAUNCH_MARGIN {
                pointer.launch_from = Some(cursor);
            }
            if buttons.just_released(MouseButton::Left) {
                if let Some(from) = pointer.launch_from.take() {
                    match world.launch(to_nvec(from), to_nvec(cursor)) {
                        Ok(id) => info!("launched body {id}"),
                        Err(e) => warn!("launch rejected: {e}"),
                    }
                }
            }
        }
        PointerMode::Inspect => {
            if buttons.just_pressed(MouseButton::Left) {
                if let Some(id) = world.nearest_body_within_radius(to_nvec(cursor), INFO_DISTANCE, true) {
                    pointer.inspected = Some(id);
                    report_inspected(world, id);
                }
            }
        }
    }
}

fn report_inspected(world: &SimWorld, id: BodyId) {
    let (Some(rocket), Some(target)) = (world.first_rocket(), world.body(id)) else {
        return;
    };
    let (Some(r), Some(dist)) = (world.body(rocket), world.surface_distance(rocket, id)) else {
        return;
    };
    info!(
        "[{}] distance from {} to {}: {:.1}km",
        format_elapsed(world.elapsed()),
        r.display_name(),
        target.display_name(),
        dist / 1000.0
    );
}

fn physics_step_system(time: Res<Time>, mut sim: ResMut<Sim>) {
    sim.0.frame(time.delta_seconds_f64());
}

fn draw_system(
    mut gizmos: Gizmos,
    sim: Res<Sim>,
    pointer: Res<Pointer>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let half = Vec2::new(window.width(), window.height()) / 2.0;
    // screen pixels are y-down from the top-left, the 2D camera is y-up from the center
    let to_world = |p: Vec2| Vec2::new(p.x - half.x, half.y - p.y);

    for snap in sim.0.snapshots() {
        let color = Color::srgb_u8(snap.color[0], snap.color[1], snap.color[2]);
        if snap.trail_points.len() >= 2 {
            gizmos.linestrip_2d(snap.trail_points.iter().map(|p| to_world(to_vec2(*p))), color);
        }
        gizmos.circle_2d(to_world(to_vec2(snap.screen_position)), snap.screen_radius as f32, color);
        if pointer.inspected == Some(snap.id) {
            gizmos.circle_2d(to_world(to_vec2(snap.screen_position)), snap.screen_radius as f32 + 4.0, Color::WHITE);
        }
    }

    if let (Some(from), Some(cursor)) = (pointer.launch_from, window.cursor_position()) {
        let color = Color::srgb_u8(LAUNCH_COLOR.0, LAUNCH_COLOR.1, LAUNCH_COLOR.2);
        gizmos.line_2d(to_world(from), to_world(cursor), color);
    }
}

fn to_nvec(v: Vec2) -> NVec2 {
    NVec2::new(v.x as f64, v.y as f64)
}

fn to_vec2(v: NVec2) -> Vec2 {
    Vec2::new(v.x as f32, v.y as f32)
}
