//! critterfarm main entry point.
//!
//! A small isometric farm scene written in Rust using:
//! - **raylib** for windowing, textures and fonts
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or keep defaults), open the window and render target
//! 2. Load textures and the HUD font, build the demo scene
//! 3. Register observers and systems
//! 4. Each frame: update time, poll input, pan the camera, advance animation
//!    clocks and render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```
//!
//! Arrow keys pan, SPACE toggles the walking ant, F11 toggles the debug HUD,
//! ESC quits.

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;

use critterfarm::events::switchdebug::switch_debug_observer;
use critterfarm::events::togglewalk::toggle_walk_observer;
use critterfarm::game;
use critterfarm::resources::camera::Camera;
use critterfarm::resources::debugmode::DebugMode;
use critterfarm::resources::fontstore::FontStore;
use critterfarm::resources::shaderstore::ShaderStore;
use critterfarm::resources::gameconfig::GameConfig;
use critterfarm::resources::input::InputState;
use critterfarm::resources::rendertarget::RenderTarget;
use critterfarm::resources::texturestore::TextureStore;
use critterfarm::resources::windowsize::WindowSize;
use critterfarm::resources::worldtime::WorldTime;
use critterfarm::systems::animation::animation;
use critterfarm::systems::camera::camera_pan_system;
use critterfarm::systems::input::update_input_state;
use critterfarm::systems::render::render_system;
use critterfarm::systems::time::update_world_time;

/// Isometric ant farm demo
#[derive(Parser)]
#[command(version, about = "Animated ants on an isometric tile field.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the debug HUD enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("{}; using defaults", e);
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("critterfarm");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let (render_width, render_height) = config.render_size();
    let render_target = match RenderTarget::new(&mut rl, &thread, render_width, render_height) {
        Ok(target) => target,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut textures = TextureStore::new();
    let mut fonts = FontStore::new();
    let mut shaders = ShaderStore::new();
    let assets = match game::load_assets(&mut rl, &thread, &mut textures, &mut fonts, &mut shaders) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Camera::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    if let Err(e) = game::build_demo(&mut world, &assets) {
        log::error!("Failed to build demo scene: {}", e);
        std::process::exit(1);
    }

    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(fonts);
    world.insert_non_send_resource(shaders);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(toggle_walk_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(camera_pan_system.after(update_input_state));
    update.add_systems(animation.after(update_input_state));
    update.add_systems(render_system.after(camera_pan_system).after(animation));

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
    log::info!("Bye");
}
