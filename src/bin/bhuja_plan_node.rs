//! bhuja-plan-node planner front-end
//!
//! Loads a TOML scene description, builds the configuration-space grid
//! and runs the requested search.
//!
//! # Usage
//!
//! ```bash
//! # Demo scene with A*
//! cargo run --bin bhuja-plan-node
//!
//! # Custom scene and method
//! cargo run --bin bhuja-plan-node -- --scene workshop.toml --method bfs
//!
//! # Also dump the classified grid as text
//! cargo run --bin bhuja-plan-node -- --save-grid cspace.txt
//! ```

use bhuja_plan::{SceneConfig, build_grid, search};
use std::io::Write;

/// Command line arguments
struct Args {
    scene_path: Option<String>,
    method: String,
    save_grid: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args {
        scene_path: None,
        method: "astar".to_string(),
        save_grid: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scene" | "-s" => {
                if i + 1 < args.len() {
                    result.scene_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--method" | "-m" => {
                if i + 1 < args.len() {
                    result.method = args[i + 1].clone();
                    i += 1;
                }
            }
            "--save-grid" | "-g" => {
                if i + 1 < args.len() {
                    result.save_grid = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    result
}

fn print_help() {
    println!("bhuja-plan-node - planar arm motion planner");
    println!();
    println!("USAGE:");
    println!("    bhuja-plan-node [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --scene <FILE>      Scene description (TOML)");
    println!("    -m, --method <NAME>     Search method: bfs, dfs, greedy, astar (default astar)");
    println!("    -g, --save-grid <FILE>  Save the classified grid as text");
    println!("    -h, --help              Print help information");
}

fn load_scene(args: &Args) -> SceneConfig {
    match &args.scene_path {
        Some(path) => match SceneConfig::from_path(path) {
            Ok(scene) => {
                eprintln!("Loaded scene from {}", path);
                scene
            }
            Err(e) => {
                eprintln!("Failed to load scene {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("No scene given, using the built-in demo scene");
            SceneConfig::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = parse_args();
    let scene = load_scene(&args);

    log::info!("bhuja-plan-node starting...");
    log::info!("  Links: {}", scene.arm.links.len());
    log::info!("  Granularity: {} degrees", scene.granularity);
    log::info!(
        "  Obstacles: {}, goals: {}",
        scene.obstacles.len(),
        scene.goals.len()
    );
    log::info!("  Method: {}", args.method);

    if let Err(e) = run(&scene, &args) {
        log::error!("Planning failed: {}", e);
        std::process::exit(1);
    }
}

fn run(scene: &SceneConfig, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let arm = scene.build_arm()?;
    let grid = build_grid(
        &arm,
        &scene.goals,
        &scene.obstacles,
        scene.window,
        scene.granularity,
    )?;
    log::info!(
        "Grid built: dims {:?}, {} goal cell(s)",
        grid.dimensions(),
        grid.goal_indices().len()
    );

    if let Some(path) = &args.save_grid {
        grid.save_to_file(path)?;
        log::info!("Grid saved to {}", path);
    }

    let result = search(&grid, &args.method);
    if result.found() {
        log::info!(
            "Path found: {} configurations, {} states explored",
            result.path.len(),
            result.explored
        );
        for (step, config) in result.path.iter().enumerate() {
            log::info!("  step {:>3}: {}", step, config);
        }
    } else {
        log::warn!(
            "No path found ({} states explored)",
            result.explored
        );
    }

    Ok(())
}
