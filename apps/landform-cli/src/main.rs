use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use landform_common::{Extent, SplitMix64};
use landform_dynamics::{DynamicsConfig, ParticleSystem};
use landform_heightfield::{Terrain, TerrainParams};
use landform_render::{DebugTextRenderer, RenderView, Renderer, Scene};

#[derive(Parser)]
#[command(name = "landform-cli", about = "CLI for landform terrain operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print toolkit version and crate info
    Info,
    /// Generate a diamond-square terrain and report its stats
    Generate {
        /// Grid resolution (cells per axis, power of two)
        #[arg(short, long, default_value = "64")]
        divisions: u32,
        /// Roughness divisor; larger is smoother
        #[arg(long, default_value = "6.0")]
        smoothing: f64,
        /// RNG seed; omitted means system entropy
        #[arg(short, long)]
        seed: Option<u64>,
        /// World-space extent as min_x,max_x,min_y,max_y
        #[arg(long, value_delimiter = ',', num_args = 4)]
        extent: Option<Vec<f64>>,
        /// Write the mesh to this path as OBJ
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the construction parameters as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse an OBJ mesh and report counts and bounding box
    MeshInfo {
        /// Path to the OBJ file
        path: PathBuf,
    },
    /// Run a bouncing-sphere particle scene
    Simulate {
        /// Number of spheres to spawn
        #[arg(short, long, default_value = "10")]
        particles: usize,
        /// Number of fixed-dt steps
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Step size in seconds
        #[arg(long, default_value = "0.01666")]
        dt: f64,
        /// RNG seed; omitted means system entropy
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("landform-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", landform_common::crate_info());
            println!("heightfield: {}", landform_heightfield::crate_info());
            println!("mesh: {}", landform_mesh::crate_info());
            println!("dynamics: {}", landform_dynamics::crate_info());
            println!("render: {}", landform_render::crate_info());
        }
        Commands::Generate {
            divisions,
            smoothing,
            seed,
            extent,
            output,
            json,
        } => {
            let extent = match extent {
                Some(v) => {
                    anyhow::ensure!(v.len() == 4, "--extent needs min_x,max_x,min_y,max_y");
                    Extent::new(v[0], v[1], v[2], v[3])?
                }
                None => Extent::unit(),
            };
            let params = TerrainParams {
                divisions,
                extent,
                smoothing,
            };
            let mut jitter = match seed {
                Some(s) => SplitMix64::new(s),
                None => SplitMix64::from_entropy(),
            };
            let terrain = Terrain::generate_with(&params, &mut jitter)?;
            info!(
                divisions,
                vertices = terrain.vertex_count(),
                faces = terrain.face_count(),
                "terrain generated"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(terrain.params())?);
            }

            if let Some(path) = output {
                let mut writer = BufWriter::new(File::create(&path)?);
                landform_mesh::write_obj(
                    &mut writer,
                    terrain.positions(),
                    terrain.triangle_indices(),
                )?;
                writer.flush()?;
                println!("Wrote {}", path.display());
            }

            let scene = Scene {
                terrain: Some(terrain),
                ..Scene::default()
            };
            print!(
                "{}",
                DebugTextRenderer::new().render(&scene, &RenderView::default())
            );
        }
        Commands::MeshInfo { path } => {
            let text = std::fs::read_to_string(&path)?;
            let mesh = landform_mesh::parse_obj(&text)?;
            info!(path = %path.display(), "mesh loaded");
            let scene = Scene {
                meshes: vec![mesh],
                ..Scene::default()
            };
            print!(
                "{}",
                DebugTextRenderer::new().render(&scene, &RenderView::default())
            );
        }
        Commands::Simulate {
            particles,
            ticks,
            dt,
            seed,
        } => {
            let mut jitter = match seed {
                Some(s) => SplitMix64::new(s),
                None => SplitMix64::from_entropy(),
            };
            let mut system = ParticleSystem::new(DynamicsConfig::default());
            system.spawn_many(particles, &mut jitter);

            println!("Simulating {particles} spheres for {ticks} ticks (dt={dt})");
            for _ in 0..ticks {
                system.step(dt);
            }
            info!(particles, ticks, "simulation finished");

            let scene = Scene {
                particles: Some(system),
                ..Scene::default()
            };
            print!(
                "{}",
                DebugTextRenderer::new().render(&scene, &RenderView::default())
            );
        }
    }

    Ok(())
}
