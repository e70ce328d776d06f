use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use log::{info, LevelFilter};
use rayon::prelude::*;
use structopt::StructOpt;

use pt_intersect::math::Sample2D;
use pt_intersect::parsing::{load_scene, Scene};

#[derive(Debug, StructOpt)]
#[structopt(name = "pt_intersect", about = "casts primary rays against a scene and reports hit statistics")]
struct Opt {
    #[structopt(long, parse(from_os_str))]
    scene: PathBuf,

    #[structopt(long, default_value = "512")]
    width: usize,

    #[structopt(long, default_value = "512")]
    height: usize,

    /// defaults to the number of logical cpus
    #[structopt(long)]
    threads: Option<usize>,

    /// only ask whether anything is hit, without building intersection records
    #[structopt(long)]
    shadow: bool,

    /// jitter each primary ray inside its pixel
    #[structopt(long)]
    jitter: bool,

    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

struct Stats {
    hits: usize,
    distance: f64,
}

fn trace(scene: &Scene, opt: &Opt) -> Stats {
    let (w, h) = (opt.width, opt.height);
    (0..w * h)
        .into_par_iter()
        .map(|i| {
            let (x, y) = (i % w, i / w);
            let (dx, dy) = if opt.jitter {
                let sample = Sample2D::new_random_sample();
                (sample.x, sample.y)
            } else {
                (0.5, 0.5)
            };
            let (s, t) = (
                (x as f32 + dx) / (w as f32),
                (y as f32 + dy) / (h as f32),
            );
            let mut ray = scene.camera.get_ray(s, t);
            if opt.shadow {
                let hit = scene.primitives.has_intersection(&ray);
                Stats {
                    hits: hit as usize,
                    distance: 0.0,
                }
            } else {
                match scene.primitives.intersect(&mut ray) {
                    Some(isect) => Stats {
                        hits: 1,
                        distance: isect.time as f64,
                    },
                    None => Stats {
                        hits: 0,
                        distance: 0.0,
                    },
                }
            }
        })
        .reduce(
            || Stats {
                hits: 0,
                distance: 0.0,
            },
            |a, b| Stats {
                hits: a.hits + b.hits,
                distance: a.distance + b.distance,
            },
        )
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    env_logger::Builder::from_default_env()
        .filter_level(opt.log_level)
        .init();

    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!("using {} threads", threads);

    let scene = load_scene(&opt.scene)?;

    let rays = opt.width * opt.height;
    let start = Instant::now();
    let stats = trace(&scene, &opt);
    let elapsed = start.elapsed();

    info!(
        "{} of {} rays hit ({:.1}%)",
        stats.hits,
        rays,
        100.0 * stats.hits as f64 / rays.max(1) as f64
    );
    if !opt.shadow && stats.hits > 0 {
        info!("mean hit distance {:.4}", stats.distance / stats.hits as f64);
    }
    info!(
        "traced in {:?}, {:.2} Mrays/s",
        elapsed,
        rays as f64 / elapsed.as_secs_f64().max(1e-9) / 1e6
    );
    Ok(())
}
