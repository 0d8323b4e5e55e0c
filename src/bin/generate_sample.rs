use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// Write synthetic array / rbtree / rbtree v2 timing files.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about)]
struct Opt {
    /// Output directory
    #[arg(short = 'o', long = "out", default_value = ".")]
    out_dir: PathBuf,

    /// Timed runs per structure
    #[arg(short = 'n', long = "runs", default_value_t = 100)]
    runs: usize,

    #[arg(long = "seed", default_value_t = 42)]
    seed: u64,
}

/// (file, mean elapsed ns, relative noise)
const STRUCTURES: [(&str, f64, f64); 3] = [
    ("array.txt", 1_250_000.0, 0.04),
    ("rbtree.txt", 2_400_000.0, 0.06),
    ("rbtreev2.txt", 1_900_000.0, 0.05),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One `<run> <elapsed_ns>` row per run; timings never go below 1 ns.
fn write_timings(
    path: &Path,
    runs: usize,
    mean: f64,
    noise: f64,
    rng: &mut SimpleRng,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# run elapsed_ns")?;
    for run in 0..runs {
        let elapsed = rng.gauss(mean, mean * noise).max(1.0);
        writeln!(out, "{run} {elapsed:.6}")?;
    }
    out.flush()
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let mut rng = SimpleRng::new(opt.seed);

    std::fs::create_dir_all(&opt.out_dir)
        .with_context(|| format!("creating {}", opt.out_dir.display()))?;

    for (file, mean, noise) in STRUCTURES {
        let path = opt.out_dir.join(file);
        write_timings(&path, opt.runs, mean, noise, &mut rng)?;
        println!("Wrote {} runs to {}", opt.runs, path.display());
    }

    Ok(())
}
