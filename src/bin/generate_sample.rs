use std::fs;
use std::path::Path;

/// Grid edge length of every generated variant.
const GRID: usize = 32;
/// Enough variants that numeric and lexicographic order differ (`_10`, `_11`).
const VARIANTS: usize = 12;
const OUTPUT_DIR: &str = "array_thermalbrush";

/// Heat deposited at `(x, y)` by a soft round brush centred on `(cx, cy)`.
fn brush(x: f64, y: f64, cx: f64, cy: f64, radius: f64, intensity: f64) -> f64 {
    let d2 = (x - cx).powi(2) + (y - cy).powi(2);
    intensity * (-d2 / (2.0 * radius.powi(2))).exp()
}

fn generate_variant(variant: usize, rng: &mut SimpleRng) -> Vec<Vec<f64>> {
    let t = variant as f64 / (VARIANTS - 1) as f64;
    let radius = 2.0 + 6.0 * t;
    let intensity = 80.0 - 30.0 * t;
    let centre = (GRID as f64 - 1.0) / 2.0;

    (0..GRID)
        .map(|row| {
            (0..GRID)
                .map(|col| {
                    let heat = brush(col as f64, row as f64, centre, centre, radius, intensity);
                    // Ambient temperature plus sensor noise.
                    20.0 + heat + rng.gauss(0.0, 0.5)
                })
                .collect()
        })
        .collect()
}

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

fn main() {
    let mut rng = SimpleRng::new(42);
    let out = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out).expect("Failed to create output directory");

    for variant in 0..VARIANTS {
        let grid = generate_variant(variant, &mut rng);
        let path = out.join(format!("brush_variant_{variant}.csv"));

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .expect("Failed to create output file");
        for row in &grid {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:.4}")).collect();
            writer.write_record(&cells).expect("Failed to write row");
        }
        writer.flush().expect("Failed to flush writer");
    }

    println!("Wrote {VARIANTS} variants ({GRID}x{GRID} each) to {OUTPUT_DIR}/");
}
