use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Speed of light in nm/fs.
const C_NM_PER_FS: f64 = 299.792458;

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

/// Linearly chirped Gaussian pulse `exp(-t²/2τ²) · exp(i·b·t²)`.
struct ChirpedPulse {
    /// Intensity 1/e half width of the envelope, fs.
    tau: f64,
    /// Chirp rate, rad/fs².
    chirp: f64,
    /// Carrier wavelength, nm.
    center_nm: f64,
}

impl ChirpedPulse {
    /// Time-domain row: time, intensity, phase, real, imaginary.
    fn temporal(&self, t: f64) -> [f64; 5] {
        let amplitude = (-t * t / (2.0 * self.tau * self.tau)).exp();
        let phase = self.chirp * t * t;
        [
            t,
            amplitude * amplitude,
            phase,
            amplitude * phase.cos(),
            amplitude * phase.sin(),
        ]
    }

    /// Spectral row at angular-frequency offset `dw` (rad/fs):
    /// wavelength, spectral intensity, spectral phase.
    fn spectral(&self, dw: f64) -> [f64; 3] {
        let a_re = 1.0 / (2.0 * self.tau * self.tau);
        let a_im = -self.chirp;
        let norm = 4.0 * (a_re * a_re + a_im * a_im);
        let exponent_re = -dw * dw * a_re / norm;
        let exponent_im = dw * dw * a_im / norm;

        let w0 = 2.0 * std::f64::consts::PI * C_NM_PER_FS / self.center_nm;
        let wavelength = 2.0 * std::f64::consts::PI * C_NM_PER_FS / (w0 + dw);
        [wavelength, (2.0 * exponent_re).exp(), exponent_im]
    }
}

fn write_rows<const N: usize>(path: &Path, rows: &[[f64; N]]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| format!("{v:.6e}")).collect();
        writeln!(out, "{}", line.join("\t"))?;
    }
    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let pulse = ChirpedPulse {
        tau: 30.0,
        chirp: 5e-4,
        center_nm: 800.0,
    };
    let n = 256;

    // Time axis: -200 fs → +200 fs
    let temporal: Vec<[f64; 5]> = (0..n)
        .map(|i| {
            let t = -200.0 + 400.0 * i as f64 / (n - 1) as f64;
            let mut row = pulse.temporal(t);
            row[1] = (row[1] + rng.gauss(0.0, 0.002)).max(0.0);
            row
        })
        .collect();

    // Frequency offsets: ±0.15 rad/fs around the carrier
    let spectral: Vec<[f64; 3]> = (0..n)
        .map(|i| {
            let dw = -0.15 + 0.3 * i as f64 / (n - 1) as f64;
            let mut row = pulse.spectral(dw);
            row[1] = (row[1] + rng.gauss(0.0, 0.002)).max(0.0);
            row
        })
        .rev()
        .collect();

    write_rows(Path::new("Ek.dat"), &temporal)?;
    write_rows(Path::new("Speck.dat"), &spectral)?;

    println!("Wrote {n} time-domain rows to Ek.dat and {n} spectral rows to Speck.dat");
    Ok(())
}
