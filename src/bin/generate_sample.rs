use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Write a synthetic ZINC-like CSV for trying out `qed-sort`.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Cli {
    /// Where to write the CSV
    #[arg(default_value = "kaggle_zinc_filtered.csv")]
    output: PathBuf,

    /// Number of rows
    #[arg(long, default_value_t = 500)]
    rows: usize,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Serialize)]
struct Molecule {
    smiles: &'static str,
    #[serde(rename = "logP")]
    log_p: f64,
    /// Written as an empty cell when absent.
    qed: Option<f64>,
    #[serde(rename = "SAS")]
    sas: f64,
}

const SMILES: [&str; 12] = [
    "CCO",
    "CC(=O)Oc1ccccc1C(=O)O",
    "CN1C=NC2=C1C(=O)N(C(=O)N2C)C",
    "c1ccccc1",
    "CC(C)Cc1ccc(cc1)C(C)C(=O)O",
    "CC(=O)Nc1ccc(O)cc1",
    "C1CCCCC1",
    "OC(=O)c1ccccc1O",
    "CCN(CC)CC",
    "Clc1ccccc1",
    "COc1ccc2[nH]cc(CCN)c2c1",
    "NC(=O)c1cccnc1",
];

/// Fraction of rows written without a QED value.
const BLANK_QED_RATE: f64 = 0.05;

/// SplitMix64; the same seed always yields the same file.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` from the top 53 bits.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Round to 5 decimals so the CSV stays readable.
fn round5(v: f64) -> f64 {
    (v * 1e5).round() / 1e5
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = SampleRng(cli.seed);

    if let Some(parent) = cli.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    let mut blanks = 0usize;
    for _ in 0..cli.rows {
        let qed = if rng.unit() < BLANK_QED_RATE {
            blanks += 1;
            None
        } else {
            Some(round5(rng.uniform(0.1, 0.95)))
        };
        let molecule = Molecule {
            smiles: *rng.pick(&SMILES),
            log_p: round5(rng.uniform(-2.0, 6.0)),
            qed,
            sas: round5(rng.uniform(1.0, 6.0)),
        };
        writer.serialize(&molecule).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV output")?;

    println!(
        "Wrote {} molecules ({blanks} without QED) to {}",
        cli.rows,
        cli.output.display()
    );
    Ok(())
}
