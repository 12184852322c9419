use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, under the raw header spellings of the published file.
#[derive(Debug, Serialize)]
struct NatalityRow<'a> {
    #[serde(rename = "State of Residence")]
    state: &'a str,
    #[serde(rename = "Month")]
    month: &'a str,
    #[serde(rename = "Month Code")]
    month_code: u32,
    #[serde(rename = "Year Code")]
    year_code: u32,
    #[serde(rename = "Sex of Infant")]
    sex: &'a str,
    /// Text so suppressed cells can be written as-is.
    #[serde(rename = "Births")]
    births: String,
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
}

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// (state, typical monthly births per sex)
const STATES: [(&str, f64); 8] = [
    ("Alabama", 2_400.0),
    ("Alaska", 380.0),
    ("California", 17_500.0),
    ("Florida", 9_000.0),
    ("New York", 8_600.0),
    ("Texas", 15_200.0),
    ("Vermont", 200.0),
    ("Wyoming", 250.0),
];

const YEAR: u32 = 2025;

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Provisional_Natality_2025_CDC.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let mut rows = 0usize;
    let mut suppressed = 0usize;
    for (state, base) in STATES {
        for (m, month) in MONTHS.iter().enumerate() {
            for sex in ["F", "M"] {
                // About one cell in forty is suppressed, as in the published data.
                let births = if rng.next_f64() < 0.025 {
                    suppressed += 1;
                    "Suppressed".to_string()
                } else {
                    let sex_ratio = if sex == "M" { 1.05 } else { 1.0 };
                    let jitter = 0.9 + 0.2 * rng.next_f64();
                    ((base * sex_ratio * jitter).round() as u64).to_string()
                };

                writer
                    .serialize(NatalityRow {
                        state,
                        month,
                        month_code: m as u32 + 1,
                        year_code: YEAR,
                        sex,
                        births,
                    })
                    .context("writing CSV row")?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {rows} rows ({suppressed} suppressed) to {}",
        output_path.display()
    );
    Ok(())
}
