use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::StringArray;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const ROWS: usize = 2_000;
const CSV_PATH: &str = "plant_disease_dashboard.csv";
const PARQUET_PATH: &str = "plant_disease_dashboard.parquet";

const REGIONS: [&str; 6] = ["North", "South", "East", "West", "Central", "Coastal"];

/// Crop name, disease names (without the crop prefix) and the chance a
/// sampled plant of that crop is diseased.
const CROPS: [(&str, &[&str], f64); 6] = [
    ("Tomato", &["Late_blight", "Early_blight", "Leaf_Mold", "Septoria_leaf_spot"], 0.55),
    ("Potato", &["Late_blight", "Early_blight"], 0.40),
    ("Corn", &["Northern_Leaf_Blight", "Cercospora_leaf_spot", "Common_rust"], 0.35),
    ("Apple", &["Apple_scab", "Black_rot", "Cedar_apple_rust"], 0.25),
    ("Grape", &["Black_rot", "Esca", "Leaf_blight"], 0.30),
    ("Strawberry", &["Leaf_scorch"], 0.20),
];

#[derive(Debug, Serialize)]
struct SampleRow {
    crop_name: String,
    status: &'static str,
    region: String,
    disease_name: String,
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

    /// Uniform index in `0..len`.
    fn pick(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize % len
    }
}

fn generate_rows(rng: &mut SimpleRng) -> Vec<SampleRow> {
    (0..ROWS)
        .map(|_| {
            let (crop, diseases, disease_rate) = CROPS[rng.pick(CROPS.len())];
            let region = REGIONS[rng.pick(REGIONS.len())];

            // Regions further down the list see a little more disease.
            let region_bias = REGIONS.iter().position(|r| *r == region).unwrap_or(0) as f64 * 0.03;
            let diseased = rng.next_f64() < disease_rate + region_bias;

            let (status, disease_name) = if diseased {
                let disease = diseases[rng.pick(diseases.len())];
                ("Diseased", format!("{crop}___{disease}"))
            } else {
                ("Healthy", format!("{crop}___healthy"))
            };

            SampleRow {
                crop_name: crop.to_string(),
                status,
                region: region.to_string(),
                disease_name,
            }
        })
        .collect()
}

fn write_csv(path: &str, rows: &[SampleRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for r in rows {
        wtr.serialize(r).context("writing CSV row")?;
    }
    wtr.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[SampleRow]) -> Result<()> {
    let column = |f: fn(&SampleRow) -> &str| -> StringArray {
        StringArray::from(rows.iter().map(f).collect::<Vec<_>>())
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("crop_name", DataType::Utf8, false),
        Field::new("status", DataType::Utf8, false),
        Field::new("region", DataType::Utf8, false),
        Field::new("disease_name", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(column(|r| r.crop_name.as_str())),
            Arc::new(column(|r| r.status)),
            Arc::new(column(|r| r.region.as_str())),
            Arc::new(column(|r| r.disease_name.as_str())),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    write_csv(CSV_PATH, &rows)?;
    write_parquet(PARQUET_PATH, &rows)?;

    let diseased = rows.iter().filter(|r| r.status == "Diseased").count();
    println!(
        "Wrote {} observations ({diseased} diseased) to {CSV_PATH} and {PARQUET_PATH}",
        rows.len()
    );
    Ok(())
}
