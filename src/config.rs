use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::analytics::metrics::TOP_DISEASES;

pub const DEFAULT_DATA_PATH: &str = "plant_disease_dashboard.csv";
pub const DEFAULT_GALLERY_DIR: &str = "sample_images";

/// Images shown on the home page, relative to the gallery directory.
pub const GALLERY_IMAGES: [&str; 6] = [
    "Cercospora_leaf_spot_fixed.jpg",
    "healthy.jpg",
    "Late_blight.jpg",
    "Leaf_scorch.jpg",
    "Northern_Leaf_Blight.jpg",
    "Powdery_mildew.jpg",
];

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Observation table to load (`.csv`, `.json` or `.parquet`).
    pub data_path: PathBuf,
    pub gallery_dir: PathBuf,
    /// Number of bars in the disease alert chart.
    pub top_diseases: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            gallery_dir: PathBuf::from(DEFAULT_GALLERY_DIR),
            top_diseases: TOP_DISEASES,
        }
    }
}

impl AppConfig {
    /// Read `PLANT_HEALTH_*` variables, then let a single positional argument
    /// override the data path.
    pub fn from_env_and_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::from_lookup(|name| env::var(name).ok(), args)
    }

    fn from_lookup<F, I>(lookup: F, args: I) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("PLANT_HEALTH_DATA") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("PLANT_HEALTH_GALLERY") {
            config.gallery_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("PLANT_HEALTH_TOP_DISEASES") {
            config.top_diseases = raw
                .trim()
                .parse()
                .with_context(|| format!("PLANT_HEALTH_TOP_DISEASES: '{raw}' is not a count"))?;
        }

        let positional: Vec<OsString> = args.into_iter().collect();
        match positional.as_slice() {
            [] => {}
            [path] => config.data_path = PathBuf::from(path),
            more => bail!("expected at most one data file argument, got {}", more.len()),
        }

        Ok(config)
    }

    /// Full paths of the gallery images, in display order.
    pub fn gallery_paths(&self) -> Vec<PathBuf> {
        GALLERY_IMAGES
            .iter()
            .map(|name| self.gallery_dir.join(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[]), Vec::new()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.top_diseases, 5);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_lookup(
            lookup_from(&[
                ("PLANT_HEALTH_DATA", "data/obs.parquet"),
                ("PLANT_HEALTH_GALLERY", "img"),
                ("PLANT_HEALTH_TOP_DISEASES", "3"),
            ]),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/obs.parquet"));
        assert_eq!(config.gallery_dir, PathBuf::from("img"));
        assert_eq!(config.top_diseases, 3);
    }

    #[test]
    fn positional_argument_wins_over_environment() {
        let config = AppConfig::from_lookup(
            lookup_from(&[("PLANT_HEALTH_DATA", "env.csv")]),
            vec![OsString::from("arg.csv")],
        )
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("arg.csv"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AppConfig::from_lookup(
            lookup_from(&[("PLANT_HEALTH_TOP_DISEASES", "many")]),
            Vec::new()
        )
        .is_err());
        assert!(AppConfig::from_lookup(
            lookup_from(&[]),
            vec![OsString::from("a.csv"), OsString::from("b.csv")]
        )
        .is_err());
    }

    #[test]
    fn gallery_paths_live_in_gallery_dir() {
        let paths = AppConfig::default().gallery_paths();
        assert_eq!(paths.len(), GALLERY_IMAGES.len());
        assert!(paths.iter().all(|p| p.starts_with(DEFAULT_GALLERY_DIR)));
    }
}
