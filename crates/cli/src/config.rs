use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Config {
    pub triples: TriplesOptions,
    pub queens: QueensOptions,
    pub output: OutputOptions,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct TriplesOptions {
    /// Sides are chosen below this
    pub limit: u32,
    /// Enumerate all side combinations instead of bounding by hypotenuse
    pub naive: bool,
}

impl Default for TriplesOptions {
    fn default() -> Self {
        TriplesOptions {
            limit: 21,
            naive: false,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct QueensOptions {
    pub size: usize,
}

impl Default for QueensOptions {
    fn default() -> Self {
        QueensOptions { size: 8 }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct OutputOptions {
    /// Solutions printed at most, 0 prints all
    pub max_solutions: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions { max_solutions: 100 }
    }
}

pub(crate) const CONFIG_FILE: &str = "ambit.toml";

pub(crate) fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("ambit");
    path.push(CONFIG_FILE);
    Some(path)
}

/// Read the user configuration and layer the working directory
/// configuration on top of it. An explicitly given file must exist, others
/// are optional.
pub(crate) fn read_config(explicit: Option<&Path>, working_dir: &Path) -> anyhow::Result<Config> {
    let mut builder = config::Config::builder();

    match explicit {
        Some(path) => {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                builder = builder.add_source(config::File::from(path).required(false));
            }
        }
    }

    let mut local = working_dir.to_path_buf();
    local.push(CONFIG_FILE);
    builder = builder.add_source(config::File::from(local).required(false));

    let config = builder.build()?;
    let config = config.try_deserialize::<Config>()?;

    Ok(config)
}
