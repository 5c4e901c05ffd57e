use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::errors::Result;

pub const DEFAULT_IMAGES_BASE_URL: &str = "mapicons/";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(alias = "Images_Base_Url", default = "default_images_base_url")]
    pub images_base_url: String,
}

fn default_images_base_url() -> String {
    DEFAULT_IMAGES_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            images_base_url: default_images_base_url(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let file = File::open(path)?;
    let config: Config = serde_json::from_reader(BufReader::new(file))?;
    let path_str = path.display().to_string();
    info!(path = path_str.as_str(), images_base_url = config.images_base_url.as_str(); "Loaded config");
    Ok(config)
}
