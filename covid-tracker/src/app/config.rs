use app_core::string_error::ErrorStringExt;
use covid_data::{Metric, DEFAULT_BASE_URL};
use egui::Color32;

const CONFIG_FILE_NAME: &str = ".covid-tracker";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub positive_color: Color32,
    pub negative_color: Color32,
    pub death_color: Color32,
}

impl Default for Config {
    fn default() -> Self {
        let base_url = DEFAULT_BASE_URL.to_string();
        let positive_color = Color32::from_rgb(0xf5, 0xa6, 0x23);
        let negative_color = Color32::from_rgb(0x4c, 0xaf, 0x50);
        let death_color = Color32::from_rgb(0xe5, 0x39, 0x35);

        Self {
            base_url,
            positive_color,
            negative_color,
            death_color,
        }
    }
}

impl Config {
    /// Load `~/.covid-tracker`. Keys missing from the file keep their
    /// default value.
    pub fn from_config_file() -> Result<Self, String> {
        let home =
            dirs::home_dir().err_to_string("could not determine home directory to load config file")?;
        let path = home.join(CONFIG_FILE_NAME);
        let config_raw =
            std::fs::read_to_string(&path).err_to_string("could not load config file")?;
        log::debug!("loaded config file {:?}", path);
        Ok(Self::from_config_str(&config_raw))
    }

    pub fn from_config_str(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            let line = line.trim();
            // Lines starting with "#" are considered comments.
            if line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let val = val.trim();
            match key.trim() {
                "base_url" => {
                    if val.starts_with("http://") || val.starts_with("https://") {
                        config.base_url = val.to_string();
                    } else {
                        log::warn!("'base_url' must start with http:// or https://, got '{}'", val)
                    }
                }
                "positive_color" => parse_color(key, val, &mut config.positive_color),
                "negative_color" => parse_color(key, val, &mut config.negative_color),
                "death_color" => parse_color(key, val, &mut config.death_color),
                other => log::warn!("unknown config key '{}'", other),
            }
        }
        config
    }

    pub fn metric_color(&self, metric: Metric) -> Color32 {
        match metric {
            Metric::Negative => self.negative_color,
            Metric::Positive => self.positive_color,
            Metric::Death => self.death_color,
        }
    }
}

fn parse_color(key: &str, val: &str, color: &mut Color32) {
    match Color32::from_hex(val) {
        Ok(parsed) => *color = parsed,
        Err(err) => log::warn!("could not parse '{}' as color: {:?}", key.trim(), err),
    }
}
