use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

/// The name of the optional settings file read from the current directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// A structure to hold environment settings. Backed by a settings.json file in the
/// current directory; any field missing from the file takes its default value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configs {
    pub verbose_mode: bool,
    pub working_directory: String,
    pub pretty_print: bool,
    pub default_crs: String,
}

impl Configs {
    pub fn new() -> Configs {
        Configs {
            verbose_mode: true,
            working_directory: String::new(),
            pretty_print: true,
            default_crs: String::new(),
        }
    }
}

impl Default for Configs {
    fn default() -> Configs {
        Configs::new()
    }
}

/// Reads settings.json from the current directory, falling back on the defaults
/// when there is no such file.
pub fn get_configs() -> Result<Configs, Error> {
    let config_file: PathBuf = std::env::current_dir()?.join(SETTINGS_FILE);
    read_configs(&config_file)
}

/// Reads the settings stored at `config_file`. A missing file yields the defaults;
/// a file that is present but not valid settings JSON is an `InvalidData` error.
pub fn read_configs(config_file: &Path) -> Result<Configs, Error> {
    let contents = match fs::read_to_string(config_file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Configs::new()),
        Err(e) => return Err(e),
    };
    serde_json::from_str(&contents).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Failed to parse {}: {}", config_file.display(), e),
        )
    })
}

#[cfg(test)]
mod test {
    use super::{read_configs, Configs};
    use std::fs;
    use std::io::ErrorKind;

    #[test]
    fn test_partial_settings_use_defaults() {
        let configs: Configs =
            serde_json::from_str(r#"{ "verbose_mode": false, "default_crs": "4326" }"#).unwrap();
        assert!(!configs.verbose_mode);
        assert_eq!(configs.default_crs, "4326");
        assert!(configs.pretty_print);
        assert!(configs.working_directory.is_empty());
    }

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let path = std::env::temp_dir().join("shp2geojson_no_such_settings.json");
        let _ = fs::remove_file(&path);
        assert_eq!(read_configs(&path).unwrap(), Configs::default());
    }

    #[test]
    fn test_unparseable_settings_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "shp2geojson_bad_settings_{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ verbose_mode: ").unwrap();
        let err = read_configs(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        let _ = fs::remove_file(&path);
    }
}
