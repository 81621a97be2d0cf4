use serde::Deserialize;
use std::path::PathBuf;

fn default_verbose() -> bool {
    false
}

/// Optional file configuration, merged under CLI arguments.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Polygons file loaded before the first command.
    #[serde(default)]
    pub polygons: Option<PathBuf>,
    /// Commands file; stdin when absent.
    #[serde(default)]
    pub commands: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    /// Search the standard locations and load the first config that
    /// parses. A file that exists but fails to parse prints a warning and
    /// the search continues.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polyquery.toml"));
    paths.push(PathBuf::from(".polyquery.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polyquery").join("config.toml"));
        paths.push(config_dir.join("polyquery.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polyquery.toml"));
        paths.push(home.join(".config").join("polyquery").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            polygons = "shapes.txt"
            commands = "queries.txt"
            verbose = true
            "#,
        )
        .unwrap();
        assert_eq!(config.polygons, Some(PathBuf::from("shapes.txt")));
        assert_eq!(config.commands, Some(PathBuf::from("queries.txt")));
        assert!(config.verbose);
    }

    #[test]
    fn test_all_fields_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.polygons.is_none());
        assert!(config.commands.is_none());
        assert!(!config.verbose);
    }
}
