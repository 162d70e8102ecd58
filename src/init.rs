use std::path::{Path, PathBuf};

use serde::Deserialize;

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Address for the HTTP server to listen on, eg: localhost:8080.
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// Path to the CSV vocabulary file loaded at startup.
    #[serde(default)]
    pub path: String,
}

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Load and merge one or more config files.
pub fn init_config(paths: &[PathBuf]) -> Config {
    let mut config: Option<Config> = None;

    for path in paths {
        log::info!("loading config: {}", path.display());
        match read_config(path) {
            Ok(c) => {
                if let Some(ref mut existing) = config {
                    // Merge configs.
                    merge_config(existing, c);
                } else {
                    config = Some(c);
                }
            }
            Err(e) => {
                log::error!("error loading config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    config.unwrap_or_else(|| {
        log::error!("no config files specified");
        std::process::exit(1);
    })
}

/// Generate sample config file.
pub fn generate_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err("config file already exists".into());
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

/// Load configuration from a given TOML file.
fn read_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// Merge the given src config into the dest config struct.
fn merge_config(dest: &mut Config, src: Config) {
    if !src.app.address.is_empty() {
        dest.app.address = src.app.address;
    }
    if !src.dataset.path.is_empty() {
        dest.dataset.path = src.dataset.path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_only_set_fields() {
        let mut dest: Config = toml::from_str(
            r#"
            [app]
            address = "localhost:8080"

            [dataset]
            path = "dataset.csv"
            "#,
        )
        .unwrap();

        let src: Config = toml::from_str(
            r#"
            [app]
            address = "0.0.0.0:9000"
            "#,
        )
        .unwrap();

        merge_config(&mut dest, src);
        assert_eq!(dest.app.address, "0.0.0.0:9000");
        assert_eq!(dest.dataset.path, "dataset.csv");
    }

    #[test]
    fn sample_config_parses() {
        let cfg: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert!(!cfg.app.address.is_empty());
        assert!(!cfg.dataset.path.is_empty());
    }
}
