use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Directory both sinks write into; created if absent.
    #[serde(default = "OutputConfig::default_build_dir")]
    pub build_dir: PathBuf,
    #[serde(default = "OutputConfig::default_yomichan_file")]
    pub yomichan_file: String,
    #[serde(default = "OutputConfig::default_migaku_file")]
    pub migaku_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            build_dir: Self::default_build_dir(),
            yomichan_file: Self::default_yomichan_file(),
            migaku_file: Self::default_migaku_file(),
        }
    }
}

impl OutputConfig {
    fn default_build_dir() -> PathBuf {
        PathBuf::from("./build")
    }

    fn default_yomichan_file() -> String {
        "hololive-dictionary.zip".to_string()
    }

    fn default_migaku_file() -> String {
        "migaku_library.tsv".to_string()
    }
}

/// Index metadata embedded in the Yomichan archive.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DictionaryConfig {
    #[serde(default = "DictionaryConfig::default_title")]
    pub title: String,
    #[serde(default = "DictionaryConfig::default_revision")]
    pub revision: String,
    #[serde(default = "DictionaryConfig::default_author")]
    pub author: String,
    #[serde(default = "DictionaryConfig::default_description")]
    pub description: String,
    #[serde(default = "DictionaryConfig::default_attribution")]
    pub attribution: String,
    #[serde(default = "DictionaryConfig::default_url")]
    pub url: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            revision: Self::default_revision(),
            author: Self::default_author(),
            description: Self::default_description(),
            attribution: Self::default_attribution(),
            url: Self::default_url(),
        }
    }
}

impl DictionaryConfig {
    fn default_title() -> String {
        "Hololive Dictionary".to_string()
    }

    fn default_revision() -> String {
        "1.0".to_string()
    }

    fn default_author() -> String {
        "yukinyaa".to_string()
    }

    fn default_description() -> String {
        "Hololive name/term dictionary built from heppokofrontend/hololive-dictionary".to_string()
    }

    fn default_attribution() -> String {
        "hololive-dictionary".to_string()
    }

    fn default_url() -> String {
        "https://github.com/Yukinyaa/hololive-names-dict".to_string()
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'holodict init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Load the config file when one exists; otherwise use built-in
    /// defaults. Build commands use this so a bare `holodict build` works
    /// without any setup.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            info!("Loaded config from {}", config_path.display());
            Self::load()
        } else {
            Ok(Self::default())
        }
    }

    fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("holodict");
        Ok(config_dir.join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("holodict");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "output": {
    "build_dir": "./build",
    "yomichan_file": "hololive-dictionary.zip",
    "migaku_file": "migaku_library.tsv"
  },
  "dictionary": {
    "title": "Hololive Dictionary",
    "revision": "1.0",
    "author": "yukinyaa",
    "description": "Hololive name/term dictionary built from heppokofrontend/hololive-dictionary",
    "attribution": "hololive-dictionary",
    "url": "https://github.com/Yukinyaa/hololive-names-dict"
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the output paths or dictionary metadata if needed");
        println!("   2. Run 'holodict build' to generate both dictionary files");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_constants() {
        let config = Config::default();
        assert_eq!(config.output.yomichan_file, "hololive-dictionary.zip");
        assert_eq!(config.output.migaku_file, "migaku_library.tsv");
        assert_eq!(config.dictionary.title, "Hololive Dictionary");
        assert_eq!(config.dictionary.revision, "1.0");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let parsed: Result<Config, _> =
            serde_json::from_str(r#"{"output": {"build_dir": "/tmp/out"}}"#);
        let Ok(config) = parsed else {
            panic!("partial config should parse");
        };
        assert_eq!(config.output.build_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.output.yomichan_file, "hololive-dictionary.zip");
        assert_eq!(config.dictionary.author, "yukinyaa");
    }
}
