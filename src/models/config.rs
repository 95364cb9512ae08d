use retro_quant::{Layer, ModeRegistry, ModeSpec, Palette, QuantError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// Extra modes loaded from a YAML file, added on top of the built-ins.
///
/// ```yaml
/// modes:
///   bw:
///     width: 320
///     height: 200
///     palette: ["#000000", "#ffffff"]
///     layers:
///       - { cell_width: 8, cell_height: 8, bit_patterns: [0, 1], terminal: true }
/// ```
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ModesConfig {
    /// Mode definitions by name
    #[serde(default)]
    pub modes: BTreeMap<String, ModeConfig>,
}

/// One graphics mode
#[derive(Debug, Deserialize, Clone)]
pub struct ModeConfig {
    pub width: usize,
    pub height: usize,

    /// Display pixels per logical pixel, horizontally
    #[serde(default = "default_pixel_width")]
    pub pixel_width: usize,

    /// Hex colors; the Colodore palette when absent
    #[serde(default)]
    pub palette: Option<Vec<String>>,

    /// Layers in execution order; the last must be terminal
    pub layers: Vec<LayerConfig>,
}

fn default_pixel_width() -> usize {
    1
}

/// One reduction pass
#[derive(Debug, Deserialize, Clone)]
pub struct LayerConfig {
    pub cell_width: usize,
    pub cell_height: usize,
    pub bit_patterns: Vec<u8>,

    #[serde(default)]
    pub terminal: bool,
}

impl ModesConfig {
    /// Parse a modes file from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a modes file. Any failure is fatal: a file that was
    /// asked for explicitly never falls back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            modes = config.modes.len(),
            "Loaded modes file"
        );
        Ok(config)
    }

    /// Validate every mode and add it to `registry`, replacing same-named
    /// entries.
    pub fn apply(self, registry: ModeRegistry) -> Result<ModeRegistry, ConfigError> {
        self.modes
            .into_iter()
            .try_fold(registry, |registry, (name, mode)| {
                match mode.to_mode_spec() {
                    Ok(spec) => {
                        if registry.contains(&name) {
                            tracing::debug!(mode = %name, "Overriding built-in mode");
                        }
                        Ok(registry.with_mode(name, spec))
                    }
                    Err(source) => Err(ConfigError::InvalidMode { name, source }),
                }
            })
    }
}

impl ModeConfig {
    pub fn to_mode_spec(&self) -> Result<ModeSpec, QuantError> {
        let palette = match &self.palette {
            Some(colors) => {
                let colors: Vec<&str> = colors.iter().map(String::as_str).collect();
                Palette::from_hex(&colors)?
            }
            None => Palette::colodore(),
        };
        let layers = self
            .layers
            .iter()
            .map(|l| {
                let layer = Layer::new(l.cell_width, l.cell_height, l.bit_patterns.iter().copied());
                if l.terminal {
                    layer.terminal()
                } else {
                    layer
                }
            })
            .collect();
        ModeSpec::new(self.width, self.height, self.pixel_width, palette, layers)
    }
}

/// Built-in modes, extended by the modes file at `path` if one is given.
pub fn load_registry(path: Option<&Path>) -> Result<ModeRegistry, ConfigError> {
    let registry = ModeRegistry::builtin();
    match path {
        Some(path) => ModesConfig::load(path)?.apply(registry),
        None => Ok(registry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BW_MODE: &str = r##"
modes:
  bw:
    width: 32
    height: 16
    palette: ["#000000", "#ffffff"]
    layers:
      - cell_width: 8
        cell_height: 8
        bit_patterns: [0, 1]
        terminal: true
"##;

    #[test]
    fn test_parse_mode_with_defaults() {
        let config = ModesConfig::from_yaml(BW_MODE).unwrap();
        let bw = &config.modes["bw"];
        assert_eq!((bw.width, bw.height, bw.pixel_width), (32, 16, 1));
        assert_eq!(bw.layers[0].bit_patterns, vec![0, 1]);
        assert!(bw.layers[0].terminal);

        let spec = bw.to_mode_spec().unwrap();
        assert_eq!(spec.palette().len(), 2);
        assert_eq!(spec.layers().len(), 1);
    }

    #[test]
    fn test_empty_document_has_no_modes() {
        let config = ModesConfig::from_yaml("{}").unwrap();
        assert!(config.modes.is_empty());
    }

    #[test]
    fn test_apply_adds_and_overrides() {
        let yaml = r#"
modes:
  koala:
    width: 8
    height: 8
    layers:
      - { cell_width: 8, cell_height: 8, bit_patterns: [0, 1, 2, 3], terminal: true }
"#;
        let registry = ModesConfig::from_yaml(BW_MODE)
            .unwrap()
            .apply(ModeRegistry::builtin())
            .unwrap();
        let registry = ModesConfig::from_yaml(yaml)
            .unwrap()
            .apply(registry)
            .unwrap();

        assert!(registry.contains("bw"));
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.get("koala").unwrap().width(), 8);
    }

    #[test]
    fn test_mode_without_terminal_layer_is_rejected() {
        let yaml = r#"
modes:
  broken:
    width: 8
    height: 8
    layers:
      - { cell_width: 8, cell_height: 8, bit_patterns: [0] }
"#;
        let err = ModesConfig::from_yaml(yaml)
            .unwrap()
            .apply(ModeRegistry::builtin())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMode { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_bad_palette_color_is_rejected() {
        let yaml = r##"
modes:
  odd:
    width: 8
    height: 8
    palette: ["#zz0000"]
    layers:
      - { cell_width: 8, cell_height: 8, bit_patterns: [0], terminal: true }
"##;
        let config = ModesConfig::from_yaml(yaml).unwrap();
        assert!(matches!(
            config.modes["odd"].to_mode_spec(),
            Err(QuantError::Palette(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(matches!(
            ModesConfig::from_yaml("modes: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_registry(Some(Path::new("/nonexistent/modes.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_no_file_gives_builtins() {
        assert_eq!(load_registry(None).unwrap().len(), 6);
    }
}
