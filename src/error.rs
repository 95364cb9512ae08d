use std::path::PathBuf;

use retro_quant::QuantError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to decode {}: {}", .path.display(), .reason)]
    Decode { path: PathBuf, reason: String },

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown mode '{name}' (available: {available})")]
    UnknownMode { name: String, available: String },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Quantization error: {0}")]
    Quantize(#[from] QuantError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read modes file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse modes file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Mode '{name}': {source}")]
    InvalidMode { name: String, source: QuantError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_lists_alternatives() {
        let error = ConvertError::UnknownMode {
            name: "vic20".to_string(),
            available: "hires, koala".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown mode 'vic20' (available: hires, koala)"
        );
    }

    #[test]
    fn test_decode_error_names_path() {
        let error = ConvertError::Decode {
            path: PathBuf::from("in.png"),
            reason: "truncated".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to decode in.png: truncated");
    }

    #[test]
    fn test_encode_error() {
        let error = ConvertError::Encode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_quantize_error_from() {
        let error: ConvertError = QuantError::EmptyPalette.into();
        match error {
            ConvertError::Quantize(QuantError::EmptyPalette) => {}
            _ => panic!("Expected Quantize variant"),
        }
    }

    #[test]
    fn test_invalid_mode_error() {
        let error = ConfigError::InvalidMode {
            name: "tiny".to_string(),
            source: QuantError::InvalidModeSpec("at least one layer is required".into()),
        };
        assert_eq!(
            error.to_string(),
            "Mode 'tiny': Invalid mode spec: at least one layer is required"
        );
    }
}
