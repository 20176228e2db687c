//! Loading base parameters from JSON files.

use crate::error::Result;
use cea_core::SimParams;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a [`SimParams`] from a JSON file and validates it.
///
/// Missing fields fall back to their defaults, so a file containing only
/// `{"alpha": 0.2}` is valid.
pub fn load_params(path: impl AsRef<Path>) -> Result<SimParams> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let params = parse_params(&text)?;
    debug!("Loaded parameters from {}: {:?}", path.display(), params);
    Ok(params)
}

/// Parses and validates a JSON parameter document.
pub fn parse_params(json: &str) -> Result<SimParams> {
    let params: SimParams = serde_json::from_str(json)?;
    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_partial_document() {
        let p = parse_params(r#"{"alpha": 0.25, "initial_autonomy": 0.4}"#).unwrap();
        assert_eq!(p.alpha, 0.25);
        assert_eq!(p.initial_autonomy, 0.4);
        assert_eq!(p.step_count, 100);
    }

    #[test]
    fn test_channels_document() {
        let p = parse_params(
            r#"{"correction_rates": [{"name": "fact_check", "rate": 0.1}, {"name": "human", "rate": 0.02}]}"#,
        )
        .unwrap();
        assert_eq!(p.correction_rates.len(), 2);
        assert!((p.total_correction() - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            parse_params(r#"{"step_count": 0}"#),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            parse_params(r#"{"alpha": "high"}"#),
            Err(SimError::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_params("/nonexistent/cea/params.json"),
            Err(SimError::Io(_))
        ));
    }
}
