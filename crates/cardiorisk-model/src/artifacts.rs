//! Model artifact sources.
//!
//! Provides an abstraction over where the serialized weights and scaler
//! come from, so the predictor is not coupled to the filesystem.

use std::path::PathBuf;
use serde::Deserialize;
use cardiorisk_common::ArtifactLoadError;
use crate::scaler::StandardScaler;
use crate::weights::ModelParameters;

/// Raw bytes of one serialized artifact.
///
/// Implementations can use:
/// - a file on disk (production)
/// - an in-memory buffer (testing, embedded artifacts)
pub trait ArtifactSource: Send + Sync {
    fn read_bytes(&self) -> Result<Vec<u8>, ArtifactLoadError>;

    /// Human-readable origin, used in errors and logs.
    fn describe(&self) -> String;
}

// ── File-backed source ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FileArtifact {
    path: PathBuf,
}

impl FileArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArtifactSource for FileArtifact {
    fn read_bytes(&self) -> Result<Vec<u8>, ArtifactLoadError> {
        std::fs::read(&self.path).map_err(|e| ArtifactLoadError::Unreadable {
            source_name: self.describe(),
            reason: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ── In-memory source ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct InMemoryArtifact {
    name: String,
    bytes: Vec<u8>,
}

impl InMemoryArtifact {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl ArtifactSource for InMemoryArtifact {
    fn read_bytes(&self) -> Result<Vec<u8>, ArtifactLoadError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<memory:{}>", self.name)
    }
}

// ── Parsing ──────────────────────────────────────────────────────────────────

/// `{"weights": [..12], "bias": b}`
#[derive(Debug, Deserialize)]
struct WeightsDocument {
    weights: Vec<f64>,
    bias: f64,
}

/// `{"feature_names": [..6], "mean": [..6], "scale": [..6]}`
#[derive(Debug, Deserialize)]
struct ScalerDocument {
    feature_names: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

fn parse<T: for<'de> Deserialize<'de>>(source: &dyn ArtifactSource) -> Result<T, ArtifactLoadError> {
    let bytes = source.read_bytes()?;
    serde_json::from_slice(&bytes).map_err(|e| ArtifactLoadError::Malformed {
        source_name: source.describe(),
        reason: e.to_string(),
    })
}

/// Load and validate the 12 weights and bias.
pub fn load_parameters(source: &dyn ArtifactSource) -> Result<ModelParameters, ArtifactLoadError> {
    let doc: WeightsDocument = parse(source)?;
    let params = ModelParameters::from_slice(&doc.weights, doc.bias)
        .map_err(|reason| ArtifactLoadError::shape(source.describe(), reason))?;
    tracing::info!("Loaded model weights from {}", source.describe());
    Ok(params)
}

/// Load and validate the six-feature scaler.
pub fn load_scaler(source: &dyn ArtifactSource) -> Result<StandardScaler, ArtifactLoadError> {
    let doc: ScalerDocument = parse(source)?;
    let scaler = StandardScaler::from_columns(&doc.feature_names, &doc.mean, &doc.scale)
        .map_err(|reason| ArtifactLoadError::shape(source.describe(), reason))?;
    tracing::info!("Loaded feature scaler from {}", source.describe());
    Ok(scaler)
}
