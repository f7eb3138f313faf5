//! Types d'erreurs pour le crate geoquery

use thiserror::Error;

/// Erreurs pouvant survenir lors du décodage GeoJSON
#[derive(Debug, Error)]
pub enum GeoQueryError {
    /// Les octets ne sont décodables ni comme tableau de géométries,
    /// ni comme géométrie seule
    #[error("GeoJSON parse error: {0}")]
    Parse(#[source] serde_json::Error),
}
