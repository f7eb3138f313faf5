//! Types d'erreurs pour le crate staticmap

use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use geoquery::GeoQueryError;

/// Erreurs pouvant survenir lors de la récupération d'une image
#[derive(Debug, Error)]
pub enum StaticMapError {
    /// Le paramètre GeoJSON est obligatoire et n'a pas été fourni
    #[error("GeoJson parameter is missing or empty")]
    MissingGeoJson,

    /// GeoJSON malformé
    #[error(transparent)]
    Parse(#[from] GeoQueryError),

    /// Échec réseau ou HTTP
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Le fournisseur a répondu avec un corps d'erreur XML
    #[error("map API returned an error: {0}")]
    Api(ApiError),
}

/// Erreur structurée renvoyée par le fournisseur
///
/// Le corps de réponse est un document XML avec deux champs, `status`
/// et `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub message: String,
}

impl ApiError {
    /// Décode un corps d'erreur XML.
    ///
    /// Un échec de décodage n'est jamais propagé : il est loggé et une
    /// erreur à valeurs vides est retournée, afin que l'appelant reçoive
    /// toujours une `ApiError` quand la réponse a été classée en erreur.
    pub fn from_xml(data: &[u8]) -> Self {
        match quick_xml::de::from_reader(data) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Failed to decode XML error payload: {e}");
                Self::default()
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ status: \"{}\", message: \"{}\" }}",
            self.status, self.message
        )
    }
}
