//! Client HTTP pour l'API Static Maps

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::debug;

use geoquery::encode::{build_query, label_fragment, layer_fragment, shape_fragment, ShapeStyle};

use crate::error::{ApiError, StaticMapError};
use crate::options::{
    GetImageOptions, DEFAULT_FILL_COLOR, DEFAULT_LABEL_TYPE, DEFAULT_LINE_COLOR,
    DEFAULT_LINE_THICKNESS, DEFAULT_MAPTYPE,
};

/// Hôte par défaut de l'API Static Maps de Yandex
pub const DEFAULT_HOST: &str = "http://static-maps.yandex.ru/1.x/";

/// Configuration du client, fixée à la construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapImageOptions {
    /// URL de base du service ; la query string y est concaténée telle
    /// quelle
    pub host: String,
}

impl Default for MapImageOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Client de l'API Static Maps
///
/// Immuable après construction : plusieurs appels concurrents sur le même
/// client sont sûrs. Un seul appel réseau sortant par invocation de
/// [`MapImage::get_image`], sans retry.
#[derive(Debug, Clone)]
pub struct MapImage {
    host: String,
    http: Client,
}

impl MapImage {
    /// Crée un client visant l'hôte par défaut
    pub fn new() -> Result<Self, StaticMapError> {
        Self::with_options(MapImageOptions::default())
    }

    /// Crée un client avec une configuration explicite
    pub fn with_options(options: MapImageOptions) -> Result<Self, StaticMapError> {
        let http = Client::builder().build()?;

        Ok(Self {
            host: options.host,
            http,
        })
    }

    /// Récupère l'image rendue pour les géométries fournies.
    ///
    /// Retourne la réponse HTTP sans consommer son corps : le flux d'octets
    /// de l'image est remis tel quel à l'appelant (elle implémente
    /// `std::io::Read`).
    ///
    /// # Errors
    ///
    /// - [`StaticMapError::MissingGeoJson`] si `geo_json` est absent ou
    ///   vide (aucun appel réseau n'est effectué)
    /// - [`StaticMapError::Parse`] si le GeoJSON ne décode pas
    /// - [`StaticMapError::Transport`] en cas d'échec réseau
    /// - [`StaticMapError::Api`] si le fournisseur répond avec un corps
    ///   d'erreur XML (ou sans Content-Type)
    pub fn get_image(&self, options: GetImageOptions) -> Result<Response, StaticMapError> {
        let geo_json = options
            .geo_json
            .as_deref()
            .filter(|data| !data.is_empty())
            .ok_or(StaticMapError::MissingGeoJson)?;

        let geometries = geoquery::parse(geo_json)?;

        let maptype = options.maptype.as_deref().unwrap_or(DEFAULT_MAPTYPE);
        let label_type = options.label_type.as_deref().unwrap_or(DEFAULT_LABEL_TYPE);
        let style = ShapeStyle {
            line_color: options
                .line_color
                .clone()
                .unwrap_or_else(|| DEFAULT_LINE_COLOR.to_string()),
            fill_color: options
                .fill_color
                .clone()
                .unwrap_or_else(|| DEFAULT_FILL_COLOR.to_string()),
            thickness: options.line_thickness.unwrap_or(DEFAULT_LINE_THICKNESS),
        };

        let mut fragments = vec![
            layer_fragment(maptype),
            shape_fragment(&geometries, &style),
            label_fragment(&geometries, label_type),
        ];
        if let (Some(width), Some(height)) = (options.size_x, options.size_y) {
            fragments.push(format!("size={width},{height}"));
        }
        if let Some(zoom) = options.zoom {
            fragments.push(format!("z={zoom}"));
        }

        let url = format!("{}{}", self.host, build_query(&fragments));
        debug!(url = %url, "Requesting static map");

        let response = self.http.get(&url).send()?;

        if is_error_payload(&response) {
            let body = response.bytes()?;
            return Err(StaticMapError::Api(ApiError::from_xml(&body)));
        }

        Ok(response)
    }
}

/// Une réponse sans Content-Type (ou illisible), ou de type média XML,
/// porte un corps d'erreur et non une image
fn is_error_payload(response: &Response) -> bool {
    let header = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    match header {
        None => true,
        Some(value) => {
            // Paramètres du type média ignorés (ex: "; charset=utf-8")
            let media_type = value.split(';').next().unwrap_or("").trim();
            matches!(media_type, "text/xml" | "application/xml")
        }
    }
}
