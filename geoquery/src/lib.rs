//! # geoquery
//!
//! Conversion de géométries GeoJSON (Point, LineString, Polygon) en
//! fragments de query string pour une API de cartes statiques.
//!
//! ## Features
//!
//! - Décodage d'un objet géométrie seul ou d'un tableau d'objets
//! - Fragments `l=` (couches), `pl=` (formes), `pt=` (marqueurs)
//! - Coordonnées en décimal fixe (6 chiffres), jamais de notation
//!   scientifique
//!
//! ## Usage
//!
//! ```rust,ignore
//! let geometries = geoquery::parse(br#"{"type":"Point","coordinates":[30.5,50.4]}"#)?;
//! let fragment = geoquery::encode::label_fragment(&geometries, "vkgrm");
//! assert_eq!(fragment, "pt=30.500000,50.400000,vkgrm");
//! ```

pub mod encode;
pub mod error;

pub use error::GeoQueryError;
pub use geojson::{Geometry, Value};

/// Décode des octets GeoJSON en liste de géométries.
///
/// Accepte soit un tableau JSON d'objets géométrie, soit un objet seul
/// (enveloppé alors dans une liste à un élément). Le décodage tableau est
/// tenté en premier.
///
/// # Errors
///
/// Retourne [`GeoQueryError::Parse`] si aucune des deux formes ne décode.
pub fn parse(data: &[u8]) -> Result<Vec<Geometry>, GeoQueryError> {
    match serde_json::from_slice::<Vec<Geometry>>(data) {
        Ok(geometries) => Ok(geometries),
        Err(_) => match serde_json::from_slice::<Geometry>(data) {
            Ok(geometry) => Ok(vec![geometry]),
            Err(e) => Err(GeoQueryError::Parse(e)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_object() {
        let geometries = parse(br#"{"type":"Point","coordinates":[30.5,50.4]}"#).unwrap();

        assert_eq!(geometries.len(), 1);
        assert_eq!(geometries[0].value, Value::Point(vec![30.5, 50.4]));
    }

    #[test]
    fn test_parse_array() {
        let data = br#"[
            {"type":"Point","coordinates":[30.5,50.4]},
            {"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.0]]}
        ]"#;
        let geometries = parse(data).unwrap();

        assert_eq!(geometries.len(), 2);
        assert!(matches!(geometries[0].value, Value::Point(_)));
        assert!(matches!(geometries[1].value, Value::LineString(_)));
    }

    #[test]
    fn test_parse_single_equivalent_to_wrapped_array() {
        let single = parse(br#"{"type":"Point","coordinates":[30.5,50.4]}"#).unwrap();
        let array = parse(br#"[{"type":"Point","coordinates":[30.5,50.4]}]"#).unwrap();

        assert_eq!(single, array);
    }

    #[test]
    fn test_parse_polygon() {
        let data = br#"{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}"#;
        let geometries = parse(data).unwrap();

        assert!(matches!(geometries[0].value, Value::Polygon(_)));
    }

    #[test]
    fn test_parse_invalid_input() {
        assert!(matches!(
            parse(b"not geojson at all"),
            Err(GeoQueryError::Parse(_))
        ));
        assert!(matches!(parse(b""), Err(GeoQueryError::Parse(_))));
        assert!(matches!(
            parse(br#"{"foo":"bar"}"#),
            Err(GeoQueryError::Parse(_))
        ));
    }
}
