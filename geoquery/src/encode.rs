//! Encodage des géométries en fragments de requête Static Maps
//!
//! Chaque fonction produit un fragment `clé=valeur` de la query string.
//! Un fragment vide signifie "rien à afficher" et doit être omis de la
//! requête finale (voir [`build_query`]).

use std::fmt::Write;

use geojson::{Geometry, Value};

/// Style appliqué aux polylignes et polygones
#[derive(Debug, Clone)]
pub struct ShapeStyle {
    /// Couleur de trait, 8 chiffres hexadécimaux RGBA (ex: "ec473fFF")
    pub line_color: String,

    /// Couleur de remplissage des polygones, même format
    pub fill_color: String,

    /// Épaisseur de trait en pixels
    pub thickness: u32,
}

/// Fragment `l=` : couches de la carte
///
/// `maptype` peut combiner plusieurs couches séparées par des virgules
/// (ex: "map,trf").
pub fn layer_fragment(maptype: &str) -> String {
    format!("l={maptype}")
}

/// Fragment `pl=` : polylignes et polygones, dans l'ordre d'entrée
///
/// Les géométries d'un autre type, les LineString/Polygon sans point et
/// les coordonnées malformées (longueur != 2) sont ignorées. Retourne une
/// chaîne vide si aucune forme n'a été émise.
pub fn shape_fragment(geometries: &[Geometry], style: &ShapeStyle) -> String {
    let mut shapes = Vec::new();

    for geometry in geometries {
        match &geometry.value {
            Value::LineString(points) if !points.is_empty() => {
                let mut shape = format!("c:{},w:{},", style.line_color, style.thickness);
                shape.push_str(&encode_line(points));
                shapes.push(shape);
            }
            Value::Polygon(rings) if !rings.is_empty() => {
                let mut shape = format!(
                    "c:{},f:{},w:{},",
                    style.line_color, style.fill_color, style.thickness
                );
                let encoded: Vec<String> = rings.iter().map(|ring| encode_ring(ring)).collect();
                shape.push_str(&encoded.join(";"));
                shapes.push(shape);
            }
            _ => {}
        }
    }

    if shapes.is_empty() {
        String::new()
    } else {
        format!("pl={}", shapes.join("~"))
    }
}

/// Fragment `pt=` : marqueurs ponctuels, dans l'ordre d'entrée
///
/// Seuls les Point à exactement 2 composantes sont retenus. Retourne une
/// chaîne vide s'il n'y a aucun point.
pub fn label_fragment(geometries: &[Geometry], label_type: &str) -> String {
    let labels: Vec<String> = geometries
        .iter()
        .filter_map(|geometry| match &geometry.value {
            Value::Point(coords) => match coords.as_slice() {
                [lon, lat] => Some(format!(
                    "{},{},{}",
                    format_coord(*lon),
                    format_coord(*lat),
                    label_type
                )),
                _ => None,
            },
            _ => None,
        })
        .collect();

    if labels.is_empty() {
        String::new()
    } else {
        format!("pt={}", labels.join("~"))
    }
}

/// Assemble la query string finale : `?` suivi des fragments non vides
/// joints par `&`
pub fn build_query(fragments: &[String]) -> String {
    let parts: Vec<&str> = fragments
        .iter()
        .map(|fragment| fragment.as_str())
        .filter(|fragment| !fragment.is_empty())
        .collect();

    format!("?{}", parts.join("&"))
}

/// Points d'une LineString, `lon,lat` joints par des virgules
fn encode_line(points: &[Vec<f64>]) -> String {
    let encoded: Vec<String> = points.iter().filter_map(|p| encode_point(p)).collect();
    encoded.join(",")
}

/// Un anneau de polygone : chaque point suivi d'une virgule, puis le
/// premier point répété une fois pour fermer l'anneau (convention du
/// fournisseur)
fn encode_ring(ring: &[Vec<f64>]) -> String {
    let mut out = String::new();

    for point in ring {
        if let Some(encoded) = encode_point(point) {
            // write! sur String est infaillible
            let _ = write!(out, "{encoded},");
        }
    }
    if let Some(first) = ring.first().and_then(|p| encode_point(p)) {
        out.push_str(&first);
    }

    out
}

/// `lon,lat` si la coordonnée a exactement 2 composantes, None sinon
fn encode_point(coords: &[f64]) -> Option<String> {
    match coords {
        [lon, lat] => Some(format!("{},{}", format_coord(*lon), format_coord(*lat))),
        _ => None,
    }
}

/// Décimal fixe à 6 chiffres, jamais de notation scientifique
fn format_coord(value: f64) -> String {
    format!("{value:.6}")
}
