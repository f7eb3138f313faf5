//! Options de requête et valeurs par défaut du fournisseur

use serde::{Deserialize, Serialize};

/// Couche de carte par défaut
pub const DEFAULT_MAPTYPE: &str = "map";

/// Style de marqueur par défaut
pub const DEFAULT_LABEL_TYPE: &str = "vkgrm";

/// Couleur de trait par défaut (rouge, opaque)
pub const DEFAULT_LINE_COLOR: &str = "ec473fFF";

/// Couleur de remplissage par défaut (vert, translucide)
pub const DEFAULT_FILL_COLOR: &str = "00FF0020";

/// Épaisseur de trait par défaut, en pixels
pub const DEFAULT_LINE_THICKNESS: u32 = 1;

/// Options d'une requête d'image
///
/// Tous les champs de style sont optionnels : `None` signifie "valeur par
/// défaut" (du fournisseur pour `size_x`/`size_y`/`zoom`, de ce module
/// pour le reste). Seul `geo_json` est obligatoire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetImageOptions {
    /// Largeur de l'image en pixels (défaut fournisseur : 650, max 650)
    pub size_x: Option<u32>,

    /// Hauteur de l'image en pixels (défaut fournisseur : 450, max 450)
    pub size_y: Option<u32>,

    /// Niveau de zoom, de 0 à 17
    pub zoom: Option<u8>,

    /// Couches de la carte : sous-ensemble de {map, sat, skl, trf},
    /// combinables séparées par des virgules
    pub maptype: Option<String>,

    /// Code de style des marqueurs, propre au fournisseur
    pub label_type: Option<String>,

    /// Épaisseur de trait en pixels
    pub line_thickness: Option<u32>,

    /// Couleur de trait, 8 chiffres hexadécimaux RGBA
    pub line_color: Option<String>,

    /// Couleur de remplissage, même format
    pub fill_color: Option<String>,

    /// GeoJSON : un objet géométrie seul ou un tableau d'objets.
    /// Paramètre obligatoire, sans valeur par défaut.
    pub geo_json: Option<Vec<u8>>,
}
