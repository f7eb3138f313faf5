//! # staticmap
//!
//! Client pour l'API Static Maps de Yandex : convertit des géométries
//! GeoJSON en paramètres de requête, effectue un GET synchrone et retourne
//! le flux d'octets de l'image rendue, ou l'erreur structurée du
//! fournisseur.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use staticmap::{GetImageOptions, MapImage};
//!
//! let client = MapImage::new()?;
//! let mut image = client.get_image(GetImageOptions {
//!     size_x: Some(650),
//!     size_y: Some(450),
//!     geo_json: Some(br#"{"type":"Point","coordinates":[30.5,50.4]}"#.to_vec()),
//!     ..GetImageOptions::default()
//! })?;
//!
//! let mut file = std::fs::File::create("map.png")?;
//! std::io::copy(&mut image, &mut file)?;
//! ```

pub mod client;
pub mod error;
pub mod options;

pub use client::{MapImage, MapImageOptions, DEFAULT_HOST};
pub use error::{ApiError, StaticMapError};
pub use options::GetImageOptions;
