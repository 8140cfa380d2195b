pub mod map_renderer;
pub use map_renderer::{MapDocument, MapRenderer, Polyline};

pub mod leaflet;
pub use leaflet::LeafletRenderer;
