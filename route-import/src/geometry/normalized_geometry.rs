use geojson::Feature;

/// the single route geometry produced by ingestion: one GeoJSON feature
/// with LineString or MultiLineString geometry and empty properties,
/// ready for submission to the route persistence service.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGeometry(Feature);

impl NormalizedGeometry {
    /// wraps a validated line geometry as a feature. attributes from the
    /// source shapefile are always discarded, so properties start empty.
    pub(crate) fn new(geometry: geo::Geometry<f64>) -> NormalizedGeometry {
        let feature = Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&geometry)),
            id: None,
            properties: Some(serde_json::Map::new()),
            foreign_members: None,
        };
        NormalizedGeometry(feature)
    }

    pub fn feature(&self) -> &Feature {
        &self.0
    }

    pub fn into_feature(self) -> Feature {
        self.0
    }
}
