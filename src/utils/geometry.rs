use crate::models::bounds::GeoBounds;
use geojson::{Feature, GeoJson, Geometry, Value};

/// Keeps features whose string property starts with a prefix.
#[derive(Debug, Clone)]
pub struct FeatureFilter {
    pub property: String,
    pub prefix: String,
}

impl FeatureFilter {
    pub fn matches(&self, feature: &Feature) -> bool {
        feature
            .property(&self.property)
            .and_then(|v| v.as_str())
            .map(|v| v.starts_with(&self.prefix))
            .unwrap_or(false)
    }
}

/// Bounding rectangle of every coordinate in the document, restricted to
/// matching features when a filter is given. `None` when nothing matched.
pub fn feature_bounds(geojson: &GeoJson, filter: Option<&FeatureFilter>) -> Option<GeoBounds> {
    let mut bounds = None;
    match geojson {
        GeoJson::FeatureCollection(collection) => {
            for feature in &collection.features {
                extend_feature(&mut bounds, feature, filter);
            }
        }
        GeoJson::Feature(feature) => extend_feature(&mut bounds, feature, filter),
        GeoJson::Geometry(geometry) => {
            if filter.is_none() {
                extend_geometry(&mut bounds, geometry);
            }
        }
    }
    bounds
}

fn extend_feature(bounds: &mut Option<GeoBounds>, feature: &Feature, filter: Option<&FeatureFilter>) {
    if filter.is_some_and(|f| !f.matches(feature)) {
        return;
    }
    if let Some(geometry) = &feature.geometry {
        extend_geometry(bounds, geometry);
    }
}

fn extend_geometry(bounds: &mut Option<GeoBounds>, geometry: &Geometry) {
    match &geometry.value {
        Value::Point(p) => extend_position(bounds, p),
        Value::MultiPoint(points) | Value::LineString(points) => {
            points.iter().for_each(|p| extend_position(bounds, p));
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            lines.iter().flatten().for_each(|p| extend_position(bounds, p));
        }
        Value::MultiPolygon(polygons) => {
            polygons
                .iter()
                .flatten()
                .flatten()
                .for_each(|p| extend_position(bounds, p));
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                extend_geometry(bounds, g);
            }
        }
    }
}

fn extend_position(bounds: &mut Option<GeoBounds>, position: &[f64]) {
    let (Some(&x), Some(&y)) = (position.first(), position.get(1)) else {
        return;
    };
    match bounds {
        Some(b) => b.include(x, y),
        None => *bounds = Some(GeoBounds::point(x, y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"NUTS_ID": "SE11"},
             "geometry": {"type": "Polygon", "coordinates": [[[10,20],[30,20],[30,40],[10,20]]]}},
            {"type": "Feature", "properties": {"NUTS_ID": "SE21"},
             "geometry": {"type": "MultiPolygon", "coordinates": [[[[5,25],[12,25],[12,45],[5,25]]]]}},
            {"type": "Feature", "properties": {"NUTS_ID": "DK01"},
             "geometry": {"type": "Point", "coordinates": [-100, -100]}},
            {"type": "Feature", "properties": {"NUTS_ID": 7}, "geometry": null}
        ]
    }"#;

    fn regions() -> GeoJson {
        REGIONS.parse().unwrap()
    }

    #[test]
    fn test_bounds_of_all_features() {
        let b = feature_bounds(&regions(), None).unwrap();
        assert_eq!(b, GeoBounds::from((-100.0, -100.0, 30.0, 45.0)));
    }

    #[test]
    fn test_bounds_filtered_by_prefix() {
        let filter = FeatureFilter {
            property: "NUTS_ID".into(),
            prefix: "SE".into(),
        };
        let b = feature_bounds(&regions(), Some(&filter)).unwrap();
        assert_eq!(b, GeoBounds::from((5.0, 20.0, 30.0, 45.0)));
        assert_eq!(b.to_string(), "5 20 30 45");
    }

    #[test]
    fn test_no_match_yields_none() {
        let filter = FeatureFilter {
            property: "NUTS_ID".into(),
            prefix: "FI".into(),
        };
        assert!(feature_bounds(&regions(), Some(&filter)).is_none());
    }

    #[test]
    fn test_bare_geometry() {
        let g: GeoJson = r#"{"type": "LineString", "coordinates": [[1,2],[3,-4]]}"#
            .parse()
            .unwrap();
        assert_eq!(
            feature_bounds(&g, None).unwrap(),
            GeoBounds::from((1.0, -4.0, 3.0, 2.0))
        );
    }
}
