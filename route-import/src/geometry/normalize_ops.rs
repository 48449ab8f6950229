use std::io::{Cursor, Read, Seek};

use geo_types::MultiLineString;
use itertools::Itertools;
use shapefile::{Shape, ShapeReader};

use super::geometry_input::extension;
use super::{GeometryError, GeometryInput, NormalizedGeometry};

/// converts classified shapefile input into a single normalized GeoJSON
/// feature. only the first decoded feature is retained, its attributes
/// are discarded, and a single-part polyline is emitted as a LineString
/// while a multi-part one becomes a MultiLineString. coordinates are
/// forwarded as decoded, never rounded.
pub fn normalize(input: GeometryInput) -> Result<NormalizedGeometry, GeometryError> {
    let shapes = decode(input)?;
    let first = shapes
        .into_iter()
        .next()
        .ok_or(GeometryError::EmptyFeatureCollectionError)?;
    let geometry = into_line_geometry(first)?;
    Ok(NormalizedGeometry::new(geometry))
}

fn decode(input: GeometryInput) -> Result<Vec<Shape>, GeometryError> {
    match input {
        GeometryInput::ZipArchive(bytes) => decode_zip(&bytes),
        GeometryInput::ShapefileBundle {
            shp,
            dbf: Some(dbf),
            shx,
        } => decode_bundle(&shp, &dbf, shx.as_deref()),
        // a bundle that arrived without its attribute table behaves like
        // a lone .shp: tolerate geometry-only output
        GeometryInput::ShapefileBundle { shp, dbf: None, .. } => decode_shp_alone(&shp),
        GeometryInput::SingleShp(shp) => decode_shp_alone(&shp),
    }
}

/// locates the shapefile set inside a zip archive and decodes it. the
/// first entry of each kind wins; a .dbf entry is optional here since
/// archive input tolerates geometry-only output.
fn decode_zip(bytes: &[u8]) -> Result<Vec<Shape>, GeometryError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut shp_name: Option<String> = None;
    let mut dbf_name: Option<String> = None;
    let mut shx_name: Option<String> = None;
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        let slot = match extension(entry.name()).as_deref() {
            Some("shp") => &mut shp_name,
            Some("dbf") => &mut dbf_name,
            Some("shx") => &mut shx_name,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(entry.name().to_string());
        }
    }

    let shp_name = shp_name.ok_or(GeometryError::MissingShpFileError)?;
    log::debug!("decoding archive entry '{shp_name}'");
    let shp = read_zip_entry(&mut archive, &shp_name)?;
    let shx = match shx_name {
        Some(name) => Some(read_zip_entry(&mut archive, &name)?),
        None => None,
    };
    match dbf_name {
        Some(name) => {
            let dbf = read_zip_entry(&mut archive, &name)?;
            decode_bundle(&shp, &dbf, shx.as_deref())
        }
        None => {
            let reader = ShapeReader::new(Cursor::new(shp.as_slice()))?;
            Ok(reader.read()?)
        }
    }
}

fn read_zip_entry<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    name: &str,
) -> Result<Vec<u8>, GeometryError> {
    let mut entry = archive.by_name(name)?;
    // the declared entry size is untrusted, let read_to_end grow the buffer
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}

/// decodes a .shp paired with its .dbf attribute table, using the .shx
/// index when one was supplied
fn decode_bundle(
    shp: &[u8],
    dbf: &[u8],
    shx: Option<&[u8]>,
) -> Result<Vec<Shape>, GeometryError> {
    let shape_reader = match shx {
        Some(index) => ShapeReader::with_shx(Cursor::new(shp), Cursor::new(index))?,
        None => ShapeReader::new(Cursor::new(shp))?,
    };
    let dbase_reader = shapefile::dbase::Reader::new(Cursor::new(dbf))?;
    let mut reader = shapefile::Reader::new(shape_reader, dbase_reader);
    let pairs = reader.read()?;
    Ok(pairs.into_iter().map(|(shape, _)| shape).collect_vec())
}

/// fallback decode for a .shp with no attribute table. a failure here is
/// reported as a missing .dbf so the caller can prompt the user to supply
/// the full file set.
fn decode_shp_alone(shp: &[u8]) -> Result<Vec<Shape>, GeometryError> {
    let read = ShapeReader::new(Cursor::new(shp)).and_then(|reader| reader.read());
    read.map_err(|e| GeometryError::MissingAttributeFileError(format!("{e}")))
}

/// converts the retained shape into a line geometry, rejecting
/// non-polyline shapes and empty or non-finite coordinates
fn into_line_geometry(shape: Shape) -> Result<geo::Geometry<f64>, GeometryError> {
    let multi: MultiLineString<f64> = match shape {
        Shape::Polyline(p) => p
            .try_into()
            .map_err(|e| GeometryError::InvalidGeometryError(format!("{e}")))?,
        Shape::PolylineM(p) => p
            .try_into()
            .map_err(|e| GeometryError::InvalidGeometryError(format!("{e}")))?,
        Shape::PolylineZ(p) => p
            .try_into()
            .map_err(|e| GeometryError::InvalidGeometryError(format!("{e}")))?,
        other => {
            return Err(GeometryError::InvalidGeometryError(format!(
                "unexpected shape type {}, route geometry must be polyline",
                other.shapetype()
            )))
        }
    };

    if multi.0.is_empty() || multi.0.iter().all(|line| line.0.is_empty()) {
        return Err(GeometryError::InvalidGeometryError(
            "geometry has no coordinates".to_string(),
        ));
    }
    let finite = multi
        .0
        .iter()
        .flat_map(|line| line.0.iter())
        .all(|c| c.x.is_finite() && c.y.is_finite());
    if !finite {
        return Err(GeometryError::InvalidGeometryError(
            "geometry contains non-finite coordinates".to_string(),
        ));
    }

    let mut parts = multi.0;
    if parts.len() == 1 {
        Ok(geo::Geometry::LineString(parts.remove(0)))
    } else {
        Ok(geo::Geometry::MultiLineString(MultiLineString(parts)))
    }
}
