use super::geometry_error::GeometryError;

/// shapefile input classified once from the files a user supplied, so
/// downstream stages dispatch on a tagged union instead of re-inspecting
/// filename strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryInput {
    /// a compressed archive expected to contain a shapefile set
    ZipArchive(Vec<u8>),
    /// a loose .shp with an optional .dbf attribute table and .shx index
    ShapefileBundle {
        shp: Vec<u8>,
        dbf: Option<Vec<u8>>,
        shx: Option<Vec<u8>>,
    },
    /// a .shp supplied with no companion files
    SingleShp(Vec<u8>),
}

impl GeometryInput {
    /// classifies raw (filename, bytes) pairs from a file selection.
    /// a .zip always wins over loose files; otherwise at least a .shp is
    /// required. extension matching is case-insensitive, and the first
    /// file of each kind wins, with later duplicates ignored.
    pub fn classify(files: Vec<(String, Vec<u8>)>) -> Result<GeometryInput, GeometryError> {
        let supplied_names = files
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut zip: Option<Vec<u8>> = None;
        let mut shp: Option<Vec<u8>> = None;
        let mut dbf: Option<Vec<u8>> = None;
        let mut shx: Option<Vec<u8>> = None;
        for (name, bytes) in files {
            let slot = match extension(&name).as_deref() {
                Some("zip") => &mut zip,
                Some("shp") => &mut shp,
                Some("dbf") => &mut dbf,
                Some("shx") => &mut shx,
                _ => {
                    log::warn!("ignoring file '{name}' with unrecognized extension");
                    continue;
                }
            };
            if slot.is_some() {
                log::warn!("ignoring '{name}', an earlier file of the same kind wins");
            } else {
                *slot = Some(bytes);
            }
        }

        match (zip, shp) {
            (Some(bytes), _) => Ok(GeometryInput::ZipArchive(bytes)),
            (None, Some(shp_bytes)) => {
                if dbf.is_none() && shx.is_none() {
                    Ok(GeometryInput::SingleShp(shp_bytes))
                } else {
                    Ok(GeometryInput::ShapefileBundle {
                        shp: shp_bytes,
                        dbf,
                        shx,
                    })
                }
            }
            (None, None) if dbf.is_some() || shx.is_some() => Err(GeometryError::MissingShpFileError),
            (None, None) => Err(GeometryError::UnsupportedFormatError(supplied_names)),
        }
    }
}

/// lowercased extension of a filename, if it has one
pub(crate) fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}
