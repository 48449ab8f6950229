#[derive(thiserror::Error, Debug)]
pub enum GeometryError {
    #[error("none of the supplied files is a .zip or .shp: {0}")]
    UnsupportedFormatError(String),
    #[error("input is missing the required .shp geometry file")]
    MissingShpFileError,
    #[error("no .dbf attribute file supplied and the .shp could not be decoded alone: {0}")]
    MissingAttributeFileError(String),
    #[error("decoded shapefile contains no features")]
    EmptyFeatureCollectionError,
    #[error("decoded geometry is not usable: {0}")]
    InvalidGeometryError(String),
    #[error("failed to decode shapefile input: {0}")]
    DecodeFailureError(#[from] shapefile::Error),
    #[error("failed to decode .dbf attribute table: {0}")]
    AttributeDecodeError(#[from] shapefile::dbase::Error),
    #[error("failed to read zip archive: {0}")]
    ZipReadError(#[from] zip::result::ZipError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
