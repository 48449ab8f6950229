use crate::geometry::{normalize, GeometryInput};
use crate::validity::{check_overlap, IntervalCandidate, OverlapCheckResult, ValidityInterval};
use chrono::NaiveDate;
use clap::{value_parser, Subcommand};
use itertools::Itertools;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum ImportOperation {
    /// normalize a shapefile input (.zip, .shp+.dbf[+.shx], or a bare
    /// .shp) into a single GeoJSON feature
    Normalize {
        /// input files; a .zip is preferred when present, otherwise at
        /// least a .shp is required
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// write the feature to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// check a candidate validity window against existing windows loaded
    /// from a CSV file with key,start,end columns
    CheckOverlap {
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        start: Option<NaiveDate>,
        /// omit for an open-ended window
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        end: Option<NaiveDate>,
        /// CSV file of existing windows for the same owning key; an empty
        /// end field marks an open-ended window
        #[arg(long)]
        intervals_file: String,
        /// key to skip when editing a record against its own prior window
        #[arg(long)]
        exclude: Option<String>,
    },
}

impl ImportOperation {
    pub fn run(&self) {
        match self {
            ImportOperation::Normalize { files, output } => {
                let named = files
                    .iter()
                    .map(|path| {
                        let bytes = fs::read(path)
                            .unwrap_or_else(|e| panic!("failed reading input file {path:?}: {e}"));
                        let name = path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or_default()
                            .to_string();
                        (name, bytes)
                    })
                    .collect_vec();
                let input =
                    GeometryInput::classify(named).expect("failed classifying input files");
                let normalized = normalize(input).expect("failed normalizing route geometry");
                let json = serde_json::to_string_pretty(normalized.feature())
                    .expect("failed serializing GeoJSON feature");
                match output {
                    Some(path) => fs::write(path, json)
                        .unwrap_or_else(|e| panic!("failed writing {path:?}: {e}")),
                    None => println!("{json}"),
                }
            }
            ImportOperation::CheckOverlap {
                start,
                end,
                intervals_file,
                exclude,
            } => {
                let existing =
                    intervals_from_csv(intervals_file).expect("failed reading intervals file");
                let candidate = IntervalCandidate {
                    start: *start,
                    end: *end,
                };
                match check_overlap(&candidate, &existing, exclude.as_deref()) {
                    Ok(OverlapCheckResult::NoConflict) => println!("no conflict"),
                    Ok(OverlapCheckResult::Conflict(interval)) => {
                        let end = interval
                            .end
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| String::from("open-ended"));
                        eprintln!(
                            "conflict with window '{}' [{} to {}]",
                            interval.key, interval.start, end
                        );
                        std::process::exit(1);
                    }
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(2);
                    }
                }
            }
        }
    }
}

/// reads existing validity windows from a CSV file with key,start,end
/// columns
fn intervals_from_csv(file: &str) -> Result<Vec<ValidityInterval>, csv::Error> {
    let reader = csv::ReaderBuilder::new().from_path(file)?;
    reader.into_deserialize::<ValidityInterval>().collect()
}
