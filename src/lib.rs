use std::path::PathBuf;

#[macro_use]
extern crate lazy_static;

use colored::Colorize;
use tracing::{debug, info, warn};

pub mod alias;
mod cli;
pub use cli::Args;
pub mod coordinates;
pub use coordinates::{CoordinateSource, Hemisphere, ResolvedCoordinate};
mod error;
pub use error::Error;
pub mod exiftool;
pub use exiftool::{ExifTool, TagEditor};
pub mod logging;

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AliasesListed,
    NothingToDo,
    Written(usize),
}

/// What the user asked for, with the coordinate source already decided.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub files: Vec<PathBuf>,
    pub source: CoordinateSource,
    pub force: bool,
    pub overwrite: bool,
    pub do_nothing: bool,
}

impl TryFrom<Args> for Request {
    type Error = Error;

    /// Picks exactly one coordinate source: alias, then explicit coordinates,
    /// then source file, then the dry-run default.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let given = [
            args.alias.is_some(),
            args.coordinates.is_some(),
            args.source_file.is_some(),
        ]
        .iter()
        .filter(|given| **given)
        .count();

        let source = if let Some(alias) = args.alias {
            CoordinateSource::Alias(alias)
        } else if let Some(coordinates) = args.coordinates {
            match coordinates.as_slice() {
                [latitude, longitude] if latitude.is_finite() && longitude.is_finite() => {
                    CoordinateSource::Explicit {
                        latitude: *latitude,
                        longitude: *longitude,
                    }
                }
                _ => {
                    return Err(Error::InvalidArgument(format!(
                        "expected two finite coordinates, got {:?}",
                        coordinates
                    )))
                }
            }
        } else if let Some(path) = args.source_file {
            CoordinateSource::SourceFile(path)
        } else if args.do_nothing {
            CoordinateSource::Default
        } else {
            CoordinateSource::Unspecified
        };

        if given > 1 {
            warn!("several coordinate sources given, using {:?}", source);
        }

        Ok(Request {
            files: args.files,
            source,
            force: args.force,
            overwrite: args.overwrite,
            do_nothing: args.do_nothing,
        })
    }
}

/// Runs the tool for parsed arguments against the `exiftool` found on `PATH`.
pub fn run(args: Args) -> Result<Outcome, Error> {
    if args.list_aliases {
        for line in alias::listing() {
            println!("{}", line);
        }
        return Ok(Outcome::AliasesListed);
    }

    let tool = ExifTool::locate()?;
    let request = Request::try_from(args)?;
    run_with(&tool, &request)
}

/// Resolves coordinates, filters the files and writes them with `tool`.
pub fn run_with<T: TagEditor + ?Sized>(tool: &T, request: &Request) -> Result<Outcome, Error> {
    let coordinate = resolve(tool, &request.source)?;

    if request.do_nothing {
        warn!("Doing nothing as requested...");
    }
    info!("Configuring GPS to: {}", coordinate);

    let files = select_files(tool, request)?;
    debug!("files to edit: {:?}", files);

    if files.is_empty() || request.do_nothing {
        println!("{}", "Nothing to do...".yellow());
        return Ok(Outcome::NothingToDo);
    }

    exiftool::write_gps(tool, &coordinate, &files, request.overwrite)?;
    println!(
        "{}",
        format!("set GPS to {} for {} file(s)", coordinate, files.len()).green()
    );
    Ok(Outcome::Written(files.len()))
}

/// Produces the coordinate for a run, reading the source file's tags if asked.
pub fn resolve<T: TagEditor + ?Sized>(
    tool: &T,
    source: &CoordinateSource,
) -> Result<ResolvedCoordinate, Error> {
    let path = match source {
        CoordinateSource::SourceFile(path) => path,
        other => return coordinates::resolve_static(other),
    };

    if !path.is_file() {
        return Err(Error::InvalidArgument(format!(
            "the file {} does not exist",
            path.display()
        )));
    }

    let latitude = exiftool::read_tag(tool, "GPSLatitude", path)?;
    let longitude = exiftool::read_tag(tool, "GPSLongitude", path)?;
    ResolvedCoordinate::from_tool_output(&latitude, &longitude)
        .ok_or_else(|| Error::NoSourceCoordinates(path.clone()))
}

/// Checks that every requested file exists, then keeps those without GPS
/// tags. Forced runs keep every file without probing it.
pub fn select_files<T: TagEditor + ?Sized>(
    tool: &T,
    request: &Request,
) -> Result<Vec<PathBuf>, Error> {
    if let Some(missing) = request.files.iter().find(|file| !file.exists()) {
        return Err(Error::InvalidFilename(missing.clone()));
    }

    if request.force {
        return Ok(request.files.clone());
    }

    let mut selected = Vec::new();
    for file in &request.files {
        if exiftool::has_gps(tool, file)? {
            debug!("ignoring file: {}", file.display());
            println!(
                "{}",
                format!("[{}] already has GPS coordinates", file.display()).blue()
            );
        } else {
            info!("adding file: {}", file.display());
            selected.push(file.clone());
        }
    }
    Ok(selected)
}
