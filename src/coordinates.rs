use std::{fmt, path::PathBuf};

use regex::Regex;

use crate::{alias, Error};

/// Where the coordinates for a run come from, decided once from the arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateSource {
    Alias(String),
    Explicit { latitude: f64, longitude: f64 },
    SourceFile(PathBuf),
    /// Dry run without coordinates; falls back to [`alias::DEFAULT_ALIAS`].
    Default,
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Strictly positive latitudes are north. Zero maps to south, which names
    /// the same point since the magnitude is zero.
    pub fn for_latitude(latitude: f64) -> Self {
        if latitude > 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    /// Strictly positive longitudes are east, everything else west.
    pub fn for_longitude(longitude: f64) -> Self {
        if longitude > 0.0 {
            Hemisphere::East
        } else {
            Hemisphere::West
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    fn is_latitude(self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The coordinate written to every file of a run.
///
/// Values are kept as the text handed to exiftool: decimal degrees for alias
/// and explicit coordinates, or whatever exiftool printed for a source file
/// (e.g. `48 deg 51' 17.69"`).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCoordinate {
    pub latitude: String,
    pub latitude_ref: Hemisphere,
    pub longitude: String,
    pub longitude_ref: Hemisphere,
}

impl ResolvedCoordinate {
    pub fn from_decimal(latitude: f64, longitude: f64) -> Self {
        ResolvedCoordinate {
            latitude: latitude.to_string(),
            latitude_ref: Hemisphere::for_latitude(latitude),
            longitude: longitude.to_string(),
            longitude_ref: Hemisphere::for_longitude(longitude),
        }
    }

    /// Builds a coordinate from exiftool's terse `GPSLatitude`/`GPSLongitude`
    /// output, keeping the hemisphere letters exactly as printed. Returns
    /// `None` when either value is empty or lacks a letter for its axis.
    pub fn from_tool_output(latitude: &str, longitude: &str) -> Option<Self> {
        let (latitude, latitude_ref) = split_hemisphere(latitude)?;
        let (longitude, longitude_ref) = split_hemisphere(longitude)?;

        if !latitude_ref.is_latitude() || longitude_ref.is_latitude() {
            return None;
        }

        Some(ResolvedCoordinate {
            latitude,
            latitude_ref,
            longitude,
            longitude_ref,
        })
    }
}

impl fmt::Display for ResolvedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.latitude, self.latitude_ref, self.longitude, self.longitude_ref
        )
    }
}

/// Splits `48 deg 51' 17.69" N` into its magnitude and trailing hemisphere.
fn split_hemisphere(value: &str) -> Option<(String, Hemisphere)> {
    lazy_static! {
        static ref GPS_VALUE: Regex = Regex::new(r#"^\s*(.*?)\s*([NSEW])\s*$"#).unwrap();
    }

    let cap = GPS_VALUE.captures(value)?;
    let magnitude = cap[1].to_string();
    if magnitude.is_empty() {
        return None;
    }
    let hemisphere = Hemisphere::from_letter(cap[2].chars().next()?)?;
    Some((magnitude, hemisphere))
}

/// Resolves alias, explicit and default sources. Source files need exiftool
/// and are handled by the caller.
pub fn resolve_static(source: &CoordinateSource) -> Result<ResolvedCoordinate, Error> {
    match source {
        CoordinateSource::Alias(name) => alias::lookup(name)
            .map(|(lat, long)| ResolvedCoordinate::from_decimal(lat, long))
            .ok_or_else(|| Error::UnknownAlias(name.clone())),
        CoordinateSource::Explicit {
            latitude,
            longitude,
        } => Ok(ResolvedCoordinate::from_decimal(*latitude, *longitude)),
        CoordinateSource::Default => alias::lookup(alias::DEFAULT_ALIAS)
            .map(|(lat, long)| ResolvedCoordinate::from_decimal(lat, long))
            .ok_or(Error::MissingCoordinates),
        CoordinateSource::SourceFile(_) | CoordinateSource::Unspecified => {
            Err(Error::MissingCoordinates)
        }
    }
}
