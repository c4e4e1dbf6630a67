//! Compiled-in location aliases.
//!
//! Every point sits over a body of water so the tags are never mistaken for a
//! real shooting location. They only pin the timezone.

/// Alias used when a dry run is requested without any coordinates.
pub const DEFAULT_ALIAS: &str = "tx";

/// Lowercase name, latitude, longitude. Kept sorted by name.
const ALIASES: [(&str, f64, f64); 18] = [
    ("chicago", 41.879421, -87.523448),
    ("dallas", 32.832799, -96.721661),
    ("eiffel", 48.858554, 2.294513),
    ("england", 55.183517, -2.506142),
    ("france", 46.735221, 2.479992),
    ("germany", 50.141989, 7.169835),
    ("la", 34.045013, -118.229554),
    ("london", 51.506982, -0.119185),
    ("los angeles", 34.045013, -118.229554),
    ("midland", 32.007821, -102.086352),
    ("nevada", 38.954167, -120.100472),
    ("paris", 48.854915, 2.351727),
    ("rome", 41.902129, 12.468794),
    ("seagraves", 32.939237, -102.565286),
    ("tahoe", 38.954167, -120.100472),
    ("texas", 31.141359, -99.420637),
    ("tx", 31.141359, -99.420637),
    ("uk", 55.183517, -2.506142),
];

/// Looks up an alias case-insensitively, returning `(latitude, longitude)`.
pub fn lookup(name: &str) -> Option<(f64, f64)> {
    let name = name.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _, _)| *alias == name)
        .map(|&(_, lat, long)| (lat, long))
}

/// One line per alias: the upper-cased name right-aligned to the longest
/// name, then the coordinate pair.
pub fn listing() -> Vec<String> {
    let width = ALIASES
        .iter()
        .map(|(alias, _, _)| alias.len())
        .max()
        .unwrap_or(0);

    ALIASES
        .iter()
        .map(|(alias, lat, long)| {
            format!(
                "{:>width$}: [{}, {}]",
                alias.to_uppercase(),
                lat,
                long,
                width = width
            )
        })
        .collect()
}
