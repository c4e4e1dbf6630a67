use std::{
    env,
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tracing::debug;

use crate::{coordinates::ResolvedCoordinate, Error};

const PROGRAM: &str = "exiftool";

/// Captured result of one tool invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Something that runs exiftool-compatible argument lists.
pub trait TagEditor {
    fn invoke(&self, args: &[OsString]) -> Result<ToolOutput, Error>;
}

/// The real `exiftool` executable.
#[derive(Debug, Clone)]
pub struct ExifTool {
    program: PathBuf,
}

impl ExifTool {
    /// Finds `exiftool` on `PATH`.
    pub fn locate() -> Result<Self, Error> {
        let path = env::var_os("PATH").ok_or(Error::ToolNotFound)?;
        Self::locate_in(&path)
    }

    /// Finds `exiftool` in a `PATH`-style list of directories.
    pub fn locate_in(search_path: &OsStr) -> Result<Self, Error> {
        let program = find_executable(PROGRAM, search_path).ok_or(Error::ToolNotFound)?;
        debug!("using {}", program.display());
        Ok(ExifTool::at(program))
    }

    pub fn at(program: impl Into<PathBuf>) -> Self {
        ExifTool {
            program: program.into(),
        }
    }
}

impl TagEditor for ExifTool {
    fn invoke(&self, args: &[OsString]) -> Result<ToolOutput, Error> {
        debug!("exiftool call: {:?}", args);
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn find_executable(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    env::split_paths(search_path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}

/// Arguments printing a single tag's bare value, e.g. `48 deg 51' 17.69" N`.
pub fn read_tag_args(tag: &str, path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-m", "-s", "-s", "-s"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(format!("-{}", tag).into());
    args.push(path.into());
    args
}

/// Arguments printing any existing GPS position of `path`.
pub fn probe_args(path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-m", "-s", "-GPSLatitude", "-GPSLongitude"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(path.into());
    args
}

/// Arguments writing `coordinate` to every file in one call.
pub fn write_args(
    coordinate: &ResolvedCoordinate,
    files: &[PathBuf],
    overwrite: bool,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-m".into(),
        "-preserve".into(),
        format!("-GPSLatitude={}", coordinate.latitude).into(),
        format!("-GPSLongitude={}", coordinate.longitude).into(),
        format!("-GPSLatitudeRef={}", coordinate.latitude_ref).into(),
        format!("-GPSLongitudeRef={}", coordinate.longitude_ref).into(),
    ];
    if overwrite {
        args.push("-overwrite_original".into());
    }
    args.extend(files.iter().map(|file| file.as_os_str().to_os_string()));
    args
}

fn checked<T: TagEditor + ?Sized>(
    tool: &T,
    args: &[OsString],
    action: impl FnOnce() -> String,
) -> Result<ToolOutput, Error> {
    let output = tool.invoke(args)?;
    if output.success {
        Ok(output)
    } else {
        Err(Error::ToolFailed {
            action: action(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        })
    }
}

/// Reads one tag's trimmed value; empty when the tag is absent.
pub fn read_tag<T: TagEditor + ?Sized>(tool: &T, tag: &str, path: &Path) -> Result<String, Error> {
    let output = checked(tool, &read_tag_args(tag, path), || {
        format!("reading {} from {}", tag, path.display())
    })?;
    let value = output.stdout.trim().to_string();
    debug!("extracted {} '{}' from {:?}", tag, value, path);
    Ok(value)
}

/// Whether `path` already carries a GPS latitude or longitude.
pub fn has_gps<T: TagEditor + ?Sized>(tool: &T, path: &Path) -> Result<bool, Error> {
    let output = checked(tool, &probe_args(path), || {
        format!("checking {} for GPS tags", path.display())
    })?;
    debug!("exiftool output for {:?}: {:?}", path, output.stdout);
    Ok(output.stdout.chars().any(|c| !c.is_whitespace()))
}

/// Writes `coordinate` to all `files` in one invocation.
pub fn write_gps<T: TagEditor + ?Sized>(
    tool: &T,
    coordinate: &ResolvedCoordinate,
    files: &[PathBuf],
    overwrite: bool,
) -> Result<ToolOutput, Error> {
    checked(tool, &write_args(coordinate, files, overwrite), || {
        format!("writing GPS tags to {} file(s)", files.len())
    })
}
