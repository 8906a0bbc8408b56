//! Static platform / build-mode / architecture matrix for the descriptor.
//!
//! | Platform | Architectures            | Artifact     |
//! |----------|--------------------------|--------------|
//! | macos    | (universal bundle)       | `.framework` |
//! | windows  | x86_32, x86_64           | `.dll`       |
//! | linux    | x86_64, arm64, rv64      | `.so`        |
//! | android  | x86_64, arm64            | `.so`        |
//!
//! Every row exists in both `debug` and `release` modes.

use std::fmt;

use gdkit_core::ProjectName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Android,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Android => "android",
        }
    }

    /// File extension of the shared library (or bundle) for this platform.
    pub fn extension(&self) -> &'static str {
        match self {
            Platform::MacOs => "framework",
            Platform::Windows => "dll",
            Platform::Linux | Platform::Android => "so",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }

    /// Name of the matching Godot export template (`template_debug`, ...).
    pub fn template(&self) -> &'static str {
        match self {
            BuildMode::Debug => "template_debug",
            BuildMode::Release => "template_release",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86_32,
    X86_64,
    Arm64,
    Rv64,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_32 => "x86_32",
            Arch::X86_64 => "x86_64",
            Arch::Arm64 => "arm64",
            Arch::Rv64 => "rv64",
        }
    }
}

/// One row of the `[libraries]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LibraryTarget {
    pub platform: Platform,
    pub mode: BuildMode,
    /// `None` for the macOS universal bundle.
    pub arch: Option<Arch>,
}

impl LibraryTarget {
    const fn new(platform: Platform, mode: BuildMode, arch: Option<Arch>) -> Self {
        Self {
            platform,
            mode,
            arch,
        }
    }

    /// Descriptor key, e.g. `windows.debug.x86_64` or `macos.release`.
    pub fn key(&self) -> String {
        match self.arch {
            Some(arch) => format!("{}.{}.{}", self.platform, self.mode.as_str(), arch.as_str()),
            None => format!("{}.{}", self.platform, self.mode.as_str()),
        }
    }

    /// Expected artifact file name, e.g. `demo.linux.template_debug.arm64.so`.
    pub fn file_name(&self, name: &ProjectName) -> String {
        match self.arch {
            Some(arch) => format!(
                "{}.{}.{}.{}.{}",
                name,
                self.platform,
                self.mode.template(),
                arch.as_str(),
                self.platform.extension()
            ),
            None => format!(
                "{}.{}.{}.{}",
                name,
                self.platform,
                self.mode.template(),
                self.platform.extension()
            ),
        }
    }

    /// Resource path Godot loads the library from.
    pub fn resource_path(&self, name: &ProjectName) -> String {
        format!("res://bin/{}", self.file_name(name))
    }
}

use Arch::*;
use BuildMode::*;
use Platform::*;

/// Every library the descriptor lists, in output order.
pub const LIBRARY_MATRIX: &[LibraryTarget] = &[
    LibraryTarget::new(MacOs, Debug, None),
    LibraryTarget::new(MacOs, Release, None),
    LibraryTarget::new(Windows, Debug, Some(X86_32)),
    LibraryTarget::new(Windows, Release, Some(X86_32)),
    LibraryTarget::new(Windows, Debug, Some(X86_64)),
    LibraryTarget::new(Windows, Release, Some(X86_64)),
    LibraryTarget::new(Linux, Debug, Some(X86_64)),
    LibraryTarget::new(Linux, Release, Some(X86_64)),
    LibraryTarget::new(Linux, Debug, Some(Arm64)),
    LibraryTarget::new(Linux, Release, Some(Arm64)),
    LibraryTarget::new(Linux, Debug, Some(Rv64)),
    LibraryTarget::new(Linux, Release, Some(Rv64)),
    LibraryTarget::new(Android, Debug, Some(X86_64)),
    LibraryTarget::new(Android, Release, Some(X86_64)),
    LibraryTarget::new(Android, Debug, Some(Arm64)),
    LibraryTarget::new(Android, Release, Some(Arm64)),
];
