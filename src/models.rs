use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Android density buckets the launcher icons are generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DensityBucket {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl DensityBucket {
    pub const ALL: [DensityBucket; 5] = [
        DensityBucket::Mdpi,
        DensityBucket::Hdpi,
        DensityBucket::Xhdpi,
        DensityBucket::Xxhdpi,
        DensityBucket::Xxxhdpi,
    ];

    /// Launcher icon edge length in pixels for this bucket.
    pub fn icon_size(self) -> u32 {
        match self {
            DensityBucket::Mdpi => 48,
            DensityBucket::Hdpi => 72,
            DensityBucket::Xhdpi => 96,
            DensityBucket::Xxhdpi => 144,
            DensityBucket::Xxxhdpi => 192,
        }
    }

    /// Name of the resource directory for this bucket, e.g. `mipmap-mdpi`.
    pub fn dir_name(self) -> &'static str {
        match self {
            DensityBucket::Mdpi => "mipmap-mdpi",
            DensityBucket::Hdpi => "mipmap-hdpi",
            DensityBucket::Xhdpi => "mipmap-xhdpi",
            DensityBucket::Xxhdpi => "mipmap-xxhdpi",
            DensityBucket::Xxxhdpi => "mipmap-xxxhdpi",
        }
    }
}

/// The two launcher icon files Android expects in each density directory.
/// The launcher applies its own mask to the round variant, so both carry
/// the same image content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconVariant {
    Launcher,
    LauncherRound,
}

impl IconVariant {
    pub const ALL: [IconVariant; 2] = [IconVariant::Launcher, IconVariant::LauncherRound];

    pub fn file_name(self) -> &'static str {
        match self {
            IconVariant::Launcher => "ic_launcher.png",
            IconVariant::LauncherRound => "ic_launcher_round.png",
        }
    }
}

/// Holds metadata about a single generated icon file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IconRecord {
    pub path: PathBuf,
    pub size: u32,
    pub bytes: u64,
    pub hash: String,
}

/// Everything written by a single generator run.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Manifest {
    pub generated_at: String,
    pub icons: Vec<IconRecord>,
}
