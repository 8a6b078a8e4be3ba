use crate::models::{DensityBucket, IconRecord, IconVariant, Manifest};
use crate::render::render_icon;
use crate::utils::{calculate_hash, count_png_files, save_manifest, write_log_entry};
use chrono::Local;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Resource directory that receives the generated icons, relative to the
/// project root.
pub const RES_DIR: &str = "app/src/main/res";

/// File name of the run manifest written next to the mipmap directories.
pub const MANIFEST_FILE: &str = ".icons_manifest.json";

/// One output file the generator must produce.
pub struct IconTarget {
    pub relative_path: PathBuf,
    pub size: u32,
}

/// The ten launcher icon files in generation order: every density of
/// `ic_launcher.png`, then every density of `ic_launcher_round.png`.
pub fn icon_targets() -> Vec<IconTarget> {
    let mut targets = Vec::new();
    for variant in IconVariant::ALL {
        for bucket in DensityBucket::ALL {
            targets.push(IconTarget {
                relative_path: Path::new(RES_DIR)
                    .join(bucket.dir_name())
                    .join(variant.file_name()),
                size: bucket.icon_size(),
            });
        }
    }
    targets
}

/// Creates the five mipmap directories under `root` and writes all ten
/// launcher icons, overwriting any previous output. The first filesystem
/// failure aborts the batch with an error naming the offending path.
pub fn generate_icons(root: &Path) -> Result<(), Box<dyn Error>> {
    let res_dir = root.join(RES_DIR);
    for bucket in DensityBucket::ALL {
        let dir = res_dir.join(bucket.dir_name());
        fs::create_dir_all(&dir).map_err(|e| format!("failed to create {}: {}", dir.display(), e))?;
    }

    let mut records = Vec::new();
    for target in icon_targets() {
        let path = root.join(&target.relative_path);
        let icon = render_icon(target.size)?;
        icon.save(&path)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;

        let bytes = fs::metadata(&path)
            .map_err(|e| format!("failed to stat {}: {}", path.display(), e))?
            .len();
        let hash = calculate_hash(&path)
            .map_err(|e| format!("failed to hash {}: {}", path.display(), e))?;
        records.push(IconRecord {
            path: target.relative_path.clone(),
            size: target.size,
            bytes,
            hash,
        });
        println!(
            "Created {} ({}x{})",
            target.relative_path.display(),
            target.size,
            target.size
        );
    }

    let manifest = Manifest {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        icons: records,
    };
    let manifest_path = res_dir.join(MANIFEST_FILE);
    save_manifest(&manifest, &manifest_path)
        .map_err(|e| format!("failed to write {}: {}", manifest_path.display(), e))?;
    write_log_entry(
        &format!(
            "[{}] generated {} icons",
            manifest.generated_at,
            manifest.icons.len()
        ),
        &res_dir,
    )?;

    println!(
        "All icons created successfully! ({} PNG files under {})",
        count_png_files(&res_dir),
        res_dir.display()
    );
    Ok(())
}
