use crate::models::Manifest;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use walkdir::WalkDir;

/// Calculates the SHA256 hash of a file.
pub fn calculate_hash(path: &Path) -> Result<String, io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; 8192]; // 8KB buffer
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Saves the run manifest to a JSON file.
pub fn save_manifest(manifest: &Manifest, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, manifest)?;
    Ok(())
}

/// Loads a previously written manifest, or an empty one if none exists.
pub fn load_manifest(path: &Path) -> Result<Manifest, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(Manifest::default());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let manifest = serde_json::from_reader(reader)?;
    Ok(manifest)
}

/// Appends a line to the .icons_log.txt file in the resource directory.
pub fn write_log_entry(message: &str, res_dir: &Path) -> Result<(), io::Error> {
    let log_path = res_dir.join(".icons_log.txt");
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    writeln!(file, "{}", message)?;
    Ok(())
}

/// Counts the PNG files currently present under the resource tree.
pub fn count_png_files(res_dir: &Path) -> usize {
    WalkDir::new(res_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IconRecord;
    use std::path::PathBuf;

    #[test]
    fn hash_matches_known_vector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.bin");
        fs::write(&path, b"hello").unwrap();
        assert_eq!(
            calculate_hash(&path).unwrap(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        let manifest = Manifest {
            generated_at: "2026-01-01 12:00:00".to_string(),
            icons: vec![IconRecord {
                path: PathBuf::from("mipmap-mdpi/ic_launcher.png"),
                size: 48,
                bytes: 512,
                hash: "abc".to_string(),
            }],
        };
        save_manifest(&manifest, &path).unwrap();
        let loaded = load_manifest(&path).unwrap();
        assert_eq!(loaded.generated_at, manifest.generated_at);
        assert_eq!(loaded.icons.len(), 1);
        assert_eq!(loaded.icons[0].size, 48);
    }

    #[test]
    fn missing_manifest_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_manifest(&dir.path().join("nope.json")).unwrap();
        assert!(loaded.icons.is_empty());
    }
}
