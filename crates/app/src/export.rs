//! Writing the finished drawing to disk

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use image::{ImageFormat, RgbaImage};
use tracing::info;

/// Open the file an export should be written to
///
/// A directory target receives a new `Drawing_<unix-millis>.png`, with a
/// numeric suffix if that name is already taken. Any other path is created or
/// truncated.
pub fn open_target(target: &Path) -> anyhow::Result<(PathBuf, File)> {
    if !target.is_dir() {
        let file = File::create(target)
            .with_context(|| format!("could not create '{}'", target.display()))?;
        return Ok((target.to_path_buf(), file));
    }

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    create_unique(target, &format!("Drawing_{}", millis))
}

/// Create `<stem>.png` in `dir`, or `<stem>_<n>.png` for the first free `n`
///
/// The name is claimed with `create_new`, so an existing file is never reused.
fn create_unique(dir: &Path, stem: &str) -> anyhow::Result<(PathBuf, File)> {
    let mut suffix = 0u32;
    loop {
        let name = match suffix {
            0 => format!("{}.png", stem),
            n => format!("{}_{}.png", stem, n),
        };
        let candidate = dir.join(name);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => suffix += 1,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("could not create '{}'", candidate.display()));
            }
        }
    }
}

/// Encode `image` as PNG at `target` (see [`open_target`])
pub fn export_png(image: &RgbaImage, target: &Path) -> anyhow::Result<PathBuf> {
    let (path, file) = open_target(target)?;
    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .with_context(|| format!("failed to encode drawing to '{}'", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to save drawing to '{}'", path.display()))?;

    info!(
        "Saved {}x{} drawing to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fingerpaint-export-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_file_target_used_as_is() {
        let dir = scratch_dir("file");
        let target = dir.join("mine.png");
        let image = RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));

        assert_eq!(export_png(&image, &target).unwrap(), target);
        assert_eq!(image::open(&target).unwrap().to_rgba8(), image);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_directory_target_generates_names() {
        let dir = scratch_dir("dir");
        let image = RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]));

        let first = export_png(&image, &dir).unwrap();
        let second = export_png(&image, &dir).unwrap();
        assert_ne!(first, second);

        for path in [&first, &second] {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            assert!(name.starts_with("Drawing_") && name.ends_with(".png"), "{name}");
            let reloaded = image::open(path).unwrap().to_rgba8();
            assert_eq!(reloaded, image);
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_taken_name_is_never_reused() {
        let dir = scratch_dir("taken");
        std::fs::write(dir.join("Drawing_42.png"), b"keep me").unwrap();
        std::fs::write(dir.join("Drawing_42_1.png"), b"and me").unwrap();

        let (path, _file) = create_unique(&dir, "Drawing_42").unwrap();
        assert_eq!(path, dir.join("Drawing_42_2.png"));
        assert_eq!(std::fs::read(dir.join("Drawing_42.png")).unwrap(), b"keep me");
        assert_eq!(std::fs::read(dir.join("Drawing_42_1.png")).unwrap(), b"and me");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = scratch_dir("missing");
        let target = dir.join("nope").join("drawing.png");
        let image = RgbaImage::new(1, 1);
        assert!(export_png(&image, &target).is_err());
    }
}
