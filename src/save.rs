use crate::surface::AnnotationSurface;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_SUBDIR: &str = "inkboard_exports";

pub fn exe_relative_output_folder_from_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(EXPORT_SUBDIR))
}

pub fn ensure_output_folder() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    let output = exe_relative_output_folder_from_path(&exe_path)?;
    fs::create_dir_all(&output)
        .with_context(|| format!("create snapshot output folder {}", output.display()))?;
    Ok(output)
}

pub fn timestamped_stem(now: chrono::DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

pub fn build_filename(stem: &str) -> String {
    format!("{stem}_annotation.png")
}

/// Writes the current raster surface to `path` as a PNG. Fails if the
/// surface has not been sized yet.
pub fn write_snapshot_png(surface: &AnnotationSurface, path: &Path) -> Result<()> {
    let (width, height) = surface
        .size()
        .ok_or_else(|| anyhow!("annotation surface has no raster yet"))?;
    let pixels = surface.pixels().unwrap_or_default();
    let image = image::RgbaImage::from_raw(width, height, pixels.to_vec())
        .ok_or_else(|| anyhow!("raster buffer does not match {width}x{height}"))?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write annotation snapshot to {}", path.display()))?;
    tracing::debug!(path = %path.display(), width, height, "annotation snapshot written");
    Ok(())
}

/// Convenience wrapper: snapshot into the exe-relative export folder with a
/// timestamped file name, returning the written path.
pub fn write_timestamped_snapshot(surface: &AnnotationSurface) -> Result<PathBuf> {
    let output = ensure_output_folder()?;
    let path = output.join(build_filename(&timestamped_stem(Local::now())));
    write_snapshot_png(surface, &path)?;
    Ok(path)
}
