use std::io::Cursor;

use super::*;

fn write_png(dir: &Path, name: &str, rgba: [u8; 4]) -> PathBuf {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let path = dir.join(name);
    std::fs::write(&path, buf).unwrap();
    path
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("raster_cache_tests").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn ensure_batch_memoizes_and_skips_failures() {
    let dir = scratch_dir("memoize");
    let a = write_png(&dir, "a.png", [255, 0, 0, 255]);
    let b = write_png(&dir, "b.png", [0, 255, 0, 255]);
    let broken = dir.join("broken.png");
    std::fs::write(&broken, b"not a png").unwrap();

    let sources = vec![a.clone(), b.clone(), broken.clone()];
    let mut cache = RasterCache::new();

    let loaded = cache.ensure_batch(&sources, 1);
    assert_eq!(loaded, 2);
    assert_eq!(cache.len(), 2);
    assert!(cache.get(&a).is_some());
    assert!(cache.get(&broken).is_none());

    // Second pass with the same generation decodes nothing new.
    assert_eq!(cache.ensure_batch(&sources, 1), 0);
}

#[test]
fn generation_change_invalidates_memoized_rasters() {
    let dir = scratch_dir("generation");
    let a = write_png(&dir, "a.png", [1, 2, 3, 255]);
    let sources = vec![a.clone()];

    let mut cache = RasterCache::new();
    assert_eq!(cache.ensure_batch(&sources, 1), 1);

    // A stale completion for generation 1 can never survive into generation 2.
    assert_eq!(cache.ensure_batch(&sources, 2), 1);
    assert_eq!(cache.len(), 1);

    assert_eq!(cache.ensure_batch(&[], 3), 0);
    assert!(cache.is_empty());
}

#[test]
fn prepared_pixels_are_premultiplied() {
    let dir = scratch_dir("premul");
    let a = write_png(&dir, "half.png", [255, 255, 255, 128]);

    let mut cache = RasterCache::new();
    cache.ensure_batch(std::slice::from_ref(&a), 1);
    let img = cache.get(&a).unwrap();
    assert_eq!(img.width, 2);
    assert_eq!(img.rgba8_premul[0], 128);
    assert_eq!(img.rgba8_premul[3], 128);
}
