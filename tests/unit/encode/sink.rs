use super::*;
use crate::foundation::core::Rgba8;
use crate::raster::canvas::ColorMode;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "rimefall_sink_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn begin_creates_both_asset_dirs() {
    let root = temp_dir("begin");
    let mut sink = PngDirSink::new(&root);
    sink.begin().unwrap();
    assert!(root.join("backgrounds").is_dir());
    assert!(root.join("textures").is_dir());
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn write_places_file_by_kind_and_leaves_no_temp() {
    let root = temp_dir("write");
    let mut sink = PngDirSink::new(&root);
    sink.begin().unwrap();

    let bg = AssetKey::new(AssetKind::Background, "scene_x");
    let tex = AssetKey::new(AssetKind::Texture, "tile_x");
    sink.write(&bg, &Canvas::new(4, 4, ColorMode::Rgb, Rgba8::new(1, 2, 3, 255)))
        .unwrap();
    sink.write(&tex, &Canvas::new(2, 2, ColorMode::Rgba, Rgba8::TRANSPARENT))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.path_for(&bg), root.join("backgrounds").join("scene_x.png"));
    assert!(root.join("backgrounds/scene_x.png").is_file());
    assert!(root.join("textures/tile_x.png").is_file());
    assert_eq!(sink.written().len(), 2);

    let leftovers = fs::read_dir(root.join("textures"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".part"))
        .count();
    assert_eq!(leftovers, 0);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn begin_fails_when_root_is_a_file() {
    let root = temp_dir("blocked");
    fs::write(&root, b"not a dir").unwrap();
    let mut sink = PngDirSink::new(&root);
    let err = sink.begin().unwrap_err();
    assert!(matches!(err, RimeError::Io { .. }));
    assert!(err.is_fatal());
    let _ = fs::remove_file(&root);
}

#[test]
fn in_memory_sink_records_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin().unwrap();
    let a = AssetKey::new(AssetKind::Texture, "a");
    let b = AssetKey::new(AssetKind::Background, "b");
    let canvas = Canvas::new(1, 1, ColorMode::Rgba, Rgba8::TRANSPARENT);
    sink.write(&a, &canvas).unwrap();
    sink.write(&b, &canvas).unwrap();
    sink.end().unwrap();

    assert!(sink.finished());
    let keys: Vec<_> = sink.assets().iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, vec![a.clone(), b]);
    assert_eq!(sink.get(&a), Some(&canvas));
}
