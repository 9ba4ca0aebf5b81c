use super::*;
use crate::foundation::core::Rgb8;
use crate::foundation::math::entry_rng;

fn small_params() -> SceneParams {
    SceneParams {
        width: 160,
        height: 320,
        ..SceneParams::default()
    }
}

fn config() -> SceneConfig {
    SceneConfig {
        name: "test_scene".to_string(),
        sky_top: Rgb8::new(15, 18, 25),
        sky_bottom: Rgb8::new(35, 40, 50),
        ground: Rgb8::new(110, 120, 130),
    }
}

fn mean_rgb(c: &Canvas, rows: std::ops::Range<u32>) -> [f64; 3] {
    let mut sum = [0.0f64; 3];
    let mut n = 0.0;
    for y in rows {
        for x in 0..c.width() {
            let px = c.pixel(x, y).unwrap();
            sum[0] += f64::from(px.r);
            sum[1] += f64::from(px.g);
            sum[2] += f64::from(px.b);
            n += 1.0;
        }
    }
    sum.map(|s| s / n)
}

#[test]
fn pipeline_runs_sky_first_and_blur_last() {
    assert_eq!(SceneStage::PIPELINE.len(), 9);
    assert_eq!(SceneStage::PIPELINE[0], SceneStage::Sky);
    assert_eq!(SceneStage::PIPELINE[1], SceneStage::Haze);
    assert_eq!(SceneStage::PIPELINE[5], SceneStage::Ground);
    assert_eq!(SceneStage::PIPELINE[8], SceneStage::SoftBlur);
}

#[test]
fn default_canvas_is_portrait_with_ground_at_seventy_percent() {
    let p = SceneParams::default();
    assert_eq!((p.width, p.height), (640, 1200));
    assert_eq!(p.ground_y(), 840);
    assert_eq!(p.bands.len(), 3);
    assert_eq!(p.bands[0].color, Rgb8::new(75, 80, 90));
}

#[test]
fn compose_produces_opaque_canvas_of_configured_size() {
    let p = small_params();
    let c = SceneComposer::new(&p)
        .compose(&config(), &mut entry_rng(1, "scene"))
        .unwrap();
    assert_eq!((c.width(), c.height()), (160, 320));
    assert_eq!(c.mode(), ColorMode::Rgb);
    assert!(c.pixels().all(|px| px[3] == 255));
}

#[test]
fn compose_is_reproducible_per_seed() {
    let p = small_params();
    let composer = SceneComposer::new(&p);
    let a = composer.compose(&config(), &mut entry_rng(7, "scene")).unwrap();
    let b = composer.compose(&config(), &mut entry_rng(7, "scene")).unwrap();
    let c = composer.compose(&config(), &mut entry_rng(8, "scene")).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn ground_rows_settle_on_ground_color() {
    let p = small_params();
    let c = SceneComposer::new(&p)
        .compose(&config(), &mut entry_rng(3, "scene"))
        .unwrap();
    let mean = mean_rgb(&c, 290..320);
    for (m, want) in mean.iter().zip([110.0, 120.0, 130.0]) {
        assert!((m - want).abs() < 8.0, "mean {mean:?}");
    }
}

#[test]
fn sky_stays_near_gradient_top() {
    let p = SceneParams {
        bands: Vec::new(),
        particle_count: 0,
        ..small_params()
    };
    let c = SceneComposer::new(&p)
        .compose(&config(), &mut entry_rng(4, "scene"))
        .unwrap();
    let mean = mean_rgb(&c, 0..4);
    for (m, want) in mean.iter().zip([15.0, 18.0, 25.0]) {
        assert!((m - want).abs() < 8.0, "mean {mean:?}");
    }
}
