use super::*;

#[test]
fn defaults_match_a_fresh_editor() {
    let s = StyleSettings::default();
    assert_eq!(s.media_opacity_pct(), 100);
    assert_eq!(s.overlay_darkness_pct(), 30);
    assert_eq!(s.title_size_px(), 60);
    assert!(s.gradient_enabled());
    assert_eq!(s.text_placement(), TextPlacement::Center);
}

#[test]
fn patch_clamps_to_slider_ranges() {
    let mut s = StyleSettings::default();
    s.apply(&StylePatch {
        media_blur_px: Some(50),
        title_size_px: Some(4),
        background_scale_pct: Some(90),
        text_position_pct: Some(20),
        ..StylePatch::default()
    });
    assert_eq!(s.media_blur_px(), 20);
    assert_eq!(s.title_size_px(), 20);
    assert_eq!(s.background_scale_pct(), 100);
    assert_eq!(s.text_placement(), TextPlacement::Top { padding_pct: 20 });
}

#[test]
fn font_sizes_derive_from_title() {
    let s = StyleSettings::default();
    assert_eq!(s.font_size_px(Target::Title), Some(60.0));
    assert!((s.font_size_px(Target::Subtitle).unwrap() - 21.0).abs() < 1e-9);
    assert!((s.font_size_px(Target::Cta).unwrap() - 16.8).abs() < 1e-9);
    assert_eq!(s.font_size_px(Target::Media), None);
}

#[test]
fn patch_parses_colors_and_rejects_unknown_fields() {
    let patch: StylePatch = serde_json::from_value(serde_json::json!({
        "text_color": "#111827",
        "gradient_enabled": false
    }))
    .unwrap();
    let mut s = StyleSettings::default();
    s.apply(&patch);
    assert_eq!(s.text_color(), Rgb8::new(0x11, 0x18, 0x27));
    assert!(!s.gradient_enabled());

    assert!(serde_json::from_value::<StylePatch>(serde_json::json!({ "font": "x" })).is_err());
}
