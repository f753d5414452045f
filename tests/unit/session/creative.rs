use super::*;
use crate::content::media::MediaKind;

fn video() -> MediaAsset {
    MediaAsset {
        id: "v1".to_string(),
        kind: MediaKind::Video,
        url: "data:video/mp4;base64,AAAA".to_string(),
        name: "promo.mp4".to_string(),
    }
}

#[test]
fn entrance_effect_rejected_on_empty_creative() {
    let mut c = Creative::new("ig-post").unwrap();
    assert!(c.is_effect_inert(Category::EntranceAnimation, "fade-in").unwrap());
    assert_eq!(
        c.toggle_effect(Category::EntranceAnimation, "fade-in").unwrap(),
        Toggle::Rejected
    );
    assert_eq!(c.effects().count(Category::EntranceAnimation), 0);
}

#[test]
fn content_makes_effects_applicable() {
    let mut c = Creative::new("ig-post").unwrap();
    c.set_text(Target::Subtitle, "Now with more fizz").unwrap();
    assert!(!c.is_effect_inert(Category::EntranceAnimation, "fade-in").unwrap());
    assert_eq!(
        c.toggle_effect(Category::EntranceAnimation, "fade-in").unwrap(),
        Toggle::Enabled
    );

    // All eligible targets start on, even the ones without content yet.
    let cfg = c.effects().get(Category::EntranceAnimation, "fade-in").unwrap();
    assert!(cfg.applies_to(Target::Title));
    assert!(cfg.applies_to(Target::Media));
}

#[test]
fn media_selection_gates_media_only_effects() {
    let mut c = Creative::new("youtube-thumbnail").unwrap();
    c.import_media(video()).unwrap();
    assert!(c.is_effect_inert(Category::EntranceAnimation, "zoom-out").unwrap());
    c.select_media("v1").unwrap();
    assert_eq!(
        c.toggle_effect(Category::EntranceAnimation, "zoom-out").unwrap(),
        Toggle::Enabled
    );

    // Removing the media keeps the enabled effect; only new toggles are gated.
    c.remove_media("v1").unwrap();
    assert!(c.media().selected().is_none());
    assert!(c.effects().is_enabled(Category::EntranceAnimation, "zoom-out"));
}

#[test]
fn template_selection_survives_color_edits() {
    let mut c = Creative::new("ig-post").unwrap();
    assert_eq!(c.selected_template(), Some("hackboot-primary"));
    c.set_gradient_angle(45);

    c.select_template("ocean").unwrap();
    let hex: Vec<String> = c.gradient().colors().iter().map(|x| x.to_string()).collect();
    assert_eq!(hex, ["#0EA5E9", "#06B6D4", "#14B8A6"]);
    assert_eq!(c.gradient().angle_deg(), 45);

    c.update_color(0, Rgb8::new(0, 0, 0)).unwrap();
    assert_eq!(c.selected_template(), Some("ocean"));
    assert!(c.select_template("nope").is_err());
    assert_eq!(c.selected_template(), Some("ocean"));
}

#[test]
fn overflow_policy_flows_into_the_gradient() {
    let mut c = Creative::new("ig-post").unwrap();
    c.select_template("premium").unwrap();
    c.set_gradient_intensity(150);
    assert_eq!(
        c.gradient_css(),
        "linear-gradient(135deg, rgb(255,255,107), rgb(255,219,90))"
    );
    c.set_channel_overflow(ChannelOverflow::PassThrough);
    assert_eq!(
        c.gradient_css(),
        "linear-gradient(135deg, rgb(380,336,107), rgb(377,219,90))"
    );
}

#[test]
fn color_edits_respect_bounds() {
    let mut c = Creative::new("ig-post").unwrap();
    assert!(!c.remove_color(0));
    for _ in 0..3 {
        assert!(c.add_color(Rgb8::new(1, 1, 1)));
    }
    assert!(!c.add_color(Rgb8::new(1, 1, 1)));
    assert!(c.remove_color(4));
    assert_eq!(c.gradient().colors().len(), 4);
}

#[test]
fn backdrop_switches_to_media_when_selected() {
    let mut c = Creative::new("ig-post").unwrap();
    assert!(matches!(c.backdrop(), Backdrop::Gradient { .. }));
    c.import_media(video()).unwrap();
    c.select_media("v1").unwrap();
    assert!(matches!(c.backdrop(), Backdrop::Media { .. }));
    c.clear_media_selection();
    c.apply_style(&StylePatch {
        gradient_enabled: Some(false),
        ..StylePatch::default()
    });
    assert!(matches!(c.backdrop(), Backdrop::Solid { .. }));
}

#[test]
fn snapshot_serializes_for_renderers() {
    let mut c = Creative::new("ig-story").unwrap();
    c.set_text(Target::Title, "Hello").unwrap();
    c.toggle_effect(Category::TextAnimation, "typing").unwrap();
    c.toggle_effect(Category::VisualFilter, "opacity").unwrap();

    let snap = c.snapshot();
    assert_eq!(snap.width, 1080);
    assert_eq!(snap.height, 1920);
    assert_eq!(snap.text.len(), 1);
    assert_eq!(snap.effects.len(), 2);
    assert_eq!(snap.effects[0].category, Category::VisualFilter);

    let v = serde_json::to_value(&snap).unwrap();
    assert_eq!(v["format"], "ig-story");
    assert_eq!(v["backdrop"]["kind"], "gradient");
    assert_eq!(
        v["presentations"]["title"]["animation_tokens"][0],
        "animate-text-typing"
    );
    assert_eq!(v["presentations"]["title"]["extra_style"]["opacity"], 0.5);
    assert_eq!(v["effects"][1]["id"], "typing");
    assert_eq!(v["effects"][1]["category"], "text-animation");
    assert_eq!(v["text"]["title"]["font_size_px"], 60.0);
}

#[test]
fn set_text_rejects_non_text_targets() {
    let mut c = Creative::new("ig-post").unwrap();
    assert!(c.set_text(Target::Media, "x").is_err());
}
