use super::*;
use crate::effects::config::EffectPatch;
use crate::effects::guard::Applicability;

fn enable(store: &mut EffectStore, category: Category, id: &str) {
    store
        .toggle(category, id, &Applicability::everything())
        .unwrap();
}

fn set(store: &mut EffectStore, category: Category, id: &str, patch: EffectPatch) {
    assert!(store.update(category, id, &patch).unwrap());
}

#[test]
fn no_effects_compose_to_nothing() {
    let store = EffectStore::new();
    for target in Target::ALL {
        let p = Compositor::compose(&store, target);
        assert!(p.filter.is_none());
        assert!(p.animation_tokens.is_empty());
        assert!(p.duration_ms.is_none());
        assert!(p.delay_ms.is_none());
        assert!(p.is_empty());
    }
}

#[test]
fn blur_at_forty_percent_is_four_pixels() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::VisualFilter, "blur");
    set(
        &mut store,
        Category::VisualFilter,
        "blur",
        EffectPatch::default().intensity(40),
    );
    let p = Compositor::compose(&store, Target::Media);
    assert_eq!(p.filter.as_deref(), Some("blur(4px)"));
}

#[test]
fn filters_chain_in_catalog_order() {
    let mut store = EffectStore::new();
    for id in ["hue-rotate", "contrast", "glow", "sepia", "invert"] {
        enable(&mut store, Category::VisualFilter, id);
    }
    set(
        &mut store,
        Category::VisualFilter,
        "contrast",
        EffectPatch::default().intensity(30),
    );
    set(
        &mut store,
        Category::VisualFilter,
        "hue-rotate",
        EffectPatch::default().intensity(25),
    );

    let p = Compositor::compose(&store, Target::Media);
    assert_eq!(
        p.filter.as_deref(),
        Some(
            "sepia(0.5) contrast(1.3) drop-shadow(0 0 10px rgba(139,92,246,0.8)) \
             invert(0.5) hue-rotate(90deg)"
        )
    );
}

#[test]
fn every_filter_formula_at_half_intensity() {
    let cases = [
        ("blur", "blur(5px)"),
        ("grayscale", "grayscale(0.5)"),
        ("sepia", "sepia(0.5)"),
        ("contrast", "contrast(1.5)"),
        ("brightness", "brightness(1.5)"),
        ("saturate", "saturate(1.5)"),
        ("invert", "invert(0.5)"),
        ("hue-rotate", "hue-rotate(180deg)"),
    ];
    for (id, expected) in cases {
        let mut store = EffectStore::new();
        enable(&mut store, Category::VisualFilter, id);
        let p = Compositor::compose(&store, Target::Background);
        assert_eq!(p.filter.as_deref(), Some(expected), "{id}");
    }
}

#[test]
fn opacity_and_shadow_stay_out_of_the_chain() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::VisualFilter, "opacity");
    enable(&mut store, Category::VisualFilter, "shadow");
    set(
        &mut store,
        Category::VisualFilter,
        "opacity",
        EffectPatch::default().intensity(80),
    );

    let p = Compositor::compose(&store, Target::Title);
    assert!(p.filter.is_none());
    assert_eq!(p.extra_style.opacity, Some(0.8));
    assert_eq!(
        p.extra_style.text_shadow.as_deref(),
        Some("0 0 10px rgba(0,0,0,0.5)")
    );

    // Shadow is not offered on the background.
    let bg = Compositor::compose(&store, Target::Background);
    assert_eq!(bg.extra_style.opacity, Some(0.8));
    assert!(bg.extra_style.text_shadow.is_none());
}

#[test]
fn switched_off_targets_are_skipped() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::VisualFilter, "grayscale");
    set(
        &mut store,
        Category::VisualFilter,
        "grayscale",
        EffectPatch::default().target(Target::Media, false),
    );
    assert!(Compositor::compose(&store, Target::Media).filter.is_none());
    assert_eq!(
        Compositor::compose(&store, Target::Background)
            .filter
            .as_deref(),
        Some("grayscale(0.5)")
    );
}

#[test]
fn tokens_follow_category_then_catalog_order() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::TextAnimation, "neon");
    enable(&mut store, Category::EntranceAnimation, "zoom-in");
    enable(&mut store, Category::EntranceAnimation, "fade-in");
    enable(&mut store, Category::TextAnimation, "glitch");

    let p = Compositor::compose(&store, Target::Title);
    assert_eq!(
        p.animation_tokens,
        [
            "animate-fade-in",
            "animate-zoom-in",
            "animate-text-glitch",
            "animate-text-neon"
        ]
    );
    assert_eq!(
        p.class_list(),
        "animate-fade-in animate-zoom-in animate-text-glitch animate-text-neon"
    );
}

#[test]
fn first_matching_effect_sets_timing() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::TextAnimation, "typing");
    enable(&mut store, Category::EntranceAnimation, "slide-up");
    set(
        &mut store,
        Category::EntranceAnimation,
        "slide-up",
        EffectPatch::default().delay_ms(300),
    );

    let p = Compositor::compose(&store, Target::Title);
    assert_eq!(p.duration_ms, Some(600));
    assert_eq!(p.delay_ms, Some(300));

    // Subtitle only switched off for slide-up: typing becomes the first match.
    set(
        &mut store,
        Category::EntranceAnimation,
        "slide-up",
        EffectPatch::default().target(Target::Subtitle, false),
    );
    let p = Compositor::compose(&store, Target::Subtitle);
    assert_eq!(p.animation_tokens, ["animate-text-typing"]);
    assert_eq!(p.duration_ms, Some(2000));
    assert_eq!(p.delay_ms, Some(0));
}

#[test]
fn background_animations_only_reach_the_background() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::BackgroundAnimation, "ken-burns");
    enable(&mut store, Category::BackgroundAnimation, "stars");

    let media = Compositor::compose(&store, Target::Media);
    assert!(media.animation_tokens.is_empty());
    assert!(media.duration_ms.is_none());

    let bg = Compositor::compose(&store, Target::Background);
    assert_eq!(bg.animation_tokens, ["animate-bg-stars", "animate-bg-ken-burns"]);
    assert_eq!(bg.duration_ms, Some(30_000));
}

#[test]
fn text_animations_never_reach_media() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::TextAnimation, "pulse");
    enable(&mut store, Category::EntranceAnimation, "flip-x");

    let media = Compositor::compose(&store, Target::Media);
    assert_eq!(media.animation_tokens, ["animate-flip-x"]);
    assert_eq!(media.duration_ms, Some(800));
}

#[test]
fn compose_all_covers_every_target() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::VisualFilter, "brightness");
    let all = Compositor::compose_all(&store);
    assert_eq!(all.len(), 5);
    for p in all.values() {
        assert_eq!(p.filter.as_deref(), Some("brightness(1.5)"));
    }
}

#[test]
fn style_attr_lists_declarations() {
    let mut store = EffectStore::new();
    enable(&mut store, Category::VisualFilter, "blur");
    enable(&mut store, Category::EntranceAnimation, "fade-in");
    let p = Compositor::compose(&store, Target::Media);
    assert_eq!(
        p.style_attr(),
        "filter: blur(5px); animation-duration: 800ms; animation-delay: 0ms"
    );
}
