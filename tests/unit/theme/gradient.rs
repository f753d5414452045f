use super::*;
use crate::catalog::templates::template_by_id;

fn hex(s: &str) -> Rgb8 {
    Rgb8::parse_hex(s).unwrap()
}

#[test]
fn full_intensity_reproduces_the_input_colors() {
    let css = build_gradient(
        &[hex("#0066FF"), hex("#8B5CF6")],
        135,
        100,
        ChannelOverflow::Clamp,
    );
    assert_eq!(css, "linear-gradient(135deg, rgb(0,102,255), rgb(139,92,246))");
}

#[test]
fn intensity_scales_and_rounds_channels() {
    let css = build_gradient(&[hex("#FF8001"), hex("#000000")], 90, 50, ChannelOverflow::Clamp);
    // 255 * 0.5 = 127.5 and 1 * 0.5 = 0.5 both round up.
    assert_eq!(css, "linear-gradient(90deg, rgb(128,64,1), rgb(0,0,0))");
}

#[test]
fn overflow_is_clamped_by_default() {
    let css = build_gradient(&[hex("#FFC800"), hex("#102030")], 0, 150, ChannelOverflow::Clamp);
    assert_eq!(css, "linear-gradient(0deg, rgb(255,255,0), rgb(24,48,72))");
}

#[test]
fn pass_through_keeps_raw_scaled_values() {
    let css = build_gradient(
        &[hex("#FFC800"), hex("#102030")],
        0,
        150,
        ChannelOverflow::PassThrough,
    );
    assert_eq!(css, "linear-gradient(0deg, rgb(383,300,0), rgb(24,48,72))");
}

#[test]
fn color_count_stays_within_bounds() {
    let mut g = GradientState::default();
    for _ in 0..10 {
        g.add_default_color();
    }
    assert_eq!(g.colors().len(), MAX_COLORS);
    assert!(!g.add_color(hex("#FFFFFF")));

    for _ in 0..10 {
        g.remove_color(0);
    }
    assert_eq!(g.colors().len(), MIN_COLORS);

    // Interleaved in arbitrary order.
    for step in 0..40 {
        if step % 3 == 0 {
            g.remove_color(step % 4);
        } else {
            g.add_color(hex("#123456"));
        }
        assert!((MIN_COLORS..=MAX_COLORS).contains(&g.colors().len()));
    }
}

#[test]
fn remove_ignores_out_of_range_index() {
    let mut g = GradientState::new(vec![hex("#000000"), hex("#111111"), hex("#222222")], 0, 100)
        .unwrap();
    assert!(!g.remove_color(7));
    assert!(g.remove_color(1));
    assert_eq!(g.colors(), &[hex("#000000"), hex("#222222")]);
}

#[test]
fn update_replaces_in_place() {
    let mut g = GradientState::default();
    g.update_color(1, hex("#ABCDEF")).unwrap();
    assert_eq!(g.colors()[1], hex("#ABCDEF"));
    assert_eq!(g.colors().len(), 2);
    assert!(g.update_color(2, hex("#ABCDEF")).is_err());
}

#[test]
fn angle_and_intensity_are_clamped() {
    let mut g = GradientState::default();
    assert_eq!(g.set_angle(720), 360);
    assert_eq!(g.set_intensity(999), 150);
    assert_eq!(g.set_intensity(0), 0);
    assert_eq!(g.css(ChannelOverflow::Clamp), "linear-gradient(360deg, rgb(0,0,0), rgb(0,0,0))");
}

#[test]
fn constructor_rejects_bad_stop_counts() {
    assert!(GradientState::new(vec![hex("#000000")], 0, 100).is_err());
    assert!(GradientState::new(vec![hex("#000000"); 6], 0, 100).is_err());
    let g = GradientState::new(vec![hex("#000000"); 5], 400, 200).unwrap();
    assert_eq!(g.angle_deg(), 360);
    assert_eq!(g.intensity_pct(), 150);
}

#[test]
fn template_replaces_colors_only() {
    let mut g = GradientState::default();
    g.set_angle(45);
    g.set_intensity(120);
    g.apply_template(template_by_id("ocean").unwrap());
    assert_eq!(
        g.colors(),
        &[hex("#0EA5E9"), hex("#06B6D4"), hex("#14B8A6")]
    );
    assert_eq!(g.angle_deg(), 45);
    assert_eq!(g.intensity_pct(), 120);
}
