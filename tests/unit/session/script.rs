use super::*;

const SCRIPT: &str = r##"{
    "format": "ig-post",
    "text": { "title": "Launch week", "cta": "Join now" },
    "steps": [
        { "op": "toggle", "category": "entrance-animation", "id": "fade-in" },
        { "op": "update", "category": "entrance-animation", "id": "fade-in",
          "patch": { "delay_ms": 200 } },
        { "op": "toggle", "category": "visual-filter", "id": "blur" },
        { "op": "update", "category": "visual-filter", "id": "blur",
          "patch": { "intensity": 40 } },
        { "op": "select_template", "id": "ocean" },
        { "op": "add_color", "color": "#FFFFFF" },
        { "op": "add_color" },
        { "op": "add_color" },
        { "op": "set_angle", "deg": 90 }
    ]
}"##;

#[test]
fn replays_every_step_in_order() {
    let replay = Script::from_json(SCRIPT).unwrap().run().unwrap();
    assert_eq!(
        replay.outcomes,
        [
            StepOutcome::Toggled(Toggle::Enabled),
            StepOutcome::Applied,
            StepOutcome::Toggled(Toggle::Enabled),
            StepOutcome::Applied,
            StepOutcome::Applied,
            StepOutcome::Applied,
            StepOutcome::Applied,
            StepOutcome::Ignored,
            StepOutcome::Applied,
        ]
    );

    let creative = &replay.creative;
    let title = creative.compose(Target::Title);
    assert_eq!(title.animation_tokens, ["animate-fade-in"]);
    assert_eq!(title.delay_ms, Some(200));
    assert_eq!(
        creative.compose(Target::Media).filter.as_deref(),
        Some("blur(4px)")
    );
    assert_eq!(creative.gradient().colors().len(), 5);
    assert_eq!(creative.gradient().angle_deg(), 90);
    assert_eq!(creative.selected_template(), Some("ocean"));
}

#[test]
fn ghost_updates_are_reported_as_ignored() {
    let script = Script {
        format: "fb-post".to_string(),
        text: TextContent::default(),
        media: Vec::new(),
        selected_media: None,
        channel_overflow: ChannelOverflow::Clamp,
        steps: vec![
            Action::Toggle {
                category: Category::EntranceAnimation,
                id: "fade-in".to_string(),
            },
            Action::Update {
                category: Category::EntranceAnimation,
                id: "fade-in".to_string(),
                patch: EffectPatch::default().intensity(10),
            },
        ],
    };
    let replay = script.run().unwrap();
    assert_eq!(
        replay.outcomes,
        [StepOutcome::Toggled(Toggle::Rejected), StepOutcome::Ignored]
    );
    assert!(replay.creative.effects().is_empty());
}

#[test]
fn failing_step_reports_its_index() {
    let json = r#"{
        "format": "ig-post",
        "steps": [
            { "op": "set_angle", "deg": 10 },
            { "op": "select_template", "id": "nope" }
        ]
    }"#;
    let err = Script::from_json(json).unwrap().run().unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("step 1"), "{msg}");
    assert!(msg.contains("unknown template 'nope'"), "{msg}");
}

#[test]
fn validate_checks_format_and_selected_media() {
    let mut script = Script::from_json(r#"{ "format": "ig-story" }"#).unwrap();
    script.validate().unwrap();

    script.selected_media = Some("missing".to_string());
    assert!(matches!(
        script.validate(),
        Err(AdcraftError::UnknownMedia(_))
    ));

    script.format = "poster".to_string();
    assert!(matches!(
        script.validate(),
        Err(AdcraftError::UnknownFormat(_))
    ));
}

#[test]
fn unknown_fields_and_ops_are_rejected() {
    assert!(Script::from_json(r#"{ "format": "ig-post", "colour": 1 }"#).is_err());
    assert!(
        Script::from_json(r#"{ "format": "ig-post", "steps": [ { "op": "explode" } ] }"#)
            .is_err()
    );
}

#[test]
fn format_switch_truncates_text() {
    let json = format!(
        r#"{{
            "format": "fb-post",
            "text": {{ "title": "{}" }},
            "steps": [ {{ "op": "set_format", "id": "ig-story" }} ]
        }}"#,
        "x".repeat(55)
    );
    let replay = Script::from_json(&json).unwrap().run().unwrap();
    assert_eq!(replay.outcomes, [StepOutcome::Truncated]);
    assert_eq!(replay.creative.text().title.chars().count(), 40);
}
