use std::sync::Arc;

use tailor_core::{CollectingSink, Color};
use tailor_theme::{ColorScheme, ThemeError, ThemeRegistry, ThemeVariable, VarExpression};

fn vars(entries: &[(&str, ThemeVariable)]) -> Vec<(String, ThemeVariable)> {
    entries
        .iter()
        .map(|(name, variable)| (name.to_string(), variable.clone()))
        .collect()
}

#[test]
fn canonicalization_round_trip() {
    let registry = ThemeRegistry::new();
    registry
        .configure(
            vars(&[(
                "--brand-bg",
                ThemeVariable::new(VarExpression::color(Color::from_hex(0x1E66F5))),
            )]),
            [],
            true,
        )
        .unwrap();

    let expected = Some(Color::from_hex(0x1E66F5));
    for spelling in ["brand-bg", "--brand-bg", "var(--brand-bg)"] {
        assert_eq!(
            registry.resolve_color(spelling, ColorScheme::Light),
            expected,
            "spelling '{spelling}' should resolve"
        );
    }
}

#[test]
fn camel_case_registration_resolves_via_kebab() {
    let registry = ThemeRegistry::new();
    registry
        .configure(
            vars(&[(
                "brandBg",
                ThemeVariable::new(VarExpression::color(Color::RED)),
            )]),
            [],
            true,
        )
        .unwrap();

    assert_eq!(
        registry.resolve_color("var(--brand-bg)", ColorScheme::Light),
        Some(Color::RED)
    );
}

#[test]
fn strict_mode_rejects_cycles_with_full_path() {
    let registry = ThemeRegistry::new();
    let result = registry.configure(
        vars(&[
            ("--a", ThemeVariable::new(VarExpression::reference("--b"))),
            ("--b", ThemeVariable::new(VarExpression::reference("--a"))),
        ]),
        [],
        true,
    );

    match result {
        Err(ThemeError::CircularReference { path }) => {
            assert!(path.contains(&"a".to_string()));
            assert!(path.contains(&"b".to_string()));
            assert_eq!(path.first(), path.last());
        }
        other => panic!("expected CircularReference, got {other:?}"),
    }

    // Strict failure must not commit the staged table
    assert_eq!(registry.resolve_color("a", ColorScheme::Light), None);
}

#[test]
fn non_strict_mode_warns_on_cycles_and_still_commits() {
    let sink = Arc::new(CollectingSink::new());
    let registry = ThemeRegistry::with_sink(sink.clone());

    registry
        .configure(
            vars(&[
                ("--a", ThemeVariable::new(VarExpression::reference("--b"))),
                ("--b", ThemeVariable::new(VarExpression::reference("--a"))),
            ]),
            [],
            false,
        )
        .unwrap();

    assert!(
        sink.warnings()
            .iter()
            .any(|msg| msg.contains("circular variable reference")),
        "expected a cycle warning, got {:?}",
        sink.warnings()
    );

    // The table committed, but neither variable resolves to a usable value
    assert_eq!(registry.resolve_color("a", ColorScheme::Light), None);
    assert_eq!(registry.resolve_color("b", ColorScheme::Light), None);
}

#[test]
fn strict_mode_rejects_unresolved_references() {
    let registry = ThemeRegistry::new();
    let result = registry.configure(
        vars(&[(
            "--card",
            ThemeVariable::new(VarExpression::reference("--no-such-variable")),
        )]),
        [],
        true,
    );

    assert_eq!(
        result,
        Err(ThemeError::UnresolvedReference {
            variable: "card".to_string(),
            reference: "--no-such-variable".to_string(),
        })
    );
}

#[test]
fn references_to_seeds_and_palette_are_resolvable() {
    let registry = ThemeRegistry::new();
    registry
        .configure(
            vars(&[
                (
                    "--card",
                    ThemeVariable::new(VarExpression::reference("--surface")),
                ),
                (
                    "--hint",
                    ThemeVariable::new(VarExpression::reference("blue-500")),
                ),
            ]),
            [],
            true,
        )
        .unwrap();

    assert!(registry.resolve_color("card", ColorScheme::Light).is_some());
    assert_eq!(
        registry.resolve_color("hint", ColorScheme::Light),
        Some(Color::from_hex(0x3B82F6))
    );
}

#[test]
fn redefinition_warns_and_last_write_wins() {
    let sink = Arc::new(CollectingSink::new());
    let registry = ThemeRegistry::with_sink(sink.clone());

    registry
        .configure(
            vars(&[(
                "--brand",
                ThemeVariable::new(VarExpression::color(Color::RED)),
            )]),
            [],
            false,
        )
        .unwrap();
    registry
        .configure(
            vars(&[(
                "brand",
                ThemeVariable::new(VarExpression::color(Color::BLUE)),
            )]),
            [],
            false,
        )
        .unwrap();

    assert_eq!(
        registry.resolve_color("brand", ColorScheme::Light),
        Some(Color::BLUE)
    );
    assert!(sink
        .warnings()
        .iter()
        .any(|msg| msg.contains("redefined")));
}

#[test]
fn naming_convention_issues_never_block_strict_configure() {
    let sink = Arc::new(CollectingSink::new());
    let registry = ThemeRegistry::with_sink(sink.clone());

    // A raw passthrough naming a made-up CSS property is advisory only
    let result = registry.configure(
        vars(&[(
            "--glow",
            ThemeVariable::new(VarExpression::raw("text-glow", "0 0 4px #fff")),
        )]),
        [],
        true,
    );

    assert!(result.is_ok());
    assert!(sink
        .warnings()
        .iter()
        .any(|msg| msg.contains("unrecognized CSS property")));
    // The variable still functions as a pass-through
    assert_eq!(
        registry.resolve_raw("glow", ColorScheme::Light),
        Some("0 0 4px #fff".to_string())
    );
}

#[test]
fn alias_expansion_is_depth_bounded() {
    let registry = ThemeRegistry::new();
    registry
        .configure([], [("x".to_string(), "x".to_string())], true)
        .unwrap();

    assert_eq!(registry.expand_aliases(["x"]), vec!["x"]);
}

#[test]
fn reset_isolates_test_state() {
    let registry = ThemeRegistry::new();
    registry
        .configure(
            vars(&[(
                "--brand",
                ThemeVariable::new(VarExpression::color(Color::RED)),
            )]),
            [],
            true,
        )
        .unwrap();
    registry.reset();

    assert_eq!(registry.resolve_color("brand", ColorScheme::Light), None);
    // Seeds still materialize after a reset
    assert!(registry
        .resolve_color("background", ColorScheme::Light)
        .is_some());
}
