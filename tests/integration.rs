//! Integration tests for hacker-ui.
//!
//! These tests drive the public API the way a host renderer would: register
//! style sites, render component instances, commit, and inspect the document.

use std::collections::HashSet;
use std::rc::Rc;

use hacker_ui::color::create_dynamic_color_palette;
use hacker_ui::components::{BaseButton, ButtonProps, OutlineButton};
use hacker_ui::dom::HeadlessDocument;
use hacker_ui::sheet::SequenceTokens;
use hacker_ui::styles::Attributes;
use hacker_ui::*;
use pretty_assertions::assert_eq;

fn engine() -> StyleEngine {
    StyleEngine::with_parts(HeadlessDocument::new(), SequenceTokens::new(), EngineConfig::new())
}

fn is_css_safe(class: &str) -> bool {
    !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn card(engine: &StyleEngine) -> UseStyles {
    engine.create_styles_tagged("card", |args| {
        StyleDefinition::new()
            .slot("root", css!("color: {};", args.color.on_surface))
            .slot("title", css!("border-bottom: 1px solid {};", args.color.hover))
    })
}

fn append_calls(engine: &StyleEngine) -> usize {
    engine
        .with_document(|doc: &HeadlessDocument| doc.append_calls())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[test]
fn test_red_root_scenario() {
    let engine = engine();
    let use_styles =
        engine.create_styles_tagged("red", |_| StyleDefinition::new().slot("root", "color: red;"));
    let theme = Theme::new().shared();
    let mut inst = use_styles.instance();
    let props = || StyleProps::new(()).color("#fff").on("#000");

    let first = inst.render(props(), &theme, None);
    assert_eq!(inst.commit(), 1);
    let key = first.styles.root().to_owned();
    assert_eq!(first.styles.len(), 1);
    assert_eq!(engine.sheet_text(use_styles.site()), format!(".{key}{{color:red;}}"));

    let second = inst.render(props(), &theme, None);
    assert_eq!(inst.commit(), 0);
    assert_eq!(second.styles.root(), key);
    assert_eq!(append_calls(&engine), 1);
}

// ---------------------------------------------------------------------------
// Color deriver
// ---------------------------------------------------------------------------

#[test]
fn test_palette_determinism() {
    for (fg, bg) in [("#fff", "#000"), ("#00c853", "#121212"), ("tomato", "white")] {
        assert_eq!(
            create_dynamic_color_palette(fg, bg),
            create_dynamic_color_palette(fg, bg)
        );
    }
}

// ---------------------------------------------------------------------------
// Mount idempotence and isolation
// ---------------------------------------------------------------------------

#[test]
fn test_many_instances_mount_each_slot_once() {
    let engine = engine();
    let use_styles = card(&engine);
    let theme = Theme::new().shared();

    let mut instances: Vec<_> = (0..5).map(|_| use_styles.instance()).collect();
    let mut roots = HashSet::new();
    for inst in &mut instances {
        let out = inst.render(StyleProps::new(()), &theme, None);
        inst.commit();
        roots.insert(out.styles.root().to_owned());
    }

    assert_eq!(roots.len(), 1);
    let site = use_styles.site();
    let mounts = engine.with_registry(|reg| reg.mount_calls(site));
    assert_eq!(mounts, 2);
    let root = roots.into_iter().next().unwrap();
    assert_eq!(engine.sheet_text(site).matches(&format!(".{root}{{")).count(), 1);
}

#[test]
fn test_different_color_pairs_are_isolated() {
    let engine = engine();
    let use_styles = card(&engine);
    let theme = Theme::new().shared();

    let mut light = use_styles.instance();
    let mut dark = use_styles.instance();
    let a = light.render(StyleProps::new(()).color("#000").on("#fff"), &theme, None);
    let b = dark.render(StyleProps::new(()).color("#fff").on("#000"), &theme, None);
    light.commit();
    dark.commit();

    let a_classes: HashSet<_> = a.styles.iter().map(|(_, c)| c.to_owned()).collect();
    let b_classes: HashSet<_> = b.styles.iter().map(|(_, c)| c.to_owned()).collect();
    assert!(a_classes.is_disjoint(&b_classes));

    let css = engine.sheet_text(use_styles.site());
    assert!(css.contains(&format!(".{}{{color:#000000;}}", a.styles.root())));
    assert!(css.contains(&format!(".{}{{color:#ffffff;}}", b.styles.root())));
}

#[test]
fn test_sites_do_not_share_keys() {
    let engine = engine();
    let theme = Theme::new().shared();
    let first = card(&engine);
    let second = card(&engine);
    let a = first.instance().render(StyleProps::new(()), &theme, None);
    let b = second.instance().render(StyleProps::new(()), &theme, None);
    assert_ne!(a.styles.root(), b.styles.root());
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

#[test]
fn test_override_precedence_and_unknown_slots() {
    let engine = engine();
    let mut inst = card(&engine).instance();
    let out = inst.render(
        StyleProps::new(()).styles(
            SlotOverrides::new()
                .with("root", "mine")
                .with("ghost", "nowhere"),
        ),
        &Theme::new().shared(),
        None,
    );
    let root = out.styles.root();
    let (generated, extra) = root.split_once(' ').unwrap();
    assert!(generated.starts_with("card_root_"));
    assert_eq!(extra, "mine");
    assert!(out.styles.get("ghost").is_none());
    assert!(out.styles.get("title").unwrap().starts_with("card_title_"));
}

#[test]
fn test_root_element_merges_classes_and_styles() {
    let engine = engine();
    let mut inst = card(&engine).instance();
    let out = inst.render(
        StyleProps::new(())
            .class_name("factory")
            .style(InlineStyle::new().with("color", "red").with("margin", "0")),
        &Theme::new().shared(),
        None,
    );
    let el = out.root.render(
        RootProps::new(())
            .class_name("call")
            .style(InlineStyle::new().with("color", "blue")),
    );
    assert_eq!(
        el.class_name,
        format!("{} factory call", out.styles.root())
    );
    assert_eq!(el.style.get("color"), Some("blue"));
    assert_eq!(el.style.get("margin"), Some("0"));
    assert_eq!(el.element_type, ElementType::default());
}

// ---------------------------------------------------------------------------
// Recomputation gating
// ---------------------------------------------------------------------------

#[test]
fn test_unrelated_prop_change_does_not_remount() {
    let engine = engine();
    let mut inst = card(&engine).instance();
    let theme = Theme::new().shared();
    let click = |n: u32| {
        let mut attrs = Attributes::new();
        attrs.insert("on-click".into(), format!("handler{n}"));
        StyleProps::new(attrs)
    };

    let first = inst.render(click(1), &theme, None);
    inst.commit();
    let calls = append_calls(&engine);
    let second = inst.render(click(2), &theme, None);
    inst.commit();

    assert_eq!(first.styles.root(), second.styles.root());
    assert!(Rc::ptr_eq(&first.root, &second.root));
    assert_eq!(append_calls(&engine), calls);
    assert_eq!(second.rest.get("on-click").map(String::as_str), Some("handler2"));
    let stats = inst.stats();
    assert_eq!(stats.palettes, 1);
    assert_eq!(stats.definitions, 1);
    assert_eq!(stats.fresh_keys, 1);
}

#[test]
fn test_color_change_assigns_new_keys_and_back_reuses() {
    let engine = engine();
    let mut inst = card(&engine).instance();
    let theme = Theme::new().shared();
    let a = inst.render(StyleProps::new(()).color("#ff0000"), &theme, None);
    inst.commit();
    let b = inst.render(StyleProps::new(()).color("#0000ff"), &theme, None);
    inst.commit();
    let c = inst.render(StyleProps::new(()).color("#ff0000"), &theme, None);
    assert_eq!(inst.commit(), 0);

    assert_ne!(a.styles.root(), b.styles.root());
    assert_eq!(a.styles.root(), c.styles.root());
    assert_eq!(inst.stats().fresh_keys, 2);
}

#[test]
fn test_comments_in_templates_are_stripped() {
    let engine = engine();
    let use_styles = engine.create_styles_tagged("notes", |_| {
        StyleDefinition::new().slot(
            "root",
            "/* brand */ color: red; &:hover { /* } */ color: blue; }",
        )
    });
    let mut inst = use_styles.instance();
    let out = inst.render(StyleProps::new(()), &Theme::new().shared(), None);
    assert_eq!(inst.commit(), 1);
    let key = out.styles.root();
    assert_eq!(
        engine.sheet_text(use_styles.site()),
        format!(".{key}{{color:red;}}.{key}:hover{{color:blue;}}")
    );
}

// ---------------------------------------------------------------------------
// Sanitization
// ---------------------------------------------------------------------------

#[test]
fn test_path_like_tags_are_sanitized() {
    let engine = StyleEngine::with_parts(
        HeadlessDocument::new(),
        SequenceTokens::new().queued(["s/a.l+t", "to~ken!"]),
        EngineConfig::new(),
    );
    let use_styles = engine.create_styles_tagged("src/components/My.Button", |_| {
        StyleDefinition::new()
            .slot("root", "color: red;")
            .slot("icon box", "margin: 0;")
    });
    let mut inst = use_styles.instance();
    let out = inst.render(StyleProps::new(()), &Theme::new().shared(), None);
    inst.commit();

    assert_eq!(out.styles.root(), "srccomponentsMyButton_root_salt_token");
    for (_, class) in out.styles.iter() {
        assert!(is_css_safe(class), "{class}");
    }
    assert!(engine
        .sheet_text(use_styles.site())
        .contains(".srccomponentsMyButton_iconbox_salt_token{margin:0;}"));
}

#[test]
fn test_random_tokens_are_css_safe() {
    let engine = StyleEngine::headless();
    let mut inst = card(&engine).instance();
    let out = inst.render(StyleProps::new(()), &Theme::new().shared(), None);
    for (_, class) in out.styles.iter() {
        assert!(is_css_safe(class), "{class}");
    }
}

// ---------------------------------------------------------------------------
// Engine wiring
// ---------------------------------------------------------------------------

#[test]
fn test_style_elements_are_marked() {
    let engine = StyleEngine::with_parts(
        HeadlessDocument::new(),
        SequenceTokens::new(),
        EngineConfig::new().with_marker_attribute("data-styles"),
    );
    let a = card(&engine);
    let b = card(&engine);
    engine.install_css_reset(&Theme::new());

    let marked = engine
        .with_document(|doc: &HeadlessDocument| doc.query_by_attribute("data-styles").len())
        .unwrap();
    assert_eq!(marked, 3);
    let ids = engine.with_registry(|reg| {
        [a.site(), b.site()].map(|site| reg.site(site).unwrap().salt().to_owned())
    });
    assert_eq!(ids, ["t0".to_owned(), "t1".to_owned()]);
}

#[test]
fn test_default_colors_come_from_theme() {
    let engine = engine();
    let use_styles = engine.create_styles_tagged("defaults", |args| {
        StyleDefinition::new().slot("root", css!("color: {};", args.color.original))
    });
    let mut inst = use_styles.instance();
    inst.render(StyleProps::new(()), &Theme::new().with_brand("#123456").shared(), None);
    inst.commit();
    assert!(engine.sheet_text(use_styles.site()).contains("{color:#123456;}"));
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[test]
fn test_outline_buttons_share_styles() {
    let engine = engine();
    let base = BaseButton::register(&engine);
    let outline = OutlineButton::register(&engine, &base);
    let theme = Theme::new().shared();

    let mut first = outline.instance();
    let mut second = outline.instance();
    let a = first.render(ButtonProps::new(Attributes::new()), &theme);
    let b = second.render(ButtonProps::new(Attributes::new()), &theme);
    assert_eq!(first.commit(), 2);
    assert_eq!(second.commit(), 0);

    assert_eq!(a.class_name, b.class_name);
    assert_eq!(a.element_type, ElementType::intrinsic("button"));
    assert_eq!(a.class_name.split(' ').count(), 2);
}
