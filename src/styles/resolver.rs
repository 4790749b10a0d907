//! The per-instance style resolver.
//!
//! Rendering is split in two phases. [`StyleInstance::render`] is pure: it
//! derives the palette, evaluates the definition function, assigns class
//! names and builds the [`Root`] factory, each behind its own [`Memo`].
//! [`StyleInstance::commit`] is the only place CSS reaches the document.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use super::definition::{ClassMap, SlotOverrides, StyleArgs, StyleDefinition};
use super::memo::{ByPtr, Memo, ThemeKey};
use super::props::{ElementType, InlineStyle, StyleProps};
use super::root::Root;
use crate::color::{create_dynamic_color_palette, DynamicColorPalette};
use crate::css::compile;
use crate::engine::StyleEngine;
use crate::sheet::{AssignmentKey, SiteId};
use crate::theme::Theme;
use crate::util::{class_names, sanitize_class_name};

/// A style definition function.
pub type StylesFn = dyn Fn(StyleArgs<'_>) -> StyleDefinition;

// ---------------------------------------------------------------------------
// UseStyles
// ---------------------------------------------------------------------------

/// A registered style definition site. Create one per component type and
/// call [`instance`](UseStyles::instance) for each mounted component.
#[derive(Clone)]
pub struct UseStyles {
    engine: StyleEngine,
    site: SiteId,
    styles_fn: Rc<StylesFn>,
}

impl UseStyles {
    pub(crate) fn new(engine: StyleEngine, site: SiteId, styles_fn: Rc<StylesFn>) -> Self {
        Self {
            engine,
            site,
            styles_fn,
        }
    }

    /// The registry site backing this definition.
    pub fn site(&self) -> SiteId {
        self.site
    }

    /// The engine this site belongs to.
    pub fn engine(&self) -> &StyleEngine {
        &self.engine
    }

    /// Fresh per-instance resolver state.
    pub fn instance(&self) -> StyleInstance {
        StyleInstance {
            use_styles: self.clone(),
            palette: Memo::new(),
            definition: Memo::new(),
            classes: Memo::new(),
            merged: Memo::new(),
            root: Memo::new(),
            pending: None,
            fresh_keys: 0,
        }
    }
}

impl fmt::Debug for UseStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseStyles").field("site", &self.site).finish()
    }
}

// ---------------------------------------------------------------------------
// StyleInstance
// ---------------------------------------------------------------------------

/// What one render produces.
#[derive(Debug, Clone)]
pub struct StyleOutput<P> {
    /// Generated classes joined with caller overrides, per slot.
    pub styles: Rc<ClassMap>,
    /// Root element factory.
    pub root: Rc<Root>,
    /// Passthrough props.
    pub rest: P,
}

/// How often each layer of an instance has recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub palettes: usize,
    pub definitions: usize,
    pub class_maps: usize,
    /// Class maps built from newly drawn tokens (not reused from the site).
    pub fresh_keys: usize,
    pub merges: usize,
    pub roots: usize,
}

#[derive(PartialEq)]
struct RootKey {
    element_type: ElementType,
    class_name: Option<String>,
    style: InlineStyle,
    root_class: String,
}

/// Resolver state for one component instance.
pub struct StyleInstance {
    use_styles: UseStyles,
    palette: Memo<(String, String), Rc<DynamicColorPalette>>,
    definition: Memo<(ByPtr<DynamicColorPalette>, ThemeKey), Rc<StyleDefinition>>,
    classes: Memo<ByPtr<StyleDefinition>, Rc<ClassMap>>,
    merged: Memo<(ByPtr<ClassMap>, SlotOverrides), Rc<ClassMap>>,
    root: Memo<RootKey, Rc<Root>>,
    pending: Option<(Rc<StyleDefinition>, Rc<ClassMap>)>,
    fresh_keys: usize,
}

impl StyleInstance {
    /// Resolve styles for one render. Never touches the document.
    ///
    /// A class map for inputs the site has not seen yet draws a token and
    /// is stored in the registry's assignment table, so later instances with
    /// the same inputs reuse it. Nothing is mounted until
    /// [`commit`](Self::commit).
    ///
    /// The element type is `props.component`, else `default_component`,
    /// else the engine's configured default.
    pub fn render<P>(
        &mut self,
        props: StyleProps<P>,
        theme: &Rc<Theme>,
        default_component: Option<ElementType>,
    ) -> StyleOutput<P> {
        let StyleProps {
            on,
            color,
            style,
            styles,
            class_name,
            component,
            rest,
        } = props;

        let color = color.unwrap_or_else(|| theme.colors.brand.clone());
        let on = on.unwrap_or_else(|| theme.colors.surface.clone());

        let palette = self.palette.get((color.clone(), on.clone()), |(color, on)| {
            Rc::new(create_dynamic_color_palette(color, on))
        });

        let styles_fn = Rc::clone(&self.use_styles.styles_fn);
        let definition = self.definition.get(
            (ByPtr(palette), ThemeKey(Rc::clone(theme))),
            |(palette, theme)| {
                Rc::new(styles_fn(StyleArgs {
                    color: &palette.0,
                    theme: &theme.0,
                }))
            },
        );

        let use_styles = &self.use_styles;
        let fresh_keys = &mut self.fresh_keys;
        let classes = self.classes.get(ByPtr(Rc::clone(&definition)), |definition| {
            let key = AssignmentKey {
                color,
                on,
                definition: StyleDefinition::clone(&definition.0),
            };
            assign_classes(use_styles, key, fresh_keys)
        });

        let merged = self.merged.get(
            (ByPtr(Rc::clone(&classes)), styles.unwrap_or_default()),
            |(classes, overrides)| {
                let merged: ClassMap = classes
                    .0
                    .iter()
                    .map(|(slot, generated)| {
                        (slot, class_names([Some(generated), overrides.get(slot)]))
                    })
                    .collect();
                Rc::new(merged)
            },
        );

        let element_type = component
            .or(default_component)
            .unwrap_or_else(|| self.use_styles.engine.config().default_element);
        let root = self.root.get(
            RootKey {
                element_type,
                class_name,
                style: style.unwrap_or_default(),
                root_class: merged.root().to_owned(),
            },
            |key| {
                Rc::new(Root::new(
                    key.element_type.clone(),
                    key.root_class.clone(),
                    key.class_name.clone(),
                    key.style.clone(),
                ))
            },
        );

        self.pending = Some((definition, Rc::clone(&classes)));

        StyleOutput {
            styles: merged,
            root,
            rest,
        }
    }

    /// Compile and mount every class of the last render that the site has
    /// not mounted yet. Returns the number of mount calls made.
    pub fn commit(&mut self) -> usize {
        let Some((definition, classes)) = self.pending.take() else {
            return 0;
        };
        let site = self.use_styles.site;
        let mut state = self.use_styles.engine.state_mut();
        let mut mounts = 0;
        for (slot, class) in classes.iter() {
            if state.registry.is_mounted(site, class) {
                continue;
            }
            let template = definition.get(slot).unwrap_or_default();
            match compile(&format!(".{class}"), template) {
                Ok(css) if css.is_empty() => {}
                Ok(css) => {
                    state.registry.mount(site, &css);
                    mounts += 1;
                    tracing::debug!(class, "mounted style");
                }
                Err(err) => {
                    tracing::warn!(class, %err, "style template failed to compile");
                }
            }
            state.registry.record_mounted(site, class);
        }
        mounts
    }

    /// Recomputation counters for each layer.
    pub fn stats(&self) -> RenderStats {
        RenderStats {
            palettes: self.palette.computations(),
            definitions: self.definition.computations(),
            class_maps: self.classes.computations(),
            fresh_keys: self.fresh_keys,
            merges: self.merged.computations(),
            roots: self.root.computations(),
        }
    }

    /// The site this instance renders for.
    pub fn site(&self) -> SiteId {
        self.use_styles.site
    }
}

impl fmt::Debug for StyleInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleInstance")
            .field("site", &self.use_styles.site)
            .field("stats", &self.stats())
            .finish()
    }
}

/// Class map for `key`, reused from the site when another instance already
/// assigned one, otherwise built from a fresh token.
///
/// Slots whose names sanitize to the same string get a numeric suffix, so
/// every slot keeps its own class and its own mounted rules.
fn assign_classes(use_styles: &UseStyles, key: AssignmentKey, fresh_keys: &mut usize) -> Rc<ClassMap> {
    let site = use_styles.site;
    let mut state = use_styles.engine.state_mut();
    if let Some(existing) = state.registry.assignment(site, &key) {
        tracing::trace!(?site, "reusing class map");
        return existing;
    }
    let Some((tag, salt)) = state
        .registry
        .site(site)
        .map(|s| (s.tag().to_owned(), s.salt().to_owned()))
    else {
        return Rc::new(ClassMap::new());
    };
    let token = state.tokens.next_token();
    let mut classes = ClassMap::new();
    let mut taken = HashSet::new();
    for (index, slot) in key.definition.slot_names().enumerate() {
        let base = sanitize_class_name(&format!("{tag}_{slot}_{salt}_{token}"));
        let mut class = base.clone();
        let mut suffix = index;
        while taken.contains(&class) {
            class = format!("{base}_{suffix}");
            suffix += 1;
        }
        taken.insert(class.clone());
        classes.insert(slot, class);
    }
    let classes = Rc::new(classes);
    tracing::debug!(?site, %token, slots = classes.len(), "assigned style keys");
    state.registry.store_assignment(site, key, Rc::clone(&classes));
    *fresh_keys += 1;
    classes
}
