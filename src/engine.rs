//! StyleEngine: ties the registry, host document, token source and config
//! together behind a cheap, clonable handle.

use std::cell::{Ref, RefCell, RefMut};
use std::panic::Location;
use std::rc::Rc;

use crate::dom::{Document, HeadlessDocument};
use crate::sheet::{ShortIdSource, SiteId, StyleSheetRegistry, TokenSource};
use crate::styles::definition::{StyleArgs, StyleDefinition};
use crate::styles::props::ElementType;
use crate::styles::resolver::UseStyles;
use crate::util::tag_from_path;

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Configuration for the style engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Site tag used when none can be derived from the source location.
    pub default_tag: String,
    /// Attribute set to `"true"` on every style element the engine creates.
    pub marker_attribute: String,
    /// Element type used when neither the props nor the component pick one.
    pub default_element: ElementType,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_tag: "hui".into(),
            marker_attribute: "data-hacker-ui".into(),
            default_element: ElementType::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback site tag (builder).
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    /// Set the marker attribute name (builder).
    pub fn with_marker_attribute(mut self, name: impl Into<String>) -> Self {
        self.marker_attribute = name.into();
        self
    }

    /// Set the default element type (builder).
    pub fn with_default_element(mut self, element: ElementType) -> Self {
        self.default_element = element;
        self
    }
}

// ---------------------------------------------------------------------------
// StyleEngine
// ---------------------------------------------------------------------------

pub(crate) struct EngineState {
    pub(crate) config: EngineConfig,
    pub(crate) registry: StyleSheetRegistry,
    pub(crate) tokens: Box<dyn TokenSource>,
    pub(crate) reset_site: Option<SiteId>,
}

/// Handle to one style engine. Clones share state.
///
/// Single-threaded: the handle is neither `Send` nor `Sync`, and all
/// mounting happens synchronously inside commit calls.
#[derive(Clone)]
pub struct StyleEngine(Rc<RefCell<EngineState>>);

impl StyleEngine {
    /// Create an engine writing into `document` with random tokens.
    pub fn new(document: impl Document + 'static) -> Self {
        Self::with_parts(document, ShortIdSource::new(), EngineConfig::default())
    }

    /// Create an engine over a fresh [`HeadlessDocument`].
    pub fn headless() -> Self {
        Self::new(HeadlessDocument::new())
    }

    /// Create an engine from explicit parts.
    pub fn with_parts(
        document: impl Document + 'static,
        tokens: impl TokenSource + 'static,
        config: EngineConfig,
    ) -> Self {
        let registry = StyleSheetRegistry::new(Box::new(document), config.marker_attribute.clone());
        Self(Rc::new(RefCell::new(EngineState {
            config,
            registry,
            tokens: Box::new(tokens),
            reset_site: None,
        })))
    }

    /// Register a style definition function.
    ///
    /// The site tag is the stem of the calling source file. The site's style
    /// element is created now, before any component using it renders.
    #[track_caller]
    pub fn create_styles<F>(&self, styles_fn: F) -> UseStyles
    where
        F: Fn(StyleArgs<'_>) -> StyleDefinition + 'static,
    {
        let caller = Location::caller();
        let tag = match tag_from_path(caller.file()) {
            Some(tag) => tag.to_owned(),
            None => self.state().config.default_tag.clone(),
        };
        self.create_styles_tagged(&tag, styles_fn)
    }

    /// Register a style definition function under an explicit site tag.
    pub fn create_styles_tagged<F>(&self, tag: &str, styles_fn: F) -> UseStyles
    where
        F: Fn(StyleArgs<'_>) -> StyleDefinition + 'static,
    {
        let site = self.create_site(tag);
        UseStyles::new(self.clone(), site, Rc::new(styles_fn))
    }

    pub(crate) fn create_site(&self, tag: &str) -> SiteId {
        let mut state = self.state_mut();
        let salt = state.tokens.next_token();
        state.registry.create_site(tag, salt)
    }

    /// Draw a token from the engine's token source.
    pub fn next_token(&self) -> String {
        self.state_mut().tokens.next_token()
    }

    /// A copy of the engine configuration.
    pub fn config(&self) -> EngineConfig {
        self.state().config.clone()
    }

    /// Read access to the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&StyleSheetRegistry) -> R) -> R {
        f(&self.state().registry)
    }

    /// Current CSS text of a site's style element (empty for unknown sites).
    pub fn sheet_text(&self, site: SiteId) -> String {
        self.with_registry(|reg| reg.sheet_text(site).unwrap_or_default().to_owned())
    }

    /// Read access to the concrete document, if it is a `D`.
    pub fn with_document<D: 'static, R>(&self, f: impl FnOnce(&D) -> R) -> Option<R> {
        let state = self.state();
        state.registry.document().as_any().downcast_ref::<D>().map(f)
    }

    pub(crate) fn state(&self) -> Ref<'_, EngineState> {
        self.0.borrow()
    }

    pub(crate) fn state_mut(&self) -> RefMut<'_, EngineState> {
        self.0.borrow_mut()
    }
}
