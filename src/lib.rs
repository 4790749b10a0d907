//! # hacker-ui
//!
//! A runtime styling engine: components register style definition functions,
//! and each render turns them into scoped class names whose CSS is injected
//! into the host document once per distinct style.
//!
//! Rendering is split into a pure phase ([`StyleInstance::render`]) and a
//! commit phase ([`StyleInstance::commit`]) that performs every document
//! mutation.
//!
//! ## Core Systems
//!
//! - **[`color`]** — Color deriver: RGBA model, CSS color helpers, dynamic palettes
//! - **[`theme`]** — Theme record style definitions are written against
//! - **[`css`]** — Style template compiler: nesting, `&`, at-rules, scoping
//! - **[`dom`]** — Host document trait and slotmap-backed headless document
//! - **[`sheet`]** — Style sheet registry and unique token sources
//! - **[`styles`]** — Style resolver with per-instance caches and the root factory
//! - **[`engine`]** — Engine handle and configuration
//! - **[`components`]** — Base, outline and filled buttons
//!
//! ## Example
//!
//! ```ignore
//! use hacker_ui::{StyleEngine, StyleDefinition, StyleProps, Theme, RootProps};
//!
//! let engine = StyleEngine::headless();
//! let use_styles = engine.create_styles(|args| {
//!     StyleDefinition::new().slot("root", hacker_ui::css!("color: {};", args.color.on_surface))
//! });
//!
//! let theme = Theme::new().shared();
//! let mut card = use_styles.instance();
//! let out = card.render(StyleProps::new(()), &theme, None);
//! card.commit();
//! let element = out.root.render(RootProps::new(out.rest));
//! ```

// Foundation
pub mod color;
pub mod theme;
pub mod util;

// Compiler and document
pub mod css;
pub mod dom;

// Engine
pub mod engine;
pub mod sheet;
pub mod styles;
mod reset;

// Components
pub mod components;

pub use engine::{EngineConfig, StyleEngine};
pub use styles::{
    ClassMap, Element, ElementType, InlineStyle, NodeRef, RenderStats, Root, RootProps,
    SlotOverrides, StyleArgs, StyleDefinition, StyleInstance, StyleOutput, StyleProps, UseStyles,
};
pub use theme::Theme;
