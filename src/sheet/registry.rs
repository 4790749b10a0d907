//! Style sheet registry: one injection target per style-definition site.
//!
//! Each site owns a `<style>` element in the host document, the set of style
//! keys already written into it, and the class maps already assigned to
//! each (color pair, definition) combination. All three only ever grow.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use crate::dom::{Document, ElementId};
use crate::styles::definition::{ClassMap, StyleDefinition};

new_key_type! {
    /// Identifies a style-definition site inside the registry.
    pub struct SiteId;
}

/// Inputs that fully determine a site's generated CSS.
///
/// Instances whose inputs match share class names, and therefore share the
/// mounted rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentKey {
    pub color: String,
    pub on: String,
    pub definition: StyleDefinition,
}

/// Registry state for one style-definition site.
#[derive(Debug)]
pub struct Site {
    tag: String,
    salt: String,
    element: ElementId,
    mounted: HashSet<String>,
    assignments: HashMap<AssignmentKey, Rc<ClassMap>>,
    mount_calls: usize,
}

impl Site {
    /// Human-readable tag, usually derived from the defining source file.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Per-site uniqueness token; also the style element's `id`.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The site's style element.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Number of [`StyleSheetRegistry::mount`] calls made for this site.
    pub fn mount_calls(&self) -> usize {
        self.mount_calls
    }

    /// Number of distinct style keys recorded as mounted.
    pub fn mounted_len(&self) -> usize {
        self.mounted.len()
    }

    /// Number of distinct class-map assignments made for this site.
    pub fn assignments_len(&self) -> usize {
        self.assignments.len()
    }
}

/// Owns the host document and every site's injection target.
pub struct StyleSheetRegistry {
    document: Box<dyn Document>,
    sites: SlotMap<SiteId, Site>,
    marker_attribute: String,
}

impl StyleSheetRegistry {
    /// Create a registry writing into `document`, tagging every style element
    /// it creates with `marker_attribute="true"`.
    pub fn new(document: Box<dyn Document>, marker_attribute: impl Into<String>) -> Self {
        Self {
            document,
            sites: SlotMap::with_key(),
            marker_attribute: marker_attribute.into(),
        }
    }

    /// Allocate a site and insert its style element into the document head.
    pub fn create_site(&mut self, tag: &str, salt: String) -> SiteId {
        let element = self.document.create_style_element(&[
            (self.marker_attribute.as_str(), "true"),
            ("id", salt.as_str()),
        ]);
        let site = self.sites.insert(Site {
            tag: tag.to_owned(),
            salt,
            element,
            mounted: HashSet::new(),
            assignments: HashMap::new(),
            mount_calls: 0,
        });
        tracing::debug!(tag, ?site, "created style site");
        site
    }

    /// Append compiled CSS to a site's style element.
    ///
    /// No deduplication happens here; check [`is_mounted`](Self::is_mounted)
    /// first.
    pub fn mount(&mut self, site: SiteId, css: &str) {
        let Some(state) = self.sites.get_mut(site) else {
            tracing::warn!(?site, "mount on unknown style site");
            return;
        };
        state.mount_calls += 1;
        self.document.append_text(state.element, css);
    }

    /// Whether `key` has already been mounted for `site`.
    pub fn is_mounted(&self, site: SiteId, key: &str) -> bool {
        self.sites
            .get(site)
            .is_some_and(|state| state.mounted.contains(key))
    }

    /// Record `key` as mounted. Returns `false` if it already was.
    pub fn record_mounted(&mut self, site: SiteId, key: &str) -> bool {
        self.sites
            .get_mut(site)
            .is_some_and(|state| state.mounted.insert(key.to_owned()))
    }

    /// Class map previously assigned to `key` at `site`.
    pub fn assignment(&self, site: SiteId, key: &AssignmentKey) -> Option<Rc<ClassMap>> {
        self.sites.get(site)?.assignments.get(key).cloned()
    }

    /// Remember the class map assigned to `key` at `site`.
    pub fn store_assignment(&mut self, site: SiteId, key: AssignmentKey, classes: Rc<ClassMap>) {
        if let Some(state) = self.sites.get_mut(site) {
            state.assignments.insert(key, classes);
        }
    }

    /// Look up a site.
    pub fn site(&self, site: SiteId) -> Option<&Site> {
        self.sites.get(site)
    }

    /// Number of [`mount`](Self::mount) calls made for `site`.
    pub fn mount_calls(&self, site: SiteId) -> usize {
        self.sites.get(site).map_or(0, Site::mount_calls)
    }

    /// Number of sites created.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Current CSS text of a site's style element.
    pub fn sheet_text(&self, site: SiteId) -> Option<&str> {
        let element = self.sites.get(site)?.element;
        self.document.text_content(element)
    }

    /// The host document.
    pub fn document(&self) -> &dyn Document {
        self.document.as_ref()
    }
}
