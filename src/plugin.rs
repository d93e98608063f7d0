//! Extension seam.
//!
//! Plugins install against a small capability surface instead of the whole
//! enhancer: a hook called for every row after a filter pass, and a hook
//! called after every pipeline run. State a hook needs must be moved into
//! its closure; the plugin value itself is dropped after `install`.

use crate::core::pagination::PageLayout;

/// Row-classified hook: original document position and whether the row
/// matched the active filters.
pub type RowClassifiedHook = Box<dyn FnMut(usize, bool)>;

/// Re-render hook: the freshly computed page layout.
pub type ReRenderHook = Box<dyn FnMut(&PageLayout)>;

/// A tablekit plugin.
pub trait Plugin {
    fn install(&mut self, capabilities: &mut Capabilities);
}

/// The extension points exposed to plugins.
#[derive(Default)]
pub struct Capabilities {
    row_classified: Vec<RowClassifiedHook>,
    re_render: Vec<ReRenderHook>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook invoked once per row after every filter pass.
    pub fn on_row_classified(&mut self, hook: impl FnMut(usize, bool) + 'static) {
        self.row_classified.push(Box::new(hook));
    }

    /// Register a hook invoked after every pipeline run.
    pub fn on_re_render(&mut self, hook: impl FnMut(&PageLayout) + 'static) {
        self.re_render.push(Box::new(hook));
    }

    pub fn hook_count(&self) -> usize {
        self.row_classified.len() + self.re_render.len()
    }

    pub(crate) fn notify_row_classified(&mut self, doc_position: usize, matched: bool) {
        for hook in &mut self.row_classified {
            hook(doc_position, matched);
        }
    }

    pub(crate) fn notify_re_render(&mut self, layout: &PageLayout) {
        for hook in &mut self.re_render {
            hook(layout);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.row_classified.clear();
        self.re_render.clear();
    }
}
