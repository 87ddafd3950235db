//! Edge key types.
//!
//! Edges are identified by `v` (tail), `w` (head) and an optional `name` for multigraphs.

use std::fmt;

#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct EdgeKeyView<'a> {
    pub(in crate::graph) v: &'a str,
    pub(in crate::graph) w: &'a str,
    pub(in crate::graph) name: Option<&'a str>,
}

impl<'a> hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'a> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        key.v == self.v && key.w == self.w && key.name.as_deref() == self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
    pub name: Option<String>,
}

impl EdgeKey {
    pub fn new(
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            name: name.map(Into::into),
        }
    }

    /// Shorthand for an unnamed edge.
    pub fn between(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self::new(v, w, None::<String>)
    }

    pub(in crate::graph) fn view(&self) -> EdgeKeyView<'_> {
        EdgeKeyView {
            v: &self.v,
            w: &self.w,
            name: self.name.as_deref(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} -> {} ({name})", self.v, self.w),
            None => write!(f, "{} -> {}", self.v, self.w),
        }
    }
}
