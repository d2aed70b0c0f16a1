//! Build configuration

/// Options controlling how a template is tokenized and assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Drop whitespace-only text nodes that sit directly at the top level
    pub drop_root_whitespace: bool,
    /// Rewrite CR and CRLF in literal segments to LF before scanning
    pub normalize_line_endings: bool,
    /// Treat `<tag/>` as a complete element even when `tag` is not void
    pub self_closing_tags: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            drop_root_whitespace: true,
            normalize_line_endings: true,
            self_closing_tags: true,
        }
    }
}

impl BuildOptions {
    pub fn with_drop_root_whitespace(mut self, drop: bool) -> Self {
        self.drop_root_whitespace = drop;
        self
    }

    pub fn with_normalize_line_endings(mut self, normalize: bool) -> Self {
        self.normalize_line_endings = normalize;
        self
    }

    pub fn with_self_closing_tags(mut self, enabled: bool) -> Self {
        self.self_closing_tags = enabled;
        self
    }
}
