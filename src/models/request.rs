use edge_ink::{LineStyle, StylizeOptions};

/// Per-call overrides layered over the configured [`StylizeOptions`].
///
/// Mirrors what a single request can ask for: a line style and whether to
/// draw the frame. `None` keeps the configured value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOverrides {
    pub line_style: Option<LineStyle>,
    pub border: Option<bool>,
}

impl RenderOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a line style from a request parameter.
    ///
    /// Unknown names resolve to thin. `None` keeps the configured style.
    pub fn with_style_name(mut self, name: Option<&str>) -> Self {
        self.line_style = name.map(|n| LineStyle::from_name(Some(n)));
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.border = Some(border);
        self
    }

    pub fn apply(&self, base: &StylizeOptions) -> StylizeOptions {
        let mut opts = base.clone();
        if let Some(style) = self.line_style {
            opts.line_style = style;
        }
        if let Some(border) = self.border {
            opts.frame.enabled = border;
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_base() {
        let base = StylizeOptions::default().line_style(LineStyle::Bold);
        assert_eq!(RenderOverrides::new().apply(&base), base);
    }

    #[test]
    fn test_overrides_replace_style_and_border() {
        let base = StylizeOptions::default();
        let opts = RenderOverrides::new()
            .with_line_style(LineStyle::Bold)
            .with_border(true)
            .apply(&base);
        assert_eq!(opts.line_style, LineStyle::Bold);
        assert!(opts.frame.enabled);
        assert_eq!(opts.frame.width, base.frame.width);
    }

    #[test]
    fn test_style_name_is_lenient() {
        let o = RenderOverrides::new().with_style_name(Some("BOLD"));
        assert_eq!(o.line_style, Some(LineStyle::Bold));
        let o = RenderOverrides::new().with_style_name(Some("crayon"));
        assert_eq!(o.line_style, Some(LineStyle::Thin));
        let o = RenderOverrides::new().with_style_name(None);
        assert_eq!(o.line_style, None);
    }
}
