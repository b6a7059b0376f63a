//! Separator primitive.

use super::PrimitiveProps;
use vernis_relief::{Component, Node, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Decorative separators are hidden from assistive technology.
#[derive(Debug, Clone)]
pub struct SeparatorRoot {
    pub props: PrimitiveProps,
    pub orientation: Orientation,
    pub decorative: bool,
}

impl Default for SeparatorRoot {
    fn default() -> Self {
        Self {
            props: PrimitiveProps::default(),
            orientation: Orientation::Horizontal,
            decorative: true,
        }
    }
}

impl Component for SeparatorRoot {
    fn display_name(&self) -> &'static str {
        "SeparatorRoot"
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let part = self
            .props
            .part("div")
            .attr("data-orientation", self.orientation.as_str());
        if self.decorative {
            part.attr("role", "none").build()
        } else {
            // horizontal is the implicit ARIA default
            let aria_orientation = match self.orientation {
                Orientation::Vertical => Some("vertical"),
                Orientation::Horizontal => None,
            };
            part.attr("role", "separator")
                .attr("aria-orientation", aria_orientation)
                .build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::render_to_string;

    #[test]
    fn test_decorative() {
        let html = render_to_string(&Node::component(SeparatorRoot::default()));
        assert_eq!(html, r#"<div data-orientation="horizontal" role="none"></div>"#);
    }

    #[test]
    fn test_semantic_vertical() {
        let node = Node::component(SeparatorRoot {
            orientation: Orientation::Vertical,
            decorative: false,
            ..SeparatorRoot::default()
        });
        assert_eq!(
            render_to_string(&node),
            r#"<div data-orientation="vertical" role="separator" aria-orientation="vertical"></div>"#
        );
    }
}
