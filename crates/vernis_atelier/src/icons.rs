//! Inline SVG icons (Lucide geometry, 24x24 viewBox, stroke-based).

use vernis_relief::{Element, Node};

/// Icons used inside the component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Check,
    Minus,
    X,
    Loader,
    ArrowRight,
    Info,
}

impl Icon {
    /// Name emitted as `data-icon`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Minus => "minus",
            Self::X => "x",
            Self::Loader => "loader",
            Self::ArrowRight => "arrow-right",
            Self::Info => "info",
        }
    }

    fn shapes(self) -> Vec<Node> {
        let path = |d: &str| Element::new("path").with_attr("d", d).into();
        match self {
            Self::Check => vec![path("M20 6 9 17l-5-5")],
            Self::Minus => vec![path("M5 12h14")],
            Self::X => vec![path("M18 6 6 18"), path("m6 6 12 12")],
            Self::Loader => vec![path("M21 12a9 9 0 1 1-6.219-8.56")],
            Self::ArrowRight => vec![path("M5 12h14"), path("m12 5 7 7-7 7")],
            Self::Info => vec![
                Element::new("circle")
                    .with_attr("cx", 12)
                    .with_attr("cy", 12)
                    .with_attr("r", 10)
                    .into(),
                path("M12 16v-4"),
                path("M12 8h.01"),
            ],
        }
    }

    /// Render with the default `h-4 w-4` sizing plus `class`.
    pub fn render(self, class: &str) -> Node {
        Element::new("svg")
            .with_attr("xmlns", "http://www.w3.org/2000/svg")
            .with_attr("viewBox", "0 0 24 24")
            .with_attr("fill", "none")
            .with_attr("stroke", "currentColor")
            .with_attr("stroke-width", 2)
            .with_attr("stroke-linecap", "round")
            .with_attr("stroke-linejoin", "round")
            .with_attr("aria-hidden", true)
            .with_attr("data-icon", self.name())
            .with_class("h-4 w-4")
            .with_class(class)
            .with_children(self.shapes())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::render_to_string;

    #[test]
    fn test_icon_markup() {
        let html = render_to_string(&Icon::Check.render("text-primary"));
        assert!(html.starts_with("<svg "));
        assert!(html.contains(r#"data-icon="check""#));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains(r#"class="h-4 w-4 text-primary""#));
        assert!(html.contains(r#"<path d="M20 6 9 17l-5-5"></path>"#));
    }
}
