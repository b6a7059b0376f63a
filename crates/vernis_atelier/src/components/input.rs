//! Native text input.
//!
//! `checked` is always removed by the sanitizer, so a native checkbox or
//! radio rendered through this wrapper loses it. That case is logged.

use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Node, RenderContext};

const INPUT_CLASS: &str = "flex h-9 w-full rounded-md border border-input bg-transparent px-3 py-1 text-base shadow-sm transition-colors file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

#[derive(Debug, Clone, Default)]
pub struct Input {
    base: WrapperBase,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    fn warn_dropped_checked(&self) {
        let ty = self.base.attrs.get_str("type").unwrap_or("text");
        if matches!(ty, "checkbox" | "radio") && self.base.attrs.contains_key("checked") {
            tracing::warn!(
                input_type = ty,
                "`checked` is presentation-only and was dropped from a native {} input",
                ty
            );
        }
    }
}

wrapper_builders!(Input);

impl Wrapper for Input {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Input",
        slot: "input",
        tag: "input",
        pass_through: &[
            "type",
            "name",
            "value",
            "placeholder",
            "disabled",
            "required",
            "readonly",
            "autocomplete",
            "min",
            "max",
            "step",
            "size",
            "id",
            "aria-invalid",
            "aria-describedby",
        ],
    };
}

impl Component for Input {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        self.warn_dropped_checked();
        let class = self.base.merge_class(INPUT_CLASS);
        self.base
            .host(&Self::CONTRACT, &class, false)
            .default_attr("type", "text")
            .children(Vec::new())
            .build()
    }
}
