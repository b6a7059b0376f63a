//! Progress bar, styled over the progress primitive.

use crate::primitive::progress::{ProgressIndicator, ProgressRoot};
use crate::primitive::PrimitiveProps;
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Node, Props, RenderContext};

const PROGRESS_CLASS: &str = "relative h-2 w-full overflow-hidden rounded-full bg-primary/20";
const INDICATOR_CLASS: &str = "h-full w-full flex-1 bg-primary transition-all";

#[derive(Debug, Clone, Default)]
pub struct Progress {
    base: WrapperBase,
    value: Option<f64>,
    max: Option<f64>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` renders an indeterminate bar.
    pub fn value(mut self, value: Option<f64>) -> Self {
        self.value = value;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

wrapper_builders!(Progress);

impl Wrapper for Progress {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Progress",
        slot: "progress",
        tag: "div",
        pass_through: &["id", "aria-label", "aria-labelledby"],
    };
}

impl Component for Progress {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class(PROGRESS_CLASS);
        let indicator = Node::component(ProgressIndicator {
            props: PrimitiveProps::with_attrs(
                Props::new()
                    .with("data-slot", "progress-indicator")
                    .with("class", INDICATOR_CLASS),
            ),
        });
        Node::component(ProgressRoot {
            props: self
                .base
                .host(&Self::CONTRACT, &class, false)
                .children(vec![indicator])
                .into_primitive(),
            value: self.value,
            max: self.max,
        })
    }
}
