//! Progress primitive.
//!
//! A missing or non-finite value means indeterminate. A `max` that is not a
//! positive finite number falls back to 100, and the value is clamped to
//! `0..=max`.

use super::{root_state, PrimitiveProps};
use vernis_carton::format_compact;
use vernis_relief::{Component, Node, PropValue, RenderContext};

pub const DEFAULT_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    pub value: Option<f64>,
    pub max: f64,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            value: None,
            max: DEFAULT_MAX,
        }
    }
}

impl ProgressState {
    /// Normalise a raw value and maximum.
    pub fn new(value: Option<f64>, max: f64) -> Self {
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            tracing::warn!(max, "invalid progress max; using {}", DEFAULT_MAX);
            DEFAULT_MAX
        };
        let value = value.filter(|v| v.is_finite()).map(|v| v.clamp(0.0, max));
        Self { value, max }
    }

    pub fn data_state(&self) -> &'static str {
        match self.value {
            None => "indeterminate",
            Some(v) if v >= self.max => "complete",
            Some(_) => "loading",
        }
    }

    /// Completion in percent, `0` when indeterminate.
    pub fn percent(&self) -> f64 {
        self.value.map_or(0.0, |v| v / self.max * 100.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgressRoot {
    pub props: PrimitiveProps,
    pub value: Option<f64>,
    pub max: Option<f64>,
}

impl Component for ProgressRoot {
    fn display_name(&self) -> &'static str {
        "ProgressRoot"
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let state = ProgressState::new(self.value, self.max.unwrap_or(DEFAULT_MAX));
        let value_text = state
            .value
            .map(|_| format_compact!("{}%", state.percent().round() as i64));
        self.props
            .part("div")
            .attr("role", "progressbar")
            .attr("aria-valuemin", 0)
            .attr("aria-valuemax", state.max)
            .attr("aria-valuenow", state.value)
            .attr("aria-valuetext", value_text)
            .attr("data-state", state.data_state())
            .attr("data-value", state.value)
            .attr("data-max", state.max)
            .children(self.props.provide_children(state))
            .build()
    }
}

/// Filled part of the bar, translated by the remaining percentage.
#[derive(Debug, Clone, Default)]
pub struct ProgressIndicator {
    pub props: PrimitiveProps,
}

impl Component for ProgressIndicator {
    fn display_name(&self) -> &'static str {
        "ProgressIndicator"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<ProgressState>(cx, "ProgressIndicator");
        let offset = PropValue::from(100.0 - state.percent())
            .to_attr_text()
            .unwrap_or_default();
        self.props
            .part("div")
            .attr("data-state", state.data_state())
            .attr("data-value", state.value)
            .attr("data-max", state.max)
            .attr("style", format_compact!("transform: translateX(-{offset}%)"))
            .build()
    }
}
