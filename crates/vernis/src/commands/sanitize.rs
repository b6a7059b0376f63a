//! Sanitize command - Strip presentation-only props from a JSON prop bag

use crate::config::RenderConfig;
use crate::error::CliError;
use clap::Args;
use vernis_atelier::sanitize;
use vernis_relief::Props;

#[derive(Args)]
pub struct SanitizeArgs {
    /// Prop bag as a JSON object (e.g. `{"loading": true, "id": "x"}`)
    pub props: String,
}

pub fn run(args: SanitizeArgs, render: &RenderConfig) -> Result<(), CliError> {
    println!("{}", execute(&args, render)?);
    Ok(())
}

pub fn execute(args: &SanitizeArgs, render: &RenderConfig) -> Result<String, CliError> {
    let props = Props::from_json(&args.props)?;
    let clean = sanitize(&props);
    tracing::debug!(before = props.len(), after = clean.len(), "sanitized");
    Ok(render.to_json(&clean)?)
}
