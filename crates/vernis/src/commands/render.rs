//! Render command - Render a component to HTML

use crate::config::RenderConfig;
use crate::error::CliError;
use clap::Args;
use vernis_atelier::ComponentKind;
use vernis_relief::{render_with_options, Props};

#[derive(Args)]
pub struct RenderArgs {
    /// Component name (e.g. `dialog`)
    pub component: String,

    /// Props as a JSON object
    #[arg(long)]
    pub props: Option<String>,

    /// Child text
    #[arg(long)]
    pub text: Option<String>,
}

pub fn run(args: RenderArgs, render: &RenderConfig) -> Result<(), CliError> {
    println!("{}", execute(&args, render)?);
    Ok(())
}

pub fn execute(args: &RenderArgs, render: &RenderConfig) -> Result<String, CliError> {
    let kind = ComponentKind::parse(&args.component)?;
    let props = match args.props {
        Some(ref json) => Props::from_json(json)?,
        None => Props::new(),
    };
    let node = kind.build(&props, args.text.as_deref());
    Ok(render_with_options(&node, render.render_options()))
}
