//! Page command - Render a landing page from typed section layouts

use crate::config::RenderConfig;
use crate::error::CliError;
use clap::Args;
use vernis_atelier::{FooterLayout, HeroLayout, LandingPage, NavLayout, PageContent};
use vernis_relief::render_with_options;

#[derive(Args)]
pub struct PageArgs {
    /// Navigation layout (simple, centered, split)
    #[arg(long, default_value = "simple")]
    pub nav: String,

    /// Hero layout (centered, split, minimal)
    #[arg(long, default_value = "centered")]
    pub hero: String,

    /// Footer layout (simple, columns, minimal)
    #[arg(long, default_value = "simple")]
    pub footer: String,

    /// Brand name shown in the navigation and footer
    #[arg(long)]
    pub brand: Option<String>,

    /// Hero title
    #[arg(long)]
    pub title: Option<String>,

    /// Hero tagline
    #[arg(long)]
    pub tagline: Option<String>,
}

pub fn run(args: PageArgs, render: &RenderConfig) -> Result<(), CliError> {
    println!("{}", execute(&args, render)?);
    Ok(())
}

pub fn execute(args: &PageArgs, render: &RenderConfig) -> Result<String, CliError> {
    let mut content = PageContent::default();
    if let Some(ref brand) = args.brand {
        content.brand = brand.as_str().into();
    }
    if let Some(ref title) = args.title {
        content.title = title.as_str().into();
    }
    if let Some(ref tagline) = args.tagline {
        content.tagline = tagline.as_str().into();
    }

    let page = LandingPage {
        nav: args.nav.parse::<NavLayout>()?,
        hero: args.hero.parse::<HeroLayout>()?,
        footer: args.footer.parse::<FooterLayout>()?,
        content,
    };
    Ok(render_with_options(&page.into_node(), render.render_options()))
}
