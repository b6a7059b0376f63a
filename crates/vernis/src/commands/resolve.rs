//! Resolve command - Print the class string for a variant configuration

use crate::error::CliError;
use clap::Args;
use vernis_atelier::ComponentKind;
use vernis_tint::{resolve_class, VariantConfig};

#[derive(Args)]
pub struct ResolveArgs {
    /// Component name (e.g. `button`)
    pub component: String,

    /// Axis value, repeatable (e.g. `--set variant=destructive`)
    #[arg(long = "set", value_name = "AXIS=VALUE")]
    pub set: Vec<String>,

    /// Enable a modifier, repeatable (e.g. `--on loading`)
    #[arg(long = "on", value_name = "MODIFIER")]
    pub on: Vec<String>,

    /// Extra classes appended after the resolved ones
    #[arg(long)]
    pub class: Option<String>,
}

pub fn run(args: ResolveArgs) -> Result<(), CliError> {
    println!("{}", execute(&args)?);
    Ok(())
}

fn parse_set(pair: &str) -> Result<(&str, &str), CliError> {
    pair.split_once('=')
        .map(|(axis, value)| (axis.trim(), value.trim()))
        .filter(|(axis, value)| !axis.is_empty() && !value.is_empty())
        .ok_or_else(|| CliError::InvalidSet(pair.to_string()))
}

pub fn execute(args: &ResolveArgs) -> Result<String, CliError> {
    let kind = ComponentKind::parse(&args.component)?;
    let table = kind.require_table()?;
    let pairs = args
        .set
        .iter()
        .map(|pair| parse_set(pair))
        .collect::<Result<Vec<_>, _>>()?;

    let mut config = VariantConfig::new();
    for (axis, value) in pairs {
        match table.axis(axis) {
            None => tracing::warn!(table = table.name, axis, "unknown axis; ignored"),
            Some(a) if a.fragment(value).is_none() => {
                tracing::warn!(table = table.name, axis, value, "unknown value; using '{}'", a.default)
            }
            Some(_) => {}
        }
        config = config.with(axis, value);
    }
    for modifier in &args.on {
        if table.modifier(modifier).is_none() {
            tracing::warn!(table = table.name, modifier = %modifier, "unknown modifier; ignored");
        }
        config = config.modifier(modifier, true);
    }

    Ok(resolve_class(table, &config, args.class.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_atelier::components::BUTTON_TABLE;

    fn args(component: &str, set: &[&str], on: &[&str]) -> ResolveArgs {
        ResolveArgs {
            component: component.to_string(),
            set: set.iter().map(|s| s.to_string()).collect(),
            on: on.iter().map(|s| s.to_string()).collect(),
            class: None,
        }
    }

    #[test]
    fn test_resolve_button() {
        let class = execute(&args("button", &["variant=destructive", "size=lg"], &["loading"])).unwrap();
        let expected = resolve_class(
            &BUTTON_TABLE,
            &VariantConfig::new()
                .with("variant", "destructive")
                .with("size", "lg")
                .modifier("loading", true),
            None,
        );
        assert_eq!(class, expected);
    }

    #[test]
    fn test_unknown_value_is_default() {
        let fancy = execute(&args("button", &["variant=fancy"], &[])).unwrap();
        let plain = execute(&args("button", &[], &[])).unwrap();
        assert_eq!(fancy, plain);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            execute(&args("carousel", &[], &[])),
            Err(CliError::Registry(_))
        ));
        assert!(matches!(execute(&args("card", &[], &[])), Err(CliError::Registry(_))));
        assert!(matches!(
            execute(&args("button", &["variant"], &[])),
            Err(CliError::InvalidSet(_))
        ));
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(parse_set("size = sm").unwrap(), ("size", "sm"));
        assert!(parse_set("=sm").is_err());
    }
}
