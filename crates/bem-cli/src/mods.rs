//! # Mods Subcommand
//!
//! Lists the modifiers a DOM `class` attribute carries for one BEM scope.
//!
//! ```bash
//! bem mods "menu menu--open menu--size_l menu__item--active" --scope menu
//! # open
//! # size=l
//! ```

use anyhow::{Context, Result};
use clap::Args;

use bem_core::{BemBase, ClassList, Modifier};

use crate::config::CliConfig;

/// Arguments for the mods subcommand.
#[derive(Args, Debug)]
pub struct ModsArgs {
    /// The class attribute (whitespace-separated class names).
    pub class_attr: String,

    /// Block or block__element whose modifiers to list.
    #[arg(long)]
    pub scope: String,
}

/// Execute the mods subcommand.
pub fn run_mods(args: &ModsArgs, _config: &CliConfig) -> Result<u8> {
    for line in list_modifiers(&args.class_attr, &args.scope)? {
        println!("{line}");
    }
    Ok(0)
}

/// Render every in-scope modifier as `name` or `name=value`.
pub fn list_modifiers(class_attr: &str, scope: &str) -> Result<Vec<String>> {
    let scope = BemBase::new(scope).with_context(|| format!("invalid scope {scope:?}"))?;
    let list = ClassList::parse(class_attr);
    if list.skipped() > 0 {
        tracing::info!(skipped = list.skipped(), "ignored non-BEM class names");
    }
    Ok(list.modifiers_of(&scope).map(render_modifier).collect())
}

fn render_modifier(m: &Modifier) -> String {
    match m.value() {
        Some(value) => format!("{}={value}", m.name()),
        None => m.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_block_modifiers() {
        let lines = list_modifiers(
            "menu menu--open menu--size_l menu__item--active",
            "menu",
        )
        .unwrap();
        assert_eq!(lines, vec!["open", "size=l"]);
    }

    #[test]
    fn lists_element_modifiers() {
        let lines = list_modifiers("menu__item menu__item--active is_x", "menu__item").unwrap();
        assert_eq!(lines, vec!["active"]);
    }

    #[test]
    fn invalid_scope_errors() {
        assert!(list_modifiers("menu", "1menu").is_err());
    }
}
