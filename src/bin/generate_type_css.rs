// Standalone build-time tool: regenerate the type icon stylesheet from a
// directory of images. Usage:
//
//   generate-type-css [icons_dir] [out_css]
//
// Defaults match the site layout: assets/types -> css/types-icons.css.

use anyhow::{Context, Result};
use std::path::PathBuf;

use pokehub::infrastructure::generate_type_stylesheet;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let icons_dir = PathBuf::from(args.next().unwrap_or_else(|| "assets/types".to_string()));
    let out_css =
        PathBuf::from(args.next().unwrap_or_else(|| "css/types-icons.css".to_string()));

    let count = generate_type_stylesheet(&icons_dir, &out_css, "../assets/types")
        .with_context(|| format!("generating {}", out_css.display()))?;

    println!("Wrote {} ({} type icons)", out_css.display(), count);
    Ok(())
}
