use recipes::Catalog;

use crate::state::VersionInfo;
use crate::Result;

pub(crate) fn print_info() -> Result<()> {
    let versions = VersionInfo::from_build();
    println!("{} {}", env!("CARGO_PKG_NAME"), versions.pkg_version);
    println!();

    let catalog = Catalog::from_embedded()?;

    println!("Recipes:");
    for recipe in catalog.recipes() {
        let title = recipe.name();
        let url = format!("/recipes/{}", recipe.id());

        println!("{title}: {url}");
    }

    Ok(())
}
