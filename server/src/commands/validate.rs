use recipes::Catalog;

use crate::Result;

pub(crate) fn validate() -> Result<()> {
    let catalog = Catalog::from_embedded()?;

    catalog.validate()?;

    println!(
        "{} recipes, {} authors, {} categories",
        catalog.recipes().len(),
        catalog.authors().len(),
        catalog.categories().len()
    );

    Ok(())
}
