//! List command implementation.
//!
//! Prints the sprite registry in generation order, one `Category/name`
//! per line on stdout.

use clap::Args;

use crate::error::Result;
use crate::sprites::{self, Category, SpriteDef};

/// List registered sprites
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only list sprites in this category
    #[arg(long, short, value_enum)]
    pub category: Option<Category>,
}

pub fn run(args: ListArgs) -> Result<()> {
    for line in lines(args.category) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(category: Option<Category>) -> Vec<String> {
    let selected: Vec<&SpriteDef> = match category {
        Some(category) => sprites::in_category(category).iter().collect(),
        None => sprites::all().collect(),
    };

    selected
        .into_iter()
        .map(|s| format!("{}/{}", s.category, s.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_lists_everything_in_order() {
        let all = lines(None);
        assert_eq!(all.len(), 39);
        assert_eq!(all[0], "Terrain/terrain_empty_air");
        assert_eq!(all[38], "UI/ui_selection");
    }

    #[test]
    fn test_category_filter() {
        let creatures = lines(Some(Category::Creatures));
        assert_eq!(creatures.len(), 6);
        assert!(creatures.iter().all(|l| l.starts_with("Creatures/creature_")));
    }

    #[test]
    fn test_category_value_names() {
        assert_eq!(Category::from_str("items", true).unwrap(), Category::Items);
        assert_eq!(Category::from_str("ui", true).unwrap(), Category::Ui);
    }
}
