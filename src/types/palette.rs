//! Builtin palette of named sprite colours.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Colour;

/// Declaration order is kept so listings read the same way the table does.
const BUILTIN_COLOURS: &[(&str, Colour)] = &[
    // Greens
    ("grass_light", Colour::rgb(98, 168, 68)),
    ("grass_dark", Colour::rgb(68, 138, 48)),
    ("tree_dark", Colour::rgb(34, 82, 34)),
    ("tree_light", Colour::rgb(54, 112, 54)),
    ("shrub", Colour::rgb(78, 128, 58)),
    ("plant_green", Colour::rgb(88, 178, 88)),
    // Browns
    ("dirt_light", Colour::rgb(158, 118, 78)),
    ("dirt_dark", Colour::rgb(128, 88, 58)),
    ("wood_light", Colour::rgb(168, 128, 88)),
    ("wood_med", Colour::rgb(138, 98, 58)),
    ("wood_dark", Colour::rgb(108, 78, 48)),
    ("bark", Colour::rgb(88, 58, 38)),
    // Stone
    ("stone_light", Colour::rgb(148, 148, 148)),
    ("stone_med", Colour::rgb(118, 118, 118)),
    ("stone_dark", Colour::rgb(88, 88, 88)),
    ("wall_dark", Colour::rgb(68, 68, 68)),
    // Water
    ("water_light", Colour::rgb(88, 148, 218)),
    ("water_dark", Colour::rgb(58, 118, 188)),
    ("water_deep", Colour::rgb(38, 88, 158)),
    // Metals
    ("metal_light", Colour::rgb(178, 178, 188)),
    ("metal_dark", Colour::rgb(128, 128, 138)),
    ("gold", Colour::rgb(218, 178, 58)),
    ("gold_dark", Colour::rgb(178, 138, 38)),
    // Creatures
    ("skin", Colour::rgb(218, 178, 138)),
    ("skin_dark", Colour::rgb(188, 148, 108)),
    ("beard_brown", Colour::rgb(98, 68, 48)),
    ("goblin_green", Colour::rgb(88, 138, 68)),
    ("goblin_dark", Colour::rgb(58, 108, 48)),
    ("wolf_gray", Colour::rgb(128, 128, 128)),
    ("wolf_dark", Colour::rgb(88, 88, 88)),
    ("bear_brown", Colour::rgb(118, 78, 48)),
    ("bear_dark", Colour::rgb(88, 58, 38)),
    ("giant_purple", Colour::rgb(138, 108, 148)),
    ("undead_pale", Colour::rgb(158, 178, 158)),
    ("undead_dark", Colour::rgb(108, 128, 108)),
    // Items
    ("bread", Colour::rgb(218, 178, 98)),
    ("meat_red", Colour::rgb(198, 78, 78)),
    ("meat_dark", Colour::rgb(158, 58, 58)),
    ("ale", Colour::rgb(168, 118, 48)),
    ("fabric_red", Colour::rgb(178, 68, 68)),
    ("fabric_blue", Colour::rgb(68, 98, 158)),
    // UI
    ("select_yellow", Colour::rgb(255, 238, 68)),
    ("select_orange", Colour::rgb(255, 178, 38)),
    // Special
    ("empty", Colour::rgb(28, 28, 38)),
    ("black", Colour::BLACK),
    ("white", Colour::WHITE),
];

static BUILTIN: LazyLock<Palette> =
    LazyLock::new(|| Palette::from_entries(BUILTIN_COLOURS));

/// A fixed collection of named colours.
///
/// Palettes are immutable once built; the builtin one is constructed on
/// first access and shared for the rest of the process.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Colours in declaration order
    entries: Vec<(String, Colour)>,

    /// Name -> index into `entries`
    index: HashMap<String, usize>,
}

impl Palette {
    /// Build a palette from `(name, colour)` pairs.
    ///
    /// Later duplicates of a name are ignored so lookups stay unambiguous.
    pub fn from_entries(entries: &[(&str, Colour)]) -> Self {
        let mut palette = Self {
            entries: Vec::with_capacity(entries.len()),
            index: HashMap::with_capacity(entries.len()),
        };

        for &(colour_name, colour) in entries {
            if palette.index.contains_key(colour_name) {
                continue;
            }
            palette.index.insert(colour_name.to_string(), palette.entries.len());
            palette.entries.push((colour_name.to_string(), colour));
        }

        palette
    }

    /// The builtin sprite palette.
    pub fn builtin() -> &'static Palette {
        &BUILTIN
    }

    /// Get a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        // Strip $ prefix if present
        let name = name.strip_prefix('$').unwrap_or(name);
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    /// Check if a colour name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Find the first colour name (in declaration order) for an RGB value.
    ///
    /// Alpha is ignored since palette colours are always opaque.
    pub fn name_of(&self, colour: Colour) -> Option<&str> {
        let colour = colour.opaque();
        self.entries
            .iter()
            .find(|(_, c)| *c == colour)
            .map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, colour)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Colour)> {
        self.entries.iter().map(|(name, c)| (name.as_str(), *c))
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_palette_size() {
        let palette = Palette::builtin();
        assert_eq!(palette.len(), 46);
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_builtin_names_unique() {
        let names: HashSet<&str> = BUILTIN_COLOURS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), BUILTIN_COLOURS.len());
    }

    #[test]
    fn test_get_known_colours() {
        let palette = Palette::builtin();
        assert_eq!(palette.get("wall_dark"), Some(Colour::rgb(68, 68, 68)));
        assert_eq!(palette.get("select_yellow"), Some(Colour::rgb(255, 238, 68)));
        assert_eq!(palette.get("$empty"), Some(Colour::rgb(28, 28, 38)));
        assert_eq!(palette.get("nonexistent"), None);
        assert!(palette.contains("gold"));
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Palette::builtin(), Palette::builtin()));
    }

    #[test]
    fn test_declaration_order() {
        let palette = Palette::builtin();
        let names: Vec<&str> = palette.iter().map(|(name, _)| name).collect();
        assert_eq!(names.first(), Some(&"grass_light"));
        assert_eq!(names.last(), Some(&"white"));
    }

    #[test]
    fn test_name_of_prefers_first_declared() {
        let palette = Palette::builtin();
        // stone_dark and wolf_dark share (88, 88, 88)
        assert_eq!(palette.name_of(Colour::rgb(88, 88, 88)), Some("stone_dark"));
        assert_eq!(palette.name_of(Colour::new(0, 0, 0, 10)), Some("black"));
        assert_eq!(palette.name_of(Colour::rgb(1, 2, 3)), None);
    }

    #[test]
    fn test_from_entries_ignores_duplicates() {
        let palette = Palette::from_entries(
            &[("a", Colour::BLACK), ("a", Colour::WHITE), ("b", Colour::WHITE)],
        );
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("a"), Some(Colour::BLACK));
    }
}
