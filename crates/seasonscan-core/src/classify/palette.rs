//! Recommended and discouraged color palettes.
//!
//! Static lookup keyed by the final season label; best colors are specific
//! to the eight sub-variants, worst colors are shared per family. The hex
//! values are fixed product data, not derived from the measured features.

use super::season::{Season, SeasonFamily};

/// A named color entry.
#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub value: &'static str,
}

const fn entry(name: &'static str, value: &'static str) -> PaletteEntry {
    PaletteEntry { name, value }
}

const SPRING_WARM_BRIGHT: [PaletteEntry; 4] = [
    entry("Coral", "#FF6B6B"),
    entry("Golden Yellow", "#FFD93D"),
    entry("Bright Orange", "#FF9F43"),
    entry("Vivid Yellow", "#FFF222"),
];

const SPRING_WARM_LIGHT: [PaletteEntry; 4] = [
    entry("Peach", "#FFCBA4"),
    entry("Pale Yellow", "#FFF5BA"),
    entry("Salmon Pink", "#FFA07A"),
    entry("Ivory", "#FFFFF0"),
];

const SUMMER_COOL_BRIGHT: [PaletteEntry; 4] = [
    entry("Fuchsia Pink", "#FF69B4"),
    entry("Royal Blue", "#4169E1"),
    entry("Lavender", "#E6E6FA"),
    entry("Mint", "#98FF98"),
];

const SUMMER_COOL_LIGHT: [PaletteEntry; 4] = [
    entry("Powder Blue", "#B0E0E6"),
    entry("Rose Pink", "#FFB6C1"),
    entry("Lilac", "#C8A2C8"),
    entry("Light Gray", "#D3D3D3"),
];

const AUTUMN_WARM_DEEP: [PaletteEntry; 4] = [
    entry("Burgundy", "#800020"),
    entry("Dark Brown", "#654321"),
    entry("Olive Green", "#556B2F"),
    entry("Terracotta", "#E2725B"),
];

const AUTUMN_WARM_MUTE: [PaletteEntry; 4] = [
    entry("Khaki", "#967969"),
    entry("Camel", "#C19A6B"),
    entry("Mocha Brown", "#493D26"),
    entry("Antique Gold", "#CFB53B"),
];

const WINTER_COOL_DEEP: [PaletteEntry; 4] = [
    entry("Burgundy", "#800020"),
    entry("Dark Navy", "#000080"),
    entry("Emerald", "#50C878"),
    entry("Plum", "#673147"),
];

const WINTER_COOL_MUTE: [PaletteEntry; 4] = [
    entry("Charcoal Gray", "#36454F"),
    entry("Soft Navy", "#000F89"),
    entry("Burgundy", "#800020"),
    entry("Plum", "#673147"),
];

const SPRING_WORST: [PaletteEntry; 3] = [
    entry("Black", "#000000"),
    entry("Navy", "#000080"),
    entry("Cool Pastel", "#E6E6FA"),
];

const SUMMER_WORST: [PaletteEntry; 3] = [
    entry("Orange", "#FFA500"),
    entry("Brown", "#8B4513"),
    entry("Gold", "#FFD700"),
];

const AUTUMN_WORST: [PaletteEntry; 3] = [
    entry("Neon Green", "#39FF14"),
    entry("Silver", "#C0C0C0"),
    entry("Cool Pastel", "#E6E6FA"),
];

const WINTER_WORST: [PaletteEntry; 3] = [
    entry("Beige", "#F5F5DC"),
    entry("Khaki", "#967969"),
    entry("Tan", "#DAA520"),
];

/// Ordered list of colors that flatter the given season.
pub fn best_colors(season: Season) -> &'static [PaletteEntry] {
    match season {
        Season::SpringWarmBright => &SPRING_WARM_BRIGHT,
        Season::SpringWarmLight => &SPRING_WARM_LIGHT,
        Season::SummerCoolBright => &SUMMER_COOL_BRIGHT,
        Season::SummerCoolLight => &SUMMER_COOL_LIGHT,
        Season::AutumnWarmDeep => &AUTUMN_WARM_DEEP,
        Season::AutumnWarmMute => &AUTUMN_WARM_MUTE,
        Season::WinterCoolDeep => &WINTER_COOL_DEEP,
        Season::WinterCoolMute => &WINTER_COOL_MUTE,
    }
}

/// Ordered list of colors the season's family should avoid.
pub fn worst_colors(season: Season) -> &'static [PaletteEntry] {
    match season.family() {
        SeasonFamily::Spring => &SPRING_WORST,
        SeasonFamily::Summer => &SUMMER_WORST,
        SeasonFamily::Autumn => &AUTUMN_WORST,
        SeasonFamily::Winter => &WINTER_WORST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_season_has_a_full_palette() {
        for season in Season::ALL {
            assert_eq!(best_colors(season).len(), 4, "{:?}", season);
            assert_eq!(worst_colors(season).len(), 3, "{:?}", season);
        }
    }

    #[test]
    fn test_hex_values_are_well_formed() {
        for season in Season::ALL {
            for entry in best_colors(season).iter().chain(worst_colors(season)) {
                assert!(entry.value.starts_with('#'), "{}", entry.value);
                assert_eq!(entry.value.len(), 7, "{}", entry.value);
                assert!(
                    entry.value[1..].chars().all(|c| c.is_ascii_hexdigit()),
                    "{}",
                    entry.value
                );
            }
        }
    }

    #[test]
    fn test_variants_of_a_family_share_worst_colors() {
        assert_eq!(
            worst_colors(Season::WinterCoolDeep)[0].name,
            worst_colors(Season::WinterCoolMute)[0].name
        );
    }
}
