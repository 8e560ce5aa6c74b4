//! The eight-season taxonomy.

use serde::Serialize;

/// The four seasonal families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonFamily {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SeasonFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonFamily::Spring => "spring",
            SeasonFamily::Summer => "summer",
            SeasonFamily::Autumn => "autumn",
            SeasonFamily::Winter => "winter",
        }
    }
}

/// One of the eight personal color seasons: four families, each with a
/// vivid and a soft sub-variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    SpringWarmBright,
    SpringWarmLight,
    SummerCoolBright,
    SummerCoolLight,
    AutumnWarmDeep,
    AutumnWarmMute,
    WinterCoolDeep,
    WinterCoolMute,
}

impl Season {
    pub const ALL: [Season; 8] = [
        Season::SpringWarmBright,
        Season::SpringWarmLight,
        Season::SummerCoolBright,
        Season::SummerCoolLight,
        Season::AutumnWarmDeep,
        Season::AutumnWarmMute,
        Season::WinterCoolDeep,
        Season::WinterCoolMute,
    ];

    /// The wire label for this season.
    pub fn label(&self) -> &'static str {
        match self {
            Season::SpringWarmBright => "spring-warm-bright",
            Season::SpringWarmLight => "spring-warm-light",
            Season::SummerCoolBright => "summer-cool-bright",
            Season::SummerCoolLight => "summer-cool-light",
            Season::AutumnWarmDeep => "autumn-warm-deep",
            Season::AutumnWarmMute => "autumn-warm-mute",
            Season::WinterCoolDeep => "winter-cool-deep",
            Season::WinterCoolMute => "winter-cool-mute",
        }
    }

    pub fn family(&self) -> SeasonFamily {
        match self {
            Season::SpringWarmBright | Season::SpringWarmLight => SeasonFamily::Spring,
            Season::SummerCoolBright | Season::SummerCoolLight => SeasonFamily::Summer,
            Season::AutumnWarmDeep | Season::AutumnWarmMute => SeasonFamily::Autumn,
            Season::WinterCoolDeep | Season::WinterCoolMute => SeasonFamily::Winter,
        }
    }

    /// The one-line palette guidance reported with the characteristics.
    pub fn summary(&self) -> &'static str {
        match self {
            Season::SpringWarmBright => "Clear, bright colors suit you best",
            Season::SpringWarmLight => "Soft, light colors suit you best",
            Season::SummerCoolBright => "Vivid pastel colors suit you best",
            Season::SummerCoolLight => "Gentle pastel colors suit you best",
            Season::AutumnWarmDeep => "Rich, deep autumn colors suit you best",
            Season::AutumnWarmMute => "Calm, subdued colors suit you best",
            Season::WinterCoolDeep => "Sharp, strong colors suit you best",
            Season::WinterCoolMute => "Calm, deep colors suit you best",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique_and_kebab_case() {
        let mut labels: Vec<&str> = Season::ALL.iter().map(Season::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 8);

        for label in labels {
            assert!(label.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }

    #[test]
    fn test_each_family_has_two_variants() {
        for family in [
            SeasonFamily::Spring,
            SeasonFamily::Summer,
            SeasonFamily::Autumn,
            SeasonFamily::Winter,
        ] {
            let count = Season::ALL.iter().filter(|s| s.family() == family).count();
            assert_eq!(count, 2, "family {:?}", family);
        }
    }

    #[test]
    fn test_serde_label_matches_display_label() {
        let json = serde_json::to_string(&Season::SpringWarmBright).unwrap();
        assert_eq!(json, "\"spring-warm-bright\"");
    }
}
