//! Region classification for free-text labels.

use starwatch_types::Region;

/// Substring rules in priority order; first match wins.
/// "feldip" is special-cased into Kandarin for display grouping.
const RULES: &[(&[&str], Region)] = &[
    (&["asg"], Region::Asgarnia),
    (&["kand"], Region::Kandarin),
    (&["wilder"], Region::Wilderness),
    (&["des", "kharid", "menaph"], Region::KharidianDesert),
    (&["mist", "varrock", "lumb"], Region::Misthalin),
    (&["pisc", "gnome", "tir"], Region::PiscGnomeTirannwn),
    (&["frem", "lunar"], Region::FremLunar),
    (&["feldip"], Region::Kandarin),
];

/// Map a raw region label to a canonical region. Total: anything that
/// matches no rule falls back to Misthalin.
pub fn classify_region(label: &str) -> Region {
    let lower = label.to_ascii_lowercase();
    for (keywords, region) in RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *region;
        }
    }
    Region::Misthalin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_canonical_names() {
        assert_eq!(classify_region("Asgarnia"), Region::Asgarnia);
        assert_eq!(classify_region("Kandarin"), Region::Kandarin);
        assert_eq!(classify_region("Wilderness"), Region::Wilderness);
        assert_eq!(classify_region("Kharidian Desert"), Region::KharidianDesert);
        assert_eq!(classify_region("Misthalin"), Region::Misthalin);
        assert_eq!(
            classify_region("Piscatoris/Gnome/Tirannwn"),
            Region::PiscGnomeTirannwn
        );
        assert_eq!(classify_region("Fremennik/Lunar"), Region::FremLunar);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify_region("ASGARNIA"), Region::Asgarnia);
        assert_eq!(classify_region("wILDERness"), Region::Wilderness);
    }

    #[test]
    fn test_classify_landmark_keywords() {
        assert_eq!(classify_region("Al Kharid"), Region::KharidianDesert);
        assert_eq!(classify_region("Menaphos"), Region::KharidianDesert);
        assert_eq!(classify_region("Varrock east bank"), Region::Misthalin);
        assert_eq!(classify_region("Lumbridge swamp"), Region::Misthalin);
        assert_eq!(classify_region("Gnome Stronghold"), Region::PiscGnomeTirannwn);
        assert_eq!(classify_region("Lunar Isle"), Region::FremLunar);
    }

    #[test]
    fn test_feldip_groups_into_kandarin() {
        assert_eq!(classify_region("Feldip Hills"), Region::Kandarin);
    }

    #[test]
    fn test_unknown_label_falls_back_to_misthalin() {
        assert_eq!(classify_region(""), Region::Misthalin);
        assert_eq!(classify_region("???"), Region::Misthalin);
        assert_eq!(classify_region("somewhere else entirely"), Region::Misthalin);
    }
}
