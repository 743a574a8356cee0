use brandcheck_core::models::{ColorSet, FontSet, HexColor, Rgb};
use proptest::prelude::*;

fn rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn hex_roundtrips_through_rgb(color in rgb()) {
        let hex = HexColor::from(color);
        prop_assert_eq!(hex.to_rgb(), color);
        prop_assert_eq!(HexColor::parse(hex.as_str()), Some(hex.clone()));
        prop_assert_eq!(HexColor::parse(&hex.as_str().to_lowercase()), Some(hex));
    }

    #[test]
    fn color_set_ignores_order_and_duplicates(colors in prop::collection::vec(rgb(), 0..20)) {
        let forward: ColorSet = colors.iter().copied().collect();
        let mut doubled = colors.clone();
        doubled.extend(colors.iter().rev().copied());
        let backward: ColorSet = doubled.into_iter().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn subset_iff_difference_empty(
        a in prop::collection::vec(rgb(), 0..8),
        b in prop::collection::vec(rgb(), 0..8),
    ) {
        let a: ColorSet = a.into_iter().collect();
        let b: ColorSet = b.into_iter().collect();
        prop_assert_eq!(a.is_subset(&b), a.difference(&b).is_empty());
    }

    #[test]
    fn font_subset_iff_difference_empty(
        a in prop::collection::vec("[A-Z][a-z]{1,6}", 0..5),
        b in prop::collection::vec("[A-Z][a-z]{1,6}", 0..5),
    ) {
        let a: FontSet = a.into_iter().collect();
        let b: FontSet = b.into_iter().collect();
        prop_assert_eq!(a.is_subset(&b), a.difference(&b).is_empty());
        prop_assert!(a.is_subset(&a));
    }
}
