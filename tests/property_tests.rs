//! Property-based tests for tier selection, name normalization, and SMBIOS
//! identity generation

use hackintune::efi::normalize_tier_name;
use hackintune::smbios::{generate_identity, SERIAL_ALPHABET};
use hackintune::{select_tier, tier_name, TIERS};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tier_index(budget: u32) -> usize {
    let tier = select_tier(budget);
    TIERS
        .iter()
        .position(|t| std::ptr::eq(t, tier))
        .expect("selected tier comes from the static table")
}

proptest! {
    /// Every possible budget maps to exactly one bundle from the table.
    #[test]
    fn every_budget_selects_a_tier(budget in any::<u32>()) {
        let tier = select_tier(budget);
        prop_assert!(TIERS.iter().any(|t| std::ptr::eq(t, tier)));
        prop_assert_eq!(tier.name, tier_name(budget));
    }

    /// A bigger budget never selects a lower bundle.
    #[test]
    fn tier_selection_is_monotonic(a in any::<u32>(), b in any::<u32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier_index(lo) <= tier_index(hi));
    }

    /// Each slot contributes exactly one part, in slot order.
    #[test]
    fn picked_parts_come_from_their_slots(budget in any::<u32>(), seed in any::<u64>()) {
        let tier = select_tier(budget);
        let parts = tier.pick_parts(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(parts.len(), tier.slots.len());
        for (part, slot) in parts.iter().zip(tier.slots.iter()) {
            prop_assert!(slot.contains(part));
        }
    }

    /// Normalized names are always safe directory components.
    #[test]
    fn normalized_names_are_directory_safe(name in ".{0,64}") {
        let slug = normalize_tier_name(&name);
        prop_assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(!slug.starts_with('_'));
        prop_assert!(!slug.ends_with('_'));
        prop_assert!(!slug.contains("__"));
    }

    /// Generated identities keep their shape for every seed.
    #[test]
    fn smbios_identity_shape(seed in any::<u64>()) {
        let identity = generate_identity("iMac20,1", &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(identity.serial.len(), 12);
        prop_assert_eq!(identity.board_serial.len(), 17);
        prop_assert!(identity.board_serial.starts_with(&identity.serial));
        prop_assert!(identity
            .board_serial
            .bytes()
            .all(|b| SERIAL_ALPHABET.contains(&b)));

        let groups: Vec<&str> = identity.uuid.split('-').collect();
        prop_assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        prop_assert!(groups[2].starts_with('4'));
    }
}
