//! Integration tests for the config wire format.
//!
//! These tests verify that every reachable `UserConfig` value survives a
//! JSON round trip through the public API — all three effectiveness tiers
//! crossed with all eight subsets of the three glyph levels — and that the
//! command interpreter can actually reach those values from the default.

use std::collections::BTreeSet;

use spooky_core::{Command, Effectiveness, SpookyLevel, UserConfig};

/// Serializes a config and parses it back, asserting equality.
fn roundtrip(config: &UserConfig) -> UserConfig {
    let json = serde_json::to_string(config).expect("serialize must succeed");
    let restored: UserConfig = serde_json::from_str(&json).expect("parse must succeed");
    assert_eq!(&restored, config);
    restored
}

/// All eight subsets of the three levels.
fn all_level_subsets() -> Vec<BTreeSet<SpookyLevel>> {
    let mut subsets = Vec::with_capacity(8);
    for mask in 0u8..8 {
        let mut set = BTreeSet::new();
        for (bit, level) in SpookyLevel::ALL.into_iter().enumerate() {
            if mask & (1 << bit) != 0 {
                set.insert(level);
            }
        }
        subsets.push(set);
    }
    subsets
}

#[test]
fn test_roundtrip_every_tier_and_level_subset() {
    let tiers = [Effectiveness::Min, Effectiveness::Normal, Effectiveness::Max];
    for tier in tiers {
        for levels in all_level_subsets() {
            for keep in [false, true] {
                let config = UserConfig {
                    levels: levels.clone(),
                    effectiveness: tier,
                    keep_spooky_symbols: keep,
                };
                roundtrip(&config);
            }
        }
    }
}

#[test]
fn test_every_subset_is_reachable_via_commands() {
    // Starting from the default ({MID}), add/remove commands must be able to
    // produce any subset.
    for target in all_level_subsets() {
        let mut config = UserConfig::default();
        for level in SpookyLevel::ALL {
            config = if target.contains(&level) {
                Command::AddLevel(level).apply(&config)
            } else {
                Command::RemoveLevel(level).apply(&config)
            };
        }
        assert_eq!(config.levels, target);
    }
}

#[test]
fn test_roundtrip_preserves_default_exactly() {
    let restored = roundtrip(&UserConfig::default());
    assert_eq!(restored, UserConfig::default());
}
