//! base16 → base24 palette derivation.

use crate::error::Error;
use crate::scheme::{Scheme, Variant};

/// Contrast used when the caller does not pick one.
pub const DEFAULT_CONTRAST: f64 = 0.5;

/// How a derived slot picks its lightness factor.
#[derive(Clone, Copy)]
enum Factor {
    /// Always `1 + contrast`.
    Brighten,
    /// `1 + contrast` on light schemes, `1 - contrast` on dark ones.
    ByVariant,
}

/// One row of the derivation table.
struct Derivation {
    slot: &'static str,
    source: &'static str,
    factor: Factor,
}

/// The slots added to a base16 palette, in evaluation order.
///
/// Order matters: each result is written back before the next row runs,
/// and `base11` reads the just-derived `base10`, not `base00`.
const DERIVATIONS: [Derivation; 8] = [
    Derivation { slot: "base10", source: "base00", factor: Factor::ByVariant },
    Derivation { slot: "base11", source: "base10", factor: Factor::ByVariant },
    Derivation { slot: "base12", source: "base08", factor: Factor::Brighten },
    Derivation { slot: "base13", source: "base0A", factor: Factor::Brighten },
    Derivation { slot: "base14", source: "base0B", factor: Factor::Brighten },
    Derivation { slot: "base15", source: "base0C", factor: Factor::Brighten },
    Derivation { slot: "base16", source: "base0D", factor: Factor::Brighten },
    Derivation { slot: "base17", source: "base0E", factor: Factor::Brighten },
];

/// Derive the eight base24 slots from a base16 scheme.
///
/// Returns a new scheme: the input's 16 slots unchanged, `base10` to
/// `base17` appended, and the `system` marker set to `"base24"`.  The
/// input is never modified, so a failed derivation leaves nothing
/// half-built behind.
///
/// `contrast` controls how far lightness moves: each derived slot
/// scales its source's lightness by `1 + contrast` (or `1 - contrast`
/// for the background slots of a dark scheme).  It is deliberately not
/// range-checked; extreme values just clamp harder.
pub fn derive_base24(scheme: &Scheme, contrast: f64) -> Result<Scheme, Error> {
    let variant: Variant = scheme.variant.parse()?;
    let brighten = 1. + contrast;
    let darken = 1. - contrast;

    let mut derived = scheme.clone();
    for row in &DERIVATIONS {
        let factor = match row.factor {
            Factor::Brighten => brighten,
            Factor::ByVariant if variant.is_light() => brighten,
            Factor::ByVariant => darken,
        };
        let color = derived.palette.color(row.source)?.scale_lightness(factor);
        derived.palette.insert(row.slot, color);
    }
    derived.system = "base24".to_string();
    Ok(derived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::scheme::{BASE16_SLOTS, BASE24_EXTRA_SLOTS};

    /// A dark scheme carrying only the seven slots the derivation
    /// table reads.
    fn sources_only() -> Scheme {
        Scheme::from_yaml(
            "system: base16\n\
             variant: dark\n\
             palette:\n  \
               base00: \"#181818\"\n  \
               base08: \"#ab4642\"\n  \
               base0A: \"#f7ca88\"\n  \
               base0B: \"#a1b56c\"\n  \
               base0C: \"#86c1b9\"\n  \
               base0D: \"#7cafc2\"\n  \
               base0E: \"#ba8baf\"\n",
        )
        .unwrap()
    }

    fn full_base16() -> Scheme {
        let mut scheme = sources_only();
        for slot in BASE16_SLOTS {
            if !scheme.palette.contains(slot) {
                scheme.palette.insert(slot, "#888888".parse().unwrap());
            }
        }
        scheme
    }

    fn hex(scheme: &Scheme, slot: &'static str) -> HexColor {
        scheme.palette.color(slot).unwrap()
    }

    #[test]
    fn output_is_complete_and_marked_base24() {
        let derived = derive_base24(&full_base16(), DEFAULT_CONTRAST).unwrap();
        assert_eq!(derived.system, "base24");
        assert_eq!(derived.palette.len(), 24);
        for slot in BASE16_SLOTS.into_iter().chain(BASE24_EXTRA_SLOTS) {
            assert!(derived.palette.contains(slot), "missing {slot}");
        }
    }

    #[test]
    fn original_slots_are_untouched() {
        let input = full_base16();
        let derived = derive_base24(&input, DEFAULT_CONTRAST).unwrap();
        for slot in BASE16_SLOTS {
            assert_eq!(derived.palette.get(slot), input.palette.get(slot));
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let input = full_base16();
        let once = derive_base24(&input, 0.37).unwrap();
        let twice = derive_base24(&input, 0.37).unwrap();
        assert_eq!(once.to_yaml().unwrap(), twice.to_yaml().unwrap());
    }

    #[test]
    fn base11_chains_off_derived_base10() {
        let derived = derive_base24(&sources_only(), DEFAULT_CONTRAST).unwrap();
        let darken = 1. - DEFAULT_CONTRAST;
        let base00 = hex(&derived, "base00");
        let base10 = hex(&derived, "base10");
        assert_eq!(base10, base00.scale_lightness(darken));
        assert_eq!(hex(&derived, "base11"), base10.scale_lightness(darken));
        // Chaining must be observable: base00 and base10 make
        // different parents here.
        assert_ne!(hex(&derived, "base11"), base00.scale_lightness(darken));
    }

    #[test]
    fn variant_flips_background_slots_only() {
        let dark = sources_only();
        let mut light = dark.clone();
        light.variant = "light".to_string();

        let from_dark = derive_base24(&dark, DEFAULT_CONTRAST).unwrap();
        let from_light = derive_base24(&light, DEFAULT_CONTRAST).unwrap();

        assert_ne!(hex(&from_dark, "base10"), hex(&from_light, "base10"));
        assert_ne!(hex(&from_dark, "base11"), hex(&from_light, "base11"));
        for slot in ["base12", "base13", "base14", "base15", "base16", "base17"] {
            assert_eq!(from_dark.palette.get(slot), from_light.palette.get(slot),
                       "{slot} must not depend on the variant");
        }
    }

    #[test]
    fn dark_scheme_darkens_background_and_brightens_accents() {
        let derived = derive_base24(&sources_only(), DEFAULT_CONTRAST).unwrap();
        let base00 = hex(&derived, "base00");
        assert!(hex(&derived, "base10").lightness() < base00.lightness());
        assert!(hex(&derived, "base11").lightness() < base00.lightness());
        for (slot, source) in [("base12", "base08"), ("base13", "base0A"),
                               ("base14", "base0B"), ("base15", "base0C"),
                               ("base16", "base0D"), ("base17", "base0E")] {
            assert!(hex(&derived, slot).lightness()
                        > hex(&derived, source).lightness(),
                    "{slot} must be brighter than {source}");
        }
    }

    #[test]
    fn extreme_contrast_clamps_instead_of_failing() {
        for contrast in [5., -2.] {
            let derived = derive_base24(&sources_only(), contrast).unwrap();
            for slot in BASE24_EXTRA_SLOTS {
                let l = hex(&derived, slot).lightness();
                assert!((0. ..=100.).contains(&l), "{slot} out of range: {l}");
            }
        }
    }

    #[test]
    fn missing_source_fails_before_any_output() {
        for variant in ["dark", "light"] {
            for contrast in [0.1, DEFAULT_CONTRAST, 2.] {
                let mut scheme = sources_only();
                scheme.variant = variant.to_string();
                scheme.palette.remove("base0D");
                let err = derive_base24(&scheme, contrast).unwrap_err();
                assert!(matches!(err,
                                 Error::MissingSourceColor { slot: "base0D" }));
            }
        }
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let mut scheme = sources_only();
        scheme.variant = "midtone".to_string();
        assert!(matches!(derive_base24(&scheme, DEFAULT_CONTRAST),
                         Err(Error::InvalidVariant { .. })));
    }
}
