//! Seed Collections
//!
//! The fixed, built-in worksheet content: wire detail fields, price fields,
//! and the static detail lines printed at the top of every bill. Labels and
//! units are the shop's Gujarati defaults.

use super::field::{Field, FieldKind, FieldValue};

/// (label, unit) pairs for the wire detail section
const WIRE_SEED: &[(&str, Option<&str>)] = &[
    ("મેઈન વાયર", Some("mm")),
    ("લાઈટ વાયર", Some("mm")),
    ("એ.સી. વાયર", Some("mm")),
    ("અર્થિંગ વાયર", Some("mm")),
    ("વાયર કંપની", None),
];

/// Labels for the price section; every seed price starts at 0
const PRICE_SEED: &[&str] = &[
    "લાઈટિંગ પોઈન્ટ",
    "મેઈન અને એ.સી. લાઈન 1.5mm",
    "મેઈન અને એ.સી. લાઈન 2.5mm",
    "પેનલ લાઈટ ફિટિંગ",
    "ફેન્સી લાઈટ ફિટિંગ",
    "સીલિંગ ફેન પોઈન્ટ",
    "વોલ ફેન પોઈન્ટ",
    "એ.સી. પોઈન્ટ",
    "ગીઝર પોઈન્ટ",
    "ટીવી પોઈન્ટ",
];

/// Label-only lines rendered under "Details" in the bill shell
pub const BASE_DETAILS: &[&str] = &[
    "નવું વાયરિંગ કામ",
    "જૂના વાયરિંગનું રિપેરિંગ",
    "સ્વીચ બોર્ડ ફિટિંગ",
    "પાઇપિંગ કામ",
];

/// Seed collection for a kind, ids 1..=n in list order
pub fn fields(kind: FieldKind) -> Vec<Field> {
    match kind {
        FieldKind::Wire => WIRE_SEED
            .iter()
            .enumerate()
            .map(|(i, (label, unit))| {
                let field = Field::new(i as u32 + 1, *label)
                    .with_value(FieldValue::Text(String::new()));
                match unit {
                    Some(u) => field.with_unit(*u),
                    None => field,
                }
            })
            .collect(),
        FieldKind::Price => PRICE_SEED
            .iter()
            .enumerate()
            .map(|(i, label)| {
                Field::new(i as u32 + 1, *label).with_value(FieldValue::Number(0.0))
            })
            .collect(),
    }
}

/// Static seed-list length for a kind; custom classification keys off this
pub fn len(kind: FieldKind) -> u32 {
    match kind {
        FieldKind::Wire => WIRE_SEED.len() as u32,
        FieldKind::Price => PRICE_SEED.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lengths_match() {
        assert_eq!(fields(FieldKind::Wire).len() as u32, len(FieldKind::Wire));
        assert_eq!(fields(FieldKind::Price).len() as u32, len(FieldKind::Price));
    }

    #[test]
    fn test_price_seeds_start_at_zero() {
        for field in fields(FieldKind::Price) {
            assert_eq!(field.value, Some(FieldValue::Number(0.0)));
        }
    }
}
