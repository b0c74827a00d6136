//! Display labels and units for nutrition keys.
//!
//! A nutrition key carries its unit as a trailing token, e.g. `calcium_mg`
//! or `vitamin_d_iu`. The only exception is `calories`, which is matched
//! by name and reported in kilocalories.

/// Marker shown in place of an amount that has no estimate.
pub const MISSING_AMOUNT: &str = "-";

/// Units a nutrition key can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientUnit {
    Kilocalories,
    Grams,
    Milligrams,
    InternationalUnits,
    Micrograms,
    /// No recognized suffix, the amount is shown bare
    Unitless,
}

impl NutrientUnit {
    /// Suffixed units in the order they are tested against a key.
    const SUFFIXED: [NutrientUnit; 4] = [
        NutrientUnit::Grams,
        NutrientUnit::Milligrams,
        NutrientUnit::InternationalUnits,
        NutrientUnit::Micrograms,
    ];

    /// Key suffix encoding this unit, if any.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            NutrientUnit::Grams => Some("_g"),
            NutrientUnit::Milligrams => Some("_mg"),
            NutrientUnit::InternationalUnits => Some("_iu"),
            NutrientUnit::Micrograms => Some("_mcg"),
            NutrientUnit::Kilocalories | NutrientUnit::Unitless => None,
        }
    }

    /// Text appended to an amount, including its leading space.
    pub fn display(self) -> &'static str {
        match self {
            NutrientUnit::Kilocalories => " kcal",
            NutrientUnit::Grams => " g",
            NutrientUnit::Milligrams => " mg",
            NutrientUnit::InternationalUnits => " IU",
            NutrientUnit::Micrograms => " mcg",
            NutrientUnit::Unitless => "",
        }
    }

    /// Infers the unit of a nutrition key.
    ///
    /// `calories` is checked first, then the suffixes from grams to
    /// micrograms; the first match wins.
    pub fn infer(key: &str) -> Self {
        if key == "calories" {
            return NutrientUnit::Kilocalories;
        }
        Self::SUFFIXED
            .into_iter()
            .find(|unit| unit.suffix().is_some_and(|suffix| key.ends_with(suffix)))
            .unwrap_or(NutrientUnit::Unitless)
    }
}

/// One resolved row of the nutrition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrientLabel {
    pub label: String,
    pub amount: String,
}

/// Turns a raw nutrition entry into the text shown for it.
pub trait NutrientLabelResolver {
    fn resolve(&self, key: &str, amount: Option<f64>) -> NutrientLabel;
}

/// Resolver for the suffix naming convention used by recipe catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixConvention;

impl NutrientLabelResolver for SuffixConvention {
    fn resolve(&self, key: &str, amount: Option<f64>) -> NutrientLabel {
        let unit = NutrientUnit::infer(key);
        NutrientLabel {
            label: label_for(key),
            amount: match amount {
                Some(value) => format!("{}{}", format_amount(value), unit.display()),
                None => MISSING_AMOUNT.to_string(),
            },
        }
    }
}

/// Resolves a nutrition entry with the [`SuffixConvention`].
///
/// # Examples
///
/// ```
/// use milk_depot::resolve;
///
/// let row = resolve("saturated_fat_g", Some(5.0));
/// assert_eq!(row.label, "Saturated fat");
/// assert_eq!(row.amount, "5 g");
/// ```
pub fn resolve(key: &str, amount: Option<f64>) -> NutrientLabel {
    SuffixConvention.resolve(key, amount)
}

// Suffixes stripped from the label, tried in this order.
const LABEL_SUFFIXES: [&str; 4] = ["_mg", "_iu", "_g", "_mcg"];

fn label_for(key: &str) -> String {
    let stem = LABEL_SUFFIXES
        .iter()
        .find_map(|suffix| key.strip_suffix(suffix))
        .unwrap_or(key);
    let spaced: String = stem
        .chars()
        .map(|c| if c == '_' { ' ' } else { c })
        .collect();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Very large and very small magnitudes switch to exponent form, e.g.
// `1e+21` and `1.5e-7`.
fn format_amount(value: f64) -> String {
    // -0 prints as "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{:e}", value);
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponent_form,
        };
    }
    value.to_string()
}
