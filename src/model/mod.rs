mod nutrient;
mod recipe;

pub use nutrient::{
    resolve, NutrientLabel, NutrientLabelResolver, NutrientUnit, SuffixConvention, MISSING_AMOUNT,
};
pub use recipe::{Nutrition, Recipe};
