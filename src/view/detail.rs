use super::model::{
    Alignment, DetailView, NutritionRow, NutritionTable, OptionalSection, PlaceholderCell,
    TextSegment, TextStyle, NO_DESCRIPTION, NO_INGREDIENTS, NO_NUTRITION,
};
use super::ViewError;
use crate::model::{NutrientLabelResolver, Nutrition, Recipe, SuffixConvention};
use crate::store::RecipeStore;
use log::{debug, warn};

/// Builds the detail screen for the recipe with `id`.
///
/// # Errors
///
/// Returns `ViewError::RecipeNotFound` without rendering anything if the
/// store has no recipe with that id.
pub fn render_detail_by_id(store: &RecipeStore, id: &str) -> Result<DetailView, ViewError> {
    match store.find(id) {
        Some(recipe) => Ok(render_detail(recipe)),
        None => {
            warn!("Recipe not found for id {:?}", id);
            Err(ViewError::RecipeNotFound(id.to_string()))
        }
    }
}

/// Builds the detail screen for a recipe using the suffix naming
/// convention for nutrition labels.
pub fn render_detail(recipe: &Recipe) -> DetailView {
    render_detail_with(recipe, &SuffixConvention)
}

/// Builds the detail screen with a custom nutrition label resolver.
pub fn render_detail_with<R>(recipe: &Recipe, resolver: &R) -> DetailView
where
    R: NutrientLabelResolver + ?Sized,
{
    debug!("Rendering detail view for {}", recipe.id);

    DetailView {
        header: recipe.name.clone(),
        ingredients: ingredient_lines(&recipe.ingredients),
        flavorings: OptionalSection::from_lines(recipe.flavorings.clone()),
        description: description_segments(recipe.description.as_deref()),
        nutrition: nutrition_table(&recipe.nutrition, resolver),
    }
}

fn ingredient_lines(ingredients: &[String]) -> Vec<String> {
    if ingredients.is_empty() {
        vec![NO_INGREDIENTS.to_string()]
    } else {
        ingredients.to_vec()
    }
}

fn description_segments(description: Option<&str>) -> Vec<TextSegment> {
    let text = match description {
        Some(text) if !text.is_empty() => text,
        _ => return vec![TextSegment::Text(NO_DESCRIPTION.to_string())],
    };

    let mut segments = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            segments.push(TextSegment::LineBreak);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            segments.push(TextSegment::Text(line.to_string()));
        }
    }
    segments
}

fn nutrition_table<R>(nutrition: &Nutrition, resolver: &R) -> NutritionTable
where
    R: NutrientLabelResolver + ?Sized,
{
    if nutrition.is_empty() {
        return NutritionTable {
            rows: vec![NutritionRow::Placeholder(PlaceholderCell {
                text: NO_NUTRITION.to_string(),
                column_span: NutritionTable::COLUMNS,
                alignment: Alignment::Center,
                style: TextStyle::Informational,
            })],
        };
    }

    NutritionTable {
        rows: nutrition
            .iter()
            .map(|(key, amount)| {
                let resolved = resolver.resolve(key, amount);
                NutritionRow::Nutrient {
                    label: resolved.label,
                    amount: resolved.amount,
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NutrientLabel;
    use crate::store::LoadOptions;

    fn almond() -> Recipe {
        Recipe {
            id: "almond001".to_string(),
            name: "Classic Creamy Almond".to_string(),
            ingredients: vec!["1 cup Raw Almonds (soaking optional)".to_string()],
            flavorings: vec![
                "1 tbsp Maple Syrup".to_string(),
                "1/2 tsp Vanilla Extract".to_string(),
            ],
            description: Some("Smooth and sweet.\n\nGreat in coffee.".to_string()),
            nutrition: Nutrition::from_iter([
                ("calories", Some(65.0)),
                ("saturated_fat_g", Some(0.5)),
                ("vitamin_d_iu", None),
            ]),
        }
    }

    fn bare(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: "Bare".to_string(),
            ingredients: Vec::new(),
            flavorings: Vec::new(),
            description: None,
            nutrition: Nutrition::new(),
        }
    }

    #[test]
    fn test_full_detail_view() {
        let view = render_detail(&almond());

        assert_eq!(view.header, "Classic Creamy Almond");
        assert_eq!(view.ingredients, vec!["1 cup Raw Almonds (soaking optional)"]);
        assert!(view.flavorings.visible);
        assert_eq!(view.flavorings.lines.len(), 2);
        assert_eq!(
            view.description,
            vec![
                TextSegment::Text("Smooth and sweet.".to_string()),
                TextSegment::LineBreak,
                TextSegment::LineBreak,
                TextSegment::Text("Great in coffee.".to_string()),
            ]
        );
        assert_eq!(
            view.nutrition.rows,
            vec![
                NutritionRow::Nutrient {
                    label: "Calories".to_string(),
                    amount: "65 kcal".to_string()
                },
                NutritionRow::Nutrient {
                    label: "Saturated fat".to_string(),
                    amount: "0.5 g".to_string()
                },
                NutritionRow::Nutrient {
                    label: "Vitamin d".to_string(),
                    amount: "-".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_fallbacks_for_missing_fields() {
        let view = render_detail(&bare("b1"));

        assert_eq!(view.ingredients, vec![NO_INGREDIENTS]);
        assert_eq!(view.flavorings, OptionalSection::default());
        assert!(!view.flavorings.visible);
        assert!(view.flavorings.lines.is_empty());
        assert_eq!(
            view.description,
            vec![TextSegment::Text(NO_DESCRIPTION.to_string())]
        );
    }

    #[test]
    fn test_empty_description_uses_fallback() {
        let mut recipe = bare("b1");
        recipe.description = Some(String::new());
        assert_eq!(
            render_detail(&recipe).description,
            vec![TextSegment::Text(NO_DESCRIPTION.to_string())]
        );
    }

    #[test]
    fn test_empty_nutrition_single_spanning_row() {
        let view = render_detail(&bare("b1"));

        assert_eq!(view.nutrition.rows.len(), 1);
        match &view.nutrition.rows[0] {
            NutritionRow::Placeholder(cell) => {
                assert_eq!(cell.text, NO_NUTRITION);
                assert_eq!(cell.column_span, 2);
                assert_eq!(cell.alignment, Alignment::Center);
                assert_eq!(cell.style, TextStyle::Informational);
            }
            other => panic!("expected placeholder row, got {:?}", other),
        }
    }

    #[test]
    fn test_nutrition_rows_keep_insertion_order() {
        let mut recipe = bare("b1");
        recipe.nutrition = Nutrition::from_iter([
            ("zinc_mg", Some(1.0)),
            ("calories", Some(40.0)),
            ("biotin_mcg", Some(3.0)),
        ]);

        let labels: Vec<String> = render_detail(&recipe)
            .nutrition
            .rows
            .into_iter()
            .filter_map(|row| match row {
                NutritionRow::Nutrient { label, .. } => Some(label),
                NutritionRow::Placeholder(_) => None,
            })
            .collect();
        assert_eq!(labels, vec!["Zinc", "Calories", "Biotin"]);
    }

    #[test]
    fn test_render_is_repeatable() {
        let recipe = almond();
        assert_eq!(render_detail(&recipe), render_detail(&recipe));
    }

    #[test]
    fn test_custom_resolver() {
        struct Shouting;
        impl NutrientLabelResolver for Shouting {
            fn resolve(&self, key: &str, _amount: Option<f64>) -> NutrientLabel {
                NutrientLabel {
                    label: key.to_uppercase(),
                    amount: "?".to_string(),
                }
            }
        }

        let view = render_detail_with(&almond(), &Shouting);
        assert_eq!(
            view.nutrition.rows[0],
            NutritionRow::Nutrient {
                label: "CALORIES".to_string(),
                amount: "?".to_string()
            }
        );
    }

    #[test]
    fn test_render_by_id_not_found() {
        let store = RecipeStore::from_recipes(vec![almond()], &LoadOptions::default()).unwrap();

        assert!(render_detail_by_id(&store, "almond001").is_ok());
        match render_detail_by_id(&store, "nope") {
            Err(ViewError::RecipeNotFound(id)) => assert_eq!(id, "nope"),
            other => panic!("expected not found, got {:?}", other),
        }
    }
}
