//! Gram conversion
//!
//! Resolves (ingredient, quantity, unit) to grams. Weight units are exact,
//! ingredient portions outrank generic factors, and volume falls back to
//! water density (1 ml ≈ 1 g).

use serde::Serialize;

use super::quantity::parse_quantity;
use super::sources::IngredientPortionLookup;
use super::units::{grams_per_unit, is_negligible_unit, ml_per_unit, normalize_unit};

/// Which rule produced a gram weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMethod {
    ZeroQuantity,
    Negligible,
    Weight,
    Portion,
    VolumeFallback,
    Unresolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GramConversion {
    pub grams: f64,
    pub method: ConversionMethod,
}

impl GramConversion {
    fn new(grams: f64, method: ConversionMethod) -> Self {
        Self { grams, method }
    }

    fn zero(method: ConversionMethod) -> Self {
        Self::new(0.0, method)
    }
}

/// Resolve a written quantity and unit to grams, reporting the rule used.
///
/// Never fails. A portion lookup error is logged and treated as "no portion".
pub async fn resolve_grams<L>(
    lookup: &L,
    ingredient_id: i64,
    quantity_text: &str,
    unit_text: &str,
) -> GramConversion
where
    L: IngredientPortionLookup + ?Sized,
{
    let quantity = parse_quantity(quantity_text);
    if quantity <= 0.0 {
        return GramConversion::zero(ConversionMethod::ZeroQuantity);
    }

    let unit = normalize_unit(unit_text);
    if is_negligible_unit(&unit) {
        return GramConversion::zero(ConversionMethod::Negligible);
    }

    // Weight units never need a lookup
    if let Some(factor) = grams_per_unit(&unit) {
        return GramConversion::new(quantity * factor, ConversionMethod::Weight);
    }

    match lookup.get_portion_gram_weight(ingredient_id, &unit).await {
        Ok(Some(gram_weight)) if gram_weight.is_finite() && gram_weight > 0.0 => {
            return GramConversion::new(quantity * gram_weight, ConversionMethod::Portion);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(
                "Portion lookup failed for ingredient {} unit '{}': {}",
                ingredient_id,
                unit,
                e
            );
        }
    }

    if let Some(ml) = ml_per_unit(&unit) {
        return GramConversion::new(quantity * ml, ConversionMethod::VolumeFallback);
    }

    GramConversion::zero(ConversionMethod::Unresolved)
}

/// Grams for a written quantity and unit; 0 when it cannot be resolved
pub async fn convert_to_grams<L>(
    lookup: &L,
    ingredient_id: i64,
    quantity_text: &str,
    unit_text: &str,
) -> f64
where
    L: IngredientPortionLookup + ?Sized,
{
    resolve_grams(lookup, ingredient_id, quantity_text, unit_text)
        .await
        .grams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;
    use crate::nutrition::sources::{SourceError, SourceResult};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakePortions {
        weights: HashMap<(i64, String), f64>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakePortions {
        fn with(ingredient_id: i64, unit: &str, grams: f64) -> Self {
            let mut fake = Self::default();
            fake.weights.insert((ingredient_id, unit.to_string()), grams);
            fake
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl IngredientPortionLookup for FakePortions {
        async fn get_portion_gram_weight(
            &self,
            ingredient_id: i64,
            normalized_unit: &str,
        ) -> SourceResult<Option<f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SourceError::Database(DbError::Sqlite(
                    rusqlite::Error::InvalidQuery,
                )));
            }
            Ok(self
                .weights
                .get(&(ingredient_id, normalized_unit.to_string()))
                .copied())
        }
    }

    #[tokio::test]
    async fn test_zero_quantity_short_circuits() {
        let lookup = FakePortions::with(1, "g", 50.0);
        assert_eq!(convert_to_grams(&lookup, 1, "0", "g").await, 0.0);
        assert_eq!(convert_to_grams(&lookup, 1, "", "cup").await, 0.0);
        assert_eq!(convert_to_grams(&lookup, 1, "-2", "cup").await, 0.0);
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_negligible_overrides_portion_data() {
        let lookup = FakePortions::with(1, "pinch", 3.0);
        let result = resolve_grams(&lookup, 1, "1", "Pinch").await;
        assert_eq!(result, GramConversion::zero(ConversionMethod::Negligible));
        assert_eq!(convert_to_grams(&lookup, 1, "2", "to taste").await, 0.0);
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_weight_path_never_looks_up() {
        let lookup = FakePortions::with(1, "kg", 1.0);
        assert_eq!(convert_to_grams(&lookup, 1, "2", "kg").await, 2000.0);
        assert_eq!(convert_to_grams(&lookup, 1, "1 1/2", "grams").await, 1.5);
        assert_eq!(convert_to_grams(&lookup, 1, "2", "lbs").await, 907.18);
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_portion_outranks_volume_fallback() {
        let lookup = FakePortions::with(7, "cup", 125.0);
        let result = resolve_grams(&lookup, 7, "1", "Cups").await;
        assert_eq!(result, GramConversion::new(125.0, ConversionMethod::Portion));
        assert_eq!(lookup.calls(), 1);
    }

    #[tokio::test]
    async fn test_volume_falls_back_to_water_density() {
        let lookup = FakePortions::default();
        let result = resolve_grams(&lookup, 7, "1", "cup").await;
        assert_eq!(result, GramConversion::new(240.0, ConversionMethod::VolumeFallback));
        assert_eq!(convert_to_grams(&lookup, 7, "2", "tbsp").await, 30.0);
    }

    #[tokio::test]
    async fn test_count_units_resolve_only_through_portions() {
        let lookup = FakePortions::with(3, "large", 50.0);
        assert_eq!(convert_to_grams(&lookup, 3, "2", "Large").await, 100.0);

        let unresolved = resolve_grams(&lookup, 3, "2", "slice").await;
        assert_eq!(unresolved, GramConversion::zero(ConversionMethod::Unresolved));
    }

    #[tokio::test]
    async fn test_non_positive_portion_weight_is_ignored() {
        let lookup = FakePortions::with(3, "cup", 0.0);
        assert_eq!(convert_to_grams(&lookup, 3, "1", "cup").await, 240.0);
    }

    #[tokio::test]
    async fn test_lookup_failure_degrades_to_fallback() {
        let lookup = FakePortions {
            fail: true,
            ..Default::default()
        };
        assert_eq!(convert_to_grams(&lookup, 3, "1", "tsp").await, 5.0);
        assert_eq!(convert_to_grams(&lookup, 3, "1", "slice").await, 0.0);
    }
}
