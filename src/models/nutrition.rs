//! Shared nutrient data structures
//!
//! The 25-field nutrient set is declared once and expanded into the
//! `Nutrient` enum, the fully-populated `NutrientVector` and the
//! source-side `NutrientProfile` whose fields may be absent.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Number of fields in every nutrient vector
pub const NUTRIENT_COUNT: usize = 25;

macro_rules! nutrient_fields {
    ($($variant:ident => $field:ident),* $(,)?) => {
        /// One named nutrient field
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Nutrient {
            $($variant,)*
        }

        impl Nutrient {
            /// Every nutrient, in canonical order
            pub const ALL: [Nutrient; NUTRIENT_COUNT] = [$(Nutrient::$variant,)*];

            /// Snake-case field name, also the database column name
            pub fn column(self) -> &'static str {
                match self {
                    $(Nutrient::$variant => stringify!($field),)*
                }
            }
        }

        /// Fully-populated nutrient values (totals, per-serving, scaled amounts)
        #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct NutrientVector {
            $(pub $field: f64,)*
        }

        impl NutrientVector {
            pub fn get(&self, nutrient: Nutrient) -> f64 {
                match nutrient {
                    $(Nutrient::$variant => self.$field,)*
                }
            }

            pub fn set(&mut self, nutrient: Nutrient, value: f64) {
                match nutrient {
                    $(Nutrient::$variant => self.$field = value,)*
                }
            }
        }

        /// Per-100g source nutrition where each field is either present or absent
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct NutrientProfile {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<f64>,
            )*
        }

        impl NutrientProfile {
            pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
                match nutrient {
                    $(Nutrient::$variant => self.$field,)*
                }
            }

            pub fn set(&mut self, nutrient: Nutrient, value: Option<f64>) {
                match nutrient {
                    $(Nutrient::$variant => self.$field = value,)*
                }
            }
        }
    };
}

nutrient_fields! {
    Calories => calories,
    Protein => protein,
    Carbohydrates => carbohydrates,
    Fiber => fiber,
    Sugar => sugar,
    TotalFat => total_fat,
    SaturatedFat => saturated_fat,
    MonounsatFat => monounsat_fat,
    PolyunsatFat => polyunsat_fat,
    TransFat => trans_fat,
    Cholesterol => cholesterol,
    Sodium => sodium,
    Potassium => potassium,
    Calcium => calcium,
    Iron => iron,
    Magnesium => magnesium,
    Zinc => zinc,
    VitaminA => vitamin_a,
    VitaminC => vitamin_c,
    VitaminD => vitamin_d,
    VitaminE => vitamin_e,
    VitaminK => vitamin_k,
    VitaminB6 => vitamin_b6,
    VitaminB12 => vitamin_b12,
    Folate => folate,
}

/// Read access to nutrient values where a field may be missing
pub trait NutrientValues {
    fn value(&self, nutrient: Nutrient) -> Option<f64>;
}

impl NutrientValues for NutrientVector {
    fn value(&self, nutrient: Nutrient) -> Option<f64> {
        Some(self.get(nutrient))
    }
}

impl NutrientValues for NutrientProfile {
    fn value(&self, nutrient: Nutrient) -> Option<f64> {
        self.get(nutrient)
    }
}

impl NutrientProfile {
    /// Build a profile from new, unchecked data.
    ///
    /// Rejects negative and non-finite values. Nutrients not listed stay absent.
    pub fn try_from_values<I>(values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (Nutrient, f64)>,
    {
        let mut profile = Self::default();
        for (nutrient, value) in values {
            check_value(nutrient, value)?;
            profile.set(nutrient, Some(value));
        }
        Ok(profile)
    }

    /// Build a profile from values that were validated when first stored.
    ///
    /// Performs no checks; use `try_from_values` for anything new.
    pub fn from_trusted_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (Nutrient, Option<f64>)>,
    {
        let mut profile = Self::default();
        for (nutrient, value) in values {
            profile.set(nutrient, value);
        }
        profile
    }

    /// Check every present field
    pub fn validate(&self) -> Result<(), ValidationError> {
        for nutrient in Nutrient::ALL {
            if let Some(value) = self.get(nutrient) {
                check_value(nutrient, value)?;
            }
        }
        Ok(())
    }

    /// Number of fields that carry a value
    pub fn present_count(&self) -> usize {
        Nutrient::ALL
            .iter()
            .filter(|n| self.get(**n).is_some())
            .count()
    }
}

fn check_value(nutrient: Nutrient, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidNutrientValue {
            nutrient: nutrient.column(),
            value,
        });
    }
    Ok(())
}

/// Nutrition computed for one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNutritionResult {
    pub per_serving: NutrientVector,
    pub total: NutrientVector,
    pub servings: i64,
    pub ingredients_processed: usize,
    pub ingredients_skipped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_serializes_all_camel_case_keys() {
        let json = serde_json::to_value(NutrientVector::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), NUTRIENT_COUNT);
        for key in [
            "calories",
            "totalFat",
            "monounsatFat",
            "polyunsatFat",
            "transFat",
            "vitaminA",
            "vitaminB6",
            "vitaminB12",
            "folate",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_get_set_cover_every_nutrient() {
        let mut v = NutrientVector::default();
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            v.set(*nutrient, i as f64);
        }
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(v.get(*nutrient), i as f64);
        }
        assert_eq!(v.vitamin_b12, 23.0);
    }

    #[test]
    fn test_profile_rejects_negative_and_nan() {
        let err = NutrientProfile::try_from_values([(Nutrient::Sodium, -1.0)]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidNutrientValue { nutrient: "sodium", .. }
        ));
        assert!(NutrientProfile::try_from_values([(Nutrient::Iron, f64::NAN)]).is_err());
    }

    #[test]
    fn test_profile_absent_fields_stay_absent() {
        let profile = NutrientProfile::try_from_values([(Nutrient::Calories, 100.0)]).unwrap();
        assert_eq!(profile.calories, Some(100.0));
        assert_eq!(profile.protein, None);
        assert_eq!(profile.present_count(), 1);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({ "calories": 100.0 }));
    }

    #[test]
    fn test_trusted_values_skip_checks() {
        let profile = NutrientProfile::from_trusted_values([(Nutrient::Zinc, Some(-2.0))]);
        assert_eq!(profile.zinc, Some(-2.0));
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_result_serializes_summary_fields() {
        let result = RecipeNutritionResult {
            per_serving: NutrientVector::default(),
            total: NutrientVector::default(),
            servings: 1,
            ingredients_processed: 0,
            ingredients_skipped: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert!(obj.contains_key("perServing"));
        assert!(obj.contains_key("ingredientsProcessed"));
        assert!(obj.contains_key("ingredientsSkipped"));
    }
}
