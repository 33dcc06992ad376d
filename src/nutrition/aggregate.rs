//! Nutrient aggregation
//!
//! Elementwise arithmetic over the 25 nutrient fields. Absent source values
//! count as 0 here and nowhere else.

use crate::models::{Nutrient, NutrientValues, NutrientVector};

/// All 25 fields zero
pub fn create_empty() -> NutrientVector {
    NutrientVector::default()
}

/// Elementwise `a + b`; fields absent in `b` contribute 0
pub fn add<V>(a: &NutrientVector, b: &V) -> NutrientVector
where
    V: NutrientValues + ?Sized,
{
    let mut sum = *a;
    for nutrient in Nutrient::ALL {
        sum.set(nutrient, a.get(nutrient) + b.value(nutrient).unwrap_or(0.0));
    }
    sum
}

/// Elementwise `v * factor`; absent fields become 0
pub fn scale<V>(v: &V, factor: f64) -> NutrientVector
where
    V: NutrientValues + ?Sized,
{
    let mut scaled = create_empty();
    for nutrient in Nutrient::ALL {
        scaled.set(nutrient, v.value(nutrient).unwrap_or(0.0) * factor);
    }
    scaled
}

/// Elementwise `v / servings`, with non-positive servings treated as 1
pub fn divide_by_servings(v: &NutrientVector, servings: i64) -> NutrientVector {
    let divisor = if servings <= 0 { 1.0 } else { servings as f64 };
    let mut divided = *v;
    for nutrient in Nutrient::ALL {
        divided.set(nutrient, v.get(nutrient) / divisor);
    }
    divided
}

impl std::ops::Add for NutrientVector {
    type Output = NutrientVector;

    fn add(self, other: NutrientVector) -> NutrientVector {
        add(&self, &other)
    }
}

impl std::iter::Sum for NutrientVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(create_empty(), |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientProfile;

    fn sample() -> NutrientVector {
        let mut v = create_empty();
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            v.set(*nutrient, (i + 1) as f64 * 2.0);
        }
        v
    }

    #[test]
    fn test_create_empty_is_all_zero() {
        let empty = create_empty();
        assert!(Nutrient::ALL.iter().all(|n| empty.get(*n) == 0.0));
    }

    #[test]
    fn test_add_empty_profile_is_identity() {
        let v = sample();
        assert_eq!(add(&v, &NutrientProfile::default()), v);
    }

    #[test]
    fn test_add_treats_absent_as_zero() {
        let profile = NutrientProfile {
            calories: Some(10.0),
            iron: None,
            ..Default::default()
        };
        let sum = add(&sample(), &profile);
        assert_eq!(sum.calories, 12.0);
        assert_eq!(sum.iron, sample().iron);
    }

    #[test]
    fn test_add_vectors() {
        let sum = add(&sample(), &sample());
        assert_eq!(sum.folate, 100.0);
        assert_eq!(sample() + sample(), sum);
    }

    #[test]
    fn test_scale_by_zero_is_all_zero() {
        assert_eq!(scale(&sample(), 0.0), create_empty());
    }

    #[test]
    fn test_scale_profile_fractional() {
        let profile = NutrientProfile {
            calories: Some(200.0),
            protein: Some(10.0),
            ..Default::default()
        };
        let scaled = scale(&profile, 0.5);
        assert_eq!(scaled.calories, 100.0);
        assert_eq!(scaled.protein, 5.0);
        assert_eq!(scaled.sodium, 0.0);
    }

    #[test]
    fn test_divide_by_non_positive_servings_is_identity() {
        let v = sample();
        assert_eq!(divide_by_servings(&v, 0), v);
        assert_eq!(divide_by_servings(&v, 1), v);
        assert_eq!(divide_by_servings(&v, -3), v);
    }

    #[test]
    fn test_divide_by_servings() {
        let halved = divide_by_servings(&sample(), 2);
        assert_eq!(halved.calories, 1.0);
        assert_eq!(halved.folate, 25.0);
    }

    #[test]
    fn test_sum_of_vectors() {
        let total: NutrientVector = vec![sample(), sample(), sample()].into_iter().sum();
        assert_eq!(total.calories, 6.0);
    }
}
