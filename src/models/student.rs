//! Student model.
//!
//! A student is the entity being placed. Besides identity, a student carries
//! the pedagogical flags that feed the constraint term of the seat score:
//! vision and hearing needs, and a coarse height category.

use serde::{Deserialize, Serialize};

/// A student to be seated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Class the student belongs to.
    pub class_id: String,
    /// Special seating needs.
    pub special_needs: SpecialNeeds,
    /// Height category.
    pub height: HeightCategory,
}

/// Seating-relevant special needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialNeeds {
    /// Benefits from the first rows.
    pub vision_impaired: bool,
    /// Should not be seated far back.
    pub hearing_impaired: bool,
}

/// Coarse height classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightCategory {
    Short,
    #[default]
    Normal,
    Tall,
}

impl HeightCategory {
    /// Height (cm) above which a student counts as tall.
    pub const TALL_ABOVE_CM: f64 = 175.0;
    /// Height (cm) below which a student counts as short.
    pub const SHORT_BELOW_CM: f64 = 155.0;

    /// Classifies a measured height in centimeters.
    ///
    /// A missing measurement is treated as `Normal`.
    pub fn from_height_cm(height_cm: Option<f64>) -> Self {
        match height_cm {
            Some(h) if h > Self::TALL_ABOVE_CM => Self::Tall,
            Some(h) if h < Self::SHORT_BELOW_CM => Self::Short,
            _ => Self::Normal,
        }
    }
}

impl Student {
    /// Creates a student with no special needs and normal height.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            class_id: String::new(),
            special_needs: SpecialNeeds::default(),
            height: HeightCategory::Normal,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the class membership.
    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = class_id.into();
        self
    }

    /// Marks the student as vision-impaired.
    pub fn vision_impaired(mut self) -> Self {
        self.special_needs.vision_impaired = true;
        self
    }

    /// Marks the student as hearing-impaired.
    pub fn hearing_impaired(mut self) -> Self {
        self.special_needs.hearing_impaired = true;
        self
    }

    /// Sets the height category.
    pub fn with_height(mut self, height: HeightCategory) -> Self {
        self.height = height;
        self
    }

    /// Sets the height category from a measurement in centimeters.
    pub fn with_height_cm(mut self, height_cm: f64) -> Self {
        self.height = HeightCategory::from_height_cm(Some(height_cm));
        self
    }

    /// Whether the student is in the tall category.
    #[inline]
    pub fn is_tall(&self) -> bool {
        self.height == HeightCategory::Tall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("S1")
            .with_name("Alice")
            .with_class("C1")
            .vision_impaired()
            .with_height(HeightCategory::Tall);

        assert_eq!(s.id, "S1");
        assert_eq!(s.name, "Alice");
        assert_eq!(s.class_id, "C1");
        assert!(s.special_needs.vision_impaired);
        assert!(!s.special_needs.hearing_impaired);
        assert!(s.is_tall());
    }

    #[test]
    fn test_height_from_cm() {
        assert_eq!(HeightCategory::from_height_cm(None), HeightCategory::Normal);
        assert_eq!(HeightCategory::from_height_cm(Some(180.0)), HeightCategory::Tall);
        assert_eq!(HeightCategory::from_height_cm(Some(175.0)), HeightCategory::Normal);
        assert_eq!(HeightCategory::from_height_cm(Some(155.0)), HeightCategory::Normal);
        assert_eq!(HeightCategory::from_height_cm(Some(150.0)), HeightCategory::Short);
    }

    #[test]
    fn test_with_height_cm() {
        let s = Student::new("S1").with_height_cm(190.0);
        assert!(s.is_tall());
    }

    #[test]
    fn test_height_serde_names() {
        let json = serde_json::to_string(&HeightCategory::Tall).unwrap();
        assert_eq!(json, "\"tall\"");
    }
}
