//! Allconv Formula Catalogue
//!
//! The simple pure-function converters of the application, grouped by topic:
//! - health: BMI, BMR/TDEE (Mifflin-St Jeor)
//! - grades: CGPA averaging, letter grade to GPA
//! - dates: age in years, day difference
//! - money: tip and discount
//! - hex: RGB and decimal to hexadecimal renderings
//!
//! Every function is deterministic and side-effect free; each returns a typed
//! result or a structured `ConvertError`.

mod dates;
mod grades;
mod health;
mod hex;
mod money;

pub use dates::{age_in_years, date_difference};
pub use grades::{cgpa, LetterGrade};
pub use health::{
    bmi, bmr_tdee, ActivityLevel, BmiCategory, BmiReading, EnergyNeeds, HeightUnit, Sex, WeightUnit,
};
pub use hex::{dec_to_hex, rgb_to_hex};
pub use money::{discount, tip, DiscountResult, TipResult};
