//! CGPA averaging and letter-grade lookup

use std::fmt;
use std::str::FromStr;

use allconv_core::{require_finite, ConvertError};
use serde::{Deserialize, Serialize};

const GRADE_MIN: f64 = 0.0;
const GRADE_MAX: f64 = 4.0;

/// Arithmetic mean of grade points, each constrained to [0, 4.0].
///
/// A single out-of-range grade fails the whole computation; there is no
/// partial average. An empty slice is reported separately so the caller can
/// prompt for input rather than show a domain error.
pub fn cgpa(grades: &[f64]) -> Result<f64, ConvertError> {
    if grades.is_empty() {
        return Err(ConvertError::empty_input("enter at least one grade"));
    }
    let mut sum = 0.0;
    for &grade in grades {
        let grade = require_finite(grade, "grade")?;
        if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
            return Err(ConvertError::domain_error(format!(
                "grade {} outside [0, 4.0]",
                grade
            )));
        }
        sum += grade;
    }
    Ok(sum / grades.len() as f64)
}

/// Closed set of letter grades; the selector never produces anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    F,
}

impl LetterGrade {
    pub const ALL: [LetterGrade; 11] = [
        LetterGrade::A,
        LetterGrade::AMinus,
        LetterGrade::BPlus,
        LetterGrade::B,
        LetterGrade::BMinus,
        LetterGrade::CPlus,
        LetterGrade::C,
        LetterGrade::CMinus,
        LetterGrade::DPlus,
        LetterGrade::D,
        LetterGrade::F,
    ];

    pub fn gpa(&self) -> f64 {
        match self {
            LetterGrade::A => 4.0,
            LetterGrade::AMinus => 3.7,
            LetterGrade::BPlus => 3.3,
            LetterGrade::B => 3.0,
            LetterGrade::BMinus => 2.7,
            LetterGrade::CPlus => 2.3,
            LetterGrade::C => 2.0,
            LetterGrade::CMinus => 1.7,
            LetterGrade::DPlus => 1.3,
            LetterGrade::D => 1.0,
            LetterGrade::F => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LetterGrade {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterGrade::ALL
            .iter()
            .find(|g| g.label() == s)
            .copied()
            .ok_or_else(|| ConvertError::parse_error(format!("unknown letter grade '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cgpa_mean() {
        let result = cgpa(&[4.0, 3.0, 2.0]).unwrap();
        assert!((result - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_cgpa_single_grade() {
        assert_eq!(cgpa(&[3.7]).unwrap(), 3.7);
    }

    #[test]
    fn test_cgpa_rejects_out_of_range_whole_call() {
        let err = cgpa(&[4.0, 4.5, 2.0]).unwrap_err();
        assert_eq!(err.code, allconv_core::codes::DOMAIN_ERROR);

        let err = cgpa(&[-0.1]).unwrap_err();
        assert_eq!(err.code, allconv_core::codes::DOMAIN_ERROR);
    }

    #[test]
    fn test_cgpa_boundary_grades_accepted() {
        assert_eq!(cgpa(&[0.0, 4.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_cgpa_empty() {
        let err = cgpa(&[]).unwrap_err();
        assert_eq!(err.code, allconv_core::codes::EMPTY_INPUT);
    }

    #[test]
    fn test_letter_grade_table() {
        assert_eq!(LetterGrade::A.gpa(), 4.0);
        assert_eq!(LetterGrade::AMinus.gpa(), 3.7);
        assert_eq!(LetterGrade::F.gpa(), 0.0);
        assert_eq!(LetterGrade::ALL.len(), 11);
    }

    #[test]
    fn test_letter_grade_parsing() {
        assert_eq!("B+".parse::<LetterGrade>().unwrap(), LetterGrade::BPlus);
        assert_eq!("C-".parse::<LetterGrade>().unwrap(), LetterGrade::CMinus);
        assert!("E".parse::<LetterGrade>().is_err());
    }
}
