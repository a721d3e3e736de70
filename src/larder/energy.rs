//! # Daily Energy Needs
//!
//! Basal metabolic rate by the Mifflin-St Jeor equation (1990):
//!
//! ```text
//! BMR = 10 × weight_kg + 6.25 × height_cm − 5 × age + 5     (male)
//! BMR = 10 × weight_kg + 6.25 × height_cm − 5 × age − 161   (female)
//! ```
//!
//! Total daily energy expenditure is `BMR × activity factor`, reported for every
//! activity level so the caller can pick one. Calorie targets follow the usual
//! rule of thumb: eat 500 kcal under TDEE to lose weight, 300-500 over to gain.

use crate::error::{LarderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const WEIGHT_COEF: f64 = 10.0;
const HEIGHT_COEF: f64 = 6.25;
const AGE_COEF: f64 = 5.0;
const MALE_CONSTANT: f64 = 5.0;
const FEMALE_CONSTANT: f64 = -161.0;

const LOSS_DEFICIT: f64 = 500.0;
const GAIN_SURPLUS_MIN: f64 = 300.0;
const GAIN_SURPLUS_MAX: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(LarderError::InvalidMetrics(format!(
                "unknown sex '{}' (expected male or female)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Exercise 1-3 days a week.
    Light,
    /// Exercise 3-5 days a week.
    Moderate,
    /// Exercise 6-7 days a week.
    Active,
    /// Hard daily exercise or a physical job.
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub const fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                LarderError::InvalidMetrics(format!("unknown activity level '{}'", s.trim()))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: Sex,
}

impl BodyMetrics {
    pub fn validate(&self) -> Result<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(LarderError::InvalidMetrics(
                "weight must be a positive number of kilograms".into(),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(LarderError::InvalidMetrics(
                "height must be a positive number of centimeters".into(),
            ));
        }
        if self.age == 0 {
            return Err(LarderError::InvalidMetrics("age must be at least 1".into()));
        }
        Ok(())
    }
}

pub fn basal_metabolic_rate(metrics: &BodyMetrics) -> Result<f64> {
    metrics.validate()?;

    let constant = match metrics.sex {
        Sex::Male => MALE_CONSTANT,
        Sex::Female => FEMALE_CONSTANT,
    };

    Ok(WEIGHT_COEF * metrics.weight_kg + HEIGHT_COEF * metrics.height_cm
        - AGE_COEF * f64::from(metrics.age)
        + constant)
}

pub fn total_daily_energy(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * level.factor()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityEnergy {
    pub level: ActivityLevel,
    pub tdee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieTargets {
    pub level: ActivityLevel,
    pub lose: f64,
    pub maintain: f64,
    pub gain_min: f64,
    pub gain_max: f64,
}

impl CalorieTargets {
    pub fn from_tdee(level: ActivityLevel, tdee: f64) -> Self {
        Self {
            level,
            lose: tdee - LOSS_DEFICIT,
            maintain: tdee,
            gain_min: tdee + GAIN_SURPLUS_MIN,
            gain_max: tdee + GAIN_SURPLUS_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyReport {
    pub metrics: BodyMetrics,
    pub bmr: f64,
    pub by_activity: Vec<ActivityEnergy>,
    pub targets: CalorieTargets,
}

/// BMR, TDEE for every activity level, and intake targets for `level`.
pub fn energy_report(metrics: BodyMetrics, level: ActivityLevel) -> Result<EnergyReport> {
    let bmr = basal_metabolic_rate(&metrics)?;
    let by_activity = ActivityLevel::ALL
        .into_iter()
        .map(|level| ActivityEnergy {
            level,
            tdee: total_daily_energy(bmr, level),
        })
        .collect();

    Ok(EnergyReport {
        metrics,
        bmr,
        by_activity,
        targets: CalorieTargets::from_tdee(level, total_daily_energy(bmr, level)),
    })
}
