use crate::commands::{CmdMessage, CmdResult};
use crate::energy::{energy_report, ActivityLevel, BodyMetrics};
use crate::error::Result;

pub fn run(metrics: BodyMetrics, level: ActivityLevel) -> Result<CmdResult> {
    let report = energy_report(metrics, level)?;
    let mut result = CmdResult::default();
    if report.targets.lose < report.bmr {
        result.add_message(CmdMessage::warning(
            "The weight-loss target is below your basal metabolic rate",
        ));
    }
    Ok(result.with_energy(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::energy::Sex;
    use crate::error::LarderError;

    fn metrics(weight_kg: f64) -> BodyMetrics {
        BodyMetrics {
            weight_kg,
            height_cm: 175.0,
            age: 30,
            sex: Sex::Male,
        }
    }

    #[test]
    fn reports_all_activity_levels() {
        let result = run(metrics(70.0), ActivityLevel::Moderate).unwrap();
        let report = result.energy.unwrap();
        assert_eq!(report.by_activity.len(), 5);
        assert_eq!(report.targets.level, ActivityLevel::Moderate);
    }

    #[test]
    fn warns_when_deficit_undercuts_bmr() {
        // 1648.75 × 1.2 − 500 < 1648.75
        let result = run(metrics(70.0), ActivityLevel::Sedentary).unwrap();
        assert!(result.has_level(MessageLevel::Warning));

        let result = run(metrics(70.0), ActivityLevel::VeryActive).unwrap();
        assert!(!result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn rejects_bad_metrics() {
        assert!(matches!(
            run(metrics(0.0), ActivityLevel::Light),
            Err(LarderError::InvalidMetrics(_))
        ));
    }
}
