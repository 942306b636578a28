//! Distance, speed and calorie formulas for each activity.
//!
//! Every formula is a pure function of the training record. Divisions by
//! duration or height are checked and reported as [`Error::DivisionByZero`].

use crate::message::InfoMessage;
use crate::{Error, Result, Training, TrainingInput};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

fn nonzero(value: f64, field: &'static str) -> Result<f64> {
    if value == 0.0 {
        Err(Error::DivisionByZero(field))
    } else {
        Ok(value)
    }
}

impl Training {
    /// Distance covered, in km
    pub fn distance(&self) -> f64 {
        f64::from(self.input().action) * self.kind().step_length_m() / M_IN_KM
    }

    /// Mean speed over the whole session, in km/h
    ///
    /// Swimming speed comes from the pool length and lap count, not from
    /// the stroke-based distance.
    pub fn mean_speed(&self) -> Result<f64> {
        let duration = nonzero(self.input().duration_h, "duration")?;
        let speed = match self {
            Training::Running(_) | Training::SportsWalking { .. } => self.distance() / duration,
            Training::Swimming {
                pool_length_m,
                pool_laps,
                ..
            } => pool_length_m * pool_laps / M_IN_KM / duration,
        };
        Ok(speed)
    }

    /// Energy spent, in kcal
    pub fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed()?;
        let calories = match *self {
            Training::Running(TrainingInput {
                duration_h,
                weight_kg,
                ..
            }) => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Training::SportsWalking {
                input:
                    TrainingInput {
                        duration_h,
                        weight_kg,
                        ..
                    },
                height_cm,
            } => {
                let height = nonzero(height_cm, "height")?;
                // floor division, not plain division
                let speed_height_ratio = (speed.powi(2) / height).floor();
                (WALK_WEIGHT_MULTIPLIER * weight_kg
                    + speed_height_ratio * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Training::Swimming {
                input: TrainingInput { weight_kg, .. },
                ..
            } => (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg,
        };
        Ok(calories)
    }

    /// Compute every summary field for this session
    pub fn show_training_info(&self) -> Result<InfoMessage> {
        let kind = self.kind();
        let info = InfoMessage {
            training_type: kind.label().to_string(),
            duration: self.input().duration_h,
            distance: self.distance(),
            speed: self.mean_speed()?,
            calories: self.spent_calories()?,
        };

        tracing::debug!(
            "Computed {} summary: {:.3} km, {:.3} km/h, {:.3} kcal",
            kind,
            info.distance,
            info.speed,
            info.calories
        );

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn input(action: u32, duration_h: f64, weight_kg: f64) -> TrainingInput {
        TrainingInput {
            action,
            duration_h,
            weight_kg,
        }
    }

    fn swimming() -> Training {
        Training::Swimming {
            input: input(720, 1.0, 80.0),
            pool_length_m: 25.0,
            pool_laps: 40.0,
        }
    }

    fn running() -> Training {
        Training::Running(input(15000, 1.0, 75.0))
    }

    fn walking() -> Training {
        Training::SportsWalking {
            input: input(9000, 1.0, 75.0),
            height_cm: 180.0,
        }
    }

    #[test]
    fn test_swimming_sample() {
        let t = swimming();
        assert!((t.distance() - 0.9936).abs() < EPS);
        assert!((t.mean_speed().unwrap() - 1.0).abs() < EPS);
        assert!((t.spent_calories().unwrap() - 336.0).abs() < EPS);
    }

    #[test]
    fn test_running_sample() {
        let t = running();
        assert!((t.distance() - 9.75).abs() < EPS);
        assert!((t.mean_speed().unwrap() - 9.75).abs() < EPS);
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!((t.spent_calories().unwrap() - 699.75).abs() < EPS);
    }

    #[test]
    fn test_walking_sample_floor_term_vanishes() {
        let t = walking();
        assert!((t.distance() - 5.85).abs() < EPS);
        assert!((t.mean_speed().unwrap() - 5.85).abs() < EPS);
        assert!((t.spent_calories().unwrap() - 157.5).abs() < EPS);
    }

    #[test]
    fn test_walking_uses_floor_division() {
        // speed = 13 km/h, 169 / 100 floors to 1
        let t = Training::SportsWalking {
            input: input(20000, 1.0, 70.0),
            height_cm: 100.0,
        };
        let expected = (0.035 * 70.0 + 1.0 * 0.029 * 70.0) * 60.0;
        assert!((t.spent_calories().unwrap() - expected).abs() < EPS);
    }

    #[test]
    fn test_distance_linear_in_action() {
        let mut previous = -1.0;
        for action in [0u32, 1, 10, 1000, 15000, 100_000] {
            let t = Training::Running(input(action, 1.0, 70.0));
            let expected = f64::from(action) * 0.65 / 1000.0;
            assert!((t.distance() - expected).abs() < EPS);
            assert!(t.distance() >= previous);
            previous = t.distance();
        }
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few = Training::Swimming {
            input: input(10, 2.0, 80.0),
            pool_length_m: 50.0,
            pool_laps: 20.0,
        };
        let many = Training::Swimming {
            input: input(5000, 2.0, 80.0),
            pool_length_m: 50.0,
            pool_laps: 20.0,
        };
        assert_eq!(few.mean_speed().unwrap(), many.mean_speed().unwrap());
        assert!((few.mean_speed().unwrap() - 0.5).abs() < EPS);
        assert_ne!(few.distance(), many.distance());
    }

    #[test]
    fn test_zero_duration_is_reported() {
        for t in [
            Training::Running(input(100, 0.0, 70.0)),
            Training::SportsWalking {
                input: input(100, 0.0, 70.0),
                height_cm: 170.0,
            },
            Training::Swimming {
                input: input(100, 0.0, 70.0),
                pool_length_m: 25.0,
                pool_laps: 4.0,
            },
        ] {
            assert!(matches!(
                t.mean_speed(),
                Err(Error::DivisionByZero("duration"))
            ));
            assert!(t.show_training_info().is_err());
        }
    }

    #[test]
    fn test_zero_height_is_reported() {
        let t = Training::SportsWalking {
            input: input(100, 1.0, 70.0),
            height_cm: 0.0,
        };
        assert!(t.mean_speed().is_ok());
        assert!(matches!(
            t.spent_calories(),
            Err(Error::DivisionByZero("height"))
        ));
    }

    #[test]
    fn test_show_training_info_fills_all_fields() {
        let info = swimming().show_training_info().unwrap();
        assert_eq!(info.training_type, "Swimming");
        assert_eq!(info.duration, 1.0);
        assert!((info.distance - 0.9936).abs() < EPS);
        assert!((info.speed - 1.0).abs() < EPS);
        assert!((info.calories - 336.0).abs() < EPS);
    }
}
