use crate::types::Effort;
use crate::workout::Workout;
use thiserror::Error;

/// A sensor package that could not be turned into a [`Workout`].
#[derive(Debug, Error, PartialEq)]
pub enum PackageError {
    #[error("unknown workout type code: {code:?}")]
    UnknownWorkoutType { code: String },

    #[error("wrong field count for {code}: expected {expected}, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{field} must be positive for {code}, got {value}")]
    NonPositiveField {
        code: &'static str,
        field: &'static str,
        value: f64,
    },
}

/// Read one sensor package: resolve the type code, validate the field
/// count and the fields we later divide by, and build the workout.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, PackageError> {
    let (code, expected) = match code {
        "SWM" => ("SWM", 5),
        "RUN" => ("RUN", 3),
        "WLK" => ("WLK", 4),
        other => {
            return Err(PackageError::UnknownWorkoutType {
                code: other.to_string(),
            });
        }
    };

    if data.len() != expected {
        return Err(PackageError::ArityMismatch {
            code,
            expected,
            got: data.len(),
        });
    }

    let effort = Effort {
        action_count: data[0] as u32,
        duration_h: data[1],
        weight_kg: data[2],
    };
    require_positive(code, "duration_h", effort.duration_h)?;

    let workout = match code {
        "SWM" => Workout::Swimming {
            effort,
            pool_length_m: data[3],
            pool_laps: data[4],
        },
        "RUN" => Workout::Running(effort),
        _ => {
            let height_cm = data[3];
            require_positive(code, "height_cm", height_cm)?;
            Workout::Walking { effort, height_cm }
        }
    };

    Ok(workout)
}

fn require_positive(code: &'static str, field: &'static str, value: f64) -> Result<(), PackageError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(PackageError::NonPositiveField { code, field, value })
    }
}
