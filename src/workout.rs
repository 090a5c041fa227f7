use crate::types::{Effort, Summary};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

const STEP_LEN_M: f64 = 0.65;
const STROKE_LEN_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// One recorded workout, ready for metric computation.
///
/// Every variant carries the shared [`Effort`] fields; walking and swimming
/// add the extra sensor readings their calorie formulas need.
#[derive(Debug, Clone, Copy)]
pub enum Workout {
    Running(Effort),
    Walking { effort: Effort, height_cm: f64 },
    Swimming {
        effort: Effort,
        pool_length_m: f64,
        pool_laps: f64,
    },
}

impl Workout {
    pub const fn effort(&self) -> &Effort {
        match self {
            Self::Running(effort)
            | Self::Walking { effort, .. }
            | Self::Swimming { effort, .. } => effort,
        }
    }

    /// Display label for the summary line.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running(_) => "Running",
            Self::Walking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }

    /// Distance covered by one action: a step on land, a stroke in the pool.
    const fn action_len_m(&self) -> f64 {
        match self {
            Self::Running(_) | Self::Walking { .. } => STEP_LEN_M,
            Self::Swimming { .. } => STROKE_LEN_M,
        }
    }

    pub fn distance_km(&self) -> f64 {
        f64::from(self.effort().action_count) * self.action_len_m() / M_IN_KM
    }

    /// Mean speed over the full workout, km/h.
    ///
    /// Swimming ignores the stroke counter and derives speed from the pool
    /// length and lap count instead.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(effort) | Self::Walking { effort, .. } => {
                self.distance_km() / effort.duration_h
            }
            Self::Swimming {
                effort,
                pool_length_m,
                pool_laps,
            } => pool_length_m * pool_laps / M_IN_KM / effort.duration_h,
        }
    }

    pub fn calories_kcal(&self) -> f64 {
        match self {
            Self::Running(effort) => {
                ((RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUN_SPEED_SHIFT)
                    * effort.weight_kg
                    / M_IN_KM)
                    * effort.duration_h
                    * MIN_IN_H
            }
            Self::Walking { effort, height_cm } => {
                let speed_ms2 = (self.mean_speed_kmh() * KMH_IN_MS).powi(2);
                (WLK_WEIGHT_MULTIPLIER * effort.weight_kg
                    + (speed_ms2 / (height_cm / CM_IN_M))
                        * WLK_SPEED_HEIGHT_MULTIPLIER
                        * effort.weight_kg)
                    * effort.duration_h
                    * MIN_IN_H
            }
            Self::Swimming { effort, .. } => {
                (self.mean_speed_kmh() + SWM_SPEED_SHIFT)
                    * SWM_WEIGHT_MULTIPLIER
                    * effort.weight_kg
                    * effort.duration_h
            }
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            workout: self.label(),
            duration_h: self.effort().duration_h,
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn effort(action_count: u32, duration_h: f64, weight_kg: f64) -> Effort {
        Effort {
            action_count,
            duration_h,
            weight_kg,
        }
    }

    #[test]
    fn running_reference_scenario() {
        let w = Workout::Running(effort(15000, 1.0, 75.0));

        assert!((w.distance_km() - 9.75).abs() < EPS);
        assert!((w.mean_speed_kmh() - 9.75).abs() < EPS);
        // ((18 * 9.75 + 1.79) * 75 / 1000) * 1 * 60
        assert!((w.calories_kcal() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn walking_reference_scenario() {
        let w = Workout::Walking {
            effort: effort(9000, 1.0, 75.0),
            height_cm: 180.0,
        };

        assert!((w.distance_km() - 5.85).abs() < EPS);
        assert!((w.mean_speed_kmh() - 5.85).abs() < EPS);

        let speed_ms2 = (5.85_f64 * 0.278).powi(2);
        let expected = (0.035 * 75.0 + (speed_ms2 / 1.8) * 0.029 * 75.0) * 60.0;
        assert!((w.calories_kcal() - expected).abs() < 1e-6);
    }

    #[test]
    fn swimming_reference_scenario() {
        let w = Workout::Swimming {
            effort: effort(720, 1.0, 80.0),
            pool_length_m: 25.0,
            pool_laps: 40.0,
        };

        assert!((w.distance_km() - 0.9936).abs() < EPS);
        // Speed comes from the pool, not the stroke counter.
        assert!((w.mean_speed_kmh() - 1.0).abs() < EPS);
        assert!((w.calories_kcal() - 336.0).abs() < 1e-6);
    }

    #[test]
    fn distance_is_linear_in_action_count() {
        for n in [0u32, 1, 500, 15000] {
            let w = Workout::Running(effort(n, 1.0, 70.0));
            assert!((w.distance_km() - f64::from(n) * 0.65 / 1000.0).abs() < EPS);
        }
    }
}
