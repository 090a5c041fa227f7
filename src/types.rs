use std::fmt;

/// Raw sensor fields shared by every workout type.
#[derive(Debug, Clone, Copy)]
pub struct Effort {
    pub action_count: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

/// One sensor package as received from the outside: a short type code
/// plus positional numeric fields.
#[derive(Debug, Clone)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

/// Derived, read-only result of one workout computation.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub workout: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.workout, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }
}
