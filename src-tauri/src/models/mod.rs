pub mod task;
pub mod template;
pub mod weight;

pub use task::{Category, LoggingMode, NewWorkoutTask, SetEntry, WorkoutTask};
pub use template::{ExerciseTemplate, NewExerciseTemplate, RoutineItem};
pub use weight::{NewWeightSample, WeightSample};
