//! SQLite-backed record store: tasks, weight samples, templates, routine

pub mod routine;
pub mod tasks;
pub mod weights;

pub use routine::{
  clear_routine_day, delete_template, insert_template, list_routine, list_templates,
  routine_for_weekday, schedule_day, set_routine_day, update_template,
};
pub use tasks::{
  delete_task, get_task, insert_task, list_tasks, set_task_completed, update_task, TaskFilter,
};
pub use weights::{delete_weight, insert_weight, latest_weight, list_weights};
