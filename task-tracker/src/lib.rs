pub mod date;
pub mod ops;
pub mod store;
pub mod task;

pub use date::is_valid_date;
pub use ops::{TaskError, add_task, delete_task, list_tasks};
pub use store::{StoreError, load, save};
pub use task::{Status, Task};
