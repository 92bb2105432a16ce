use std::fmt::{Display, Formatter};

/// Stages a task walks through; each one is entered only after the previous
/// one succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskState {
    Claimed,
    InputFetched,
    Computed,
    ResultSubmitted,
    Confirmed,
}

impl TaskState {
    pub fn next(self) -> Option<TaskState> {
        match self {
            TaskState::Claimed => Some(TaskState::InputFetched),
            TaskState::InputFetched => Some(TaskState::Computed),
            TaskState::Computed => Some(TaskState::ResultSubmitted),
            TaskState::ResultSubmitted => Some(TaskState::Confirmed),
            TaskState::Confirmed => None,
        }
    }
}

impl Display for TaskState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TaskState::Claimed => "claimed",
            TaskState::InputFetched => "input_fetched",
            TaskState::Computed => "computed",
            TaskState::ResultSubmitted => "result_submitted",
            TaskState::Confirmed => "confirmed",
        };
        f.write_str(name)
    }
}
