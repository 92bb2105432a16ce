use std::fmt::{Display, Formatter, Result};

use crate::checkpoint::model::Checkpoint;

impl Display for Checkpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "checkpoint at block {} (updated {})", self.last_block, self.updated_at)
    }
}
