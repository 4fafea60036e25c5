use cobble_database::Database;

use crate::locks::UserLocks;

/// Entry point for everything that touches a user's coins or quests.
///
/// Every public operation holds the user's lock for its whole duration, so
/// a quest can only cross its target once even when the gateway delivers
/// events for one user concurrently.
#[derive(Clone, Debug)]
pub struct EconomyService {
    pub(crate) db: Database,
    pub(crate) locks: UserLocks,
}

impl EconomyService {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            locks: UserLocks::default(),
        }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}
