use cobble_database::Database;
use cobble_economy::EconomyService;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub economy: EconomyService,
}

impl Data {
    pub fn new(db: Database) -> Self {
        Self {
            economy: EconomyService::new(db.clone()),
            db,
        }
    }
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
