use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;

use crate::{
    domain::repositories::admin_settings::AdminSettingsRepository,
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::admin_settings},
};

/// The settings table holds a single row.
const SETTINGS_ROW_ID: i32 = 1;

pub struct AdminSettingsPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AdminSettingsPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AdminSettingsRepository for AdminSettingsPostgres {
    async fn find_password_hash(&self) -> Result<Option<String>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = admin_settings::table
            .filter(admin_settings::id.eq(SETTINGS_ROW_ID))
            .select(admin_settings::password_hash)
            .first::<String>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn save_password_hash(&self, password_hash: String) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        insert_into(admin_settings::table)
            .values((
                admin_settings::id.eq(SETTINGS_ROW_ID),
                admin_settings::password_hash.eq(&password_hash),
                admin_settings::updated_at.eq(now),
            ))
            .on_conflict(admin_settings::id)
            .do_update()
            .set((
                admin_settings::password_hash.eq(&password_hash),
                admin_settings::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
