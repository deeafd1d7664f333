//! SeaORM implementation of LoyaltyRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::loyalty::{LoyaltyRepository, LoyaltyTier, UserLoyalty};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user_loyalty;

pub struct SeaOrmLoyaltyRepository {
    db: DatabaseConnection,
}

impl SeaOrmLoyaltyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: user_loyalty::Model) -> UserLoyalty {
    UserLoyalty {
        id: m.id,
        user_id: m.user_id,
        total_bookings: m.total_bookings,
        tier: LoyaltyTier::from_str(&m.loyalty_tier),
        discount_percentage: m.discount_percentage,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(l: UserLoyalty) -> user_loyalty::ActiveModel {
    user_loyalty::ActiveModel {
        id: Set(l.id),
        user_id: Set(l.user_id),
        total_bookings: Set(l.total_bookings),
        loyalty_tier: Set(l.tier.as_str().to_string()),
        discount_percentage: Set(l.discount_percentage),
        created_at: Set(l.created_at),
        updated_at: Set(l.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── LoyaltyRepository impl ──────────────────────────────────────

#[async_trait]
impl LoyaltyRepository for SeaOrmLoyaltyRepository {
    async fn save(&self, l: UserLoyalty) -> DomainResult<()> {
        debug!("Saving loyalty record for user: {}", l.user_id);
        domain_to_active(l).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Option<UserLoyalty>> {
        let model = user_loyalty::Entity::find()
            .filter(user_loyalty::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, l: UserLoyalty) -> DomainResult<()> {
        debug!("Updating loyalty record for user: {}", l.user_id);

        let existing = user_loyalty::Entity::find_by_id(l.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "UserLoyalty",
                field: "id",
                value: l.id.to_string(),
            });
        }

        domain_to_active(l).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
