//! SeaORM implementation of PowerBankTypeRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::power_bank::{PowerBankCategory, PowerBankType, PowerBankTypeRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::power_bank_type;

pub struct SeaOrmPowerBankTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmPowerBankTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: power_bank_type::Model) -> PowerBankType {
    PowerBankType {
        id: m.id,
        name: m.name,
        category: PowerBankCategory::from_str(&m.category),
        capacity_mah: m.capacity_mah,
        price_per_hour: m.price_per_hour,
        price_per_day: m.price_per_day,
        target_devices: m.target_devices,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(t: PowerBankType) -> power_bank_type::ActiveModel {
    power_bank_type::ActiveModel {
        id: Set(t.id),
        name: Set(t.name),
        category: Set(t.category.as_str().to_string()),
        capacity_mah: Set(t.capacity_mah),
        price_per_hour: Set(t.price_per_hour),
        price_per_day: Set(t.price_per_day),
        target_devices: Set(t.target_devices),
        created_at: Set(t.created_at),
        updated_at: Set(t.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── PowerBankTypeRepository impl ────────────────────────────────

#[async_trait]
impl PowerBankTypeRepository for SeaOrmPowerBankTypeRepository {
    async fn save(&self, t: PowerBankType) -> DomainResult<()> {
        debug!("Saving power bank type: {}", t.id);
        domain_to_active(t).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<PowerBankType>> {
        let model = power_bank_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<PowerBankType>> {
        let models = power_bank_type::Entity::find()
            .order_by_asc(power_bank_type::Column::CapacityMah)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, t: PowerBankType) -> DomainResult<()> {
        debug!("Updating power bank type: {}", t.id);

        let existing = power_bank_type::Entity::find_by_id(t.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "PowerBankType",
                field: "id",
                value: t.id.to_string(),
            });
        }

        domain_to_active(t).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let existing = power_bank_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "PowerBankType",
                field: "id",
                value: id.to_string(),
            });
        };

        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
