//! SeaORM implementation of InventoryRepository
//!
//! Carries the conditional decrement used as the allocation guard.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::inventory::{InventoryRepository, StationInventory};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::station_inventory;

pub struct SeaOrmInventoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: station_inventory::Model) -> StationInventory {
    StationInventory {
        id: m.id,
        station_id: m.station_id,
        power_bank_type_id: m.power_bank_type_id,
        total_units: m.total_units,
        available_units: m.available_units,
        reserved_units: m.reserved_units,
        updated_at: m.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── InventoryRepository impl ────────────────────────────────────

#[async_trait]
impl InventoryRepository for SeaOrmInventoryRepository {
    async fn save(&self, inv: StationInventory) -> DomainResult<()> {
        debug!(
            "Saving inventory row: station={} type={}",
            inv.station_id, inv.power_bank_type_id
        );

        let model = station_inventory::ActiveModel {
            id: Set(inv.id),
            station_id: Set(inv.station_id),
            power_bank_type_id: Set(inv.power_bank_type_id),
            total_units: Set(inv.total_units),
            available_units: Set(inv.available_units),
            reserved_units: Set(inv.reserved_units),
            updated_at: Set(inv.updated_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<StationInventory>> {
        let model = station_inventory::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<StationInventory>> {
        let models = station_inventory::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_for_station(&self, station_id: Uuid) -> DomainResult<Vec<StationInventory>> {
        let models = station_inventory::Entity::find()
            .filter(station_inventory::Column::StationId.eq(station_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_station_and_type(
        &self,
        station_id: Uuid,
        power_bank_type_id: Uuid,
    ) -> DomainResult<Option<StationInventory>> {
        let model = station_inventory::Entity::find()
            .filter(station_inventory::Column::StationId.eq(station_id))
            .filter(station_inventory::Column::PowerBankTypeId.eq(power_bank_type_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, inv: StationInventory) -> DomainResult<()> {
        debug!("Updating inventory row: {}", inv.id);

        let existing = station_inventory::Entity::find_by_id(inv.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "StationInventory",
                field: "id",
                value: inv.id.to_string(),
            });
        }

        let model = station_inventory::ActiveModel {
            id: Set(inv.id),
            station_id: Set(inv.station_id),
            power_bank_type_id: Set(inv.power_bank_type_id),
            total_units: Set(inv.total_units),
            available_units: Set(inv.available_units),
            reserved_units: Set(inv.reserved_units),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn decrement_available(
        &self,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        expected_available: i32,
    ) -> DomainResult<bool> {
        // UPDATE ... SET available_units = expected - 1
        // WHERE station_id = ? AND power_bank_type_id = ?
        //   AND available_units = expected
        // Zero affected rows means someone else spent the unit first.
        let result = station_inventory::Entity::update_many()
            .col_expr(
                station_inventory::Column::AvailableUnits,
                Expr::value(expected_available - 1),
            )
            .col_expr(station_inventory::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(station_inventory::Column::StationId.eq(station_id))
            .filter(station_inventory::Column::PowerBankTypeId.eq(power_bank_type_id))
            .filter(station_inventory::Column::AvailableUnits.eq(expected_available))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        debug!(
            "Conditional decrement: station={} type={} expected={} affected={}",
            station_id, power_bank_type_id, expected_available, result.rows_affected
        );

        Ok(result.rows_affected == 1)
    }

    async fn set_available(&self, id: Uuid, available_units: i32) -> DomainResult<()> {
        let result = station_inventory::Entity::update_many()
            .col_expr(
                station_inventory::Column::AvailableUnits,
                Expr::value(available_units),
            )
            .col_expr(station_inventory::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(station_inventory::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "StationInventory",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_for_station(&self, station_id: Uuid) -> DomainResult<()> {
        station_inventory::Entity::delete_many()
            .filter(station_inventory::Column::StationId.eq(station_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
