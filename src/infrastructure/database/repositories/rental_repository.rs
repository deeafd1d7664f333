//! SeaORM implementation of RentalRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::rental::{Rental, RentalDetails, RentalRepository, RentalStatus, RentalType};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{power_bank_type, rental, station};

pub struct SeaOrmRentalRepository {
    db: DatabaseConnection,
}

impl SeaOrmRentalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: rental::Model) -> Rental {
    Rental {
        id: m.id,
        user_id: m.user_id,
        station_id: m.station_id,
        power_bank_type_id: m.power_bank_type_id,
        booking_id: m.booking_id,
        start_time: m.start_time,
        end_time: m.end_time,
        status: RentalStatus::from_str(&m.status),
        rental_duration_hours: m.rental_duration_hours,
        rental_type: RentalType::from_str(&m.rental_type),
        base_price: m.base_price,
        surcharges: m.surcharges,
        peak_hour_surcharge: m.peak_hour_surcharge,
        weekend_premium: m.weekend_premium,
        loyalty_discount: m.loyalty_discount,
        security_deposit: m.security_deposit,
        total_amount: m.total_amount,
        scheduled_start_time: m.scheduled_start_time,
        cancellation_deadline: m.cancellation_deadline,
        created_at: m.created_at,
    }
}

fn domain_to_active(r: Rental) -> rental::ActiveModel {
    rental::ActiveModel {
        id: Set(r.id),
        user_id: Set(r.user_id),
        station_id: Set(r.station_id),
        power_bank_type_id: Set(r.power_bank_type_id),
        booking_id: Set(r.booking_id),
        start_time: Set(r.start_time),
        end_time: Set(r.end_time),
        status: Set(r.status.as_str().to_string()),
        rental_duration_hours: Set(r.rental_duration_hours),
        rental_type: Set(r.rental_type.as_str().to_string()),
        base_price: Set(r.base_price),
        surcharges: Set(r.surcharges),
        peak_hour_surcharge: Set(r.peak_hour_surcharge),
        weekend_premium: Set(r.weekend_premium),
        loyalty_discount: Set(r.loyalty_discount),
        security_deposit: Set(r.security_deposit),
        total_amount: Set(r.total_amount),
        scheduled_start_time: Set(r.scheduled_start_time),
        cancellation_deadline: Set(r.cancellation_deadline),
        created_at: Set(r.created_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── RentalRepository impl ───────────────────────────────────────

#[async_trait]
impl RentalRepository for SeaOrmRentalRepository {
    async fn save(&self, r: Rental) -> DomainResult<()> {
        debug!("Saving rental: {}", r.id);
        domain_to_active(r).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Rental>> {
        let model = rental::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_detailed(&self, id: Uuid) -> DomainResult<Option<RentalDetails>> {
        let Some(model) = rental::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let station_name = station::Entity::find_by_id(model.station_id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(|s| s.name)
            .unwrap_or_default();

        let power_bank_type_name = power_bank_type::Entity::find_by_id(model.power_bank_type_id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(|t| t.name)
            .unwrap_or_default();

        Ok(Some(RentalDetails {
            rental: model_to_domain(model),
            station_name,
            power_bank_type_name,
        }))
    }

    async fn find_by_booking_id(&self, booking_id: Uuid) -> DomainResult<Option<Rental>> {
        let model = rental::Entity::find()
            .filter(rental::Column::BookingId.eq(booking_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Rental>> {
        let models = rental::Entity::find()
            .order_by_desc(rental::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_active(&self) -> DomainResult<Vec<Rental>> {
        let models = rental::Entity::find()
            .filter(rental::Column::Status.eq("active"))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_recent_active(
        &self,
        user_id: Uuid,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        since: DateTime<Utc>,
    ) -> DomainResult<Option<Rental>> {
        let model = rental::Entity::find()
            .filter(rental::Column::UserId.eq(user_id))
            .filter(rental::Column::StationId.eq(station_id))
            .filter(rental::Column::PowerBankTypeId.eq(power_bank_type_id))
            .filter(rental::Column::Status.eq("active"))
            .filter(rental::Column::CreatedAt.gte(since))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, r: Rental) -> DomainResult<()> {
        debug!("Updating rental: {} -> {}", r.id, r.status);

        let existing = rental::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Rental",
                field: "id",
                value: r.id.to_string(),
            });
        }

        domain_to_active(r).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let existing = rental::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Rental",
                field: "id",
                value: id.to_string(),
            });
        };

        debug!("Deleting rental: {}", id);
        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
