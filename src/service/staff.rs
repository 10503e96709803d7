use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{event::EventRepository, sales::SalesRepository},
    error::AppError,
    model::staff::{RecordEntryDto, RecordSaleDto, RecordTableSaleDto},
    util::parse,
};

/// Staff-facing operations recorded during an event night. Every record
/// resolves its event first so unknown ids surface as not-found instead of
/// foreign key failures.
pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one admitted guest.
    ///
    /// # Returns
    /// - `Ok(Uuid)`: Id of the created entry row
    /// - `Err(AppError)`: Unknown event, invalid gender, or database error
    pub async fn record_entry(&self, dto: RecordEntryDto) -> Result<Uuid, AppError> {
        self.ensure_event(dto.event_id).await?;
        let gender = dto
            .gender
            .as_deref()
            .map(parse::normalize_gender)
            .transpose()?;
        let entry = SalesRepository::new(self.db)
            .record_entry(dto.event_id, gender)
            .await?;
        Ok(entry.id)
    }

    /// Records a bar sale.
    pub async fn record_bar_sale(&self, dto: RecordSaleDto) -> Result<Uuid, AppError> {
        self.ensure_event(dto.event_id).await?;
        let amount = parse::parse_price(dto.amount)?;
        let sale = SalesRepository::new(self.db)
            .record_bar_sale(dto.event_id, amount)
            .await?;
        Ok(sale.id)
    }

    /// Records a cloakroom sale.
    pub async fn record_cloakroom_sale(&self, dto: RecordSaleDto) -> Result<Uuid, AppError> {
        self.ensure_event(dto.event_id).await?;
        let amount = parse::parse_price(dto.amount)?;
        let sale = SalesRepository::new(self.db)
            .record_cloakroom_sale(dto.event_id, amount)
            .await?;
        Ok(sale.id)
    }

    /// Records a payment against an event table.
    pub async fn record_table_sale(&self, dto: RecordTableSaleDto) -> Result<Uuid, AppError> {
        let repo = SalesRepository::new(self.db);
        repo.get_event_table(dto.event_table_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))?;

        let amount = parse::parse_price(dto.amount)?;
        let sale = repo.record_table_sale(dto.event_table_id, amount).await?;
        Ok(sale.id)
    }

    async fn ensure_event(&self, event_id: Uuid) -> Result<(), AppError> {
        EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        Ok(())
    }
}
