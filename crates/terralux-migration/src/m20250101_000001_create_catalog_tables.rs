//! Initial schema: vendor, building_model, affiliate_click,
//! consultation_request.
//!
//! Referential integrity lives here: building_model and affiliate_click
//! cascade with their vendor; consultation_request keeps its row and nulls
//! the reference. The building_model slug carries the unique index that
//! resolves concurrent creations racing on the same derived slug.

use sea_orm_migration::{prelude::*, schema::*};

// sea-orm-migration 1.1 ships `pk_auto` (i32) but not a big-integer variant.
fn big_pk_auto<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .take()
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Vendor::Id))
                    .col(string(Vendor::PartnerName))
                    .col(string_len_null(Vendor::WebsiteUrl, 500))
                    .col(string_len_null(Vendor::AffiliateLink, 500))
                    .col(boolean(Vendor::IsCertified).default(false))
                    .col(boolean(Vendor::ConsultationEnabled).default(false))
                    .col(string_len_null(Vendor::Coordinates, 100))
                    .col(string_len(Vendor::PrimaryCategory, 50))
                    .col(string_len(Vendor::HealAlignment, 20))
                    .col(string_len(Vendor::Status, 20))
                    .col(json(Vendor::Metadata))
                    .col(json(Vendor::ContactInfo))
                    .col(timestamp(Vendor::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BuildingModel::Table)
                    .if_not_exists()
                    .col(big_pk_auto(BuildingModel::Id))
                    .col(big_integer(BuildingModel::VendorId))
                    .col(string(BuildingModel::ModelName))
                    .col(string(BuildingModel::Slug))
                    .col(text(BuildingModel::Description))
                    .col(string_len(BuildingModel::PriceRange, 100))
                    .col(json(BuildingModel::Specifications))
                    .col(json(BuildingModel::Images))
                    .col(boolean(BuildingModel::IsFeatured).default(false))
                    .col(string_len_null(BuildingModel::GlbFile, 500))
                    .col(string_len(BuildingModel::RelationshipType, 50))
                    .col(timestamp(BuildingModel::CreatedAt))
                    .col(timestamp(BuildingModel::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-building_model-vendor")
                            .from(BuildingModel::Table, BuildingModel::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-building_model-slug")
                    .table(BuildingModel::Table)
                    .col(BuildingModel::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AffiliateClick::Table)
                    .if_not_exists()
                    .col(big_pk_auto(AffiliateClick::Id))
                    .col(big_integer(AffiliateClick::VendorId))
                    .col(big_integer_null(AffiliateClick::UserId))
                    .col(timestamp(AffiliateClick::Timestamp))
                    .col(boolean(AffiliateClick::Converted).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-affiliate_click-vendor")
                            .from(AffiliateClick::Table, AffiliateClick::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ConsultationRequest::Table)
                    .if_not_exists()
                    .col(big_pk_auto(ConsultationRequest::Id))
                    .col(big_integer_null(ConsultationRequest::UserId))
                    .col(string_len(ConsultationRequest::Email, 254))
                    .col(string_len(ConsultationRequest::Phone, 20))
                    .col(big_integer_null(ConsultationRequest::VendorId))
                    .col(big_integer_null(ConsultationRequest::ModelId))
                    .col(text(ConsultationRequest::Message))
                    .col(string_len(ConsultationRequest::Status, 20))
                    .col(timestamp(ConsultationRequest::CreatedAt))
                    .col(timestamp(ConsultationRequest::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-consultation_request-vendor")
                            .from(ConsultationRequest::Table, ConsultationRequest::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-consultation_request-building_model")
                            .from(ConsultationRequest::Table, ConsultationRequest::ModelId)
                            .to(BuildingModel::Table, BuildingModel::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConsultationRequest::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AffiliateClick::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BuildingModel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vendor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Vendor {
    Table,
    Id,
    PartnerName,
    WebsiteUrl,
    AffiliateLink,
    IsCertified,
    ConsultationEnabled,
    Coordinates,
    PrimaryCategory,
    HealAlignment,
    Status,
    Metadata,
    ContactInfo,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BuildingModel {
    Table,
    Id,
    VendorId,
    ModelName,
    Slug,
    Description,
    PriceRange,
    Specifications,
    Images,
    IsFeatured,
    GlbFile,
    RelationshipType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AffiliateClick {
    Table,
    Id,
    VendorId,
    UserId,
    Timestamp,
    Converted,
}

#[derive(DeriveIden)]
enum ConsultationRequest {
    Table,
    Id,
    UserId,
    Email,
    Phone,
    VendorId,
    ModelId,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
