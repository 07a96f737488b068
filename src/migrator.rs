use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20240101_000001_create_bundle_arrivals_table::Migration,
        )]
    }
}

mod m20240101_000001_create_bundle_arrivals_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_bundle_arrivals_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Aligned with entities::bundle_arrival::Model
            manager
                .create_table(
                    Table::create()
                        .table(BundleArrivals::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(BundleArrivals::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(BundleArrivals::Date).date().not_null())
                        .col(
                            ColumnDef::new(BundleArrivals::LorryType)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::LorryNo)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::City)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::PartyName)
                                .string_len(200)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::AccountType)
                                .string_len(1)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::Bundle)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::InvoiceNo)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::InvoiceDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::Amount)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(BundleArrivals::PhoneNo).string_len(20))
                        .col(ColumnDef::new(BundleArrivals::Status).string_len(20))
                        .col(ColumnDef::new(BundleArrivals::Itemtype).string_len(100))
                        .col(
                            ColumnDef::new(BundleArrivals::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(BundleArrivals::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // Indexes matching the original store's query patterns
            for (name, column) in [
                ("idx_bundle_arrivals_date", BundleArrivals::Date),
                ("idx_bundle_arrivals_lorry_type", BundleArrivals::LorryType),
                ("idx_bundle_arrivals_party_name", BundleArrivals::PartyName),
                (
                    "idx_bundle_arrivals_account_type",
                    BundleArrivals::AccountType,
                ),
                ("idx_bundle_arrivals_status", BundleArrivals::Status),
            ] {
                manager
                    .create_index(
                        Index::create()
                            .if_not_exists()
                            .name(name)
                            .table(BundleArrivals::Table)
                            .col(column)
                            .to_owned(),
                    )
                    .await?;
            }

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(BundleArrivals::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum BundleArrivals {
        Table,
        Id,
        Date,
        LorryType,
        LorryNo,
        City,
        PartyName,
        AccountType,
        Bundle,
        InvoiceNo,
        InvoiceDate,
        Amount,
        PhoneNo,
        Status,
        Itemtype,
        CreatedAt,
        UpdatedAt,
    }
}
