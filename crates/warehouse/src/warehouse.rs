// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::{Connection, SqliteConnection};
use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, FactSale, StarSchema,
};
use std::path::Path;
use tracing::info;

use crate::backend;
use crate::data_models::{CustomerSpendingRow, HourlySalesRow, MonthlySalesRow, TopProductRow};
use crate::error::WarehouseError;
use crate::{mutations, queries, schema};

/// A connection to the star-schema warehouse.
pub struct Warehouse {
    conn: SqliteConnection,
}

impl std::fmt::Debug for Warehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Warehouse").finish_non_exhaustive()
    }
}

impl Warehouse {
    /// Opens (or creates) the warehouse file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, WarehouseError> {
        Ok(Self {
            conn: backend::connect_file(path)?,
        })
    }

    /// Opens a private in-memory warehouse.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub fn in_memory() -> Result<Self, WarehouseError> {
        Ok(Self {
            conn: backend::connect(backend::IN_MEMORY_URL)?,
        })
    }

    /// Replaces the warehouse contents with `star`.
    ///
    /// The tables are dropped, recreated and filled in a single
    /// transaction, then indexed. A failure leaves the previous contents
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails, including index creation
    /// over duplicate dimension keys.
    pub fn replace_star_schema(&mut self, star: &StarSchema) -> Result<(), WarehouseError> {
        self.conn.transaction::<_, WarehouseError, _>(|conn| {
            schema::recreate_tables(conn)?;
            mutations::insert_star_schema(conn, star)?;
            schema::create_indexes(conn)?;
            Ok(())
        })?;

        info!(
            branches = star.branches.len(),
            customers = star.customers.len(),
            products = star.products.len(),
            payments = star.payments.len(),
            dates = star.dates.len(),
            times = star.times.len(),
            facts = star.facts.len(),
            "Loaded star schema into warehouse"
        );
        Ok(())
    }

    /// Reads back every table.
    ///
    /// # Errors
    ///
    /// Returns an error if a table is missing or holds malformed values.
    pub fn read_star_schema(&mut self) -> Result<StarSchema, WarehouseError> {
        queries::load_star_schema(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn branches(&mut self) -> Result<Vec<DimBranch>, WarehouseError> {
        queries::load_branches(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn customers(&mut self) -> Result<Vec<DimCustomer>, WarehouseError> {
        queries::load_customers(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn products(&mut self) -> Result<Vec<DimProduct>, WarehouseError> {
        queries::load_products(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn payments(&mut self) -> Result<Vec<DimPayment>, WarehouseError> {
        queries::load_payments(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn dates(&mut self) -> Result<Vec<DimDate>, WarehouseError> {
        queries::load_dates(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn times(&mut self) -> Result<Vec<DimTime>, WarehouseError> {
        queries::load_times(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn facts(&mut self) -> Result<Vec<FactSale>, WarehouseError> {
        queries::load_facts(&mut self.conn)
    }

    /// Names of the user-created indexes, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn list_indexes(&mut self) -> Result<Vec<String>, WarehouseError> {
        backend::list_indexes(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails or returns the wrong columns.
    pub fn monthly_sales(&mut self, query: &str) -> Result<Vec<MonthlySalesRow>, WarehouseError> {
        queries::monthly_sales(&mut self.conn, query)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails or returns the wrong columns.
    pub fn top_products(&mut self, query: &str) -> Result<Vec<TopProductRow>, WarehouseError> {
        queries::top_products(&mut self.conn, query)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails or returns the wrong columns.
    pub fn customer_spending(
        &mut self,
        query: &str,
    ) -> Result<Vec<CustomerSpendingRow>, WarehouseError> {
        queries::customer_spending(&mut self.conn, query)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails or returns the wrong columns.
    pub fn hourly_sales(&mut self, query: &str) -> Result<Vec<HourlySalesRow>, WarehouseError> {
        queries::hourly_sales(&mut self.conn, query)
    }
}
