//! Customer CRUD operations.

use std::sync::Arc;

use tracing::info;

use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerFilter, CustomerId, SortSpec};
use rentalhub_database::CustomerStore;
use rentalhub_entity::{Customer, CustomerSortKey, NewCustomer, UpdateCustomer};

/// Handles the customer directory.
#[derive(Debug, Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerStore>,
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }

    /// Lists customers matching `filter` in `sort` order.
    pub async fn list(
        &self,
        filter: &CustomerFilter,
        sort: &SortSpec<CustomerSortKey>,
    ) -> AppResult<Vec<Customer>> {
        self.customers.find_all(filter, sort).await
    }

    /// Fetches one customer.
    pub async fn get(&self, id: CustomerId) -> AppResult<Customer> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| Customer::not_found(id))
    }

    /// Registers a customer.
    pub async fn create(&self, data: NewCustomer) -> AppResult<Customer> {
        let customer = self.customers.create(&data).await?;
        info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    /// Applies a partial update.
    pub async fn update(&self, id: CustomerId, data: UpdateCustomer) -> AppResult<Customer> {
        let customer = self
            .customers
            .update(id, &data)
            .await?
            .ok_or_else(|| Customer::not_found(id))?;
        info!(customer_id = %id, "Customer updated");
        Ok(customer)
    }

    /// Removes a customer and their rental history, returning the removed
    /// record.
    pub async fn delete(&self, id: CustomerId) -> AppResult<Customer> {
        let customer = self
            .customers
            .delete(id)
            .await?
            .ok_or_else(|| Customer::not_found(id))?;
        info!(customer_id = %id, "Customer deleted");
        Ok(customer)
    }
}
