use async_trait::async_trait;

use rentalhub_core::error::AppError;
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerFilter, CustomerId, SortSpec};
use rentalhub_entity::{Customer, CustomerSortKey, NewCustomer, UpdateCustomer};

use super::MemoryStore;
use crate::store::CustomerStore;

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        Ok(self.tables.read().await.customers.get(&id).cloned())
    }

    async fn find_all(
        &self,
        filter: &CustomerFilter,
        sort: &SortSpec<CustomerSortKey>,
    ) -> AppResult<Vec<Customer>> {
        let tables = self.tables.read().await;
        let mut customers: Vec<Customer> = tables
            .customers
            .values()
            .filter(|c| filter.matches(&c.name, &c.postal_code))
            .cloned()
            .collect();
        sort.sort(&mut customers, |a, b, key| key.compare(a, b));
        Ok(customers)
    }

    async fn create(&self, data: &NewCustomer) -> AppResult<Customer> {
        let mut tables = self.tables.write().await;
        let customer = data.clone().into_customer(tables.next_customer_id());
        tables.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update(
        &self,
        id: CustomerId,
        data: &UpdateCustomer,
    ) -> AppResult<Option<Customer>> {
        let mut tables = self.tables.write().await;
        Ok(tables.customers.get_mut(&id).map(|customer| {
            customer.apply(data);
            customer.clone()
        }))
    }

    async fn delete(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        let mut tables = self.tables.write().await;
        if !tables.customers.contains_key(&id) {
            return Ok(None);
        }
        let active = tables.active_count_for_customer(id);
        if active > 0 {
            return Err(AppError::state(format!(
                "Customer {id} still holds {active} rented copies"
            )));
        }
        tables.rentals.retain(|_, r| r.customer_id != id);
        Ok(tables.customers.remove(&id))
    }
}
