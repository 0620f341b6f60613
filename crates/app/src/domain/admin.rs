//! Staff-side order management.

use std::sync::Arc;

use jiff::Timestamp;
use tiffin::{
    order::{Order, OrderStatus},
    reports::{DashboardStats, KitchenBoard, OrderQuery, filter_orders},
    slots::TimeSlot,
};

use crate::{
    api::ApiError,
    domain::{orders::OrderBackend, slots::TimeSlotDirectory},
};

/// Order listing, kitchen prioritisation, and dashboard figures for staff.
///
/// Every view re-fetches from the backend; nothing is cached between
/// calls.
pub struct AdminService {
    backend: Arc<dyn OrderBackend>,
    slots: Arc<dyn TimeSlotDirectory>,
}

impl AdminService {
    /// Create a service over the given collaborators.
    #[must_use]
    pub fn new(backend: Arc<dyn OrderBackend>, slots: Arc<dyn TimeSlotDirectory>) -> Self {
        Self { backend, slots }
    }

    /// Orders matching `query`, in the backend's order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the listing cannot be fetched.
    pub async fn orders(&self, query: &OrderQuery) -> Result<Vec<Order>, ApiError> {
        let orders = self.backend.list_orders().await?;

        Ok(filter_orders(&orders, query).into_iter().cloned().collect())
    }

    /// Move one order to `status`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the order is unknown or the backend
    /// call fails.
    pub async fn set_status(&self, order_id: &str, status: OrderStatus) -> Result<Order, ApiError> {
        self.backend.update_status(order_id, status).await
    }

    /// Active orders grouped by slot and aged against `now`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the listing cannot be fetched.
    pub async fn kitchen_board(&self, now: Timestamp) -> Result<KitchenBoard, ApiError> {
        let orders = self.backend.list_orders().await?;

        Ok(KitchenBoard::build(&orders, now))
    }

    /// Headline figures over every order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the listing cannot be fetched.
    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        let orders = self.backend.list_orders().await?;

        Ok(DashboardStats::from_orders(&orders))
    }

    /// Current slot utilization.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the slot listing cannot be fetched.
    pub async fn slot_usage(&self) -> Result<Vec<TimeSlot>, ApiError> {
        self.slots.list().await
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use tiffin::{cart::CartLine, prices::Price, student::Student};

    use crate::domain::{orders::MockOrderBackend, slots::MockTimeSlotDirectory};

    use super::*;

    fn order(number: &str, name: &str, status: OrderStatus) -> TestResult<Order> {
        Ok(Order {
            id: number.to_lowercase(),
            order_number: number.to_string(),
            student: Student::new(name, "ADM-1", "CS 1st Year")?,
            lines: vec![CartLine::new("Tea", Price::from_rupees(10), 2)],
            total: Price::from_rupees(20),
            time_slot: "slot-1".to_string(),
            status,
            placed_at: Timestamp::UNIX_EPOCH,
        })
    }

    fn service_over(orders: Vec<Order>) -> AdminService {
        let mut backend = MockOrderBackend::new();
        backend
            .expect_list_orders()
            .returning(move || Ok(orders.clone()));

        AdminService::new(Arc::new(backend), Arc::new(MockTimeSlotDirectory::new()))
    }

    #[tokio::test]
    async fn orders_apply_the_query() -> TestResult {
        let service = service_over(vec![
            order("ORD000001", "Asha Rao", OrderStatus::Pending)?,
            order("ORD000002", "Priya Nair", OrderStatus::Ready)?,
        ]);

        let matches = service
            .orders(&OrderQuery::new().with_search("priya"))
            .await?;

        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches.first().map(|order| order.order_number.as_str()),
            Some("ORD000002")
        );

        Ok(())
    }

    #[tokio::test]
    async fn stats_cover_every_order() -> TestResult {
        let service = service_over(vec![
            order("ORD000001", "Asha Rao", OrderStatus::Pending)?,
            order("ORD000002", "Priya Nair", OrderStatus::Completed)?,
        ]);

        let stats = service.stats().await?;

        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.revenue, Price::from_rupees(40));

        Ok(())
    }

    #[tokio::test]
    async fn kitchen_board_only_shows_active_orders() -> TestResult {
        let service = service_over(vec![
            order("ORD000001", "Asha Rao", OrderStatus::Preparing)?,
            order("ORD000002", "Priya Nair", OrderStatus::Completed)?,
        ]);

        let board = service.kitchen_board(Timestamp::UNIX_EPOCH).await?;

        let tickets: usize = board.groups().iter().map(|group| group.tickets.len()).sum();
        assert_eq!(tickets, 1);

        Ok(())
    }
}
