//! Ordering session
//!
//! One student's path from an empty cart to a placed order. The session
//! holds the context a submission needs (identity, time slot) explicitly;
//! nothing is read from ambient state. A submission in flight locks the
//! draft until the backend's answer arrives or the attempt is abandoned.

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    cart::{CartError, OrderDraft},
    menu::MenuItem,
    order::{Order, OrderSubmission, provisional_label},
    student::Student,
};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The draft is open for mutation.
    Drafting,
    /// A submission has been handed off and no answer has arrived yet.
    AwaitingConfirmation,
    /// The backend confirmed the order. Terminal.
    Placed,
}

/// Errors that can occur while driving a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Submit was called without a student identity.
    #[error("no student identity on this session")]
    MissingStudent,

    /// Submit was called without a time slot, or with an empty one.
    #[error("no time slot selected")]
    MissingTimeSlot,

    /// Submit was called on an empty cart.
    #[error("the cart is empty")]
    EmptyCart,

    /// The draft is locked while a submission is outstanding.
    #[error("a submission is already in flight")]
    SubmissionPending,

    /// The session already holds a confirmed order; start a new session.
    #[error("this order has already been placed")]
    AlreadyPlaced,

    /// Confirm or failure was reported with no submission outstanding.
    #[error("no submission is outstanding")]
    NoPendingSubmission,

    /// A draft mutation was rejected.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// A single ordering session: explicit context, one draft, one lifecycle.
#[derive(Debug, Default, Clone)]
pub struct OrderSession {
    student: Option<Student>,
    time_slot: Option<String>,
    draft: OrderDraft,
    phase: Option<Phase>,
}

/// Internal phase storage; `None` means drafting.
#[derive(Debug, Clone)]
enum Phase {
    AwaitingConfirmation,
    Placed(Order),
}

impl OrderSession {
    /// Start a fresh session with an empty draft and no context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the student identity the order will be placed under.
    ///
    /// # Errors
    ///
    /// Returns a lock error when the session is no longer drafting.
    pub fn set_student(&mut self, student: Student) -> Result<(), SessionError> {
        self.ensure_drafting()?;
        self.student = Some(student);

        Ok(())
    }

    /// Select the time slot the order should be booked into.
    ///
    /// # Errors
    ///
    /// Returns a lock error when the session is no longer drafting.
    pub fn select_time_slot(&mut self, slot_id: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_drafting()?;
        self.time_slot = Some(slot_id.into());

        Ok(())
    }

    /// Add one unit of `item` to the draft.
    ///
    /// # Errors
    ///
    /// Returns a lock error when the session is no longer drafting.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<(), SessionError> {
        self.ensure_drafting()?;
        self.draft.add_item(item);

        Ok(())
    }

    /// Remove one unit of the named item from the draft.
    ///
    /// # Errors
    ///
    /// Returns a lock error when the session is no longer drafting.
    pub fn remove_item(&mut self, name: &str) -> Result<(), SessionError> {
        self.ensure_drafting()?;
        self.draft.remove_item(name);

        Ok(())
    }

    /// Delete the named line from the draft.
    ///
    /// # Errors
    ///
    /// Returns a lock error when the session is no longer drafting.
    pub fn delete_item(&mut self, name: &str) -> Result<(), SessionError> {
        self.ensure_drafting()?;
        self.draft.delete_item(name);

        Ok(())
    }

    /// Set the named line's quantity; zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns a lock error when the session is no longer drafting, or
    /// [`CartError::UnknownItem`] for a positive quantity on a name that is
    /// not in the cart.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Result<(), SessionError> {
        self.ensure_drafting()?;
        self.draft.set_quantity(name, quantity)?;

        Ok(())
    }

    /// Freeze the draft into an immutable submission.
    ///
    /// Preconditions are checked in order: identity, time slot, cart
    /// contents. Each violation fails fast with its own error and leaves the
    /// session drafting with the draft unchanged. On success the session
    /// moves to [`SessionPhase::AwaitingConfirmation`] and rejects further
    /// mutation until [`confirm`](Self::confirm) or
    /// [`submission_failed`](Self::submission_failed) is called.
    ///
    /// # Errors
    ///
    /// - [`SessionError::MissingStudent`]: no identity attached.
    /// - [`SessionError::MissingTimeSlot`]: no slot, or a blank slot id.
    /// - [`SessionError::EmptyCart`]: the draft has no lines.
    /// - [`SessionError::SubmissionPending`] / [`SessionError::AlreadyPlaced`]:
    ///   the session is past drafting.
    pub fn submit(&mut self, placed_at: Timestamp) -> Result<OrderSubmission, SessionError> {
        self.ensure_drafting()?;

        let student = self.student.clone().ok_or(SessionError::MissingStudent)?;

        let time_slot = self
            .time_slot
            .as_deref()
            .map(str::trim)
            .filter(|slot| !slot.is_empty())
            .ok_or(SessionError::MissingTimeSlot)?
            .to_string();

        if self.draft.is_empty() {
            return Err(SessionError::EmptyCart);
        }

        let submission = OrderSubmission::new(
            provisional_label(placed_at),
            student,
            time_slot,
            self.draft.lines().to_vec(),
            self.draft.total(),
            placed_at,
        );

        self.phase = Some(Phase::AwaitingConfirmation);

        Ok(submission)
    }

    /// Record the backend's confirmation and close the session.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoPendingSubmission`]: nothing was submitted.
    /// - [`SessionError::AlreadyPlaced`]: the session is already closed.
    pub fn confirm(&mut self, order: Order) -> Result<(), SessionError> {
        match self.phase {
            None => Err(SessionError::NoPendingSubmission),
            Some(Phase::Placed(_)) => Err(SessionError::AlreadyPlaced),
            Some(Phase::AwaitingConfirmation) => {
                self.phase = Some(Phase::Placed(order));

                Ok(())
            }
        }
    }

    /// Record that the outstanding submission failed and reopen the draft.
    ///
    /// The lines are kept exactly as submitted so the student can retry or
    /// amend the order.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoPendingSubmission`]: nothing was submitted.
    /// - [`SessionError::AlreadyPlaced`]: the session is already closed.
    pub fn submission_failed(&mut self) -> Result<(), SessionError> {
        match self.phase {
            None => Err(SessionError::NoPendingSubmission),
            Some(Phase::Placed(_)) => Err(SessionError::AlreadyPlaced),
            Some(Phase::AwaitingConfirmation) => {
                self.phase = None;

                Ok(())
            }
        }
    }

    /// The attached student identity, if any.
    #[must_use]
    pub fn student(&self) -> Option<&Student> {
        self.student.as_ref()
    }

    /// The selected time slot id, if any.
    #[must_use]
    pub fn time_slot(&self) -> Option<&str> {
        self.time_slot.as_deref()
    }

    /// The draft in its current state.
    #[must_use]
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Where the session is in its lifecycle.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.phase {
            None => SessionPhase::Drafting,
            Some(Phase::AwaitingConfirmation) => SessionPhase::AwaitingConfirmation,
            Some(Phase::Placed(_)) => SessionPhase::Placed,
        }
    }

    /// The confirmed order, once the session is placed.
    #[must_use]
    pub fn confirmed_order(&self) -> Option<&Order> {
        match &self.phase {
            Some(Phase::Placed(order)) => Some(order),
            _ => None,
        }
    }

    fn ensure_drafting(&self) -> Result<(), SessionError> {
        match self.phase {
            None => Ok(()),
            Some(Phase::AwaitingConfirmation) => Err(SessionError::SubmissionPending),
            Some(Phase::Placed(_)) => Err(SessionError::AlreadyPlaced),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{menu::Category, order::OrderStatus, prices::Price};

    use super::*;

    fn item(name: &str, rupees: u64) -> MenuItem {
        MenuItem {
            id: format!("item-{}", name.to_lowercase()),
            name: name.to_string(),
            price: Price::from_rupees(rupees),
            category: Category::Snack,
            available: true,
            description: String::new(),
            image: None,
        }
    }

    fn student() -> TestResult<Student> {
        Ok(Student::new("Asha Rao", "ADM-1042", "EC 3rd Year")?)
    }

    fn ready_session() -> TestResult<OrderSession> {
        let mut session = OrderSession::new();
        session.set_student(student()?)?;
        session.select_time_slot("slot-2")?;
        session.add_item(&item("Tea", 10))?;
        session.add_item(&item("Tea", 10))?;
        session.add_item(&item("Samosa", 15))?;

        Ok(session)
    }

    fn confirmed(submission: &OrderSubmission) -> Order {
        Order {
            id: "41".to_string(),
            order_number: "ORD000041".to_string(),
            student: submission.student().clone(),
            lines: submission.lines().to_vec(),
            total: submission.total(),
            time_slot: submission.time_slot().to_string(),
            status: OrderStatus::Pending,
            placed_at: submission.placed_at(),
        }
    }

    #[test]
    fn submit_checks_identity_before_anything_else() {
        let mut session = OrderSession::new();

        let result = session.submit(Timestamp::UNIX_EPOCH);

        assert_eq!(result, Err(SessionError::MissingStudent));
        assert_eq!(session.phase(), SessionPhase::Drafting);
    }

    #[test]
    fn submit_requires_a_non_blank_time_slot() -> TestResult {
        let mut session = OrderSession::new();
        session.set_student(student()?)?;
        session.add_item(&item("Tea", 10))?;

        assert_eq!(
            session.submit(Timestamp::UNIX_EPOCH),
            Err(SessionError::MissingTimeSlot)
        );

        session.select_time_slot("   ")?;

        assert_eq!(
            session.submit(Timestamp::UNIX_EPOCH),
            Err(SessionError::MissingTimeSlot)
        );

        Ok(())
    }

    #[test]
    fn submit_rejects_an_empty_cart_and_leaves_the_session_open() -> TestResult {
        let mut session = OrderSession::new();
        session.set_student(student()?)?;
        session.select_time_slot("slot-2")?;

        let result = session.submit(Timestamp::UNIX_EPOCH);

        assert_eq!(result, Err(SessionError::EmptyCart));
        assert_eq!(session.phase(), SessionPhase::Drafting);

        session.add_item(&item("Tea", 10))?;

        assert_eq!(session.draft().len(), 1);

        Ok(())
    }

    #[test]
    fn submit_freezes_the_draft_verbatim() -> TestResult {
        let mut session = ready_session()?;

        let placed_at = Timestamp::from_millisecond(1_755_841_234_567)?;
        let submission = session.submit(placed_at)?;

        assert_eq!(submission.label(), "ORD234567");
        assert_eq!(submission.time_slot(), "slot-2");
        assert_eq!(submission.total(), Price::from_minor(35_00));
        assert_eq!(submission.lines(), session.draft().lines());
        assert_eq!(submission.student().name(), "Asha Rao");
        assert_eq!(submission.placed_at(), placed_at);
        assert_eq!(session.phase(), SessionPhase::AwaitingConfirmation);

        Ok(())
    }

    #[test]
    fn outstanding_submissions_lock_the_draft() -> TestResult {
        let mut session = ready_session()?;
        let _submission = session.submit(Timestamp::UNIX_EPOCH)?;

        assert_eq!(
            session.add_item(&item("Coffee", 15)),
            Err(SessionError::SubmissionPending)
        );
        assert_eq!(
            session.remove_item("Tea"),
            Err(SessionError::SubmissionPending)
        );
        assert!(matches!(
            session.submit(Timestamp::UNIX_EPOCH),
            Err(SessionError::SubmissionPending)
        ));

        Ok(())
    }

    #[test]
    fn failed_submissions_reopen_the_draft_intact() -> TestResult {
        let mut session = ready_session()?;
        let submission = session.submit(Timestamp::UNIX_EPOCH)?;

        session.submission_failed()?;

        assert_eq!(session.phase(), SessionPhase::Drafting);
        assert_eq!(session.draft().lines(), submission.lines());

        session.add_item(&item("Coffee", 15))?;
        let retry = session.submit(Timestamp::UNIX_EPOCH)?;

        assert_eq!(retry.total(), Price::from_minor(50_00));

        Ok(())
    }

    #[test]
    fn confirm_closes_the_session() -> TestResult {
        let mut session = ready_session()?;
        let submission = session.submit(Timestamp::UNIX_EPOCH)?;

        session.confirm(confirmed(&submission))?;

        assert_eq!(session.phase(), SessionPhase::Placed);
        assert_eq!(
            session.confirmed_order().map(|order| order.id.as_str()),
            Some("41")
        );
        assert_eq!(
            session.add_item(&item("Coffee", 15)),
            Err(SessionError::AlreadyPlaced)
        );
        assert!(matches!(
            session.submit(Timestamp::UNIX_EPOCH),
            Err(SessionError::AlreadyPlaced)
        ));

        Ok(())
    }

    #[test]
    fn confirm_needs_an_outstanding_submission() -> TestResult {
        let mut session = ready_session()?;
        let submission = session.submit(Timestamp::UNIX_EPOCH)?;
        let order = confirmed(&submission);

        session.submission_failed()?;

        assert_eq!(
            session.confirm(order),
            Err(SessionError::NoPendingSubmission)
        );
        assert_eq!(
            session.submission_failed(),
            Err(SessionError::NoPendingSubmission)
        );

        Ok(())
    }

    #[test]
    fn cart_errors_pass_through() -> TestResult {
        let mut session = ready_session()?;

        let result = session.set_quantity("Coffee", 2);

        assert_eq!(
            result,
            Err(SessionError::Cart(CartError::UnknownItem(
                "Coffee".to_string()
            )))
        );

        Ok(())
    }
}
