use super::SessionError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationStatus {
    #[default]
    NotRegistered,
    PendingApproval,
    Approved,
}

/// Approval state of one bidder for one listing.
///
/// `Approved` is terminal, there is no rejection or de-registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    status: RegistrationStatus,
}

impl Registration {
    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn accept_terms(&mut self) -> Result<RegistrationStatus, SessionError> {
        self.transition(
            RegistrationStatus::NotRegistered,
            RegistrationStatus::PendingApproval,
        )
    }

    pub fn on_approval_granted(&mut self) -> Result<RegistrationStatus, SessionError> {
        self.transition(
            RegistrationStatus::PendingApproval,
            RegistrationStatus::Approved,
        )
    }

    fn transition(
        &mut self,
        from: RegistrationStatus,
        to: RegistrationStatus,
    ) -> Result<RegistrationStatus, SessionError> {
        if self.status != from {
            return Err(SessionError::InvalidStateTransition { from: self.status });
        }
        self.status = to;
        Ok(to)
    }
}
