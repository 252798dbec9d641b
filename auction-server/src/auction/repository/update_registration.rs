use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Applies a registration transition atomically. A failed transition stores nothing.
    pub async fn update_registration<F>(
        &self,
        listing_id: entities::ListingId,
        bidder_id: entities::BidderId,
        transition: F,
    ) -> Result<entities::RegistrationStatus, entities::SessionError>
    where
        F: FnOnce(&mut entities::Registration) -> Result<entities::RegistrationStatus, entities::SessionError>,
    {
        let mut registrations = self.in_memory_store.registrations.write().await;
        let key = (listing_id, bidder_id);
        let mut registration = registrations.get(&key).cloned().unwrap_or_default();
        let status = transition(&mut registration)?;
        registrations.insert(key, registration);
        Ok(status)
    }
}
