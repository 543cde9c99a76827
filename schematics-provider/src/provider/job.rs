//! ibm_schematics_job handlers

use schematics_core::provider::{Operation, ProviderResult};
use schematics_core::resource::{Resource, ResourceId, State};

use super::{SchematicsProvider, created_id, failed, found};
use crate::convert::{Expand, Flatten, configured};
use crate::models::Job;
use crate::utils::{configured_location, region_from_identifier};

impl SchematicsProvider {
    pub(super) async fn read_job(
        &self,
        id: &ResourceId,
        identifier: &str,
        _desired: Option<&Resource>,
    ) -> ProviderResult<State> {
        let endpoint = self.endpoint(id, Operation::Read, region_from_identifier(identifier))?;
        let result = self.client.get_job(&endpoint, identifier).await;
        let Some(job) = found(result, id, "get job")? else {
            return Ok(State::not_found(id.clone()));
        };
        Ok(State::existing(id.clone(), job.flatten()).with_identifier(identifier))
    }

    pub(super) async fn create_job(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let endpoint = self.endpoint(id, Operation::Create, configured_location(resource))?;
        let job = Job::expand(&configured(resource));

        let created = self
            .client
            .create_job(&endpoint, &job)
            .await
            .map_err(|e| failed(id, Operation::Create, "create job", e))?;
        let identifier = created_id(id, "create job", created.id)?;
        log::info!("submitted job {} as {}", id.name, identifier);

        self.read_job(id, &identifier, Some(resource)).await
    }

    /// Jobs are replaced with every configured field, changed or not.
    pub(super) async fn update_job(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        if !to.attributes.keys().any(|key| to.has_change(from, key)) {
            log::debug!("job {} has no tracked changes", identifier);
            return self.read_job(id, identifier, Some(to)).await;
        }

        let endpoint = self.endpoint(id, Operation::Update, region_from_identifier(identifier))?;
        let job = Job::expand(&configured(to));
        self.client
            .update_job(&endpoint, identifier, &job)
            .await
            .map_err(|e| failed(id, Operation::Update, "update job", e))?;

        self.read_job(id, identifier, Some(to)).await
    }

    pub(super) async fn delete_job(&self, id: &ResourceId, identifier: &str) -> ProviderResult<()> {
        let endpoint = self.endpoint(id, Operation::Delete, region_from_identifier(identifier))?;
        self.client
            .delete_job(&endpoint, identifier)
            .await
            .map_err(|e| failed(id, Operation::Delete, "delete job", e))
    }
}
