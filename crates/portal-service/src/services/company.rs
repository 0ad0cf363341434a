//! Company settings service
//!
//! Reads and writes the single settings row. Toggling the maintenance flag
//! also updates the in-process gate the middleware consults, so the change
//! takes effect without a restart.

use tracing::{info, instrument};

use crate::dto::{CompanySettingsResponse, UpdateCompanySettingsRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Company settings service
pub struct CompanyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CompanyService<'a> {
    /// Create a new CompanyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Read the portal settings
    #[instrument(skip(self))]
    pub async fn get_settings(&self) -> ServiceResult<CompanySettingsResponse> {
        let settings = self.ctx.settings_repo().get().await?;
        Ok(CompanySettingsResponse::from(&settings))
    }

    /// Update the portal settings (staff only)
    #[instrument(skip(self, request))]
    pub async fn update_settings(
        &self,
        request: UpdateCompanySettingsRequest,
    ) -> ServiceResult<CompanySettingsResponse> {
        let mut settings = self.ctx.settings_repo().get().await?;

        if let Some(about) = request.about {
            settings.about = Some(about);
        }
        if let Some(mission) = request.mission {
            settings.mission = Some(mission);
        }
        if let Some(vision) = request.vision {
            settings.vision = Some(vision);
        }
        if let Some(maintenance_mode) = request.maintenance_mode {
            settings.maintenance_mode = maintenance_mode;
        }

        self.ctx.settings_repo().save(&settings).await?;
        self.ctx.set_maintenance_mode(settings.maintenance_mode);

        info!(
            maintenance_mode = settings.maintenance_mode,
            "Company settings updated"
        );
        Ok(CompanySettingsResponse::from(&settings))
    }

    /// Load the persisted maintenance flag into the in-process gate.
    ///
    /// Called once at startup so a restart does not drop an active gate.
    #[instrument(skip(self))]
    pub async fn sync_maintenance_flag(&self) -> ServiceResult<()> {
        let settings = self.ctx.settings_repo().get().await?;
        self.ctx.set_maintenance_mode(settings.maintenance_mode);
        Ok(())
    }
}
