//! Company settings entity <-> model mapper

use portal_core::entities::CompanySettings;

use crate::models::CompanySettingsModel;

impl From<CompanySettingsModel> for CompanySettings {
    fn from(model: CompanySettingsModel) -> Self {
        CompanySettings {
            about: model.about,
            mission: model.mission,
            vision: model.vision,
            maintenance_mode: model.maintenance_mode,
            updated_at: model.updated_at,
        }
    }
}
