//! Background commands enqueued after an inquiry is created.

use serde::{Deserialize, Serialize};

use crate::common::{InquiryRiderId, ProfileId, RiderId};
use crate::kernel::CommandMeta;

/// Copy the media of a profile rider into the rider record attached to an
/// inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyMediaItem {
    pub source_rider_id: RiderId,
    pub target_rider_id: InquiryRiderId,
}

impl CommandMeta for CopyMediaItem {
    fn command_type(&self) -> &'static str {
        "copy_media_item"
    }

    fn idempotency_key(&self) -> Option<String> {
        Some(format!("copy_media_item:{}", self.target_rider_id))
    }

    fn reference_id(&self) -> Option<uuid::Uuid> {
        Some(self.target_rider_id.into_uuid())
    }
}

/// Create or update the CRM contact for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCrmProfile {
    pub profile_id: ProfileId,
}

impl CommandMeta for SyncCrmProfile {
    fn command_type(&self) -> &'static str {
        "sync_crm_profile"
    }

    /// One pending sync per profile is enough; it reads current data when it runs.
    fn idempotency_key(&self) -> Option<String> {
        Some(format!("sync_crm_profile:{}", self.profile_id))
    }

    fn reference_id(&self) -> Option<uuid::Uuid> {
        Some(self.profile_id.into_uuid())
    }

    fn max_retries(&self) -> i32 {
        5
    }
}
