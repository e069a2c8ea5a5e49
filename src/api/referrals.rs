//! Partner referrals service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{ApiRequest, ClientInner};
use crate::models::{ReferralRequest, ReferralResponse};
use crate::Result;

/// Service for onboarding merchants through partner referrals.
pub struct PartnerReferralsService {
    inner: Arc<ClientInner>,
}

impl PartnerReferralsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a referral. Send the merchant to
    /// [`ReferralResponse::action_url`] to finish onboarding.
    pub async fn create(&self, request: ReferralRequest) -> Result<ReferralResponse> {
        ApiRequest::new(
            self.inner.clone(),
            Method::POST,
            "/v2/customer/partner-referrals",
        )
        .json(&request)
        .send()
        .await
    }
}
