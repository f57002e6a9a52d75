use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use tracing::{debug, info, warn};

use crate::connect::envelope::{self, NotificationRecord};
use crate::connect::verify::{AuthFailure, SignatureVerifier};
use crate::error::{Error, Result};
use crate::AppState;

/// Verify, then decode. Nothing is parsed unless the signature checks out.
pub fn handle(
    verifier: &SignatureVerifier,
    header: Option<&str>,
    body: &[u8],
) -> Result<NotificationRecord> {
    verifier.verify(header, body).map_err(|reason| {
        warn!(%reason, body_len = body.len(), "rejected connect notification");
        reason
    })?;

    envelope::decode(body).map_err(|e| {
        warn!(error = %e, "authenticated payload could not be decoded");
        Error::InvalidPayload(e)
    })
}

pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let header = match headers.get(&state.signature_header).map(|v| v.to_str()) {
        Some(Ok(value)) => Some(value),
        Some(Err(_)) => {
            // Opaque bytes cannot be base64 either.
            warn!(reason = %AuthFailure::MalformedSignature, "rejected connect notification");
            return Err(AuthFailure::MalformedSignature.into());
        }
        None => None,
    };

    let record = handle(&state.verifier, header, &body)?;
    info!(envelope_id = %record.envelope_id, status = %record.status, "accepted connect notification");

    let sink = state.sink.clone();
    tokio::spawn(async move {
        let envelope_id = record.envelope_id.clone();
        match sink.publish(record).await {
            Ok(()) => debug!(%envelope_id, "notification handed off"),
            Err(e) => warn!(%envelope_id, error = %e, "notification hand-off failed"),
        }
    });

    Ok(StatusCode::OK)
}
