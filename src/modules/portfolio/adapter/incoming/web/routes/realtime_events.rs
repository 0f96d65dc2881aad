use actix_web::{get, web, HttpResponse, Responder};
use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;
use tracing::debug;

use crate::modules::portfolio::application::ports::outgoing::{
    ChangeEvent, ChangeNotice, ChangeSubscription,
};
use crate::AppState;

/// Payload of one `data:` line.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RealtimeMessage {
    Change(ChangeEvent),
    /// Notices were dropped; clients should re-fetch everything they show.
    Resync { missed: u64 },
}

fn sse_frame(notice: ChangeNotice) -> Bytes {
    let message = match notice {
        ChangeNotice::Changed(event) => RealtimeMessage::Change(event),
        ChangeNotice::Missed(missed) => RealtimeMessage::Resync { missed },
    };

    match serde_json::to_string(&message) {
        Ok(json) => Bytes::from(format!("data: {json}\n\n")),
        Err(_) => Bytes::from_static(b": unserializable notice\n\n"),
    }
}

/// Opens with a comment frame so proxies flush headers, then one frame per notice.
fn event_stream(
    subscription: Box<dyn ChangeSubscription>,
) -> impl Stream<Item = Result<Bytes, actix_web::Error>> {
    let opening =
        stream::once(async { Ok::<_, actix_web::Error>(Bytes::from_static(b": connected\n\n")) });

    let notices = stream::unfold(subscription, |mut subscription| async move {
        let notice = subscription.next().await?;
        Some((Ok(sse_frame(notice)), subscription))
    });

    opening.chain(notices)
}

/// Change notices as server-sent events
///
/// Each event is `{"type":"change", table, kind, record_id, at}` or
/// `{"type":"resync", missed}`. Events carry no row data.
#[utoipa::path(
    get,
    path = "/api/realtime",
    tag = "portfolio",
    responses(
        (status = 200, description = "text/event-stream of change notices"),
    )
)]
#[get("/api/realtime")]
pub async fn realtime_events_handler(data: web::Data<AppState>) -> impl Responder {
    let subscription = data.portfolio.feed.subscribe(None);
    debug!("realtime client connected");

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .insert_header(("X-Accel-Buffering", "no"))
        .streaming(event_stream(subscription))
}
