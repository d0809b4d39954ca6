//! SniperTrader site - Spin HTTP component.
//!
//! Serves the four content pages with shell-first streaming and handles
//! contact form posts:
//! - `GET /`, `/about`, `/types`, `/contact` stream the page sections
//! - `POST /api/contact` runs the submission pipeline and answers JSON, or
//!   re-renders the contact page for native form posts
//! - anything else gets a 404 page or a 405

pub mod api;
pub mod config;
pub mod gateway;
pub mod render;

use std::fmt::Display;

use futures::{Sink, SinkExt};
use http::StatusCode;
use spin_sdk::http::{
    Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam,
};
use spin_sdk::http_component;

use sniper_core::{Method, Page, RequestContext, SiteRoute, WorkloadError};
use sniper_observability::StructuredLogger;
use sniper_site::{ContactFormView, PageSection, Site};
use sniper_streaming::{Shell, StreamingSink};

use api::{
    contact_response, parse_submission, submit_contact, wants_json, HTML_CONTENT_TYPE,
    JSON_CONTENT_TYPE,
};
use gateway::SpinEmailGateway;
use render::stream_page;

/// Site request handler.
#[http_component]
async fn handle_site(req: IncomingRequest, response_out: ResponseOutparam) {
    let method = method_of(&req);
    let path = req.path_with_query().unwrap_or_default();
    let headers = req
        .headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()));
    let ctx = RequestContext::new(method.unwrap_or(Method::Get), &path).with_headers(headers);

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_method(ctx.method)
        .with_route(ctx.path.clone())
        .with_min_level(config::log_level());

    let route = match method {
        Some(method) => SiteRoute::resolve(method, &ctx.path),
        None => SiteRoute::MethodNotAllowed,
    };

    logger
        .debug_builder("Request started")
        .field("route", format!("{:?}", route))
        .emit();

    let site = Site::default();
    let status = match route {
        SiteRoute::Page(page) => {
            let sections = site.sections(page, &ContactFormView::new());
            serve_page(&ctx, &logger, response_out, &site.shell(page), &sections, page)
                .await;
            StatusCode::OK
        }
        SiteRoute::ContactApi => serve_contact(req, &ctx, &logger, response_out, &site).await,
        SiteRoute::MethodNotAllowed => {
            let allow = if ctx.path.trim_end_matches('/') == sniper_core::CONTACT_API_PATH {
                "POST"
            } else {
                "GET, HEAD"
            };
            start_response(
                response_out,
                StatusCode::METHOD_NOT_ALLOWED,
                vec![
                    ("allow".to_owned(), allow.into()),
                    ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
                ],
                &logger,
            );
            StatusCode::METHOD_NOT_ALLOWED
        }
        SiteRoute::NotFound => {
            let body = start_response(
                response_out,
                StatusCode::NOT_FOUND,
                html_headers(&ctx, "no-store"),
                &logger,
            );
            write_all(body, site.render_not_found().into_bytes(), &logger).await;
            StatusCode::NOT_FOUND
        }
    };

    logger
        .info_builder("Request completed")
        .field_i64("status", i64::from(status.as_u16()))
        .emit();
}

/// Stream one content page.
async fn serve_page(
    ctx: &RequestContext,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
    shell: &Shell,
    sections: &[PageSection],
    page: Page,
) {
    let body = start_response(
        response_out,
        StatusCode::OK,
        html_headers(ctx, page.cache_control()),
        logger,
    );

    if ctx.method == Method::Head {
        return;
    }

    let mut sink = StreamingSink::new(body, ctx.timing.clone());
    if let Err(e) = stream_page(&mut sink, shell, sections).await {
        logger
            .error_builder("Streaming failed")
            .field("page", page.slug())
            .field("error", e.to_string())
            .emit();
        return;
    }

    let mut entry = logger
        .info_builder("Page streamed")
        .field("page", page.slug())
        .field_i64("sections", sink.sections_sent().len() as i64);
    if let Some(ttfb) = sink.timing().time_to_shell() {
        entry = entry.duration_ms("time_to_shell_ms", ttfb);
    }
    if let Some((name, took)) = sink.timing().slowest_section() {
        entry = entry
            .field("slowest_section", name)
            .duration_ms("slowest_section_ms", took);
    }
    entry.emit();
}

/// Handle a contact form post.
async fn serve_contact(
    req: IncomingRequest,
    ctx: &RequestContext,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
    site: &Site,
) -> StatusCode {
    let content_type = ctx.content_type();
    let json = wants_json(ctx.header("accept"), content_type.as_deref());

    let submission = match req.into_body().await {
        Ok(bytes) => parse_submission(content_type.as_deref(), &bytes),
        Err(e) => Err(WorkloadError::BadRequest(format!("{:?}", e))),
    };

    let submission = match submission {
        Ok(submission) => submission,
        Err(e) => {
            logger
                .warn_builder("Rejected contact body")
                .field("error", e.to_string())
                .emit();
            let body = start_response(
                response_out,
                StatusCode::BAD_REQUEST,
                reply_headers(ctx, JSON_CONTENT_TYPE),
                logger,
            );
            let payload = serde_json::json!({ "status": "bad_request", "error": e.to_string() });
            write_all(body, payload.to_string().into_bytes(), logger).await;
            return StatusCode::BAD_REQUEST;
        }
    };

    let site_config = config::site_config();
    let site_name = config::resolve_site(ctx.hostname(), &site_config);
    let gateway = SpinEmailGateway::new(logger);

    let outcome = submit_contact(config::gateway_config(), gateway, &site_name, submission).await;

    logger
        .info_builder("Contact submission handled")
        .field("outcome", outcome.status.as_str())
        .field_i64("notifications", outcome.notifications.len() as i64)
        .emit();

    let reply = contact_response(&outcome, json, site);
    let body = start_response(
        response_out,
        reply.status,
        reply_headers(ctx, reply.content_type),
        logger,
    );
    write_all(body, reply.body, logger).await;

    reply.status
}

fn method_of(req: &IncomingRequest) -> Option<Method> {
    match req.method() {
        SpinMethod::Get => Some(Method::Get),
        SpinMethod::Head => Some(Method::Head),
        SpinMethod::Post => Some(Method::Post),
        SpinMethod::Put => Some(Method::Put),
        SpinMethod::Delete => Some(Method::Delete),
        SpinMethod::Patch => Some(Method::Patch),
        SpinMethod::Options => Some(Method::Options),
        SpinMethod::Other(name) => Method::parse(&name),
        _ => None,
    }
}

fn html_headers(ctx: &RequestContext, cache_control: &str) -> Vec<(String, Vec<u8>)> {
    vec![
        ("content-type".to_owned(), HTML_CONTENT_TYPE.into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
        ("cache-control".to_owned(), cache_control.into()),
    ]
}

/// Headers for a reply to a POST; never cached.
fn reply_headers(ctx: &RequestContext, content_type: &str) -> Vec<(String, Vec<u8>)> {
    vec![
        ("content-type".to_owned(), content_type.into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
        ("cache-control".to_owned(), "no-store".into()),
    ]
}

/// Send status and headers; returns the body to write into.
fn start_response(
    response_out: ResponseOutparam,
    status: StatusCode,
    headers: Vec<(String, Vec<u8>)>,
    logger: &StructuredLogger,
) -> impl Sink<Vec<u8>, Error = impl Display> + Unpin {
    let fields = match Fields::from_list(&headers) {
        Ok(fields) => fields,
        Err(e) => {
            logger
                .error_builder("Invalid response headers")
                .field("error", format!("{:?}", e))
                .emit();
            Fields::new()
        }
    };

    let response = OutgoingResponse::new(fields);
    if response.set_status_code(status.as_u16()).is_err() {
        logger
            .error_builder("Invalid status code")
            .field_i64("status", i64::from(status.as_u16()))
            .emit();
    }

    let body = response.take_body();
    response_out.set(response);
    body
}

async fn write_all<S, E>(mut body: S, bytes: Vec<u8>, logger: &StructuredLogger)
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    if let Err(e) = body.send(bytes).await {
        logger
            .error_builder("Failed to write response body")
            .field("error", e.to_string())
            .emit();
    }
}
