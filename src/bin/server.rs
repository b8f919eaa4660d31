//! HTTP boundary for the report builders.
//!
//! Exposes one POST route per report kind, maps a non-empty render result to
//! `200` with a PDF content type, and an empty result or render failure to
//! `500` with a report-specific message.

use std::error::Error;
use std::io::Read;

use clap::Parser;
use tiny_http::{Header, Method, Response, Server, StatusCode};

use analytics_pdf::fonts;
use analytics_pdf::reports::{kpi, materials, orders, time};

#[derive(Debug, Parser)]
#[command(name = "analytics-pdf-server", about = "PDF generation service")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

fn read_body(request: &mut tiny_http::Request) -> Result<String, String> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|err| format!("read body: {err}"))?;
    Ok(body)
}

/// Path component of a request target, without any query string.
fn route_path(url: &str) -> &str {
    match url.split_once('?') {
        Some((path, _)) => path,
        None => url,
    }
}

fn generate_for_route(url: &str, body: &str) -> Option<RouteResult> {
    let outcome = match route_path(url) {
        "/pdf/kpi-report" => RouteResult {
            error_message: "Empty KPI PDF generated",
            rendered: serde_json::from_str(body)
                .map_err(RouteError::BadRequest)
                .and_then(|payload| kpi::generate(&payload).map_err(RouteError::Render)),
        },
        "/pdf/orders" => RouteResult {
            error_message: "Empty Orders PDF generated",
            rendered: serde_json::from_str(body)
                .map_err(RouteError::BadRequest)
                .and_then(|payload| orders::generate(&payload).map_err(RouteError::Render)),
        },
        "/pdf/time" => RouteResult {
            error_message: "Empty PDF generated",
            rendered: serde_json::from_str(body)
                .map_err(RouteError::BadRequest)
                .and_then(|payload| time::generate(&payload).map_err(RouteError::Render)),
        },
        "/pdf/materials" => RouteResult {
            error_message: "Empty Materials PDF generated",
            rendered: serde_json::from_str(body)
                .map_err(RouteError::BadRequest)
                .and_then(|payload| materials::generate(&payload).map_err(RouteError::Render)),
        },
        _ => return None,
    };
    Some(outcome)
}

struct RouteResult {
    error_message: &'static str,
    rendered: Result<Vec<u8>, RouteError>,
}

enum RouteError {
    BadRequest(serde_json::Error),
    Render(genpdf::error::Error),
}

fn pdf_response(bytes: Vec<u8>) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_data(bytes);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/pdf"[..]) {
        response.add_header(header);
    }
    response
}

fn respond(request: tiny_http::Request, outcome: RouteResult) {
    let url = request.url().to_string();
    match outcome.rendered {
        Ok(bytes) if !bytes.is_empty() => {
            log::info!("{url} rendered {} bytes", bytes.len());
            let _ = request.respond(pdf_response(bytes));
        }
        Ok(_) => {
            log::error!("{url}: renderer produced no output");
            let _ = request.respond(
                Response::from_string(outcome.error_message).with_status_code(StatusCode(500)),
            );
        }
        Err(RouteError::BadRequest(err)) => {
            log::warn!("{url}: invalid payload: {err}");
            let _ = request.respond(
                Response::from_string(format!("Invalid payload: {err}"))
                    .with_status_code(StatusCode(400)),
            );
        }
        Err(RouteError::Render(err)) => {
            log::error!("{url}: render failed: {err}");
            let _ = request.respond(
                Response::from_string(outcome.error_message).with_status_code(StatusCode(500)),
            );
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    // Warm the font registry so a missing font directory fails at startup
    // instead of on the first request.
    fonts::shared_font_family()?;

    let addr = format!("{}:{}", args.bind, args.port);
    let server = Server::http(&addr).map_err(|err| format!("bind {addr}: {err}"))?;
    log::info!("PDF generation service listening on http://{addr}");

    for mut request in server.incoming_requests() {
        if *request.method() != Method::Post {
            let _ =
                request.respond(Response::from_string("POST only").with_status_code(StatusCode(405)));
            continue;
        }

        let body = match read_body(&mut request) {
            Ok(body) => body,
            Err(err) => {
                log::warn!("{}: {err}", request.url());
                let _ = request
                    .respond(Response::from_string(err).with_status_code(StatusCode(400)));
                continue;
            }
        };

        let route = request.url().to_string();
        match generate_for_route(&route, &body) {
            Some(outcome) => respond(request, outcome),
            None => {
                let _ = request
                    .respond(Response::from_string("not found").with_status_code(StatusCode(404)));
            }
        }
    }

    Ok(())
}
