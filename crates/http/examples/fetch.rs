//! Issues one GET request over a plain TCP stream and prints the response.
//!
//! Text bodies are printed as text, everything else as a hex/ASCII dump.
//!
//! Usage: `fetch [host] [port] [path]` (defaults: `localhost 80 /`)

use std::error::Error;
use std::net::TcpStream;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mono_http::protocol::{ContentType, HeaderField, HeaderList, RequestMessage, ResponseMessage};

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "localhost".to_owned());
    let port: u16 = args.next().map(|port| port.parse()).transpose()?.unwrap_or(80);
    let path = args.next().unwrap_or_else(|| "/".to_owned());

    let headers: HeaderList = [
        HeaderField::new("Host", format!("{host}:{port}")),
        HeaderField::new("Accept-Encoding", "gzip, deflate, br"),
    ]
    .into_iter()
    .collect();
    let request = RequestMessage::get(path, headers);

    info!(host = %host, port, path = request.path(), "connecting");
    let mut stream = TcpStream::connect((host.as_str(), port))?;
    request.write_to(&mut stream)?;

    let response = ResponseMessage::parse(&mut stream)?;
    info!(status = response.status_line(), len = response.body().len(), "received response");

    print_body(&response);
    Ok(())
}

fn print_body(response: &ResponseMessage) {
    let content_type = response.headers().value("Content-Type").map(ContentType::parse);
    match content_type {
        Some(Ok(parsed)) if parsed.media_type().starts_with("text/") => {
            if let Some(charset) = parsed.charset() {
                info!(charset, "text body");
            }
            println!("{}", String::from_utf8_lossy(response.body().as_bytes()));
        }
        _ => print!("{}", response.body().dump()),
    }
}
