use std::io::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use spimidx::core::config::Config;
use spimidx::searcher::Searcher;

/// Queries a disk-backed inverted index built by `spimidx-build`.
#[derive(Parser, Debug)]
#[command(name = "spimidx-search")]
struct Args {
    /// Path to a JSON config file. Falls back to built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Serve search results over HTTP instead of running a console REPL.
    #[arg(long)]
    webapp: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: failed to load config: {}", err);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let searcher = match Searcher::open(&config) {
        Ok(searcher) => searcher,
        Err(err) => {
            eprintln!("error: failed to open index: {}", err);
            std::process::exit(1);
        }
    };

    if args.webapp {
        run_webapp(searcher);
    } else {
        run_console(searcher);
    }
}

fn run_console(mut searcher: Searcher) {
    loop {
        print!("Input Query: ");
        let _ = std::io::stdout().flush();

        let mut query = String::new();
        if std::io::stdin().read_line(&mut query).is_err() {
            break;
        }
        let query = query.trim();
        if query.is_empty() {
            break;
        }

        let start = Instant::now();
        match searcher.search(query) {
            Ok(urls) => {
                println!("(Search Time: {:.4} seconds)", start.elapsed().as_secs_f64());
                for (rank, url) in urls.iter().enumerate() {
                    println!("{}: {}", rank + 1, url);
                }
            }
            Err(err) => eprintln!("error: {}", err),
        }
    }
}

fn run_webapp(mut searcher: Searcher) {
    let server = match tiny_http::Server::http("127.0.0.1:8080") {
        Ok(server) => server,
        Err(err) => {
            eprintln!("error: failed to bind 127.0.0.1:8080: {}", err);
            std::process::exit(1);
        }
    };
    log::info!("listening on http://127.0.0.1:8080 (GET /search?q=...)");

    for request in server.incoming_requests() {
        let query = query_param(request.url(), "q").unwrap_or_default();

        let body = if query.is_empty() {
            render_results_page(&query, &[], None)
        } else {
            let start = Instant::now();
            match searcher.search(&query) {
                Ok(urls) => render_results_page(&query, &urls, Some(start.elapsed().as_secs_f64())),
                Err(err) => {
                    log::warn!("search failed for {:?}: {}", query, err);
                    render_results_page(&query, &[], None)
                }
            }
        };

        let response = tiny_http::Response::from_string(body).with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]).unwrap(),
        );
        let _ = request.respond(response);
    }
}

/// Minimal result-page rendering. The original search engine renders a
/// Flask/Jinja `search.html` template with the same three values (query,
/// URLs, elapsed time); this is that template's content inlined, since the
/// HTTP layer itself is out of scope beyond serving `/search`.
fn render_results_page(query: &str, urls: &[String], elapsed_secs: Option<f64>) -> String {
    let mut body = String::from("<html><body>");
    if let Some(secs) = elapsed_secs {
        body.push_str(&format!("<p>Search Time: {:.4} seconds</p>", secs));
    }
    if urls.is_empty() {
        if !query.is_empty() {
            body.push_str("<p>No results.</p>");
        }
    } else {
        body.push_str("<ol>");
        for url in urls {
            let escaped = escape_html(url);
            body.push_str(&format!("<li><a href=\"{escaped}\">{escaped}</a></li>"));
        }
        body.push_str("</ol>");
    }
    body.push_str("</body></html>");
    body
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    for pair in query.split('&') {
        let (k, v) = pair.split_once('=')?;
        if k == key {
            return Some(v.replace('+', " "));
        }
    }
    None
}
