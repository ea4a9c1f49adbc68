use clap::{App, Arg};
use env_logger::Env;
use log::debug;

mod dispatch;
mod executor;
mod generate;
mod input;
mod lists;
mod probe;
mod report;
mod scanner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = App::new("verboten")
        .version("1.0")
        .about("Probes 40x-guarded URLs with request variants to find access-control bypasses")
        .arg(
            Arg::with_name("url")
                .short("u")
                .long("url")
                .takes_value(true)
                .validator(validate_url_prefix)
                .help("URL(s) to probe, comma separated"),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .takes_value(true)
                .help("Path to a file containing URLs, one per line"),
        )
        .arg(
            Arg::with_name("threads")
                .short("t")
                .long("threads")
                .takes_value(true)
                .default_value("4")
                .validator(validate_threads)
                .help("Requests in flight at once. Be gentle or get blocked."),
        )
        .arg(
            Arg::with_name("silent")
                .short("s")
                .long("silent")
                .help("Only print results in the success/redirect band"),
        )
        .arg(
            Arg::with_name("force")
                .long("force")
                .help("Probe every URL regardless of its initial status code"),
        )
        .get_matches();

    debug!("{:#?}", matches);

    let silent = matches.is_present("silent");
    let force = matches.is_present("force");
    let threads = matches.value_of("threads").unwrap().parse::<usize>()?;

    if !silent {
        report::banner();
    }

    let urls = input::read_urls(matches.value_of("url"), matches.value_of("file"))?;
    if urls.is_empty() {
        eprintln!("no URLs to probe; pipe them in or pass -u/--url or -f/--file");
        std::process::exit(1);
    }
    debug!("read {} url(s)", urls.len());

    let scanner = scanner::Scanner::new(lists::CandidateLists::builtin(), threads, silent, force)?;
    scanner.run(&urls).await;

    Ok(())
}

fn validate_url_prefix(val: String) -> Result<(), String> {
    for part in val.split(',') {
        let part = part.trim();
        if !part.starts_with("http://") && !part.starts_with("https://") {
            return Err(String::from(
                "every url needs to start with http:// or https://",
            ));
        }
    }
    Ok(())
}

fn validate_threads(val: String) -> Result<(), String> {
    match val.parse::<usize>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(String::from("threads needs to be a positive integer")),
    }
}
