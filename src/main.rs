use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use lemur_xml::XmlParser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "large.xml".to_string());
    let xml = match fs::read_to_string(&path) {
        Ok(xml) => xml,
        Err(err) => {
            tracing::error!(%path, "cannot read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let now = Instant::now();
    let root = match XmlParser::new().parse(&xml) {
        Ok(root) => root,
        // the parser has already reported the failure
        Err(_) => return ExitCode::FAILURE,
    };
    println!("Elapsed for lemur_xml: {:.2?}", now.elapsed());
    println!("<{}> with {} children", root.name().unwrap_or_default(), root.num_children());

    // Bench against xmlparser
    let now = Instant::now();
    let mut tokens = 0usize;
    for token in xmlparser::Tokenizer::from(&xml[..]) {
        if let Err(err) = token {
            tracing::warn!("xmlparser stopped: {}", err);
            break;
        }
        tokens += 1;
    }
    println!("Elapsed for xmlparser: {:.2?} ({} tokens)", now.elapsed(), tokens);

    ExitCode::SUCCESS
}
